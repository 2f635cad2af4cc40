use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike, Utc, Weekday};

use crate::core::primitives::unix_seconds_to_datetime;
use crate::core::{ContinuousScale, ScaleKind};

const SECOND: f64 = 1.0;
const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const WEEK: f64 = 604_800.0;
const MONTH: f64 = 2_592_000.0;
const YEAR: f64 = 31_536_000.0;

// Unix epoch is a Thursday; weeks start on Sunday 1970-01-04.
const WEEK_ORIGIN: f64 = 3.0 * DAY;

/// Calendar interval used to place time ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeInterval {
    Second(u32),
    Minute(u32),
    Hour(u32),
    Day(u32),
    Week,
    Month(u32),
}

impl TimeInterval {
    fn duration(self) -> f64 {
        match self {
            Self::Second(n) => SECOND * f64::from(n),
            Self::Minute(n) => MINUTE * f64::from(n),
            Self::Hour(n) => HOUR * f64::from(n),
            Self::Day(n) => DAY * f64::from(n),
            Self::Week => WEEK,
            Self::Month(n) => MONTH * f64::from(n),
        }
    }
}

const TIME_INTERVALS: [TimeInterval; 17] = [
    TimeInterval::Second(1),
    TimeInterval::Second(5),
    TimeInterval::Second(15),
    TimeInterval::Second(30),
    TimeInterval::Minute(1),
    TimeInterval::Minute(5),
    TimeInterval::Minute(15),
    TimeInterval::Minute(30),
    TimeInterval::Hour(1),
    TimeInterval::Hour(3),
    TimeInterval::Hour(6),
    TimeInterval::Hour(12),
    TimeInterval::Day(1),
    TimeInterval::Day(2),
    TimeInterval::Week,
    TimeInterval::Month(1),
    TimeInterval::Month(3),
];

impl ContinuousScale {
    /// Returns roughly `count` human-friendly tick values inside the domain,
    /// in ascending order.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain();
        let (start, stop) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        match self.kind() {
            ScaleKind::Linear | ScaleKind::Sqrt => linear_ticks(start, stop, count),
            ScaleKind::Time => time_ticks(start, stop, count),
        }
    }

    /// Formats a tick produced by `ticks(count)` for display.
    #[must_use]
    pub fn tick_label(self, value: f64, count: usize) -> String {
        match self.kind() {
            ScaleKind::Time => format_time_tick(value),
            ScaleKind::Linear | ScaleKind::Sqrt => {
                let (d0, d1) = self.domain();
                let step = tick_step(d0.min(d1), d0.max(d1), count).abs();
                format_linear_tick(value, step)
            }
        }
    }
}

fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scaled = 10f64.powf(-power) / factor;
        i1 = (start * scaled).round();
        i2 = (stop * scaled).round();
        if i1 / scaled < start {
            i1 += 1.0;
        }
        if i2 / scaled > stop {
            i2 -= 1.0;
        }
        inc = -scaled;
    } else {
        let scaled = 10f64.powf(power) * factor;
        i1 = (start / scaled).round();
        i2 = (stop / scaled).round();
        if i1 * scaled < start {
            i1 += 1.0;
        }
        if i2 * scaled > stop {
            i2 -= 1.0;
        }
        inc = scaled;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Signed tick increment: negative values encode `1 / step` for sub-unit steps.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).2
}

fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
        return 0.0;
    }
    let inc = tick_increment(start, stop, count);
    if inc < 0.0 { -1.0 / inc } else { inc }
}

fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let (i1, i2, inc) = tick_spec(start, stop, count as f64);
    if !(i2 >= i1) || !inc.is_finite() || inc == 0.0 {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    (0..n)
        .map(|i| {
            let index = i1 + i as f64;
            if inc < 0.0 { index / -inc } else { index * inc }
        })
        .collect()
}

fn time_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let target = (stop - start) / count as f64;
    let position = TIME_INTERVALS.partition_point(|interval| interval.duration() <= target);

    if position == TIME_INTERVALS.len() {
        let step = tick_step(start / YEAR, stop / YEAR, count).max(1.0);
        return year_ticks(start, stop, step.round() as i32);
    }
    if position == 0 {
        let step = tick_step(start, stop, count).max(1e-3);
        return linear_ticks_with_step(start, stop, step);
    }

    let lower = TIME_INTERVALS[position - 1];
    let upper = TIME_INTERVALS[position];
    let interval = if target / lower.duration() < upper.duration() / target {
        lower
    } else {
        upper
    };

    match interval {
        TimeInterval::Month(n) => month_ticks(start, stop, n),
        TimeInterval::Week => {
            linear_ticks_with_step(start - WEEK_ORIGIN, stop - WEEK_ORIGIN, WEEK)
                .into_iter()
                .map(|tick| tick + WEEK_ORIGIN)
                .collect()
        }
        fixed => linear_ticks_with_step(start, stop, fixed.duration()),
    }
}

fn linear_ticks_with_step(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let first = (start / step).ceil();
    let last = (stop / step).floor();
    if !(last >= first) {
        return Vec::new();
    }
    (0..=((last - first) as usize))
        .map(|i| (first + i as f64) * step)
        .collect()
}

fn month_ticks(start: f64, stop: f64, every: u32) -> Vec<f64> {
    let (Some(start_dt), Some(_)) = (
        unix_seconds_to_datetime(start),
        unix_seconds_to_datetime(stop),
    ) else {
        return Vec::new();
    };

    let mut year = start_dt.year();
    let mut month0 = start_dt.month0();
    let mut ticks = Vec::new();
    loop {
        let Some(tick) = month_start(year, month0) else {
            break;
        };
        if tick > stop {
            break;
        }
        if tick >= start && month0 % every == 0 {
            ticks.push(tick);
        }
        month0 += 1;
        if month0 == 12 {
            month0 = 0;
            year += 1;
        }
    }
    ticks
}

fn year_ticks(start: f64, stop: f64, every: i32) -> Vec<f64> {
    let (Some(start_dt), Some(stop_dt)) = (
        unix_seconds_to_datetime(start),
        unix_seconds_to_datetime(stop),
    ) else {
        return Vec::new();
    };
    let every = every.max(1);

    (start_dt.year()..=stop_dt.year())
        .filter(|year| year.rem_euclid(every) == 0)
        .filter_map(|year| month_start(year, 0))
        .filter(|tick| *tick >= start && *tick <= stop)
        .collect()
}

fn month_start(year: i32, month0: u32) -> Option<f64> {
    let date = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
    let time = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?);
    Some(time.timestamp() as f64)
}

/// Picks the coarsest calendar unit the tick is not aligned to and formats
/// with the unit below it.
fn format_time_tick(value: f64) -> String {
    let Some(time) = unix_seconds_to_datetime(value) else {
        return String::new();
    };

    let pattern = if time.timestamp_subsec_millis() != 0 {
        ".%3f"
    } else if time.second() != 0 {
        ":%S"
    } else if time.minute() != 0 {
        "%I:%M"
    } else if time.hour() != 0 {
        "%I %p"
    } else if time.day() != 1 {
        if is_week_start(time) { "%b %d" } else { "%a %d" }
    } else if time.month() != 1 {
        "%B"
    } else {
        "%Y"
    };

    if pattern == ".%3f" {
        return format!(".{:03}", time.timestamp_subsec_millis());
    }
    time.format(pattern).to_string()
}

fn is_week_start(time: DateTime<Utc>) -> bool {
    time.weekday() == Weekday::Sun
}

fn format_linear_tick(value: f64, step: f64) -> String {
    let precision = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let rendered = format!("{:.*}", precision, value + 0.0);
    group_thousands(&rendered)
}

fn group_thousands(rendered: &str) -> String {
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(rendered.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let mut out = String::from(sign);
    out.push_str(&grouped);
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
