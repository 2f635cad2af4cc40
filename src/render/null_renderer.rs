use crate::error::ChartResult;
use crate::render::{HorizonScene, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates the scene so invalid geometry surfaces without a
/// real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_row_count: usize,
    pub last_instance_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &HorizonScene) -> ChartResult<()> {
        scene.validate()?;
        self.last_row_count = scene.rows.len();
        self.last_instance_count = scene.instance_count();
        self.last_text_count =
            scene.rows.len() + scene.axis.as_ref().map_or(0, |axis| axis.ticks.len());
        Ok(())
    }
}
