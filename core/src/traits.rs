use crate::status_log::Severity;

pub type NodeId = u32;

/// Drawing surface the engine pushes network state into.
///
/// Implementations own every visual handle; nothing they do feeds back into
/// the simulation outcome.
pub trait RenderAdapter {
    fn place_node(&mut self, id: NodeId, x: f32, y: f32);
    fn draw_edge(&mut self, from: NodeId, to: NodeId);
    fn set_node_infected(&mut self, id: NodeId);
    fn clear_network(&mut self);
}

/// Receiver for timestamped status lines.
pub trait LogSink {
    fn append_log_line(&mut self, text: String, severity: Severity);
    fn clear_log(&mut self);
    /// Sinks without a retention limit ignore this.
    fn set_capacity(&mut self, _max_entries: usize) {}
}

/// Adapter for headless runs where nothing is drawn.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl RenderAdapter for NullRenderer {
    fn place_node(&mut self, _id: NodeId, _x: f32, _y: f32) {}
    fn draw_edge(&mut self, _from: NodeId, _to: NodeId) {}
    fn set_node_infected(&mut self, _id: NodeId) {}
    fn clear_network(&mut self) {}
}
