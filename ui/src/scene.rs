use eframe::egui;
use malsim_core::{NodeId, RenderAdapter};
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
pub struct SceneNode {
    /// Top-left corner in surface coordinates.
    pub pos: egui::Pos2,
    pub infected: bool,
}

/// What the canvas draws. Filled by the engine through `RenderAdapter`.
#[derive(Default, Debug)]
pub struct CanvasScene {
    pub nodes: BTreeMap<NodeId, SceneNode>,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl CanvasScene {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl RenderAdapter for CanvasScene {
    fn place_node(&mut self, id: NodeId, x: f32, y: f32) {
        self.nodes.insert(
            id,
            SceneNode {
                pos: egui::pos2(x, y),
                infected: false,
            },
        );
    }

    fn draw_edge(&mut self, from: NodeId, to: NodeId) {
        self.edges.push((from, to));
    }

    fn set_node_infected(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.infected = true;
        }
    }

    fn clear_network(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }
}
