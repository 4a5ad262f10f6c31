use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::Surface;
use crate::traits::RenderAdapter;
use crate::NodeId;

/// Outer footprint reserved for each node when placing it on the surface.
pub const NODE_FOOTPRINT: f32 = 70.0;
/// Gap kept between the surface edge and any node.
pub const NODE_INSET: f32 = 10.0;
/// Drawn size of a node; always smaller than the footprint.
pub const NODE_SIZE: f32 = 55.0;

pub const MIN_EDGES_PER_NODE: usize = 2;
pub const MAX_EDGES_PER_NODE: usize = 4;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    /// Top-left corner on the surface.
    pub x: f32,
    pub y: f32,
    pub infected: bool,
}

impl Node {
    pub fn center(&self) -> (f32, f32) {
        (self.x + NODE_SIZE / 2.0, self.y + NODE_SIZE / 2.0)
    }
}

/// An undirected link. `from` is the node that drew it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    pub fn key(&self) -> (NodeId, NodeId) {
        canonical_key(self.from, self.to)
    }
}

pub fn canonical_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Nodes and their links for one simulation run.
///
/// Node ids are `0..node_count` and double as indices into `nodes`. Edges are
/// decorative: infection never consults them.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NetworkGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    infected_count: usize,
}

impl NetworkGraph {
    /// Places `node_count` nodes inside `surface` and links each one to 2..=4
    /// random targets. A draw that lands on the node itself is dropped, so a
    /// node may end up with a single edge of its own. Duplicates are kept.
    pub fn build<R: Rng + ?Sized>(node_count: usize, surface: Surface, rng: &mut R) -> Self {
        assert!(node_count > 0, "network needs at least one node");

        let span_x = (surface.width - NODE_FOOTPRINT).max(0.0);
        let span_y = (surface.height - NODE_FOOTPRINT).max(0.0);

        let nodes: Vec<Node> = (0..node_count)
            .map(|i| Node {
                id: i as NodeId,
                x: rng.gen::<f32>() * span_x + NODE_INSET,
                y: rng.gen::<f32>() * span_y + NODE_INSET,
                infected: false,
            })
            .collect();

        let mut edges = Vec::with_capacity(node_count * MAX_EDGES_PER_NODE);
        for i in 0..node_count {
            let connect_count = rng.gen_range(MIN_EDGES_PER_NODE..=MAX_EDGES_PER_NODE);
            let mut drawn = 0;
            for _ in 0..connect_count {
                let target = rng.gen_range(0..node_count);
                if target != i {
                    edges.push(Edge {
                        from: i as NodeId,
                        to: target as NodeId,
                    });
                    drawn += 1;
                }
            }
            // Every draw hit the node itself: link it to one other node so it
            // is never left without an edge of its own.
            if drawn == 0 && node_count > 1 {
                let mut target = rng.gen_range(0..node_count - 1);
                if target >= i {
                    target += 1;
                }
                edges.push(Edge {
                    from: i as NodeId,
                    to: target as NodeId,
                });
            }
        }

        Self {
            nodes,
            edges,
            infected_count: 0,
        }
    }

    /// Replays placement and links onto a freshly cleared adapter.
    pub fn render_into(&self, render: &mut dyn RenderAdapter) {
        render.clear_network();
        for node in &self.nodes {
            render.place_node(node.id, node.x, node.y);
        }
        for edge in &self.edges {
            render.draw_edge(edge.from, edge.to);
        }
    }

    /// Returns `true` only when the node flips from clean to infected.
    pub fn mark_infected(&mut self, id: NodeId) -> bool {
        let node = self.node_mut(id);
        if node.infected {
            return false;
        }
        node.infected = true;
        self.infected_count += 1;
        true
    }

    pub fn is_infected(&self, id: NodeId) -> bool {
        self.node(id).infected
    }

    pub fn is_fully_infected(&self) -> bool {
        self.infected_count == self.nodes.len()
    }

    pub fn uninfected_node_ids(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| !n.infected)
            .map(|n| n.id)
            .collect()
    }

    pub fn infected_count(&self) -> usize {
        self.infected_count
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges drawn by `id`.
    pub fn out_degree(&self, id: NodeId) -> usize {
        self.edges.iter().filter(|e| e.from == id).count()
    }

    /// Percentage of nodes still clean, rounded half up.
    pub fn integrity(&self) -> u32 {
        integrity_percent(self.infected_count, self.nodes.len())
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.nodes
            .get(id as usize)
            .unwrap_or_else(|| panic!("node id {} out of range 0..{}", id, self.nodes.len()))
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id as usize)
            .unwrap_or_else(|| panic!("node id {} out of range 0..{}", id, len))
    }
}

pub fn integrity_percent(infected: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    ((1.0 - infected as f64 / total as f64) * 100.0).round() as u32
}
