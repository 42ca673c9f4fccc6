use std::collections::HashMap;

use egui::{Color32, Pos2};

use crate::data::{EdgeId, NodeId, RelationKind};
use crate::state::DisplayState;

/// Size of a card rendered as an unrevealed dot.
pub const HIDDEN_NODE_SIZE: f32 = 10.;
/// Size of a revealed card.
pub const VISIBLE_NODE_SIZE: f32 = 25.;

/// Blue of simplified relations.
pub const SIMPLIFIED_BLUE: Color32 = Color32::from_rgb(0x20, 0x9c, 0xee);

/// Stroke color of a relation on the canvas, by kind.
pub fn relation_color(kind: RelationKind) -> Color32 {
    match kind {
        RelationKind::Major => Color32::GREEN,
        RelationKind::Minor => Color32::ORANGE,
        RelationKind::False => Color32::RED,
        RelationKind::Simplified => SIMPLIFIED_BLUE,
    }
}

/// How a card is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeShape {
    /// Small unlabeled dot, the unrevealed quiz look.
    Dot,
    /// The card face.
    Image,
}

/// A card as the rendering widget sees it.
#[derive(Clone, Debug, PartialEq)]
pub struct MirrorNode {
    pub id: NodeId,
    pub batch: u32,
    /// Revealed flag. Unrevealed cards still render, as dots.
    pub visible: bool,
    pub shape: NodeShape,
    pub size: f32,
    pub label: Option<String>,
    /// Locale-dependent card face path.
    pub image: Option<String>,
    pub label_highlight_bold: bool,
    pub font_background: Option<Color32>,
    /// Fixed canvas position when the bundle provides one.
    pub position: Option<Pos2>,
}

impl MirrorNode {
    /// Rendering attributes of an unrevealed card.
    pub fn apply_hidden_style(&mut self) {
        self.visible = false;
        self.shape = NodeShape::Dot;
        self.size = HIDDEN_NODE_SIZE;
        self.label = None;
    }

    /// Rendering attributes of a revealed card. The label is locale work and
    /// stays with the caller.
    pub fn apply_visible_style(&mut self) {
        self.visible = true;
        self.shape = NodeShape::Image;
        self.size = VISIBLE_NODE_SIZE;
    }
}

/// A relation as the rendering widget sees it.
#[derive(Clone, Debug, PartialEq)]
pub struct MirrorEdge {
    pub id: EdgeId,
    pub relation: RelationKind,
    /// Arrow head on the effect end.
    pub arrows_to: bool,
    pub color: Color32,
}

/// Derived, eventually-consistent copy of the loaded graph annotated with
/// rendering attributes.
///
/// Owned by the store, written exclusively by the synchronization middleware,
/// never read by the reducer. Rebuilt in full when graph data loads and
/// patched incrementally afterwards; the state tree stays authoritative.
#[derive(Clone, Debug, Default)]
pub struct MirrorData {
    nodes: HashMap<NodeId, MirrorNode>,
    edges: HashMap<EdgeId, MirrorEdge>,
}

impl MirrorData {
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    pub fn insert_node(&mut self, node: MirrorNode) {
        self.nodes.insert(node.id.clone(), node);
    }

    pub fn insert_edge(&mut self, edge: MirrorEdge) {
        self.edges.insert(edge.id.clone(), edge);
    }

    pub fn node(&self, id: &NodeId) -> Option<&MirrorNode> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut MirrorNode> {
        self.nodes.get_mut(id)
    }

    pub fn edge(&self, id: &EdgeId) -> Option<&MirrorEdge> {
        self.edges.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &MirrorNode> {
        self.nodes.values()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut MirrorNode> {
        self.nodes.values_mut()
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes.keys().cloned().collect();
        ids.sort_unstable();
        ids
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Snapshot of the cards passing the batch filter: a card is shown while
    /// its batch rank does not exceed the selected threshold.
    pub fn visible_nodes(&self, display: &DisplayState) -> Vec<MirrorNode> {
        let limit = display.batch.limit();
        let mut nodes: Vec<MirrorNode> = self
            .nodes
            .values()
            .filter(|n| n.batch <= limit)
            .cloned()
            .collect();
        nodes.sort_unstable_by(|a, b| a.id.cmp(&b.id));
        nodes
    }

    /// Snapshot of the relations whose kind is currently displayed.
    pub fn visible_edges(&self, display: &DisplayState) -> Vec<MirrorEdge> {
        let mut edges: Vec<MirrorEdge> = self
            .edges
            .values()
            .filter(|e| display.relations.visible(e.relation))
            .cloned()
            .collect();
        edges.sort_unstable_by(|a, b| a.id.cmp(&b.id));
        edges
    }
}
