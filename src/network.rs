use crate::data::{EdgeId, NodeId};
use crate::mirror::{MirrorEdge, MirrorNode};

/// Camera animation easing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    EaseInOutQuad,
}

/// Options for animated camera moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimOptions {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Default for AnimOptions {
    fn default() -> Self {
        Self {
            duration_ms: 600,
            easing: Easing::EaseInOutQuad,
        }
    }
}

/// The consumed surface of the external rendering widget.
///
/// The core pushes filtered snapshots and camera instructions through this
/// boundary and never depends on how the widget lays out, hit-tests or draws
/// its content. Everything here is fire-and-forget; a widget is free to
/// animate, coalesce or ignore calls.
pub trait NetworkView {
    /// Replace the widget's dataset with a filtered snapshot.
    fn set_data(&mut self, nodes: Vec<MirrorNode>, edges: Vec<MirrorEdge>);

    /// Mark the given cards as selected.
    fn select_nodes(&mut self, ids: &[NodeId]);

    /// Center the camera on one card at the given zoom scale.
    fn focus(&mut self, id: &NodeId, scale: f32, anim: &AnimOptions);

    /// Frame the given cards, or all visible content when `None`.
    fn fit(&mut self, nodes: Option<&[NodeId]>, anim: &AnimOptions);

    /// Track the viewport size.
    fn set_size(&mut self, width: f32, height: f32);

    /// Endpoints of a relation. The identifier encodes them, so widgets get
    /// this for free.
    fn connected_nodes(&self, edge_id: &EdgeId) -> Option<(NodeId, NodeId)> {
        edge_id.endpoints()
    }
}
