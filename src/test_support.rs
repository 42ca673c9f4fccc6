use crate::data::{EdgeId, NodeId};
use crate::mirror::{MirrorEdge, MirrorNode};
use crate::network::{AnimOptions, NetworkView};

/// One call observed on the widget boundary.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Command {
    SetData {
        nodes: Vec<NodeId>,
        edges: Vec<EdgeId>,
    },
    SelectNodes(Vec<NodeId>),
    Focus {
        id: NodeId,
        scale: f32,
    },
    Fit(Option<Vec<NodeId>>),
    SetSize(f32, f32),
}

/// Widget double recording every call for assertions.
#[derive(Default)]
pub(crate) struct RecordingNetwork {
    pub commands: Vec<Command>,
}

impl NetworkView for RecordingNetwork {
    fn set_data(&mut self, nodes: Vec<MirrorNode>, edges: Vec<MirrorEdge>) {
        self.commands.push(Command::SetData {
            nodes: nodes.into_iter().map(|n| n.id).collect(),
            edges: edges.into_iter().map(|e| e.id).collect(),
        });
    }

    fn select_nodes(&mut self, ids: &[NodeId]) {
        self.commands.push(Command::SelectNodes(ids.to_vec()));
    }

    fn focus(&mut self, id: &NodeId, scale: f32, _anim: &AnimOptions) {
        self.commands.push(Command::Focus {
            id: id.clone(),
            scale,
        });
    }

    fn fit(&mut self, nodes: Option<&[NodeId]>, _anim: &AnimOptions) {
        self.commands.push(Command::Fit(nodes.map(<[NodeId]>::to_vec)));
    }

    fn set_size(&mut self, width: f32, height: f32) {
        self.commands.push(Command::SetSize(width, height));
    }
}
