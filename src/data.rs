use std::collections::{BTreeSet, HashMap};
use std::fmt;

use log::warn;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};

/// Separator between the origin and effect parts of an edge identifier.
pub const EDGE_ID_SEPARATOR: char = '_';

/// Identifier of a card. Card identifiers never contain the edge id separator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier of a relation, always of the form `"<origin>_<effect>"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub String);

impl EdgeId {
    /// Builds the identifier of the relation going from `origin` to `effect`.
    pub fn between(origin: &NodeId, effect: &NodeId) -> Self {
        Self(format!("{origin}{EDGE_ID_SEPARATOR}{effect}"))
    }

    /// Splits the identifier back into its endpoints. Exact inverse of
    /// [`EdgeId::between`]; `None` when the identifier is malformed.
    pub fn endpoints(&self) -> Option<(NodeId, NodeId)> {
        let (origin, effect) = self.0.split_once(EDGE_ID_SEPARATOR)?;
        if origin.is_empty() || effect.is_empty() {
            return None;
        }
        Some((NodeId(origin.to_string()), NodeId(effect.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for EdgeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Strength/validity category of a causal relation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Major,
    Minor,
    False,
    Simplified,
}

impl RelationKind {
    /// All kinds, in wire order.
    pub const ALL: [RelationKind; 4] = [
        RelationKind::Major,
        RelationKind::Minor,
        RelationKind::False,
        RelationKind::Simplified,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::Major => "major",
            RelationKind::Minor => "minor",
            RelationKind::False => "false",
            RelationKind::Simplified => "simplified",
        }
    }
}

/// A card of the diagram as it appears in the graph bundle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardNode {
    pub id: NodeId,
    /// Progressive disclosure rank, a positive integer.
    pub batch: u32,
    /// Fixed canvas position; the viewer runs without physics.
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: Option<f32>,
}

/// A causal relation between two cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub id: EdgeId,
    pub relation: RelationKind,
}

impl Relation {
    pub fn kind(&self) -> RelationKind {
        self.relation
    }
}

/// Wire model of the graph content file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphBundle {
    pub nodes: Vec<CardNode>,
    pub edges: Vec<Relation>,
}

/// The loaded diagram. Replaced wholesale on every load, never merged.
///
/// Cards and relations live in a [`StableGraph`]; identifier lookups go
/// through side maps so the rest of the crate only ever speaks in ids.
#[derive(Clone, Debug, Default)]
pub struct GraphData {
    g: StableGraph<CardNode, Relation, Directed>,
    nodes_by_id: HashMap<NodeId, NodeIndex>,
    edges_by_id: HashMap<EdgeId, EdgeIndex>,
}

impl GraphData {
    /// Builds the diagram from a freshly parsed bundle.
    ///
    /// Relations with a malformed identifier or an endpoint missing from the
    /// node list are skipped with a warning; a bad relation never takes the
    /// viewer down.
    pub fn from_bundle(bundle: GraphBundle) -> Self {
        let mut g = StableGraph::default();
        let mut nodes_by_id = HashMap::with_capacity(bundle.nodes.len());
        let mut edges_by_id = HashMap::with_capacity(bundle.edges.len());

        for card in bundle.nodes {
            let id = card.id.clone();
            let idx = g.add_node(card);
            nodes_by_id.insert(id, idx);
        }

        for relation in bundle.edges {
            let Some((origin, effect)) = relation.id.endpoints() else {
                warn!("skipping relation with malformed id: {}", relation.id);
                continue;
            };
            let (Some(&from), Some(&to)) = (nodes_by_id.get(&origin), nodes_by_id.get(&effect))
            else {
                warn!("skipping relation {} with unknown endpoint", relation.id);
                continue;
            };
            let id = relation.id.clone();
            let idx = g.add_edge(from, to, relation);
            edges_by_id.insert(id, idx);
        }

        Self {
            g,
            nodes_by_id,
            edges_by_id,
        }
    }

    pub fn card(&self, id: &NodeId) -> Option<&CardNode> {
        self.nodes_by_id.get(id).and_then(|idx| self.g.node_weight(*idx))
    }

    pub fn contains_card(&self, id: &NodeId) -> bool {
        self.nodes_by_id.contains_key(id)
    }

    pub fn contains_relation(&self, id: &EdgeId) -> bool {
        self.edges_by_id.contains_key(id)
    }

    /// Cards related to `id` in the given direction through relations of the
    /// given kind, as a sorted duplicate-free set.
    ///
    /// `Direction::Incoming` yields origins of the card, `Direction::Outgoing`
    /// its effects. Unknown ids yield the empty set.
    pub fn related_cards(
        &self,
        id: &NodeId,
        direction: Direction,
        kind: RelationKind,
    ) -> Vec<NodeId> {
        let Some(&idx) = self.nodes_by_id.get(id) else {
            return Vec::new();
        };

        let related: BTreeSet<NodeId> = self
            .g
            .edges_directed(idx, direction)
            .filter(|e| e.weight().kind() == kind)
            .filter_map(|e| {
                let other = match direction {
                    Direction::Incoming => e.source(),
                    Direction::Outgoing => e.target(),
                };
                self.g.node_weight(other).map(|card| card.id.clone())
            })
            .collect();

        related.into_iter().collect()
    }

    pub fn cards(&self) -> impl Iterator<Item = &CardNode> {
        self.g.node_weights()
    }

    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.g.edge_weights()
    }

    pub fn card_count(&self) -> usize {
        self.g.node_count()
    }

    pub fn relation_count(&self) -> usize {
        self.g.edge_count()
    }
}
