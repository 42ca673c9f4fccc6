use crate::data::{EdgeId, GraphData, NodeId, RelationKind};
use crate::locale::Translations;

/// Progressive disclosure rank of cards: `Batch12` shows batches 1 and 2,
/// `Batch12345` shows everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeBatch {
    Batch1,
    Batch12,
    Batch123,
    Batch1234,
    #[default]
    Batch12345,
}

impl NodeBatch {
    pub const ALL: [NodeBatch; 5] = [
        NodeBatch::Batch1,
        NodeBatch::Batch12,
        NodeBatch::Batch123,
        NodeBatch::Batch1234,
        NodeBatch::Batch12345,
    ];

    /// Highest batch rank still displayed.
    pub fn limit(self) -> u32 {
        match self {
            NodeBatch::Batch1 => 1,
            NodeBatch::Batch12 => 2,
            NodeBatch::Batch123 => 3,
            NodeBatch::Batch1234 => 4,
            NodeBatch::Batch12345 => 5,
        }
    }

    /// Key of the batch label in the free-form translation namespace.
    pub fn ui_key(self) -> &'static str {
        match self {
            NodeBatch::Batch1 => "selector.filters.batch1",
            NodeBatch::Batch12 => "selector.filters.batch12",
            NodeBatch::Batch123 => "selector.filters.batch123",
            NodeBatch::Batch1234 => "selector.filters.batch1234",
            NodeBatch::Batch12345 => "selector.filters.batch12345",
        }
    }
}

/// Per-kind visibility of relations. Defaults to major relations only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelationFilter([bool; 4]);

impl Default for RelationFilter {
    fn default() -> Self {
        let mut filter = Self([false; 4]);
        filter.set_visible(RelationKind::Major, true);
        filter
    }
}

impl RelationFilter {
    fn slot(kind: RelationKind) -> usize {
        match kind {
            RelationKind::Major => 0,
            RelationKind::Minor => 1,
            RelationKind::False => 2,
            RelationKind::Simplified => 3,
        }
    }

    pub fn visible(&self, kind: RelationKind) -> bool {
        self.0[Self::slot(kind)]
    }

    pub fn set_visible(&mut self, kind: RelationKind, visible: bool) {
        self.0[Self::slot(kind)] = visible;
    }

    /// Number of kinds currently displayed.
    pub fn visible_count(&self) -> usize {
        self.0.iter().filter(|v| **v).count()
    }
}

/// What the user currently has selected. At most one of a card or a relation;
/// the variants make the exclusivity structural.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Card(NodeId),
    Relation(EdgeId),
}

impl Selection {
    pub fn card_id(&self) -> Option<&NodeId> {
        match self {
            Selection::Card(id) => Some(id),
            _ => None,
        }
    }

    pub fn relation_id(&self) -> Option<&EdgeId> {
        match self {
            Selection::Relation(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }
}

/// Display filters and modes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayState {
    /// Quiz sessions start with every card hidden; fixed at startup.
    pub quiz: bool,
    pub batch: NodeBatch,
    pub relations: RelationFilter,
    /// Whether the more-info modal is open.
    pub more_info: bool,
}

/// Locale region of the state tree: empty at init, populated once by the
/// translations load, locale switched only through the reducer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct I18nState {
    pub locale: Option<String>,
    pub translations: Translations,
}

/// The whole application state. Only [`crate::reducer::reduce`] produces new
/// values of this.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub data: GraphData,
    pub display: DisplayState,
    pub selection: Selection,
    pub i18n: I18nState,
}

impl AppState {
    pub fn new(quiz: bool) -> Self {
        Self {
            display: DisplayState {
                quiz,
                ..DisplayState::default()
            },
            ..Self::default()
        }
    }
}
