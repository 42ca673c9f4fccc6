use crate::data::{EdgeId, GraphBundle, NodeId, RelationKind};
use crate::locale::Translations;
use crate::state::NodeBatch;

/// Everything that can happen to the application state.
///
/// User interactions and startup notifications both go through this
/// vocabulary; the reducer defines the transition for each variant and the
/// synchronization middleware the matching widget side effects.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Replace the loaded graph wholesale with a freshly parsed bundle.
    LoadData(GraphBundle),
    /// Rebuild the mirrored widget dataset from the loaded graph.
    SetData,
    /// Re-apply locale-dependent labels and images to the mirrored dataset.
    UpdateData,
    /// Replace the translation bundles.
    LoadTranslations(Translations),
    /// Switch the current language.
    SetLocale(String),
    /// Change the card batch threshold.
    DisplayBatch(NodeBatch),
    /// Show or hide one relation kind.
    DisplayRelation(RelationKind, bool),
    /// Open or close the more-info modal.
    DisplayMoreInfo(bool),
    /// Select a card.
    SelectNode(NodeId),
    /// Select a relation.
    SelectEdge(EdgeId),
    /// Clear the selection.
    UnselectAll,
}
