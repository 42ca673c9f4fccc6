use crate::action::Action;
use crate::data::GraphData;
use crate::state::{AppState, Selection};

/// The sole place state transitions are defined.
///
/// Pure and total: identical `(state, action)` pairs always yield identical
/// output, every action yields a fresh snapshot, and notifications that only
/// concern the middleware (`SetData`, `UpdateData`) fall through as
/// structural no-ops.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    let mut next = state.clone();

    match action {
        Action::LoadData(bundle) => {
            next.data = GraphData::from_bundle(bundle.clone());
        }

        Action::LoadTranslations(translations) => {
            next.i18n.translations = translations.clone();
        }

        Action::SetLocale(lang) => {
            next.i18n.locale = Some(lang.clone());
        }

        Action::DisplayBatch(batch) => {
            next.display.batch = *batch;
            // Switching batches may hide the selected card; a selected
            // relation survives, as both its endpoints stay referenced.
            if matches!(next.selection, Selection::Card(_)) {
                next.selection = Selection::None;
            }
        }

        Action::DisplayRelation(kind, checked) => {
            next.display.relations.set_visible(*kind, *checked);
        }

        Action::DisplayMoreInfo(visible) => {
            next.display.more_info = *visible;
        }

        Action::SelectNode(id) => {
            next.selection = Selection::Card(id.clone());
        }

        Action::SelectEdge(id) => {
            next.selection = Selection::Relation(id.clone());
        }

        Action::UnselectAll => {
            next.selection = Selection::None;
        }

        Action::SetData | Action::UpdateData => {}
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CardNode, GraphBundle, RelationKind};
    use crate::state::NodeBatch;

    fn bundle(ids: &[&str]) -> GraphBundle {
        GraphBundle {
            nodes: ids
                .iter()
                .map(|id| CardNode {
                    id: (*id).into(),
                    batch: 1,
                    x: None,
                    y: None,
                })
                .collect(),
            edges: Vec::new(),
        }
    }

    #[test]
    fn selection_is_mutually_exclusive_in_any_order() {
        let state = AppState::default();

        let after_node = reduce(&state, &Action::SelectNode("14".into()));
        let after_edge = reduce(&after_node, &Action::SelectEdge("3_7".into()));
        assert_eq!(after_edge.selection.relation_id(), Some(&"3_7".into()));
        assert_eq!(after_edge.selection.card_id(), None);

        let back_to_node = reduce(&after_edge, &Action::SelectNode("2".into()));
        assert_eq!(back_to_node.selection.card_id(), Some(&"2".into()));
        assert_eq!(back_to_node.selection.relation_id(), None);
    }

    #[test]
    fn batch_change_clears_card_selection() {
        let mut state = AppState::default();
        state.selection = Selection::Card("14".into());

        let next = reduce(&state, &Action::DisplayBatch(NodeBatch::Batch12));
        assert_eq!(next.display.batch, NodeBatch::Batch12);
        assert!(next.selection.is_none());
    }

    #[test]
    fn batch_change_keeps_relation_selection() {
        let mut state = AppState::default();
        state.selection = Selection::Relation("3_7".into());

        let next = reduce(&state, &Action::DisplayBatch(NodeBatch::Batch1));
        assert_eq!(next.selection.relation_id(), Some(&"3_7".into()));
    }

    #[test]
    fn relation_toggle_touches_exactly_one_kind() {
        let state = AppState::default();

        let next = reduce(&state, &Action::DisplayRelation(RelationKind::Minor, true));
        assert!(next.display.relations.visible(RelationKind::Major));
        assert!(next.display.relations.visible(RelationKind::Minor));
        assert!(!next.display.relations.visible(RelationKind::False));
        assert_eq!(next.selection, state.selection);
    }

    #[test]
    fn load_replaces_data_wholesale() {
        let state = reduce(&AppState::default(), &Action::LoadData(bundle(&["1", "2"])));
        assert!(state.data.contains_card(&"1".into()));

        let reloaded = reduce(&state, &Action::LoadData(bundle(&["3"])));
        assert!(!reloaded.data.contains_card(&"1".into()));
        assert!(reloaded.data.contains_card(&"3".into()));
    }

    #[test]
    fn middleware_notifications_are_structural_noops() {
        let mut state = AppState::default();
        state.selection = Selection::Card("14".into());

        let after_set = reduce(&state, &Action::SetData);
        assert_eq!(after_set.selection, state.selection);
        assert_eq!(after_set.display, state.display);

        let after_update = reduce(&state, &Action::UpdateData);
        assert_eq!(after_update.selection, state.selection);
    }

    #[test]
    fn unselect_clears_both_kinds_of_selection() {
        let mut state = AppState::default();
        state.selection = Selection::Relation("3_7".into());
        assert!(reduce(&state, &Action::UnselectAll).selection.is_none());

        state.selection = Selection::Card("14".into());
        assert!(reduce(&state, &Action::UnselectAll).selection.is_none());
    }
}
