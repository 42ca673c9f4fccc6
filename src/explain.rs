use petgraph::Direction;

use crate::data::{EdgeId, NodeId, RelationKind};
use crate::state::{AppState, RelationFilter, Selection};

/// Color class of a related-card entry in the explanation panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelColor {
    /// High-contrast color used when a single relation kind is displayed.
    Neutral,
    Success,
    Warning,
    Danger,
    Info,
}

/// Fixed color class of a relation kind.
pub fn kind_color(kind: RelationKind) -> LabelColor {
    match kind {
        RelationKind::Major => LabelColor::Success,
        RelationKind::Minor => LabelColor::Warning,
        RelationKind::False => LabelColor::Danger,
        RelationKind::Simplified => LabelColor::Info,
    }
}

/// Resolves the color of an entry of the given kind under the current
/// filters: with exactly one kind displayed everything renders neutral for
/// readability, otherwise each kind keeps its own color.
pub fn resolve_color(filters: &RelationFilter, kind: RelationKind) -> LabelColor {
    if filters.visible_count() == 1 {
        LabelColor::Neutral
    } else {
        kind_color(kind)
    }
}

/// A related card in an origins or effects column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardRef {
    pub id: NodeId,
    pub color: LabelColor,
}

/// A selected relation with its parsed endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationRef {
    pub id: EdgeId,
    pub origin: NodeId,
    pub effect: NodeId,
}

/// View model of the explanation panel. Empty when nothing (or something no
/// longer loaded) is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Explanation {
    /// Selected card; its title/info texts are looked up by this id.
    pub card: Option<NodeId>,
    /// Selected relation; its info text is looked up by this id.
    pub relation: Option<RelationRef>,
    pub origins: Vec<CardRef>,
    pub effects: Vec<CardRef>,
}

impl Explanation {
    pub fn is_empty(&self) -> bool {
        self.card.is_none() && self.relation.is_none()
    }
}

/// Computes the explanation view model for the current selection. Pure and
/// cheap; recomputed on every render.
pub fn explanation(state: &AppState) -> Explanation {
    match &state.selection {
        Selection::None => Explanation::default(),
        Selection::Card(id) => card_explanation(state, id),
        Selection::Relation(id) => relation_explanation(id),
    }
}

/// Origins and effects of a card, flattened across the displayed relation
/// kinds in wire order and annotated with resolved colors. A card missing
/// from the loaded data degrades to the empty placeholder.
fn card_explanation(state: &AppState, id: &NodeId) -> Explanation {
    if !state.data.contains_card(id) {
        return Explanation::default();
    }

    let filters = &state.display.relations;
    let mut origins = Vec::new();
    let mut effects = Vec::new();

    for kind in RelationKind::ALL {
        if !filters.visible(kind) {
            continue;
        }
        let color = resolve_color(filters, kind);
        for origin in state.data.related_cards(id, Direction::Incoming, kind) {
            origins.push(CardRef { id: origin, color });
        }
        for effect in state.data.related_cards(id, Direction::Outgoing, kind) {
            effects.push(CardRef { id: effect, color });
        }
    }

    Explanation {
        card: Some(id.clone()),
        relation: None,
        origins,
        effects,
    }
}

/// Endpoints of a selected relation as singleton origin/effect columns. The
/// single-relation context makes per-kind coloring moot, so entries render
/// neutral.
fn relation_explanation(id: &EdgeId) -> Explanation {
    let Some((origin, effect)) = id.endpoints() else {
        return Explanation::default();
    };

    Explanation {
        card: None,
        relation: Some(RelationRef {
            id: id.clone(),
            origin: origin.clone(),
            effect: effect.clone(),
        }),
        origins: vec![CardRef {
            id: origin,
            color: LabelColor::Neutral,
        }],
        effects: vec![CardRef {
            id: effect,
            color: LabelColor::Neutral,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::data::{CardNode, GraphBundle, Relation};
    use crate::reducer::reduce;

    fn card(id: &str, batch: u32) -> CardNode {
        CardNode {
            id: id.into(),
            batch,
            x: None,
            y: None,
        }
    }

    fn relation(id: &str, kind: RelationKind) -> Relation {
        Relation {
            id: id.into(),
            relation: kind,
        }
    }

    fn loaded_state() -> AppState {
        let bundle = GraphBundle {
            nodes: vec![card("2", 1), card("9", 1), card("14", 3), card("20", 4)],
            edges: vec![
                relation("2_14", RelationKind::Major),
                relation("9_14", RelationKind::Major),
                relation("14_20", RelationKind::Minor),
            ],
        };
        reduce(&AppState::default(), &Action::LoadData(bundle))
    }

    #[test]
    fn single_visible_kind_renders_neutral() {
        let mut state = loaded_state();
        state.selection = Selection::Card("14".into());

        let view = explanation(&state);
        assert_eq!(view.card, Some("14".into()));
        assert_eq!(
            view.origins,
            vec![
                CardRef {
                    id: "2".into(),
                    color: LabelColor::Neutral
                },
                CardRef {
                    id: "9".into(),
                    color: LabelColor::Neutral
                },
            ]
        );
        // Minor relations are filtered out by default.
        assert!(view.effects.is_empty());
    }

    #[test]
    fn multiple_visible_kinds_keep_their_colors() {
        let mut state = loaded_state();
        state.display.relations.set_visible(RelationKind::Minor, true);
        state.selection = Selection::Card("14".into());

        let view = explanation(&state);
        assert!(view
            .origins
            .iter()
            .all(|entry| entry.color == LabelColor::Success));
        assert_eq!(
            view.effects,
            vec![CardRef {
                id: "20".into(),
                color: LabelColor::Warning
            }]
        );
    }

    #[test]
    fn kind_colors_are_fixed() {
        assert_eq!(kind_color(RelationKind::Major), LabelColor::Success);
        assert_eq!(kind_color(RelationKind::Minor), LabelColor::Warning);
        assert_eq!(kind_color(RelationKind::False), LabelColor::Danger);
        assert_eq!(kind_color(RelationKind::Simplified), LabelColor::Info);
    }

    #[test]
    fn relation_selection_exposes_parsed_endpoints() {
        let mut state = loaded_state();
        state.selection = Selection::Relation("2_14".into());

        let view = explanation(&state);
        let relation = view.relation.unwrap();
        assert_eq!(relation.origin, NodeId::from("2"));
        assert_eq!(relation.effect, NodeId::from("14"));
        assert_eq!(view.origins.len(), 1);
        assert_eq!(view.effects.len(), 1);
        assert_eq!(view.origins[0].color, LabelColor::Neutral);
        assert!(view.card.is_none());
    }

    #[test]
    fn empty_without_selection() {
        let state = loaded_state();
        assert!(explanation(&state).is_empty());
    }

    #[test]
    fn stale_card_id_yields_the_placeholder() {
        let mut state = loaded_state();
        state.selection = Selection::Card("14".into());
        assert!(!explanation(&state).is_empty());

        // Reload with content that no longer contains the card.
        let smaller = GraphBundle {
            nodes: vec![card("2", 1)],
            edges: Vec::new(),
        };
        let mut reloaded = reduce(&state, &Action::LoadData(smaller));
        reloaded.selection = Selection::Card("14".into());
        assert!(explanation(&reloaded).is_empty());
    }

    #[test]
    fn malformed_relation_id_yields_the_placeholder() {
        let mut state = loaded_state();
        state.selection = Selection::Relation("nonsense".into());
        assert!(explanation(&state).is_empty());
    }
}
