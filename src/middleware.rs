use egui::{Color32, Pos2};
use log::debug;

use crate::action::Action;
use crate::data::NodeId;
use crate::locale::FALLBACK_LANGUAGE;
use crate::mirror::{relation_color, MirrorData, MirrorEdge, MirrorNode, NodeShape, HIDDEN_NODE_SIZE};
use crate::network::{AnimOptions, NetworkView};
use crate::state::AppState;

/// Zoom applied when focusing a card revealed in quiz mode.
pub const FOCUS_SCALE_QUIZ: f32 = 1.2;
/// Zoom applied when focusing a card outside quiz mode.
pub const FOCUS_SCALE: f32 = 2.0;

/// A post-reducer hook: receives the action, the state it produced, the
/// mirrored dataset and the widget handle.
pub type Middleware<V> = fn(&Action, &AppState, &mut MirrorData, &mut Option<V>);

/// Translates the state resulting from an action into imperative updates on
/// the rendering widget.
///
/// Inert until a widget is attached. The reducer has already run; this layer
/// only mirrors, it never decides.
pub fn network_effects<V: NetworkView>(
    action: &Action,
    state: &AppState,
    mirror: &mut MirrorData,
    network: &mut Option<V>,
) {
    let Some(network) = network.as_mut() else {
        return;
    };

    match action {
        Action::SetData => {
            create_data_views(state, mirror);
            refresh_locale_labels(state, mirror);
            // One forced toggle per card: quiz sessions start fully hidden,
            // everything else starts fully labeled.
            for id in mirror.node_ids() {
                toggle_node_visibility(&id, state, mirror);
            }
            push_data(network, state, mirror);
        }

        Action::UpdateData | Action::SetLocale(_) => {
            refresh_locale_labels(state, mirror);
            push_data(network, state, mirror);
        }

        Action::DisplayBatch(_) => {
            push_data(network, state, mirror);
            network.fit(None, &AnimOptions::default());
        }

        Action::DisplayRelation(_, _) => {
            push_data(network, state, mirror);
        }

        Action::SelectNode(id) => {
            if state.display.quiz {
                toggle_node_visibility(id, state, mirror);
                push_data(network, state, mirror);
            }
            network.select_nodes(std::slice::from_ref(id));
            let scale = if state.display.quiz {
                FOCUS_SCALE_QUIZ
            } else {
                FOCUS_SCALE
            };
            network.focus(id, scale, &AnimOptions::default());
        }

        Action::SelectEdge(id) => {
            if let Some((origin, effect)) = network.connected_nodes(id) {
                network.fit(Some(&[origin, effect]), &AnimOptions::default());
            } else {
                debug!("ignoring selection of malformed relation id {id}");
            }
        }

        Action::UnselectAll => {
            network.fit(None, &AnimOptions::default());
        }

        Action::LoadData(_) | Action::LoadTranslations(_) | Action::DisplayMoreInfo(_) => {}
    }
}

fn push_data<V: NetworkView>(network: &mut V, state: &AppState, mirror: &MirrorData) {
    network.set_data(
        mirror.visible_nodes(&state.display),
        mirror.visible_edges(&state.display),
    );
}

/// Rebuilds the mirror from the loaded graph.
///
/// Cards come up with the revealed flag set to the quiz flag; the forced
/// toggle pass in the `SetData` handler inverts it into the intended initial
/// look.
fn create_data_views(state: &AppState, mirror: &mut MirrorData) {
    mirror.clear();

    let quiz = state.display.quiz;
    for card in state.data.cards() {
        let position = match (card.x, card.y) {
            (Some(x), Some(y)) => Some(Pos2::new(x, y)),
            _ => None,
        };
        mirror.insert_node(MirrorNode {
            id: card.id.clone(),
            batch: card.batch,
            visible: quiz,
            shape: NodeShape::Dot,
            size: HIDDEN_NODE_SIZE,
            label: None,
            image: None,
            label_highlight_bold: true,
            font_background: Some(Color32::WHITE),
            position,
        });
    }

    for relation in state.data.relations() {
        mirror.insert_edge(MirrorEdge {
            id: relation.id.clone(),
            relation: relation.kind(),
            arrows_to: true,
            color: relation_color(relation.kind()),
        });
    }
}

/// Re-applies locale-dependent label and image text to every mirrored card,
/// leaving visibility untouched. Skipped while no locale is set.
fn refresh_locale_labels(state: &AppState, mirror: &mut MirrorData) {
    let Some(locale) = state.i18n.locale.clone() else {
        return;
    };

    let quiz = state.display.quiz;
    let ids = mirror.node_ids();
    for id in ids {
        let label = if quiz {
            None
        } else {
            Some(wrapped_label(state, &locale, &id))
        };
        let image = Some(image_path(&locale, &id));
        if let Some(node) = mirror.node_mut(&id) {
            node.label = label;
            node.image = image;
        }
    }
}

/// Quiz only: flips a card between the revealed and hidden look. Unknown ids
/// are ignored.
fn toggle_node_visibility(id: &NodeId, state: &AppState, mirror: &mut MirrorData) {
    let locale = state
        .i18n
        .locale
        .clone()
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string());
    let Some(node) = mirror.node_mut(id) else {
        return;
    };

    if node.visible {
        node.apply_hidden_style();
    } else {
        node.apply_visible_style();
        node.label = Some(wrapped_label(state, &locale, id));
    }
}

/// The card label on the canvas: the locale's wrapped title with literal
/// `\n` escapes turned into real line breaks, the raw id when the
/// translation is missing.
fn wrapped_label(state: &AppState, locale: &str, id: &NodeId) -> String {
    state
        .i18n
        .translations
        .node_text(locale, id)
        .map(|text| unescape_line_breaks(&text.wrapped_title))
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| id.to_string())
}

fn unescape_line_breaks(s: &str) -> String {
    s.replace("\\n", "\n")
}

fn image_path(locale: &str, id: &NodeId) -> String {
    format!("data/images/{locale}/node_recto_{id}.jpg")
}
