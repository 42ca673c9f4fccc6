use egui::{ComboBox, Ui};
use fresco::{Action, AppState, NodeBatch, RelationKind};

use super::style;

/// Filter form: which card batches and which relation kinds are displayed.
pub fn form(ui: &mut Ui, state: &AppState, pending: &mut Vec<Action>) {
    ui.label(style::tr(state, "selector.filters.cards", "Cards"));
    batch_filter(ui, state, pending);
    ui.add_space(8.);

    ui.label(style::tr(state, "selector.filters.relations", "Relations"));
    relation_filters(ui, state, pending);
}

fn batch_label(state: &AppState, batch: NodeBatch) -> String {
    let fallback = match batch.limit() {
        1 => "Batch 1".to_string(),
        n => format!("Batches 1-{n}"),
    };
    style::tr(state, batch.ui_key(), &fallback)
}

fn batch_filter(ui: &mut Ui, state: &AppState, pending: &mut Vec<Action>) {
    let current = state.display.batch;
    ComboBox::from_id_salt("batch")
        .selected_text(batch_label(state, current))
        .show_ui(ui, |ui| {
            for batch in NodeBatch::ALL {
                if ui
                    .selectable_label(batch == current, batch_label(state, batch))
                    .clicked()
                    && batch != current
                {
                    pending.push(Action::DisplayBatch(batch));
                }
            }
        });
}

fn relation_filters(ui: &mut Ui, state: &AppState, pending: &mut Vec<Action>) {
    for kind in RelationKind::ALL {
        let mut checked = state.display.relations.visible(kind);
        let label = style::tr(
            state,
            &format!("selector.filters.{}", kind.as_str()),
            kind.as_str(),
        );
        if ui.checkbox(&mut checked, label).changed() {
            pending.push(Action::DisplayRelation(kind, checked));
        }
    }
}
