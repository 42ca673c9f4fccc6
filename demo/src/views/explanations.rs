use egui::{Button, RichText, Ui};
use fresco::{explanation, Action, AppState, CardRef, Explanation};

use super::style;

/// The explanation panel: origins column, card or relation column, effects
/// column. Entries re-dispatch a card selection when clicked.
pub fn explanations(ui: &mut Ui, state: &AppState, pending: &mut Vec<Action>) {
    let view = explanation(state);

    if view.is_empty() {
        ui.vertical_centered(|ui| {
            ui.heading(style::tr(
                state,
                "explanations.elt_placeholder",
                "Click a card or a relation to read about it",
            ));
        });
        return;
    }

    ui.columns(3, |columns| {
        side_column(
            &mut columns[0],
            state,
            &style::tr(state, "explanations.origins", "Origins"),
            &view.origins,
            pending,
        );
        center_column(&mut columns[1], state, &view, pending);
        side_column(
            &mut columns[2],
            state,
            &style::tr(state, "explanations.effects", "Effects"),
            &view.effects,
            pending,
        );
    });
}

fn side_column(
    ui: &mut Ui,
    state: &AppState,
    title: &str,
    cards: &[CardRef],
    pending: &mut Vec<Action>,
) {
    ui.vertical_centered(|ui| {
        ui.heading(title);
    });
    for card in cards {
        let text = format!("{} {}", card.id, style::card_title(state, &card.id));
        let button = Button::new(RichText::new(text).color(style::label_color(ui, card.color)));
        if ui.add_sized([ui.available_width(), 24.], button).clicked() {
            pending.push(Action::SelectNode(card.id.clone()));
        }
    }
}

fn center_column(ui: &mut Ui, state: &AppState, view: &Explanation, pending: &mut Vec<Action>) {
    if let Some(card_id) = &view.card {
        ui.vertical_centered(|ui| {
            ui.heading(format!(
                "{} {} : {}",
                style::tr(state, "explanations.card", "Card"),
                card_id,
                style::card_title(state, card_id),
            ));
        });
        ui.label(card_info(state, card_id));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
            if ui
                .button(style::tr(state, "explanations.moreInfo", "More info"))
                .clicked()
            {
                pending.push(Action::DisplayMoreInfo(true));
            }
        });
    }

    if let Some(relation) = &view.relation {
        ui.vertical_centered(|ui| {
            ui.heading(format!(
                "{} {} \u{2192} {}",
                style::tr(state, "explanations.relation", "Relation"),
                relation.origin,
                relation.effect,
            ));
        });
        let info = state
            .i18n
            .locale
            .as_deref()
            .and_then(|locale| state.i18n.translations.edge_info(locale, &relation.id))
            .unwrap_or_default();
        ui.label(info.to_string());
    }
}

fn card_info(state: &AppState, id: &fresco::NodeId) -> String {
    state
        .i18n
        .locale
        .as_deref()
        .and_then(|locale| state.i18n.translations.node_text(locale, id))
        .map(|text| text.info.clone())
        .unwrap_or_default()
}
