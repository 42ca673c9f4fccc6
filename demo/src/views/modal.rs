use egui::{Context, Window};
use fresco::{Action, AppState};

use super::style;

/// More-info modal for the selected card.
pub fn more_info_modal(ctx: &Context, state: &AppState, pending: &mut Vec<Action>) {
    if !state.display.more_info {
        return;
    }

    let text = state
        .selection
        .card_id()
        .and_then(|id| {
            let locale = state.i18n.locale.as_deref()?;
            state.i18n.translations.node_text(locale, id)
        })
        .map(|text| text.more_info.clone())
        .unwrap_or_default();

    let mut open = true;
    Window::new(style::tr(state, "explanations.moreInfo", "More info"))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(text);
        });

    if !open {
        pending.push(Action::DisplayMoreInfo(false));
    }
}
