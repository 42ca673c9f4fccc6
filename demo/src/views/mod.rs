mod explanations;
mod form;
mod language;
mod modal;
mod style;

pub use explanations::explanations;
pub use modal::more_info_modal;

use egui::Ui;
use fresco::{Action, AppState};

use crate::content;

/// Right column: language, links, filters.
pub fn selectors(ui: &mut Ui, state: &AppState, pending: &mut Vec<Action>) {
    ui.vertical(|ui| {
        ui.heading(style::tr(state, "selector.language", "Language"));
        language::language_selector(ui, state, pending);
        ui.add_space(12.);

        ui.heading(style::tr(state, "selector.links", "Links"));
        links(ui, state);
        ui.add_space(12.);

        ui.heading(style::tr(state, "selector.filters.name", "Filters"));
        form::form(ui, state, pending);
    });
}

fn links(ui: &mut Ui, state: &AppState) {
    if let Some(locale) = &state.i18n.locale {
        let doc = content::documentation_path(locale);
        ui.hyperlink_to(style::tr(state, "selector.dl_doc", "Documentation"), doc);
    }
    if let Some(site) = state
        .i18n
        .locale
        .as_deref()
        .and_then(|l| state.i18n.translations.ui(l, "mainWebsite"))
    {
        ui.hyperlink_to(
            style::tr(state, "climateCollage", "Climate Collage"),
            site.to_string(),
        );
    }
}
