use egui::{ComboBox, Ui};
use fresco::{Action, AppState};

/// Language drop-down over the loaded bundles, showing their display names.
/// Switching dispatches the locale change plus a mirrored-label refresh.
pub fn language_selector(ui: &mut Ui, state: &AppState, pending: &mut Vec<Action>) {
    let translations = &state.i18n.translations;
    let current = state.i18n.locale.clone().unwrap_or_default();
    let current_name = translations
        .full_name(&current)
        .unwrap_or(&current)
        .to_string();

    ComboBox::from_id_salt("language")
        .selected_text(current_name)
        .show_ui(ui, |ui| {
            for lang in translations.available() {
                let name = translations.full_name(lang).unwrap_or(lang);
                if ui
                    .selectable_label(lang == current, name)
                    .clicked()
                    && lang != current
                {
                    pending.push(Action::SetLocale(lang.to_string()));
                    pending.push(Action::UpdateData);
                }
            }
        });
}
