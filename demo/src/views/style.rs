use egui::{Color32, Ui};
use fresco::{AppState, LabelColor, SIMPLIFIED_BLUE};

pub const COLOR_SUCCESS: Color32 = Color32::from_rgb(0x48, 0xc7, 0x8e);
pub const COLOR_WARNING: Color32 = Color32::from_rgb(0xff, 0xe0, 0x8a);
pub const COLOR_DANGER: Color32 = Color32::from_rgb(0xf1, 0x46, 0x68);

/// Maps a view-model color class onto the palette; the neutral class uses
/// the theme's high-contrast text color.
pub fn label_color(ui: &Ui, color: LabelColor) -> Color32 {
    match color {
        LabelColor::Neutral => ui.visuals().strong_text_color(),
        LabelColor::Success => COLOR_SUCCESS,
        LabelColor::Warning => COLOR_WARNING,
        LabelColor::Danger => COLOR_DANGER,
        LabelColor::Info => SIMPLIFIED_BLUE,
    }
}

/// Free-form UI string in the current locale, with a fallback for holes in
/// the content.
pub fn tr(state: &AppState, key: &str, fallback: &str) -> String {
    state
        .i18n
        .locale
        .as_deref()
        .and_then(|locale| state.i18n.translations.ui(locale, key))
        .unwrap_or(fallback)
        .to_string()
}

/// Title of a card in the current locale, the bare id when untranslated.
pub fn card_title(state: &AppState, id: &fresco::NodeId) -> String {
    state
        .i18n
        .locale
        .as_deref()
        .and_then(|locale| state.i18n.translations.node_text(locale, id))
        .map_or_else(|| id.to_string(), |text| text.title.clone())
}
