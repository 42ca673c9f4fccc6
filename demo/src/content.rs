use std::fs;
use std::path::{Path, PathBuf};

use fresco::{GraphBundle, Translations};
use log::{error, info};

/// Where to find the content files, relative to the demo crate.
const TRANSLATIONS_PATH: &str = "data/content/translations.json";
const GRAPH_PATH: &str = "data/content/graph.json";
const PDF_DOC_PATH: &str = "data/dl/documentation_LANG.pdf";

/// Per-language documentation download path.
pub fn documentation_path(locale: &str) -> String {
    PDF_DOC_PATH.replace("LANG", locale)
}

pub struct Content {
    pub translations: Translations,
    pub graph: GraphBundle,
}

fn content_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

fn read_json<T: serde::de::DeserializeOwned>(relative: &str) -> Option<T> {
    let path = content_path(relative);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) => {
            error!("cannot read {}: {err}", path.display());
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            error!("cannot parse {}: {err}", path.display());
            None
        }
    }
}

/// Loads both content files. `None` leaves the viewer unpopulated; there is
/// no retry, worst case is a running but empty page.
pub fn load() -> Option<Content> {
    let translations: Translations = read_json(TRANSLATIONS_PATH)?;
    let graph: GraphBundle = read_json(GRAPH_PATH)?;
    info!(
        "loaded content: {} languages, {} cards, {} relations",
        translations.available().len(),
        graph.nodes.len(),
        graph.edges.len()
    );
    Some(Content {
        translations,
        graph,
    })
}
