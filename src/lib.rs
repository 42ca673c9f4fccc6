mod action;
mod data;
mod explain;
mod locale;
mod middleware;
mod mirror;
mod network;
mod reducer;
mod state;
mod store;

#[cfg(test)]
mod test_support;

pub use self::action::Action;
pub use self::data::{
    CardNode, EdgeId, GraphBundle, GraphData, NodeId, Relation, RelationKind, EDGE_ID_SEPARATOR,
};
pub use self::explain::{
    explanation, kind_color, resolve_color, CardRef, Explanation, LabelColor, RelationRef,
};
pub use self::locale::{
    default_language, quiz_mode, Bundle, EdgeText, NodeText, Translations, FALLBACK_LANGUAGE,
};
pub use self::middleware::{network_effects, Middleware, FOCUS_SCALE, FOCUS_SCALE_QUIZ};
pub use self::mirror::{
    relation_color, MirrorData, MirrorEdge, MirrorNode, NodeShape, HIDDEN_NODE_SIZE,
    SIMPLIFIED_BLUE, VISIBLE_NODE_SIZE,
};
pub use self::network::{AnimOptions, Easing, NetworkView};
pub use self::reducer::reduce;
pub use self::state::{
    AppState, DisplayState, I18nState, NodeBatch, RelationFilter, Selection,
};
pub use self::store::{bootstrap, Store, QUIZ_FIRST_NODE};
