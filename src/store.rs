use log::debug;
use url::Url;

use crate::action::Action;
use crate::data::{GraphBundle, NodeId};
use crate::locale::{default_language, Translations, FALLBACK_LANGUAGE};
use crate::middleware::{network_effects, Middleware};
use crate::mirror::MirrorData;
use crate::network::NetworkView;
use crate::reducer::reduce;
use crate::state::AppState;

/// First card revealed when a quiz session starts.
pub const QUIZ_FIRST_NODE: &str = "14";

/// The application store: the state tree, the mirrored widget dataset, the
/// optional widget handle and the post-reducer middleware chain.
///
/// There is no ambient singleton; whoever needs to dispatch holds (a
/// reference to) the store.
pub struct Store<V: NetworkView> {
    state: AppState,
    mirror: MirrorData,
    network: Option<V>,
    middlewares: Vec<Middleware<V>>,
}

impl<V: NetworkView> Store<V> {
    pub fn new(quiz: bool) -> Self {
        Self {
            state: AppState::new(quiz),
            mirror: MirrorData::default(),
            network: None,
            middlewares: vec![network_effects],
        }
    }

    /// Attaches the rendering widget. Until this is called the middleware
    /// chain is inert and dispatches only move the state tree.
    pub fn attach(&mut self, network: V) {
        self.network = Some(network);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn mirror(&self) -> &MirrorData {
        &self.mirror
    }

    pub fn network(&self) -> Option<&V> {
        self.network.as_ref()
    }

    pub fn network_mut(&mut self) -> Option<&mut V> {
        self.network.as_mut()
    }

    /// Applies an action: the reducer produces the next state, then every
    /// middleware sees the action together with that resulting state.
    pub fn dispatch(&mut self, action: Action) {
        debug!("dispatch {action:?}");
        self.state = reduce(&self.state, &action);
        for middleware in &self.middlewares {
            middleware(&action, &self.state, &mut self.mirror, &mut self.network);
        }
    }
}

/// Runs the ordered startup sequence.
///
/// Translations are loaded before the graph because card labels depend on
/// them; the graph then replaces any prior content wholesale; finally a quiz
/// session reveals its first card.
pub fn bootstrap<V: NetworkView>(
    store: &mut Store<V>,
    translations: Translations,
    graph: GraphBundle,
    page_url: &Url,
    browser_lang: Option<&str>,
) {
    store.dispatch(Action::LoadTranslations(translations));

    let lang = default_language(page_url, browser_lang, &store.state().i18n.translations)
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string());
    store.dispatch(Action::SetLocale(lang));

    store.dispatch(Action::LoadData(graph));
    store.dispatch(Action::SetData);
    store.dispatch(Action::UpdateData);

    if store.state().display.quiz {
        store.dispatch(Action::SelectNode(NodeId::from(QUIZ_FIRST_NODE)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CardNode, Relation, RelationKind};
    use crate::middleware::FOCUS_SCALE_QUIZ;
    use crate::test_support::{Command, RecordingNetwork};

    fn sample_bundle() -> GraphBundle {
        GraphBundle {
            nodes: vec![
                CardNode {
                    id: "2".into(),
                    batch: 1,
                    x: None,
                    y: None,
                },
                CardNode {
                    id: "14".into(),
                    batch: 1,
                    x: None,
                    y: None,
                },
            ],
            edges: vec![Relation {
                id: "2_14".into(),
                relation: RelationKind::Major,
            }],
        }
    }

    fn sample_translations() -> Translations {
        serde_json::from_str(r#"{ "en": { "fullName": "English" }, "fr": { "fullName": "Français" } }"#)
            .unwrap()
    }

    fn page_url(query: &str) -> Url {
        Url::parse(&format!("https://example.org/?{query}")).unwrap()
    }

    #[test]
    fn dispatch_without_network_still_moves_state() {
        let mut store: Store<RecordingNetwork> = Store::new(false);
        store.dispatch(Action::SelectNode("14".into()));
        assert_eq!(store.state().selection.card_id(), Some(&"14".into()));
        assert_eq!(store.mirror().node_count(), 0);
    }

    #[test]
    fn bootstrap_orders_translations_before_graph() {
        let mut store: Store<RecordingNetwork> = Store::new(false);
        store.attach(RecordingNetwork::default());

        bootstrap(
            &mut store,
            sample_translations(),
            sample_bundle(),
            &page_url("lang=fr"),
            None,
        );

        assert_eq!(store.state().i18n.locale.as_deref(), Some("fr"));
        assert_eq!(store.state().data.card_count(), 2);
        assert!(store.mirror().node_count() > 0);
        // Labels got localized with the locale already set.
        for node in store.mirror().nodes() {
            assert!(node.image.as_deref().unwrap().contains("/fr/"));
        }
    }

    #[test]
    fn quiz_bootstrap_reveals_and_focuses_the_first_card() {
        let mut store: Store<RecordingNetwork> = Store::new(true);
        store.attach(RecordingNetwork::default());

        bootstrap(
            &mut store,
            sample_translations(),
            sample_bundle(),
            &page_url("quiz=1"),
            Some("en-US"),
        );

        assert_eq!(
            store.state().selection.card_id(),
            Some(&NodeId::from(QUIZ_FIRST_NODE))
        );
        assert!(store.mirror().node(&"14".into()).unwrap().visible);
        assert!(!store.mirror().node(&"2".into()).unwrap().visible);

        let commands = &store.network().unwrap().commands;
        assert!(commands.iter().any(|c| matches!(
            c,
            Command::Focus { scale, .. } if *scale == FOCUS_SCALE_QUIZ
        )));
    }

    #[test]
    fn non_quiz_bootstrap_leaves_nothing_selected() {
        let mut store: Store<RecordingNetwork> = Store::new(false);
        store.attach(RecordingNetwork::default());

        bootstrap(
            &mut store,
            sample_translations(),
            sample_bundle(),
            &page_url(""),
            None,
        );

        assert!(store.state().selection.is_none());
        assert!(store.mirror().node(&"2".into()).unwrap().visible);
    }
}
