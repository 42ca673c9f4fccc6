use crossbeam::channel::{unbounded, Receiver};
use egui::{CentralPanel, Context, ScrollArea, SidePanel, Vec2};
use fresco::{bootstrap, quiz_mode, Action, NetworkView, Store};
use log::{error, info};
use url::Url;

use crate::canvas::{CanvasEvent, NetworkCanvas};
use crate::content;
use crate::views;

/// Page url stand-in when the host does not provide one; mode and language
/// come from its query string.
const DEFAULT_PAGE_URL: &str = "https://localhost/fresco";
/// Environment override for the page url, for headless runs.
const PAGE_URL_VAR: &str = "FRESCO_URL";

pub struct App {
    store: Store<NetworkCanvas>,
    events: Receiver<CanvasEvent>,
    window: Vec2,
}

impl App {
    pub fn new() -> Self {
        let page_url = page_url();
        let quiz = quiz_mode(&page_url);
        info!("starting with quiz mode {}", if quiz { "on" } else { "off" });

        let (sender, events) = unbounded();
        let mut store = Store::new(quiz);
        store.attach(NetworkCanvas::new(sender, quiz));

        match content::load() {
            Some(content) => bootstrap(
                &mut store,
                content.translations,
                content.graph,
                &page_url,
                browser_language().as_deref(),
            ),
            None => error!("content unavailable, starting unpopulated"),
        }

        Self {
            store,
            events,
            window: Vec2::ZERO,
        }
    }

    pub fn update(&mut self, ctx: &Context) {
        self.track_resize(ctx);
        self.drain_events();

        let mut pending: Vec<Action> = Vec::new();

        if self.store.state().display.quiz {
            CentralPanel::default().show(ctx, |ui| {
                if let Some(canvas) = self.store.network_mut() {
                    canvas.ui(ui);
                }
            });
        } else {
            SidePanel::right("selectors")
                .default_width(220.)
                .show(ctx, |ui| {
                    ScrollArea::vertical().show(ui, |ui| {
                        views::selectors(ui, self.store.state(), &mut pending);
                    });
                });

            CentralPanel::default().show(ctx, |ui| {
                if let Some(canvas) = self.store.network_mut() {
                    canvas.ui(ui);
                }
                ui.separator();
                ScrollArea::vertical().show(ui, |ui| {
                    views::explanations(ui, self.store.state(), &mut pending);
                });
            });

            views::more_info_modal(ctx, self.store.state(), &mut pending);
        }

        for action in pending {
            self.store.dispatch(action);
        }
    }

    /// Quiz sessions track the window size with the canvas.
    fn track_resize(&mut self, ctx: &Context) {
        if !self.store.state().display.quiz {
            return;
        }
        let size = ctx.screen_rect().size();
        if size != self.window {
            self.window = size;
            if let Some(canvas) = self.store.network_mut() {
                canvas.set_size(size.x, size.y);
            }
        }
    }

    /// Clicks resolved by the canvas during the previous frame, in the
    /// card / relation / background precedence order.
    fn drain_events(&mut self) {
        let events: Vec<CanvasEvent> = self.events.try_iter().collect();
        for event in events {
            let action = match event {
                CanvasEvent::NodeClick(id) => Action::SelectNode(id),
                CanvasEvent::EdgeClick(id) => Action::SelectEdge(id),
                CanvasEvent::BackgroundClick => Action::UnselectAll,
            };
            self.store.dispatch(action);
        }
    }
}

fn page_url() -> Url {
    std::env::var(PAGE_URL_VAR)
        .ok()
        .and_then(|raw| match Url::parse(&raw) {
            Ok(url) => Some(url),
            Err(err) => {
                error!("ignoring malformed {PAGE_URL_VAR}: {err}");
                None
            }
        })
        .unwrap_or_else(|| Url::parse(DEFAULT_PAGE_URL).expect("static url"))
}

/// The desktop stand-in for the browser language: the locale environment,
/// normalized to a bcp47-ish tag.
fn browser_language() -> Option<String> {
    let lang = std::env::var("LANG").ok()?;
    let tag = lang.split('.').next()?.replace('_', "-");
    (!tag.is_empty()).then_some(tag)
}
