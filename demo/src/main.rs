use eframe::{run_native, App, CreationContext, Frame, NativeOptions};
use egui::Context;

const APP_NAME: &str = "Fresco";

mod app;
mod canvas;
mod content;
mod views;

pub struct FrescoApp {
    app: app::App,
}

impl FrescoApp {
    fn new(_: &CreationContext<'_>) -> Self {
        Self {
            app: app::App::new(),
        }
    }
}

impl App for FrescoApp {
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        self.app.update(ctx);
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = NativeOptions::default();
    run_native(
        APP_NAME,
        native_options,
        Box::new(|cc| Ok::<Box<dyn App>, _>(Box::new(FrescoApp::new(cc)))),
    )
}
