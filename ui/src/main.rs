mod app;
mod briefing;
mod canvas;
mod dashboard;
mod log_panel;
mod scene;
mod theme;

use app::MalsimApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use egui::ViewportBuilder;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([1300.0, 900.0])
            .with_title("Malsim"),
        ..Default::default()
    };
    eframe::run_native(
        "Malsim",
        options,
        Box::new(|cc| Ok(Box::new(MalsimApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no document to mount on");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("canvas #the_canvas_id not found");
            return;
        };
        if let Err(err) = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(MalsimApp::new(cc)))),
            )
            .await
        {
            log::error!("failed to start eframe: {:?}", err);
        }
    });
}
