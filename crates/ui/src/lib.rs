mod app;
mod host;
pub mod logging;
mod renderer;
mod theme;

pub use app::ShowcaseApp;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Canvas the web build draws into.
#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "showcase_canvas";

// WASM entry point
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = logging::init() {
        web_sys::console::warn_1(&format!("showcase: logging unavailable: {e}").into());
    }

    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_web().await {
            log::error!("failed to start: {e:?}");
        }
    });
    Ok(())
}

#[cfg(target_arch = "wasm32")]
async fn run_web() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str(&format!("no canvas element with id '{CANVAS_ID}'")))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("element is not a canvas"))?;

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(ShowcaseApp::new(cc)))),
        )
        .await
}
