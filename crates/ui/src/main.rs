#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use showcase_ui::ShowcaseApp;

    showcase_ui::logging::init()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("showcase")
            .with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "showcase",
        options,
        Box::new(|cc| Ok(Box::new(ShowcaseApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}

// The web build starts from `showcase_ui::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}
