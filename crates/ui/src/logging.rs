//! Log output: the browser console on the web (`console_log`), a
//! `tracing-subscriber` formatter on native builds. Library code only talks
//! to the `log` facade.

#[cfg(not(target_arch = "wasm32"))]
pub fn init() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Also installs the `log` -> `tracing` bridge.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(anyhow::Error::msg)
}

#[cfg(target_arch = "wasm32")]
pub fn init() -> anyhow::Result<()> {
    console_log::init_with_level(log::Level::Info).map_err(anyhow::Error::msg)
}
