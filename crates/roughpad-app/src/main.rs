//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting Roughpad");

    let config = roughpad_app::AppConfig::from_env().unwrap_or_else(|e| {
        log::error!("{e}; using default configuration");
        roughpad_app::AppConfig::default()
    });

    roughpad_app::ShortcutRegistry::print_all();
    pollster::block_on(roughpad_app::App::run(config));
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
