use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once: `RUST_LOG` when set, otherwise `info`.
pub fn init_logging() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match std::env::var("RUST_LOG") {
            Ok(filter) => {
                builder.parse_filters(&filter);
            }
            Err(_) => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }
        builder.write_style(env_logger::WriteStyle::Auto);
        builder.init();
        log::debug!("logging initialized");
    });
}
