mod app;
mod cli;

use tracing_subscriber::EnvFilter;

/// Optional file logging. The TUI owns stdout, so traces go to a file
/// under the config dir, and only when LIFEDASH_LOG asks for them.
fn init_logging() {
    let Ok(filter) = std::env::var("LIFEDASH_LOG") else {
        return;
    };
    let Some(config_dir) = dirs::config_dir() else {
        return;
    };

    let log_dir = config_dir.join("lifedash");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    match std::fs::File::create(log_dir.join("lifedash.log")) {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new(filter))
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
        Err(e) => eprintln!("Warning: could not open log file: {}", e),
    }
}

fn main() {
    init_logging();
    let cli = cli::parse();
    app::run(cli);
}
