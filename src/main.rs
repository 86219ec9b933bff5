//! RH Admin - Desktop admin front-end for employee role assignments.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use rh_admin as app;

use app::client::ApiClient;
use app::config::{AppConfig, ConfigLoadResult};
use app::ui::App;

/// Desktop admin front-end for employee role assignments.
#[derive(Parser)]
#[command(name = "rh-admin")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; the guard must stay alive for the file writer
    let _guard = init_tracing(cli.dev);

    tracing::info!("RH Admin starting...");

    // Determine config path based on mode
    let config_path = if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };
    tracing::info!("Config path: {:?}", config_path);

    let config = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            config
        }
        ConfigLoadResult::Missing => {
            // First run: write the defaults back so they can be edited
            tracing::info!("Config missing, using defaults");
            let config = AppConfig::default();
            if let Err(e) = config.save(&config_path) {
                tracing::warn!("Could not write default config: {}", e);
            }
            config
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::error!("Config invalid: {}", e);
            eprintln!(
                "Configuration invalide ({}): {e}\nCorrigez ou supprimez le fichier puis relancez.",
                config_path.display()
            );
            std::process::exit(2);
        }
    };

    run_app(config, config_path)
}

/// Set up the tracing subscriber.
///
/// Dev mode logs to stderr; otherwise logs go to a daily-rotated file in the
/// per-user data directory, falling back to stderr when none is available.
fn init_tracing(dev: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter =
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    if !dev && let Some(dir) = log_dir() {
        let appender = tracing_appender::rolling::daily(dir, "rh-admin.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        return Some(guard);
    }

    tracing_subscriber::fmt().with_env_filter(filter).init();
    None
}

/// Per-user log directory, created on demand.
fn log_dir() -> Option<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "rh-admin")?;
    let dir = dirs.data_local_dir().join("logs");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Run the main application.
fn run_app(config: AppConfig, config_path: PathBuf) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Administration RH")
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([900.0, 600.0])
            .with_maximized(config.ui.start_maximized),
        ..Default::default()
    };

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    let client = ApiClient::new(&config.api);
    tracing::info!("API server: {}", config.api.base_url);

    eframe::run_native(
        "Administration RH",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);

            // Icon font for the phosphor glyphs used across the panels
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(App::new(client, config, config_path, rt)))
        }),
    )
}
