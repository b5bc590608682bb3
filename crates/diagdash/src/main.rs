#[cfg(feature = "native")]
use clap::Parser;
#[cfg(feature = "native")]
use diagdash::config::{load_metrics, metrics_to_yaml};
#[cfg(feature = "native")]
use diagdash::snapshot::render_snapshot;
#[cfg(feature = "native")]
use diagdash::{App, DashboardState, DataSource, init_logging};
#[cfg(feature = "native")]
use diagdash_core::prediction_metrics;
#[cfg(feature = "native")]
use std::path::PathBuf;

#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(name = "diagdash")]
#[command(about = "A terminal dashboard for disease prediction model metrics")]
struct Args {
    /// Path to the data directory (default: ~/.diagdash/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// YAML file with records to show instead of the built-in metrics
    #[arg(short, long)]
    metrics: Option<PathBuf>,

    /// Print a single rendered frame to stdout and exit
    #[arg(long)]
    snapshot: bool,

    /// Snapshot width in columns
    #[arg(long, default_value_t = 120)]
    width: u16,

    /// Snapshot height in rows
    #[arg(long, default_value_t = 48)]
    height: u16,

    /// Print the built-in metrics as a YAML metrics file and exit
    #[arg(long)]
    print_template: bool,
}

#[cfg(feature = "native")]
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".diagdash")
}

#[cfg(feature = "native")]
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    if args.print_template {
        print!("{}", metrics_to_yaml(&prediction_metrics())?);
        return Ok(());
    }

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    init_logging(&data_dir, &args.log_level)?;

    let (records, source) = match &args.metrics {
        Some(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            (load_metrics(path)?, DataSource::File(name))
        }
        None => (prediction_metrics(), DataSource::BuiltIn),
    };

    let mut state = DashboardState::new(records, source);
    state.load_keybindings(&data_dir);

    if args.snapshot {
        print!("{}", render_snapshot(state, args.width, args.height)?);
        return Ok(());
    }

    let mut app = App::new(state);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    // Web entry point is handled via wasm_bindgen in lib.rs
    // This main() exists only to satisfy the binary target requirement
    panic!(
        "This binary requires the 'native' feature. For web, use trunk to build the WASM target."
    );
}
