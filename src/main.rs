use clap::{Parser, Subcommand};
use pendata::{config, library, order::OrderKey, output, types::Response};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Shared flags for commands that print data.
#[derive(clap::Args, Clone)]
struct FormatArgs {
    /// Print a JSON response envelope instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
#[command(name = "pendata")]
#[command(about = "Index scanned pen notebooks, their pages and recordings")]
#[command(long_about = "\
Index scanned pen notebooks, their pages and recordings

The data directory is the output of the conversion pipeline. Each notebook
is a directory; pages and recordings are matched by the page-N token in
their filenames.

Data structure:

  data/
  ├── config.toml                  # Optional (see 'pendata gen-config')
  ├── notebook-42/                 # Notebook with id \"42\"
  │   ├── notebook_name            # Display name (optional)
  │   ├── page-1.pdf               # Page 1
  │   ├── page-1-0001.ogg          # Recording on page 1
  │   ├── page-2.pdf               # Page 2
  │   └── thumbnails/
  │       └── page-1.pdf.png       # Referenced, never checked
  └── notebook-43/

Run 'pendata gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Data directory produced by the conversion pipeline
    #[arg(long, default_value = ".", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all notebooks with their names, dates and asset counts
    Notebooks(FormatArgs),
    /// List the pages and recordings of one notebook
    Pages {
        /// Notebook id (directory name without the notebook prefix)
        id: String,
        /// Order by "pagenumber" or "date"; anything else means pagenumber
        #[arg(long)]
        order: Option<String>,
        #[command(flatten)]
        format: FormatArgs,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Notebooks(format) => {
            let config = load_config(&cli.data_dir, &format)?;
            init_thread_pool(&config.processing);
            match library::list_notebook_summaries(&cli.data_dir, &config) {
                Ok(notebooks) if format.json => print_json(&Response::success(&notebooks))?,
                Ok(notebooks) => output::print_notebooks(&notebooks),
                Err(e) if format.json => fail_json(format!("Failed to get notebook list: {e}")),
                Err(e) => return Err(e.into()),
            }
        }
        Command::Pages { id, order, format } => {
            let config = load_config(&cli.data_dir, &format)?;
            init_thread_pool(&config.processing);
            let order = OrderKey::parse_lossy(order.as_deref());
            match library::list_notebook_pages(&cli.data_dir, &id, order, &config) {
                Ok(pages) if format.json => print_json(&Response::success(&pages))?,
                Ok(pages) => {
                    let dirname = config.layout.notebook_dirname(&id);
                    output::print_pages(&dirname, order, &pages);
                }
                Err(e) if format.json => {
                    fail_json(format!("Failed to get notebook page info: {e}"))
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}

fn print_json<T: Serialize>(response: &Response<T>) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

/// Load the data directory config; with `--json`, failures become an error envelope.
fn load_config(
    data_dir: &Path,
    format: &FormatArgs,
) -> Result<config::LibraryConfig, config::ConfigError> {
    match config::load_config(data_dir) {
        Err(e) if format.json => fail_json(format!("Failed to load config: {e}")),
        result => result,
    }
}

/// Print an error envelope and exit non-zero.
fn fail_json(msg: String) -> ! {
    tracing::error!("{msg}");
    if let Err(e) = print_json(&Response::<()>::error(msg)) {
        tracing::error!(error = %e, "failed to encode error response");
    }
    std::process::exit(1);
}
