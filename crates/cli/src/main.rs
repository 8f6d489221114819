use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pagenav_tui::TuiOptions;
use pagenav_util::{default_log_path, read_data_view, resolve_pages_path};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod headless;

use headless::{OutputFormat, render_view, schema_document, to_output};

/// Page navigation widget for the terminal.
#[derive(Parser, Debug)]
#[command(name = "pagenav", version, about)]
struct Args {
    /// Data view file (JSON or YAML) carrying `pages`, `default` and `objects`
    #[arg(long, global = true)]
    pages: Option<String>,

    /// Page selected when nothing else is
    #[arg(long = "default", global = true)]
    default_page: Option<String>,

    /// Reload whenever the pages file changes
    #[arg(long)]
    watch: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the list once and print it
    Render {
        /// Activate these page ids, in order, before printing
        #[arg(long = "activate", value_name = "ID")]
        activations: Vec<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print the settings schema
    Schema {
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let pages_path = resolve_pages_path(args.pages.as_deref());

    // No subcommand => TUI
    let Some(command) = args.command else {
        init_file_tracing(&default_log_path());
        info!(pages = ?pages_path, watch = args.watch, "Starting terminal host");
        return pagenav_tui::run(TuiOptions {
            pages_path,
            default_page: args.default_page,
            watch: args.watch,
        })
        .await;
    };

    init_tracing();
    match command {
        Command::Render { activations, format } => {
            let data_view = read_data_view(pages_path.as_deref(), args.default_page.as_deref())
                .context("could not load the data view")?;
            let report = render_view(data_view, &activations)?;
            println!("{}", to_output(&report, format)?);
        }
        Command::Schema { format } => {
            println!("{}", to_output(&schema_document(), format)?);
        }
    }
    Ok(())
}

fn env_filter() -> EnvFilter {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs to stderr; used by the one-shot commands.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Logs to `path` so the terminal UI stays clean. Logging is disabled when
/// the file cannot be opened.
fn init_file_tracing(path: &Path) {
    let file = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|()| OpenOptions::new().create(true).append(true).open(path));
    let Ok(file) = file else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}
