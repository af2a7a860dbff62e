use clap::{Parser, Subcommand};

use inkling_cli::commands::{catalog_ops, simulate_ops};
use inkling_core::layout::{FontMetrics, HostMetrics};

#[derive(Parser)]
#[command(name = "inktool", about = "Autocomplete session diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the embedded default trigger catalog
    CatalogExport,

    /// Validate a trigger catalog TOML file
    CatalogValidate {
        /// Path to the catalog TOML file
        file: String,
    },

    /// List triggers and their candidates
    CatalogShow {
        /// Path to a catalog TOML file (omit for the embedded default)
        #[arg(long)]
        file: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Replay an event script against a session and print each step
    Simulate {
        /// Script file with one event per line; `-` reads stdin
        script: String,
        /// Path to a catalog TOML file (omit for the embedded default)
        #[arg(long)]
        catalog: Option<String>,
        /// Output JSONL instead of text
        #[arg(long)]
        json: bool,
        /// Host content width in pixels
        #[arg(long, default_value = "600")]
        width: f32,
        /// Host content height in pixels
        #[arg(long, default_value = "400")]
        height: f32,
        /// Advance width of one cell in pixels
        #[arg(long, default_value = "8")]
        cell_width: f32,
        /// Row height in pixels
        #[arg(long, default_value = "20")]
        line_height: f32,
        /// Content-box padding (left and top) in pixels
        #[arg(long, default_value = "8")]
        padding: f32,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::CatalogExport => catalog_ops::export(),
        Command::CatalogValidate { file } => catalog_ops::validate(&file),
        Command::CatalogShow { file, json } => catalog_ops::show(file.as_deref(), json),
        Command::Simulate {
            script,
            catalog,
            json,
            width,
            height,
            cell_width,
            line_height,
            padding,
        } => {
            let host = HostMetrics {
                content_width: width,
                content_height: height,
                padding_left: padding,
                padding_top: padding,
                font: FontMetrics {
                    cell_width,
                    row_height: line_height,
                },
            };
            simulate_ops::simulate(&script, catalog.as_deref(), json, host);
        }
    }
}
