mod commands;
mod console;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "curator-cli")]
#[command(about = "Brand curator command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check a form file and print any field errors
    Validate {
        /// YAML form file
        #[arg(long)]
        form: PathBuf,
    },
    /// Write the curator list CSV for a form file
    Export {
        /// YAML form file
        #[arg(long)]
        form: PathBuf,
        /// Directory the CSV is written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Submit a form file and follow the analysis through to completion
    Submit {
        /// YAML form file
        #[arg(long)]
        form: PathBuf,
        /// Fetch and render the analysis report once an id is issued
        #[arg(long)]
        show_analysis: bool,
        /// Where the rendered report is written (default: `<brand>_analysis.html`)
        #[arg(long)]
        report_out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = curator_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Validate { form }) => commands::run_validate(&form)?,
        Some(Commands::Export { form, out_dir }) => {
            commands::run_export(&form, &out_dir)?;
        }
        Some(Commands::Submit {
            form,
            show_analysis,
            report_out,
        }) => {
            commands::run_submit(&config, &form, show_analysis, report_out.as_deref()).await?;
        }
        None => println!("curator-cli: pass --help to list commands"),
    }

    Ok(())
}
