//! Adkiln CLI - Creative automation pipeline for social ad campaigns

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{brief, generate, providers};

#[derive(Parser)]
#[command(name = "adkiln")]
#[command(about = "Creative automation pipeline for social ad campaigns", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate campaign assets from a brief
    Generate {
        /// Path to campaign brief (JSON or YAML)
        brief: String,

        /// Number of variants per aspect ratio
        #[arg(long, default_value = "3")]
        variants: u32,

        /// Regenerate even if assets exist
        #[arg(long)]
        no_skip: bool,

        /// Provider to use (gemini, mock)
        #[arg(long)]
        provider: Option<String>,

        /// Model override for the gemini provider
        #[arg(long)]
        model: Option<String>,

        /// Output root directory
        #[arg(long)]
        output: Option<String>,

        /// Write a provenance manifest of this run to the given path
        #[arg(long)]
        manifest: Option<String>,
    },

    /// Validate a campaign brief and show its contents
    Brief {
        /// Path to campaign brief (JSON or YAML)
        path: String,
    },

    /// List generation providers and their status
    Providers,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            brief,
            variants,
            no_skip,
            provider,
            model,
            output,
            manifest,
        } => generate::run(generate::GenerateArgs {
            brief,
            variants,
            no_skip,
            provider,
            model,
            output,
            manifest,
        }),
        Commands::Brief { path } => brief::run(&path),
        Commands::Providers => providers::run(),
    }
}
