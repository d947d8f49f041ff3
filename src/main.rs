//! namer-rewrite CLI
//!
//! Entry point for the `namer-rewrite` command-line tool: inspect the
//! resolved rewrite configuration of a project and try rules against names.

use clap::{Parser, Subcommand};
use namer_config::{ConfigResolver, TracingSink};
use namer_rewrite::report::{ConfigReport, ExplainReport};
use namer_rewrite::NamerError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "namer-rewrite")]
#[command(about = "Bundle name rewriting configuration tool", version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and print the effective configuration
    Check {
        /// Project root containing package.json
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Build mode, applied as the first profile
        #[arg(long, default_value = "development")]
        mode: String,

        /// Extra profiles applied after the mode
        #[arg(long = "profile")]
        profiles: Vec<String>,
    },

    /// Show which rule rewrites a name and the result
    Explain {
        /// Project root containing package.json
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Build mode, applied as the first profile
        #[arg(long, default_value = "development")]
        mode: String,

        /// Hash to substitute for the placeholder (empty drops it)
        #[arg(long, default_value = "")]
        hash: String,

        /// Output in human-readable format instead of JSON
        #[arg(long)]
        human: bool,

        /// Bundle name as proposed by the delegate namer
        name: String,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            root,
            mode,
            profiles,
        } => cmd_check(&root, mode, profiles),
        Commands::Explain {
            root,
            mode,
            hash,
            human,
            name,
        } => cmd_explain(&root, mode, &hash, human, &name),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn resolve(root: &Path, profiles: &[String]) -> Result<namer_config::Config, NamerError> {
    let env: BTreeMap<String, String> = std::env::vars().collect();
    let config = ConfigResolver::new(&env, profiles, &TracingSink).resolve(root)?;
    Ok(config)
}

fn cmd_check(root: &Path, mode: String, extra: Vec<String>) -> Result<(), NamerError> {
    let mut profiles = vec![mode];
    profiles.extend(extra);

    let config = resolve(root, &profiles)?;
    let manifest = root.join("package.json").display().to_string();
    let report = ConfigReport::new(manifest, profiles, &config);
    print_json(&report);
    Ok(())
}

fn cmd_explain(
    root: &Path,
    mode: String,
    hash: &str,
    human: bool,
    name: &str,
) -> Result<(), NamerError> {
    let config = resolve(root, &[mode])?;
    let report = ExplainReport::explain(&config, name, hash);
    if human {
        println!("{}", report.format_human());
    } else {
        print_json(&report);
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: failed to serialize report: {}", e);
            process::exit(1);
        }
    }
}
