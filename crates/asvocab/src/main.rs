use std::path::PathBuf;

use asvocab::commands::{run_inspect, run_normalize, run_types};
use asvocab::logging::init_logging;
use asvocab_common::config::AsvocabConfig;
use asvocab_core::TypeKind;
use clap::{Parser, Subcommand, ValueEnum};
use miette::IntoDiagnostic;
use starbase::{App, AppResult, AppSession};

/// asvocab - ActivityStreams vocabulary tooling
#[derive(Parser)]
#[command(name = "asvocab")]
#[command(about = "Normalize and inspect ActivityStreams documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to asvocab.toml or asvocab.json in the working directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter directive, overrides ASVOCAB_LOG and the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Decode a document and re-encode it in canonical form
    Normalize {
        /// Input file, or - for standard input
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
        /// Output file (defaults to standard output)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit compact JSON
        #[arg(long)]
        compact: bool,
        /// Leave out the document's @context
        #[arg(long)]
        strip_context: bool,
    },
    /// Show how each property of a document was resolved
    Inspect {
        /// Input file, or - for standard input
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the known vocabulary types
    Types {
        /// Only list types of this kind
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Emit the list as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Object,
    Link,
}

impl From<KindArg> for TypeKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Object => TypeKind::Object,
            KindArg::Link => TypeKind::Link,
        }
    }
}

/// Application session for the asvocab CLI
#[derive(Clone)]
struct AsvocabSession {
    command: Commands,
    config: AsvocabConfig,
}

#[async_trait::async_trait]
impl AppSession for AsvocabSession {
    async fn execute(&mut self) -> AppResult {
        match &self.command {
            Commands::Normalize {
                input,
                output,
                compact,
                strip_context,
            } => run_normalize(
                input.clone(),
                output.clone(),
                *compact,
                *strip_context,
                &self.config,
            ),
            Commands::Inspect { input, json } => run_inspect(input.clone(), *json, &self.config),
            Commands::Types { kind, json } => run_types(kind.map(TypeKind::from), *json, &self.config),
        }
    }
}

fn load_config(explicit: Option<&PathBuf>) -> anyhow::Result<AsvocabConfig> {
    match explicit {
        Some(path) => AsvocabConfig::load(path),
        None => AsvocabConfig::load_or_default(&std::env::current_dir()?),
    }
}

#[tokio::main]
async fn main() -> starbase::MainResult {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref()).map_err(|e| miette::miette!("{e:#}"))?;
    init_logging(&config.logging, cli.log_level.as_deref()).into_diagnostic()?;

    let session = AsvocabSession {
        command: cli.command,
        config,
    };

    let exit_code = App::default()
        .run(
            session,
            |mut session| async move { session.execute().await },
        )
        .await?;

    Ok(std::process::ExitCode::from(exit_code))
}
