mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "judgewrap")]
#[command(about = "Generate judge driver programs around function-style solutions", long_about = None)]
struct Cli {
    /// Language config file (defaults to config/languages.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true, default_value = "false")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a function signature and print it as JSON
    ParseSignature {
        /// Language family (java, cpp/c++, javascript)
        #[arg(short, long)]
        language: String,

        /// Signature text, e.g. "int sumOfThree(int a, int b, int c)"
        #[arg(short, long)]
        signature: String,
    },

    /// Print the complete program for one test input
    Wrap {
        /// Problem document (JSON)
        #[arg(short, long)]
        problem: PathBuf,

        /// File containing the user's solution
        #[arg(short, long)]
        code: PathBuf,

        #[arg(short, long)]
        language: String,

        /// Test input (defaults to the first visible test case)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Print the execution-engine batch for a run or a full submission
    Prepare {
        #[arg(short, long)]
        problem: PathBuf,

        #[arg(short, long)]
        code: PathBuf,

        #[arg(short, long)]
        language: String,

        /// Include hidden test cases
        #[arg(long, default_value = "false")]
        submit: bool,

        /// Override the configured engine language id
        #[arg(long)]
        language_id: Option<u32>,
    },

    /// Run the structural pre-check on user code
    Validate {
        #[arg(short, long)]
        code: PathBuf,

        #[arg(short, long)]
        language: String,
    },

    /// List configured languages
    Languages,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = cli.config.as_deref();

    match cli.command {
        Commands::ParseSignature { language, signature } => {
            commands::parse_signature_command(&language, &signature)?;
        }
        Commands::Wrap {
            problem,
            code,
            language,
            input,
        } => {
            commands::wrap(&problem, &code, &language, input.as_deref())?;
        }
        Commands::Prepare {
            problem,
            code,
            language,
            submit,
            language_id,
        } => {
            commands::prepare(config, &problem, &code, &language, submit, language_id)?;
        }
        Commands::Validate { code, language } => {
            if !commands::validate(&code, &language)? {
                std::process::exit(1);
            }
        }
        Commands::Languages => {
            commands::list_languages(config)?;
        }
    }

    Ok(())
}
