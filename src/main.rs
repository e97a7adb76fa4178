use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
mod auth;
use secpass::{Artifact, IterationPolicy, PasswordHasher};

#[derive(Debug, clap::Args)]
struct IterationArgs {
    /// Lowest PBKDF2 iteration count to pick from (default: 10000)
    #[arg(long = "min-iterations", env = "SECPASS_MIN_ITERATIONS")]
    min: Option<u32>,

    /// Highest PBKDF2 iteration count to pick from (default: 50000)
    #[arg(long = "max-iterations", env = "SECPASS_MAX_ITERATIONS")]
    max: Option<u32>,
}

impl IterationArgs {
    fn to_policy(&self) -> Result<IterationPolicy> {
        let default = IterationPolicy::default();

        IterationPolicy::new(
            self.min.unwrap_or(default.min()),
            self.max.unwrap_or(default.max()),
        )
        .context("invalid iteration range")
    }
}

#[derive(Debug, Parser)]
#[command(name = "secpass")]
#[command(version, about = "Hash passwords for storage and verify guesses against them.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hashes a password and prints the stored credential
    Hash {
        #[command(flatten)]
        iterations: IterationArgs,
    },

    /// Checks a password against a stored credential (exit 0 on match, 1 on mismatch)
    Verify {
        #[arg(env = "SECPASS_ARTIFACT")]
        stored: String,
    },

    /// Shows the non-secret parameters of a stored credential
    #[command(arg_required_else_help = true)]
    Inspect {
        stored: String,

        /// Print as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let args = Cli::parse();

    // Logs go to stderr so stdout carries only the credential or verdict.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    match run(args.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Hash { iterations } => {
            let hasher = PasswordHasher::with_policy(iterations.to_policy()?);
            let password = auth::read_password()?;
            let stored = hasher.hash(password.as_str())?;
            println!("{stored}");
        }
        Commands::Verify { stored } => {
            let password = auth::read_password()?;
            let matched = PasswordHasher::new()
                .verify(password.as_str(), &stored)
                .context("cannot verify against stored credential")?;
            if matched {
                println!("match");
            } else {
                println!("mismatch");
                return Ok(ExitCode::from(1));
            }
        }
        Commands::Inspect { stored, json } => {
            let info = Artifact::decode(&stored)
                .context("cannot read stored credential")?
                .describe();
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("algorithm:   {}", info.algorithm);
                println!("iterations:  {}", info.iterations);
                println!("width:       {} bytes", info.iteration_width);
                println!("key length:  {} bytes", info.key_len);
                println!("salt:        {}", info.salt);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
