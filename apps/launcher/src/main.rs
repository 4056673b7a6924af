use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_settings, CommandDispatcher, ExecutionOutcome, RunClient, Settings, TriggerSet,
};
use shared::domain::RunMethod;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod terminal;

use terminal::TerminalRegion;

#[derive(Parser, Debug)]
#[command(about = "Run programs hosted on a script-runner server")]
struct Cli {
    /// Overrides `server_url` from launcher.toml / APP__SERVER_URL.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long)]
    method: Option<RunMethod>,
    #[arg(long)]
    timeout_secs: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a program and print its output.
    Run { program: String },
    /// List the `.py` files in a local directory. The server is not asked;
    /// the names only serve as trigger labels.
    List {
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Execute the program bound to a label. Labels come from a local
    /// directory scan; the server still decides whether the program exists.
    Fire {
        label: String,
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Upload a .py file to the server.
    Upload { file: PathBuf },
}

impl Cli {
    fn settings(&self) -> Settings {
        let mut settings = load_settings();
        if let Some(v) = &self.server_url {
            settings.server_url = v.clone();
        }
        if let Some(v) = self.method {
            settings.run_method = v;
        }
        if let Some(v) = self.timeout_secs {
            settings.request_timeout_secs = Some(v);
        }
        settings
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let settings = cli.settings();
    debug!(
        server_url = %settings.server_url,
        method = %settings.run_method,
        timeout_secs = ?settings.request_timeout_secs,
        "resolved settings"
    );

    let client = RunClient::from_settings(&settings)
        .with_context(|| format!("invalid client settings for {}", settings.server_url))?;

    match cli.command {
        Command::Run { program } => {
            let dispatcher = CommandDispatcher::new(client, TerminalRegion);
            Ok(exit_code(dispatcher.execute(program).await))
        }
        Command::List { dir } => {
            let dir = dir.unwrap_or(settings.programs_dir);
            let triggers = TriggerSet::scan_dir(&dir).await?;
            info!(dir = %dir.display(), count = triggers.len(), "listed local programs");
            for trigger in triggers.iter() {
                println!("{}", trigger.label);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Fire { label, dir } => {
            let dir = dir.unwrap_or(settings.programs_dir);
            let triggers = TriggerSet::scan_dir(&dir).await?;
            let dispatcher = CommandDispatcher::new(client, TerminalRegion);
            Ok(exit_code(dispatcher.fire(&triggers, &label).await?))
        }
        Command::Upload { file } => {
            client
                .upload_file(&file)
                .await
                .with_context(|| format!("failed to upload {}", file.display()))?;
            info!(file = %file.display(), server_url = %settings.server_url, "upload finished");
            println!("uploaded {}", file.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code(outcome: ExecutionOutcome) -> ExitCode {
    match outcome {
        ExecutionOutcome::Succeeded => ExitCode::SUCCESS,
        ExecutionOutcome::Failed => ExitCode::FAILURE,
    }
}
