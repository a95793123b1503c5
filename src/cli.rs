use crate::config::{
    default_analysis_workers, Settings, DEFAULT_NETWORK_WORKERS, DEFAULT_OUTPUT_SVG,
    DEFAULT_REPO_LIMIT, DEFAULT_WORKSPACE,
};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "orgloc")]
#[command(about = "Mirror every repository of an account and chart lines of code per language")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Directory holding the local mirrors", default_value = DEFAULT_WORKSPACE)]
    pub workspace: PathBuf,

    #[arg(long, help = "Path of the SVG chart to write", default_value = DEFAULT_OUTPUT_SVG)]
    pub output: PathBuf,

    #[arg(long, help = "Concurrent mirror clones/updates", default_value_t = DEFAULT_NETWORK_WORKERS)]
    pub network_workers: usize,

    #[arg(long, help = "Concurrent repository analyses (default: CPU count, at least 4)")]
    pub analysis_workers: Option<usize>,

    #[arg(long, help = "Maximum number of repositories to list", default_value_t = DEFAULT_REPO_LIMIT)]
    pub limit: usize,

    #[arg(long, help = "Account or organization to list (default: the authenticated user)")]
    pub owner: Option<String>,
}

impl CommonArgs {
    pub fn settings(&self) -> Settings {
        Settings {
            workspace: self.workspace.clone(),
            output: self.output.clone(),
            network_workers: self.network_workers.max(1),
            analysis_workers: self
                .analysis_workers
                .unwrap_or_else(default_analysis_workers)
                .max(1),
            limit: self.limit,
            owner: self.owner.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List, mirror and count every repository (the default)
    Run {
        #[arg(long, help = "Output the report as JSON")]
        json: bool,
    },
    /// List and mirror repositories without counting
    Sync,
    /// Count mirrors already in the workspace without contacting the remote
    Count {
        #[arg(long, help = "Output the report as JSON")]
        json: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let settings = self.common.settings();
        match self.command.unwrap_or(Commands::Run { json: false }) {
            Commands::Run { json } => crate::pipeline::exec_run(&settings, json),
            Commands::Sync => crate::pipeline::exec_sync(&settings),
            Commands::Count { json } => crate::pipeline::exec_count(&settings, json),
        }
    }
}
