pub mod commands;
pub mod utils;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config::{self, AppConfig};
use crate::convex::ConvexClient;
use crate::submitter::Submitter;

#[derive(Parser)]
#[command(name = "convex-todo")]
#[command(about = "Submit todo records to a Convex deployment")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(
        long,
        global = true,
        default_value = config::DEFAULT_ENV_FILE,
        help = "Env file to load CONVEX_URL from"
    )]
    pub env_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Insert a todo (default command)")]
    Save(commands::mutation::SaveArgs),

    #[command(about = "Update an existing todo by document id")]
    Update(commands::mutation::UpdateArgs),

    #[command(about = "Delete a todo by document id")]
    Delete {
        #[arg(help = "Document id")]
        id: String,
    },

    #[command(about = "List todos for a user")]
    List(commands::query::ListArgs),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    config::load_env_file(&cli.env_file)?;
    let app_config = AppConfig::from_env();
    let submitter = Submitter::new(ConvexClient::from_config(&app_config.convex)?);

    match cli.command.unwrap_or_default() {
        Commands::Save(args) => commands::mutation::save(&submitter, args, output_format).await,
        Commands::Update(args) => commands::mutation::update(&submitter, args, output_format).await,
        Commands::Delete { id } => commands::mutation::delete(&submitter, id, output_format).await,
        Commands::List(args) => commands::query::list(submitter.client(), args, output_format).await,
    }
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Save(commands::mutation::SaveArgs::default())
    }
}
