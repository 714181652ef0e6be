use clap::Args;

use crate::cli::utils::output_outcome;
use crate::cli::OutputFormat;
use crate::submitter::Submitter;
use crate::todo::{Todo, TodoId, TodoPatch, DEFAULT_DESCRIPTION, DEFAULT_TITLE, DEFAULT_USER_ID};

#[derive(Args, Debug, Clone)]
pub struct SaveArgs {
    #[arg(long, default_value = DEFAULT_USER_ID, help = "Owner of the todo")]
    pub user_id: String,
    #[arg(long, default_value = DEFAULT_TITLE, help = "Todo title")]
    pub title: String,
    #[arg(long, default_value = DEFAULT_DESCRIPTION, help = "Todo description")]
    pub description: String,
}

impl SaveArgs {
    pub fn into_todo(self) -> Todo {
        Todo::new(self.user_id, self.title, self.description)
    }
}

impl Default for SaveArgs {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    #[arg(help = "Document id")]
    pub id: String,
    #[arg(long, help = "New title")]
    pub title: Option<String>,
    #[arg(long, help = "New description")]
    pub description: Option<String>,
    #[arg(
        long,
        required = true,
        action = clap::ArgAction::Set,
        value_parser = clap::value_parser!(bool),
        help = "Completion state to store (true/false)"
    )]
    pub completed: bool,
}

impl From<UpdateArgs> for TodoPatch {
    fn from(args: UpdateArgs) -> Self {
        TodoPatch {
            id: args.id,
            title: args.title,
            description: args.description,
            is_completed: args.completed,
        }
    }
}

pub async fn save(submitter: &Submitter, args: SaveArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let (outcome, response) = submitter.save(&args.into_todo()).await?;
    output_outcome(&output_format, &outcome, "inserted", &response)
}

pub async fn update(submitter: &Submitter, args: UpdateArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let (outcome, response) = submitter.update(&TodoPatch::from(args)).await?;
    output_outcome(&output_format, &outcome, "updated", &response)
}

pub async fn delete(submitter: &Submitter, id: String, output_format: OutputFormat) -> anyhow::Result<()> {
    let (outcome, response) = submitter.delete(&TodoId { id }).await?;
    output_outcome(&output_format, &outcome, "deleted", &response)
}
