use clap::Args;

use crate::cli::utils::{output_outcome, output_todos};
use crate::cli::OutputFormat;
use crate::convex::ConvexClient;
use crate::submitter::Outcome;
use crate::todo::{StoredTodo, TodoFilter, DEFAULT_USER_ID, GET_TODOS};

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[arg(long, default_value = DEFAULT_USER_ID, help = "Owner of the todos")]
    pub user_id: String,
    #[arg(long, help = "Only show todos with this completion state (true/false)")]
    pub completed: Option<bool>,
}

impl From<ListArgs> for TodoFilter {
    fn from(args: ListArgs) -> Self {
        TodoFilter {
            user_id: args.user_id,
            is_completed: args.completed,
        }
    }
}

pub async fn list(client: &ConvexClient, args: ListArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let filter = TodoFilter::from(args);
    let response = client.query(GET_TODOS, &filter).await?;

    let outcome = Outcome::from_status(response.status);
    if !outcome.is_success() {
        return output_outcome(&output_format, &outcome, "listed", &response);
    }

    let todos: Vec<StoredTodo> = response.value()?;
    tracing::info!("Fetched {} todos for {}", todos.len(), filter.user_id);
    output_todos(&output_format, &todos)
}
