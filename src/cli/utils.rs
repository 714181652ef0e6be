use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::convex::FunctionResponse;
use crate::submitter::Outcome;
use crate::todo::StoredTodo;

/// Build the JSON report for a function call outcome
pub fn outcome_json(outcome: &Outcome, verb: &str, response: &FunctionResponse) -> Value {
    let mut report = json!({
        "success": outcome.is_success(),
        "message": outcome.message(verb),
        "status": response.status.as_u16(),
    });

    // The body is informational only; a non-JSON body is not an error here
    if let Ok(result) = response.result() {
        if !result.log_lines().is_empty() {
            report["logLines"] = json!(result.log_lines());
        }
        if let Ok(value) = result.into_value() {
            report["value"] = value;
        }
    }

    report
}

/// Output the outcome line of a function call in the appropriate format
pub fn output_outcome(
    output_format: &OutputFormat,
    outcome: &Outcome,
    verb: &str,
    response: &FunctionResponse,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome_json(outcome, verb, response))?);
        }
        OutputFormat::Text => {
            println!("{}", outcome.message(verb));
        }
    }
    Ok(())
}

const TITLE_WIDTH: usize = 30;

/// Clip `text` to `width` characters, marking the cut with `...`
pub fn fit_column(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Output fetched todos as a table or JSON array
pub fn output_todos(output_format: &OutputFormat, todos: &[StoredTodo]) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "todos": todos }))?);
        }
        OutputFormat::Text => {
            if todos.is_empty() {
                println!("No todos found");
                return Ok(());
            }

            println!("{:<34} {:<6} {:<width$} {}", "ID", "DONE", "TITLE", "DESCRIPTION", width = TITLE_WIDTH);
            println!("{}", "-".repeat(90));
            for todo in todos {
                let done = if todo.is_completed { "yes" } else { "no" };
                println!(
                    "{:<34} {:<6} {:<width$} {}",
                    todo.id,
                    done,
                    fit_column(&todo.title, TITLE_WIDTH),
                    todo.description.as_deref().unwrap_or(""),
                    width = TITLE_WIDTH
                );
            }
        }
    }
    Ok(())
}
