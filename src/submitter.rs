use reqwest::StatusCode;

use crate::convex::{ConvexClient, FunctionResponse};
use crate::error::ConvexError;
use crate::todo::{Todo, TodoId, TodoPatch, DELETE_TODO, SAVE_TODO, UPDATE_TODO};

/// Result of a single mutation: HTTP 200 or anything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed { status: u16 },
}

impl Outcome {
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::OK {
            Outcome::Succeeded
        } else {
            Outcome::Failed {
                status: status.as_u16(),
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }

    /// Console line for this outcome; `verb` is the past tense shown on success
    pub fn message(&self, verb: &str) -> String {
        match self {
            Outcome::Succeeded => format!("Successfully {}...", verb),
            Outcome::Failed { status } => format!("Something went wrong... Status code: {}", status),
        }
    }
}

/// Sends todo mutations, one request per call
pub struct Submitter {
    client: ConvexClient,
}

impl Submitter {
    pub fn new(client: ConvexClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ConvexClient {
        &self.client
    }

    pub async fn save(&self, todo: &Todo) -> Result<(Outcome, FunctionResponse), ConvexError> {
        let response = self.client.mutation(SAVE_TODO, todo).await?;
        Ok(Self::report(SAVE_TODO, response))
    }

    pub async fn update(&self, patch: &TodoPatch) -> Result<(Outcome, FunctionResponse), ConvexError> {
        let response = self.client.mutation(UPDATE_TODO, patch).await?;
        Ok(Self::report(UPDATE_TODO, response))
    }

    pub async fn delete(&self, id: &TodoId) -> Result<(Outcome, FunctionResponse), ConvexError> {
        let response = self.client.mutation(DELETE_TODO, id).await?;
        Ok(Self::report(DELETE_TODO, response))
    }

    fn report(path: &str, response: FunctionResponse) -> (Outcome, FunctionResponse) {
        let outcome = Outcome::from_status(response.status);
        match &outcome {
            Outcome::Succeeded => tracing::info!("{} succeeded", path),
            Outcome::Failed { status } => tracing::info!("{} failed with status {}", path, status),
        }
        (outcome, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_200_counts_as_success() {
        assert!(Outcome::from_status(StatusCode::OK).is_success());
        assert_eq!(
            Outcome::from_status(StatusCode::CREATED),
            Outcome::Failed { status: 201 }
        );
    }

    #[test]
    fn messages_match_fixed_lines() {
        assert_eq!(Outcome::Succeeded.message("inserted"), "Successfully inserted...");
        assert_eq!(
            Outcome::Failed { status: 500 }.message("inserted"),
            "Something went wrong... Status code: 500"
        );
    }
}
