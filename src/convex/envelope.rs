use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConvexError;

/// Request body for `/api/mutation` and `/api/query`
#[derive(Debug, Clone, Serialize)]
pub struct FunctionCall<'a, A: Serialize> {
    pub path: &'a str,
    pub args: &'a A,
    pub format: &'static str,
}

impl<'a, A: Serialize> FunctionCall<'a, A> {
    pub fn json(path: &'a str, args: &'a A) -> Self {
        Self {
            path,
            args,
            format: "json",
        }
    }
}

/// Response body of a Convex function call
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FunctionResult {
    Success {
        value: Value,
        #[serde(default, rename = "logLines")]
        log_lines: Vec<String>,
    },
    Error {
        #[serde(rename = "errorMessage")]
        error_message: String,
        #[serde(default, rename = "logLines")]
        log_lines: Vec<String>,
    },
}

impl FunctionResult {
    pub fn into_value(self) -> Result<Value, ConvexError> {
        match self {
            FunctionResult::Success { value, .. } => Ok(value),
            FunctionResult::Error { error_message, .. } => Err(ConvexError::function(error_message)),
        }
    }

    pub fn log_lines(&self) -> &[String] {
        match self {
            FunctionResult::Success { log_lines, .. } | FunctionResult::Error { log_lines, .. } => log_lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::{Todo, SAVE_TODO};
    use serde_json::json;

    #[test]
    fn envelope_has_exactly_path_args_format() {
        let todo = Todo::default();
        let value = serde_json::to_value(FunctionCall::json(SAVE_TODO, &todo)).unwrap();

        let mut keys: Vec<_> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["args", "format", "path"]);
        assert_eq!(value["path"], json!("todoFunc:saveTodo"));
        assert_eq!(value["format"], json!("json"));
        assert_eq!(value["args"]["is_completed"], json!(false));
    }

    #[test]
    fn error_result_maps_to_function_error() {
        let result: FunctionResult = serde_json::from_value(json!({
            "status": "error",
            "errorMessage": "Uncaught Error: bad args",
            "logLines": ["[LOG] called"]
        }))
        .unwrap();
        assert_eq!(result.log_lines(), ["[LOG] called"]);

        match result.into_value() {
            Err(ConvexError::Function(message)) => assert_eq!(message, "Uncaught Error: bad args"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn success_result_yields_value() {
        let result: FunctionResult =
            serde_json::from_value(json!({"status": "success", "value": "k57abc"})).unwrap();
        assert!(result.log_lines().is_empty());
        assert_eq!(result.into_value().unwrap(), json!("k57abc"));
    }
}
