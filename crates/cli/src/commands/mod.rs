pub mod config;
pub mod eval;

use serde::Serialize;

/// Outcome of one CLI invocation: a single JSON line for stdout plus the
/// process exit code.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome<'a> {
    command: &'a str,
    status: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_class: Option<&'a str>,
    message: String,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        Self::emit(
            0,
            CommandOutcome { command, status: "ok", error_class: None, message: message.into() },
        )
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        Self::emit(
            exit_code,
            CommandOutcome {
                command,
                status: "error",
                error_class: Some(error_class),
                message: message.into(),
            },
        )
    }

    fn emit(exit_code: u8, payload: CommandOutcome<'_>) -> Self {
        let output = serde_json::to_string(&payload).unwrap_or_else(|error| {
            serde_json::json!({
                "command": payload.command,
                "status": "error",
                "error_class": "serialization",
                "message": error.to_string(),
            })
            .to_string()
        });
        Self { exit_code, output }
    }
}

#[cfg(test)]
mod tests {
    use super::CommandResult;

    #[test]
    fn success_outcome_is_a_json_line_without_an_error_class() {
        let result = CommandResult::success("eval", "500mlが一番オトク");

        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("\"status\":\"ok\""));
        assert!(result.output.contains("500mlが一番オトク"));
        assert!(!result.output.contains("error_class"));
    }

    #[test]
    fn failure_outcome_carries_the_class_and_exit_code() {
        let result = CommandResult::failure("eval", "no_items_recognized", "nothing parsed", 1);

        assert_eq!(result.exit_code, 1);
        assert!(result.output.contains("\"status\":\"error\""));
        assert!(result.output.contains("\"error_class\":\"no_items_recognized\""));
    }
}
