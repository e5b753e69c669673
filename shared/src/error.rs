use thiserror::Error;

pub const MISSING_AUTH_MESSAGE: &str = "No auth token found. Please log in first.";
pub const RETRY_LATER_MESSAGE: &str = "An error occurred. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("no auth token")]
    MissingAuth,

    #[error("missing selection: {0}")]
    MissingSelection(&'static str),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Http {
        status: u16,
        message: Option<String>,
    },

    #[error("parse error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown inline next to the section that issued `operation`.
    pub fn user_message(&self, operation: Operation) -> String {
        match self {
            ApiError::MissingAuth => MISSING_AUTH_MESSAGE.to_string(),
            ApiError::MissingSelection(message) => (*message).to_string(),
            ApiError::Network(_) | ApiError::Decode(_) => RETRY_LATER_MESSAGE.to_string(),
            ApiError::Http { message, .. } => message
                .as_deref()
                .filter(|message| !message.trim().is_empty())
                .unwrap_or(operation.failure_fallback())
                .to_string(),
        }
    }

    /// Pull `message` out of an error body; bodies that are not JSON objects yield `None`.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                let message = value.get("message")?;
                match message {
                    serde_json::Value::String(text) => Some(text.clone()),
                    // Validation pipes return a list of messages.
                    serde_json::Value::Array(items) => {
                        let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
                        (!parts.is_empty()).then(|| parts.join(", "))
                    }
                    _ => None,
                }
            });
        ApiError::Http { status, message }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    Register,
    FetchPlanets,
    FetchBases,
    CreateBase,
    UpdateBase,
    DeleteBase,
    FetchBuildings,
    CreateBuilding,
    UpdateBuilding,
    DeleteBuilding,
    FetchCatalogs,
    FetchRecipes,
}

impl Operation {
    pub fn failure_fallback(self) -> &'static str {
        match self {
            Operation::Login => "Login failed",
            Operation::Register => "Registration failed",
            Operation::FetchPlanets => "Failed to fetch planets.",
            Operation::FetchBases => "Failed to fetch bases.",
            Operation::CreateBase => "Failed to create base.",
            Operation::UpdateBase => "Failed to update base.",
            Operation::DeleteBase => "Failed to delete base.",
            Operation::FetchBuildings => "Failed to fetch buildings.",
            Operation::CreateBuilding => "Failed to create building.",
            Operation::UpdateBuilding => "Failed to update building.",
            Operation::DeleteBuilding => "Failed to delete building.",
            Operation::FetchCatalogs => "Failed to fetch catalogs.",
            Operation::FetchRecipes => "Failed to fetch recipes.",
        }
    }

    pub fn success_message(self) -> Option<&'static str> {
        match self {
            Operation::CreateBase => Some("Base created successfully."),
            Operation::UpdateBase => Some("Base updated successfully."),
            Operation::DeleteBase => Some("Base deleted successfully."),
            Operation::CreateBuilding => Some("Building created successfully."),
            Operation::UpdateBuilding => Some("Building updated successfully."),
            Operation::DeleteBuilding => Some("Building deleted successfully."),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = ApiError::from_status(409, r#"{"message":"Base name taken"}"#);
        assert_eq!(err.user_message(Operation::CreateBase), "Base name taken");
    }

    #[test]
    fn non_json_error_body_uses_fallback() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(
            err,
            ApiError::Http {
                status: 502,
                message: None
            }
        );
        assert_eq!(err.user_message(Operation::DeleteBase), "Failed to delete base.");
    }

    #[test]
    fn message_lists_are_joined() {
        let err = ApiError::from_status(400, r#"{"message":["name too short","size must be positive"]}"#);
        assert_eq!(
            err.user_message(Operation::UpdateBase),
            "name too short, size must be positive"
        );
    }

    #[test]
    fn blank_message_uses_fallback() {
        let err = ApiError::from_status(400, r#"{"message":"  "}"#);
        assert_eq!(err.user_message(Operation::Login), "Login failed");
    }

    #[test]
    fn transport_and_decode_failures_ask_to_retry() {
        let network = ApiError::Network("offline".into());
        let decode = ApiError::Decode("expected value".into());
        assert_eq!(network.user_message(Operation::FetchBases), RETRY_LATER_MESSAGE);
        assert_eq!(decode.user_message(Operation::FetchRecipes), RETRY_LATER_MESSAGE);
    }

    #[test]
    fn missing_auth_message_is_fixed() {
        assert_eq!(
            ApiError::MissingAuth.user_message(Operation::CreateBuilding),
            MISSING_AUTH_MESSAGE
        );
    }
}
