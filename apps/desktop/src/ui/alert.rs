//! Modal alerts built from command results.

use crate::commands::{CommandResult, Outcome};
use crate::error::ErrorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Error,
}

/// A transient modal; the form ignores other input until it is dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Alert {
            level: AlertLevel::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Alert {
            level: AlertLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    /// The alert to show for `result`, if any.
    ///
    /// ```text
    /// Ok(Completed(msg))        → Info  "Success"
    /// Ok(NotFound(msg))         → Info  "Not found"
    /// Ok(Refreshed | Skipped)   → none
    /// Err(ValidationError)      → Error "Error"
    /// Err(NotFound)             → Error "Not found"
    /// Err(DatabaseError|Internal) → Error "Database error"
    /// ```
    pub fn from_result(result: &CommandResult) -> Option<Alert> {
        match result {
            Ok(Outcome::Completed(message)) => Some(Alert::info("Success", message)),
            Ok(Outcome::NotFound(message)) => Some(Alert::info("Not found", message)),
            Ok(Outcome::Refreshed | Outcome::Skipped) => None,
            Err(e) => {
                let title = match e.code {
                    ErrorCode::ValidationError => "Error",
                    ErrorCode::NotFound => "Not found",
                    ErrorCode::DatabaseError | ErrorCode::Internal => "Database error",
                };
                Some(Alert::error(title, &e.message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_alert_mapping() {
        let ok: CommandResult = Ok(Outcome::Completed("Product added successfully".into()));
        assert_eq!(
            Alert::from_result(&ok),
            Some(Alert::info("Success", "Product added successfully"))
        );

        assert_eq!(Alert::from_result(&Ok(Outcome::Refreshed)), None);
        assert_eq!(Alert::from_result(&Ok(Outcome::Skipped)), None);

        let missing: CommandResult = Ok(Outcome::NotFound("nothing".into()));
        assert_eq!(Alert::from_result(&missing).unwrap().title, "Not found");

        let invalid: CommandResult = Err(ApiError::validation("price is required"));
        let alert = Alert::from_result(&invalid).unwrap();
        assert_eq!(alert.level, AlertLevel::Error);
        assert_eq!(alert.title, "Error");
        assert_eq!(alert.message, "price is required");

        let store: CommandResult = Err(ApiError::new(ErrorCode::DatabaseError, "disk I/O error"));
        assert_eq!(Alert::from_result(&store).unwrap().title, "Database error");
    }
}
