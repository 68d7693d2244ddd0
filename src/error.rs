use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{} not found", .path.display())]
    CatalogUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid recipe catalog: {reason}", .path.display())]
    CatalogMalformed { path: PathBuf, reason: String },

    #[error("No ingredients entered")]
    NoInputProvided,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Remediation line shown under the error message, if there is one
    pub fn hint(&self) -> Option<String> {
        match self {
            Error::CatalogUnavailable { path, source } => {
                if source.kind() == std::io::ErrorKind::NotFound {
                    Some(format!(
                        "Please make sure {} exists, or point RECIPES_PATH / --catalog at your recipe file.",
                        path.display()
                    ))
                } else {
                    Some(format!("Could not read {}: {source}", path.display()))
                }
            }
            Error::CatalogMalformed { .. } => Some(
                "The catalog must look like {\"recipes\": [{\"name\": ..., \"ingredients\": [...]}]}."
                    .to_string(),
            ),
            Error::NoInputProvided => Some("Example: eggs, flour, milk, sugar".to_string()),
            Error::Config(_) | Error::Io(_) | Error::Json(_) => None,
        }
    }

    /// Process exit status for this failure
    pub fn exit_code(&self) -> u8 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_malformed_messages_differ() {
        let missing = Error::CatalogUnavailable {
            path: "recipes.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let malformed = Error::CatalogMalformed {
            path: "recipes.json".into(),
            reason: "expected value at line 1 column 1".to_string(),
        };

        assert_eq!(missing.to_string(), "recipes.json not found");
        assert!(malformed.to_string().contains("is not a valid recipe catalog"));
        assert_ne!(missing.hint(), malformed.hint());
        assert!(missing.hint().unwrap().contains("Please make sure recipes.json exists"));
    }

    #[test]
    fn test_unreadable_catalog_hint_includes_cause() {
        let err = Error::CatalogUnavailable {
            path: "recipes.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(err.hint().unwrap().contains("denied"));
    }

    #[test]
    fn test_failures_exit_non_zero() {
        assert_eq!(Error::NoInputProvided.exit_code(), 1);
        assert_eq!(Error::Config("bad".to_string()).exit_code(), 1);
    }
}
