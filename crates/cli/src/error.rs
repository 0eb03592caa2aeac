//! CLI error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Planner(#[from] autoplan_planner::PlannerError),

    #[error("{0}")]
    Message(String),
}

impl From<autoplan_planner::DocumentError> for CliError {
    fn from(error: autoplan_planner::DocumentError) -> Self {
        CliError::Planner(error.into())
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use autoplan_planner::{DocumentError, PlannerError, ResolveError};

    #[test]
    fn test_document_error_wraps_as_planner_error() {
        let error: CliError = DocumentError::InvalidYaml("bad indent".to_string()).into();
        assert!(matches!(
            error,
            CliError::Planner(PlannerError::Document(DocumentError::InvalidYaml(_)))
        ));
        assert_eq!(error.to_string(), "Document error: Invalid YAML: bad indent");
    }

    #[test]
    fn test_planner_error_message_is_passed_through() {
        let error: CliError = PlannerError::from(ResolveError::Cycle {
            chain: vec!["/r/a".to_string(), "/r/a".to_string()],
        })
        .into();
        assert_eq!(
            error.to_string(),
            "Resolution error: Dependency cycle detected: /r/a -> /r/a"
        );
    }
}
