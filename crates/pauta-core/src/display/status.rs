//! Outcome messages for operations that do not render a resource.
//!
//! Silent no-ops in the planner (unknown post id, unknown batch id)
//! still need user-visible feedback at the interface layer; this wrapper
//! formats them, optionally with a hint naming the command that lists
//! valid identifiers.

use std::fmt;

/// Outcome line for an operation, with an optional follow-up hint.
pub struct OperationStatus {
    message: String,
    hint: Option<String>,
    success: bool,
}

impl OperationStatus {
    /// An operation that went through.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: None,
            success: true,
        }
    }

    /// An operation that had no effect or was rejected.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: None,
            success: false,
        }
    }

    /// Attaches a hint line pointing the user at a next step.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{prefix} {}", self.message)?;
        if let Some(hint) = &self.hint {
            writeln!(f, "Hint: {hint}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_prefixes() {
        let restored = OperationStatus::success("Restored snapshot 2 of 5");
        assert!(format!("{restored}").contains("Success: Restored snapshot"));

        let missing = OperationStatus::failure("No post with id 'zzz9999' in that week");
        assert!(format!("{missing}").starts_with("Error:"));
    }

    #[test]
    fn test_hint_renders_on_its_own_line() {
        let status = OperationStatus::failure("No post with id 'zzz9999' in that week")
            .with_hint("run 'pauta post list' to see the ids for a week");
        let text = format!("{status}");
        assert!(text.contains("\nHint: run 'pauta post list'"));
    }
}
