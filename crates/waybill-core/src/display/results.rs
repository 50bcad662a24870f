//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create and
//! update operations with consistent messaging and resource display.

use std::fmt;

use crate::models::{Item, Party};

/// Wrapper type for displaying the result of create operations.
///
/// This provides consistent formatting for creation results, including a
/// success message with the resource ID followed by the full resource.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Party> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Registered party with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created item with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The wrapper can track and display specific changes made during the
/// update, giving users clear feedback about what was modified.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated item with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    #[test]
    fn test_create_result_for_item() {
        let item = Item {
            id: 12,
            party_id: 3,
            item: "Flange".to_string(),
            qty: 4,
            cancelled: false,
            steps: Default::default(),
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        };

        let output = format!("{}", CreateResult::new(item));
        assert!(output.contains("Created item with ID: 12"));
        assert!(output.contains("Flange"));
    }

    #[test]
    fn test_update_result_lists_changes() {
        let item = Item {
            id: 12,
            party_id: 3,
            item: "Flange".to_string(),
            qty: 4,
            cancelled: false,
            steps: Default::default(),
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        };

        let changes = vec!["Completed step 1".to_string()];
        let output = format!("{}", UpdateResult::with_changes(item, changes));
        assert!(output.contains("Changes made:"));
        assert!(output.contains("Completed step 1"));
    }
}
