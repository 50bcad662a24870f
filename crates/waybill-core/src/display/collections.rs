//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain
//! objects with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{ItemSummary, Party};

/// Newtype wrapper for displaying collections of item summaries.
///
/// This provides clean Display formatting for item collections without
/// title handling, allowing consumers to handle titles separately. Handles
/// empty collections gracefully.
pub struct ItemSummaries(pub Vec<ItemSummary>);

impl ItemSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of item summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the item summary at the given index.
    pub fn get(&self, index: usize) -> Option<&ItemSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the item summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, ItemSummary> {
        self.0.iter()
    }
}

impl Index<usize> for ItemSummaries {
    type Output = ItemSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for ItemSummaries {
    type Item = ItemSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ItemSummaries {
    type Item = &'a ItemSummary;
    type IntoIter = std::slice::Iter<'a, ItemSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ItemSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No items found.")
        } else {
            for item in &self.0 {
                write!(f, "{}", item)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of parties.
///
/// Formats each party using its own Display implementation and handles
/// empty collections gracefully.
pub struct Parties(pub Vec<Party>);

impl Parties {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of parties in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the party at the given index.
    pub fn get(&self, index: usize) -> Option<&Party> {
        self.0.get(index)
    }

    /// Get an iterator over the parties.
    pub fn iter(&self) -> std::slice::Iter<'_, Party> {
        self.0.iter()
    }
}

impl Index<usize> for Parties {
    type Output = Party;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Parties {
    type Item = Party;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Parties {
    type Item = &'a Party;
    type IntoIter = std::slice::Iter<'a, Party>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Parties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No parties found.")
        } else {
            for party in &self.0 {
                write!(f, "{}", party)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::engine::PendingStep;

    fn create_test_summary() -> ItemSummary {
        ItemSummary {
            id: 1,
            party_id: 4,
            item: "Gasket".to_string(),
            qty: 10,
            cancelled: false,
            pending: PendingStep::Step(2),
            pending_planned: Some(Timestamp::from_second(1704103200).unwrap()),
        }
    }

    #[test]
    fn test_item_summaries_display() {
        let summaries = ItemSummaries(vec![create_test_summary()]);
        let output = format!("{}", summaries);
        assert!(output.contains("Gasket"));
        assert!(output.contains("ID: 1"));
        assert!(output.contains("step 2"));

        let empty = ItemSummaries(vec![]);
        assert_eq!(format!("{}", empty), "No items found.\n");
    }

    #[test]
    fn test_parties_display() {
        let party = Party {
            id: 4,
            name: "Sharma Traders".to_string(),
            contact: Some("98200 00000".to_string()),
            created_at: Timestamp::from_second(1704103200).unwrap(),
            updated_at: Timestamp::from_second(1704103200).unwrap(),
        };

        let parties = Parties(vec![party]);
        let output = format!("{}", parties);
        assert!(output.contains("Sharma Traders"));
        assert!(output.contains("98200 00000"));

        let empty = Parties(vec![]);
        assert_eq!(format!("{}", empty), "No parties found.\n");
    }
}
