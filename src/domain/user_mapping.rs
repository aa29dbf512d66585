//! Mapping of raw names found in source rows to dashboard display names.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::types::{PersonName, SalesRole, TypeConstraintError, UserMappingId};

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct UserMapping {
    pub id: UserMappingId,
    pub source_name: PersonName,
    pub display_name: PersonName,
    pub role: SalesRole,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewUserMapping {
    pub source_name: PersonName,
    pub display_name: PersonName,
    pub role: SalesRole,
    pub active: bool,
}

impl NewUserMapping {
    #[must_use]
    pub fn new(
        source_name: PersonName,
        display_name: PersonName,
        role: SalesRole,
        active: bool,
    ) -> Self {
        Self {
            source_name,
            display_name,
            role,
            active,
        }
    }

    /// Builds a mapping from raw strings, validating each value.
    pub fn try_new(
        source_name: &str,
        display_name: &str,
        role: &str,
        active: bool,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self::new(
            PersonName::new(source_name)?,
            PersonName::new(display_name)?,
            role.parse()?,
            active,
        ))
    }
}

/// Full replacement of a mapping row.
pub type UpdateUserMapping = NewUserMapping;

/// Resolves source names to display names for a single role.
#[derive(Debug, Default)]
pub struct NameResolver {
    names: HashMap<String, String>,
}

impl NameResolver {
    /// Keeps only active mappings of `role`. Lookups are case-insensitive.
    pub fn for_role(mappings: &[UserMapping], role: SalesRole) -> Self {
        let names = mappings
            .iter()
            .filter(|m| m.active && m.role == role)
            .map(|m| {
                (
                    m.source_name.as_str().to_lowercase(),
                    m.display_name.as_str().to_string(),
                )
            })
            .collect();
        Self { names }
    }

    /// Display name for `raw`, or the trimmed raw name when unmapped.
    pub fn resolve(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        self.names
            .get(&trimmed.to_lowercase())
            .cloned()
            .unwrap_or_else(|| trimmed.to_string())
    }

    /// Whether `raw` resolves to `display_name`, ignoring case.
    pub fn resolves_to(&self, raw: &str, display_name: &str) -> bool {
        self.resolve(raw).to_lowercase() == display_name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(id: i32, source: &str, display: &str, role: SalesRole, active: bool) -> UserMapping {
        UserMapping {
            id: UserMappingId::new(id).expect("valid id"),
            source_name: PersonName::new(source).expect("valid name"),
            display_name: PersonName::new(display).expect("valid name"),
            role,
            active,
        }
    }

    #[test]
    fn resolver_uses_active_mappings_of_the_role() {
        let mappings = vec![
            mapping(1, "jsmith", "John Smith", SalesRole::Sdr, true),
            mapping(2, "adoe", "Anna Doe", SalesRole::Sdr, false),
            mapping(3, "jsmith", "J. Smith (closer)", SalesRole::Closer, true),
        ];
        let resolver = NameResolver::for_role(&mappings, SalesRole::Sdr);

        assert_eq!(resolver.resolve(" JSmith "), "John Smith");
        assert_eq!(resolver.resolve("adoe"), "adoe");
        assert_eq!(resolver.resolve("unknown"), "unknown");
    }

    #[test]
    fn resolves_to_ignores_case_and_padding() {
        let mappings = vec![
            mapping(1, "asmith", "Alice Smith", SalesRole::Sdr, true),
            mapping(2, "old_alice", "Alice Smith", SalesRole::Sdr, false),
        ];
        let resolver = NameResolver::for_role(&mappings, SalesRole::Sdr);

        assert!(resolver.resolves_to("ASmith", "Alice Smith"));
        assert!(resolver.resolves_to(" asmith ", "alice smith"));
        assert!(resolver.resolves_to("Dana", "dana"));
        assert!(!resolver.resolves_to("old_alice", "Alice Smith"));
    }

    #[test]
    fn try_new_validates_inputs() {
        assert!(NewUserMapping::try_new("a", "A", "sdr", true).is_ok());
        assert!(NewUserMapping::try_new("a", " ", "sdr", true).is_err());
        assert!(NewUserMapping::try_new("a", "A", "boss", true).is_err());
    }
}
