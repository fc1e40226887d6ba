//! The Tool Registry facade.
//!
//! A process-wide, read-only catalog of dangerous operations. Built
//! once at startup, then shared (via `Arc`) into every pipeline
//! invocation without synchronization.

use crate::models::{RegistryError, RiskLevel, ToolDescriptor};
use crate::policy::{ToolGrant, ToolPolicy};
use crate::Result;

use std::collections::BTreeMap;

/// The read-only tool catalog.
///
/// # Invariants
///
/// - Tool names are unique (enforced at construction).
/// - The catalog never changes after construction; there is no
///   mutation API on a built registry.
///
/// # Example
///
/// ```rust
/// use shield_registry::{RiskLevel, ToolDescriptor, ToolRegistry};
///
/// let registry = ToolRegistry::builder()
///     .tool(ToolDescriptor::new("lookup_item", "Look up catalog items", RiskLevel::Low))
///     .tool(ToolDescriptor::new("execute_sql", "Run a SQL statement", RiskLevel::High))
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.len(), 2);
/// assert!(registry.get("execute_sql").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    // BTreeMap keeps iteration order deterministic across runs.
    tools: BTreeMap<String, ToolDescriptor>,
}

impl ToolRegistry {
    /// Starts building a registry.
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder { tools: Vec::new() }
    }

    /// The catalog of dangerous operations the original deployment
    /// exposes to the downstream model.
    pub fn default_catalog() -> Self {
        Self::builder()
            .tool(ToolDescriptor::new(
                "search_product_catalog",
                "Search the public product catalog",
                RiskLevel::Low,
            ))
            .tool(ToolDescriptor::new(
                "read_policy_handbook",
                "Read public policy and handbook documents",
                RiskLevel::Low,
            ))
            .tool(ToolDescriptor::new(
                "query_user_records",
                "Query records scoped to the requesting user",
                RiskLevel::Medium,
            ))
            .tool(ToolDescriptor::new(
                "send_notification",
                "Send a notification on the user's behalf",
                RiskLevel::Medium,
            ))
            .tool(ToolDescriptor::new(
                "execute_sql",
                "Execute an arbitrary SQL statement",
                RiskLevel::High,
            ))
            .tool(ToolDescriptor::new(
                "delete_user_records",
                "Delete records from a user-scoped table",
                RiskLevel::High,
            ))
            .tool(ToolDescriptor::new(
                "drop_database_table",
                "Drop an entire database table",
                RiskLevel::Critical,
            ))
            .build()
            .expect("default catalog has unique names")
    }

    /// Builds a registry directly from a descriptor list.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if two descriptors share
    /// a name, or [`RegistryError::InvalidDescriptor`] for an empty name.
    pub fn from_descriptors(descriptors: Vec<ToolDescriptor>) -> Result<Self> {
        let mut builder = Self::builder();
        for descriptor in descriptors {
            builder = builder.tool(descriptor);
        }
        builder.build()
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.get(name)
    }

    /// Returns true if a tool with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Iterates over all registered tools in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.values()
    }

    /// All registered tool names, in deterministic order.
    pub fn names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Resolves a policy label into a concrete tool grant.
    ///
    /// Pure and total: every policy maps to a grant, and the grant's
    /// allowed/restricted sets partition the registry.
    pub fn grant(&self, policy: ToolPolicy) -> ToolGrant {
        ToolGrant::resolve(policy, self)
    }
}

/// Builder enforcing the unique-name invariant at construction.
pub struct ToolRegistryBuilder {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistryBuilder {
    /// Adds a tool descriptor.
    pub fn tool(mut self, descriptor: ToolDescriptor) -> Self {
        self.tools.push(descriptor);
        self
    }

    /// Finalizes the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] on a repeated name and
    /// [`RegistryError::InvalidDescriptor`] on an empty name.
    pub fn build(self) -> Result<ToolRegistry> {
        let mut tools = BTreeMap::new();
        for descriptor in self.tools {
            if descriptor.name.trim().is_empty() {
                return Err(RegistryError::InvalidDescriptor(
                    "tool name must not be empty".to_string(),
                ));
            }
            if tools.contains_key(&descriptor.name) {
                return Err(RegistryError::DuplicateName(descriptor.name));
            }
            tools.insert(descriptor.name.clone(), descriptor);
        }
        Ok(ToolRegistry { tools })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tool_registry() -> ToolRegistry {
        ToolRegistry::builder()
            .tool(ToolDescriptor::new("a_low", "low tool", RiskLevel::Low))
            .tool(ToolDescriptor::new("b_high", "high tool", RiskLevel::High))
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_unique_names() {
        let registry = two_tool_registry();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("a_low"));
        assert!(registry.contains("b_high"));
    }

    #[test]
    fn test_builder_rejects_duplicates() {
        let result = ToolRegistry::builder()
            .tool(ToolDescriptor::new("same", "first", RiskLevel::Low))
            .tool(ToolDescriptor::new("same", "second", RiskLevel::High))
            .build();

        assert!(matches!(result, Err(RegistryError::DuplicateName(name)) if name == "same"));
    }

    #[test]
    fn test_builder_rejects_empty_name() {
        let result = ToolRegistry::builder()
            .tool(ToolDescriptor::new("", "nameless", RiskLevel::Low))
            .build();

        assert!(matches!(result, Err(RegistryError::InvalidDescriptor(_))));
    }

    #[test]
    fn test_from_descriptors() {
        let registry = ToolRegistry::from_descriptors(vec![ToolDescriptor::new(
            "only",
            "only tool",
            RiskLevel::Medium,
        )])
        .unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_names_deterministic_order() {
        let registry = ToolRegistry::builder()
            .tool(ToolDescriptor::new("zeta", "z", RiskLevel::Low))
            .tool(ToolDescriptor::new("alpha", "a", RiskLevel::Low))
            .build()
            .unwrap();

        assert_eq!(registry.names(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_default_catalog_shape() {
        let registry = ToolRegistry::default_catalog();
        assert!(!registry.is_empty());
        assert!(registry.contains("drop_database_table"));
        assert_eq!(
            registry.get("drop_database_table").unwrap().risk_level,
            RiskLevel::Critical
        );
        assert!(registry
            .iter()
            .any(|t| t.risk_level == RiskLevel::Low));
    }

    #[test]
    fn test_lookup_unknown_tool() {
        let registry = two_tool_registry();
        assert!(registry.get("missing").is_none());
    }
}
