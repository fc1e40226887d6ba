//! Core data models for the Tool Registry.
//!
//! Strong typing keeps risk tiers and tool identities from degrading
//! into loose strings: a [`RiskLevel`] can only be one of four tiers,
//! and a [`ToolDescriptor`] always carries its classification.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Risk classification for a registered tool.
///
/// The tier determines which [`crate::ToolPolicy`] labels permit the
/// tool: a `RESTRICTED` grant admits only `Low`-risk tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// Read-only or otherwise harmless operations.
    Low,
    /// Operations touching user-scoped data.
    Medium,
    /// Operations that can modify or destroy records.
    High,
    /// Operations with irreversible, system-wide impact.
    Critical,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A named dangerous operation the downstream model may invoke.
///
/// Descriptors are registered once at startup; the registry enforces
/// name uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Unique identifier for the tool (e.g., "drop_database_table").
    pub name: String,

    /// Human-readable description of what the tool does.
    pub description: String,

    /// Risk classification driving policy resolution.
    #[serde(rename = "risk_level")]
    pub risk_level: RiskLevel,
}

impl ToolDescriptor {
    /// Creates a new tool descriptor.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            risk_level,
        }
    }
}

/// Errors that can occur while building the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A tool with the same name is already registered.
    #[error("Duplicate tool name: '{0}'")]
    DuplicateName(String),

    /// A tool descriptor failed validation.
    #[error("Invalid tool descriptor: {0}")]
    InvalidDescriptor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_serialization() {
        let json = serde_json::to_string(&RiskLevel::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");

        let parsed: RiskLevel = serde_json::from_str("\"LOW\"").unwrap();
        assert_eq!(parsed, RiskLevel::Low);
    }

    #[test]
    fn test_risk_level_display() {
        assert_eq!(RiskLevel::Low.to_string(), "LOW");
        assert_eq!(RiskLevel::High.to_string(), "HIGH");
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn test_tool_descriptor_new() {
        let tool = ToolDescriptor::new("execute_sql", "Run a SQL statement", RiskLevel::High);
        assert_eq!(tool.name, "execute_sql");
        assert_eq!(tool.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_tool_descriptor_wire_format() {
        let tool = ToolDescriptor::new("lookup", "Look up an item", RiskLevel::Low);
        let json = serde_json::to_value(&tool).unwrap();
        assert_eq!(json["risk_level"], "LOW");
    }

    #[test]
    fn test_duplicate_name_display() {
        let err = RegistryError::DuplicateName("execute_sql".to_string());
        assert!(err.to_string().contains("execute_sql"));
    }
}
