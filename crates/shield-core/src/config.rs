//! Configuration types for the Decision Pipeline.

use serde::{Deserialize, Serialize};
use shield_council::CouncilConfig;
use shield_registry::{ToolDescriptor, ToolRegistry};
use shield_responder::ResponderConfig;
use shield_scorer::ScorerConfig;

/// Top-level configuration for the shield gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShieldConfig {
    /// Scoring Client configuration.
    #[serde(default)]
    pub scorer: ScorerConfig,

    /// Adjudication Client configuration.
    #[serde(default)]
    pub council: CouncilConfig,

    /// Response Client configuration.
    #[serde(default)]
    pub responder: ResponderConfig,

    /// Tool catalog. Empty means the built-in default catalog.
    #[serde(default)]
    pub tools: Vec<ToolDescriptor>,

    /// Global settings.
    #[serde(default)]
    pub global: GlobalConfig,
}

impl ShieldConfig {
    /// Builds the process-wide tool registry from configuration.
    ///
    /// # Errors
    ///
    /// Fails on duplicate or empty tool names.
    pub fn build_registry(&self) -> shield_registry::Result<ToolRegistry> {
        if self.tools.is_empty() {
            Ok(ToolRegistry::default_catalog())
        } else {
            ToolRegistry::from_descriptors(self.tools.clone())
        }
    }
}

/// Global pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Operator gate on chaos mode. Chaos is an unrestricted code path
    /// in a security-purpose system; it stays off unless explicitly
    /// enabled.
    pub allow_chaos_mode: bool,

    /// Orchestrator-side deadline for the scoring stage, seconds.
    pub score_timeout_secs: u64,

    /// Orchestrator-side deadline for the adjudication stage, seconds.
    pub adjudication_timeout_secs: u64,

    /// Orchestrator-side deadline for the response stage, seconds.
    pub response_timeout_secs: u64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            allow_chaos_mode: false,
            score_timeout_secs: 5,
            adjudication_timeout_secs: 30,
            response_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shield_registry::RiskLevel;

    #[test]
    fn test_default_config() {
        let config = ShieldConfig::default();
        assert!(!config.global.allow_chaos_mode);
        assert_eq!(config.global.score_timeout_secs, 5);
        assert_eq!(config.global.adjudication_timeout_secs, 30);
    }

    #[test]
    fn test_empty_tools_uses_default_catalog() {
        let config = ShieldConfig::default();
        let registry = config.build_registry().unwrap();
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_explicit_tools_override_catalog() {
        let config = ShieldConfig {
            tools: vec![ToolDescriptor::new("only_tool", "t", RiskLevel::Low)],
            ..Default::default()
        };
        let registry = config.build_registry().unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("only_tool"));
    }

    #[test]
    fn test_duplicate_tools_rejected() {
        let config = ShieldConfig {
            tools: vec![
                ToolDescriptor::new("dup", "a", RiskLevel::Low),
                ToolDescriptor::new("dup", "b", RiskLevel::High),
            ],
            ..Default::default()
        };
        assert!(config.build_registry().is_err());
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = ShieldConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ShieldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed.global.response_timeout_secs,
            config.global.response_timeout_secs
        );
    }

    #[test]
    fn test_partial_config_deserializes() {
        // Operators typically set only what they change.
        let parsed: ShieldConfig =
            serde_json::from_str(r#"{ "global": { "allow_chaos_mode": true, "score_timeout_secs": 2, "adjudication_timeout_secs": 10, "response_timeout_secs": 20 } }"#)
                .unwrap();
        assert!(parsed.global.allow_chaos_mode);
        assert!(parsed.tools.is_empty());
    }
}
