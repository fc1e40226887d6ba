//! Policy resolution: coarse permission labels to concrete tool grants.
//!
//! The resolver is pure and total. Every [`ToolPolicy`] maps to a
//! [`ToolGrant`] whose allowed and restricted sets partition the
//! registry; it never fails.

use crate::models::RiskLevel;
use crate::registry::ToolRegistry;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Coarse label controlling which risk tiers are permitted for one
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolPolicy {
    /// Every registered tool is permitted.
    #[serde(rename = "ALLOW_ALL")]
    AllowAll,

    /// Only LOW-risk tools are permitted.
    #[serde(rename = "RESTRICTED")]
    Restricted,

    /// No tools are permitted.
    #[serde(rename = "SHUTDOWN")]
    Shutdown,
}

impl std::fmt::Display for ToolPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllowAll => write!(f, "ALLOW_ALL"),
            Self::Restricted => write!(f, "RESTRICTED"),
            Self::Shutdown => write!(f, "SHUTDOWN"),
        }
    }
}

impl FromStr for ToolPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALLOW_ALL" => Ok(Self::AllowAll),
            "RESTRICTED" => Ok(Self::Restricted),
            "SHUTDOWN" => Ok(Self::Shutdown),
            other => Err(format!("unknown tool policy label: '{other}'")),
        }
    }
}

/// A concrete per-request tool grant.
///
/// # Invariants
///
/// - `allowed ∩ restricted = ∅`
/// - `allowed ∪ restricted =` the full registry the grant was resolved
///   against
///
/// `BTreeSet` keeps the sets deterministically ordered, so identical
/// inputs produce bit-identical serialized decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolGrant {
    /// The policy this grant was resolved from.
    pub policy: ToolPolicy,

    /// Tools the downstream model may invoke.
    pub allowed: BTreeSet<String>,

    /// Tools withheld for this request.
    pub restricted: BTreeSet<String>,
}

impl ToolGrant {
    /// Resolves a policy label against a registry.
    pub fn resolve(policy: ToolPolicy, registry: &ToolRegistry) -> Self {
        let allowed: BTreeSet<String> = match policy {
            ToolPolicy::AllowAll => registry.iter().map(|t| t.name.clone()).collect(),
            ToolPolicy::Restricted => registry
                .iter()
                .filter(|t| t.risk_level == RiskLevel::Low)
                .map(|t| t.name.clone())
                .collect(),
            ToolPolicy::Shutdown => BTreeSet::new(),
        };

        let restricted: BTreeSet<String> = registry
            .iter()
            .map(|t| t.name.clone())
            .filter(|name| !allowed.contains(name))
            .collect();

        Self {
            policy,
            allowed,
            restricted,
        }
    }

    /// A grant permitting nothing, restricting the whole registry.
    ///
    /// Used for blocked decisions and for modes that imply no tool
    /// access at all.
    pub fn shutdown(registry: &ToolRegistry) -> Self {
        Self::resolve(ToolPolicy::Shutdown, registry)
    }

    /// Returns true if the named tool is permitted by this grant.
    pub fn permits(&self, name: &str) -> bool {
        self.allowed.contains(name)
    }
}
