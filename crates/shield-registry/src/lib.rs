//! # Tool Registry
//!
//! Risk-classified catalog of the dangerous operations the downstream
//! model may be permitted to invoke, plus the policy resolver that maps
//! a coarse [`ToolPolicy`] label onto a concrete tool grant.
//!
//! ## Security Model
//!
//! | Component | Guarantee |
//! |-----------|-----------|
//! | [`ToolRegistry`] | Names unique; read-only after initialization |
//! | [`ToolPolicy`] | Coarse permission label (`ALLOW_ALL`/`RESTRICTED`/`SHUTDOWN`) |
//! | [`ToolGrant`] | allowed ∩ restricted = ∅; allowed ∪ restricted = registry |
//!
//! The registry is built once at process start and shared by reference
//! (typically `Arc`) across concurrent pipeline invocations; it is never
//! mutated afterwards, so no synchronization is required.
//!
//! ## Usage
//!
//! ```rust
//! use shield_registry::{ToolPolicy, ToolRegistry};
//!
//! let registry = ToolRegistry::default_catalog();
//! let grant = registry.grant(ToolPolicy::Restricted);
//!
//! // Only LOW-risk tools survive a RESTRICTED grant.
//! assert!(grant.allowed.len() < registry.len());
//! ```

mod models;
mod policy;
mod registry;

pub use models::{RegistryError, RiskLevel, ToolDescriptor};
pub use policy::{ToolGrant, ToolPolicy};
pub use registry::ToolRegistry;

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
