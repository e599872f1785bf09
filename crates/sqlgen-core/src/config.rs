//! Render configuration.

use serde::{Deserialize, Serialize};

/// How validation failures found during rendering are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Abort the render and return the violation as an error.
    #[default]
    Strict,
    /// Log the violation with `tracing` and keep rendering.
    Warn,
    /// Skip validation entirely.
    Trusted,
}

/// Options threaded through every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Validation failure handling.
    pub validation: ValidationPolicy,
}

impl RenderConfig {
    /// Creates a configuration with the given policy.
    #[must_use]
    pub const fn new(validation: ValidationPolicy) -> Self {
        Self { validation }
    }

    /// Configuration that reports violations as errors.
    #[must_use]
    pub const fn strict() -> Self {
        Self::new(ValidationPolicy::Strict)
    }

    /// Configuration that logs violations and keeps rendering.
    #[must_use]
    pub const fn warn() -> Self {
        Self::new(ValidationPolicy::Warn)
    }

    /// Configuration that skips validation.
    #[must_use]
    pub const fn trusted() -> Self {
        Self::new(ValidationPolicy::Trusted)
    }
}
