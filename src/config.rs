//! Machine configuration.
//!
//! The only policy knob is how a transition confirms its destination before
//! committing it. Configuration is plain serde data so it can live next to
//! the rest of an application's settings.

use crate::builder::BuildError;
use serde::{Deserialize, Serialize};

/// How a transition confirms its destination before committing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reconciliation {
    /// Re-run the loader after the operation and require it to report the
    /// declared destination.
    #[default]
    Strict,

    /// Trust the declared destination unconditionally.
    Lenient,
}

/// Settings applied to every machine produced by a binder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub reconciliation: Reconciliation,
}

impl MachineConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_is_the_default() {
        assert_eq!(Reconciliation::default(), Reconciliation::Strict);
        assert_eq!(
            MachineConfig::default().reconciliation,
            Reconciliation::Strict
        );
    }

    #[test]
    fn parses_lenient_policy() {
        let config = MachineConfig::from_json(r#"{ "reconciliation": "lenient" }"#).unwrap();
        assert_eq!(config.reconciliation, Reconciliation::Lenient);
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config = MachineConfig::from_json("{}").unwrap();
        assert_eq!(config, MachineConfig::default());
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let result = MachineConfig::from_json(r#"{ "reconciliation": "optimistic" }"#);
        assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
    }
}
