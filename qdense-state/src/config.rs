//! Register configuration

use serde::{Deserialize, Serialize};

/// Configuration for a [`RegisterState`](crate::RegisterState)
///
/// Full-register operators take `4^n` complex entries, so the qubit count
/// is capped well below what a state vector alone would allow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterConfig {
    /// Largest register that may be created
    pub max_qubits: usize,

    /// Tolerance used by [`RegisterState::is_normalized`](crate::RegisterState::is_normalized)
    pub normalization_epsilon: f64,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            max_qubits: 14,
            normalization_epsilon: 1e-10,
        }
    }
}

impl RegisterConfig {
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits;
        self
    }

    pub fn with_normalization_epsilon(mut self, epsilon: f64) -> Self {
        self.normalization_epsilon = epsilon;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RegisterConfig::default();
        assert_eq!(config.max_qubits, 14);
        assert_eq!(config.normalization_epsilon, 1e-10);
    }

    #[test]
    fn test_builder() {
        let config = RegisterConfig::default()
            .with_max_qubits(4)
            .with_normalization_epsilon(1e-6);
        assert_eq!(config.max_qubits, 4);
        assert_eq!(config.normalization_epsilon, 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RegisterConfig = serde_json::from_str(r#"{"max_qubits": 6}"#).unwrap();
        assert_eq!(config.max_qubits, 6);
        assert_eq!(config.normalization_epsilon, 1e-10);

        let round_trip: RegisterConfig =
            serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(round_trip, config);
    }
}
