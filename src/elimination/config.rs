//! Tuning knobs of the simplicial classification.

use serde::{Deserialize, Serialize};

use crate::elim_error::ElimError;

/// Configuration of a [`SimplicialSet`](super::SimplicialSet).
///
/// Deserialisable so drivers can load it next to the rest of their settings:
///
/// ```rust
/// # use simplicial_set::elimination::SimplicialConfig;
/// let cfg: SimplicialConfig = serde_json::from_str(r#"{ "quasi_ratio": 0.9 }"#).unwrap();
/// assert_eq!(cfg.fill_threshold, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplicialConfig {
    /// Minimal fraction of adjacent neighbour pairs for a node to be
    /// quasi-simplicial.
    pub quasi_ratio: f64,
    /// Almost/quasi-simplicial nodes are eligible only while their log-weight
    /// stays below `log_tree_width + ln(1 + fill_threshold)`.
    pub fill_threshold: f64,
}

impl Default for SimplicialConfig {
    fn default() -> Self {
        Self {
            quasi_ratio: 0.99,
            fill_threshold: 0.0,
        }
    }
}

impl SimplicialConfig {
    pub fn validate(&self) -> Result<(), ElimError> {
        if !self.quasi_ratio.is_finite() {
            return Err(ElimError::InvalidArgument(format!(
                "quasi ratio must be finite, got {}",
                self.quasi_ratio
            )));
        }
        if !self.fill_threshold.is_finite() || self.fill_threshold <= -1.0 {
            return Err(ElimError::InvalidArgument(format!(
                "fill threshold must be finite and > -1, got {}",
                self.fill_threshold
            )));
        }
        Ok(())
    }

    /// `ln(1 + fill_threshold)`, the slack added to the tree-width bound.
    #[inline]
    pub fn log_threshold(&self) -> f64 {
        self.fill_threshold.ln_1p()
    }
}
