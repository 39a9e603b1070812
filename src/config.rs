//! Configuration management for evaluation parameters
//!
//! This module provides runtime configuration loading from JSON files,
//! enabling threshold experiments without recompilation. The direction
//! threshold and the nominal frame shift of the contours under test can
//! be adjusted via the config file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::EvalError;

/// Evaluation metric parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Threshold in Hz separating flat from rising/falling trajectories
    pub direction_threshold_hz: f64,
    /// Frame shift in milliseconds the contours were sampled at
    pub frame_shift_ms: f64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            // 5 Hz over a ±1 frame window, tuned for a 10 ms frame shift.
            // Different frame shifts require resampling or a re-tuned threshold.
            direction_threshold_hz: 5.0,
            frame_shift_ms: 10.0,
        }
    }
}

impl EvalConfig {
    /// Load configuration from JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// The loaded configuration, or the defaults if the file doesn't exist
    /// or the JSON is invalid.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Check that all parameters are inside their valid domains
    ///
    /// # Returns
    /// * `Ok(())` - All parameters valid
    /// * `Err(EvalError)` - First out-of-domain parameter found
    pub fn validate(&self) -> Result<(), EvalError> {
        if !self.direction_threshold_hz.is_finite() || self.direction_threshold_hz < 0.0 {
            return Err(EvalError::ThresholdInvalid {
                threshold_hz: self.direction_threshold_hz,
            });
        }
        if !self.frame_shift_ms.is_finite() || self.frame_shift_ms <= 0.0 {
            return Err(EvalError::FrameShiftInvalid {
                frame_shift_ms: self.frame_shift_ms,
            });
        }
        Ok(())
    }
}
