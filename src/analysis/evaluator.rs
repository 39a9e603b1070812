// DirectionLabelEvaluator - trajectory-label accuracy (TLAcc)
//
// Compares the direction labels of a predicted F0 contour against a
// reference contour and reports the fraction of frames that agree, with
// four labels: unvoiced, voiced-flat, voiced-rising, voiced-falling.
//
// The contours must be index-aligned in time and equally long; the
// evaluator validates this up front and never truncates to the shorter
// sequence.

use crate::analysis::direction::direction_labels;
use crate::analysis::EvaluationResult;
use crate::config::EvalConfig;
use crate::error::EvalError;

/// Evaluator computing direction-label accuracy between two F0 contours
///
/// Holds the validated direction threshold; `evaluate` is a pure function
/// of its inputs, so one evaluator can be shared across threads for
/// independent contour pairs.
///
/// # Example
/// ```
/// use pitch_eval::DirectionLabelEvaluator;
///
/// let evaluator = DirectionLabelEvaluator::new();
/// let result = evaluator
///     .evaluate(&[0.0, 100.0, 105.0, 95.0, 0.0], &[0.0, 100.0, 110.0, 90.0, 0.0])
///     .unwrap();
/// assert_eq!(result.accuracy, 0.6);
/// ```
#[derive(Debug)]
pub struct DirectionLabelEvaluator {
    /// Gradient magnitude in Hz required to classify a frame as
    /// rising/falling instead of flat
    threshold_hz: f64,
}

impl DirectionLabelEvaluator {
    /// Default direction threshold in Hz
    /// Tuned for contours sampled at a 10 ms frame shift
    pub const DEFAULT_THRESHOLD_HZ: f64 = 5.0;

    /// Create an evaluator with the default threshold
    pub fn new() -> Self {
        Self {
            threshold_hz: Self::DEFAULT_THRESHOLD_HZ,
        }
    }

    /// Create an evaluator with a caller-supplied threshold
    ///
    /// # Arguments
    /// * `threshold_hz` - direction threshold in Hz; must be finite and
    ///   non-negative
    ///
    /// # Returns
    /// * `Ok(DirectionLabelEvaluator)` - Evaluator using the threshold
    /// * `Err(EvalError::ThresholdInvalid)` - Threshold outside its domain
    pub fn with_threshold(threshold_hz: f64) -> Result<Self, EvalError> {
        if !threshold_hz.is_finite() || threshold_hz < 0.0 {
            return Err(EvalError::ThresholdInvalid { threshold_hz });
        }
        Ok(Self { threshold_hz })
    }

    /// Create an evaluator from a validated configuration
    ///
    /// Warns when the configured frame shift differs from the 10 ms the
    /// default threshold was tuned for; the caller is responsible for
    /// resampling the contours or re-tuning the threshold.
    pub fn from_config(config: &EvalConfig) -> Result<Self, EvalError> {
        config.validate()?;

        if config.frame_shift_ms != 10.0 {
            log::warn!(
                "[Evaluator] Direction threshold {} Hz is tuned for a 10 ms frame shift, config says {} ms",
                config.direction_threshold_hz,
                config.frame_shift_ms
            );
        }

        Ok(Self {
            threshold_hz: config.direction_threshold_hz,
        })
    }

    /// Get the direction threshold in Hz
    pub fn threshold_hz(&self) -> f64 {
        self.threshold_hz
    }

    /// Evaluate a predicted F0 contour against a reference contour
    ///
    /// # Algorithm
    /// 1. Validate that both contours have the same frame count
    /// 2. Label each contour independently (voicing, extend-padded
    ///    gradient, threshold classification)
    /// 3. Count frames where the two labels are equal (`Unvoiced` on both
    ///    sides counts as a match)
    /// 4. accuracy = matched frames / total frames
    ///
    /// Two empty contours are a defined degenerate case: accuracy 0.0 with
    /// empty label sequences, never NaN.
    ///
    /// # Arguments
    /// * `predicted` - F0 contour to evaluate, in Hz (non-logarithmic)
    /// * `target` - reference F0 contour, in Hz (non-logarithmic)
    ///
    /// # Returns
    /// * `Ok(EvaluationResult)` - Accuracy plus both label sequences
    /// * `Err(EvalError::LengthMismatch)` - Contour lengths differ
    pub fn evaluate(
        &self,
        predicted: &[f64],
        target: &[f64],
    ) -> Result<EvaluationResult, EvalError> {
        if predicted.len() != target.len() {
            return Err(EvalError::LengthMismatch {
                predicted: predicted.len(),
                target: target.len(),
            });
        }

        let predicted_labels = direction_labels(predicted, self.threshold_hz);
        let target_labels = direction_labels(target, self.threshold_hz);

        let matched_frames = predicted_labels
            .iter()
            .zip(&target_labels)
            .filter(|(p, t)| p == t)
            .count();

        let accuracy = if predicted_labels.is_empty() {
            0.0
        } else {
            matched_frames as f64 / predicted_labels.len() as f64
        };

        tracing::debug!(
            "[Evaluator] {} frames, {} matched, accuracy {:.3}",
            predicted_labels.len(),
            matched_frames,
            accuracy
        );

        Ok(EvaluationResult {
            accuracy,
            matched_frames,
            predicted_labels,
            target_labels,
        })
    }
}

impl Default for DirectionLabelEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
