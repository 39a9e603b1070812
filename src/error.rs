// Error types for the pitch evaluation library
//
// This module defines the custom error type for F0 contour evaluation,
// providing structured error handling with error codes suitable for
// numeric reporting by embedding callers.

use log::error;
use std::fmt;

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, enabling consistent error handling by callers
/// that surface errors through non-Rust channels.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}

/// Log an evaluation error with structured context
///
/// This function logs evaluation errors with structured fields including:
/// - error_code: Numeric error code for programmatic handling
/// - component: The component where the error occurred
/// - message: Human-readable error message
/// - context: Additional contextual information
pub fn log_eval_error(err: &EvalError, context: &str) {
    error!(
        "Evaluation error in {}: code={}, component=DirectionLabelEvaluator, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Evaluation errors
///
/// These errors cover malformed evaluator input and configuration:
/// misaligned contour pairs and out-of-domain parameters. Evaluation
/// either returns a complete result or one of these, never a partial
/// result.
///
/// Error code range: 3001-3003
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Predicted and target contours have different frame counts
    LengthMismatch { predicted: usize, target: usize },

    /// Direction threshold is not a finite, non-negative number of Hz
    ThresholdInvalid { threshold_hz: f64 },

    /// Configured frame shift is not a finite, positive number of ms
    FrameShiftInvalid { frame_shift_ms: f64 },
}

impl ErrorCode for EvalError {
    fn code(&self) -> i32 {
        match self {
            EvalError::LengthMismatch { .. } => 3001,
            EvalError::ThresholdInvalid { .. } => 3002,
            EvalError::FrameShiftInvalid { .. } => 3003,
        }
    }

    fn message(&self) -> String {
        match self {
            EvalError::LengthMismatch { predicted, target } => {
                format!(
                    "Contour lengths differ: predicted has {} frames, target has {}",
                    predicted, target
                )
            }
            EvalError::ThresholdInvalid { threshold_hz } => {
                format!(
                    "Direction threshold must be finite and >= 0 Hz (got {})",
                    threshold_hz
                )
            }
            EvalError::FrameShiftInvalid { frame_shift_ms } => {
                format!(
                    "Frame shift must be finite and > 0 ms (got {})",
                    frame_shift_ms
                )
            }
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EvalError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for EvalError {}
