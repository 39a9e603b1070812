// Direction module - thresholded trajectory classification
//
// Classifies each frame of an F0 contour by the direction of its local
// pitch trajectory. The gradient at a frame is the difference between its
// right and left voiced neighbours, extend-padded: at utterance borders
// and next to unvoiced frames the missing neighbour is replaced by the
// frame's own value, which collapses the gradient to zero on that side.

use crate::analysis::voicing::{voicing_labels, VoicingLabel};

/// Direction of the local pitch trajectory at one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DirectionLabel {
    /// No periodic excitation; trajectory undefined
    Unvoiced,
    /// Voiced, gradient within ±threshold
    VoicedFlat,
    /// Voiced, gradient above the threshold
    VoicedRising,
    /// Voiced, gradient below the negated threshold
    VoicedFalling,
}

/// Classify the trajectory direction of every frame in one contour
///
/// This is the single per-sequence pass shared by the predicted and the
/// reference contour; each call consults only its own contour's voicing
/// labels, so the two label sequences are fully independent.
///
/// # Arguments
/// * `frames` - F0 contour in Hz (non-logarithmic)
/// * `threshold_hz` - gradient magnitude required to leave `VoicedFlat`
///
/// # Returns
/// One direction label per input frame
pub fn direction_labels(frames: &[f64], threshold_hz: f64) -> Vec<DirectionLabel> {
    let voicing = voicing_labels(frames);

    (0..frames.len())
        .map(|i| {
            if !voicing[i].is_voiced() {
                DirectionLabel::Unvoiced
            } else {
                classify_gradient(local_gradient(frames, &voicing, i), threshold_hz)
            }
        })
        .collect()
}

/// Extend-padded finite difference at frame `i`
///
/// The left value is the previous frame only if it exists and is voiced,
/// otherwise the frame's own value; symmetric on the right. No padding
/// arrays are built, the fallback does the padding by construction.
fn local_gradient(frames: &[f64], voicing: &[VoicingLabel], i: usize) -> f64 {
    let mut left = frames[i];
    if i > 0 && voicing[i - 1].is_voiced() {
        left = frames[i - 1];
    }

    let mut right = frames[i];
    if i + 1 < frames.len() && voicing[i + 1].is_voiced() {
        right = frames[i + 1];
    }

    right - left
}

/// Threshold decision for a voiced frame
///
/// Strict inequalities: a gradient of exactly ±threshold stays flat.
fn classify_gradient(gradient: f64, threshold_hz: f64) -> DirectionLabel {
    if gradient > threshold_hz {
        DirectionLabel::VoicedRising
    } else if gradient < -threshold_hz {
        DirectionLabel::VoicedFalling
    } else {
        DirectionLabel::VoicedFlat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_extend_pad() {
        // Frame 0 has no left neighbour: left = value[0], so the gradient
        // at the utterance start is 110 - 100 = 10 > 5 → rising
        let labels = direction_labels(&[100.0, 110.0, 120.0], 5.0);
        assert_eq!(
            labels,
            vec![
                DirectionLabel::VoicedRising,
                DirectionLabel::VoicedRising,
                DirectionLabel::VoicedRising,
            ]
        );
    }

    #[test]
    fn test_unvoiced_adjacency_pad() {
        // Isolated voiced frames see their own value on both sides, so the
        // gradient collapses to zero and they come out flat
        let labels = direction_labels(&[0.0, 100.0, 0.0, 140.0, 0.0], 5.0);
        assert_eq!(
            labels,
            vec![
                DirectionLabel::Unvoiced,
                DirectionLabel::VoicedFlat,
                DirectionLabel::Unvoiced,
                DirectionLabel::VoicedFlat,
                DirectionLabel::Unvoiced,
            ]
        );
    }

    #[test]
    fn test_flat_tie_break() {
        // Gradient of exactly the threshold stays flat (strict inequality)
        let labels = direction_labels(&[100.0, 105.0], 5.0);
        assert_eq!(
            labels,
            vec![DirectionLabel::VoicedFlat, DirectionLabel::VoicedFlat]
        );
    }

    #[test]
    fn test_falling_trajectory() {
        let labels = direction_labels(&[120.0, 110.0, 100.0], 5.0);
        assert_eq!(
            labels,
            vec![
                DirectionLabel::VoicedFalling,
                DirectionLabel::VoicedFalling,
                DirectionLabel::VoicedFalling,
            ]
        );
    }

    #[test]
    fn test_all_unvoiced() {
        let labels = direction_labels(&[0.0, 0.0, 0.0], 5.0);
        assert!(labels.iter().all(|&l| l == DirectionLabel::Unvoiced));
    }

    #[test]
    fn test_single_voiced_frame() {
        // A one-frame utterance has no neighbours at all → flat
        let labels = direction_labels(&[100.0], 5.0);
        assert_eq!(labels, vec![DirectionLabel::VoicedFlat]);
    }

    #[test]
    fn test_empty_contour() {
        assert!(direction_labels(&[], 5.0).is_empty());
    }

    #[test]
    fn test_zero_threshold() {
        // With a zero threshold any nonzero gradient leaves flat
        let labels = direction_labels(&[100.0, 100.5], 0.0);
        assert_eq!(
            labels,
            vec![DirectionLabel::VoicedRising, DirectionLabel::VoicedRising]
        );
    }

    #[test]
    fn test_gradient_spans_unvoiced_neighbours_only_when_voiced() {
        // Frame 1 (100) has an unvoiced left neighbour → left = self,
        // voiced right neighbour (110) → gradient = 10 → rising
        let labels = direction_labels(&[0.0, 100.0, 110.0], 5.0);
        assert_eq!(
            labels,
            vec![
                DirectionLabel::Unvoiced,
                DirectionLabel::VoicedRising,
                DirectionLabel::VoicedRising,
            ]
        );
    }
}
