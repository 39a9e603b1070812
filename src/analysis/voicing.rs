// Voicing module - per-frame voiced/unvoiced classification
//
// An F0 frame value is the fundamental frequency in Hz for one analysis
// frame; 0.0 is the sentinel for "no periodic excitation detected".
// Voicing is decided per frame from the raw value alone, so the predicted
// and target contours get independent label sequences that may disagree.

/// F0 frame value marking an unvoiced frame
pub const UNVOICED_F0_HZ: f64 = 0.0;

/// Voicing state of a single analysis frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum VoicingLabel {
    /// No periodic vocal-fold excitation (F0 equals the 0 Hz sentinel)
    Unvoiced,
    /// Periodic excitation present
    Voiced,
}

impl VoicingLabel {
    /// Whether this frame carries periodic excitation
    pub fn is_voiced(self) -> bool {
        self == VoicingLabel::Voiced
    }
}

/// Classify each frame of an F0 contour as voiced or unvoiced
///
/// A frame is unvoiced iff its value equals the sentinel exactly; any
/// other value, however small, counts as voiced.
///
/// # Arguments
/// * `frames` - F0 contour in Hz (non-logarithmic)
///
/// # Returns
/// One voicing label per input frame
pub fn voicing_labels(frames: &[f64]) -> Vec<VoicingLabel> {
    frames
        .iter()
        .map(|&f0| {
            if f0 == UNVOICED_F0_HZ {
                VoicingLabel::Unvoiced
            } else {
                VoicingLabel::Voiced
            }
        })
        .collect()
}
