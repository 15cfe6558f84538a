//! Human-readable labels for frame elements.
//!
//! Naming has no effect on sequencing. Hosts that display element names (scene trees, inspectors)
//! can regenerate labels whenever the frame count changes so that element order is obvious at a
//! glance.

/// Generates labels like `Frame 0`, `Frame 1`, ... for the elements of a frame sequence.
///
/// With zero-padding enabled (the default), indices are padded to the width of the largest index,
/// so that `Frame 03` sorts before `Frame 10`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FrameNaming {
    prefix: String,
    zero_pad: bool,
}

impl Default for FrameNaming {
    fn default() -> Self {
        Self {
            prefix: "Frame".to_string(),
            zero_pad: true,
        }
    }
}

impl FrameNaming {
    /// Creates a [`FrameNaming`] with the `Frame` prefix and zero-padding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `prefix` in place of `Frame`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Enables or disables zero-padding of indices.
    pub fn zero_pad(mut self, zero_pad: bool) -> Self {
        self.zero_pad = zero_pad;
        self
    }

    /// Text placed before each index.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Label for the frame at `index` in a sequence of `frame_count` frames.
    pub fn name(&self, index: usize, frame_count: usize) -> String {
        let width = if self.zero_pad {
            frame_count.saturating_sub(1).to_string().len()
        } else {
            0
        };
        format!("{} {:0width$}", self.prefix, index, width = width)
    }

    /// Labels for every frame in a sequence of `frame_count` frames, in order.
    pub fn names(&self, frame_count: usize) -> impl Iterator<Item = String> + '_ {
        (0..frame_count).map(move |index| self.name(index, frame_count))
    }
}
