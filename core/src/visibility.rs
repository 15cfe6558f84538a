//! Projection of the active frame onto per-frame visibility decisions.

/// Whether a single frame element should be shown.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FrameVisibility {
    /// The frame is the active frame.
    Visible,
    /// The frame is any other frame.
    Hidden,
}

impl FrameVisibility {
    /// Returns `true` for [`FrameVisibility::Visible`].
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

/// Produces one decision per frame index in `[0, frame_count)`, in order: visible if the index is
/// `active_frame`, hidden otherwise.
///
/// Yields nothing when `frame_count` is zero, and nothing visible when `active_frame` is out of
/// range. Frame counts may change between ticks, so hosts are expected to re-apply the projection
/// on every tick rather than only when the active frame changes.
///
/// # Example
///
/// ```
/// use flipbook_core::visibility::{project_visibility, FrameVisibility::*};
///
/// let decisions: Vec<_> = project_visibility(1, 3).collect();
/// assert_eq!(decisions, [Hidden, Visible, Hidden]);
/// ```
pub fn project_visibility(
    active_frame: usize,
    frame_count: usize,
) -> impl Iterator<Item = FrameVisibility> + Clone {
    (0..frame_count).map(move |index| {
        if index == active_frame {
            FrameVisibility::Visible
        } else {
            FrameVisibility::Hidden
        }
    })
}
