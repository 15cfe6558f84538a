//! Timing parameters of a frame sequence, and the policy that keeps them consistent with each
//! other as the frame count and the configured durations change between ticks.

use thiserror::Error;
use tracing::debug;

/// Identifies which timing quantity was treated as authoritative by
/// [`FrameTiming::reconcile`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimingSource {
    /// The number of frames changed. The per-frame duration is kept and the animation duration
    /// follows the new frame count.
    FrameCount,
    /// The per-frame duration changed. The animation duration follows it.
    FrameDuration,
    /// The animation (loop) duration changed. The per-frame duration is derived from it.
    AnimationDuration,
}

/// Error produced when configuring timing with values that cannot describe a frame sequence.
///
/// Zero and negative durations are _not_ errors; they are the "paused" configuration and are
/// handled silently during ticks.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum TimingError {
    /// A duration was NaN or infinite.
    #[error("{field} must be a finite number of seconds, got {value}")]
    NonFiniteDuration {
        /// Name of the offending duration.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// A frame rate was zero, negative, NaN or infinite.
    #[error("frame rate must be a positive, finite number of frames per second, got {0}")]
    NonPositiveFrameRate(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct TimingSnapshot {
    frame_count: usize,
    frame_duration: f32,
    animation_duration: f32,
}

/// The per-frame and whole-loop durations of a frame sequence.
///
/// Both durations can be edited freely between ticks. On each tick, [`reconcile`](Self::reconcile)
/// compares the current values against the ones seen on the previous tick and recomputes whichever
/// quantity did _not_ change, so that `animation_duration = frame_duration * frame_count` holds
/// again. When several quantities change at once, the fixed priority is: frame count, then frame
/// duration, then animation duration.
#[derive(Clone, Debug)]
pub struct FrameTiming {
    frame_duration: f32,
    animation_duration: f32,
    previous: TimingSnapshot,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(0.1, 0.0)
    }
}

impl FrameTiming {
    /// Creates a new [`FrameTiming`] for a sequence that has no frames yet.
    ///
    /// The two durations are not required to agree; they are brought into agreement on the first
    /// reconciliation with a non-zero frame count.
    pub fn new(frame_duration: f32, animation_duration: f32) -> Self {
        Self {
            frame_duration,
            animation_duration,
            previous: TimingSnapshot {
                frame_count: 0,
                frame_duration,
                animation_duration,
            },
        }
    }

    /// Seconds that each frame stays active.
    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    /// Seconds for one full loop through all frames.
    pub fn animation_duration(&self) -> f32 {
        self.animation_duration
    }

    /// Changes the per-frame duration. Takes effect (and updates the animation duration) on the
    /// next reconciliation.
    pub fn set_frame_duration(&mut self, seconds: f32) {
        self.frame_duration = seconds;
    }

    /// Changes the loop duration. Takes effect (and updates the frame duration) on the next
    /// reconciliation, unless the frame count or frame duration changed as well.
    pub fn set_animation_duration(&mut self, seconds: f32) {
        self.animation_duration = seconds;
    }

    /// Frames per second, or `0.0` if the frame duration is not positive.
    pub fn frame_rate(&self) -> f32 {
        if self.frame_duration > 0.0 {
            1.0 / self.frame_duration
        } else {
            0.0
        }
    }

    /// Sets the frame duration from a frames-per-second value.
    pub fn set_frame_rate(&mut self, frames_per_second: f32) -> Result<(), TimingError> {
        if !frames_per_second.is_finite() || frames_per_second <= 0.0 {
            return Err(TimingError::NonPositiveFrameRate(frames_per_second));
        }
        self.frame_duration = 1.0 / frames_per_second;
        Ok(())
    }

    /// Checks that both durations are finite numbers.
    pub fn validate(&self) -> Result<(), TimingError> {
        check_finite("frame_duration", self.frame_duration)?;
        check_finite("animation_duration", self.animation_duration)
    }

    /// Brings the two durations back into agreement for `frame_count` frames.
    ///
    /// Returns the quantity that was treated as authoritative, or [`None`] if nothing changed
    /// since the previous call or there are no frames. The current values always become the
    /// baseline for the next call.
    pub fn reconcile(&mut self, frame_count: usize) -> Option<TimingSource> {
        let previous = self.previous;
        let source = if frame_count == 0 {
            None
        } else if frame_count != previous.frame_count {
            Some(TimingSource::FrameCount)
        } else if self.frame_duration != previous.frame_duration {
            Some(TimingSource::FrameDuration)
        } else if self.animation_duration != previous.animation_duration {
            Some(TimingSource::AnimationDuration)
        } else {
            None
        };
        match source {
            Some(TimingSource::FrameCount | TimingSource::FrameDuration) => {
                let animation_duration = self.frame_duration * frame_count as f32;
                debug!(
                    ?source,
                    frame_count,
                    old = self.animation_duration,
                    new = animation_duration,
                    "recomputed animation duration"
                );
                self.animation_duration = animation_duration;
            }
            Some(TimingSource::AnimationDuration) => {
                let frame_duration = self.animation_duration / frame_count as f32;
                debug!(
                    frame_count,
                    old = self.frame_duration,
                    new = frame_duration,
                    "recomputed frame duration"
                );
                self.frame_duration = frame_duration;
            }
            None => {}
        }
        self.previous = TimingSnapshot {
            frame_count,
            frame_duration: self.frame_duration,
            animation_duration: self.animation_duration,
        };
        source
    }
}

fn check_finite(field: &'static str, value: f32) -> Result<(), TimingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TimingError::NonFiniteDuration { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn settled(frame_duration: f32, frame_count: usize) -> FrameTiming {
        let mut timing = FrameTiming::new(frame_duration, 0.0);
        timing.reconcile(frame_count);
        timing
    }

    #[test]
    fn when_first_frames_appear_then_animation_duration_follows_frame_count() {
        let mut timing = FrameTiming::new(0.25, 0.0);

        assert_eq!(timing.reconcile(4), Some(TimingSource::FrameCount));
        assert_eq!(timing.frame_duration(), 0.25);
        assert_eq!(timing.animation_duration(), 1.0);
    }

    #[test]
    fn when_frame_count_changes_then_frame_duration_is_kept() {
        let mut timing = settled(0.1, 4);

        assert_eq!(timing.reconcile(6), Some(TimingSource::FrameCount));
        assert_relative_eq!(timing.frame_duration(), 0.1);
        assert_relative_eq!(timing.animation_duration(), 0.6);
    }

    #[test]
    fn when_frame_duration_changes_then_animation_duration_follows() {
        let mut timing = settled(0.1, 4);
        timing.set_frame_duration(0.5);

        assert_eq!(timing.reconcile(4), Some(TimingSource::FrameDuration));
        assert_relative_eq!(timing.animation_duration(), 2.0);
    }

    #[test]
    fn when_animation_duration_changes_then_frame_duration_follows() {
        let mut timing = settled(0.1, 4);
        timing.set_animation_duration(2.0);

        assert_eq!(timing.reconcile(4), Some(TimingSource::AnimationDuration));
        assert_relative_eq!(timing.frame_duration(), 0.5);
        assert_relative_eq!(timing.animation_duration(), 2.0);
    }

    #[test]
    fn when_frame_count_and_animation_duration_change_then_frame_count_wins() {
        let mut timing = FrameTiming::new(0.1, 0.4);
        timing.reconcile(4);
        timing.set_animation_duration(1.0);

        assert_eq!(timing.reconcile(5), Some(TimingSource::FrameCount));
        assert_relative_eq!(timing.frame_duration(), 0.1);
        assert_relative_eq!(timing.animation_duration(), 0.5);
    }

    #[test]
    fn when_both_durations_change_then_frame_duration_wins() {
        let mut timing = settled(0.1, 4);
        timing.set_frame_duration(0.2);
        timing.set_animation_duration(10.0);

        assert_eq!(timing.reconcile(4), Some(TimingSource::FrameDuration));
        assert_relative_eq!(timing.frame_duration(), 0.2);
        assert_relative_eq!(timing.animation_duration(), 0.8);
    }

    #[test]
    fn when_nothing_changes_then_reconcile_is_noop() {
        let mut timing = settled(0.1, 4);

        assert_eq!(timing.reconcile(4), None);
        assert_eq!(timing.reconcile(4), None);
        assert_relative_eq!(timing.animation_duration(), 0.4);
    }

    #[test]
    fn when_no_frames_then_reconcile_is_noop() {
        let mut timing = FrameTiming::new(0.1, 3.0);
        timing.set_animation_duration(7.0);

        assert_eq!(timing.reconcile(0), None);
        assert_eq!(timing.frame_duration(), 0.1);
        assert_eq!(timing.animation_duration(), 7.0);
    }

    #[test]
    fn when_frames_return_after_empty_then_frame_count_wins() {
        let mut timing = settled(0.1, 4);
        timing.reconcile(0);

        assert_eq!(timing.reconcile(3), Some(TimingSource::FrameCount));
        assert_relative_eq!(timing.animation_duration(), 0.3);
    }

    #[test]
    fn frame_rate_round_trips_through_frame_duration() {
        let mut timing = FrameTiming::default();

        timing.set_frame_rate(24.0).unwrap();

        assert_relative_eq!(timing.frame_duration(), 1.0 / 24.0);
        assert_relative_eq!(timing.frame_rate(), 24.0, epsilon = 1e-4);
    }

    #[test]
    fn when_frame_duration_not_positive_then_frame_rate_is_zero() {
        assert_eq!(FrameTiming::new(0.0, 0.0).frame_rate(), 0.0);
        assert_eq!(FrameTiming::new(-1.0, 0.0).frame_rate(), 0.0);
    }

    #[test]
    fn rejects_invalid_frame_rates() {
        let mut timing = FrameTiming::default();

        assert_eq!(
            timing.set_frame_rate(0.0),
            Err(TimingError::NonPositiveFrameRate(0.0))
        );
        assert_eq!(
            timing.set_frame_rate(-12.0),
            Err(TimingError::NonPositiveFrameRate(-12.0))
        );
        assert!(timing.set_frame_rate(f32::NAN).is_err());
        assert_eq!(timing.frame_duration(), 0.1);
    }

    #[test]
    fn validate_rejects_non_finite_durations() {
        assert_eq!(FrameTiming::new(0.0, -3.0).validate(), Ok(()));
        assert_eq!(
            FrameTiming::new(f32::INFINITY, 0.0).validate(),
            Err(TimingError::NonFiniteDuration {
                field: "frame_duration",
                value: f32::INFINITY
            })
        );
        assert!(FrameTiming::new(0.1, f32::NAN).validate().is_err());
    }
}
