//! The frame sequencer: selects which single frame of an ordered sequence is active, advancing
//! round-robin as time elapses.

use crate::random::RandomSource;
use crate::timing::{FrameTiming, TimingError, TimingSource};
use crate::visibility::{project_visibility, FrameVisibility};
use tracing::{debug, trace};

/// Result of a single [`FrameSequencer::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickOutcome {
    /// Number of frame advances performed to catch up with the elapsed time. May be larger than
    /// one when the tick spanned several frame durations, or zero.
    pub advances: usize,
    /// Index of the frame that should be visible after the tick, or [`None`] if there are no
    /// frames.
    pub active_frame: Option<usize>,
    /// Timing quantity that was treated as authoritative when reconciling durations on this tick,
    /// if any changed.
    pub reconciled: Option<TimingSource>,
}

impl TickOutcome {
    /// Whether the active frame changed at least once during the tick.
    pub fn advanced(&self) -> bool {
        self.advances > 0
    }
}

/// Cycles through an ordered sequence of frames, one at a time.
///
/// The sequencer does not hold the frames themselves; hosts pass the live frame count on every
/// call, which allows frames to be added or removed between ticks. For a variant that owns its
/// frame handles, see [`Flipbook`](crate::flipbook::Flipbook).
///
/// Typical use is to call [`initialize`](Self::initialize) once, then [`tick`](Self::tick) exactly
/// once per update with the time elapsed since the previous update, and show only the frame at
/// [`TickOutcome::active_frame`].
///
/// ```
/// use flipbook_core::sequencer::FrameSequencer;
///
/// let mut sequencer = FrameSequencer::new(0.1);
/// let outcome = sequencer.tick(0.25, 4);
///
/// assert_eq!(outcome.advances, 2);
/// assert_eq!(outcome.active_frame, Some(2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FrameSequencer {
    timing: FrameTiming,
    current_frame: usize,
    time_since_current_frame: f32,
    start_on_random_time: bool,
}

impl FrameSequencer {
    /// Creates a sequencer that shows each frame for `frame_duration` seconds, starting at the
    /// first frame.
    pub fn new(frame_duration: f32) -> Self {
        Self {
            timing: FrameTiming::new(frame_duration, 0.0),
            ..Default::default()
        }
    }

    /// Creates a [`FrameSequencerBuilder`] with default settings.
    pub fn builder() -> FrameSequencerBuilder {
        FrameSequencerBuilder::new()
    }

    /// Index of the active frame. Always less than the frame count passed to the most recent
    /// tick, if that count was non-zero.
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Seconds elapsed since the active frame became active.
    pub fn time_since_current_frame(&self) -> f32 {
        self.time_since_current_frame
    }

    /// The durations driving this sequencer.
    pub fn timing(&self) -> &FrameTiming {
        &self.timing
    }

    /// Mutable access to the durations. Changes are reconciled on the next tick.
    pub fn timing_mut(&mut self) -> &mut FrameTiming {
        &mut self.timing
    }

    /// Seconds each frame stays active.
    pub fn frame_duration(&self) -> f32 {
        self.timing.frame_duration()
    }

    /// Sets the seconds each frame stays active. Zero or negative values pause the animation.
    pub fn set_frame_duration(&mut self, seconds: f32) {
        self.timing.set_frame_duration(seconds);
    }

    /// Seconds for one full loop over all frames.
    pub fn animation_duration(&self) -> f32 {
        self.timing.animation_duration()
    }

    /// Sets the seconds for one full loop; the frame duration is derived from it on the next tick.
    pub fn set_animation_duration(&mut self, seconds: f32) {
        self.timing.set_animation_duration(seconds);
    }

    /// Frames per second, or `0.0` while paused.
    pub fn frame_rate(&self) -> f32 {
        self.timing.frame_rate()
    }

    /// Sets the frame duration from a frames-per-second value.
    pub fn set_frame_rate(&mut self, frames_per_second: f32) -> Result<(), TimingError> {
        self.timing.set_frame_rate(frames_per_second)
    }

    /// Whether [`initialize`](Self::initialize) picks a random frame and time offset.
    pub fn start_on_random_time(&self) -> bool {
        self.start_on_random_time
    }

    /// Configures whether [`initialize`](Self::initialize) picks a random frame and time offset.
    pub fn set_start_on_random_time(&mut self, random: bool) {
        self.start_on_random_time = random;
    }

    /// Puts the sequencer at its starting point.
    ///
    /// Without a random start, this is the first frame with no elapsed time. With a random start,
    /// the frame is chosen uniformly from `[0, frame_count)` and the elapsed time uniformly from
    /// `[0, frame_duration)`, so that many sequences started together do not play in lockstep. No
    /// random values are drawn when there are no frames, and the elapsed time stays at zero if the
    /// frame duration is not positive.
    pub fn initialize<R: RandomSource + ?Sized>(&mut self, frame_count: usize, random: &mut R) {
        self.reset();
        if !self.start_on_random_time || frame_count == 0 {
            return;
        }
        self.current_frame = random.frame_index(frame_count);
        let frame_duration = self.timing.frame_duration();
        if frame_duration > 0.0 && frame_duration.is_finite() {
            self.time_since_current_frame = random.time_offset(frame_duration);
        }
        debug!(
            frame = self.current_frame,
            offset = self.time_since_current_frame,
            "random start"
        );
    }

    /// Returns to the first frame with no elapsed time. Durations are unchanged.
    pub fn reset(&mut self) {
        self.current_frame = 0;
        self.time_since_current_frame = 0.0;
    }

    /// Makes `frame` (wrapped into `[0, frame_count)`) the active frame with no elapsed time.
    ///
    /// Has no effect if `frame_count` is zero.
    pub fn seek(&mut self, frame: usize, frame_count: usize) {
        if frame_count == 0 {
            return;
        }
        self.current_frame = frame % frame_count;
        self.time_since_current_frame = 0.0;
    }

    /// Position within the whole loop, from `0.0` at the start of the first frame up to (but not
    /// including) `1.0` at the end of the last.
    pub fn loop_progress(&self, frame_count: usize) -> f32 {
        if frame_count == 0 {
            return 0.0;
        }
        let frame_duration = self.timing.frame_duration();
        let frame_fraction = if frame_duration > 0.0 {
            (self.time_since_current_frame / frame_duration).clamp(0.0, 1.0)
        } else {
            0.0
        };
        ((self.current_frame as f32 + frame_fraction) / frame_count as f32).min(1.0)
    }

    /// Index of the active frame, or [`None`] if `frame_count` is zero.
    pub fn active_frame(&self, frame_count: usize) -> Option<usize> {
        (frame_count > 0).then(|| self.current_frame.min(frame_count - 1))
    }

    /// Visibility decision for each of `frame_count` frames; see
    /// [`project_visibility`](crate::visibility::project_visibility).
    pub fn visibility(&self, frame_count: usize) -> impl Iterator<Item = FrameVisibility> + Clone {
        project_visibility(self.current_frame, frame_count)
    }

    /// Advances the sequence by `delta_seconds` for a sequence of `frame_count` frames.
    ///
    /// `delta_seconds` must not be negative; this is only checked in debug builds.
    pub fn tick(&mut self, delta_seconds: f32, frame_count: usize) -> TickOutcome {
        self.tick_with(delta_seconds, frame_count, |_| {})
    }

    /// Same as [`tick`](Self::tick), but invokes `on_advance` with the new frame index each time
    /// the active frame changes. When the elapsed time is too large to step through one frame at a
    /// time in `f32`, the whole frames are skipped in one step and `on_advance` is invoked once,
    /// with the frame that the sequence lands on.
    ///
    /// Durations are reconciled first. If there are no frames, nothing else happens: neither the
    /// active frame nor the elapsed time changes. If the frame duration is not positive, time
    /// accumulates but the frame never advances.
    pub fn tick_with(
        &mut self,
        delta_seconds: f32,
        frame_count: usize,
        mut on_advance: impl FnMut(usize),
    ) -> TickOutcome {
        debug_assert!(
            delta_seconds >= 0.0,
            "delta_seconds must not be negative, got {delta_seconds}"
        );
        let reconciled = self.timing.reconcile(frame_count);
        if frame_count == 0 {
            trace!("no frames to sequence");
            return TickOutcome {
                advances: 0,
                active_frame: None,
                reconciled,
            };
        }
        if self.current_frame >= frame_count {
            debug!(
                frame = self.current_frame,
                frame_count, "active frame removed, restarting at first frame"
            );
            self.current_frame = 0;
        }
        self.time_since_current_frame += delta_seconds;

        let frame_duration = self.timing.frame_duration();
        let mut advances = 0;
        if frame_duration > 0.0 {
            while self.time_since_current_frame > frame_duration {
                let remaining = self.time_since_current_frame - frame_duration;
                if remaining == self.time_since_current_frame {
                    // Elapsed time too large to subtract from; skip whole frames at once and
                    // report only the frame it lands on.
                    let skipped = (self.time_since_current_frame / frame_duration).floor() as usize;
                    self.time_since_current_frame %= frame_duration;
                    self.current_frame = (self.current_frame + skipped % frame_count) % frame_count;
                    advances += skipped;
                    debug!(skipped, frame = self.current_frame, "skipped frames in one step");
                    on_advance(self.current_frame);
                    break;
                }
                self.time_since_current_frame = remaining;
                self.current_frame = (self.current_frame + 1) % frame_count;
                advances += 1;
                trace!(frame = self.current_frame, "advanced frame");
                on_advance(self.current_frame);
            }
        } else {
            trace!(frame_duration, "frame duration not positive, sequence paused");
        }

        TickOutcome {
            advances,
            active_frame: Some(self.current_frame),
            reconciled,
        }
    }
}

/// Builder for a [`FrameSequencer`].
#[derive(Clone, Debug)]
pub struct FrameSequencerBuilder {
    frame_duration: f32,
    animation_duration: f32,
    frame_rate: Option<f32>,
    start_on_random_time: bool,
}

impl Default for FrameSequencerBuilder {
    fn default() -> Self {
        Self {
            frame_duration: 0.1,
            animation_duration: 0.0,
            frame_rate: None,
            start_on_random_time: false,
        }
    }
}

impl FrameSequencerBuilder {
    /// Creates a new [`FrameSequencerBuilder`] with a frame duration of `0.1` seconds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds each frame stays active.
    pub fn frame_duration(mut self, seconds: f32) -> Self {
        self.frame_duration = seconds;
        self.frame_rate = None;
        self
    }

    /// Initial loop duration. Only meaningful until the first tick with frames, at which point it
    /// is recomputed from the frame duration and frame count.
    pub fn animation_duration(mut self, seconds: f32) -> Self {
        self.animation_duration = seconds;
        self
    }

    /// Frames per second; an alternative to [`frame_duration`](Self::frame_duration).
    pub fn frame_rate(mut self, frames_per_second: f32) -> Self {
        self.frame_rate = Some(frames_per_second);
        self
    }

    /// Whether the sequencer starts on a random frame and time offset when initialized.
    pub fn start_on_random_time(mut self, random: bool) -> Self {
        self.start_on_random_time = random;
        self
    }

    /// Builds the [`FrameSequencer`], consuming self.
    pub fn build(self) -> Result<FrameSequencer, TimingError> {
        let mut timing = FrameTiming::new(self.frame_duration, self.animation_duration);
        if let Some(frames_per_second) = self.frame_rate {
            timing.set_frame_rate(frames_per_second)?;
            timing = FrameTiming::new(timing.frame_duration(), self.animation_duration);
        }
        timing.validate()?;
        Ok(FrameSequencer {
            timing,
            current_frame: 0,
            time_since_current_frame: 0.0,
            start_on_random_time: self.start_on_random_time,
        })
    }
}
