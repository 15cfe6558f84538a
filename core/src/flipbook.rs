//! A frame sequencer bundled with the frame handles it sequences.

use crate::random::RandomSource;
use crate::sequencer::{FrameSequencer, TickOutcome};
use crate::visibility::FrameVisibility;

/// Owns an ordered list of opaque frame handles together with the [`FrameSequencer`] that picks
/// which of them is visible.
///
/// `F` is whatever the host uses to refer to a displayable element: an entity ID, a sprite index,
/// a texture handle, etc. The frame list can be edited freely between ticks via
/// [`frames_mut`](Self::frames_mut).
#[derive(Clone, Debug, Default)]
pub struct Flipbook<F> {
    frames: Vec<F>,
    sequencer: FrameSequencer,
}

impl<F> Flipbook<F> {
    /// Creates a [`Flipbook`] over `frames`, driven by `sequencer`.
    pub fn new(frames: Vec<F>, sequencer: FrameSequencer) -> Self {
        Self { frames, sequencer }
    }

    /// Creates a [`Flipbook`] that shows each of `frames` for `frame_duration` seconds.
    pub fn with_frame_duration(frames: Vec<F>, frame_duration: f32) -> Self {
        Self::new(frames, FrameSequencer::new(frame_duration))
    }

    /// The frame handles, in display order.
    pub fn frames(&self) -> &[F] {
        &self.frames
    }

    /// Mutable access to the frame handles. Changes are picked up on the next tick.
    pub fn frames_mut(&mut self) -> &mut Vec<F> {
        &mut self.frames
    }

    /// The sequencer choosing the active frame.
    pub fn sequencer(&self) -> &FrameSequencer {
        &self.sequencer
    }

    /// Mutable access to the sequencer, e.g. for retiming.
    pub fn sequencer_mut(&mut self) -> &mut FrameSequencer {
        &mut self.sequencer
    }

    /// Runs [`FrameSequencer::initialize`] for the current frame list.
    pub fn initialize<R: RandomSource + ?Sized>(&mut self, random: &mut R) {
        self.sequencer.initialize(self.frames.len(), random);
    }

    /// Advances by `delta_seconds`; see [`FrameSequencer::tick`].
    pub fn tick(&mut self, delta_seconds: f32) -> TickOutcome {
        self.sequencer.tick(delta_seconds, self.frames.len())
    }

    /// Advances by `delta_seconds`, invoking `on_advance` with the index and handle of each frame
    /// that becomes active along the way.
    pub fn tick_with(
        &mut self,
        delta_seconds: f32,
        mut on_advance: impl FnMut(usize, &F),
    ) -> TickOutcome {
        let frames = &self.frames;
        self.sequencer
            .tick_with(delta_seconds, frames.len(), |index| on_advance(index, &frames[index]))
    }

    /// The handle of the active frame, if there are any frames.
    pub fn active_frame(&self) -> Option<&F> {
        self.sequencer
            .active_frame(self.frames.len())
            .and_then(|index| self.frames.get(index))
    }

    /// Each frame handle paired with whether it should currently be shown.
    pub fn visibility(&self) -> impl Iterator<Item = (&F, FrameVisibility)> {
        self.frames
            .iter()
            .zip(self.sequencer.visibility(self.frames.len()))
    }
}
