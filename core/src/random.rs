//! Source of randomness for starting a sequence at an arbitrary point in its loop.

use rand::Rng;

/// Uniform random source used by [`FrameSequencer::initialize`](crate::sequencer::FrameSequencer::initialize)
/// when a random start is requested.
///
/// Any [`rand::Rng`] implements this trait, so a seeded `StdRng` can be passed wherever outcomes
/// need to be reproducible. Custom implementations are mostly useful for scripting exact values in
/// tests.
pub trait RandomSource {
    /// Returns a uniformly distributed index in `[0, upper)`. `upper` is never zero.
    fn frame_index(&mut self, upper: usize) -> usize;

    /// Returns a uniformly distributed number of seconds in `[0, upper)`. `upper` is always
    /// positive and finite.
    fn time_offset(&mut self, upper: f32) -> f32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn frame_index(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }

    fn time_offset(&mut self, upper: f32) -> f32 {
        self.gen_range(0.0..upper)
    }
}
