//! Includes the types commonly used for sequencing frames.

pub use crate::{
    Flipbook, FrameNaming, FrameSequencer, FrameSequencerBuilder, FrameVisibility, RandomSource,
    TickOutcome,
};
