pub mod prelude;

pub use flipbook_core::{
    flipbook::Flipbook,
    naming::FrameNaming,
    random::RandomSource,
    sequencer::{FrameSequencer, FrameSequencerBuilder, TickOutcome},
    timing::{FrameTiming, TimingError, TimingSource},
    visibility::{project_visibility, FrameVisibility},
};
