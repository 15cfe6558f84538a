//! An ECS-friendly [flipbook](https://crates.io/crates/flipbook) plugin for
//! [bevy](https://github.com/bevyengine/bevy), which turns the children of an entity into the frames
//! of a looping frame-by-frame animation.
//!
//! # Getting Started
//!
//! Add the [FlipbookPlugin], then attach a [FrameAnimator] to any entity whose children are the
//! frames. Only one child is visible at a time.
//!
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_flipbook::prelude::*;
//! use flipbook::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins((MinimalPlugins, FlipbookPlugin::new()))
//!         .add_systems(Startup, setup)
//!         .run();
//! }
//!
//! fn setup(mut commands: Commands) {
//!     let sequencer = FrameSequencer::builder()
//!         .frame_rate(12.0)
//!         .start_on_random_time(true)
//!         .build()
//!         .expect("valid frame rate");
//!     commands
//!         .spawn((SpatialBundle::default(), FrameAnimator::new(sequencer), FrameLabels::default()))
//!         .with_children(|frames| {
//!             for _ in 0..8 {
//!                 frames.spawn(SpatialBundle::default());
//!             }
//!         });
//! }
//! ```
//!
//! # Timing
//!
//! The animator's [FrameSequencer](flipbook::FrameSequencer) can be retimed at runtime through
//! either its frame duration or its total animation duration; the other is recomputed on the next
//! update. Adding or removing children keeps the frame duration and lengthens or shortens the loop.
//!
//! With `start_on_random_time`, each animator starts at a random frame and offset when it is first
//! added. The randomness comes from the [FrameRng] resource, which can be seeded through
//! [FlipbookPlugin::with_seed] for reproducible runs.

use crate::animator::{advance_animators, apply_frame_visibility, initialize_animators};
use crate::labels::label_frames;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use crate::animator::{FrameAdvanced, FrameAnimator};
pub use crate::labels::FrameLabels;

pub mod prelude;

mod animator;
mod labels;

/// Runs the [FrameAnimator] systems in the [Update] schedule.
///
/// Order within the set: newly added animators are initialized, frame names are refreshed, all
/// animators advance by the frame's delta time, and finally child visibility is applied.
#[derive(SystemSet, Clone, Debug, Eq, Hash, PartialEq)]
pub struct FlipbookSet;

/// Random source used for animators that start on a random frame.
#[derive(Resource)]
pub struct FrameRng(pub StdRng);

impl FrameRng {
    /// Creates a [FrameRng] with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for FrameRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Enables [FrameAnimator] components.
#[derive(Default)]
pub struct FlipbookPlugin {
    seed: Option<u64>,
}

impl FlipbookPlugin {
    /// Creates a plugin whose [FrameRng] is seeded from system entropy.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Creates a plugin whose [FrameRng] is seeded with `seed`, making random starts repeatable.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl Plugin for FlipbookPlugin {
    fn build(&self, app: &mut App) {
        let rng = self.seed.map(FrameRng::seeded).unwrap_or_default();
        app.insert_resource(rng)
            .register_type::<FrameAdvanced>()
            .add_event::<FrameAdvanced>()
            .add_systems(
                Update,
                (
                    initialize_animators,
                    label_frames,
                    advance_animators,
                    apply_frame_visibility,
                )
                    .chain()
                    .in_set(FlipbookSet),
            );
    }
}
