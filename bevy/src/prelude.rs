//! Common types used for flipbook animations in Bevy apps.

pub use crate::{
    animator::{FrameAdvanced, FrameAnimator},
    labels::FrameLabels,
    FlipbookPlugin, FlipbookSet, FrameRng,
};
