//! Optional readable names for the frames of a [FrameAnimator](crate::FrameAnimator).

use crate::animator::FrameAnimator;
use bevy::prelude::*;
use flipbook::FrameNaming;
use tracing::debug;

/// Add-on [Component] for an entity with a [FrameAnimator] that keeps the [Name] of each child
/// frame in sync with its position, e.g. `Frame 0`, `Frame 1`, ...
///
/// Names are rewritten whenever the children change, which makes the frame order readable in
/// inspectors and scene dumps. It has no effect on which frame is shown.
#[derive(Component, Clone, Debug, Default)]
pub struct FrameLabels(pub FrameNaming);

impl FrameLabels {
    /// Creates a new [FrameLabels] using `prefix` instead of `Frame`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self(FrameNaming::new().with_prefix(prefix))
    }
}

pub(super) fn label_frames(
    mut commands: Commands,
    animators: Query<
        (Entity, &FrameLabels, &Children),
        (
            With<FrameAnimator>,
            Or<(Changed<Children>, Changed<FrameLabels>)>,
        ),
    >,
    mut names: Query<&mut Name>,
) {
    for (entity, labels, children) in animators.iter() {
        for (&child, label) in children.iter().zip(labels.0.names(children.len())) {
            match names.get_mut(child) {
                Ok(mut name) if name.as_str() != label => name.set(label),
                Ok(_) => {}
                Err(_) => {
                    commands.entity(child).insert(Name::new(label));
                }
            }
        }
        debug!(?entity, frames = children.len(), "labeled frames");
    }
}
