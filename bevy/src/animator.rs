//! Contains the primary [FrameAnimator] component and the systems that drive it.

use crate::FrameRng;
use bevy::prelude::*;
use flipbook::prelude::*;

/// An event that is sent each time a [FrameAnimator] makes a different child frame active.
///
/// A single update can produce several of these for the same entity, if the elapsed time spanned
/// more than one frame duration.
#[derive(Event, Reflect, Clone, Copy, Debug, Eq, PartialEq)]
pub struct FrameAdvanced {
    /// The entity to which the affected [FrameAnimator] is attached.
    pub entity: Entity,
    /// Index (into the entity's [Children]) of the frame that became active.
    pub frame: usize,
}

impl FrameAdvanced {
    /// Creates a new [FrameAdvanced] event.
    pub fn new(entity: Entity, frame: usize) -> Self {
        Self { entity, frame }
    }
}

/// Shows the children of its entity one at a time, in order, looping forever.
///
/// The frames are the entity's [Children]; they can be added, removed or reordered at any time and
/// the animator picks up the change on the next update. Only the active child is left
/// [Visibility::Inherited], all others are set to [Visibility::Hidden].
#[derive(Component, Clone, Debug)]
pub struct FrameAnimator {
    /// Whether or not the animator is currently enabled. If disabled, frames will not advance, but
    /// the active frame is still the only one shown.
    pub enabled: bool,
    /// Timing and current position of the animation.
    pub sequencer: FrameSequencer,
}

impl Default for FrameAnimator {
    fn default() -> Self {
        Self::new(FrameSequencer::default())
    }
}

impl FrameAnimator {
    /// Creates a new [FrameAnimator] driven by the specified sequencer.
    pub fn new(sequencer: FrameSequencer) -> Self {
        Self {
            enabled: true,
            sequencer,
        }
    }

    /// Creates a new [FrameAnimator] that shows each child for `seconds`.
    pub fn with_frame_duration(seconds: f32) -> Self {
        Self::new(FrameSequencer::new(seconds))
    }

    /// Disables and returns the animator. Used when creating new instances to prevent the
    /// animation from running immediately.
    pub fn as_disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Index of the currently active child.
    pub fn current_frame(&self) -> usize {
        self.sequencer.current_frame()
    }
}

pub(super) fn initialize_animators(
    mut rng: ResMut<FrameRng>,
    mut animators: Query<(&mut FrameAnimator, Option<&Children>), Added<FrameAnimator>>,
) {
    for (mut animator, children) in animators.iter_mut() {
        let frame_count = children.map_or(0, |children| children.len());
        animator.sequencer.initialize(frame_count, &mut rng.0);
    }
}

pub(super) fn advance_animators(
    time: Res<Time>,
    mut animators: Query<(Entity, &mut FrameAnimator, Option<&Children>)>,
    mut events: EventWriter<FrameAdvanced>,
) {
    let delta_seconds = time.delta_seconds();
    for (entity, mut animator, children) in animators.iter_mut() {
        if !animator.enabled {
            continue;
        }
        let frame_count = children.map_or(0, |children| children.len());
        animator
            .sequencer
            .tick_with(delta_seconds, frame_count, |frame| {
                events.send(FrameAdvanced::new(entity, frame))
            });
    }
}

pub(super) fn apply_frame_visibility(
    animators: Query<(&FrameAnimator, &Children)>,
    mut visibilities: Query<&mut Visibility>,
) {
    for (animator, children) in animators.iter() {
        let decisions = animator.sequencer.visibility(children.len());
        for (&child, decision) in children.iter().zip(decisions) {
            let Ok(mut visibility) = visibilities.get_mut(child) else {
                continue;
            };
            let target = match decision {
                FrameVisibility::Visible => Visibility::Inherited,
                FrameVisibility::Hidden => Visibility::Hidden,
            };
            // Avoid tripping change detection on every frame.
            if *visibility != target {
                *visibility = target;
            }
        }
    }
}
