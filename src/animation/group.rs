//! Animation groups: property animations played together with one shared
//! completion and one shared cancel.
//!
//! A group is driven by the host's animation clock through
//! [`AnimationGroup::advance`]. The first tick pins the start time, every
//! tick writes the interpolated value of each property, and the tick that
//! reaches the end of the transition hands back the completion payload.
//! The payload is moved out exactly once; a canceled group drops it without
//! ever returning it.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use super::{AdvanceResult, MorphProperty, PropertyAnimation, Transition};

/// Unique identifier for an animation group
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct GroupId(u64);

static NEXT_GROUP_ID: AtomicU64 = AtomicU64::new(1);

impl GroupId {
    /// Generate a new unique group ID
    pub fn next() -> Self {
        GroupId(NEXT_GROUP_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Lifecycle of an animation group
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GroupStatus {
    /// Created, waiting for its first tick
    Pending,
    /// At least one tick has been applied
    Running,
    /// All animations reached their targets and the completion was delivered
    Completed,
    /// Canceled before completion; the completion was discarded
    Canceled,
}

impl GroupStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, GroupStatus::Completed | GroupStatus::Canceled)
    }
}

/// Observer for a group's status, usable after the group itself is gone.
#[derive(Clone, Debug)]
pub struct GroupHandle {
    id: GroupId,
    status: Rc<Cell<GroupStatus>>,
}

impl GroupHandle {
    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn status(&self) -> GroupStatus {
        self.status.get()
    }

    pub fn is_canceled(&self) -> bool {
        self.status.get() == GroupStatus::Canceled
    }

    pub fn is_completed(&self) -> bool {
        self.status.get() == GroupStatus::Completed
    }
}

pub struct AnimationGroup<C> {
    id: GroupId,
    animations: Vec<PropertyAnimation>,
    transition: Transition,
    started_at: Option<Instant>,
    status: Rc<Cell<GroupStatus>>,
    on_complete: Option<C>,
}

impl<C> AnimationGroup<C> {
    /// Create a group that plays `animations` together.
    pub fn together(
        transition: Transition,
        on_complete: C,
        animations: impl IntoIterator<Item = PropertyAnimation>,
    ) -> Self {
        Self {
            id: GroupId::next(),
            animations: animations.into_iter().collect(),
            transition,
            started_at: None,
            status: Rc::new(Cell::new(GroupStatus::Pending)),
            on_complete: Some(on_complete),
        }
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn handle(&self) -> GroupHandle {
        GroupHandle {
            id: self.id,
            status: Rc::clone(&self.status),
        }
    }

    pub fn status(&self) -> GroupStatus {
        self.status.get()
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn animations(&self) -> &[PropertyAnimation] {
        &self.animations
    }

    /// Advance all animations to `now`, writing changed values through `apply`.
    ///
    /// Returns the completion payload on the tick where every animation
    /// settles on its target, and `None` on every other call.
    pub fn advance(
        &mut self,
        now: Instant,
        mut apply: impl FnMut(MorphProperty, f32),
    ) -> Option<C> {
        if self.status.get().is_finished() {
            return None;
        }

        let started_at = *self.started_at.get_or_insert(now);
        self.status.set(GroupStatus::Running);

        let elapsed_ms = now.saturating_duration_since(started_at).as_micros() as f32 / 1000.0;
        let t = self.transition.progress(elapsed_ms);
        let fraction = if t >= 1.0 {
            1.0
        } else {
            self.transition.timing.evaluate(t)
        };

        for anim in &mut self.animations {
            if let AdvanceResult::Changed(value) = anim.sample(fraction) {
                log::trace!("{:?} -> {:?} = {}", self.id, anim.property(), value);
                apply(anim.property(), value);
            }
        }

        if t >= 1.0 && self.animations.iter().all(PropertyAnimation::is_settled) {
            self.status.set(GroupStatus::Completed);
            return self.on_complete.take();
        }

        None
    }

    /// Cancel the group, discarding its completion payload.
    ///
    /// Returns false if the group had already finished.
    pub fn cancel(&mut self) -> bool {
        if self.status.get().is_finished() {
            return false;
        }
        self.status.set(GroupStatus::Canceled);
        self.on_complete = None;
        true
    }
}
