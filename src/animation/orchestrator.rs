use std::time::Instant;

use super::{AnimationGroup, GroupHandle, MorphProperty, PropertyAnimation, Transition};

/// Owns the single active animation group of a widget.
///
/// Playing a new group cancels the previous one before it is replaced, so at
/// most one group is ever in flight and a preempted group never completes.
pub struct Orchestrator<C> {
    transition: Transition,
    active: Option<AnimationGroup<C>>,
}

impl<C> Orchestrator<C> {
    pub fn new(transition: Transition) -> Self {
        Self {
            transition,
            active: None,
        }
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Play `animations` together as one group, preempting any active group.
    pub fn play(
        &mut self,
        on_complete: C,
        animations: impl IntoIterator<Item = PropertyAnimation>,
    ) -> GroupHandle {
        self.cancel();

        let group = AnimationGroup::together(self.transition, on_complete, animations);
        let handle = group.handle();
        log::debug!(
            "Playing {:?} ({} animations, {}ms)",
            group.id(),
            group.animations().len(),
            self.transition.duration_ms
        );
        self.active = Some(group);
        handle
    }

    /// Cancel the active group, if any. Its completion is dropped.
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(mut group) => {
                let canceled = group.cancel();
                if canceled {
                    log::debug!("Canceled {:?}", group.id());
                }
                canceled
            }
            None => false,
        }
    }

    /// Advance the active group. Returns its completion on the tick it finishes.
    pub fn tick(&mut self, now: Instant, apply: impl FnMut(MorphProperty, f32)) -> Option<C> {
        let group = self.active.as_mut()?;
        let completion = group.advance(now, apply);

        if group.status().is_finished() {
            log::debug!("Completed {:?}", group.id());
            self.active = None;
        }

        completion
    }

    /// Whether a group is waiting for or receiving ticks
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&AnimationGroup<C>> {
        self.active.as_ref()
    }
}

impl<C> Default for Orchestrator<C> {
    fn default() -> Self {
        Self::new(Transition::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{GroupStatus, TimingFunction};
    use std::time::Duration;

    fn orchestrator() -> Orchestrator<&'static str> {
        Orchestrator::new(Transition::new(300.0, TimingFunction::Linear))
    }

    fn morph(from: f32, to: f32) -> [PropertyAnimation; 3] {
        [
            PropertyAnimation::corner_radius(0.0, 1000.0),
            PropertyAnimation::width(from, to),
            PropertyAnimation::height(80.0, 80.0),
        ]
    }

    #[test]
    fn test_play_then_complete() {
        let mut orchestrator = orchestrator();
        let handle = orchestrator.play("expanded", morph(200.0, 80.0));
        assert!(orchestrator.is_animating());
        assert_eq!(handle.status(), GroupStatus::Pending);

        let start = Instant::now();
        assert_eq!(orchestrator.tick(start, |_, _| {}), None);
        assert_eq!(
            orchestrator.tick(start + Duration::from_millis(300), |_, _| {}),
            Some("expanded")
        );
        assert!(!orchestrator.is_animating());
        assert!(handle.is_completed());
    }

    #[test]
    fn test_new_group_preempts_previous() {
        let mut orchestrator = orchestrator();
        let start = Instant::now();

        let first = orchestrator.play("first", morph(200.0, 80.0));
        orchestrator.tick(start, |_, _| {});
        orchestrator.tick(start + Duration::from_millis(100), |_, _| {});

        let second = orchestrator.play("second", morph(120.0, 200.0));
        assert!(first.is_canceled());
        assert_eq!(second.status(), GroupStatus::Pending);

        let mut completions = Vec::new();
        for step in (0..=600).step_by(50) {
            if let Some(done) =
                orchestrator.tick(start + Duration::from_millis(100 + step), |_, _| {})
            {
                completions.push(done);
            }
        }
        assert_eq!(completions, vec!["second"]);
    }

    #[test]
    fn test_second_group_starts_from_its_own_clock() {
        let mut orchestrator = orchestrator();
        let start = Instant::now();
        orchestrator.play("first", morph(200.0, 80.0));
        orchestrator.tick(start, |_, _| {});

        orchestrator.play("second", morph(80.0, 200.0));
        let mut widths = Vec::new();
        orchestrator.tick(start + Duration::from_millis(250), |p, v| {
            if p == MorphProperty::Width {
                widths.push(v)
            }
        });
        // First tick of the new group pins its start, so it begins at `from`
        assert_eq!(widths, vec![80.0]);
    }

    #[test]
    fn test_cancel_without_active_group() {
        let mut orchestrator = orchestrator();
        assert!(!orchestrator.cancel());
        assert_eq!(orchestrator.tick(Instant::now(), |_, _| {}), None);
    }
}
