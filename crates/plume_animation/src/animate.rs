//! The attachment point
//!
//! `Animate` is an extension trait on shared item handles: the single
//! entry operation that builds an [`Animation`] around an item and,
//! optionally, registers it with a [`Scheduler`].

use crate::animation::Animation;
use crate::handle::AnimationHandle;
use crate::item::Item;
use crate::scheduler::Scheduler;
use crate::ItemHandle;

/// Entry point installed on every shared item handle
pub trait Animate<I: Item> {
    /// Start animating this item over `duration` time units.
    ///
    /// With `chain = false` the fluent calls on the returned handle hand
    /// back the item; with `chain = true` they hand back the animation.
    /// A non-positive duration falls back to
    /// [`DEFAULT_DURATION`](crate::DEFAULT_DURATION). The caller is
    /// responsible for ticking the returned animation.
    fn animate(&self, duration: f32, chain: bool) -> AnimationHandle<I>;

    /// Like [`animate`](Self::animate), but also registers the animation
    /// with `scheduler`, which will tick it until it finishes
    fn animate_on(
        &self,
        duration: f32,
        scheduler: &mut Scheduler<I>,
        chain: bool,
    ) -> AnimationHandle<I>;
}

impl<I: Item> Animate<I> for ItemHandle<I> {
    fn animate(&self, duration: f32, chain: bool) -> AnimationHandle<I> {
        AnimationHandle::new(Animation::new(self.clone(), duration, chain))
    }

    fn animate_on(
        &self,
        duration: f32,
        scheduler: &mut Scheduler<I>,
        chain: bool,
    ) -> AnimationHandle<I> {
        let animation = self.animate(duration, chain);
        scheduler.register(&animation);
        animation
    }
}
