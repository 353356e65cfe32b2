//! Animation scheduler
//!
//! Holds all live animations and advances them once per external tick.
//! The scheduler owns no clock; the host's frame loop supplies elapsed
//! time. Animations are advanced in registration order and dropped in the
//! same tick they report completion, using an explicit mark-then-remove
//! pass so removal never disturbs the traversal.

use crate::handle::AnimationHandle;
use crate::item::Item;
use smallvec::SmallVec;

/// One frame's worth of elapsed time, as handed in by the host's clock
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tick {
    /// Time units since the previous tick. Never mutated by the engine, so
    /// one tick value can safely drive any number of animations.
    pub delta: f32,
}

impl Tick {
    pub const fn new(delta: f32) -> Self {
        Self { delta }
    }
}

/// The scheduler that ticks all registered animations
pub struct Scheduler<I: Item> {
    animations: Vec<AnimationHandle<I>>,
}

impl<I: Item> Scheduler<I> {
    pub fn new() -> Self {
        Self {
            animations: Vec::new(),
        }
    }

    /// Register an animation; it is advanced on every tick until it
    /// finishes
    pub fn register(&mut self, animation: &AnimationHandle<I>) {
        tracing::debug!(live = self.animations.len() + 1, "animation registered");
        self.animations.push(animation.clone());
    }

    /// Advance all animations by `tick`, then drop the finished ones
    pub fn tick(&mut self, tick: &Tick) {
        let mut finished: SmallVec<[usize; 4]> = SmallVec::new();
        for (index, animation) in self.animations.iter().enumerate() {
            if !animation.update(tick) {
                finished.push(index);
            }
        }
        if !finished.is_empty() {
            tracing::trace!(removed = finished.len(), "animations finished");
        }
        for index in finished.into_iter().rev() {
            self.animations.remove(index);
        }
    }

    /// Whether `animation` is still registered
    pub fn contains(&self, animation: &AnimationHandle<I>) -> bool {
        self.animations.iter().any(|a| a.ptr_eq(animation))
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

impl<I: Item> Default for Scheduler<I> {
    fn default() -> Self {
        Self::new()
    }
}
