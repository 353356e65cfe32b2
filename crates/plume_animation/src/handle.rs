//! Shared animation handles and the fluent configuration surface
//!
//! Animations are shared between the caller (configuring them) and the
//! scheduler (ticking them), so they live behind `Rc<RefCell>` handles —
//! the whole engine is single-threaded and tick-driven.
//!
//! Every fluent call returns [`Chained`]: the original item handle when the
//! animation was built without chaining (so callers keep working with the
//! item's own API), or the animation handle when it was built with
//! chaining (so configuration calls stack). Which of the two is fixed per
//! animation at construction.

use crate::animation::Animation;
use crate::error::AnimateError;
use crate::item::Item;
use crate::modifier::ModifierId;
use crate::scheduler::Tick;
use crate::ItemHandle;
use plume_core::{Matrix, Point, Rect};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to one animation
#[derive(Clone)]
pub struct AnimationHandle<I: Item>(Rc<RefCell<Animation<I>>>);

/// What a fluent call hands back for further chaining
pub enum Chained<I: Item> {
    /// The animated item itself (chain flag off)
    Item(ItemHandle<I>),
    /// The animation, for stacking configuration calls (chain flag on)
    Animation(AnimationHandle<I>),
}

impl<I: Item> AnimationHandle<I> {
    pub fn new(animation: Animation<I>) -> Self {
        Self(Rc::new(RefCell::new(animation)))
    }

    /// Handle to the animated item
    pub fn item(&self) -> ItemHandle<I> {
        self.0.borrow().item().clone()
    }

    /// Remaining duration in time units
    pub fn duration(&self) -> f32 {
        self.0.borrow().duration()
    }

    pub fn is_finished(&self) -> bool {
        self.0.borrow().is_finished()
    }

    /// Whether two handles refer to the same animation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Advance one frame directly, without a scheduler. Returns `false`
    /// when the animation is finished and should be dropped.
    pub fn update(&self, tick: &Tick) -> bool {
        self.0.borrow_mut().update(tick)
    }

    /// Force completion on the next tick
    pub fn cancel(&self) {
        self.0.borrow_mut().cancel();
    }

    /// Drop a queued modifier early
    pub fn remove_modifier(&self, id: ModifierId) -> bool {
        self.0.borrow_mut().remove_modifier(id)
    }

    fn chained(&self) -> Chained<I> {
        if self.0.borrow().chain() {
            Chained::Animation(self.clone())
        } else {
            Chained::Item(self.item())
        }
    }

    /// Queue an incremental translation by `vector`
    pub fn translate(&self, vector: Point) -> Chained<I> {
        self.0.borrow_mut().translate(vector);
        self.chained()
    }

    /// Queue an incremental rotation by `angle` radians about the item
    /// position
    pub fn rotate(&self, angle: f32) -> Chained<I> {
        self.0.borrow_mut().rotate(angle, None);
        self.chained()
    }

    /// Queue an incremental rotation about an explicit pivot
    pub fn rotate_about(&self, angle: f32, pivot: Point) -> Chained<I> {
        self.0.borrow_mut().rotate(angle, Some(pivot));
        self.chained()
    }

    /// Morph toward the current shape scaled uniformly by `factor`
    pub fn scale(&self, factor: f32) -> Chained<I> {
        self.scale_xy(factor, factor)
    }

    /// Morph toward the current shape scaled per axis
    pub fn scale_xy(&self, sx: f32, sy: f32) -> Chained<I> {
        self.0.borrow_mut().scale(sx, sy, None);
        self.chained()
    }

    /// Morph toward the current shape scaled about an explicit pivot
    pub fn scale_about(&self, factor: f32, pivot: Point) -> Chained<I> {
        self.0.borrow_mut().scale(factor, factor, Some(pivot));
        self.chained()
    }

    /// Morph toward the current shape sheared by `hor`/`ver`
    pub fn shear(&self, hor: f32, ver: f32) -> Chained<I> {
        self.0.borrow_mut().shear(hor, ver, None);
        self.chained()
    }

    /// Morph toward the current shape sheared about an explicit pivot
    pub fn shear_about(&self, hor: f32, ver: f32, pivot: Point) -> Chained<I> {
        self.0.borrow_mut().shear(hor, ver, Some(pivot));
        self.chained()
    }

    /// Morph toward the current shape under an affine transform
    pub fn transform(&self, matrix: &Matrix) -> Chained<I> {
        self.0.borrow_mut().transform(matrix);
        self.chained()
    }

    /// Morph toward the current shape fitted into `rect`
    pub fn fit_bounds(&self, rect: Rect) -> Chained<I> {
        self.0.borrow_mut().fit_bounds(rect, false);
        self.chained()
    }

    /// Morph toward the current shape scaled to cover `rect`
    pub fn fill_bounds(&self, rect: Rect) -> Chained<I> {
        self.0.borrow_mut().fit_bounds(rect, true);
        self.chained()
    }

    /// Morph toward `shape`. A segment-count mismatch leaves all state
    /// untouched; the chain continues either way.
    pub fn replace_shape(&self, shape: I) -> Chained<I> {
        if let Err(error) = self.0.borrow_mut().replace_shape(shape) {
            tracing::warn!(%error, "replace_shape ignored");
        }
        self.chained()
    }

    /// Like [`replace_shape`](Self::replace_shape), but surfaces the
    /// mismatch instead of swallowing it
    pub fn try_replace_shape(&self, shape: I) -> Result<Chained<I>, AnimateError> {
        self.0.borrow_mut().replace_shape(shape)?;
        Ok(self.chained())
    }
}

impl<I: Item> Chained<I> {
    pub fn is_item(&self) -> bool {
        matches!(self, Chained::Item(_))
    }

    pub fn is_animation(&self) -> bool {
        matches!(self, Chained::Animation(_))
    }

    /// The item handle, if the chain yielded the item
    pub fn item(self) -> Option<ItemHandle<I>> {
        match self {
            Chained::Item(item) => Some(item),
            Chained::Animation(_) => None,
        }
    }

    /// The animation handle, if the chain yielded the animation
    pub fn animation(self) -> Option<AnimationHandle<I>> {
        match self {
            Chained::Animation(animation) => Some(animation),
            Chained::Item(_) => None,
        }
    }

    /// Continue the chain: configures the animation, or translates the
    /// item immediately when the chain carries the item
    pub fn translate(self, vector: Point) -> Chained<I> {
        match self {
            Chained::Animation(animation) => animation.translate(vector),
            Chained::Item(item) => {
                item.borrow_mut().translate(vector);
                Chained::Item(item)
            }
        }
    }

    /// Continue the chain with a rotation (immediate on the item variant)
    pub fn rotate(self, angle: f32) -> Chained<I> {
        match self {
            Chained::Animation(animation) => animation.rotate(angle),
            Chained::Item(item) => {
                item.borrow_mut().rotate(angle, None);
                Chained::Item(item)
            }
        }
    }

    /// Continue the chain with a uniform scale (immediate on the item
    /// variant)
    pub fn scale(self, factor: f32) -> Chained<I> {
        match self {
            Chained::Animation(animation) => animation.scale(factor),
            Chained::Item(item) => {
                item.borrow_mut().scale(factor, factor, None);
                Chained::Item(item)
            }
        }
    }
}
