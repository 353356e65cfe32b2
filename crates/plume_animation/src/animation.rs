//! Animation lifecycle
//!
//! An `Animation` drives one item for a bounded duration. Incremental
//! transforms (translate, rotate) accumulate as modifiers and advance a
//! little every tick; shape-affecting transforms (scale, shear, matrix,
//! bounds-fitting, explicit replacement) instead edit a detached target
//! shape that the item's segments are interpolated toward. The target
//! shape is captured lazily from the item's current shape on the first
//! shape-affecting call and owned exclusively by the animation until it
//! finishes.

use crate::error::AnimateError;
use crate::interp::interpolate_segment;
use crate::item::Item;
use crate::modifier::{Modifier, ModifierId};
use crate::scheduler::Tick;
use crate::ItemHandle;
use plume_core::{Matrix, Point, Rect};
use smallvec::SmallVec;

/// Fallback when a requested duration is missing-in-spirit (zero, negative
/// or NaN), in time units
pub const DEFAULT_DURATION: f32 = 1000.0;

/// One item's scheduled transform over a bounded duration
pub struct Animation<I: Item> {
    item: ItemHandle<I>,
    /// Remaining duration in time units; strictly decreasing
    duration: f32,
    /// Live modifiers in insertion order (= application order)
    modifiers: SmallVec<[(ModifierId, Modifier); 4]>,
    next_modifier_id: u64,
    target_shape: Option<I>,
    /// Fluent calls return the item handle (false) or the animation (true);
    /// decided once, at construction
    chain: bool,
}

impl<I: Item> Animation<I> {
    pub fn new(item: ItemHandle<I>, duration: f32, chain: bool) -> Self {
        let duration = if duration > 0.0 {
            duration
        } else {
            tracing::warn!(requested = duration, "non-positive duration, defaulting");
            DEFAULT_DURATION
        };
        tracing::debug!(duration, chain, "animation created");
        Self {
            item,
            duration,
            modifiers: SmallVec::new(),
            next_modifier_id: 0,
            target_shape: None,
            chain,
        }
    }

    pub fn item(&self) -> &ItemHandle<I> {
        &self.item
    }

    /// Remaining duration in time units
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn is_finished(&self) -> bool {
        self.duration <= 0.0
    }

    pub(crate) fn chain(&self) -> bool {
        self.chain
    }

    /// The detached morph target, if one has been materialized
    pub fn target_shape(&self) -> Option<&I> {
        self.target_shape.as_ref()
    }

    /// Queue an incremental translation by `vector` over the remaining
    /// duration
    pub fn translate(&mut self, vector: Point) -> ModifierId {
        self.push_modifier(Modifier::translate(vector))
    }

    /// Queue an incremental rotation by `angle` radians about `pivot`
    /// (item position when `None`), spread over the remaining duration
    pub fn rotate(&mut self, angle: f32, pivot: Option<Point>) -> ModifierId {
        self.push_modifier(Modifier::rotate(angle, pivot, self.duration))
    }

    fn push_modifier(&mut self, modifier: Modifier) -> ModifierId {
        let id = ModifierId(self.next_modifier_id);
        self.next_modifier_id += 1;
        self.modifiers.push((id, modifier));
        id
    }

    /// Drop a live modifier early; `false` if it is not (or no longer)
    /// attached
    pub fn remove_modifier(&mut self, id: ModifierId) -> bool {
        let before = self.modifiers.len();
        self.modifiers.retain(|(m, _)| *m != id);
        self.modifiers.len() != before
    }

    fn target_shape_mut(&mut self) -> &mut I {
        if self.target_shape.is_none() {
            let mut shape = self.item.borrow().clone();
            shape.set_fully_selected(false);
            shape.set_visible(false);
            self.target_shape = Some(shape);
        }
        self.target_shape.as_mut().unwrap()
    }

    /// Scale the morph target about `pivot` (target position when `None`)
    pub fn scale(&mut self, sx: f32, sy: f32, pivot: Option<Point>) {
        self.target_shape_mut().scale(sx, sy, pivot);
    }

    /// Shear the morph target about `pivot`
    pub fn shear(&mut self, hor: f32, ver: f32, pivot: Option<Point>) {
        self.target_shape_mut().shear(hor, ver, pivot);
    }

    /// Apply an affine transform to the morph target
    pub fn transform(&mut self, matrix: &Matrix) {
        self.target_shape_mut().transform(matrix);
    }

    /// Fit (or fill) the morph target into `rect`
    pub fn fit_bounds(&mut self, rect: Rect, fill: bool) {
        self.target_shape_mut().fit_bounds(rect, fill);
    }

    /// Replace the morph target with `shape`, which must have the same
    /// segment count as the item. On mismatch nothing is mutated and the
    /// shape is dropped.
    pub fn replace_shape(&mut self, mut shape: I) -> Result<(), AnimateError> {
        let item_count = self.item.borrow().segment_count();
        let replacement_count = shape.segment_count();
        if item_count != replacement_count {
            return Err(AnimateError::SegmentCountMismatch {
                item: item_count,
                replacement: replacement_count,
            });
        }
        shape.set_visible(false);
        self.target_shape = Some(shape);
        Ok(())
    }

    /// Force completion: the next `update` observes the animation as
    /// finished and reports it for removal
    pub fn cancel(&mut self) {
        self.duration = 0.0;
    }

    /// Advance one frame. Returns `false` exactly once, on the tick where
    /// the animation is first observed finished; the caller should then
    /// drop it.
    ///
    /// The tick's delta is clamped to the remaining duration in a local
    /// copy, so an animation nearing its end never overshoots and never
    /// shortens the time seen by other animations sharing the tick.
    pub fn update(&mut self, tick: &Tick) -> bool {
        if self.duration <= 0.0 {
            self.modifiers.clear();
            self.target_shape = None;
            tracing::trace!("animation finished");
            return false;
        }

        let duration = self.duration;
        let mut item = self.item.borrow_mut();

        for (_, modifier) in &mut self.modifiers {
            modifier.update(&mut *item, self.target_shape.as_mut(), tick.delta, duration);
        }

        let delta = tick.delta.min(duration);

        if let Some(target) = &self.target_shape {
            if let (Some(segments), Some(target_segments)) =
                (item.segments_mut(), target.segments())
            {
                for (current, target) in segments.iter_mut().zip(target_segments) {
                    *current = interpolate_segment(0.0, duration, *current, *target, delta);
                }
            }
        }

        self.duration -= delta;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_core::Path;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn handle(path: Path) -> ItemHandle<Path> {
        Rc::new(RefCell::new(path))
    }

    fn unit_square() -> Path {
        Path::from_points([
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_non_positive_duration_defaults() {
        let anim = Animation::new(handle(unit_square()), 0.0, false);
        assert_eq!(anim.duration(), DEFAULT_DURATION);
        let anim = Animation::new(handle(unit_square()), -5.0, false);
        assert_eq!(anim.duration(), DEFAULT_DURATION);
    }

    #[test]
    fn test_update_reports_finished_once_duration_is_spent() {
        let mut anim = Animation::new(handle(unit_square()), 100.0, false);
        assert!(anim.update(&Tick::new(100.0)));
        assert_eq!(anim.duration(), 0.0);
        assert!(!anim.update(&Tick::new(16.0)));
    }

    #[test]
    fn test_finishing_releases_modifiers_and_target_shape() {
        let mut anim = Animation::new(handle(unit_square()), 100.0, false);
        anim.translate(Point::new(10.0, 0.0));
        anim.scale(2.0, 2.0, None);
        assert!(anim.target_shape().is_some());
        anim.update(&Tick::new(100.0));
        assert!(!anim.update(&Tick::new(1.0)));
        assert!(anim.target_shape().is_none());
    }

    #[test]
    fn test_overshoot_clamps_to_remaining_duration() {
        let item = handle(unit_square());
        let mut anim = Animation::new(item.clone(), 100.0, false);
        anim.scale(3.0, 3.0, Some(Point::ZERO));
        anim.update(&Tick::new(100_000.0));

        // item lands exactly on the target, not past it
        assert_eq!(anim.duration(), 0.0);
        let p = item.borrow().segments()[2].point;
        assert!((p.x - 3.0).abs() < 1e-3);
        assert!((p.y - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_target_shape_is_captured_once_and_detached() {
        let item = handle(unit_square());
        let mut anim = Animation::new(item.clone(), 1000.0, false);
        anim.scale(2.0, 2.0, Some(Point::ZERO));
        anim.scale(2.0, 2.0, Some(Point::ZERO));

        let target = anim.target_shape().unwrap();
        assert!(!target.visible());
        // both scales applied to the same snapshot
        assert_eq!(target.segments()[2].point, Point::new(4.0, 4.0));
        // the live item is untouched until update runs
        assert_eq!(item.borrow().segments()[2].point, Point::new(1.0, 1.0));
    }

    #[test]
    fn test_replace_shape_rejects_mismatched_segment_count() {
        let mut anim = Animation::new(handle(unit_square()), 1000.0, false);
        let err = anim
            .replace_shape(Path::from_points([Point::ZERO, Point::new(1.0, 0.0)]))
            .unwrap_err();
        assert_eq!(
            err,
            AnimateError::SegmentCountMismatch {
                item: 4,
                replacement: 2
            }
        );
        assert!(anim.target_shape().is_none());
    }

    #[test]
    fn test_remove_modifier_stops_its_effect() {
        let item = handle(unit_square());
        let mut anim = Animation::new(item.clone(), 1000.0, false);
        let id = anim.translate(Point::new(100.0, 0.0));
        anim.update(&Tick::new(500.0));
        assert!(anim.remove_modifier(id));
        assert!(!anim.remove_modifier(id));
        let x = item.borrow().segments()[0].point.x;
        anim.update(&Tick::new(500.0));
        assert_eq!(item.borrow().segments()[0].point.x, x);
    }

    #[test]
    fn test_cancel_finishes_on_next_tick() {
        let mut anim = Animation::new(handle(unit_square()), 1000.0, false);
        anim.cancel();
        assert!(!anim.update(&Tick::new(16.0)));
    }
}
