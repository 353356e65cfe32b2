//! Incremental per-tick modifiers
//!
//! A modifier nudges its item a little further every tick. Translation
//! tracks the displacement still owed and spends `delta / duration` of it
//! per tick against the animation's *remaining* duration, so the total
//! converges to the requested vector no matter how the time is sliced.
//! Rotation instead fixes its angular rate at construction
//! (`angle / total_duration`) and does not adapt if tick timing drifts;
//! the asymmetry is deliberate and kept.

use crate::item::Item;
use plume_core::Point;

/// Identifies one live modifier within its animation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModifierId(pub(crate) u64);

/// An incremental transform applied once per tick
#[derive(Clone, Debug)]
pub enum Modifier {
    Translate {
        /// Displacement still to be applied
        remaining: Point,
    },
    Rotate {
        /// Radians per time unit, fixed at construction
        rate: f32,
        pivot: Option<Point>,
    },
}

impl Modifier {
    pub fn translate(vector: Point) -> Self {
        Modifier::Translate { remaining: vector }
    }

    pub fn rotate(angle: f32, pivot: Option<Point>, total_duration: f32) -> Self {
        Modifier::Rotate {
            rate: angle / total_duration,
            pivot,
        }
    }

    /// Advance the bound item (and the morph target, if any) by the
    /// increment for `delta` elapsed time units. `duration` is the owning
    /// animation's current remaining duration.
    pub fn update<I: Item>(
        &mut self,
        item: &mut I,
        target_shape: Option<&mut I>,
        delta: f32,
        duration: f32,
    ) {
        match self {
            Modifier::Translate { remaining } => {
                let step = *remaining * (delta / duration);
                item.translate(step);
                if let Some(target) = target_shape {
                    target.translate(step);
                }
                *remaining -= step;
            }
            Modifier::Rotate { rate, pivot } => {
                item.rotate(*rate * delta, *pivot);
                if let Some(target) = target_shape {
                    target.rotate(*rate * delta, *pivot);
                }
            }
        }
    }
}
