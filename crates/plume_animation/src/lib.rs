//! Plume Animation Engine
//!
//! Per-frame tweening for items of a 2D vector scene graph.
//!
//! # Features
//!
//! - **Incremental modifiers**: translations and rotations applied a
//!   little per tick, converging on the requested total
//! - **Shape morphing**: scale/shear/matrix/bounds transforms (or a whole
//!   replacement shape) define a target the item's segments interpolate
//!   toward, segment by segment
//! - **Fluent chaining**: configuration calls return either the item or
//!   the animation, fixed per animation at construction
//! - **Tick-driven**: no internal clock; the host frame loop feeds a
//!   [`Tick`] to a [`Scheduler`] (or to an animation directly)
//!
//! # Example
//!
//! ```rust
//! use plume_animation::{Animate, Scheduler, Tick};
//! use plume_core::{Path, Point};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let item = Rc::new(RefCell::new(Path::from_points([
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//! ])));
//!
//! let mut scheduler = Scheduler::new();
//! item.animate_on(1000.0, &mut scheduler, true)
//!     .translate(Point::new(50.0, 0.0))
//!     .scale(2.0);
//!
//! // host frame loop
//! for _ in 0..90 {
//!     scheduler.tick(&Tick::new(1000.0 / 60.0));
//! }
//! assert!(scheduler.is_empty());
//! ```

pub mod animate;
pub mod animation;
pub mod error;
pub mod handle;
pub mod interp;
pub mod item;
pub mod modifier;
pub mod scheduler;

use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a host-owned item. The engine mutates items only
/// through handles like this; it never owns them outright.
pub type ItemHandle<I> = Rc<RefCell<I>>;

pub use animate::Animate;
pub use animation::{Animation, DEFAULT_DURATION};
pub use error::AnimateError;
pub use handle::{AnimationHandle, Chained};
pub use interp::interpolate_segment;
pub use item::Item;
pub use modifier::{Modifier, ModifierId};
pub use scheduler::{Scheduler, Tick};
