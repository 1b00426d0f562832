//! Pinch-zoom and pan state for an image rendered into a fixed-size box.
//!
//! The transform keeps a live `(scale, translation)` pair that follows the
//! active gestures and a saved pair committed at the end of each gesture.
//! Every update clamps scale to `[MIN_SCALE, MAX_SCALE]` and translation to
//! the overscan created by the current scale, so the image always covers
//! its box.

mod bounds;
mod event;
mod geometry;
mod shared;
mod viewport;

pub use bounds::PanBounds;
pub use event::{parse_script, GestureEvent};
pub use geometry::{clamp_scale, ContentSize, DisplayRect, Translation};
pub use shared::SharedViewport;
pub use viewport::{GesturePhase, TransformSnapshot, ViewportTransform};
