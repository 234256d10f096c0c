//! The page's two pieces of mutable state, each a component-owned reactive
//! cell fed by window events.

mod pointer;
mod scroll;

pub use pointer::{use_pointer_sensor, PointerPosition, PointerSensor, PARALLAX_FACTOR};
pub use scroll::{scroll_fraction, use_scroll_progress, ScrollProgress};
