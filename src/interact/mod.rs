//! Interaction state for mounted sections.
//!
//! Rendering is pure; these controllers own the state that changes
//! between renders. Each mounted interactive section gets a controller:
//! carousels an [`AutoCycle`], FAQ lists an [`Accordion`], filterable
//! grids a [`CategoryFilter`], stat bands a [`StatCounter`], forms a
//! [`SubmitReset`]. State changes publish on watch channels; the host
//! re-renders the section from the new snapshot. Everything timed runs
//! on the two primitives in [`timer`].

pub mod accordion;
pub mod cycle;
pub mod filter;
pub mod form;
pub mod timer;
pub mod tween;

pub use accordion::Accordion;
pub use cycle::{AUTO_ADVANCE_INTERVAL, AutoCycle, CyclicIndex};
pub use filter::{ALL_CATEGORY, Categorized, CategoryFilter};
pub use form::{RESET_DELAY, SubmitReset};
pub use timer::{Delay, Ticker};
pub use tween::{COUNTER_TICK, StatCounter, Tween};
