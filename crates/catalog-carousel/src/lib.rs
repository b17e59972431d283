//! Timed, responsive, wrap-around carousel over an ordered sequence.
//!
//! Split in two layers:
//! - [`CarouselState`] is the pure state machine: index arithmetic, the
//!   responsive window, and the derived lifecycle phase. Every transition
//!   keeps `current_index` in `[0, max_index]`.
//! - [`CarouselScheduler`] adds timing: an explicit, cancellable tokio task
//!   that delivers ticks over a channel at a fixed period. Creation and
//!   cancellation are symmetric; replacing the sequence always replaces the
//!   timer, so a late tick can never move an index belonging to a previous
//!   sequence.

pub mod breakpoints;
pub mod scheduler;
pub mod state;

pub use breakpoints::{CarouselLayout, layout_for};
pub use scheduler::{AUTO_ADVANCE_PERIOD, CarouselEvent, CarouselScheduler};
pub use state::{CarouselPhase, CarouselState};
