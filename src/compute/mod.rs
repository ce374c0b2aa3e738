//! Compute module - Grid state and generation updates.

mod backend;
mod grid;
mod rule;
mod stepper;
mod view;

pub use backend::*;
pub use grid::*;
pub use rule::*;
pub use stepper::*;
pub use view::*;
