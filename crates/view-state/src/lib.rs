//! # View State
//!
//! Session state for the campsite finder and the pure transition function
//! that drives it. Rendering and network I/O live elsewhere: transitions
//! that need the network return an [`Effect`] for the driver to run, and
//! the outcome comes back as another [`Action`].

/// Session state and the user-visible message strings.
mod state;
pub use state::*;

/// Actions and effects.
mod actions;
pub use actions::*;

/// The state-transition function.
mod reducer;
pub use reducer::*;
