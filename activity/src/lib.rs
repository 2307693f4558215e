//! Cookie search game session, driven by an activity shell.
//!
//! The shell owns the window, the shared channel and the journal metadata. It forwards clicks, peer messages and a
//! one second tick to a [`GameSession`], and receives broadcasts, status text and win/lose notices back through
//! [`ActivityHost`].

pub use args::*;
pub use error::*;
pub use host::*;
pub use session::*;
pub use timer::*;

mod args;
mod error;
mod host;
mod session;
mod timer;
