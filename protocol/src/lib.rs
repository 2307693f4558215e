//! Wire and storage formats shared by every cookie search participant.

pub use error::*;
pub use message::*;
pub use scores::*;
pub use store::*;

mod error;
mod message;
mod scores;
mod store;
