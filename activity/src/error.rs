use cookie_search_core::GameError;
use cookie_search_protocol::ProtocolError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActivityError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

pub type Result<T> = std::result::Result<T, ActivityError>;
