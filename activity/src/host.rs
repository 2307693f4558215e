use cookie_search_core::CellIndex;
use cookie_search_protocol::PeerMessage;
use web_time::Instant;

/// Something the player should be told about, usually followed by a "new game?" prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Every prize flagged; `score` is the elapsed time that was recorded.
    Won { score: String },
    /// A prize was clicked.
    Lost { index: CellIndex },
}

/// Services the surrounding activity shell provides to a session.
pub trait ActivityHost {
    /// Fire-and-forget broadcast to every other participant.
    fn post(&mut self, message: PeerMessage);

    /// Toolbar status label, used for the running clock.
    fn set_status(&mut self, _status: &str) {}

    fn notify(&mut self, _notice: Notice) {}

    fn now(&self) -> Instant {
        Instant::now()
    }
}
