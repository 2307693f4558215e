use cookie_search_core::{
    BoardLayout, CellIndex, CellState, FlagOutcome, GridGame, Placement, RandomPrizeGenerator,
    RevealOutcome, Viewport,
};
use cookie_search_protocol::{MetadataStore, PeerCommand, PeerMessage, SavedSession, format_scores};
use rand::prelude::*;

use crate::*;

/// One running activity: the grid plus everything kept around it between games.
pub struct GameSession<H: ActivityHost> {
    host: H,
    grid: GridGame,
    layout: BoardLayout,
    timer: GameTimer,
    seeds: SmallRng,
    placement: Placement,
    sharing: bool,
    scores: Vec<String>,
    level: u32,
}

impl<H: ActivityHost> GameSession<H> {
    pub fn new(host: H, viewport: Viewport) -> Self {
        Self::with_seed(host, viewport, rand::rng().random())
    }

    /// Same prize layouts for the same seed, for reproducible sessions.
    pub fn with_seed(host: H, viewport: Viewport, seed: u64) -> Self {
        let layout = BoardLayout::new(viewport);
        Self {
            host,
            grid: GridGame::new(layout.size()),
            layout,
            timer: GameTimer::default(),
            seeds: SmallRng::seed_from_u64(seed),
            placement: Placement::default(),
            sharing: false,
            scores: Vec::new(),
            level: 0,
        }
    }

    pub fn from_args(host: H, viewport: Viewport, args: &ActivityArgs) -> Self {
        let mut session = match args.seed {
            Some(seed) => Self::with_seed(host, viewport, seed),
            None => Self::new(host, viewport),
        };
        session.set_sharing(args.shared);
        session
    }

    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
    }

    pub fn set_sharing(&mut self, sharing: bool) {
        log::debug!("sharing: {}", sharing);
        self.sharing = sharing;
    }

    pub fn is_sharing(&self) -> bool {
        self.sharing
    }

    pub fn grid(&self) -> &GridGame {
        &self.grid
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn scores(&self) -> &[String] {
        &self.scores
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.timer.elapsed_secs()
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Picks up the previous session from the store, or deals a fresh game.
    pub fn start(&mut self, store: &impl MetadataStore) {
        match self.restore(store) {
            Ok(true) => {}
            Ok(false) => self.new_game(),
            Err(err) => {
                log::warn!("Could not restore previous session: {}", err);
                self.new_game();
            }
        }
    }

    pub fn new_game(&mut self) {
        let seed = self.seeds.random();
        self.grid.new_game(RandomPrizeGenerator::new(seed, self.placement));

        if self.sharing {
            log::debug!("sending a new game");
            self.broadcast(PeerCommand::NewGame(self.grid.save()));
        }

        let now = self.host.now();
        self.timer.start(now);
        self.host.set_status("0");
    }

    /// Left click on a dot.
    pub fn primary_activate(&mut self, index: CellIndex) -> Result<RevealOutcome> {
        let report = self.grid.reveal(index)?;

        if self.sharing {
            for &revealed in &report.revealed {
                log::debug!("sending a click on {} to the share", revealed);
                self.broadcast(PeerCommand::CellUpdate {
                    index: revealed,
                    state: CellState::Revealed,
                });
            }
        }

        match report.outcome {
            RevealOutcome::HitPrize => self.lose(index),
            RevealOutcome::Won => self.win(),
            RevealOutcome::NoChange | RevealOutcome::Revealed => {}
        }
        Ok(report.outcome)
    }

    /// Right click on a dot.
    pub fn secondary_activate(&mut self, index: CellIndex) -> Result<FlagOutcome> {
        let outcome = self.grid.flip_flag(index)?;
        if outcome == FlagOutcome::Won {
            self.win();
        }
        Ok(outcome)
    }

    /// Applies a message from another participant; anything unusable is logged and dropped.
    pub fn handle_message(&mut self, message: &PeerMessage) {
        if let Err(err) = self.apply_message(message) {
            log::warn!("Dropping peer message {:?}: {}", message.command, err);
        }
    }

    fn apply_message(&mut self, message: &PeerMessage) -> Result<()> {
        match PeerCommand::decode(message)? {
            PeerCommand::NewGame(states) => {
                log::debug!("received game, {} cells", states.len());
                self.grid.restore(&states)?;

                let now = self.host.now();
                self.timer.start(now);
                self.host.set_status("0");
            }
            PeerCommand::CellUpdate { index, state } => {
                log::debug!("received click on {}: {:?}", index, state);
                self.grid.remote_update(index, state)?;
            }
        }
        Ok(())
    }

    /// Periodic one second callback.
    pub fn tick(&mut self) -> Option<u64> {
        let now = self.host.now();
        let elapsed = self.timer.tick(now)?;
        self.host.set_status(&elapsed.to_string());
        Some(elapsed)
    }

    /// The drawable area changed; swaps rows and columns when the aspect ratio flipped.
    pub fn reconfigure(&mut self, viewport: Viewport) -> Result<()> {
        let layout = BoardLayout::new(viewport);
        if layout.size() != self.grid.size() {
            log::debug!("orientation changed to {:?}", layout.orientation());
            self.grid.reconfigure(layout.size())?;
        }
        self.layout = layout;
        Ok(())
    }

    pub fn save(&mut self, store: &mut impl MetadataStore) -> Result<()> {
        let now = self.host.now();
        self.timer.tick(now);

        let saved = SavedSession {
            dots: self.grid.save_tags(),
            scores: self.scores.clone(),
            game_time: self.timer.elapsed_secs(),
            level: self.level,
        };
        saved.write_to(store)?;
        Ok(())
    }

    /// Returns `false` when the store has no previous grid to restore.
    pub fn restore(&mut self, store: &impl MetadataStore) -> Result<bool> {
        let Some(saved) = SavedSession::read_from(store)? else {
            return Ok(false);
        };

        self.grid.restore_tags(&saved.dots)?;
        self.scores = saved.scores;
        self.level = saved.level;

        let now = self.host.now();
        self.timer.resume(now, saved.game_time);
        if self.grid.is_finished() {
            self.timer.stop(now);
        }
        log::debug!("restored session, scores: {:?}", self.scores);
        Ok(true)
    }

    pub fn export_scores(&self) -> String {
        format_scores(&self.scores)
    }

    fn win(&mut self) {
        let now = self.host.now();
        let score = self.timer.stop(now).to_string();
        self.scores.push(score.clone());
        log::debug!("won, scores: {:?}", self.scores);
        self.host.notify(Notice::Won { score });
    }

    fn lose(&mut self, index: CellIndex) {
        let now = self.host.now();
        self.timer.stop(now);
        log::debug!("lost on cell {}", index);
        self.host.notify(Notice::Lost { index });
    }

    fn broadcast(&mut self, command: PeerCommand) {
        self.host.post(command.encode());
    }
}
