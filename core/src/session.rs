use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// What a single click did to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click landed outside every cell.
    Missed,
    /// The game is over, or the button has no action.
    Ignored,
    Reveal(RevealOutcome),
    Flag(FlagOutcome),
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Missed | Self::Ignored => false,
            Self::Reveal(outcome) => outcome.has_update(),
            Self::Flag(outcome) => outcome.has_update(),
        }
    }
}

/// A running game together with what it takes to start the next one.
///
/// The session is what an input loop talks to: it turns screen-space clicks into engine actions
/// and replaces the board on restart.
#[derive(Clone, Debug)]
pub struct Session<G = RandomMineGenerator> {
    config: GameConfig,
    generator: G,
    engine: Engine,
    games_started: u32,
}

impl Session<RandomMineGenerator> {
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomMineGenerator::new(seed))
    }
}

impl<G: MineGenerator> Session<G> {
    pub fn new(config: GameConfig, mut generator: G) -> Result<Self> {
        let engine = build_engine(&config, &mut generator)?;
        log::debug!(
            "New {}x{} game with {} mines",
            config.width,
            config.height,
            engine.total_mines()
        );
        Ok(Self {
            config,
            generator,
            engine,
            games_started: 1,
        })
    }

    /// Discards the current board and starts over with a freshly generated one.
    pub fn restart(&mut self) -> Result<()> {
        self.engine = build_engine(&self.config, &mut self.generator)?;
        self.games_started += 1;
        log::debug!("Restarted, game #{}", self.games_started);
        Ok(())
    }

    /// Applies at most one action: left reveals, right toggles a flag, anything else does nothing.
    pub fn handle_click(&mut self, pos: Point, button: MouseButton) -> ClickOutcome {
        if self.engine.is_finished() {
            return ClickOutcome::Ignored;
        }
        let Some(coords) = self.engine.cell_under(pos) else {
            log::trace!("Click at {:?} missed the board", pos);
            return ClickOutcome::Missed;
        };

        let result = match button {
            MouseButton::Left => self.engine.reveal(coords).map(ClickOutcome::Reveal),
            MouseButton::Right => self.engine.toggle_flag(coords).map(ClickOutcome::Flag),
            MouseButton::Middle => return ClickOutcome::Ignored,
        };
        match result {
            Ok(outcome) => {
                log::trace!("{:?} click on {:?}: {:?}", button, coords, outcome);
                outcome
            }
            Err(err) => {
                log::warn!("{:?} click on {:?} rejected: {}", button, coords, err);
                ClickOutcome::Ignored
            }
        }
    }
}

impl<G> Session<G> {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    pub fn state(&self) -> EngineState {
        self.engine.state()
    }

    pub fn mines_remaining(&self) -> CellCount {
        self.engine.mines_remaining()
    }

    pub fn flags_remaining(&self) -> CellCount {
        self.engine.flags_remaining()
    }

    pub fn bomb_triggered(&self) -> bool {
        self.engine.bomb_triggered()
    }

    /// Screen point at the middle of a cell, for frontends that address cells by coordinates.
    pub fn cell_center(&self, coords: Coord2) -> Option<Point> {
        self.engine.cell_at(coords).map(|cell| cell.rect().center())
    }
}

fn build_engine<G: MineGenerator>(config: &GameConfig, generator: &mut G) -> Result<Engine> {
    let mines = config.mine_count()?;
    let mine_layout = generator.generate(config.size(), mines)?;
    Engine::new(mine_layout, config.layout())
}
