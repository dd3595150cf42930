use alloc::collections::{BTreeSet, VecDeque};
use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    InProgress,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::InProgress
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    /// Number of cells uncovered, the clicked one included.
    Revealed(CellCount),
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    /// Flag refused because the budget is spent.
    NoFlagsLeft,
    Flagged,
    Unflagged,
    Won,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Flagged | Self::Unflagged | Self::Won)
    }
}

/// One game from first click to win or loss.
///
/// Owns the board and applies player actions to it. `mines_remaining` and `flags_remaining` are
/// bookkeeping counters shown to the player; the win itself is decided from the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Engine {
    mine_layout: MineLayout,
    board: Grid<Cell>,
    mines_remaining: CellCount,
    flags_remaining: CellCount,
    uncovered_count: Saturating<CellCount>,
    state: EngineState,
    triggered_mine: Option<Coord2>,
}

impl Engine {
    pub fn new(mine_layout: MineLayout, layout: Layout) -> Result<Self> {
        let (mines, cells) = (mine_layout.mine_count(), mine_layout.total_cells());
        if mines >= cells {
            return Err(ConfigError::TooManyMines { mines, cells }.into());
        }

        let mut board = Grid::from_prototype(mine_layout.size(), Cell::sized(layout.cell_size))?;
        for (coords, cell) in board.indexed_iter_mut() {
            cell.content = mine_layout.content_at(coords);
            cell.rect = layout.rect_at(coords);
        }

        let mut engine = Self {
            mine_layout,
            board,
            mines_remaining: mines,
            flags_remaining: mines,
            uncovered_count: Saturating(0),
            state: EngineState::default(),
            triggered_mine: None,
        };
        if engine.all_mines_flagged() {
            log::debug!("Board has no mines, game won from the start");
            engine.end_game(true);
        }
        Ok(engine)
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn bomb_triggered(&self) -> bool {
        matches!(self.state, EngineState::Lost)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn mines_remaining(&self) -> CellCount {
        self.mines_remaining
    }

    pub fn flags_remaining(&self) -> CellCount {
        self.flags_remaining
    }

    pub fn uncovered_count(&self) -> CellCount {
        self.uncovered_count.0
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn cells(&self) -> &Grid<Cell> {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.board.get(coords)
    }

    /// First cell whose on-screen rectangle contains `point`.
    pub fn cell_under(&self, point: Point) -> Option<Coord2> {
        self.board
            .iter()
            .find(|cell| cell.rect.contains(point))
            .map(Cell::coords)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;
        self.check_in_progress()?;

        let cell = self.board[coords];
        if !cell.covered || cell.flagged {
            return Ok(RevealOutcome::NoChange);
        }

        self.uncover(coords);
        Ok(match cell.content {
            Content::Bomb => {
                self.triggered_mine = Some(coords);
                self.end_game(false);
                RevealOutcome::HitMine
            }
            Content::Empty => {
                let cascaded = self.flood_fill(coords);
                log::debug!("Revealed {:?}, cascaded to {} cells", coords, cascaded);
                RevealOutcome::Revealed(cascaded + 1)
            }
            Content::Count(count) => {
                log::debug!("Revealed {:?}, {} adjacent mines", coords, count);
                RevealOutcome::Revealed(1)
            }
        })
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;
        self.check_in_progress()?;

        let cell = &mut self.board[coords];
        if !cell.covered {
            return Ok(FlagOutcome::NoChange);
        }
        let is_bomb = cell.content.is_bomb();

        if cell.flagged {
            cell.flagged = false;
            self.flags_remaining += 1;
            if is_bomb {
                self.mines_remaining += 1;
            }
            return Ok(FlagOutcome::Unflagged);
        }

        if self.flags_remaining == 0 {
            log::debug!("No flags left, ignoring flag at {:?}", coords);
            return Ok(FlagOutcome::NoFlagsLeft);
        }
        cell.flagged = true;
        self.flags_remaining -= 1;
        if is_bomb {
            self.mines_remaining -= 1;
        }

        if self.all_mines_flagged() {
            self.end_game(true);
            Ok(FlagOutcome::Won)
        } else {
            Ok(FlagOutcome::Flagged)
        }
    }

    /// End-of-game pass: uncovers every mine that was not flagged and marks flags that sit on
    /// safe cells. Returns how many cells changed; running it twice changes nothing.
    pub fn disclose(&mut self) -> Result<CellCount> {
        if !self.state.is_finished() {
            return Err(GameError::NotFinished);
        }
        Ok(self.disclose_board())
    }

    fn disclose_board(&mut self) -> CellCount {
        let mut changed = 0;
        for cell in self.board.iter_mut() {
            match (cell.content.is_bomb(), cell.flagged) {
                (true, false) if cell.covered => {
                    cell.covered = false;
                    changed += 1;
                }
                (false, true) if !cell.misflagged => {
                    cell.misflagged = true;
                    changed += 1;
                }
                _ => {}
            }
        }
        let uncovered = self.board.iter().filter(|cell| !cell.covered).count();
        self.uncovered_count = Saturating(uncovered as CellCount);
        changed
    }

    /// Uncovers the connected region of empty cells around `origin` together with its numbered
    /// border. `origin` must already be uncovered. Returns the number of cells it uncovered.
    fn flood_fill(&mut self, origin: Coord2) -> CellCount {
        let mut uncovered = 0;
        let mut visited = BTreeSet::from([origin]);
        let mut to_visit: VecDeque<_> = self.board.neighbors(origin).collect();
        log::trace!(
            "Starting flood-fill from {:?}, initial neighbors: {:?}",
            origin,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop_front() {
            if !visited.insert(visit_coords) {
                continue;
            }

            let cell = self.board[visit_coords];
            if !cell.covered || cell.flagged || cell.content.is_bomb() {
                log::trace!("Skipping cell at {:?}", visit_coords);
                continue;
            }

            self.uncover(visit_coords);
            uncovered += 1;

            if cell.content == Content::Empty {
                to_visit.extend(
                    self.board
                        .neighbors(visit_coords)
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }

        uncovered
    }

    fn uncover(&mut self, coords: Coord2) {
        self.board[coords].covered = false;
        self.uncovered_count += 1;
    }

    fn all_mines_flagged(&self) -> bool {
        self.board
            .iter()
            .all(|cell| cell.flagged == cell.content.is_bomb())
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        if won {
            debug_assert_eq!(self.mines_remaining, 0);
            self.state = EngineState::Won;
            log::debug!("All mines flagged, game won");
        } else {
            self.state = EngineState::Lost;
            log::debug!("Mine triggered at {:?}, game lost", self.triggered_mine);
            self.disclose_board();
        }
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
