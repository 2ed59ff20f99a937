use super::grid::{Grid, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
}

impl GameOutcome {
    pub fn message(self) -> &'static str {
        match self {
            GameOutcome::Won => "Congratulations! You've found all pairs!",
            GameOutcome::Lost => "Game over! You've reached the maximum number of tries.",
        }
    }
}

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    OneSelected(Position),
    Finished(GameOutcome),
}

/// What a click changed, so the caller knows what to render and schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored,
    /// First card of the turn is now face up.
    FirstRevealed(Position),
    /// Second card matched the first; both stay face up.
    Matched {
        first: Position,
        second: Position,
        won: bool,
    },
    /// Second card differed. Input stays blocked until the caller runs
    /// `hide_pair` and `unblock_input` after the mismatch delay.
    Mismatched {
        first: Position,
        second: Position,
        lost: bool,
    },
}

/// One game: the board, which cells are face up, and the turn counters.
///
/// All mutation goes through `click`, `hide_pair` and `unblock_input`, which
/// the UI calls from the main loop only.
#[derive(Debug)]
pub struct Session<I> {
    grid: Grid<I>,
    revealed: Vec<bool>,
    first_selection: Option<Position>,
    input_blocked: bool,
    tries: u32,
    max_tries: u32,
    pairs_found: usize,
    outcome: Option<GameOutcome>,
}

impl<I> Session<I> {
    pub fn new(grid: Grid<I>, max_tries: u32) -> Self {
        let revealed = vec![false; grid.rows() * grid.cols()];
        Session {
            grid,
            revealed,
            first_selection: None,
            input_blocked: false,
            tries: 0,
            max_tries,
            pairs_found: 0,
            outcome: None,
        }
    }

    pub fn grid(&self) -> &Grid<I> {
        &self.grid
    }

    pub fn tries(&self) -> u32 {
        self.tries
    }

    pub fn max_tries(&self) -> u32 {
        self.max_tries
    }

    pub fn lives(&self) -> u32 {
        self.max_tries.saturating_sub(self.tries)
    }

    pub fn pairs_found(&self) -> usize {
        self.pairs_found
    }

    pub fn total_pairs(&self) -> usize {
        self.grid.total_pairs()
    }

    pub fn first_selection(&self) -> Option<Position> {
        self.first_selection
    }

    pub fn is_input_blocked(&self) -> bool {
        self.input_blocked
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn turn_state(&self) -> TurnState {
        match (self.outcome, self.first_selection) {
            (Some(outcome), _) => TurnState::Finished(outcome),
            (None, Some(pos)) => TurnState::OneSelected(pos),
            (None, None) => TurnState::Idle,
        }
    }

    pub fn is_revealed(&self, pos: Position) -> bool {
        self.grid
            .index_of(pos)
            .is_some_and(|idx| self.revealed[idx])
    }

    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        if self.input_blocked || self.is_finished() {
            return ClickOutcome::Ignored;
        }
        let Some(idx) = self.grid.index_of(pos) else {
            return ClickOutcome::Ignored;
        };
        if self.revealed[idx] || self.grid.is_filler(pos) {
            return ClickOutcome::Ignored;
        }

        self.revealed[idx] = true;

        let Some(first) = self.first_selection.take() else {
            self.first_selection = Some(pos);
            return ClickOutcome::FirstRevealed(pos);
        };

        if self.grid.label(first) == self.grid.label(pos) {
            self.pairs_found += 1;
            let won = self.pairs_found == self.total_pairs();
            if won {
                self.outcome = Some(GameOutcome::Won);
            }
            tracing::debug!(?first, second = ?pos, pairs_found = self.pairs_found, "pair matched");
            ClickOutcome::Matched {
                first,
                second: pos,
                won,
            }
        } else {
            self.input_blocked = true;
            self.tries += 1;
            let lost = self.tries >= self.max_tries;
            if lost {
                self.outcome = Some(GameOutcome::Lost);
            }
            tracing::debug!(?first, second = ?pos, tries = self.tries, "pair mismatched");
            ClickOutcome::Mismatched {
                first,
                second: pos,
                lost,
            }
        }
    }

    /// Turns a mismatched pair face down again. Runs even after the game
    /// ended; it never touches the counters.
    pub fn hide_pair(&mut self, first: Position, second: Position) {
        for pos in [first, second] {
            if let Some(idx) = self.grid.index_of(pos) {
                self.revealed[idx] = false;
            }
        }
    }

    pub fn unblock_input(&mut self) {
        self.input_blocked = false;
    }
}
