use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{Error, Result};

/// Row and column of a cell.
pub type Position = (usize, usize);

/// A card face. Two cards match when their labels are equal; the image is
/// only ever displayed.
#[derive(Clone, Debug, PartialEq)]
pub struct Card<I> {
    pub label: String,
    pub image: I,
}

impl<I> Card<I> {
    pub fn new(label: impl Into<String>, image: I) -> Self {
        Card {
            label: label.into(),
            image,
        }
    }
}

/// Shuffled board of paired cards, stored row-major.
///
/// On an odd-sized board the last cell holds no card.
#[derive(Clone, Debug)]
pub struct Grid<I> {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Card<I>>>,
}

/// Rejects a card set that repeats a label.
pub fn ensure_unique_labels<I>(cards: &[Card<I>]) -> Result<()> {
    let mut seen = HashSet::with_capacity(cards.len());
    for card in cards {
        if !seen.insert(card.label.as_str()) {
            return Err(Error::DuplicateLabel(card.label.clone()));
        }
    }
    Ok(())
}

impl<I: Clone> Grid<I> {
    /// Duplicates every card, shuffles the deck with `rng` and lays it out
    /// in `rows` rows of `cols` cells.
    pub fn build<R: Rng + ?Sized>(
        cards: Vec<Card<I>>,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyGrid);
        }
        let total_cells = rows * cols;
        let expected = total_cells / 2;
        if cards.len() != expected {
            return Err(Error::CardCount {
                expected,
                actual: cards.len(),
            });
        }

        ensure_unique_labels(&cards)?;

        let mut deck: Vec<Card<I>> = Vec::with_capacity(expected * 2);
        deck.extend(cards.iter().cloned());
        deck.extend(cards);
        deck.shuffle(rng);

        let mut cells: Vec<Option<Card<I>>> = deck.into_iter().map(Some).collect();
        cells.resize_with(total_cells, || None);

        Ok(Grid { rows, cols, cells })
    }
}

impl<I> Grid<I> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn total_pairs(&self) -> usize {
        self.rows * self.cols / 2
    }

    pub fn index_of(&self, (row, col): Position) -> Option<usize> {
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    pub fn position_of(&self, index: usize) -> Position {
        (index / self.cols, index % self.cols)
    }

    pub fn card(&self, pos: Position) -> Option<&Card<I>> {
        self.index_of(pos).and_then(|idx| self.cells[idx].as_ref())
    }

    pub fn label(&self, pos: Position) -> Option<&str> {
        self.card(pos).map(|card| card.label.as_str())
    }

    pub fn is_filler(&self, pos: Position) -> bool {
        matches!(self.index_of(pos), Some(idx) if self.cells[idx].is_none())
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(|idx| self.position_of(idx))
    }

    /// Labels in row-major order, `None` for the filler cell.
    pub fn labels(&self) -> Vec<Option<&str>> {
        self.cells
            .iter()
            .map(|cell| cell.as_ref().map(|card| card.label.as_str()))
            .collect()
    }
}
