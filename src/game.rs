//! Game-level state: the 16-column FreeCell board and its transitions.
//
//! This module defines `GameState`, which owns the 8 cascades, 4 cells
//! and 4 foundations as bounded stacks and implements every rule of the
//! game: placement validation, move legality, move execution, win
//! detection and stalemate detection. All container work is delegated
//! to `BoundedStack`; all geometry comes from the `board` layout table.

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg64;
use tracing::debug;

use crate::board::{self, COLUMN_COUNT, Placement, all_positions};
use crate::card::{CARDS_PER_DECK, Card, RANK_ACE, RANK_KING, standard_deck};
use crate::error::GameError;
use crate::stack::BoundedStack;

/// A board position as the external interface names it.
pub type Position = (Placement, usize);

/// One fresh column per flat slot, with the capacity the layout table
/// assigns to its placement kind.
pub(crate) fn empty_columns() -> [BoundedStack<Card>; COLUMN_COUNT] {
    std::array::from_fn(|flat| {
        let (placement, _) = board::position_at(flat);
        BoundedStack::new(placement.capacity())
            .expect("layout capacities are positive")
    })
}

/// The complete state of one FreeCell session.
///
/// Created once (dealt or adopted from an explicit layout) and mutated
/// in place by successful moves. Columns are never resized or replaced,
/// only pushed to and popped from. A single logical thread of control
/// is assumed; embedders serialize access per instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    cols: [BoundedStack<Card>; COLUMN_COUNT],
}

impl GameState {
    /// Deal a new game from a process-level uniform random source.
    pub fn new() -> Self {
        Self::deal_with(&mut rand::thread_rng())
    }

    /// Deal a new game using the given shuffle source.
    ///
    /// The standard deck is permuted uniformly by `rng`, then dealt
    /// round-robin: shuffled card `i` lands on cascade `i % 8`, so four
    /// cascades receive 7 cards and four receive 6. Cells and
    /// foundations start empty.
    pub fn deal_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = standard_deck();
        deck.shuffle(rng);
        Self::from_deck(deck)
    }

    /// Deal a fully reproducible game from a 64-bit seed.
    pub fn deal_seeded(seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        Self::deal_with(&mut rng)
    }

    /// Deal an explicit deck permutation.
    ///
    /// This is the replay path: the same deck always produces the same
    /// board, card `i` going to cascade `i % 8`.
    pub fn from_deck(deck: [Card; CARDS_PER_DECK as usize]) -> Self {
        let mut cols = empty_columns();
        let cascades = Placement::Cascade.count();
        for (i, card) in deck.into_iter().enumerate() {
            cols[board::flat_index(Placement::Cascade, i % cascades)]
                .push(card)
                .expect("a cascade receives at most seven dealt cards");
        }
        debug!("dealt {CARDS_PER_DECK} cards round-robin into {cascades} cascades");
        GameState { cols }
    }

    /// Adopt an explicit 16-column board.
    ///
    /// Columns are given in flat order: cascades 0..8, cells 8..12,
    /// foundations 12..16. The board is validated eagerly: every column
    /// capacity must match the layout table, the union of all columns
    /// must be exactly the 52-card deck, and every foundation read
    /// bottom-to-top must be an ascending single-suit run starting at
    /// the Ace.
    pub fn from_columns(
        cols: [BoundedStack<Card>; COLUMN_COUNT],
    ) -> Result<Self, GameError> {
        validate_columns(&cols)?;
        debug!("adopted explicit board layout");
        Ok(GameState { cols })
    }

    /// Borrow the live column at a board position, for rendering.
    ///
    /// Move legality is enforced only by `perform_move`; mutating the
    /// board around it is not a supported interface, so only a shared
    /// borrow is handed out.
    pub fn column(
        &self,
        placement: Placement,
        index: usize,
    ) -> Result<&BoundedStack<Card>, GameError> {
        if !board::is_valid_placement(placement, index) {
            return Err(GameError::InvalidPlacement { placement, index });
        }
        Ok(&self.cols[board::flat_index(placement, index)])
    }

    /// The 8 cascades in index order.
    pub fn cascades(&self) -> impl Iterator<Item = &BoundedStack<Card>> {
        self.kind(Placement::Cascade)
    }

    /// The 4 cells in index order.
    pub fn cells(&self) -> impl Iterator<Item = &BoundedStack<Card>> {
        self.kind(Placement::Cell)
    }

    /// The 4 foundations in index order.
    pub fn foundations(&self) -> impl Iterator<Item = &BoundedStack<Card>> {
        self.kind(Placement::Foundation)
    }

    fn kind(&self, placement: Placement) -> impl Iterator<Item = &BoundedStack<Card>> {
        (0..placement.count()).map(move |i| &self.cols[board::flat_index(placement, i)])
    }

    /// True iff the game is won: every foundation is non-empty with a
    /// King on top. Given the ascending-run invariant, a King on top
    /// implies the full run Ace..King underneath.
    pub fn has_won(&self) -> bool {
        self.foundations()
            .all(|f| matches!(f.peek(), Ok(card) if card.rank_number() == RANK_KING))
    }

    /// Whether moving the top card of the source column onto the
    /// destination column is allowed by the game rules.
    ///
    /// Fails with `InvalidPlacement` when either position is out of
    /// range and with `EmptySource` when the source has no card; a rule
    /// violation on a structurally sound request is `Ok(false)`, not an
    /// error. Only the single top card of the source is considered.
    pub fn is_valid_move(
        &self,
        src_placement: Placement,
        src_index: usize,
        dst_placement: Placement,
        dst_index: usize,
    ) -> Result<bool, GameError> {
        for (placement, index) in [(src_placement, src_index), (dst_placement, dst_index)] {
            if !board::is_valid_placement(placement, index) {
                return Err(GameError::InvalidPlacement { placement, index });
            }
        }

        let src = &self.cols[board::flat_index(src_placement, src_index)];
        let moving = match src.peek() {
            Ok(card) => *card,
            Err(_) => return Err(GameError::EmptySource),
        };

        let legal = match dst_placement {
            Placement::Cell => {
                self.cols[board::flat_index(Placement::Cell, dst_index)].is_empty()
            }
            Placement::Foundation => {
                src_placement != Placement::Foundation
                    && self.is_valid_build(moving, dst_index)
            }
            Placement::Cascade => self.is_valid_stack(moving, dst_index),
        };
        Ok(legal)
    }

    /// True iff `card` continues the run on foundation `index`: an Ace
    /// on an empty foundation, or the next rank of the same suit.
    fn is_valid_build(&self, card: Card, index: usize) -> bool {
        let dst = &self.cols[board::flat_index(Placement::Foundation, index)];
        match dst.peek() {
            Err(_) => card.rank_number() == RANK_ACE,
            Ok(top) => {
                top.suit() == card.suit() && card.rank_number() == top.rank_number() + 1
            }
        }
    }

    /// True iff `card` may be stacked on cascade `index`: any card on an
    /// empty cascade, otherwise opposite color and exactly one rank
    /// below the top.
    fn is_valid_stack(&self, card: Card, index: usize) -> bool {
        let dst = &self.cols[board::flat_index(Placement::Cascade, index)];
        match dst.peek() {
            Err(_) => true,
            Ok(top) => {
                top.is_red() != card.is_red()
                    && top.rank_number() == card.rank_number() + 1
            }
        }
    }

    /// Move the top card of the source column onto the destination.
    ///
    /// Placements are validated (`InvalidPlacement`), an empty source is
    /// `EmptySource`, and a rule violation is `InvalidMove`. On success
    /// the card changes columns atomically. Legality guarantees room at
    /// the destination; a capacity failure here would be a programming
    /// error, not an expected runtime state.
    pub fn perform_move(
        &mut self,
        src_placement: Placement,
        src_index: usize,
        dst_placement: Placement,
        dst_index: usize,
    ) -> Result<(), GameError> {
        if !self.is_valid_move(src_placement, src_index, dst_placement, dst_index)? {
            return Err(GameError::InvalidMove);
        }

        let src = board::flat_index(src_placement, src_index);
        let dst = board::flat_index(dst_placement, dst_index);
        let card = *self.cols[src].peek()?;
        self.cols[dst].push(card)?;
        self.cols[src].pop()?;

        debug!(
            card = %card,
            src = %src_placement,
            src_index,
            dst = %dst_placement,
            dst_index,
            "performed move"
        );
        Ok(())
    }

    /// Every legal `(source, destination)` pair in the current state, in
    /// the deterministic scan order of `board::all_positions`.
    pub fn valid_moves(&self) -> Vec<(Position, Position)> {
        let positions = all_positions();
        let mut moves = Vec::new();
        for &(p, i) in positions.iter() {
            if self.cols[board::flat_index(p, i)].is_empty() {
                continue;
            }
            for &(q, j) in positions.iter() {
                if (p, i) == (q, j) {
                    continue;
                }
                if matches!(self.is_valid_move(p, i, q, j), Ok(true)) {
                    moves.push(((p, i), (q, j)));
                }
            }
        }
        moves
    }

    /// True iff no ordered pair of distinct positions yields a valid
    /// move. Empty sources are skipped without consulting the rules.
    pub fn no_valid_moves(&self) -> bool {
        let positions = all_positions();
        for &(p, i) in positions.iter() {
            if self.cols[board::flat_index(p, i)].is_empty() {
                continue;
            }
            for &(q, j) in positions.iter() {
                if (p, i) == (q, j) {
                    continue;
                }
                if matches!(self.is_valid_move(p, i, q, j), Ok(true)) {
                    return false;
                }
            }
        }
        true
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Eager validation for the explicit-board constructor.
fn validate_columns(
    cols: &[BoundedStack<Card>; COLUMN_COUNT],
) -> Result<(), GameError> {
    for (flat, col) in cols.iter().enumerate() {
        let (placement, _) = board::position_at(flat);
        if col.capacity() != placement.capacity() {
            return Err(GameError::InvalidBoard(
                "column capacity does not match the board layout",
            ));
        }
    }

    let mut seen = [false; CARDS_PER_DECK as usize];
    let mut total = 0usize;
    for col in cols.iter() {
        for card in col.iter() {
            let idx = card.index() as usize;
            if idx >= seen.len() || seen[idx] {
                return Err(GameError::InvalidBoard(
                    "board does not hold 52 distinct cards",
                ));
            }
            seen[idx] = true;
            total += 1;
        }
    }
    if total != CARDS_PER_DECK as usize {
        return Err(GameError::InvalidBoard(
            "board does not hold 52 distinct cards",
        ));
    }

    for index in 0..Placement::Foundation.count() {
        let col = &cols[board::flat_index(Placement::Foundation, index)];
        let mut expected = RANK_ACE;
        let mut suit = None;
        for card in col.iter() {
            if card.rank_number() != expected {
                return Err(GameError::InvalidBoard(
                    "foundation is not an ascending run from the ace",
                ));
            }
            match suit {
                None => suit = Some(card.suit()),
                Some(s) if s != card.suit() => {
                    return Err(GameError::InvalidBoard("foundation mixes suits"));
                }
                Some(_) => {}
            }
            expected += 1;
        }
    }

    Ok(())
}
