//! Canonical fixed boards used in tests and demos.
//!
//! Goals:
//!   * Provide a board that is **deadlocked by local conditions alone**,
//!     without relying on any search: every cell occupied, no exposed
//!     Ace, no cross-cascade stacking possible.
//!   * Provide a won board (four complete foundation runs) and a fixed
//!     mid-game board with known column tops for the rule tests.
//!
//! Every board here goes through `GameState::from_columns`, so the
//! fixtures also exercise eager board validation.

use crate::board::{self, COLUMN_COUNT, Placement};
use crate::card::{Card, RANK_ACE, Rank, Suit};
use crate::game::{self, GameState};
use crate::stack::BoundedStack;

/// Push `(suit, rank)` pairs bottom-to-top onto a fixture column.
fn push_all(col: &mut BoundedStack<Card>, cards: &[(Suit, Rank)]) {
    for &(suit, rank) in cards {
        col.push(Card::new(suit, rank))
            .expect("fixture columns stay within their capacity");
    }
}

fn cascade_slot(cols: &mut [BoundedStack<Card>; COLUMN_COUNT], index: usize) -> &mut BoundedStack<Card> {
    &mut cols[board::flat_index(Placement::Cascade, index)]
}

fn cell_slot(cols: &mut [BoundedStack<Card>; COLUMN_COUNT], index: usize) -> &mut BoundedStack<Card> {
    &mut cols[board::flat_index(Placement::Cell, index)]
}

fn foundation_slot(cols: &mut [BoundedStack<Card>; COLUMN_COUNT], index: usize) -> &mut BoundedStack<Card> {
    &mut cols[board::flat_index(Placement::Foundation, index)]
}

/// Columns of the fixed mid-game board.
///
/// All 52 cards sit in the cascades; cells and foundations are empty.
/// Known tops used by the rule tests: the Ace of Clubs on cascade 1,
/// the Two of Clubs on cascade 3, the King of Clubs on cascade 6 and
/// the Queen of Hearts on cascade 7.
pub(crate) fn midgame_columns() -> [BoundedStack<Card>; COLUMN_COUNT] {
    use Rank::*;
    use Suit::*;

    let mut cols = game::empty_columns();
    let cascades: [&[(Suit, Rank)]; 8] = [
        &[
            (Spades, Jack),
            (Spades, Three),
            (Spades, Six),
            (Hearts, Eight),
            (Clubs, Five),
            (Hearts, Nine),
            (Spades, Two),
        ],
        &[
            (Clubs, Queen),
            (Clubs, Nine),
            (Spades, Nine),
            (Hearts, Jack),
            (Diamonds, Ten),
            (Clubs, Ten),
            (Clubs, Ace),
        ],
        &[
            (Diamonds, Eight),
            (Hearts, Four),
            (Clubs, Six),
            (Spades, Ace),
            (Diamonds, Seven),
            (Hearts, Two),
            (Diamonds, Five),
        ],
        &[
            (Diamonds, Two),
            (Diamonds, King),
            (Diamonds, Ace),
            (Hearts, Ace),
            (Diamonds, Jack),
            (Spades, Five),
            (Clubs, Two),
        ],
        &[
            (Diamonds, Four),
            (Spades, Seven),
            (Diamonds, Six),
            (Diamonds, Three),
            (Hearts, Three),
            (Spades, Ten),
        ],
        &[
            (Hearts, Six),
            (Clubs, Eight),
            (Spades, Four),
            (Hearts, Five),
            (Clubs, Jack),
            (Spades, Queen),
        ],
        &[
            (Hearts, Seven),
            (Diamonds, Queen),
            (Clubs, Three),
            (Spades, Eight),
            (Clubs, Four),
            (Clubs, King),
        ],
        &[
            (Diamonds, Nine),
            (Hearts, King),
            (Clubs, Seven),
            (Spades, King),
            (Hearts, Ten),
            (Hearts, Queen),
        ],
    ];
    for (i, cards) in cascades.iter().enumerate() {
        push_all(cascade_slot(&mut cols, i), cards);
    }
    cols
}

/// The fixed mid-game board.
pub fn midgame_board() -> GameState {
    GameState::from_columns(midgame_columns())
        .expect("midgame fixture is a valid board")
}

/// Columns of the deadlocked board; see [`deadlocked_board`].
pub(crate) fn deadlocked_columns() -> [BoundedStack<Card>; COLUMN_COUNT] {
    use Rank::*;
    use Suit::*;

    let mut cols = game::empty_columns();
    let cascades: [&[(Suit, Rank)]; 8] = [
        &[
            (Spades, Jack),
            (Spades, Three),
            (Spades, Six),
            (Hearts, Eight),
            (Clubs, Five),
        ],
        &[
            (Clubs, Queen),
            (Clubs, Ten),
            (Spades, Nine),
            (Hearts, Jack),
            (Diamonds, Ten),
            (Clubs, Ace),
            (Clubs, Nine),
        ],
        &[
            (Diamonds, Eight),
            (Hearts, Four),
            (Clubs, Six),
            (Spades, Ace),
            (Diamonds, Seven),
            (Hearts, Two),
            (Diamonds, Five),
        ],
        &[
            (Diamonds, Two),
            (Diamonds, King),
            (Diamonds, Ace),
            (Hearts, Ace),
            (Diamonds, Jack),
            (Spades, Five),
            (Clubs, Two),
        ],
        &[
            (Diamonds, Four),
            (Spades, Ten),
            (Diamonds, Six),
            (Diamonds, Three),
            (Hearts, Three),
            (Spades, Seven),
        ],
        &[
            (Hearts, Six),
            (Clubs, Eight),
            (Spades, Four),
            (Hearts, Five),
            (Clubs, Jack),
            (Spades, Queen),
        ],
        &[
            (Hearts, Seven),
            (Diamonds, Queen),
            (Clubs, Three),
            (Spades, Eight),
            (Clubs, Four),
            (Clubs, King),
        ],
        &[
            (Diamonds, Nine),
            (Hearts, Queen),
            (Hearts, Ten),
            (Spades, King),
        ],
    ];
    for (i, cards) in cascades.iter().enumerate() {
        push_all(cascade_slot(&mut cols, i), cards);
    }

    let cells = [
        (Spades, Two),
        (Hearts, Nine),
        (Clubs, Seven),
        (Hearts, King),
    ];
    for (i, &(suit, rank)) in cells.iter().enumerate() {
        push_all(cell_slot(&mut cols, i), &[(suit, rank)]);
    }

    cols
}

/// A full-deck board with no valid move at all.
///
/// The stalemate is certified by local conditions rather than a search:
///   1. every cell is occupied,
///   2. no exposed card (cascade top or cell) is an Ace, and the
///      foundations are empty,
///   3. no cascade is empty,
///   4. no exposed card is one rank below a cascade top of the opposite
///      color.
///
/// Under the rules, those conditions leave no legal source/destination
/// pair, independent of any play strategy.
pub fn deadlocked_board() -> GameState {
    GameState::from_columns(deadlocked_columns())
        .expect("deadlocked fixture is a valid board")
}

/// Columns of the won board: four complete Ace..King runs.
pub(crate) fn won_columns() -> [BoundedStack<Card>; COLUMN_COUNT] {
    let mut cols = game::empty_columns();
    for (i, &suit) in Suit::ALL.iter().enumerate() {
        let foundation = foundation_slot(&mut cols, i);
        for &rank in Rank::ALL.iter() {
            foundation
                .push(Card::new(suit, rank))
                .expect("a foundation holds a full suit run");
        }
    }
    cols
}

/// A board in the won state: every foundation runs Ace..King.
pub fn won_board() -> GameState {
    GameState::from_columns(won_columns()).expect("won fixture is a valid board")
}

/// Columns of a board with one empty cascade; see
/// [`empty_cascade_board`].
pub(crate) fn empty_cascade_columns() -> [BoundedStack<Card>; COLUMN_COUNT] {
    use Rank::*;
    use Suit::*;

    let mut cols = game::empty_columns();
    let cascades: [&[(Suit, Rank)]; 7] = [
        &[
            (Spades, Jack),
            (Spades, Three),
            (Spades, Six),
            (Hearts, Eight),
            (Clubs, Five),
            (Hearts, Nine),
            (Spades, Nine),
        ],
        &[
            (Clubs, Queen),
            (Clubs, Nine),
            (Spades, Two),
            (Hearts, Jack),
            (Diamonds, Ten),
            (Clubs, Ten),
            (Diamonds, Nine),
        ],
        &[
            (Diamonds, Eight),
            (Hearts, Four),
            (Clubs, Six),
            (Spades, Ace),
            (Diamonds, Seven),
            (Hearts, Two),
            (Diamonds, Five),
        ],
        &[
            (Diamonds, Two),
            (Diamonds, King),
            (Diamonds, Ace),
            (Hearts, Ace),
            (Diamonds, Jack),
            (Spades, Five),
            (Clubs, Two),
        ],
        &[
            (Diamonds, Four),
            (Spades, Seven),
            (Diamonds, Six),
            (Diamonds, Three),
            (Hearts, Three),
            (Spades, Ten),
        ],
        &[
            (Hearts, Six),
            (Clubs, Eight),
            (Spades, Four),
            (Hearts, Five),
            (Clubs, Jack),
            (Spades, Queen),
        ],
        &[
            (Hearts, Seven),
            (Diamonds, Queen),
            (Clubs, Three),
            (Spades, Eight),
            (Clubs, Four),
            (Clubs, King),
            (Hearts, Queen),
        ],
    ];
    for (i, cards) in cascades.iter().enumerate() {
        push_all(cascade_slot(&mut cols, i), cards);
    }
    // Cascade 7 stays empty.

    let cells = [
        (Hearts, Ten),
        (Spades, King),
        (Clubs, Seven),
        (Hearts, King),
    ];
    for (i, &(suit, rank)) in cells.iter().enumerate() {
        push_all(cell_slot(&mut cols, i), &[(suit, rank)]);
    }

    push_all(foundation_slot(&mut cols, 0), &[(Clubs, Ace)]);

    cols
}

/// A full-deck board whose last cascade is empty, with the Ace of Clubs
/// already built on foundation 0.
pub fn empty_cascade_board() -> GameState {
    GameState::from_columns(empty_cascade_columns())
        .expect("empty-cascade fixture is a valid board")
}

/// Purely local check of the deadlock conditions for a given board.
///
/// This encodes the conditions used to build `deadlocked_board` and
/// serves as both documentation and a regression test for that
/// constructor: a board satisfying them has no valid move.
pub fn is_deadlocked_by_local_conditions(game: &GameState) -> bool {
    // 1: every cell occupied, so nothing can move to a cell.
    if game.cells().any(|cell| cell.is_empty()) {
        return false;
    }

    // 2: foundations empty, so only an Ace could start a build...
    if game.foundations().any(|f| !f.is_empty()) {
        return false;
    }

    let mut exposed: Vec<Card> = Vec::new();
    for col in game.cascades().chain(game.cells()) {
        if let Ok(card) = col.peek() {
            exposed.push(*card);
        }
    }

    // ...and no exposed card is an Ace.
    if exposed.iter().any(|c| c.rank_number() == RANK_ACE) {
        return false;
    }

    // 3: no cascade empty, so nothing can move to an empty cascade.
    if game.cascades().any(|cascade| cascade.is_empty()) {
        return false;
    }

    // 4: no exposed card stacks on any cascade top.
    let tops: Vec<Card> = game
        .cascades()
        .filter_map(|c| c.peek().ok().copied())
        .collect();
    for &card in &exposed {
        for &top in &tops {
            if card != top
                && top.is_red() != card.is_red()
                && top.rank_number() == card.rank_number() + 1
            {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Placement::{Cascade, Foundation};

    #[test]
    fn fixtures_all_pass_eager_board_validation() {
        // The constructors panic if validation fails, so building each
        // board is itself the assertion.
        let _ = midgame_board();
        let _ = deadlocked_board();
        let _ = won_board();
        let _ = empty_cascade_board();
    }

    #[test]
    fn midgame_board_has_the_documented_tops() {
        let game = midgame_board();
        let top = |i: usize| *game.column(Cascade, i).unwrap().peek().unwrap();
        assert_eq!(top(1), Card::new(Suit::Clubs, Rank::Ace));
        assert_eq!(top(3), Card::new(Suit::Clubs, Rank::Two));
        assert_eq!(top(6), Card::new(Suit::Clubs, Rank::King));
        assert_eq!(top(7), Card::new(Suit::Hearts, Rank::Queen));
        assert!(!game.has_won());
    }

    #[test]
    fn deadlocked_board_satisfies_local_conditions() {
        let game = deadlocked_board();
        assert!(is_deadlocked_by_local_conditions(&game));
        assert!(game.no_valid_moves());
    }

    #[test]
    fn exposing_an_ace_breaks_the_deadlock() {
        // Restack cascade 1 so the buried Ace of Clubs becomes the top.
        let mut cols = deadlocked_columns();
        let slot = &mut cols[1];
        let nine_clubs = slot.pop().unwrap();
        let ace_clubs = slot.pop().unwrap();
        assert_eq!(ace_clubs, Card::new(Suit::Clubs, Rank::Ace));
        slot.push(nine_clubs).unwrap();
        slot.push(ace_clubs).unwrap();

        let game = GameState::from_columns(cols).unwrap();
        assert!(!is_deadlocked_by_local_conditions(&game));
        assert!(!game.no_valid_moves());
    }

    #[test]
    fn won_board_is_won_and_fully_built() {
        let game = won_board();
        assert!(game.has_won());
        for (i, &suit) in Suit::ALL.iter().enumerate() {
            let foundation = game.column(Foundation, i).unwrap();
            assert_eq!(foundation.len(), 13);
            assert_eq!(
                *foundation.peek().unwrap(),
                Card::new(suit, Rank::King)
            );
        }
        assert!(game.cascades().all(|c| c.is_empty()));
        assert!(game.cells().all(|c| c.is_empty()));
    }

    #[test]
    fn a_won_board_is_not_deadlocked_by_local_conditions() {
        assert!(!is_deadlocked_by_local_conditions(&won_board()));
    }
}
