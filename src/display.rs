//! Human-readable rendering of FreeCell boards.
//!
//! This module provides functions to render a `GameState` as multi-line
//! text using the compact `Card` representation. It is built entirely on
//! the public read surface of the game (`column`, the convenience
//! iterators and `to_vec`), the same interface any view layer uses.
//!
//! The intent is to give a stable, readable CLI representation that is
//! useful for debugging and for logging sessions.

use crate::card::Card;
use crate::game::{GameState, Position};

/// Format a single optional card slot: `[AH]`, `[7C]`, or `[  ]` when
/// the slot is empty.
pub fn format_card_slot(card: Option<&Card>) -> String {
    match card {
        Some(card) => format!("[{}]", card.short_str()),
        None => "[  ]".to_string(),
    }
}

/// Render only the foundation row, top card per pile.
///
///   - Empty foundation: `[  ]`
///   - Non-empty: e.g. `[AH]`, `[7C]`, `[KD]`
///
/// Even though a foundation holds its whole run, only the *top* card is
/// shown here, matching typical FreeCell presentations.
pub fn render_foundations(game: &GameState) -> String {
    let mut s = String::from("Foundations: ");
    for foundation in game.foundations() {
        s.push_str(&format_card_slot(foundation.peek().ok()));
        s.push(' ');
    }
    s.trim_end().to_string()
}

/// Render the four cells on a single line.
pub fn render_cells(game: &GameState) -> String {
    let mut s = String::from("Cells: ");
    for cell in game.cells() {
        s.push_str(&format_card_slot(cell.peek().ok()));
        s.push(' ');
    }
    s.trim_end().to_string()
}

/// Render all cascades as a multi-line string.
///
/// Cascades are arranged in 8 vertical stacks. Each "cell" is three
/// characters wide. The first row holds the bottom (oldest) card of
/// each cascade and the columns grow downward; shorter cascades simply
/// stop early.
pub fn render_cascades(game: &GameState) -> String {
    let mut s = String::new();

    s.push_str("Cascades:\n");
    s.push_str("      ");
    for i in 0..game.cascades().count() {
        s.push_str(&format!(" C{} ", i + 1));
    }
    s.push('\n');

    let columns: Vec<Vec<Card>> = game.cascades().map(|c| c.to_vec()).collect();
    let max_height = columns.iter().map(|c| c.len()).max().unwrap_or(0);

    if max_height == 0 {
        // No cards in any cascade; just return the header.
        return s;
    }

    // Print from the bottom card (row 0) downward to the deepest top.
    for row in 0..max_height {
        s.push_str("      "); // left padding under the header label

        for column in &columns {
            match column.get(row) {
                Some(card) => s.push_str(&format!("{:>3} ", card.short_str())),
                None => s.push_str("    "),
            }
        }

        s.push('\n');
    }

    s
}

/// Render a full board (foundations, cells, and cascades) as a
/// multi-line string.
pub fn render_board(game: &GameState) -> String {
    let mut s = String::new();

    s.push_str(&render_foundations(game));
    s.push('\n');
    s.push_str(&render_cells(game));
    s.push('\n');
    s.push('\n');
    s.push_str(&render_cascades(game));

    s
}

/// Print a board to stdout using `render_board`.
pub fn print_board(game: &GameState) {
    println!("{}", render_board(game));
}

/// Render a move as a human-readable string using details from the
/// given board (which card would travel). Column numbers are shown
/// 1-based, as a player would count them.
pub fn describe_move(game: &GameState, src: Position, dst: Position) -> String {
    let (src_placement, src_index) = src;
    let (dst_placement, dst_index) = dst;

    let card = game
        .column(src_placement, src_index)
        .ok()
        .and_then(|col| col.peek().ok().copied());

    match card {
        Some(card) => format!(
            "{} {}: {} -> {} {}",
            src_placement,
            src_index + 1,
            card.short_str(),
            dst_placement,
            dst_index + 1
        ),
        None => format!(
            "{} {} (empty) -> {} {}",
            src_placement,
            src_index + 1,
            dst_placement,
            dst_index + 1
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Placement::{Cascade, Cell, Foundation};
    use crate::canonical_boards::{midgame_board, won_board};
    use crate::game::GameState;

    /// Compute the internal "grid" the program thinks it is displaying
    /// for the cascades, *without* using `render_cascades`.
    ///
    /// The result is a matrix of strings: grid[row][col] = "" or "AH",
    /// etc. Rows run bottom-to-top card order, matching the rendered
    /// representation.
    fn expected_cascade_grid(game: &GameState) -> Vec<Vec<String>> {
        let columns: Vec<Vec<_>> = game.cascades().map(|c| c.to_vec()).collect();
        let max_height = columns.iter().map(|c| c.len()).max().unwrap_or(0);

        let mut grid = vec![vec![String::new(); columns.len()]; max_height];
        for (col_idx, column) in columns.iter().enumerate() {
            for (row, card) in column.iter().enumerate() {
                grid[row][col_idx] = card.short_str();
            }
        }
        grid
    }

    /// Parse the string produced by `render_cascades` back into a grid
    /// of per-cell strings, to compare with the expected grid derived
    /// from the board.
    fn parse_rendered_cascade_grid(rendered: &str, num_cols: usize) -> Vec<Vec<String>> {
        let lines: Vec<&str> = rendered.lines().collect();
        if lines.len() <= 2 {
            // Only header present.
            return Vec::new();
        }
        // Lines after "Cascades:" and the header row.
        let body = &lines[2..];
        let mut grid = vec![vec![String::new(); num_cols]; body.len()];

        let base_offset = 6; // "      " at line start
        for (row_idx, line) in body.iter().enumerate() {
            for col_idx in 0..num_cols {
                let start = base_offset + 4 * col_idx;
                if start >= line.len() {
                    continue;
                }
                let end = (start + 4).min(line.len());
                grid[row_idx][col_idx] = line[start..end].trim().to_string();
            }
        }
        grid
    }

    #[test]
    fn rendered_cascades_match_the_internal_grid() {
        let game = GameState::deal_seeded(123456789);

        let rendered = render_cascades(&game);
        let expected = expected_cascade_grid(&game);
        let parsed = parse_rendered_cascade_grid(&rendered, 8);
        assert_eq!(parsed, expected);
    }

    #[test]
    fn foundations_and_cells_show_top_cards() {
        let game = won_board();
        let line = render_foundations(&game);
        for slot in ["[KS]", "[KC]", "[KH]", "[KD]"] {
            assert!(line.contains(slot), "missing {slot} in {line:?}");
        }

        let cells = render_cells(&midgame_board());
        assert_eq!(cells, "Cells: [  ] [  ] [  ] [  ]");
    }

    #[test]
    fn empty_board_sections_render_placeholders() {
        let game = won_board();
        let rendered = render_cascades(&game);
        // Won board has no cascade cards; header only.
        assert!(rendered.starts_with("Cascades:\n"));
        assert_eq!(rendered.lines().count(), 2);
    }

    #[test]
    fn describe_move_names_the_traveling_card() {
        let game = midgame_board();
        // Ace of Clubs tops cascade 1 (shown 1-based as cascade 2).
        let described = describe_move(&game, (Cascade, 1), (Foundation, 0));
        assert_eq!(described, "cascade 2: AC -> foundation 1");

        let empty = describe_move(&game, (Cell, 0), (Cascade, 0));
        assert_eq!(empty, "cell 1 (empty) -> cascade 1");
    }
}
