pub mod board;
pub mod canonical_boards;
pub mod card;
pub mod deals;
pub mod display;
pub mod error;
pub mod game;
pub mod stack;

use std::env;

use crate::display::{describe_move, print_board};
use crate::game::GameState;

/// Entry point for the `freecell_engine` binary.
///
/// Currently this:
///   - Parses a very small command-line surface:
///       * `--seed=<u64>`  → deal a reproducible pseudo-random board
///       * `--deal=<id>`   → deal a numbered layout (`ms<N>` or a
///         decimal permutation index)
///   - Deals the chosen board.
///   - Prints the board, every currently valid move, and the win /
///     stalemate status.
///
/// Example:
///   cargo run -- --deal=ms617
pub fn run() {
    // RUST_LOG controls verbosity; quiet by default.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Defaults: a fixed seed, no numbered deal.
    let mut seed: u64 = 1;
    let mut deal_id: Option<deals::DealId> = None;

    // Very small hand-rolled argument parser.
    for arg in env::args().skip(1) {
        if let Some(rest) = arg.strip_prefix("--seed=") {
            match rest.parse::<u64>() {
                Ok(v) => seed = v,
                Err(_) => eprintln!(
                    "Warning: could not parse seed from '{}'; using default {}",
                    rest, seed
                ),
            }
        } else if let Some(rest) = arg.strip_prefix("--deal=") {
            match deals::parse_deal_id(rest) {
                Ok(id) => deal_id = Some(id),
                Err(err) => eprintln!("Warning: ignoring deal id '{}': {}", rest, err),
            }
        } else {
            eprintln!(
                "Warning: unrecognized argument '{}'; supported: --seed=<u64>, --deal=<id>",
                arg
            );
        }
    }

    let game = match &deal_id {
        Some(id) => match deals::deck_for_id(id) {
            Ok(deck) => GameState::from_deck(deck),
            Err(err) => {
                eprintln!("Error: could not resolve deal: {err}");
                return;
            }
        },
        None => GameState::deal_seeded(seed),
    };

    match &deal_id {
        Some(deals::DealId::Ms(number)) => println!("Deal: ms{number}"),
        Some(deals::DealId::Index(index)) => println!("Deal index: {index}"),
        None => println!("Deck seed: {seed}"),
    }
    println!();
    print_board(&game);

    let moves = game.valid_moves();
    println!("Valid moves ({} total):", moves.len());
    for (i, &(src, dst)) in moves.iter().enumerate() {
        println!("  {:2}: {}", i + 1, describe_move(&game, src, dst));
    }
    println!();
    println!("Won: {}", game.has_won());
    println!("No valid moves: {}", game.no_valid_moves());
}
