//! Deterministic numbered deals.
//!
//! Two id schemes are supported, both resolving to an exact 52-card
//! dealing order that `GameState::from_deck` replays:
//!
//!   * `ms<N>`: the classic FreeCell deal numbering. Deal #1 through
//!     #32000 match the historic layouts; any positive 32-bit number
//!     deals.
//!   * a plain decimal integer: the canonical permutation index of a
//!     deck in `[0, 52!)`, so every possible deal has exactly one id
//!     and round-trips losslessly.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::card::{CARDS_PER_DECK, Card, Rank, Suit, standard_deck};
use crate::error::DealError;

/// Local convenience: our deck length as `usize`.
const DECK_LEN: usize = CARDS_PER_DECK as usize;

/// A parsed deal identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DealId {
    /// Classic numbered deal, `ms<N>`.
    Ms(u32),
    /// Canonical permutation index in `[0, 52!)`.
    Index(BigUint),
}

// --- Classic numbered deals ---

/// The historic encoding the numbering is defined against: value `v` is
/// rank `v / 4` (Ace..King) of suit `v % 4` with suits ordered Clubs,
/// Diamonds, Hearts, Spades.
fn ms_card(value: u8) -> Card {
    let suit = match value % 4 {
        0 => Suit::Clubs,
        1 => Suit::Diamonds,
        2 => Suit::Hearts,
        _ => Suit::Spades,
    };
    Card::new(suit, Rank::from_u8(value / 4))
}

/// The linear congruential generator the numbering is built on:
/// `state = state * 214013 + 2531011 (mod 2^31)`, drawing the middle
/// 15 bits per step.
struct MsRng {
    state: u64,
}

impl MsRng {
    fn new(seed: u32) -> Self {
        MsRng { state: seed as u64 }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(214013)
            .wrapping_add(2531011)
            & 0x7fff_ffff;
        (self.state >> 16) & 0x7fff
    }
}

/// Produce the deck of the classic numbered deal `number`, in dealing
/// order (card `i` goes to cascade `i % 8`).
///
/// The shuffle repeatedly swap-removes a random card from the ordered
/// 52-card pool. Deal #1 produces the well-known layout whose first
/// dealt row is `JD 2D 9H JC 5D 7H 7C 5H`.
pub fn ms_deal(number: u32) -> Result<[Card; DECK_LEN], DealError> {
    if number == 0 {
        return Err(DealError::MsNumberOutOfRange);
    }

    let mut rng = MsRng::new(number);
    let mut pool: [u8; DECK_LEN] = std::array::from_fn(|i| i as u8);
    let mut left = DECK_LEN;
    let mut deck = [Card(0); DECK_LEN];

    for slot in deck.iter_mut() {
        let pick = (rng.next() as usize) % left;
        *slot = ms_card(pool[pick]);
        left -= 1;
        pool[pick] = pool[left];
    }

    Ok(deck)
}

// --- Canonical permutation indices ---

fn factorial(n: usize) -> BigUint {
    let mut f = BigUint::one();
    for k in 2..=n {
        f *= k as u64;
    }
    f
}

/// The canonical index of a deck: its rank among all 52-card
/// permutations ordered by card index, in `[0, 52!)`.
///
/// Index 0 is the sorted standard deck. The inverse is
/// [`deck_for_index`].
pub fn deal_index(deck: &[Card; DECK_LEN]) -> BigUint {
    let mut index = BigUint::zero();
    for i in 0..DECK_LEN {
        let mut smaller_after = 0u64;
        for j in (i + 1)..DECK_LEN {
            if deck[j].index() < deck[i].index() {
                smaller_after += 1;
            }
        }
        index = index * (DECK_LEN - i) as u64 + smaller_after;
    }
    index
}

/// Reconstruct the deck with the given canonical index.
///
/// Fails with `IndexOutOfRange` for indices at or beyond 52!.
pub fn deck_for_index(index: &BigUint) -> Result<[Card; DECK_LEN], DealError> {
    if *index >= factorial(DECK_LEN) {
        return Err(DealError::IndexOutOfRange);
    }

    let mut remaining: Vec<Card> = standard_deck().to_vec();
    let mut deck = [Card(0); DECK_LEN];
    let mut rem = index.clone();
    let mut fact = factorial(DECK_LEN - 1);

    for (i, slot) in deck.iter_mut().enumerate() {
        let digit = &rem / &fact;
        rem = &rem % &fact;
        let pick = digit
            .to_usize()
            .expect("a permutation digit is below the deck length");
        *slot = remaining.remove(pick);

        let positions_left = DECK_LEN - 1 - i;
        if positions_left > 0 {
            fact /= positions_left as u64;
        }
    }

    Ok(deck)
}

// --- Deal id parsing ---

/// Parse a deal id: `ms<N>` or a decimal permutation index.
///
/// Whitespace and the separators `# - _ . ,` are ignored, so inputs
/// like `"ms 11,982"` work.
pub fn parse_deal_id(s: &str) -> Result<DealId, DealError> {
    let cleaned: String = s
        .chars()
        .filter(|ch| !ch.is_whitespace() && !matches!(ch, '#' | '-' | '_' | '.' | ','))
        .map(|ch| ch.to_ascii_lowercase())
        .collect();

    if cleaned.is_empty() {
        return Err(DealError::InvalidId {
            id: s.to_string(),
            reason: "empty id",
        });
    }

    if let Some(rest) = cleaned.strip_prefix("ms") {
        if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit()) {
            return Err(DealError::InvalidId {
                id: s.to_string(),
                reason: "ms ids take a decimal number",
            });
        }
        let number: u32 = rest.parse().map_err(|_| DealError::InvalidId {
            id: s.to_string(),
            reason: "ms number does not fit in 32 bits",
        })?;
        if number == 0 {
            return Err(DealError::MsNumberOutOfRange);
        }
        return Ok(DealId::Ms(number));
    }

    if !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Err(DealError::InvalidId {
            id: s.to_string(),
            reason: "expected ms<N> or a decimal index",
        });
    }
    let index = BigUint::parse_bytes(cleaned.as_bytes(), 10).ok_or(DealError::InvalidId {
        id: s.to_string(),
        reason: "not a decimal number",
    })?;
    Ok(DealId::Index(index))
}

/// Resolve a parsed id to its dealing order.
pub fn deck_for_id(id: &DealId) -> Result<[Card; DECK_LEN], DealError> {
    match id {
        DealId::Ms(number) => ms_deal(*number),
        DealId::Index(index) => deck_for_index(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_is_permutation(deck: &[Card; DECK_LEN]) {
        let mut seen = [false; DECK_LEN];
        for &c in deck.iter() {
            let idx = c.index() as usize;
            assert!(idx < DECK_LEN, "card index out of range: {idx}");
            assert!(!seen[idx], "duplicate card {} (index {idx})", c.short_str());
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&b| b));
    }

    #[test]
    fn ms_deal_rejects_zero() {
        assert_eq!(ms_deal(0).unwrap_err(), DealError::MsNumberOutOfRange);
    }

    #[test]
    fn ms_deal_one_matches_the_historic_layout() {
        use Rank::*;
        use Suit::*;

        let deck = ms_deal(1).unwrap();
        // The first dealt row of deal #1: one card at the bottom of
        // each cascade, left to right.
        let first_row = [
            Card::new(Diamonds, Jack),
            Card::new(Diamonds, Two),
            Card::new(Hearts, Nine),
            Card::new(Clubs, Jack),
            Card::new(Diamonds, Five),
            Card::new(Hearts, Seven),
            Card::new(Clubs, Seven),
            Card::new(Hearts, Five),
        ];
        assert_eq!(&deck[..8], &first_row);
    }

    #[test]
    fn ms_deals_are_deterministic_permutations() {
        for number in [1, 617, 11982, 32000] {
            let deck = ms_deal(number).unwrap();
            check_is_permutation(&deck);
            assert_eq!(deck, ms_deal(number).unwrap());
        }
        assert_ne!(ms_deal(1).unwrap(), ms_deal(2).unwrap());
    }

    #[test]
    fn index_zero_is_the_sorted_deck() {
        let sorted = standard_deck();
        assert_eq!(deal_index(&sorted), BigUint::zero());
        assert_eq!(deck_for_index(&BigUint::zero()).unwrap(), sorted);
    }

    #[test]
    fn the_last_index_is_the_reversed_deck() {
        let last = factorial(DECK_LEN) - 1u32;
        let deck = deck_for_index(&last).unwrap();

        let mut reversed = standard_deck();
        reversed.reverse();
        assert_eq!(deck, reversed);
        assert_eq!(deal_index(&reversed), last);
    }

    #[test]
    fn indices_at_or_beyond_52_factorial_are_rejected() {
        assert_eq!(
            deck_for_index(&factorial(DECK_LEN)).unwrap_err(),
            DealError::IndexOutOfRange
        );
    }

    #[test]
    fn index_and_deck_round_trip() {
        for number in [1, 617, 11982] {
            let deck = ms_deal(number).unwrap();
            let index = deal_index(&deck);
            assert_eq!(deck_for_index(&index).unwrap(), deck);
        }
    }

    #[test]
    fn parse_deal_ids() {
        assert_eq!(parse_deal_id("ms617").unwrap(), DealId::Ms(617));
        assert_eq!(parse_deal_id("MS 11,982").unwrap(), DealId::Ms(11982));
        assert_eq!(
            parse_deal_id("42").unwrap(),
            DealId::Index(BigUint::from(42u32))
        );

        assert_eq!(
            parse_deal_id("ms0").unwrap_err(),
            DealError::MsNumberOutOfRange
        );
        assert!(matches!(
            parse_deal_id("").unwrap_err(),
            DealError::InvalidId { .. }
        ));
        assert!(matches!(
            parse_deal_id("freecell").unwrap_err(),
            DealError::InvalidId { .. }
        ));
    }

    #[test]
    fn deck_for_id_dispatches_both_schemes() {
        let ms = deck_for_id(&DealId::Ms(1)).unwrap();
        assert_eq!(ms, ms_deal(1).unwrap());

        let sorted = deck_for_id(&DealId::Index(BigUint::zero())).unwrap();
        assert_eq!(sorted, standard_deck());
    }
}
