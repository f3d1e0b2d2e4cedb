//! Community board slots.
//!
//! The board is five slots, each either a fixed card or unresolved. The
//! simulator fills unresolved slots from the shuffled pool every trial.

use crate::cards::{Card, Rank, Suit};
use crate::error::{EquityError, Result};

/// Five community slots; `None` is an unresolved card.
pub type BoardSlots = [Option<Card>; 5];

/// An entirely unresolved board (preflop).
pub const EMPTY_BOARD: BoardSlots = [None; 5];

/// Place up to five known cards in the leading slots.
pub fn board_from_cards(cards: &[Card]) -> Result<BoardSlots> {
    if cards.len() > 5 {
        return Err(EquityError::InvalidCardCount { expected: 5, actual: cards.len() });
    }
    let mut slots = EMPTY_BOARD;
    for (slot, &card) in slots.iter_mut().zip(cards) {
        *slot = Some(card);
    }
    Ok(slots)
}

/// Parse a board such as `"Qs Js Ts"` or `"Qs ? Ts - -"`.
///
/// `?`, `-`, `_` and `x` mark unresolved slots; missing trailing slots are
/// unresolved too.
pub fn parse_board(s: &str) -> Result<BoardSlots> {
    let mut slots = EMPTY_BOARD;
    let mut n = 0;
    for token in s.split_whitespace() {
        let parsed: Vec<Option<Card>> = if is_placeholder(token) {
            vec![None]
        } else {
            crate::cards::parse_cards(token)?.into_iter().map(Some).collect()
        };
        for slot in parsed {
            if n == 5 {
                return Err(EquityError::InvalidCardCount { expected: 5, actual: n + 1 });
            }
            slots[n] = slot;
            n += 1;
        }
    }
    Ok(slots)
}

fn is_placeholder(token: &str) -> bool {
    matches!(token, "?" | "??" | "-" | "_" | "x" | "X")
}

/// The fixed cards on a board, in slot order.
pub fn known_board_cards(board: &BoardSlots) -> Vec<Card> {
    board.iter().flatten().copied().collect()
}

/// Number of unresolved slots.
pub fn unresolved_slots(board: &BoardSlots) -> usize {
    board.iter().filter(|slot| slot.is_none()).count()
}

/// Fill unresolved slots in order from `draws`.
///
/// `draws` must hold at least `unresolved_slots(board)` cards.
#[inline]
pub(crate) fn complete_board(board: &BoardSlots, draws: &[Card]) -> [Card; 5] {
    let mut next = 0;
    let mut full = [Card::new(Rank::Two, Suit::Hearts); 5];
    for (out, slot) in full.iter_mut().zip(board) {
        *out = match slot {
            Some(card) => *card,
            None => {
                next += 1;
                draws[next - 1]
            }
        };
    }
    full
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn test_board_from_cards() {
        let cards = parse_cards("Qs Js Ts").unwrap();
        let board = board_from_cards(&cards).unwrap();
        assert_eq!(known_board_cards(&board), cards);
        assert_eq!(unresolved_slots(&board), 2);
        assert!(board[3].is_none());

        let too_many = parse_cards("2c 3c 4c 5c 6c 7c").unwrap();
        assert!(matches!(
            board_from_cards(&too_many),
            Err(EquityError::InvalidCardCount { expected: 5, actual: 6 })
        ));
    }

    #[test]
    fn test_parse_board() {
        let board = parse_board("Qs ? Ts").unwrap();
        assert_eq!(board[0].unwrap().to_string(), "Qs");
        assert!(board[1].is_none());
        assert_eq!(board[2].unwrap().to_string(), "Ts");
        assert_eq!(unresolved_slots(&board), 3);

        let board = parse_board("QsJsTs2h3d").unwrap();
        assert_eq!(unresolved_slots(&board), 0);

        assert_eq!(parse_board("").unwrap(), EMPTY_BOARD);
        assert!(parse_board("2c 3c 4c 5c 6c 7c").is_err());
        assert!(parse_board("Zz").is_err());
    }

    #[test]
    fn test_complete_board() {
        let board = parse_board("- Js - Th -").unwrap();
        let draws = parse_cards("2c 3c 4c 5c").unwrap();
        let full = complete_board(&board, &draws);
        let text: Vec<String> = full.iter().map(|c| c.to_string()).collect();
        assert_eq!(text, vec!["2c", "Js", "3c", "Th", "4c"]);
    }
}
