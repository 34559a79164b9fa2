//! Selection and destination legality.
//!
//! Both checks are pure and report through `Result`: an `Err` carries either
//! a player-facing [`Refusal`] or an [`UntrackedCard`](GameError::UntrackedCard)
//! consistency error, so the caller can route the two differently.
//! Placement onto an empty column bypasses both checks and is handled by the
//! engine facade directly.

use crate::board::Board;
use crate::cards::Deck;
use crate::core::errors::{GameError, Refusal};
use crate::core::ids::CardId;

use super::config::RuleConfig;

/// Can this card start a move?
///
/// Legal when the card is revealed and everything stacked on it forms a
/// descending sequence down to the column top; the topmost card is always
/// legal once revealed.
pub fn check_selection(
    deck: &Deck,
    board: &Board,
    rules: &RuleConfig,
    card: CardId,
) -> Result<(), GameError> {
    let state = board.state(card).ok_or(GameError::UntrackedCard(card))?;
    if !state.revealed {
        return Err(Refusal::CardHidden(card).into());
    }
    if board.is_topmost(card) {
        return Ok(());
    }

    let column = board.column(state.column);
    let start = column
        .iter()
        .position(|&c| c == card)
        .ok_or(GameError::UntrackedCard(card))?;
    for pair in column[start..].windows(2) {
        let below = deck.get(pair[0]);
        let above = deck.get(pair[1]);
        if !rules.sequence_step(above, below) {
            return Err(Refusal::SequenceBroken(card).into());
        }
    }
    Ok(())
}

/// Can the selected card land on this destination card?
///
/// The destination must be the topmost card of its column and exactly one
/// rank above the moved card. Suit is never consulted here, in either rule
/// variant.
pub fn check_destination(
    deck: &Deck,
    board: &Board,
    moved: CardId,
    destination: CardId,
) -> Result<(), GameError> {
    if !board.contains(destination) {
        return Err(GameError::UntrackedCard(destination));
    }
    if !board.is_topmost(destination) {
        return Err(Refusal::DestinationBuried(destination).into());
    }
    if !deck.get(moved).follows(deck.get(destination)) {
        return Err(Refusal::RankMismatch { moved, destination }.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardInfo, CardKind, Suit};
    use crate::core::ids::ColumnId;
    use crate::rules::config::SuitMatching;

    /// Deck whose first cards are the given ones; the rest of the
    /// composition follows in sorted order.
    fn rigged_deck(front: &[CardInfo]) -> Deck {
        let mut rest: Vec<CardInfo> = Deck::sorted().iter().copied().collect();
        let mut cards = Vec::with_capacity(rest.len());
        for wanted in front {
            let at = rest
                .iter()
                .position(|c| c == wanted)
                .expect("card not left in composition");
            cards.push(rest.remove(at));
        }
        cards.extend(rest);
        Deck::from_cards(cards)
    }

    fn board_with_column(cards: &[u8], revealed: bool) -> Board {
        let mut board = Board::new();
        for &id in cards {
            board.place(CardId::new(id), ColumnId::new(0), revealed);
        }
        board
    }

    #[test]
    fn test_topmost_selectable_once_revealed() {
        let deck = rigged_deck(&[
            CardInfo::number(9, Suit::Heart),
            CardInfo::number(4, Suit::Club), // no relation to the card below
        ]);
        let board = board_with_column(&[0, 1], true);

        assert!(check_selection(&deck, &board, &RuleConfig::default(), CardId(1)).is_ok());
    }

    #[test]
    fn test_hidden_card_refused() {
        let deck = rigged_deck(&[CardInfo::number(9, Suit::Heart)]);
        let board = board_with_column(&[0], false);

        assert_eq!(
            check_selection(&deck, &board, &RuleConfig::default(), CardId(0)),
            Err(Refusal::CardHidden(CardId(0)).into())
        );
    }

    #[test]
    fn test_descending_chain_selectable_below_top() {
        // Column holds K, Q, J, 10 bottom to top; the King drags the rest.
        let deck = rigged_deck(&[
            CardInfo::face(CardKind::King, Suit::Spade),
            CardInfo::face(CardKind::Queen, Suit::Heart),
            CardInfo::face(CardKind::Jester, Suit::Club),
            CardInfo::number(10, Suit::Diamond),
        ]);
        let board = board_with_column(&[0, 1, 2, 3], true);

        let rules = RuleConfig::default();
        for id in 0..4 {
            assert!(check_selection(&deck, &board, &rules, CardId(id)).is_ok());
        }
    }

    #[test]
    fn test_break_in_chain_blocks_cards_below_it() {
        // K, Q, 5, 4: the 5 breaks the chain for K and Q, while 5 and 4
        // still move together.
        let deck = rigged_deck(&[
            CardInfo::face(CardKind::King, Suit::Spade),
            CardInfo::face(CardKind::Queen, Suit::Heart),
            CardInfo::number(5, Suit::Club),
            CardInfo::number(4, Suit::Diamond),
        ]);
        let board = board_with_column(&[0, 1, 2, 3], true);

        let rules = RuleConfig::default();
        assert_eq!(
            check_selection(&deck, &board, &rules, CardId(0)),
            Err(Refusal::SequenceBroken(CardId(0)).into())
        );
        assert_eq!(
            check_selection(&deck, &board, &rules, CardId(1)),
            Err(Refusal::SequenceBroken(CardId(1)).into())
        );
        assert!(check_selection(&deck, &board, &rules, CardId(2)).is_ok());
        assert!(check_selection(&deck, &board, &rules, CardId(3)).is_ok());
    }

    #[test]
    fn test_suit_matching_tightens_selection() {
        let deck = rigged_deck(&[
            CardInfo::number(8, Suit::Heart),
            CardInfo::number(7, Suit::Spade),
        ]);
        let board = board_with_column(&[0, 1], true);

        assert!(check_selection(&deck, &board, &RuleConfig::default(), CardId(0)).is_ok());

        let strict = RuleConfig {
            suit_matching: SuitMatching::Required,
        };
        assert_eq!(
            check_selection(&deck, &board, &strict, CardId(0)),
            Err(Refusal::SequenceBroken(CardId(0)).into())
        );
    }

    #[test]
    fn test_untracked_selection_is_a_caller_bug() {
        let deck = rigged_deck(&[]);
        let board = Board::new();

        assert_eq!(
            check_selection(&deck, &board, &RuleConfig::default(), CardId(50)),
            Err(GameError::UntrackedCard(CardId(50)))
        );
    }

    #[test]
    fn test_destination_must_be_topmost() {
        // Column: 9, 8. Placing another 8 on the buried 9 is refused even
        // though the ranks line up.
        let deck = rigged_deck(&[
            CardInfo::number(9, Suit::Heart),
            CardInfo::number(8, Suit::Club),
            CardInfo::number(8, Suit::Spade),
        ]);
        let mut board = board_with_column(&[0, 1], true);
        board.place(CardId(2), ColumnId::new(1), true);

        assert_eq!(
            check_destination(&deck, &board, CardId(2), CardId(0)),
            Err(Refusal::DestinationBuried(CardId(0)).into())
        );
        assert_eq!(
            check_destination(&deck, &board, CardId(2), CardId(1)),
            Err(Refusal::RankMismatch {
                moved: CardId(2),
                destination: CardId(1)
            }
            .into())
        );
    }

    #[test]
    fn test_destination_rank_must_be_one_above() {
        let deck = rigged_deck(&[
            CardInfo::number(9, Suit::Heart),
            CardInfo::number(8, Suit::Club),
        ]);
        let mut board = Board::new();
        board.place(CardId(0), ColumnId::new(0), true);
        board.place(CardId(1), ColumnId::new(1), true);

        assert!(check_destination(&deck, &board, CardId(1), CardId(0)).is_ok());
        assert_eq!(
            check_destination(&deck, &board, CardId(0), CardId(1)),
            Err(Refusal::RankMismatch {
                moved: CardId(0),
                destination: CardId(1)
            }
            .into())
        );
    }

    #[test]
    fn test_atlas_lands_on_a_two() {
        let deck = rigged_deck(&[
            CardInfo::number(2, Suit::Heart),
            CardInfo::face(CardKind::Atlas, Suit::Spade),
        ]);
        let mut board = Board::new();
        board.place(CardId(0), ColumnId::new(0), true);
        board.place(CardId(1), ColumnId::new(1), true);

        assert!(check_destination(&deck, &board, CardId(1), CardId(0)).is_ok());
    }

    #[test]
    fn test_untracked_destination_is_a_caller_bug() {
        let deck = rigged_deck(&[CardInfo::number(9, Suit::Heart)]);
        let board = board_with_column(&[0], true);

        assert_eq!(
            check_destination(&deck, &board, CardId(0), CardId(88)),
            Err(GameError::UntrackedCard(CardId(88)))
        );
    }
}
