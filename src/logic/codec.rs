// src/logic/codec.rs
//! カードと Unicode のトランプ文字 (🂡🂱🃁🃑...) を相互変換するよ！
//!
//! スナップショットテストで盤面を1行の文字列として比べられるのがうれしいポイント。

use crate::components::card::{Card, Direction, Rank, Suit, Visibility};
use crate::config::rules::{CARD_BACK, JOKER, UNICODE_RANGE_START, UNICODE_RANK_SIZE, UNICODE_SUIT_MAX};
use crate::error::{Result, SolitaireError};

/// カード1枚を Unicode の1文字にする。
///
/// `Directed` で裏向きなら、正体を隠してカードの裏 (🂠) になるよ。
pub fn card_to_char(visibility: Visibility, card: &Card) -> char {
    if visibility == Visibility::Directed && card.direction == Direction::Down {
        return CARD_BACK;
    }
    // スートは Unicode ではアルファベットの逆順なので、UNICODE_SUIT_MAX から引く！
    let suit_offset = (UNICODE_SUIT_MAX - card.suit().order() as u32) * UNICODE_RANK_SIZE;
    let point = UNICODE_RANGE_START + suit_offset + card.rank().point();
    // ブロック内の値しか作らないので None にはならない
    char::from_u32(point).unwrap_or(JOKER)
}

/// 何枚でもカードを受け取って、1文字ずつつなげた文字列にする。
pub fn card_to_string(visibility: Visibility, cards: &[Card]) -> String {
    cards.iter().map(|card| card_to_char(visibility, card)).collect()
}

/// Unicode の1文字をカードに戻す。向きは `direction` で指定するよ。
///
/// カードの裏、ナイト、ジョーカー、ブロックの外の文字は `UnknownCardCode` エラー！
pub fn card_from_char(code: char, direction: Direction) -> Result<Card> {
    let unknown = || SolitaireError::UnknownCardCode { code: code.to_string() };

    let index = (code as u32).checked_sub(UNICODE_RANGE_START).ok_or_else(unknown)?;
    let suit_slot = index / UNICODE_RANK_SIZE;
    if suit_slot > UNICODE_SUIT_MAX {
        return Err(unknown());
    }
    let suit = Suit::from_order((UNICODE_SUIT_MAX - suit_slot) as usize).ok_or_else(unknown)?;
    let rank = Rank::from_point(index % UNICODE_RANK_SIZE).ok_or_else(unknown)?;
    Ok(Card::new(suit, rank, direction))
}

/// 文字列の先頭のコードポイントをカードにする。空文字列はエラー。
pub fn card_from_string_code(code: &str, direction: Direction) -> Result<Card> {
    let first = code
        .chars()
        .next()
        .ok_or_else(|| SolitaireError::UnknownCardCode { code: String::new() })?;
    card_from_char(first, direction)
}

/// 文字列に含まれる全部のコードポイントをカードにする。空文字列なら空の Vec。
pub fn card_from_string(cards: &str, direction: Direction) -> Result<Vec<Card>> {
    cards.chars().map(|code| card_from_char(code, direction)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::deck::new_deck;

    #[test]
    fn deck_round_trip() {
        for card in new_deck(Direction::Up) {
            let glyph = card_to_string(Visibility::Directed, std::slice::from_ref(&card));
            let decoded = card_from_string_code(&glyph, Direction::Up).expect("デコードできるはず！");
            assert_eq!(decoded, card, "{} が往復で変わっちゃった", glyph);
        }
    }

    #[test]
    fn deck_undirected_string() {
        let deck = new_deck(Direction::Down);
        assert_eq!(
            card_to_string(Visibility::Undirected, &deck),
            "🃑🃒🃓🃔🃕🃖🃗🃘🃙🃚🃛🃝🃞🃁🃂🃃🃄🃅🃆🃇🃈🃉🃊🃋🃍🃎🂱🂲🂳🂴🂵🂶🂷🂸🂹🂺🂻🂽🂾🂡🂢🂣🂤🂥🂦🂧🂨🂩🂪🂫🂭🂮"
        );
    }

    #[test]
    fn hands_of_four() {
        let up = vec![
            Card::new(Suit::Clubs, Rank::Ace, Direction::Up),
            Card::new(Suit::Diamonds, Rank::Two, Direction::Up),
            Card::new(Suit::Hearts, Rank::Three, Direction::Up),
            Card::new(Suit::Spades, Rank::Four, Direction::Up),
        ];
        assert_eq!(card_to_string(Visibility::Directed, &up), "🃑🃂🂳🂤");

        let mut mixed = up.clone();
        mixed[0].direction = Direction::Down;
        mixed[2].direction = Direction::Down;
        assert_eq!(card_to_string(Visibility::Directed, &mixed), "🂠🃂🂠🂤");
        assert_eq!(card_to_string(Visibility::Undirected, &mixed), "🃑🃂🂳🂤");

        let down: Vec<Card> = up
            .into_iter()
            .map(|mut card| {
                card.direction = Direction::Down;
                card
            })
            .collect();
        assert_eq!(card_to_string(Visibility::Directed, &down), "🂠🂠🂠🂠");
    }

    #[test]
    fn from_string_direction() {
        let down = card_from_string_code("🃑", Direction::Down).expect("デコードできるはず");
        assert_eq!(down, Card::new(Suit::Clubs, Rank::Ace, Direction::Down));
        let up = card_from_string_code("🃑", Direction::Up).expect("デコードできるはず");
        assert_eq!(up, Card::new(Suit::Clubs, Rank::Ace, Direction::Up));
    }

    #[test]
    fn from_string_many() {
        let cards = card_from_string("🂡🂾🃎", Direction::Up).expect("デコードできるはず");
        assert_eq!(
            cards,
            vec![
                Card::new(Suit::Spades, Rank::Ace, Direction::Up),
                Card::new(Suit::Hearts, Rank::King, Direction::Up),
                Card::new(Suit::Diamonds, Rank::King, Direction::Up),
            ]
        );
        assert_eq!(card_from_string("", Direction::Up), Ok(vec![]));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(
            card_from_string_code("A", Direction::Up),
            Err(SolitaireError::UnknownCardCode { code: "A".to_string() })
        );
        assert_eq!(
            card_from_string_code("", Direction::Up),
            Err(SolitaireError::UnknownCardCode { code: String::new() })
        );
        // カードの裏、ナイト (🂬)、ジョーカー (🃟)、ブロックの外 (🃠) もダメ！
        for code in ["🂠", "🂬", "🃟", "\u{1F0E0}"] {
            assert!(card_from_string_code(code, Direction::Up).is_err(), "{} は読めないはず", code);
        }
        assert!(card_from_string("🃑X", Direction::Up).is_err());
    }
}
