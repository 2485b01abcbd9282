// src/logic/deck.rs

use std::time::{SystemTime, UNIX_EPOCH};

use itertools::iproduct;
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::components::card::{Card, Direction, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;

/// シャッフルに使う乱数の出どころ。呼ぶたびに [0, 1) の値を返す関数だよ。
///
/// エンジンは乱数のアルゴリズムを知らない！テストでは固定値を返すクロージャを渡せばいいし、
/// 本番では `time_seeded_random()` とか `random_from_rng()` で作ったものを渡す。
pub type RandomSource = Box<dyn FnMut() -> f64>;

/// 標準的な52枚のデッキを作る関数だよ！🃏
///
/// 並びはスートが外側 (Clubs, Diamonds, Hearts, Spades)、ランクが内側 (Ace..King)。
/// 全部のカードの向きは `direction` になる。
pub fn new_deck(direction: Direction) -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE); // 52枚入る容量を確保しておくと効率的！
    for (suit, rank) in iproduct!(ALL_SUITS, ALL_RANKS) {
        deck.push(Card::new(suit, rank, direction));
    }
    deck
}

/// その場で Fisher–Yates シャッフルする。
///
/// 最後のインデックスから 1 まで下りながら、`i` と `floor(random() * (i + 1))` を入れ替えるよ。
/// `random` がいつも 1 ギリギリの値を返すなら、入れ替えは全部 `i` と `i` になって順番はそのまま！
pub fn shuffle<T>(items: &mut [T], random: &mut dyn FnMut() -> f64) {
    for i in (1..items.len()).rev() {
        // random() が 1.0 ちょうどを返しても範囲外にならないように
        let j = ((random() * (i + 1) as f64) as usize).min(i);
        items.swap(i, j);
    }
}

/// 任意の `rand::Rng` を `RandomSource` にする。
pub fn random_from_rng<R: Rng + 'static>(mut rng: R) -> RandomSource {
    Box::new(move || rng.gen::<f64>())
}

/// 現在時刻をシードにした乱数。デフォルトのゲームはこれを使うよ。
pub fn time_seeded_random() -> RandomSource {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    debug!("乱数シード: {}", seed);
    random_from_rng(StdRng::seed_from_u64(seed))
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn deck_creation() {
        let deck = new_deck(Direction::Down);

        // 1. カードが52枚あるかチェック！
        assert_eq!(deck.len(), 52);

        // 2. 重複がないかチェック！
        let unique_cards: HashSet<_> = deck.iter().map(|card| (card.suit(), card.rank())).collect();
        assert_eq!(unique_cards.len(), 52, "デッキに重複したカードが見つかりました！");

        // 3. すべてのカードが裏向きかチェック！
        assert!(deck.iter().all(|card| card.direction == Direction::Down), "デッキに表向きのカードが含まれています！");

        // 4. 並び順はスートが外側、ランクが内側
        assert_eq!(deck[0].to_ascii(), "CA");
        assert_eq!(deck[12].to_ascii(), "CK");
        assert_eq!(deck[13].to_ascii(), "DA");
        assert_eq!(deck[51].to_ascii(), "SK");
    }

    #[test]
    fn deck_direction_up() {
        let deck = new_deck(Direction::Up);
        assert!(deck.iter().all(Card::is_face_up));
    }

    #[test]
    fn shuffle_almost_one_is_identity() {
        let mut items: Vec<u32> = (0..52).collect();
        let mut random = || 1.0 - f64::EPSILON;
        shuffle(&mut items, &mut random);
        assert_eq!(items, (0..52).collect::<Vec<_>>(), "1 ギリギリの乱数なら順番はそのままのはず！");
    }

    #[test]
    fn shuffle_zero_rotates() {
        // いつも 0 なら、毎回先頭と入れ替わる
        let mut items = vec!['a', 'b', 'c', 'd'];
        let mut random = || 0.0;
        shuffle(&mut items, &mut random);
        assert_eq!(items, vec!['b', 'c', 'd', 'a']);
    }

    #[test]
    fn shuffle_empty_and_single() {
        let mut calls = 0;
        let mut random = || {
            calls += 1;
            0.5
        };
        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut random);
        let mut single = vec![7u8];
        shuffle(&mut single, &mut random);
        assert_eq!(single, vec![7]);
        assert_eq!(calls, 0, "入れ替えるものがないなら乱数は呼ばれないはず");
    }

    #[test]
    fn shuffle_is_uniform() {
        const TRIALS: usize = 60_000;
        let mut random = random_from_rng(StdRng::seed_from_u64(0x5EED));
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();
        for _ in 0..TRIALS {
            let mut items = vec![0u8, 1, 2];
            shuffle(&mut items, &mut random);
            *counts.entry(items).or_default() += 1;
        }

        assert_eq!(counts.len(), 6, "3! = 6 通り全部出るはず");
        let expected = TRIALS / 6;
        for (permutation, count) in &counts {
            let low = expected * 9 / 10;
            let high = expected * 11 / 10;
            assert!(
                (low..=high).contains(count),
                "{:?} の出現回数 {} が期待値 {} から離れすぎ",
                permutation,
                count,
                expected
            );
        }
    }

    #[test]
    fn shuffle_keeps_every_card() {
        let mut deck = new_deck(Direction::Down);
        let mut random = random_from_rng(StdRng::seed_from_u64(42));
        shuffle(&mut deck, &mut random);
        assert_eq!(deck.len(), 52, "シャッフルでカード数が変わった！");
        let unique: HashSet<_> = deck.iter().map(Card::to_ascii).collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn random_sources_stay_in_unit_interval() {
        let mut seeded = random_from_rng(StdRng::seed_from_u64(7));
        let mut timed = time_seeded_random();
        for _ in 0..1_000 {
            let a = seeded();
            let b = timed();
            assert!((0.0..1.0).contains(&a));
            assert!((0.0..1.0).contains(&b));
        }
    }
}
