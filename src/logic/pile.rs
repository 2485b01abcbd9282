// src/logic/pile.rs
//! 山 (Vec<Card>) の並びをグリッド状の文字列にするヘルパー。
//! 組札や場札のスナップショット表示で使うよ！

use crate::components::card::{Card, Visibility};
use crate::config::rules::{IDEOGRAPHIC_SPACE, JOKER};
use crate::logic::codec::card_to_char;

/// 山を縦の列として並べて、1行ずつ文字列にする。
///
/// 行 y の列 x にカードが無ければ、一番上の行 (y == 0) はジョーカー 🃟、それより下は全角スペース。
/// 全部の山が空っぽなら、山の数だけジョーカーを並べた1行になる。
pub fn pile_to_string(piles: &[Vec<Card>], visibility: Visibility) -> String {
    let height = piles.iter().map(Vec::len).max().unwrap_or(0);
    if height == 0 {
        return JOKER.to_string().repeat(piles.len());
    }

    let rows: Vec<String> = (0..height)
        .map(|y| {
            piles
                .iter()
                .map(|pile| match pile.get(y) {
                    Some(card) => card_to_char(visibility, card),
                    None if y == 0 => JOKER,
                    None => IDEOGRAPHIC_SPACE,
                })
                .collect::<String>()
        })
        .collect();
    rows.join("\n")
}
