//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
// 共通ヘルパーを使うためにインポート
use super::common::{any_face_down, succeeds};

/// 組札で `rhs` を `lhs` の上に積めるか？ `lhs` が None なら空の山、`rhs` が None なら一番上。
///
/// - 裏向きのカードが絡んだら常に false。
/// - 一番上 (rhs なし) は、カードがあれば OK。
/// - 空の山にはエースだけ。
/// - それ以外は同じスートで、ランクがちょうど1つ上。
pub fn foundation_succeeds(lhs: Option<&Card>, rhs: Option<&Card>) -> bool {
    if any_face_down(lhs, rhs) {
        return false;
    }
    match (lhs, rhs) {
        (lhs, None) => lhs.is_some(),
        (None, Some(rhs)) => rhs.rank() == Rank::Ace,
        (Some(lhs), Some(rhs)) => {
            lhs.suit() == rhs.suit() && lhs.rank().order() + 1 == rhs.rank().order()
        }
    }
}

/// `cards` (下から上の順) を、組札の一本の柱 `pillar` の上に積めるかチェックする。
pub fn can_build_on_pillar(pillar: &[Card], cards: &[Card]) -> bool {
    let Some(lead) = cards.first() else {
        debug!("[Foundation Rule] 積むカードがない！");
        return false;
    };
    let result = succeeds(foundation_succeeds, cards) && foundation_succeeds(pillar.last(), Some(lead));
    debug!(
        "[Foundation Rule] {} 枚 (先頭 {}) を柱 (一番上 {:?}) に積める？ -> {}",
        cards.len(),
        lead,
        pillar.last().map(Card::to_ascii),
        result
    );
    result
}

/// 柱がキングまで積み上がってるか。
pub fn is_pillar_built(pillar: &[Card]) -> bool {
    pillar.last().is_some_and(|card| card.rank() == Rank::King)
}
