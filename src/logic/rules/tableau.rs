//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use super::common::{any_face_down, succeeds};

/// 場札で `rhs` を `lhs` の上に重ねられるか？
///
/// 組札とほぼ同じだけど、空の列に置けるのはキングだけで、
/// 重ねる時は色違い＆ランクがちょうど1つ下！
pub fn tableau_succeeds(lhs: Option<&Card>, rhs: Option<&Card>) -> bool {
    if any_face_down(lhs, rhs) {
        return false;
    }
    match (lhs, rhs) {
        (lhs, None) => lhs.is_some(),
        (None, Some(rhs)) => rhs.rank() == Rank::King,
        (Some(lhs), Some(rhs)) => {
            lhs.color() != rhs.color() && lhs.rank().order() == rhs.rank().order() + 1
        }
    }
}

/// `cards` (下から上の順) を場札の一列 `lane` の上に重ねられるかチェックする。
pub fn can_build_on_lane(lane: &[Card], cards: &[Card]) -> bool {
    let Some(lead) = cards.first() else {
        debug!("[Tableau Rule] 積むカードがない！");
        return false;
    };
    let result = succeeds(tableau_succeeds, cards) && tableau_succeeds(lane.last(), Some(lead));
    debug!(
        "[Tableau Rule] {} 枚 (先頭 {}) を列 (一番上 {:?}) に重ねられる？ -> {}",
        cards.len(),
        lead,
        lane.last().map(Card::to_ascii),
        result
    );
    result
}
