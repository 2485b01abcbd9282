//! ルール判定で共通して使うヘルパー関数を置くよ。

use itertools::Itertools;
use std::iter;

use crate::components::card::{Card, Visibility};

/// 隣り合うカードのペアに `rule` を順番に当てはめて、全部 OK かどうかを返す。
///
/// 呼び出しの並びはこうなるよ：
/// - 空っぽなら `rule(None, None)` を1回だけ。
/// - そうじゃなければ `(cards[0], cards[1])`, `(cards[1], cards[2])`, ... と続いて、
///   最後に `(一番上のカード, None)` で締める。
///
/// 一つでも `false` が出たらそこで止まる (残りは呼ばない)。
pub fn succeeds<F>(mut rule: F, cards: &[Card]) -> bool
where
    F: FnMut(Option<&Card>, Option<&Card>) -> bool,
{
    if cards.is_empty() {
        return rule(None, None);
    }
    cards
        .iter()
        .map(Some)
        .chain(iter::once(None))
        .tuple_windows()
        .all(|(lhs, rhs)| rule(lhs, rhs))
}

/// 向きを尊重して表示するモードかどうか。
pub fn is_directed(visibility: Visibility) -> bool {
    visibility == Visibility::Directed
}

/// どっちかのカードが裏向きなら true。裏向きのカードが混ざってたら積めないよ！
pub(crate) fn any_face_down(lhs: Option<&Card>, rhs: Option<&Card>) -> bool {
    lhs.is_some_and(|card| !card.is_face_up()) || rhs.is_some_and(|card| !card.is_face_up())
}
