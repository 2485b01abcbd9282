//! ゲームの勝利条件判定ロジックを定義するよ。

use super::foundation::is_pillar_built;
use crate::components::card::Card;
use crate::config::rules::SUIT_COUNT;

/// ゲームのクリア条件（4本の柱が全部キングまで積み上がってるか）を判定する。
pub fn check_win_condition(pillars: &[Vec<Card>]) -> bool {
    pillars.len() == SUIT_COUNT && pillars.iter().all(|pillar| is_pillar_built(pillar))
}
