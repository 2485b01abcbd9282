// src/components/game_state.rs

use serde::{Serialize, Deserialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆
///
/// ソリティアは一人用だから、勝者の ID とかはいらない。遊んでるか、勝ったか、だけ！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    Playing,
    /// 組札が全部キングまで積み上がった！
    Won,
}

impl GameStatus {
    pub fn from_won(won: bool) -> Self {
        if won {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }
}
