// src/components/stack.rs

// serde を使うためにインポート！スナップショットで JSON にするよ。
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::components::card::Card;

/// 選択したカードがどの種類の山から来たかを示す Enum だよ。
/// 山札 (Stock) からは選択できない (めくるだけ) ので入ってないよ！
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 組札 (Foundation)。スートごとに4つある。
    Foundation,
    /// 場札 (Tableau)。列の番号は `Xy::x` に入る。
    Tableau,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
}

impl fmt::Display for StackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StackType::Foundation => "Foundation",
            StackType::Tableau => "Tableau",
            StackType::Waste => "Waste",
        };
        f.write_str(name)
    }
}

/// 山の中の位置。x が何番目の山 (列)、y がその山の下から何枚目か (0 が一番下)。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Xy {
    pub x: usize,
    pub y: usize,
}

impl Xy {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Xy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 山から持ち上げて、置き場所が決まるのを待っているカードの束だよ。✋🃏
///
/// 選択中のカードはどの山にも入ってない！この `cards` だけが持ち主。
/// 置けなかったら `pile` と `xy` を頼りに元の山へ戻すんだ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// 持ち上げたカード。先頭が一番下、最後が一番上。
    pub cards: Vec<Card>,
    /// どの種類の山から来たか。
    pub pile: StackType,
    /// 元の山の番号と、持ち上げた位置。
    pub xy: Xy,
}

/// 選択中のカードを置く先。組札はスートで行き先が決まるから番号はいらない！
/// 場札は列の番号を指定してね。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Foundation,
    Tableau(usize),
}
