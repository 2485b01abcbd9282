// src/protocol.rs

// このファイルは、ゲームの外 (UI とか保存処理とか) に渡すスナップショットの形式を定義するよ！💌
// データ構造を `serde` で JSON にしたり、JSON から元に戻したりできるようにしておく。
// `Serialize` は Rust のデータ構造 -> JSON 文字列 にするやつ、
// `Deserialize` は JSON 文字列 -> Rust のデータ構造 にするやつだよ。
use serde::{Serialize, Deserialize};

use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::GameStatus;
use crate::components::stack::{Selection, StackType, Xy};
use crate::error::{Result, SolitaireError};

/// ゲームの状態全体を表すデータ構造だよ。
/// `Solitaire::snapshot()` で作られる。外側はこれだけ見れば画面を描けるはず！
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameStateData {
    /// 山札。最後が一番上。
    pub stock: Vec<CardData>,
    /// 捨て札。最後が一番上。
    pub waste: Vec<CardData>,
    /// 組札の柱 4本 (Clubs, Diamonds, Hearts, Spades の順)。
    pub foundation: Vec<Vec<CardData>>,
    /// 場札の列。左から順。
    pub tableau: Vec<Vec<CardData>>,
    /// 持ち上げ中のカード (なければ None)。
    pub selected: Option<SelectionData>,
    pub draw_size: usize,
    pub deals: usize,
    pub deal_limit: Option<usize>,
    pub wins: u32,
    pub status: GameStatus,
}

/// カード1枚の状態を表すデータ構造。
/// `GameStateData` の中でたくさん使われるよ。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardData {
    /// カードのスート (マーク)。
    pub suit: Suit,
    /// カードのランク (数字)。
    pub rank: Rank,
    /// カードが表向きかどうか。
    pub is_face_up: bool,
}

/// 選択中のカードの束。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SelectionData {
    pub cards: Vec<CardData>,
    pub pile: StackType,
    pub xy: Xy,
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        Self {
            suit: card.suit(),
            rank: card.rank(),
            is_face_up: card.is_face_up(),
        }
    }
}

impl From<&Selection> for SelectionData {
    fn from(selection: &Selection) -> Self {
        Self {
            cards: cards_to_data(&selection.cards),
            pile: selection.pile,
            xy: selection.xy,
        }
    }
}

/// カードの並びをまとめて `CardData` にする。
pub fn cards_to_data(cards: &[Card]) -> Vec<CardData> {
    cards.iter().map(CardData::from).collect()
}

impl GameStateData {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| SolitaireError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SolitaireError::Serialization(e.to_string()))
    }
}
