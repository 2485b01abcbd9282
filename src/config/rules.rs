// src/config/rules.rs
//! ゲームのルールとカード表記に関する定数を定義するよ！
//! 山の数、デッキの枚数、Unicode のコードポイントなど。

pub const SUIT_COUNT: usize = 4; // スートの数
pub const RANK_COUNT: usize = 13; // 1スートあたりのランクの数
pub const DECK_SIZE: usize = SUIT_COUNT * RANK_COUNT; // 52枚！

pub const DEFAULT_DRAW_SIZE: usize = 3; // 山札から一度にめくる枚数
pub const DEFAULT_TABLEAU_SIZE: usize = 7; // 場札の列数

// --- Unicode のトランプブロック ---
// https://en.wikipedia.org/wiki/Playing_cards_in_Unicode
// スートはアルファベットの逆順 (Spades, Hearts, Diamonds, Clubs) で並んでるので注意！
pub const UNICODE_RANGE_START: u32 = 0x1F0A0; // ブロックの先頭 (カードの裏 🂠)
pub const UNICODE_RANK_SIZE: u32 = 16; // 1スートあたりのセル数
pub const UNICODE_SUIT_MAX: u32 = SUIT_COUNT as u32 - 1;

pub const CARD_BACK: char = '\u{1F0A0}'; // 🂠
pub const JOKER: char = '\u{1F0DF}'; // 🃟 空の山の印
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}'; // 全角スペース。グリッドの空きセル
