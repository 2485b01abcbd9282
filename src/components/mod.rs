// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
// ゲームの「データ」側。カードと、カードを持っておく山たち！
pub mod card;
pub mod stack; // 選択中のカードと、置き場所の指定 ✋
pub mod foundation; // 組札 🏛️
pub mod tableau; // 場札 🃏
pub mod game_state; // 遊んでる？勝った？🏆
