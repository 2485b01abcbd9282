// src/lib.rs
//! クロンダイク (Klondike) ソリティアのルールエンジンだよ！🃏
//!
//! 画面もネットワークも持たない、ゲームの状態と「その手は正しいか？」の判定だけのクレート。
//! `Solitaire` を作って、`point` でカードを指して、`build` で置く。それだけ！
//!
//! ログは `log` クレートに出すだけで、ロガーの設定は使う側にお任せ。

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod components; // カードや山のデータ
pub mod config; // ルール定数と設定
pub mod error;
pub mod logic; // デッキ、文字コード、ルール判定
pub mod protocol; // 外に渡すスナップショット
pub mod solitaire; // ゲーム本体


// よく使う型をクレートのトップから使えるようにしておくよ。
pub use components::card::{Card, Color, Direction, Rank, Suit, Visibility};
pub use components::foundation::Foundation;
pub use components::game_state::GameStatus;
pub use components::stack::{Destination, Selection, StackType, Xy};
pub use components::tableau::Tableau;
pub use config::SolitaireConfig;
pub use error::{Result, SolitaireError};
pub use logic::codec::{card_from_string, card_from_string_code, card_to_string};
pub use logic::deck::{new_deck, shuffle, RandomSource};
pub use protocol::GameStateData;
pub use solitaire::Solitaire;
