// src/error.rs
//! エンジン全体で使うエラー型だよ。
//!
//! ルール的に置けないカードを置こうとした時 (ビルド失敗) はエラーにしないよ！
//! それは普通のゲーム進行だから、`false` を返して何もしないだけ。
//! ここにあるのは「呼び出し側のバグ」とか「壊れた入力」みたいな本当の異常だけ。

use std::fmt;

use crate::components::card::Card;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolitaireError {
    /// `point` されたカードがどの山にも見つからない。UI とエンジンの状態がズレてる！
    MissingCard { card: Card },
    /// トランプとして解釈できない文字 (または空文字列)。
    UnknownCardCode { code: String },
    /// 場札の列数が 0。
    InvalidTableauSize { size: usize },
    /// めくる枚数が 0。
    InvalidDrawSize { size: usize },
    /// JSON の読み書きに失敗した。
    Serialization(String),
}

impl fmt::Display for SolitaireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolitaireError::MissingCard { card } => write!(f, "Missing card {}.", card),
            SolitaireError::UnknownCardCode { code } if code.is_empty() => {
                write!(f, "No code point in empty card code.")
            }
            SolitaireError::UnknownCardCode { code } => {
                write!(f, "Unknown card code {:?}.", code)
            }
            SolitaireError::InvalidTableauSize { size } => {
                write!(f, "Tableau size must be greater than zero but was {}.", size)
            }
            SolitaireError::InvalidDrawSize { size } => {
                write!(f, "Draw size must be greater than zero but was {}.", size)
            }
            SolitaireError::Serialization(message) => write!(f, "Serialization failed: {}", message),
        }
    }
}

impl std::error::Error for SolitaireError {}

pub type Result<T> = std::result::Result<T, SolitaireError>;
