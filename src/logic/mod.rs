// src/logic/mod.rs
//! ゲームのロジック (カードの作り方、文字コード、ルール判定) をまとめるモジュール。

pub mod codec;
pub mod deck;
pub mod pile;
pub mod rules;
