// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//! ここの関数は全部、状態を持たない純粋な判定だけ。カードを動かすのは components 側！

pub mod common;
pub mod foundation;
pub mod tableau;
pub mod stock_waste;
pub mod win_condition;


// 各モジュールから公開したい関数をここで再エクスポート！
pub use common::{is_directed, succeeds};
pub use foundation::*;
pub use tableau::*;
pub use stock_waste::*;
pub use win_condition::*;
