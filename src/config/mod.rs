// src/config/mod.rs
//! ゲームの設定まわり！ルール定数 (rules) と、新しいゲームを作る時の設定値 (SolitaireConfig)。

pub mod rules;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolitaireError};
use rules::{DEFAULT_DRAW_SIZE, DEFAULT_TABLEAU_SIZE};

/// 新しいゲームを作る時の設定だよ！⚙️
///
/// JSON から読み込めるように Deserialize を付けてる。
/// 書いてないフィールドは `Default` の値になるよ (`#[serde(default)]`)。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolitaireConfig {
    /// 山札から一度にめくる枚数。Waste の「リザーブ」の幅でもある。
    pub draw_size: usize,
    /// 場札の列数。
    pub tableau_size: usize,
    /// 山札を通して配れる回数の上限 (最初の配りも1回に数える)。None なら無制限！
    pub deal_limit: Option<usize>,
    /// これまでの勝利数。リセットしても残る唯一の値。
    pub wins: u32,
}

impl Default for SolitaireConfig {
    fn default() -> Self {
        Self {
            draw_size: DEFAULT_DRAW_SIZE,
            tableau_size: DEFAULT_TABLEAU_SIZE,
            deal_limit: None,
            wins: 0,
        }
    }
}

impl SolitaireConfig {
    pub fn with_draw_size(mut self, draw_size: usize) -> Self {
        self.draw_size = draw_size;
        self
    }

    pub fn with_tableau_size(mut self, tableau_size: usize) -> Self {
        self.tableau_size = tableau_size;
        self
    }

    pub fn with_deal_limit(mut self, deal_limit: Option<usize>) -> Self {
        self.deal_limit = deal_limit;
        self
    }

    pub fn with_wins(mut self, wins: u32) -> Self {
        self.wins = wins;
        self
    }

    /// 設定値がゲームとして成り立つかチェックする。
    /// 場札 0 列とか、0 枚ずつめくるとかはダメ！🙅
    pub fn validate(&self) -> Result<()> {
        if self.tableau_size == 0 {
            return Err(SolitaireError::InvalidTableauSize { size: self.tableau_size });
        }
        if self.draw_size == 0 {
            return Err(SolitaireError::InvalidDrawSize { size: self.draw_size });
        }
        Ok(())
    }

    /// JSON 文字列から設定を読み込んで、そのまま validate までするよ。
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SolitaireConfig = serde_json::from_str(json)
            .map_err(|e| SolitaireError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
