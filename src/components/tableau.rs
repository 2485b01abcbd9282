// src/components/tableau.rs

use log::{debug, warn};
use serde::{Serialize, Deserialize};

use crate::components::card::{Card, Direction, Visibility};
use crate::components::stack::{Selection, StackType, Xy};
use crate::error::{Result, SolitaireError};
use crate::logic::pile::pile_to_string;
use crate::logic::rules::can_build_on_lane;

/// 場札 (Tableau) だよ！左から順に並んだ列 (lane) の集まり。🃏🃏🃏
///
/// 列のインデックス 0 が一番左。各列は下 (index 0) から上 (最後) の順。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tableau {
    lanes: Vec<Vec<Card>>,
}

impl Tableau {
    /// `size` 列の空っぽの場札を作る。0 列はエラー！
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(SolitaireError::InvalidTableauSize { size });
        }
        Ok(Self { lanes: vec![Vec::new(); size] })
    }

    /// 山札の後ろ (上) から、列 i に i + 1 枚ずつ配る。
    ///
    /// 各列のカードは山札での並び順のまま、全部裏向きで置いて、最後に一番上だけ表にする。
    /// 山札が足りなければ、残ってる分だけ配って後ろの列は少なく (空に) なる。
    /// 配る前の列は空っぽじゃないとダメ！
    pub fn deal(&mut self, stock: &mut Vec<Card>) {
        for x in 0..self.lanes.len() {
            debug_assert!(self.lanes[x].is_empty(), "配る前の場札の列 {x} が空っぽじゃない！");
            let take = (x + 1).min(stock.len());
            let mut cards = stock.split_off(stock.len() - take);
            for card in &mut cards {
                card.direction = Direction::Down;
            }
            self.lanes[x].append(&mut cards);
            self.reveal_top(x);
        }
        debug!("場札に配ったよ！山札の残り: {} 枚", stock.len());
    }

    pub fn lanes(&self) -> &[Vec<Card>] {
        &self.lanes
    }

    pub fn lane(&self, x: usize) -> Option<&[Card]> {
        self.lanes.get(x).map(Vec::as_slice)
    }

    /// 列を直接いじる用。途中の局面を作る時に使う！
    pub fn lane_mut(&mut self, x: usize) -> Option<&mut Vec<Card>> {
        self.lanes.get_mut(x)
    }

    /// 列の数。
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.iter().all(Vec::is_empty)
    }

    /// `cards` を列 `x` に重ねられるかチェックする。存在しない列なら false。
    pub fn is_buildable(&self, x: usize, cards: &[Card]) -> bool {
        self.lane(x).is_some_and(|lane| can_build_on_lane(lane, cards))
    }

    /// 重ねられるなら `cards` を全部列 `x` に移して true。ダメなら何もしないで false。
    pub fn build(&mut self, x: usize, cards: &mut Vec<Card>) -> bool {
        if !self.is_buildable(x, cards) {
            warn!("場札の列 {} には重ねられないよ: {:?}", x, cards.iter().map(Card::to_ascii).collect::<Vec<_>>());
            return false;
        }
        let Some(lane) = self.lanes.get_mut(x) else {
            return false;
        };
        debug!("場札の列 {} に {} 枚重ねるよ！", x, cards.len());
        lane.append(cards);
        true
    }

    /// `card` (向きは無視) を探して、そこから上を全部持ち上げる。見つからなければ None。
    pub fn select(&mut self, card: &Card) -> Option<Selection> {
        self.lanes.iter_mut().enumerate().find_map(|(x, lane)| {
            let y = lane.iter().position(|c| c.is_same_card(card))?;
            Some(Selection {
                cards: lane.split_off(y),
                pile: StackType::Tableau,
                xy: Xy::new(x, y),
            })
        })
    }

    /// 列 `x` の一番上が裏向きなら表にする。めくったら true。
    pub fn reveal_top(&mut self, x: usize) -> bool {
        match self.lanes.get_mut(x).and_then(|lane| lane.last_mut()) {
            Some(top) if !top.is_face_up() => {
                top.direction = Direction::Up;
                true
            }
            _ => false,
        }
    }

    pub fn card_count(&self) -> usize {
        self.lanes.iter().map(Vec::len).sum()
    }

    /// 全部の列を空にして、カードを `stock` の後ろに移す。
    pub(crate) fn drain_into(&mut self, stock: &mut Vec<Card>) {
        for lane in &mut self.lanes {
            stock.append(lane);
        }
    }

    pub fn to_string(&self, visibility: Visibility) -> String {
        pile_to_string(&self.lanes, visibility)
    }
}
