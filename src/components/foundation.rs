// src/components/foundation.rs

use log::{debug, warn};
use serde::{Serialize, Deserialize};

use crate::components::card::{Card, Suit, Visibility, ALL_SUITS};
use crate::components::stack::{Selection, StackType, Xy};
use crate::config::rules::SUIT_COUNT;
use crate::logic::pile::pile_to_string;
use crate::logic::rules::{can_build_on_pillar, check_win_condition};

/// 組札 (Foundation) だよ！スートごとに1本ずつ、合計4本の柱 (pillar) がある。🏛️
///
/// 柱のインデックスはスートの order (Clubs=0, Diamonds=1, Hearts=2, Spades=3)。
/// 各柱は下がエース、上に向かって 2, 3, ... キング。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Foundation {
    pillars: [Vec<Card>; SUIT_COUNT],
}

impl Foundation {
    /// 空っぽの組札を作る。
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pillars(&self) -> &[Vec<Card>] {
        &self.pillars
    }

    pub fn pillar(&self, suit: Suit) -> &[Card] {
        &self.pillars[suit.order()]
    }

    /// 柱を直接いじる用。テストで途中の局面を作る時とかに使う！
    pub fn pillar_mut(&mut self, suit: Suit) -> &mut Vec<Card> {
        &mut self.pillars[suit.order()]
    }

    pub(crate) fn pillar_at_mut(&mut self, x: usize) -> Option<&mut Vec<Card>> {
        self.pillars.get_mut(x)
    }

    /// `cards` を (先頭のカードのスートの柱に) 積めるかチェックする。
    pub fn is_buildable(&self, cards: &[Card]) -> bool {
        match cards.first() {
            Some(lead) => can_build_on_pillar(self.pillar(lead.suit()), cards),
            None => false,
        }
    }

    /// 積めるなら `cards` を全部柱に移して true。積めなければ何もしないで false。
    pub fn build(&mut self, cards: &mut Vec<Card>) -> bool {
        if !self.is_buildable(cards) {
            warn!("組札には積めないよ: {:?}", cards.iter().map(Card::to_ascii).collect::<Vec<_>>());
            return false;
        }
        let Some(suit) = cards.first().map(Card::suit) else {
            return false;
        };
        debug!("組札 {:?} に {} 枚積むよ！", suit, cards.len());
        self.pillar_mut(suit).append(cards);
        true
    }

    /// 4本全部がキングまで積み上がった？🏆
    pub fn is_built(&self) -> bool {
        check_win_condition(&self.pillars)
    }

    pub fn is_pillar_built(&self, suit: Suit) -> bool {
        crate::logic::rules::is_pillar_built(self.pillar(suit))
    }

    /// `card` (向きは無視) を探して、そこから上を全部持ち上げる。見つからなければ None。
    pub fn select(&mut self, card: &Card) -> Option<Selection> {
        self.pillars.iter_mut().enumerate().find_map(|(x, pillar)| {
            let y = pillar.iter().position(|c| c.is_same_card(card))?;
            Some(Selection {
                cards: pillar.split_off(y),
                pile: StackType::Foundation,
                xy: Xy::new(x, y),
            })
        })
    }

    /// 組札から一番上のカードを1枚取り出す (worry back)。柱が空なら None。
    pub fn worry_back(&mut self, suit: Suit) -> Option<Card> {
        self.pillar_mut(suit).pop()
    }

    pub fn card_count(&self) -> usize {
        self.pillars.iter().map(Vec::len).sum()
    }

    /// 全部の柱を空にして、カードを `stock` の後ろに移す。
    pub(crate) fn drain_into(&mut self, stock: &mut Vec<Card>) {
        for suit in ALL_SUITS {
            stock.append(self.pillar_mut(suit));
        }
    }

    /// 柱を1列ずつ並べたグリッド文字列。全部空ならジョーカー4枚。
    pub fn to_string(&self, visibility: Visibility) -> String {
        pile_to_string(&self.pillars, visibility)
    }
}
