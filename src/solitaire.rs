// src/solitaire.rs

// === ゲーム本体！ ===
// 山札 (stock)、捨て札 (waste)、組札 (foundation)、場札 (tableau)、それと持ち上げ中のカード (selected)。
// 52枚のカードはいつでもこのどれか1か所だけにある！カードは Vec から Vec へ「移動」するだけで、
// コピーが増えたり消えたりはしないよ。✨
use std::fmt;
use std::mem;

use log::{debug, error, info, warn};

use crate::components::card::{Card, Direction, Visibility};
use crate::components::foundation::Foundation;
use crate::components::game_state::GameStatus;
use crate::components::stack::{Destination, Selection, StackType, Xy};
use crate::components::tableau::Tableau;
use crate::config::rules::{CARD_BACK, JOKER};
use crate::config::SolitaireConfig;
use crate::error::{Result, SolitaireError};
use crate::logic::codec::card_to_string;
use crate::logic::deck::{new_deck, shuffle, time_seeded_random, RandomSource};
use crate::logic::rules::{can_deal_from_stock, can_reset_stock_from_waste, draw_count, is_directed, is_within_deal_limit};
use crate::protocol::{cards_to_data, GameStateData, SelectionData};

/// クロンダイクのゲーム1つ分だよ！🃏
pub struct Solitaire {
    draw_size: usize,
    deal_limit: Option<usize>,
    /// 山札を通した回数 (最初の配りも含むから 1 から始まる)。
    deals: usize,
    foundation: Foundation,
    stock: Vec<Card>,
    waste: Vec<Card>,
    tableau: Tableau,
    selected: Option<Selection>,
    wins: u32,
    random: RandomSource,
}

// 乱数のクロージャは Debug できないから手書き！
impl fmt::Debug for Solitaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solitaire")
            .field("draw_size", &self.draw_size)
            .field("deal_limit", &self.deal_limit)
            .field("deals", &self.deals)
            .field("foundation", &self.foundation)
            .field("stock", &self.stock)
            .field("waste", &self.waste)
            .field("tableau", &self.tableau)
            .field("selected", &self.selected)
            .field("wins", &self.wins)
            .finish_non_exhaustive()
    }
}

impl Solitaire {
    /// 新しいゲームを始める。
    ///
    /// 1. 52枚のデッキを裏向きで作る。
    /// 2. `random` でシャッフルする。
    /// 3. 空の場札を `tableau_size` 列作って、山札から配る。
    ///
    /// 設定がおかしい (列数やめくる枚数が 0) ならエラー！
    pub fn new(config: SolitaireConfig, mut random: RandomSource) -> Result<Self> {
        config.validate()?;

        let mut stock = new_deck(Direction::Down);
        shuffle(&mut stock, &mut *random);
        let mut tableau = Tableau::new(config.tableau_size)?;
        tableau.deal(&mut stock);

        info!(
            "🃏 新しいゲーム！ 列: {}, めくる枚数: {}, 山札: {} 枚",
            config.tableau_size,
            config.draw_size,
            stock.len()
        );
        Ok(Self {
            draw_size: config.draw_size,
            deal_limit: config.deal_limit,
            deals: 1,
            foundation: Foundation::new(),
            stock,
            waste: Vec::new(),
            tableau,
            selected: None,
            wins: config.wins,
            random,
        })
    }

    /// デフォルト設定 (3枚めくり、7列) で、乱数だけ指定する。
    pub fn with_random(random: RandomSource) -> Result<Self> {
        Self::new(SolitaireConfig::default(), random)
    }

    /// デフォルト設定と、時刻シードの乱数で始める。
    pub fn new_default() -> Result<Self> {
        Self::with_random(time_seeded_random())
    }

    // --- アクセサ ---

    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    pub fn foundation(&self) -> &Foundation {
        &self.foundation
    }

    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    pub fn selected(&self) -> Option<&Selection> {
        self.selected.as_ref()
    }

    pub fn draw_size(&self) -> usize {
        self.draw_size
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn deals(&self) -> usize {
        self.deals
    }

    pub fn deal_limit(&self) -> Option<usize> {
        self.deal_limit
    }

    // --- 操作 ---

    /// プレイヤーがカードを指した！👉
    ///
    /// まず今の選択を元に戻してから、指されたカードがどこにあるかで動きが変わるよ：
    /// - 山札の一番上: `draw_size` 枚めくって捨て札へ。選択はなし。
    /// - 捨て札の一番上: その1枚を選択。
    /// - 組札か場札: そのカードから上を全部選択。ただし裏向きの1枚だけなら、めくるだけ。
    ///
    /// 山札や捨て札の一番上じゃないカードは何もしない。どこにも無いカードはエラー！
    pub fn point(&mut self, card: &Card) -> Result<Option<&Selection>> {
        self.deselect();

        if let Some(y) = position_of(&self.stock, card) {
            if y + 1 == self.stock.len() {
                self.draw();
            }
            return Ok(None);
        }

        if let Some(y) = position_of(&self.waste, card) {
            if y + 1 != self.waste.len() {
                debug!("捨て札の一番上じゃない {} は選べないよ", card);
                return Ok(None);
            }
            let cards = self.waste.split_off(y);
            debug!("捨て札から {} を選択！", card);
            self.selected = Some(Selection { cards, pile: StackType::Waste, xy: Xy::new(0, y) });
            return Ok(self.selected.as_ref());
        }

        let found = self.foundation.select(card).or_else(|| self.tableau.select(card));
        let Some(mut selection) = found else {
            error!("指されたカード {} がどこにも見つからない！", card);
            return Err(SolitaireError::MissingCard { card: card.clone() });
        };

        if let [only] = selection.cards.as_mut_slice() {
            if !only.is_face_up() {
                only.direction = Direction::Up;
                debug!("{} {} の {} をめくったよ", selection.pile, selection.xy, only);
                self.restore(selection);
                return Ok(None);
            }
        }

        debug!("{} {} から {} 枚選択！", selection.pile, selection.xy, selection.cards.len());
        self.selected = Some(selection);
        Ok(self.selected.as_ref())
    }

    /// 選択中のカードを `destination` に置けるか？選択がなければ false。
    pub fn is_buildable(&self, destination: Destination) -> bool {
        let Some(selection) = &self.selected else {
            return false;
        };
        match destination {
            Destination::Foundation => self.foundation.is_buildable(&selection.cards),
            Destination::Tableau(x) => self.tableau.is_buildable(x, &selection.cards),
        }
    }

    /// 選択中のカードを `destination` に置く。置けたら true で、選択は空になる。
    /// 置けなかったら選択はそのまま (元の山には戻さない)。
    pub fn build(&mut self, destination: Destination) -> bool {
        let Some(selection) = self.selected.as_mut() else {
            debug!("選択してないから置けないよ");
            return false;
        };
        let built = match destination {
            Destination::Foundation => self.foundation.build(&mut selection.cards),
            Destination::Tableau(x) => self.tableau.build(x, &mut selection.cards),
        };
        if built && selection.cards.is_empty() {
            self.selected = None;
        }
        if built && self.is_won() {
            info!("🏆 全部の組札が完成！勝ち！");
        }
        built
    }

    /// 選択中のカードを元の山に戻す。選択してなければ何もしない。
    pub fn deselect(&mut self) {
        if let Some(selection) = self.selected.take() {
            self.restore(selection);
        }
    }

    /// 山札が空なら、捨て札を裏返して山札に戻す (配り直し)。配り直せたら true。
    pub fn deal(&mut self) -> bool {
        self.deselect();

        if !can_reset_stock_from_waste(self.stock.is_empty(), self.waste.is_empty()) {
            return false;
        }
        if !is_within_deal_limit(self.deals, self.deal_limit) {
            warn!("配り直しは {:?} 回までだよ！", self.deal_limit);
            return false;
        }

        let mut cards = mem::take(&mut self.waste);
        cards.reverse();
        for card in &mut cards {
            card.direction = Direction::Down;
        }
        self.stock.append(&mut cards);
        self.deals += 1;
        debug!("配り直し！ {} 回目、山札: {} 枚", self.deals, self.stock.len());
        true
    }

    /// 全部のカードを山札に集めて、シャッフルして配り直す。勝ってたら勝利数を1増やす。
    pub fn reset(&mut self) {
        self.deselect();
        if self.is_won() {
            self.wins += 1;
            info!("🏆 勝利数: {}", self.wins);
        }

        self.foundation.drain_into(&mut self.stock);
        self.tableau.drain_into(&mut self.stock);
        self.stock.append(&mut self.waste);
        for card in &mut self.stock {
            card.direction = Direction::Down;
        }
        shuffle(&mut self.stock, &mut *self.random);
        self.tableau.deal(&mut self.stock);
        self.deals = 1;
        info!("🔄 リセット！ 山札: {} 枚", self.stock.len());
    }

    pub fn is_won(&self) -> bool {
        self.foundation.is_built()
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from_won(self.is_won())
    }

    /// 持ち主ごとのカードの枚数の合計。いつでも 52 枚のはず！
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.foundation.card_count()
            + self.tableau.card_count()
            + self.selected.as_ref().map_or(0, |selection| selection.cards.len())
    }

    /// 外に渡す用のスナップショット。
    pub fn snapshot(&self) -> GameStateData {
        GameStateData {
            stock: cards_to_data(&self.stock),
            waste: cards_to_data(&self.waste),
            foundation: self.foundation.pillars().iter().map(|pillar| cards_to_data(pillar)).collect(),
            tableau: self.tableau.lanes().iter().map(|lane| cards_to_data(lane)).collect(),
            selected: self.selected.as_ref().map(SelectionData::from),
            draw_size: self.draw_size,
            deals: self.deals,
            deal_limit: self.deal_limit,
            wins: self.wins,
            status: self.status(),
        }
    }

    /// 盤面を文字列にする。上から組札、場札、`山札 リザーブ 捨て札`、選択中のカード。
    ///
    /// リザーブは捨て札の上 `draw_size` 枚 (いつも表で見せる)。その下の古い捨て札は
    /// `Directed` なら裏、`Undirected` なら表で描く。空っぽの所はジョーカー 🃟。
    pub fn to_string(&self, visibility: Visibility) -> String {
        let foundation = self.foundation.to_string(visibility);
        let tableau = self.tableau.to_string(visibility);
        let stock = card_to_string(visibility, &self.stock);

        let (older, reserve) = self.waste.split_at(self.waste.len().saturating_sub(self.draw_size));
        let reserve = or_joker(card_to_string(Visibility::Directed, reserve));
        let waste = or_joker(if is_directed(visibility) {
            CARD_BACK.to_string().repeat(older.len())
        } else {
            card_to_string(visibility, older)
        });

        let selected = match &self.selected {
            Some(selection) => format!(
                "{} from {} {}",
                card_to_string(visibility, &selection.cards),
                selection.pile,
                selection.xy
            ),
            None => String::new(),
        };

        format!("{foundation}\n{tableau}\n{stock} {reserve} {waste}\n{selected}")
            .trim()
            .to_string()
    }

    /// 山札の一番上から `draw_size` 枚めくって、逆順で捨て札に積む。
    fn draw(&mut self) {
        if !can_deal_from_stock(self.stock.is_empty()) {
            return;
        }
        let count = draw_count(self.stock.len(), self.draw_size);
        let mut hand = self.stock.split_off(self.stock.len() - count);
        hand.reverse();
        for card in &mut hand {
            card.direction = Direction::Up;
        }
        self.waste.append(&mut hand);
        debug!("山札から {} 枚めくったよ。残り {} 枚", count, self.stock.len());
    }

    /// 選択されたカードを、来た山の上に戻す。
    fn restore(&mut self, mut selection: Selection) {
        let origin = match selection.pile {
            StackType::Waste => Some(&mut self.waste),
            StackType::Foundation => self.foundation.pillar_at_mut(selection.xy.x),
            StackType::Tableau => self.tableau.lane_mut(selection.xy.x),
        };
        match origin {
            Some(pile) => pile.append(&mut selection.cards),
            None => error!("選択の戻り先 {} {} が見つからない！", selection.pile, selection.xy),
        }
    }
}

/// 向きを無視して `card` の位置を探す。
fn position_of(pile: &[Card], card: &Card) -> Option<usize> {
    pile.iter().position(|c| c.is_same_card(card))
}

/// 空文字列ならジョーカー1枚にする。
fn or_joker(cards: String) -> String {
    if cards.is_empty() {
        JOKER.to_string()
    } else {
        cards
    }
}
