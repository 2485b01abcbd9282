// src/components/card.rs

// serde を使う宣言！カード情報をスナップショットにしたり保存したりする時に使うよ！
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::config::rules::{RANK_COUNT, SUIT_COUNT};

/// カードのスート（マーク）を表す列挙型だよ！♣️♦️❤️♠️
///
/// 並び順 (order) はアルファベット順: Clubs=0, Diamonds=1, Hearts=2, Spades=3。
/// この順番は Unicode の計算と組札 (Foundation) のインデックスにだけ使うよ。
/// ゲームのルール判定には使わないからね！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,    // ♣️
    Diamonds, // ♦️
    Hearts,   // ❤️
    Spades,   // ♠️
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// `order()` が 0 (Ace) から 12 (King) までの連続した値。並びのルール判定は全部こっちを使う！
/// `point()` は Unicode 用の値で、Queen が 13、King が 14 になる (12 はナイトの場所なんだ)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

/// カードの色（赤か黒か）だよ。場札 (Tableau) の色違いルールで使う！❤️🖤
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// カードの向き。Down は裏向き（正体が秘密）、Up は表向き。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Down,
    Up,
}

/// 文字列にする時に向きを尊重するかどうか。
///
/// - `Directed`: 裏向きのカードはカードの裏 (🂠) として表示する。
/// - `Undirected`: 向きに関係なく全部のカードの正体を表示する (デバッグ用！)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Directed,
    Undirected,
}

/// 全スートを order 順に並べた配列。デッキ生成とかで使うよ！
pub const ALL_SUITS: [Suit; SUIT_COUNT] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

/// 全ランクを Ace から King まで並べた配列。
pub const ALL_RANKS: [Rank; RANK_COUNT] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Suit {
    /// 連続した並び順 (0..=3)。
    pub fn order(self) -> usize {
        self as usize
    }

    /// order からスートを引く。範囲外なら None。
    pub fn from_order(order: usize) -> Option<Suit> {
        ALL_SUITS.get(order).copied()
    }

    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red, // ハートとダイヤは赤！
            Suit::Clubs | Suit::Spades => Color::Black,  // クラブとスペードは黒！
        }
    }

    pub fn to_ascii(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl Rank {
    /// 連続した並び順 (Ace=0 .. King=12)。ルール判定はこれ！
    pub fn order(self) -> usize {
        self as usize
    }

    pub fn from_order(order: usize) -> Option<Rank> {
        ALL_RANKS.get(order).copied()
    }

    /// Unicode の計算用の値。Jack=11 の次は Queen=13 (12 はナイト🐴が使ってる)。
    pub fn point(self) -> u32 {
        match self {
            Rank::Queen => 13,
            Rank::King => 14,
            rank => rank.order() as u32 + 1,
        }
    }

    /// `point()` の逆引き。ナイト (12) や 0, 15 みたいな空きセルは None。
    pub fn from_point(point: u32) -> Option<Rank> {
        match point {
            1..=11 => Rank::from_order(point as usize - 1),
            13 => Some(Rank::Queen),
            14 => Some(Rank::King),
            _ => None,
        }
    }

    pub fn to_ascii(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// カードそのものだよ！🃏
///
/// スートとランクは作った後に絶対変わらないから、フィールドは非公開にして getter だけ用意するよ。
/// 向き (`direction`) だけはめくったり伏せたりで変わるから `pub` にしてる！
/// 同じ (スート, ランク) のカードはデッキに1枚だけ。だからこのペアがカードの身元なんだ。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)] // Copy は付けないよ。カードは山から山へ「移動」するものだからね！
pub struct Card {
    suit: Suit,
    rank: Rank,
    pub direction: Direction,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank, direction: Direction) -> Self {
        Self { suit, rank, direction }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    pub fn is_face_up(&self) -> bool {
        self.direction == Direction::Up
    }

    /// 向きを無視して、同じカード (スートとランクが同じ) かどうか。
    /// 山の中からカードを探す時はこれを使うよ！
    pub fn is_same_card(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }

    /// "C10" とか "SA" みたいな ASCII の短い表記。
    pub fn to_ascii(&self) -> String {
        format!("{}{}", self.suit.to_ascii(), self.rank.to_ascii())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}
