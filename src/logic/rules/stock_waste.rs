//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

/// ストック（山札）からウェスト（捨て札）にカードを配れるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// 一度にめくる枚数。山札が足りなければ残り全部！
pub fn draw_count(stock_len: usize, draw_size: usize) -> usize {
    stock_len.min(draw_size)
}

/// ストック（山札）が空のときに、ウェスト（捨て札）からストックにカードを戻せるかチェックする。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}

/// 配り直しの上限チェック。`deals` は最初の配りを含めた回数、`deal_limit` が None なら無制限。
pub fn is_within_deal_limit(deals: usize, deal_limit: Option<usize>) -> bool {
    deal_limit.map_or(true, |limit| deals < limit)
}
