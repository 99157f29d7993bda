//! fridge-list（CSV）の読み込み
//!
//! `name,amount,unit,use-by` の4列を FridgeList に変換する。
//! 列数が合わない行や数値・日付として読めない行は黙ってスキップし、
//! 期限切れの食材は索引に載せない。

use crate::error::{Error, Result};
use crate::types::{FridgeItem, FridgeList};
use chrono::{Local, NaiveDate};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// use-by列は日/月/年表記（例: 25/12/2024）
const USE_BY_FORMAT: &str = "%d/%m/%Y";

/// fridge-list CSVファイルを読み込む
pub fn load_fridge_list(path: &Path) -> Result<FridgeList> {
    let file = File::open(path).map_err(Error::FridgeListOpen)?;
    parse_fridge_list(file, Local::now().date_naive())
}

/// CSVを読み、期限内の食材だけを索引化する
///
/// use-byが `today` と同日の食材は期限切れ扱い（厳密に未来のみ有効）。
/// 有効な食材が1件もなければ `Error::FridgeListEmpty`。
pub fn parse_fridge_list<R: Read>(reader: R, today: NaiveDate) -> Result<FridgeList> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut fridge = FridgeList::new();

    for record in csv_reader.records() {
        // 読めない行も列数不一致と同じ扱いでスキップ
        let record = match record {
            Ok(record) => record,
            Err(_) => continue,
        };

        if record.len() != 4 {
            continue;
        }

        let amount = match record[1].parse::<f64>() {
            Ok(amount) => amount,
            Err(_) => continue,
        };

        // 日/月/年として明示的にパースする。ロケール依存の解釈に任せると
        // 月日が入れ替わるため、フォーマットを固定する
        let use_by = match NaiveDate::parse_from_str(&record[3], USE_BY_FORMAT) {
            Ok(date) => date,
            // パース失敗は期限切れと同じ扱い
            Err(_) => continue,
        };

        // 期限内のものだけ載せる。当日は期限切れ扱い
        if use_by > today {
            fridge.insert(FridgeItem {
                name: record[0].to_string(),
                amount,
                unit: record[2].to_string(),
                use_by,
            });
        }
    }

    if fridge.is_empty() {
        return Err(Error::FridgeListEmpty);
    }

    Ok(fridge)
}
