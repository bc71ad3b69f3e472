//! Stock and sale breakdowns of a product
//!
//! `stock_info` / `sale_info` hold `{colour: {size: count}}` documents.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StockSummary {
    pub color: BTreeMap<String, Value>,
    pub size: BTreeMap<String, Value>,
}

impl StockSummary {
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

type Grid = Map<String, Value>;

fn parse_grid(detail: &str) -> Result<Grid, serde_json::Error> {
    if detail.trim().is_empty() {
        return Ok(Grid::new());
    }
    serde_json::from_str(detail)
}

fn cells(row: &Value) -> impl Iterator<Item = (&String, f64)> {
    row.as_object()
        .into_iter()
        .flat_map(|sizes| sizes.iter())
        .map(|(size, n)| (size, n.as_f64().unwrap_or(0.0)))
}

/// Whole numbers stay integers in the output
fn number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

/// Totals per colour and per size
pub fn summarize(detail: &str) -> Result<StockSummary, serde_json::Error> {
    let grid = parse_grid(detail)?;
    let mut color: BTreeMap<String, f64> = BTreeMap::new();
    let mut size: BTreeMap<String, f64> = BTreeMap::new();
    for (colour, row) in &grid {
        for (size_name, n) in cells(row) {
            *color.entry(colour.clone()).or_default() += n;
            *size.entry(size_name.clone()).or_default() += n;
        }
    }
    Ok(StockSummary {
        color: color.into_iter().map(|(k, v)| (k, number(v))).collect(),
        size: size.into_iter().map(|(k, v)| (k, number(v))).collect(),
    })
}

/// Advised stock per cell: `cell * advise_total / sale_sum`, two decimals.
/// Every cell is 0 when there were no sales.
pub fn advise_stock(detail: &str, sale_sum: i64, advise_total: i64) -> Result<String, serde_json::Error> {
    let grid = parse_grid(detail)?;
    let advised: Grid = grid
        .iter()
        .map(|(colour, row)| {
            let sizes: Grid = cells(row)
                .map(|(size_name, n)| {
                    let value = if sale_sum == 0 {
                        Value::from(0)
                    } else {
                        Value::from(format!("{:.2}", n * advise_total as f64 / sale_sum as f64))
                    };
                    (size_name.clone(), value)
                })
                .collect();
            (colour.clone(), Value::Object(sizes))
        })
        .collect();
    serde_json::to_string_pretty(&advised)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL: &str = r#"{"red":{"S":2,"M":3},"blue":{"M":5}}"#;

    #[test]
    fn test_summarize_totals() {
        let summary = summarize(DETAIL).unwrap();
        assert_eq!(summary.color["red"], Value::from(5));
        assert_eq!(summary.color["blue"], Value::from(5));
        assert_eq!(summary.size["M"], Value::from(8));
        assert_eq!(summary.size["S"], Value::from(2));
    }

    #[test]
    fn test_empty_detail_is_empty_summary() {
        assert_eq!(summarize("").unwrap(), StockSummary::default());
        assert!(summarize("not json").is_err());
    }

    #[test]
    fn test_advise_stock() {
        let advised: Value = serde_json::from_str(&advise_stock(DETAIL, 10, 3).unwrap()).unwrap();
        assert_eq!(advised["red"]["S"], Value::from("0.60"));
        assert_eq!(advised["blue"]["M"], Value::from("1.50"));

        let advised: Value = serde_json::from_str(&advise_stock(DETAIL, 0, 3).unwrap()).unwrap();
        assert_eq!(advised["red"]["M"], Value::from(0));
    }
}
