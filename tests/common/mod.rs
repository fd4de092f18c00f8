//! Common test utilities for integration tests.
//!
//! Record fixtures, a CoinLore-shaped JSON body builder and a subscriber
//! spy shared by the integration tests.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//! use common::{make_records, SnapshotSpy};
//!
//! let spy = SnapshotSpy::new();
//! view.subscribe(spy.subscriber());
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::{Arc, Mutex};

use coinpage::collection::{ViewSnapshot, ViewSubscriber};
use coinpage::models::TickerRecord;

/// Creates `n` records named `Coin01`, `Coin02`, ... with ids `1..=n`.
pub fn make_records(n: usize) -> Vec<TickerRecord> {
    (1..=n)
        .map(|i| {
            TickerRecord::new(
                i.to_string(),
                format!("Coin{:02}", i),
                format!("C{}", i),
                format!("{}.5", i),
                "21000000",
            )
        })
        .collect()
}

/// Names of the given records, in order.
pub fn names(records: &[TickerRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

/// Builds a listing body in the shape the CoinLore tickers endpoint returns.
pub fn listing_json(records: &[TickerRecord]) -> String {
    let data: Vec<serde_json::Value> = records
        .iter()
        .map(|r| {
            serde_json::json!({
                "id": r.id,
                "symbol": r.symbol,
                "name": r.name,
                "nameid": r.name.to_lowercase(),
                "rank": 1,
                "price_usd": r.price_usd,
                "percent_change_24h": "0.10",
                "market_cap_usd": "1000.00",
                "tsupply": r.total_supply,
                "msupply": ""
            })
        })
        .collect();
    serde_json::json!({
        "data": data,
        "info": { "coins_num": records.len(), "time": 1700000000u64 }
    })
    .to_string()
}

/// Records every snapshot a view publishes.
#[derive(Clone, Default)]
pub struct SnapshotSpy {
    seen: Arc<Mutex<Vec<ViewSnapshot>>>,
}

impl SnapshotSpy {
    pub fn new() -> Self {
        Self::default()
    }

    /// A subscriber that appends to this spy.
    pub fn subscriber(&self) -> impl ViewSubscriber + 'static {
        let seen = Arc::clone(&self.seen);
        move |snapshot: &ViewSnapshot| seen.lock().unwrap().push(snapshot.clone())
    }

    pub fn snapshots(&self) -> Vec<ViewSnapshot> {
        self.seen.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<ViewSnapshot> {
        self.seen.lock().unwrap().last().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_records() {
        let records = make_records(3);
        assert_eq!(names(&records), vec!["Coin01", "Coin02", "Coin03"]);
        assert_eq!(records[2].id, "3");
    }

    #[test]
    fn test_listing_json_has_data_array() {
        let body = listing_json(&make_records(2));
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["data"].as_array().unwrap().len(), 2);
        assert_eq!(value["data"][1]["name"], "Coin02");
    }

    #[test]
    fn test_spy_collects_snapshots() {
        let spy = SnapshotSpy::new();
        let mut subscriber = spy.subscriber();
        subscriber.on_change(&ViewSnapshot::default());
        assert_eq!(spy.count(), 1);
        assert!(spy.last().is_some());
    }
}
