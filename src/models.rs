use serde::{Deserialize, Deserializer, Serialize};

/// Helper to deserialize a field that the API sends as either a string or a number.
///
/// Numbers are kept in their textual form so the value reaches the formatter
/// exactly as it was received. `null` becomes an empty string, which the
/// formatter renders as `NaN`.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number or null")
        }

        fn visit_unit<E>(self) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }

        fn visit_none<E>(self) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(TextVisitor)
}

/// One asset in the ticker listing.
///
/// Records are never mutated after they are received; the collection view
/// only slices the sequence they arrive in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TickerRecord {
    /// Opaque identifier, unique per record
    #[serde(deserialize_with = "deserialize_text")]
    pub id: String,
    /// Display name (e.g. "Bitcoin")
    pub name: String,
    /// Short code (e.g. "BTC")
    pub symbol: String,
    /// Price in USD as sent by the API, parsed only when formatted
    #[serde(deserialize_with = "deserialize_text")]
    pub price_usd: String,
    /// Total supply as sent by the API, parsed only when formatted
    #[serde(rename = "tsupply", deserialize_with = "deserialize_text")]
    pub total_supply: String,
}

impl TickerRecord {
    /// Create a record from its raw display fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
        price_usd: impl Into<String>,
        total_supply: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into(),
            price_usd: price_usd.into(),
            total_supply: total_supply.into(),
        }
    }
}

/// Listing metadata that accompanies the ticker array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListingInfo {
    /// Total number of coins known to the API
    #[serde(default)]
    pub coins_num: Option<u64>,
    /// Server timestamp of the listing (unix seconds)
    #[serde(default)]
    pub time: Option<u64>,
}

/// Response envelope of the ticker listing endpoint.
///
/// The ordered array lives under the top-level `data` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TickerListResponse {
    pub data: Vec<TickerRecord>,
    #[serde(default)]
    pub info: Option<ListingInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ticker_record() {
        let json = r#"{
            "id": "90",
            "symbol": "BTC",
            "name": "Bitcoin",
            "nameid": "bitcoin",
            "rank": 1,
            "price_usd": "67123.45",
            "percent_change_24h": "-0.52",
            "tsupply": "19700000",
            "msupply": "21000000"
        }"#;

        let record: TickerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "90");
        assert_eq!(record.name, "Bitcoin");
        assert_eq!(record.symbol, "BTC");
        assert_eq!(record.price_usd, "67123.45");
        assert_eq!(record.total_supply, "19700000");
    }

    #[test]
    fn test_deserialize_numeric_fields_as_text() {
        let json = r#"{
            "id": 80,
            "symbol": "ETH",
            "name": "Ethereum",
            "price_usd": 3456.7,
            "tsupply": 120000000
        }"#;

        let record: TickerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "80");
        assert_eq!(record.price_usd, "3456.7");
        assert_eq!(record.total_supply, "120000000");
    }

    #[test]
    fn test_deserialize_null_values_as_empty_text() {
        let json = r#"{
            "id": "2",
            "symbol": "DEAD",
            "name": "Delisted",
            "price_usd": null,
            "tsupply": null
        }"#;

        let record: TickerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.price_usd, "");
        assert_eq!(record.total_supply, "");
        assert_eq!(crate::format::format_price(&record.price_usd), "$NaN");
        assert_eq!(
            crate::format::format_supply(
                &record.total_supply,
                &record.symbol,
                crate::format::NumberFormat::default()
            ),
            "NaN DEAD"
        );
    }

    #[test]
    fn test_deserialize_missing_field_fails() {
        let json = r#"{"id": "1", "name": "NoPrice", "symbol": "NP", "tsupply": "1"}"#;
        assert!(serde_json::from_str::<TickerRecord>(json).is_err());
    }

    #[test]
    fn test_deserialize_listing_preserves_order() {
        let json = r#"{
            "data": [
                {"id": "3", "name": "C", "symbol": "C", "price_usd": "1", "tsupply": "1"},
                {"id": "1", "name": "A", "symbol": "A", "price_usd": "1", "tsupply": "1"},
                {"id": "2", "name": "B", "symbol": "B", "price_usd": "1", "tsupply": "1"}
            ],
            "info": {"coins_num": 12000, "time": 1700000000}
        }"#;

        let response: TickerListResponse = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = response.data.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert_eq!(response.info.unwrap().coins_num, Some(12000));
    }

    #[test]
    fn test_deserialize_listing_without_info() {
        let json = r#"{"data": []}"#;
        let response: TickerListResponse = serde_json::from_str(json).unwrap();
        assert!(response.data.is_empty());
        assert!(response.info.is_none());
    }

    #[test]
    fn test_ticker_record_new() {
        let record = TickerRecord::new("1", "Bitcoin", "BTC", "1234.5", "21000000");
        assert_eq!(record.symbol, "BTC");
        assert_eq!(record.total_supply, "21000000");
    }
}
