//! Raw DexScreener wire types and their conversion into domain pairs.
//!
//! Every numeric field the reports depend on decodes through [`num_or_zero`]:
//! absent, null and malformed values become `0.0`, so a degenerate record
//! weighs nothing instead of aborting a report.
//!
//! Defaulting rules, per field:
//! - `baseToken.symbol` / `quoteToken.symbol` -> `"?"` (trimmed)
//! - `dexId`                                  -> `"unknown"` (trimmed)
//! - `liquidity.usd` / `volume.h24`           -> `0.0`

use crate::reports::TradingPair;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// Top-level body of `/latest/dex/tokens/{address}`.
#[derive(Debug, Default, Deserialize)]
pub struct TokenPairsResponse {
    /// Absent or `null` when DexScreener knows no pools for the token.
    #[serde(default)]
    pub pairs: Option<Vec<PairRaw>>,
}

impl TokenPairsResponse {
    /// Decoded pairs in upstream order; empty when `pairs` was absent.
    pub fn into_pairs(self) -> Vec<TradingPair> {
        self.pairs
            .unwrap_or_default()
            .iter()
            .map(PairRaw::to_pair)
            .collect()
    }
}

/// One element of the upstream `pairs` array. Only the fields the reports
/// read are mirrored; everything else is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairRaw {
    #[serde(default)]
    pub base_token: Option<TokenRaw>,
    #[serde(default)]
    pub quote_token: Option<TokenRaw>,
    #[serde(default)]
    pub dex_id: Option<String>,
    #[serde(default)]
    pub liquidity: Option<LiquidityRaw>,
    #[serde(default)]
    pub volume: Option<VolumeRaw>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TokenRaw {
    #[serde(default)]
    pub symbol: Option<String>,
}

/// DexScreener serves liquidity as an object; only the USD leg is read.
#[derive(Debug, Default, Deserialize)]
pub struct LiquidityRaw {
    #[serde(default)]
    pub usd: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VolumeRaw {
    #[serde(default)]
    pub h24: Option<Value>,
}

impl PairRaw {
    /// Convert a raw record into a [`TradingPair`] with the documented
    /// per-field defaults.
    pub fn to_pair(&self) -> TradingPair {
        TradingPair {
            base_symbol: symbol_or_default(&self.base_token),
            quote_symbol: symbol_or_default(&self.quote_token),
            dex_id: self
                .dex_id
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or("unknown")
                .to_string(),
            liquidity_usd: num_or_zero(
                "liquidity.usd",
                self.liquidity.as_ref().and_then(|l| l.usd.as_ref()),
            ),
            volume_h24: num_or_zero(
                "volume.h24",
                self.volume.as_ref().and_then(|v| v.h24.as_ref()),
            ),
        }
    }
}

fn symbol_or_default(token: &Option<TokenRaw>) -> String {
    token
        .as_ref()
        .and_then(|t| t.symbol.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("?")
        .to_string()
}

/// Decode a numeric value that DexScreener serves either as a JSON number or
/// a numeric string. Anything else counts as zero; a present-but-unparseable
/// value is noted at debug level as a data-quality signal.
fn num_or_zero(field: &str, value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Null) => 0.0,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_else(|_| {
            debug!("[DEXSCREENER] Unparseable {} value: {:?}", field, s);
            0.0
        }),
        Some(other) => {
            debug!("[DEXSCREENER] Unexpected {} value: {}", field, other);
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Vec<TradingPair> {
        serde_json::from_str::<TokenPairsResponse>(json)
            .unwrap()
            .into_pairs()
    }

    #[test]
    fn test_decodes_full_pair() {
        let pairs = decode(
            r#"{
                "schemaVersion": "1.0.0",
                "pairs": [{
                    "chainId": "solana",
                    "dexId": "raydium",
                    "url": "https://dexscreener.com/solana/abc",
                    "pairAddress": "abc",
                    "baseToken": {"address": "w131", "name": "DRIP", "symbol": "DRIP"},
                    "quoteToken": {"address": "So11", "name": "Wrapped SOL", "symbol": "SOL"},
                    "priceUsd": "0.0123",
                    "liquidity": {"usd": 10000.5, "base": 1, "quote": 2},
                    "volume": {"h24": 5000, "h6": 100, "h1": 10, "m5": 1},
                    "fdv": 1234567
                }]
            }"#,
        );

        assert_eq!(pairs.len(), 1);
        let pair = &pairs[0];
        assert_eq!(pair.base_symbol, "DRIP");
        assert_eq!(pair.quote_symbol, "SOL");
        assert_eq!(pair.dex_id, "raydium");
        assert_eq!(pair.liquidity_usd, 10000.5);
        assert_eq!(pair.volume_h24, 5000.0);
    }

    #[test]
    fn test_numeric_strings_parse() {
        let pairs = decode(
            r#"{"pairs": [{
                "dexId": "orca",
                "liquidity": {"usd": "2000.25"},
                "volume": {"h24": " 8000 "}
            }]}"#,
        );

        assert_eq!(pairs[0].liquidity_usd, 2000.25);
        assert_eq!(pairs[0].volume_h24, 8000.0);
    }

    #[test]
    fn test_missing_fields_use_documented_defaults() {
        let pairs = decode(r#"{"pairs": [{}]}"#);

        let pair = &pairs[0];
        assert_eq!(pair.base_symbol, "?");
        assert_eq!(pair.quote_symbol, "?");
        assert_eq!(pair.dex_id, "unknown");
        assert_eq!(pair.liquidity_usd, 0.0);
        assert_eq!(pair.volume_h24, 0.0);
    }

    #[test]
    fn test_malformed_numerics_become_zero() {
        let pairs = decode(
            r#"{"pairs": [{
                "liquidity": {"usd": "not a number"},
                "volume": {"h24": null}
            }]}"#,
        );

        assert_eq!(pairs[0].liquidity_usd, 0.0);
        assert_eq!(pairs[0].volume_h24, 0.0);
    }

    #[test]
    fn test_blank_symbols_fall_back() {
        let pairs = decode(
            r#"{"pairs": [{
                "baseToken": {"symbol": "   "},
                "quoteToken": {"symbol": " USDC "},
                "dexId": "  "
            }]}"#,
        );

        assert_eq!(pairs[0].base_symbol, "?");
        assert_eq!(pairs[0].quote_symbol, "USDC");
        assert_eq!(pairs[0].dex_id, "unknown");
    }

    #[test]
    fn test_absent_and_null_pairs_decode_to_empty() {
        assert!(decode(r#"{"schemaVersion": "1.0.0"}"#).is_empty());
        assert!(decode(r#"{"pairs": null}"#).is_empty());
        assert!(decode(r#"{"pairs": []}"#).is_empty());
    }
}
