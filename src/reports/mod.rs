//! Report generation over DexScreener LP pairs.
//!
//! Two reports are produced: LP pairs ranked by 24H volume, and LP pairs
//! ranked by the 24H Volume ÷ Liquidity ratio. Both share the same shape:
//! fetch, drop degenerate records, stable-sort descending by the metric,
//! render a medal-ranked block per pair.

use crate::apis::dexscreener::{ApiError, DexScreenerClient};
use crate::telegram::formatters::{format_pct, format_usd};
use log::error;
use std::cmp::Ordering;

/// Quote symbol of the pool singled out by the volume summary.
const SUMMARY_QUOTE_SYMBOL: &str = "SOL";

/// Dex id of the pool singled out by the volume summary.
const SUMMARY_DEX_ID: &str = "raydium";

// ============================================================================
// DATA MODEL
// ============================================================================

/// One liquidity pool pairing for a token, as reported by DexScreener.
#[derive(Debug, Clone, PartialEq)]
pub struct TradingPair {
    pub base_symbol: String,
    pub quote_symbol: String,
    pub dex_id: String,
    /// Pool liquidity in USD; `0.0` when the upstream field was absent or
    /// malformed.
    pub liquidity_usd: f64,
    /// 24-hour trade volume in USD; `0.0` when absent or malformed.
    pub volume_h24: f64,
}

/// A pair together with its derived ranking metric and dense 0-based rank.
#[derive(Debug, Clone)]
pub struct RankedPair {
    pub pair: TradingPair,
    pub metric: f64,
    pub rank: usize,
}

// ============================================================================
// RANKING
// ============================================================================

/// Medal for the top three ranks, money bag for the rest.
pub fn rank_icon(rank: usize) -> &'static str {
    match rank {
        0 => "🥇",
        1 => "🥈",
        2 => "🥉",
        _ => "💰",
    }
}

/// Pairs eligible for volume ranking, sorted descending by 24H volume.
/// Pairs without positive liquidity are dropped.
pub fn rank_by_volume(pairs: &[TradingPair]) -> Vec<RankedPair> {
    let eligible = pairs
        .iter()
        .filter(|p| p.liquidity_usd > 0.0)
        .map(|p| RankedPair {
            pair: p.clone(),
            metric: p.volume_h24,
            rank: 0,
        })
        .collect();

    sort_descending(eligible)
}

/// Pairs eligible for ratio ranking, sorted descending by
/// volume ÷ liquidity. Pairs need positive liquidity and positive volume so
/// the division is always defined.
pub fn rank_by_ratio(pairs: &[TradingPair]) -> Vec<RankedPair> {
    let eligible = pairs
        .iter()
        .filter(|p| p.liquidity_usd > 0.0 && p.volume_h24 > 0.0)
        .map(|p| RankedPair {
            pair: p.clone(),
            metric: p.volume_h24 / p.liquidity_usd,
            rank: 0,
        })
        .collect();

    sort_descending(eligible)
}

/// Stable descending sort; equal metrics keep upstream order. Ranks are
/// assigned from the final positions.
fn sort_descending(mut ranked: Vec<RankedPair>) -> Vec<RankedPair> {
    ranked.sort_by(|a, b| b.metric.partial_cmp(&a.metric).unwrap_or(Ordering::Equal));
    for (i, entry) in ranked.iter_mut().enumerate() {
        entry.rank = i;
    }
    ranked
}

// ============================================================================
// REPORT GENERATOR
// ============================================================================

/// Builds user-facing reports by fetching pairs and rendering them.
///
/// Holds no mutable state: every report is fetched, rendered and forgotten
/// within one command invocation.
pub struct ReportGenerator {
    client: DexScreenerClient,
    home_symbol: String,
}

impl ReportGenerator {
    pub fn new(client: DexScreenerClient, home_symbol: impl Into<String>) -> Self {
        Self {
            client,
            home_symbol: home_symbol.into(),
        }
    }

    /// LP pairs ranked by 24H volume, optionally with the SOL/home-token
    /// raydium summary. Always returns reply text; fetch failures become the
    /// error reply.
    pub async fn volume_report(&self, address: &str, show_summary: bool) -> String {
        match self.client.fetch_token_pairs(address).await {
            Ok(pairs) => render_volume_report(&pairs, show_summary, &self.home_symbol),
            Err(e) => fetch_error_reply(&e),
        }
    }

    /// LP pairs ranked by the 24H Volume ÷ Liquidity ratio.
    pub async fn ratio_report(&self, address: &str) -> String {
        match self.client.fetch_token_pairs(address).await {
            Ok(pairs) => render_ratio_report(&pairs),
            Err(e) => fetch_error_reply(&e),
        }
    }
}

fn fetch_error_reply(e: &ApiError) -> String {
    error!("[REPORTS] Failed to fetch DexScreener data: {}", e);
    format!("Error fetching data: {}", e)
}

// ============================================================================
// RENDERING
// ============================================================================

/// Render the volume report for already-fetched pairs.
pub fn render_volume_report(
    pairs: &[TradingPair],
    show_summary: bool,
    home_symbol: &str,
) -> String {
    if pairs.is_empty() {
        return "No pairs found in DexScreener response.".to_string();
    }

    let ranked = rank_by_volume(pairs);
    if ranked.is_empty() {
        return "No valid LP pairs with liquidity found.".to_string();
    }

    let mut total_volume = 0.0;
    let mut summary_volume = 0.0;

    let mut lines = vec![format!("Found {} active LP pairs\n", ranked.len())];
    for entry in &ranked {
        let pair = &entry.pair;
        lines.push(format!(
            "{} {}/{} ({}) -\nLiquidity: *{}* \n24H Volume: *{}*\n\n",
            rank_icon(entry.rank),
            pair.base_symbol,
            pair.quote_symbol,
            pair.dex_id,
            format_usd(pair.liquidity_usd),
            format_usd(pair.volume_h24),
        ));

        total_volume += pair.volume_h24;
        if show_summary && is_summary_pair(pair, home_symbol) {
            summary_volume += pair.volume_h24;
        }
    }

    if show_summary {
        lines.push("📊 Summary (24H Volume):".to_string());
        lines.push(format!(
            "- {}/{} ({}): *{}*",
            SUMMARY_QUOTE_SYMBOL,
            home_symbol,
            SUMMARY_DEX_ID,
            format_usd(summary_volume)
        ));
        lines.push(format!(
            "- All others combined: *{}*",
            format_usd(total_volume - summary_volume)
        ));
    }

    lines.join("\n")
}

/// Render the ratio report for already-fetched pairs.
pub fn render_ratio_report(pairs: &[TradingPair]) -> String {
    if pairs.is_empty() {
        return "No pairs found in DexScreener response.".to_string();
    }

    let ranked = rank_by_ratio(pairs);
    if ranked.is_empty() {
        return "No valid pairs with ratio data found.".to_string();
    }

    let mut lines = vec![format!(
        "Found {} LP pairs ranked by ratio (24H Volume ÷ Liquidity)\n",
        ranked.len()
    )];
    for entry in &ranked {
        let pair = &entry.pair;
        lines.push(format!(
            "{} {}/{} ({}) -\nLiquidity: *{}* \n24H Volume: *{}* \nRatio: *{}*\n\n",
            rank_icon(entry.rank),
            pair.base_symbol,
            pair.quote_symbol,
            pair.dex_id,
            format_usd(pair.liquidity_usd),
            format_usd(pair.volume_h24),
            format_pct(entry.metric),
        ));
    }

    lines.join("\n")
}

/// The summary singles out the SOL/home-token pool on raydium, matching the
/// symbols as an unordered, case-insensitive set.
fn is_summary_pair(pair: &TradingPair, home_symbol: &str) -> bool {
    let base = pair.base_symbol.to_uppercase();
    let quote = pair.quote_symbol.to_uppercase();
    let home = home_symbol.to_uppercase();

    let symbols_match = (base == home && quote == SUMMARY_QUOTE_SYMBOL)
        || (base == SUMMARY_QUOTE_SYMBOL && quote == home);

    symbols_match && pair.dex_id.trim().eq_ignore_ascii_case(SUMMARY_DEX_ID)
}
