//! DexScreener API client
//!
//! API Documentation: https://docs.dexscreener.com/api/reference
//!
//! One endpoint is used:
//! /latest/dex/tokens/{tokenAddress} - Get all LP pairs for a token contract

pub mod types;

// Re-export types for external use
pub use self::types::{PairRaw, TokenPairsResponse};

use crate::reports::TradingPair;
use crate::version::USER_AGENT;
use log::debug;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// API CONFIGURATION
// ============================================================================

const DEXSCREENER_BASE_URL: &str = "https://api.dexscreener.com";

/// Default request timeout in seconds
pub const TIMEOUT_SECS: u64 = 15;

// ============================================================================
// ERRORS
// ============================================================================

/// Errors surfaced by the DexScreener client.
///
/// Every variant carries a human-readable description; report handlers
/// forward it to the user as `Error fetching data: <description>`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("DexScreener API error {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("failed to parse response: {0}")]
    Parse(#[source] reqwest::Error),
    #[error("timeout must be greater than zero")]
    InvalidTimeout,
}

// ============================================================================
// CLIENT IMPLEMENTATION
// ============================================================================

/// HTTP client for the DexScreener token endpoint.
pub struct DexScreenerClient {
    client: Client,
    timeout: Duration,
}

impl DexScreenerClient {
    pub fn new(timeout_secs: u64) -> Result<Self, ApiError> {
        if timeout_secs == 0 {
            return Err(ApiError::InvalidTimeout);
        }

        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Fetch ALL LP pairs DexScreener tracks for a token contract.
    ///
    /// # Arguments
    /// * `token_address` - Token contract address
    ///
    /// # Returns
    /// Pairs in upstream order, decoded through the defaulting rules of
    /// [`types`]. An absent or null `pairs` array decodes to an empty vec.
    pub async fn fetch_token_pairs(
        &self,
        token_address: &str,
    ) -> Result<Vec<TradingPair>, ApiError> {
        let url = format!(
            "{}/latest/dex/tokens/{}",
            DEXSCREENER_BASE_URL, token_address
        );

        debug!("[DEXSCREENER] Fetching token pairs: token={}", token_address);

        let response = self.client.get(&url).timeout(self.timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let data: TokenPairsResponse = response.json().await.map_err(ApiError::Parse)?;

        Ok(data.into_pairs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_timeout() {
        let result = DexScreenerClient::new(0);
        assert!(matches!(result, Err(ApiError::InvalidTimeout)));
    }

    #[test]
    fn test_builds_with_default_timeout() {
        assert!(DexScreenerClient::new(TIMEOUT_SECS).is_ok());
    }

    #[test]
    fn test_error_descriptions_are_user_readable() {
        let err = ApiError::Status {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: "rate limited".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "DexScreener API error 429 Too Many Requests: rate limited"
        );

        assert_eq!(
            ApiError::InvalidTimeout.to_string(),
            "timeout must be greater than zero"
        );
    }
}
