//! Version information for dripbot.

/// Compile-time version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent header value sent with every DexScreener request
pub const USER_AGENT: &str = concat!("dripbot/", env!("CARGO_PKG_VERSION"));
