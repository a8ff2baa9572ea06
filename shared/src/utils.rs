//! # Shared Utility Functions
//!
//! Token naming and icon addressing used by the catalog loader and the
//! presentation layer.
//!
//! ## Icon Addressing
//!
//! Each token's icon lives at a deterministic URL built from its symbol.
//! When an icon cannot be shown, the presentation layer falls back to a
//! one-character badge produced by [`icon_placeholder`].
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{icon_url, token_display_name};
//!
//! assert_eq!(token_display_name("ETH"), "Ethereum");
//! assert_eq!(
//!     icon_url("ETH"),
//!     "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/ETH.svg"
//! );
//! ```

/// Base URL of the token icon repository.
const TOKEN_ICONS_BASE_URL: &str =
    "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

/// Human-readable name for a token symbol.
///
/// Unknown symbols fall back to the symbol itself.
pub fn token_display_name(symbol: &str) -> String {
    match symbol {
        "ETH" => "Ethereum",
        "BTC" => "Bitcoin",
        "USDC" => "USD Coin",
        "SWTH" => "Switcheo",
        "BUSD" => "Binance USD",
        "USDT" => "Tether",
        other => other,
    }
    .to_string()
}

/// Deterministic icon URL for a token symbol.
pub fn icon_url(symbol: &str) -> String {
    format!("{}/{}.svg", TOKEN_ICONS_BASE_URL, symbol)
}

/// Fallback badge label when a token icon cannot be shown: the first
/// character of the symbol, uppercased.
pub fn icon_placeholder(symbol: &str) -> String {
    symbol
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display_name() {
        assert_eq!(token_display_name("ETH"), "Ethereum");
        assert_eq!(token_display_name("BTC"), "Bitcoin");
        assert_eq!(token_display_name("USDT"), "Tether");
        // Unknown symbols pass through unchanged
        assert_eq!(token_display_name("ZIL"), "ZIL");
    }

    #[test]
    fn test_icon_url() {
        assert_eq!(
            icon_url("SWTH"),
            "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens/SWTH.svg"
        );
    }

    #[test]
    fn test_icon_placeholder() {
        assert_eq!(icon_placeholder("ETH"), "E");
        assert_eq!(icon_placeholder("wBTC"), "W");
        assert_eq!(icon_placeholder(""), "");
    }
}
