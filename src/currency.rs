// 2.0: synth naming conventions. a standard synth is the underlying asset's
// symbol behind a one-letter "s" prefix (sETH tracks ETH). rates for a standard
// synth apply to the bare asset as well, and market display names drop the prefix.

/// True for symbols following the standard synth convention: an `s` prefix
/// followed by an uppercase asset code (sETH, sBTC). Index or exotic synths
/// with a lowercase body (sDEFI is standard, sEUR is standard; "sats" is not).
pub fn is_standard_synth(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match chars.next() {
        Some('s') => {}
        _ => return false,
    }
    let rest = chars.as_str();
    !rest.is_empty() && rest.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Strip the synth prefix: sETH -> ETH. Callers check `is_standard_synth` first.
pub fn synth_to_asset(symbol: &str) -> &str {
    symbol.strip_prefix('s').unwrap_or(symbol)
}

/// Asset code used for display: the synth prefix is dropped when present,
/// anything else passes through untouched.
pub fn display_asset(symbol: &str) -> &str {
    if symbol.starts_with('s') && symbol.len() > 1 {
        &symbol[1..]
    } else {
        symbol
    }
}

/// Market display name, e.g. sETH -> "ETH-PERP".
pub fn market_name(asset: &str) -> String {
    format!("{}-PERP", display_asset(asset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_synth_detection() {
        assert!(is_standard_synth("sETH"));
        assert!(is_standard_synth("sBTC"));
        assert!(is_standard_synth("sDEFI"));
        assert!(is_standard_synth("s1INCH"));

        assert!(!is_standard_synth("SNX"));
        assert!(!is_standard_synth("XAU"));
        assert!(!is_standard_synth("s"));
        assert!(!is_standard_synth(""));
        assert!(!is_standard_synth("sats"));
    }

    #[test]
    fn synth_asset_stripping() {
        assert_eq!(synth_to_asset("sETH"), "ETH");
        assert_eq!(synth_to_asset("sBTC"), "BTC");
        assert_eq!(synth_to_asset("SNX"), "SNX");
    }

    #[test]
    fn market_names() {
        assert_eq!(market_name("sETH"), "ETH-PERP");
        assert_eq!(market_name("sBTC"), "BTC-PERP");
        // non-synth assets keep their full symbol
        assert_eq!(market_name("DYDX"), "DYDX-PERP");
    }
}
