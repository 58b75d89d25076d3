// 4.0: exchange rate combining. the synth utility contract answers with
// parallel key/rate arrays, and a second query covers auxiliary currencies the
// synth set does not include. both land here and merge into one rate table.
//
// a standard synth's rate populates two keys: the synth symbol itself and the
// bare asset it tracks (sETH and ETH share one rate). everything else
// populates exactly one key.

use crate::currency::{is_standard_synth, synth_to_asset};
use crate::types::{AssetKey, KeyError, RawRate};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Canonical price table: symbol -> decimal rate.
pub type Rates = HashMap<String, Decimal>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RateError {
    #[error("parallel arrays disagree: {keys} keys vs {rates} rates")]
    LengthMismatch { keys: usize, rates: usize },

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error("rate for {symbol} exceeds representable range")]
    RateOverflow { symbol: String },
}

/// Encode the auxiliary currency list into the fixed-width form the rate
/// query wants. Fails whole on any bad symbol rather than dropping entries.
pub fn encode_currencies<S: AsRef<str>>(symbols: &[S]) -> Result<Vec<AssetKey>, KeyError> {
    symbols
        .iter()
        .map(|s| AssetKey::from_symbol(s.as_ref()))
        .collect()
}

/// Merge the synth rate arrays with the auxiliary rate arrays into one table.
///
/// Every input entry yields at least one output entry and standard synths
/// yield two, so the table never contains a symbol absent from input. Any
/// malformed entry fails the whole combine: a partial rate table silently
/// standing in for a failed fetch is exactly what callers must never see.
pub fn combine_rates(
    synth_keys: &[AssetKey],
    synth_rates: &[RawRate],
    aux_keys: &[AssetKey],
    aux_rates: &[RawRate],
) -> Result<Rates, RateError> {
    if synth_keys.len() != synth_rates.len() {
        return Err(RateError::LengthMismatch {
            keys: synth_keys.len(),
            rates: synth_rates.len(),
        });
    }
    if aux_keys.len() != aux_rates.len() {
        return Err(RateError::LengthMismatch {
            keys: aux_keys.len(),
            rates: aux_rates.len(),
        });
    }

    let entries = synth_keys
        .iter()
        .zip(synth_rates)
        .chain(aux_keys.iter().zip(aux_rates));

    let mut rates = Rates::new();
    for (key, raw) in entries {
        let symbol = key.to_symbol()?;
        let rate = raw
            .to_decimal()
            .ok_or_else(|| RateError::RateOverflow {
                symbol: symbol.clone(),
            })?;

        if is_standard_synth(&symbol) {
            rates.insert(synth_to_asset(&symbol).to_string(), rate);
        }
        rates.insert(symbol, rate);
    }
    Ok(rates)
}
