// 1.0: all the primitives live here. nothing downstream works without these types.
// asset keys, raw rates, round ids, sizes, timestamps. each is a newtype so the
// compiler catches type mixups, especially the string-symbol vs binary-key split.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// 1.1: on-chain currency identifier. fixed 32 bytes: the symbol's UTF-8 bytes,
// left aligned, zero padded. volume feeds key by this while everything else keys
// by string symbol, so encode/decode here is the single conversion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetKey([u8; 32]);

impl AssetKey {
    /// Encode a string symbol into its fixed-width key.
    /// At most 31 bytes so the key always ends in at least one zero byte.
    pub fn from_symbol(symbol: &str) -> Result<Self, KeyError> {
        let bytes = symbol.as_bytes();
        if bytes.is_empty() {
            return Err(KeyError::EmptySymbol);
        }
        if bytes.len() > 31 {
            return Err(KeyError::SymbolTooLong {
                symbol: symbol.to_string(),
            });
        }
        let mut key = [0u8; 32];
        key[..bytes.len()].copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// Decode back to the string symbol. Rejects keys with bytes after the
    /// first zero or with non-UTF-8 content.
    pub fn to_symbol(&self) -> Result<String, KeyError> {
        let end = self.0.iter().position(|b| *b == 0).unwrap_or(32);
        if self.0[end..].iter().any(|b| *b != 0) {
            return Err(KeyError::MalformedKey(self.0));
        }
        if end == 0 {
            return Err(KeyError::EmptySymbol);
        }
        let symbol = std::str::from_utf8(&self.0[..end])
            .map_err(|_| KeyError::MalformedKey(self.0))?;
        Ok(symbol.to_string())
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_symbol() {
            Ok(symbol) => write!(f, "{}", symbol),
            Err(_) => write!(f, "0x{}", hex_string(&self.0)),
        }
    }
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("empty asset symbol")]
    EmptySymbol,

    #[error("symbol {symbol} exceeds 31 bytes")]
    SymbolTooLong { symbol: String },

    #[error("key 0x{} is not a zero-padded UTF-8 symbol", hex_string(.0))]
    MalformedKey([u8; 32]),
}

// 1.2: raw on-chain rate. 18-decimal fixed point, so 1.0 == 10^18.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RawRate(pub u128);

impl RawRate {
    pub const SCALE: u32 = 18;

    /// Scale down to a decimal. None when the raw value exceeds the decimal
    /// mantissa range, which callers must surface as an explicit failure.
    pub fn to_decimal(&self) -> Option<Decimal> {
        let raw = i128::try_from(self.0).ok()?;
        Decimal::try_from_i128_with_scale(raw, Self::SCALE).ok()
    }
}

// 1.3: oracle round counter. monotonically non-decreasing, supplied externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoundId(pub u64);

impl RoundId {
    pub fn value(&self) -> u64 {
        self.0
    }

    // saturating so the window math stays total at the u64 edge
    pub fn offset(&self, rounds: u64) -> Self {
        Self(self.0.saturating_add(rounds))
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Long = profit when price goes up. Short = profit when price goes down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Long,
    Short,
}

impl Side {
    pub fn sign(&self) -> Decimal {
        match self {
            Side::Long => Decimal::ONE,
            Side::Short => -Decimal::ONE,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Long => write!(f, "long"),
            Side::Short => write!(f, "short"),
        }
    }
}

// 1.4: signed size: positive = long, negative = short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedSize(Decimal);

impl SignedSize {
    pub fn new(size: Decimal) -> Self {
        Self(size)
    }

    pub fn from_side(side: Side, abs_size: Decimal) -> Self {
        Self(side.sign() * abs_size.abs())
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn abs(&self) -> Decimal {
        self.0.abs()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn side(&self) -> Option<Side> {
        if self.0 > Decimal::ZERO {
            Some(Side::Long)
        } else if self.0 < Decimal::ZERO {
            Some(Side::Short)
        } else {
            None
        }
    }
}

impl fmt::Display for SignedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// 1.5: millisecond timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }

    pub fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }
}
