//! Integer-cents price type with BRL display formatting.
//!
//! The catalog stores variant prices as integer centavos (`price_in_cents`),
//! so no decimal arithmetic is needed; formatting only matters for display.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A price in integer centavos.
///
/// `Display` renders the pt-BR currency format used across the storefront,
/// e.g. `R$ 1.234,56`.
///
/// ```
/// use bewear_core::Price;
///
/// assert_eq!(Price::from_cents(1990).to_string(), "R$ 19,90");
/// assert_eq!(Price::from_cents(123_456).to_string(), "R$ 1.234,56");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a price from integer centavos.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// The raw value in centavos.
    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.0.unsigned_abs();
        let reais = cents / 100;
        let centavos = cents % 100;

        // Group the integer part with dots, pt-BR style
        let digits = reais.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i).is_multiple_of(3) {
                grouped.push('.');
            }
            grouped.push(c);
        }

        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}R$ {grouped},{centavos:02}")
    }
}

impl From<i64> for Price {
    fn from(cents: i64) -> Self {
        Self(cents)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Price {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i64 as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <i64 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Price {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let cents = <i64 as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(cents))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i64 as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_small() {
        assert_eq!(Price::from_cents(0).to_string(), "R$ 0,00");
        assert_eq!(Price::from_cents(5).to_string(), "R$ 0,05");
        assert_eq!(Price::from_cents(99).to_string(), "R$ 0,99");
    }

    #[test]
    fn test_display_typical() {
        assert_eq!(Price::from_cents(1990).to_string(), "R$ 19,90");
        assert_eq!(Price::from_cents(25900).to_string(), "R$ 259,00");
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(Price::from_cents(123_456).to_string(), "R$ 1.234,56");
        assert_eq!(Price::from_cents(123_456_789).to_string(), "R$ 1.234.567,89");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Price::from_cents(-1990).to_string(), "-R$ 19,90");
    }

    #[test]
    fn test_cents_roundtrip() {
        let price = Price::from_cents(4250);
        assert_eq!(price.cents(), 4250);
        assert_eq!(i64::from(price), 4250);
    }

    #[test]
    fn test_serde_transparent() {
        let price = Price::from_cents(1990);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "1990");

        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}
