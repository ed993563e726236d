//! Supported currencies and whole-unit display formatting.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Display currencies supported by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    #[serde(rename = "GMD")]
    Gmd,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "GBP")]
    Gbp,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Gmd => "GMD",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
        }
    }

    /// Symbol used as a display prefix.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Gmd => "D",
            Currency::Usd => "$",
            Currency::Gbp => "£",
        }
    }

    /// Formats an amount in this currency for display.
    ///
    /// Amounts render in whole units (rounded, no decimals) with thousands
    /// grouping; negatives carry a leading minus before the symbol. There is
    /// no failure mode for the amount itself.
    pub fn format(&self, amount: Decimal) -> String {
        format_amount(amount, *self)
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "GMD" => Ok(Currency::Gmd),
            "USD" => Ok(Currency::Usd),
            "GBP" => Ok(Currency::Gbp),
            other => Err(Error::UnsupportedCurrency(other.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Formats `amount` as a whole-unit currency string, e.g. `D2,500,000`.
pub fn format_amount(amount: Decimal, currency: Currency) -> String {
    let rounded = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i128()
        .unwrap_or_default();
    let negative = rounded < 0;
    let grouped = group_thousands(rounded.unsigned_abs());

    if negative {
        format!("-{}{}", currency.symbol(), grouped)
    } else {
        format!("{}{}", currency.symbol(), grouped)
    }
}

/// Parses a string produced by [`format_amount`] back into a `Decimal`.
///
/// Accepts plain numbers as well; the currency argument determines which
/// symbol prefix is stripped.
pub fn parse_amount(input: &str, currency: Currency) -> Result<Decimal> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('-')
        .trim_start_matches(currency.symbol())
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let value = Decimal::from_str(&cleaned)?;
    if input.trim_start().starts_with('-') {
        Ok(-value)
    } else {
        Ok(value)
    }
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
