//! Currencies and exchange-rate lookup
//!
//! The ledger is lira-denominated; conversion exists for display and for
//! visa fees quoted in foreign currency. Rates come through the
//! `ExchangeRateProvider` seam so callers can substitute their own table.

use serde::Serialize;
use std::fmt;

use super::money::Money;

/// Currencies the planner can quote amounts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Currency {
    Try,
    Usd,
    Eur,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Try => "₺",
            Self::Usd => "$",
            Self::Eur => "€",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Try => "Turkish Lira",
            Self::Usd => "US Dollar",
            Self::Eur => "Euro",
        }
    }

    /// Render an amount with this currency's symbol, e.g. "$ 185.00"
    pub fn format(&self, amount: Money) -> String {
        format!("{} {}", self.symbol(), amount.unsuffixed())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rate lookup used by the fee and display calculators
pub trait ExchangeRateProvider {
    /// Convert an amount between currencies, rounding to the nearest kuruş
    fn convert(&self, amount: Money, from: Currency, to: Currency) -> Money;

    /// The factor one unit of `from` is worth in `to`
    fn rate(&self, from: Currency, to: Currency) -> f64;
}

/// Fixed-table rate provider
///
/// 1 USD = 34.50 TL, 1 EUR = 37.00 TL; same-currency conversion is identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticExchangeRates;

const USD_TO_TRY: f64 = 34.50;
const EUR_TO_TRY: f64 = 37.00;

impl StaticExchangeRates {
    fn to_try(&self, amount: Money, from: Currency) -> Money {
        match from {
            Currency::Try => amount,
            Currency::Usd => amount.scale(USD_TO_TRY),
            Currency::Eur => amount.scale(EUR_TO_TRY),
        }
    }

    fn from_try(&self, amount: Money, to: Currency) -> Money {
        match to {
            Currency::Try => amount,
            Currency::Usd => amount.scale(1.0 / USD_TO_TRY),
            Currency::Eur => amount.scale(1.0 / EUR_TO_TRY),
        }
    }

    /// "1234.56 TL (≈ $ 35.78 / € 33.37)" convenience rendering
    pub fn format_with_conversion(&self, amount_try: Money) -> String {
        format!(
            "{} (≈ {} / {})",
            amount_try,
            Currency::Usd.format(self.convert(amount_try, Currency::Try, Currency::Usd)),
            Currency::Eur.format(self.convert(amount_try, Currency::Try, Currency::Eur)),
        )
    }
}

impl ExchangeRateProvider for StaticExchangeRates {
    fn convert(&self, amount: Money, from: Currency, to: Currency) -> Money {
        if from == to {
            return amount;
        }
        self.from_try(self.to_try(amount, from), to)
    }

    fn rate(&self, from: Currency, to: Currency) -> f64 {
        self.convert(Money::from_lira(1), from, to).kurus() as f64 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_conversion() {
        let rates = StaticExchangeRates;
        let amount = Money::from_lira_kurus(123, 45);
        assert_eq!(rates.convert(amount, Currency::Try, Currency::Try), amount);
        assert_eq!(rates.convert(amount, Currency::Eur, Currency::Eur), amount);
    }

    #[test]
    fn test_usd_to_try() {
        let rates = StaticExchangeRates;
        let converted = rates.convert(Money::from_lira(185), Currency::Usd, Currency::Try);
        assert_eq!(converted, Money::from_lira_kurus(6382, 50));
    }

    #[test]
    fn test_eur_to_try() {
        let rates = StaticExchangeRates;
        let converted = rates.convert(Money::from_lira(80), Currency::Eur, Currency::Try);
        assert_eq!(converted, Money::from_lira(2960));
    }

    #[test]
    fn test_cross_rate_goes_through_try() {
        let rates = StaticExchangeRates;
        // 100 USD -> 3450 TL -> 93.24 EUR
        let converted = rates.convert(Money::from_lira(100), Currency::Usd, Currency::Eur);
        assert_eq!(converted, Money::from_kurus(9324));
    }

    #[test]
    fn test_rate_factor() {
        let rates = StaticExchangeRates;
        assert!((rates.rate(Currency::Usd, Currency::Try) - 34.50).abs() < f64::EPSILON);
        assert!((rates.rate(Currency::Try, Currency::Try) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_currency_format() {
        assert_eq!(Currency::Usd.format(Money::from_lira_kurus(185, 0)), "$ 185.00");
        assert_eq!(Currency::Try.symbol(), "₺");
    }
}
