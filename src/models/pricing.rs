//! Market-price sampling for default-constructed options
//!
//! When a transport or accommodation option is built without an explicit
//! price, its fare is drawn from a market range through the `PriceSource`
//! seam. Production code uses `RandomPrices`; tests use `FixedPrices` for
//! deterministic values.

use rand::Rng;

use super::money::Money;

/// An inclusive lira price band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub const fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// Band from whole-lira bounds
    pub const fn lira(min: i64, max: i64) -> Self {
        Self {
            min: Money::from_lira(min),
            max: Money::from_lira(max),
        }
    }

    pub fn contains(&self, amount: Money) -> bool {
        amount >= self.min && amount <= self.max
    }

    /// Midpoint of the band, truncated to the kuruş
    pub fn midpoint(&self) -> Money {
        Money::from_kurus((self.min.kurus() + self.max.kurus()) / 2)
    }
}

/// Supplies a price within a requested band
pub trait PriceSource {
    fn sample(&mut self, range: PriceRange) -> Money;
}

/// Draws uniformly from the band
#[derive(Debug, Default)]
pub struct RandomPrices;

impl PriceSource for RandomPrices {
    fn sample(&mut self, range: PriceRange) -> Money {
        let kurus = rand::rng().random_range(range.min.kurus()..=range.max.kurus());
        Money::from_kurus(kurus)
    }
}

/// Always returns the band midpoint; deterministic for tests and demos
#[derive(Debug, Default)]
pub struct FixedPrices;

impl PriceSource for FixedPrices {
    fn sample(&mut self, range: PriceRange) -> Money {
        range.midpoint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_stays_in_band() {
        let mut source = RandomPrices;
        let range = PriceRange::lira(800, 2000);
        for _ in 0..50 {
            assert!(range.contains(source.sample(range)));
        }
    }

    #[test]
    fn test_fixed_is_deterministic() {
        let mut source = FixedPrices;
        let range = PriceRange::lira(3000, 8000);
        assert_eq!(source.sample(range), Money::from_lira(5500));
        assert_eq!(source.sample(range), Money::from_lira(5500));
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(PriceRange::lira(600, 1500).midpoint(), Money::from_lira(1050));
    }
}
