use std::ops::RangeInclusive;

use rand::Rng;

use stockseed_core::{Price, PriceRange};

/// Bounds of the factor applied to a purchase price to get a resale price.
pub const RESALE_FACTOR: RangeInclusive<f64> = 0.5..=1.2;

/// Uniform draw from the archetype's range, rounded to cents.
pub fn purchase_price<R: Rng + ?Sized>(range: &PriceRange, rng: &mut R) -> Price {
    let amount = rng.random_range(range.min..=range.max);
    Price::from_amount(amount)
}

pub fn resale_price<R: Rng + ?Sized>(purchase: Price, rng: &mut R) -> Price {
    let factor = rng.random_range(RESALE_FACTOR);
    purchase.scaled(factor)
}
