use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::errors::GenerationError;

/// Highest day of month drawn, so every month/day pair is a valid date.
pub const MAX_DAY: u32 = 28;

/// Durations a limited warranty may run for, in years.
pub const WARRANTY_YEARS: [u32; 4] = [1, 2, 3, 5];

/// Earliest year accepted for the date window.
pub const MIN_YEAR: i32 = 1;
/// Latest year accepted for the date window. The longest warranty still expires in a
/// four-digit year.
pub const MAX_YEAR: i32 = 9999 - 5;

/// Redraws allowed when a sale date lands before its purchase date.
pub const MAX_SALE_DATE_ATTEMPTS: u32 = 32;

/// Draw year, month and day independently within `[start_year, end_year]`.
pub fn random_date<R: Rng + ?Sized>(
    start_year: i32,
    end_year: i32,
    rng: &mut R,
) -> Result<NaiveDate, GenerationError> {
    if start_year > end_year {
        return Err(GenerationError::InvalidOptions(format!(
            "year window {start_year}..={end_year} is empty"
        )));
    }
    let year = rng.random_range(start_year..=end_year);
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=MAX_DAY);
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        GenerationError::InvalidOptions(format!("year {year} is outside the supported calendar"))
    })
}

pub fn random_warranty_years<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    WARRANTY_YEARS.choose(rng).copied().unwrap_or(WARRANTY_YEARS[0])
}

/// Same month and day, `years` later.
pub fn warranty_expiry(purchase: NaiveDate, years: u32) -> Result<NaiveDate, GenerationError> {
    let year = i32::try_from(years)
        .ok()
        .and_then(|years| purchase.year().checked_add(years));
    year.and_then(|year| purchase.with_year(year)).ok_or_else(|| {
        GenerationError::InvalidOptions(format!(
            "warranty of {years} years from {purchase} is outside the supported calendar"
        ))
    })
}

/// Draw a sale date between the purchase year and `end_year`, on or after the purchase.
pub fn sale_date<R: Rng + ?Sized>(
    purchase: NaiveDate,
    end_year: i32,
    rng: &mut R,
) -> Result<NaiveDate, GenerationError> {
    if end_year < purchase.year() {
        return Ok(purchase);
    }
    for _ in 0..MAX_SALE_DATE_ATTEMPTS {
        let candidate = random_date(purchase.year(), end_year, rng)?;
        if candidate >= purchase {
            return Ok(candidate);
        }
    }
    Ok(purchase)
}
