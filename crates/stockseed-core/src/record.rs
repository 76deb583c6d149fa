use std::fmt;

use chrono::NaiveDate;

use crate::fields::{Field, FieldValue};

/// Monetary amount stored as whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Round a currency amount to the nearest cent. Negative amounts clamp to zero.
    pub fn from_amount(amount: f64) -> Self {
        Self((amount * 100.0).round().max(0.0) as u64)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Multiply by `factor`, rounding to the nearest cent.
    pub fn scaled(self, factor: f64) -> Self {
        Self((self.0 as f64 * factor).round().max(0.0) as u64)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarrantyTier {
    Standard,
    Extended,
    Premium,
}

impl WarrantyTier {
    pub const ALL: [WarrantyTier; 3] = [Self::Standard, Self::Extended, Self::Premium];

    pub fn details(self) -> &'static str {
        match self {
            Self::Standard => "Standard warranty",
            Self::Extended => "Extended warranty",
            Self::Premium => "Premium warranty",
        }
    }
}

/// Warranty coverage of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warranty {
    Lifetime,
    Limited {
        tier: WarrantyTier,
        years: u32,
        expires: NaiveDate,
    },
}

impl Warranty {
    pub fn is_lifetime(&self) -> bool {
        matches!(self, Self::Lifetime)
    }

    pub fn expires(&self) -> Option<NaiveDate> {
        match self {
            Self::Lifetime => None,
            Self::Limited { expires, .. } => Some(*expires),
        }
    }

    pub fn details(&self) -> &'static str {
        match self {
            Self::Lifetime => "Lifetime warranty",
            Self::Limited { tier, .. } => tier.details(),
        }
    }
}

/// Resale of an item. Either every sold field is known or the item was never sold.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub sold_to: String,
    pub sold_time: NaiveDate,
    pub sold_price: Price,
    pub sold_notes: String,
}

/// One synthetic inventory entry.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRecord {
    pub asset_id: u64,
    pub quantity: u32,
    pub category: String,
    pub name: String,
    pub description: String,
    pub insured: bool,
    pub serial_number: String,
    pub model_number: String,
    pub manufacturer: String,
    pub notes: String,
    pub purchase_from: String,
    pub purchase_price: Price,
    pub purchase_time: NaiveDate,
    pub warranty: Warranty,
    pub sale: Option<Sale>,
}

impl InventoryRecord {
    pub fn is_sold(&self) -> bool {
        self.sale.is_some()
    }

    /// Value of a single output field.
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        let sale = self.sale.as_ref();
        match field {
            Field::Quantity => FieldValue::Int(u64::from(self.quantity)),
            Field::Name => FieldValue::Text(&self.name),
            Field::AssetId => FieldValue::Int(self.asset_id),
            Field::Description => FieldValue::Text(&self.description),
            Field::Insured => FieldValue::Bool(self.insured),
            Field::SerialNumber => FieldValue::Text(&self.serial_number),
            Field::ModelNumber => FieldValue::Text(&self.model_number),
            Field::Manufacturer => FieldValue::Text(&self.manufacturer),
            Field::Notes => FieldValue::Text(&self.notes),
            Field::PurchaseFrom => FieldValue::Text(&self.purchase_from),
            Field::PurchasePrice => FieldValue::Price(self.purchase_price),
            Field::PurchaseTime => FieldValue::Date(self.purchase_time),
            Field::LifetimeWarranty => FieldValue::Bool(self.warranty.is_lifetime()),
            Field::WarrantyExpires => self
                .warranty
                .expires()
                .map_or(FieldValue::Empty, FieldValue::Date),
            Field::WarrantyDetails => FieldValue::Text(self.warranty.details()),
            Field::SoldTo => {
                sale.map_or(FieldValue::Empty, |sale| FieldValue::Text(&sale.sold_to))
            }
            Field::SoldTime => {
                sale.map_or(FieldValue::Empty, |sale| FieldValue::Date(sale.sold_time))
            }
            Field::SoldPrice => {
                sale.map_or(FieldValue::Empty, |sale| FieldValue::Price(sale.sold_price))
            }
            Field::SoldNotes => {
                sale.map_or(FieldValue::Empty, |sale| FieldValue::Text(&sale.sold_notes))
            }
        }
    }

    /// All output fields rendered in column order.
    pub fn to_row(&self) -> Vec<String> {
        Field::ALL
            .iter()
            .map(|field| self.value(*field).to_csv())
            .collect()
    }
}
