use chrono::NaiveDate;

use crate::record::Price;

/// Number of columns in the import format.
pub const FIELD_COUNT: usize = 19;

/// Output column of the inventory import format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Quantity,
    Name,
    AssetId,
    Description,
    Insured,
    SerialNumber,
    ModelNumber,
    Manufacturer,
    Notes,
    PurchaseFrom,
    PurchasePrice,
    PurchaseTime,
    LifetimeWarranty,
    WarrantyExpires,
    WarrantyDetails,
    SoldTo,
    SoldTime,
    SoldPrice,
    SoldNotes,
}

impl Field {
    /// Every field in column order.
    pub const ALL: [Field; FIELD_COUNT] = [
        Self::Quantity,
        Self::Name,
        Self::AssetId,
        Self::Description,
        Self::Insured,
        Self::SerialNumber,
        Self::ModelNumber,
        Self::Manufacturer,
        Self::Notes,
        Self::PurchaseFrom,
        Self::PurchasePrice,
        Self::PurchaseTime,
        Self::LifetimeWarranty,
        Self::WarrantyExpires,
        Self::WarrantyDetails,
        Self::SoldTo,
        Self::SoldTime,
        Self::SoldPrice,
        Self::SoldNotes,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Quantity => "quantity",
            Self::Name => "name",
            Self::AssetId => "asset_id",
            Self::Description => "description",
            Self::Insured => "insured",
            Self::SerialNumber => "serial_number",
            Self::ModelNumber => "model_number",
            Self::Manufacturer => "manufacturer",
            Self::Notes => "notes",
            Self::PurchaseFrom => "purchase_from",
            Self::PurchasePrice => "purchase_price",
            Self::PurchaseTime => "purchase_time",
            Self::LifetimeWarranty => "lifetime_warranty",
            Self::WarrantyExpires => "warranty_expires",
            Self::WarrantyDetails => "warranty_details",
            Self::SoldTo => "sold_to",
            Self::SoldTime => "sold_time",
            Self::SoldPrice => "sold_price",
            Self::SoldNotes => "sold_notes",
        }
    }

    /// Header label with an import-format prefix such as `HB.`.
    pub fn header(self, prefix: &str) -> String {
        format!("{prefix}{}", self.name())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// Rendered value of one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Empty,
    Bool(bool),
    Int(u64),
    Price(Price),
    Date(NaiveDate),
    Text(&'a str),
}

impl FieldValue<'_> {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(value) => value.is_empty(),
            _ => false,
        }
    }

    pub fn to_csv(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Bool(value) => value.to_string(),
            FieldValue::Int(value) => value.to_string(),
            FieldValue::Price(value) => value.to_string(),
            FieldValue::Date(value) => value.format("%Y-%m-%d").to_string(),
            FieldValue::Text(value) => (*value).to_string(),
        }
    }
}
