/// Time-of-day slot at which forecast products are issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Z00,
    Z06,
    Z12,
    Z18,
}

impl Slot {
    /// Returns the slot token used in URLs and directory names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Z00 => "00z",
            Self::Z06 => "06z",
            Self::Z12 => "12z",
            Self::Z18 => "18z",
        }
    }

    /// Product types published at this slot, in download order.
    pub fn product_types(&self) -> &'static [ProductType] {
        match self {
            Self::Z00 | Self::Z12 => &[ProductType::Oper, ProductType::Wave],
            Self::Z06 | Self::Z18 => &[ProductType::Scda, ProductType::Scwv],
        }
    }
}

/// Order in which slots are swept for each date.
pub const SLOT_ORDER: &[Slot] = &[Slot::Z00, Slot::Z12, Slot::Z06, Slot::Z18];

/// Forecast product category within a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductType {
    Oper,
    Wave,
    Scda,
    Scwv,
}

impl ProductType {
    /// Returns the product type tag used in URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oper => "oper",
            Self::Wave => "wave",
            Self::Scda => "scda",
            Self::Scwv => "scwv",
        }
    }
}

/// Directory name for a date token: `20240311` becomes `2024_03_11`.
///
/// The token is sliced positionally and never validated. A token of the
/// wrong length produces a malformed name rather than an error.
pub fn date_dir_name(date: &str) -> String {
    let year = date.get(..4).unwrap_or(date);
    let month = date.get(4..6).or_else(|| date.get(4..)).unwrap_or("");
    let day = date.get(6..).unwrap_or("");
    format!("{year}_{month}_{day}")
}
