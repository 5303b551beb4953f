//! Campaign form state
//!
//! Every edit produces a new [`DraftCampaign`] snapshot. Numeric fields are
//! coerced from the raw input text; everything else is stored as typed.

use crate::api::types::{DraftCampaign, Platform};
use crate::error::{AppError, Result};
use std::fmt;
use std::str::FromStr;

/// Editable field of the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Platform,
    Country,
    ProductCategory,
    Spend,
    Impressions,
    Clicks,
    Conversions,
    Reach,
}

impl DraftField {
    pub const NUMERIC: [DraftField; 5] = [
        DraftField::Spend,
        DraftField::Impressions,
        DraftField::Clicks,
        DraftField::Conversions,
        DraftField::Reach,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Platform => "platform",
            DraftField::Country => "country",
            DraftField::ProductCategory => "product_category",
            DraftField::Spend => "spend",
            DraftField::Impressions => "impressions",
            DraftField::Clicks => "clicks",
            DraftField::Conversions => "conversions",
            DraftField::Reach => "reach",
        }
    }

    pub fn is_numeric(&self) -> bool {
        Self::NUMERIC.contains(self)
    }
}

impl FromStr for DraftField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "platform" => Ok(DraftField::Platform),
            "country" => Ok(DraftField::Country),
            "product_category" => Ok(DraftField::ProductCategory),
            "spend" => Ok(DraftField::Spend),
            "impressions" => Ok(DraftField::Impressions),
            "clicks" => Ok(DraftField::Clicks),
            "conversions" => Ok(DraftField::Conversions),
            "reach" => Ok(DraftField::Reach),
            other => Err(AppError::Validation(format!("Unknown field '{}'", other))),
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text to number for the numeric draft fields.
///
/// Blank input is `0`. Otherwise this is Rust's `f64` parsing: `inf` and `nan`
/// spellings are accepted, hex and trailing garbage are not. Anything
/// unparseable becomes `NaN` and is sent as-is.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

impl DraftCampaign {
    /// Copy of this draft with one field replaced
    pub fn with_field(&self, field: DraftField, raw: &str) -> DraftCampaign {
        let mut next = self.clone();
        match field {
            DraftField::Platform => next.platform = Platform::from(raw),
            DraftField::Country => next.country = raw.to_string(),
            DraftField::ProductCategory => next.product_category = raw.to_string(),
            DraftField::Spend => next.spend = coerce_number(raw),
            DraftField::Impressions => next.impressions = coerce_number(raw),
            DraftField::Clicks => next.clicks = coerce_number(raw),
            DraftField::Conversions => next.conversions = coerce_number(raw),
            DraftField::Reach => next.reach = coerce_number(raw),
        }
        next
    }

    pub fn numeric(&self, field: DraftField) -> Option<f64> {
        match field {
            DraftField::Spend => Some(self.spend),
            DraftField::Impressions => Some(self.impressions),
            DraftField::Clicks => Some(self.clicks),
            DraftField::Conversions => Some(self.conversions),
            DraftField::Reach => Some(self.reach),
            _ => None,
        }
    }

    /// Numeric fields holding NaN or infinity
    pub fn non_finite_fields(&self) -> Vec<DraftField> {
        DraftField::NUMERIC
            .into_iter()
            .filter(|field| self.numeric(*field).is_some_and(|v| !v.is_finite()))
            .collect()
    }
}

/// Owner of the current draft
#[derive(Debug, Clone, Default)]
pub struct FormState {
    draft: DraftCampaign,
}

impl FormState {
    pub fn new(draft: DraftCampaign) -> Self {
        Self { draft }
    }

    pub fn draft(&self) -> &DraftCampaign {
        &self.draft
    }

    /// Apply one edit and return the new snapshot.
    ///
    /// An unknown field name leaves the draft untouched.
    pub fn update(&mut self, field_name: &str, raw_value: &str) -> Result<DraftCampaign> {
        let field: DraftField = field_name.parse()?;
        self.draft = self.draft.with_field(field, raw_value);
        Ok(self.draft.clone())
    }
}
