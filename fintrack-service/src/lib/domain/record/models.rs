use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::EmailAddress;
use crate::record::errors::AmountError;
use crate::record::errors::DateError;
use crate::record::errors::RecordKindError;

/// The four kinds of financial record.
///
/// Each kind lives in its own table of identical shape; the kind never
/// changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Revenue,
    Expenditure,
    Alert,
    Reminder,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Revenue,
        RecordKind::Expenditure,
        RecordKind::Alert,
        RecordKind::Reminder,
    ];

    /// Lowercase name, also the storage table for this kind.
    pub fn table_name(&self) -> &'static str {
        match self {
            RecordKind::Revenue => "revenue",
            RecordKind::Expenditure => "expenditure",
            RecordKind::Alert => "alert",
            RecordKind::Reminder => "reminder",
        }
    }

    /// Capitalized name for user-facing messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            RecordKind::Revenue => "Revenue",
            RecordKind::Expenditure => "Expenditure",
            RecordKind::Alert => "Alert",
            RecordKind::Reminder => "Reminder",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

impl FromStr for RecordKind {
    type Err = RecordKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "revenue" => Ok(RecordKind::Revenue),
            "expenditure" => Ok(RecordKind::Expenditure),
            "alert" => Ok(RecordKind::Alert),
            "reminder" => Ok(RecordKind::Reminder),
            other => Err(RecordKindError::Unknown(other.to_string())),
        }
    }
}

/// Monetary amount value type
///
/// Ensures the amount is strictly positive; zero and negative amounts never
/// reach storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(Decimal);

impl Amount {
    /// Create a new validated amount.
    ///
    /// # Errors
    /// * `NotPositive` - Amount is zero or negative
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive);
        }
        Ok(Self(value))
    }

    /// Get the inner decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Record date value type
///
/// Dates travel as opaque strings; the only rule is presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDate(String);

impl EntryDate {
    /// Create a new validated date.
    ///
    /// # Errors
    /// * `Missing` - Date is empty or blank
    pub fn new(date: String) -> Result<Self, DateError> {
        if date.trim().is_empty() {
            return Err(DateError::Missing);
        }
        Ok(Self(date))
    }

    /// Get date as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Financial record entity as stored and listed.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub owner_email: String,
    pub category: String,
    pub amount: Decimal,
    pub note: String,
    pub date: String,
}

/// Command to add a record, fully validated at the boundary.
#[derive(Debug)]
pub struct AddRecordCommand {
    pub kind: RecordKind,
    pub owner_email: EmailAddress,
    pub category: String,
    pub amount: Amount,
    pub note: String,
    pub date: EntryDate,
}

/// Partial update for an existing record.
///
/// Only provided fields change. Amount and date pass through as given;
/// the full validators run on add only.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub category: Option<String>,
    pub amount: Option<Decimal>,
    pub note: Option<String>,
    pub date: Option<String>,
}

impl RecordPatch {
    /// True when no field is set; such a patch is rejected before it
    /// reaches storage.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.amount.is_none()
            && self.note.is_none()
            && self.date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_kind_round_trips_names() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.table_name().parse::<RecordKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_rejects_unknown() {
        assert!("savings".parse::<RecordKind>().is_err());
    }

    #[test]
    fn test_amount_rejects_non_positive() {
        assert_eq!(Amount::new(dec("-1")), Err(AmountError::NotPositive));
        assert_eq!(Amount::new(dec("0")), Err(AmountError::NotPositive));
        assert_eq!(Amount::new(dec("0.00")), Err(AmountError::NotPositive));
    }

    #[test]
    fn test_amount_accepts_positive() {
        assert_eq!(Amount::new(dec("0.01")).unwrap().value(), dec("0.01"));
        assert_eq!(Amount::new(dec("5000.00")).unwrap().value(), dec("5000.00"));
    }

    #[test]
    fn test_date_rejects_empty() {
        assert_eq!(EntryDate::new("".to_string()), Err(DateError::Missing));
        assert_eq!(EntryDate::new("   ".to_string()), Err(DateError::Missing));
    }

    #[test]
    fn test_date_accepts_present() {
        assert_eq!(
            EntryDate::new("2024-10-01".to_string()).unwrap().as_str(),
            "2024-10-01"
        );
    }

    #[test]
    fn test_patch_emptiness() {
        assert!(RecordPatch::default().is_empty());
        assert!(!RecordPatch {
            note: Some("october".to_string()),
            ..Default::default()
        }
        .is_empty());
    }
}
