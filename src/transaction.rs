use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::LedgerError;

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Kind of a transaction. Only `debit` and `credit` take part in the
/// type statistics, but any other label is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    Debit,
    Credit,
    Other(String),
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Debit => "debit",
            TransactionType::Credit => "credit",
            TransactionType::Other(label) => label,
        }
    }
}

impl From<String> for TransactionType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "debit" => TransactionType::Debit,
            "credit" => TransactionType::Credit,
            _ => TransactionType::Other(label),
        }
    }
}

impl From<&str> for TransactionType {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<TransactionType> for String {
    fn from(tx_type: TransactionType) -> Self {
        tx_type.as_str().to_string()
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub id: String,
    pub date: Date,
    pub amount: Decimal,
    pub tx_type: TransactionType,
    pub description: String,
    pub merchant_name: String,
    pub card_type: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RawTransaction {
    pub id: String,
    pub date: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub description: String,
    pub merchant_name: String,
    pub card_type: String,
}

impl TryFrom<RawTransaction> for TransactionRecord {
    type Error = LedgerError;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        Ok(Self {
            date: parse_date(&raw.date)?,
            id: raw.id,
            amount: raw.amount,
            tx_type: raw.tx_type,
            description: raw.description,
            merchant_name: raw.merchant_name,
            card_type: raw.card_type,
        })
    }
}

impl From<&TransactionRecord> for RawTransaction {
    fn from(record: &TransactionRecord) -> Self {
        Self {
            id: record.id.clone(),
            date: record.date.to_string(),
            amount: record.amount,
            tx_type: record.tx_type.clone(),
            description: record.description.clone(),
            merchant_name: record.merchant_name.clone(),
            card_type: record.card_type.clone(),
        }
    }
}

pub fn parse_date(value: &str) -> Result<Date, LedgerError> {
    Date::parse(value.trim(), DATE_FORMAT).map_err(|source| LedgerError::InvalidDate {
        value: value.to_string(),
        source,
    })
}
