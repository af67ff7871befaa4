use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use time::Date;

use crate::error::LedgerError;

const SHORT_DESCRIPTION_WORDS: usize = 4;

pub trait IdGenerator {
    fn generate_id(&mut self) -> String;
}

#[derive(Debug, Default)]
pub struct SequentialIds {
    last: u64,
}

impl IdGenerator for SequentialIds {
    fn generate_id(&mut self) -> String {
        self.last += 1;
        self.last.to_string()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryDraft {
    pub description: String,
    pub amount: String,
    pub category: String,
}

impl EntryDraft {
    pub fn validate(self, id: String, date: Date) -> Result<LedgerEntry, LedgerError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(LedgerError::InvalidEntry("description is required".to_string()));
        }

        let amount = self.amount.trim();
        let amount = amount
            .parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(amount))
            .map_err(|_| {
                LedgerError::InvalidEntry(format!("amount {:?} is not a number", self.amount))
            })?;

        Ok(LedgerEntry {
            id,
            date,
            amount,
            category: self.category,
            description: description.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub id: String,
    pub date: Date,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Income,
    Expense,
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RowKind::Income => "income",
            RowKind::Expense => "expense",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerRow {
    pub id: String,
    pub kind: RowKind,
    pub date: String,
    pub category: String,
    pub short_description: String,
}

impl From<&LedgerEntry> for LedgerRow {
    fn from(entry: &LedgerEntry) -> Self {
        Self {
            id: entry.id.clone(),
            kind: if entry.amount >= Decimal::ZERO {
                RowKind::Income
            } else {
                RowKind::Expense
            },
            date: format_date(entry.date),
            category: entry.category.clone(),
            short_description: short_description(&entry.description),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, entry: LedgerEntry) -> Ledger {
        tracing::debug!("adding ledger entry {}", entry.id);
        let mut entries = self.entries.clone();
        entries.push(entry);
        Ledger { entries }
    }

    /// The ledger without the entry `id`. Unknown ids leave it unchanged.
    pub fn remove(&self, id: &str) -> Ledger {
        let entries: Vec<LedgerEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();

        if entries.len() == self.entries.len() {
            tracing::debug!("no ledger entry {id} to remove");
        }

        Ledger { entries }
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn find(&self, id: &str) -> Option<&LedgerEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn total(&self) -> Result<Decimal, LedgerError> {
        self.entries.iter().try_fold(Decimal::ZERO, |total, entry| {
            total
                .checked_add(entry.amount)
                .ok_or_else(|| LedgerError::AmountOverflow(entry.id.clone()))
        })
    }

    pub fn formatted_total(&self) -> Result<String, LedgerError> {
        let total = self
            .total()?
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Ok(format!("{total:.2}"))
    }

    pub fn rows(&self) -> Vec<LedgerRow> {
        self.entries.iter().map(LedgerRow::from).collect()
    }

    pub fn full_description(&self, id: &str) -> Option<&str> {
        self.find(id).map(|entry| entry.description.as_str())
    }
}

fn format_date(date: Date) -> String {
    format!(
        "{:02}.{:02}.{}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

fn short_description(description: &str) -> String {
    let words: Vec<&str> = description.split(' ').collect();
    if words.len() > SHORT_DESCRIPTION_WORDS {
        format!("{}...", words[..SHORT_DESCRIPTION_WORDS].join(" "))
    } else {
        description.to_string()
    }
}
