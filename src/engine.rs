use std::collections::BTreeSet;
use std::fmt;

use rust_decimal::Decimal;
use time::Date;

use crate::error::LedgerError;
use crate::transaction::{TransactionRecord, TransactionType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFilter {
    pub year: Option<i32>,
    /// 1-indexed month, 1 to 12.
    pub month: Option<u8>,
    pub day: Option<u8>,
}

impl DateFilter {
    pub fn new(year: Option<i32>, month: Option<u8>, day: Option<u8>) -> Self {
        Self { year, month, day }
    }

    pub fn matches(&self, date: Date) -> bool {
        self.year.is_none_or(|year| date.year() == year)
            && self.month.is_none_or(|month| u8::from(date.month()) == month)
            && self.day.is_none_or(|day| date.day() == day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DominantType {
    Debit,
    Credit,
    Equal,
}

impl fmt::Display for DominantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DominantType::Debit => "debit",
            DominantType::Credit => "credit",
            DominantType::Equal => "equal",
        })
    }
}

pub fn unique_types(records: &[TransactionRecord]) -> BTreeSet<TransactionType> {
    records.iter().map(|r| r.tx_type.clone()).collect()
}

pub fn total_amount(records: &[TransactionRecord]) -> Result<Decimal, LedgerError> {
    sum(records.iter())
}

pub fn total_amount_by_date(
    records: &[TransactionRecord],
    filter: DateFilter,
) -> Result<Decimal, LedgerError> {
    sum(records.iter().filter(|r| filter.matches(r.date)))
}

pub fn by_type<'a>(
    records: &'a [TransactionRecord],
    tx_type: &TransactionType,
) -> Vec<&'a TransactionRecord> {
    records.iter().filter(|r| &r.tx_type == tx_type).collect()
}

/// Records dated within `start..=end`. An inverted range yields nothing.
pub fn in_date_range(
    records: &[TransactionRecord],
    start: Date,
    end: Date,
) -> Vec<&TransactionRecord> {
    records
        .iter()
        .filter(|r| start <= r.date && r.date <= end)
        .collect()
}

pub fn by_merchant<'a>(
    records: &'a [TransactionRecord],
    merchant_name: &str,
) -> Vec<&'a TransactionRecord> {
    records
        .iter()
        .filter(|r| r.merchant_name == merchant_name)
        .collect()
}

pub fn average_amount(records: &[TransactionRecord]) -> Result<Decimal, LedgerError> {
    if records.is_empty() {
        return Err(LedgerError::DegenerateAggregate("average amount"));
    }

    Ok(total_amount(records)? / Decimal::from(records.len()))
}

pub fn by_amount_range(
    records: &[TransactionRecord],
    min: Decimal,
    max: Decimal,
) -> Vec<&TransactionRecord> {
    records
        .iter()
        .filter(|r| min <= r.amount && r.amount <= max)
        .collect()
}

pub fn total_debit_amount(records: &[TransactionRecord]) -> Result<Decimal, LedgerError> {
    sum(records.iter().filter(|r| r.tx_type == TransactionType::Debit))
}

/// 0-indexed month with the most records. Ties go to the lowest month;
/// an empty input yields 0.
pub fn most_transactions_month(records: &[TransactionRecord]) -> u8 {
    busiest_month(records.iter())
}

pub fn most_debit_transactions_month(records: &[TransactionRecord]) -> u8 {
    busiest_month(
        records
            .iter()
            .filter(|r| r.tx_type == TransactionType::Debit),
    )
}

pub fn dominant_type(records: &[TransactionRecord]) -> DominantType {
    let (debits, credits) =
        records
            .iter()
            .fold((0usize, 0usize), |(debits, credits), r| match r.tx_type {
                TransactionType::Debit => (debits + 1, credits),
                TransactionType::Credit => (debits, credits + 1),
                TransactionType::Other(_) => (debits, credits),
            });

    match debits.cmp(&credits) {
        std::cmp::Ordering::Greater => DominantType::Debit,
        std::cmp::Ordering::Less => DominantType::Credit,
        std::cmp::Ordering::Equal => DominantType::Equal,
    }
}

pub fn before_date(records: &[TransactionRecord], date: Date) -> Vec<&TransactionRecord> {
    records.iter().filter(|r| r.date < date).collect()
}

pub fn find_by_id<'a>(
    records: &'a [TransactionRecord],
    id: &str,
) -> Result<&'a TransactionRecord, LedgerError> {
    records
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| LedgerError::NotFound(id.to_string()))
}

pub fn descriptions(records: &[TransactionRecord]) -> Vec<&str> {
    records.iter().map(|r| r.description.as_str()).collect()
}

fn sum<'a>(
    mut records: impl Iterator<Item = &'a TransactionRecord>,
) -> Result<Decimal, LedgerError> {
    records.try_fold(Decimal::ZERO, |total, r| {
        total
            .checked_add(r.amount)
            .ok_or_else(|| LedgerError::AmountOverflow(r.id.clone()))
    })
}

fn busiest_month<'a>(records: impl Iterator<Item = &'a TransactionRecord>) -> u8 {
    let mut counts = [0usize; 12];
    for record in records {
        counts[usize::from(u8::from(record.date.month()) - 1)] += 1;
    }

    let mut busiest = 0;
    for (month, &count) in counts.iter().enumerate() {
        if count > counts[busiest] {
            busiest = month;
        }
    }

    busiest as u8
}
