use std::io::{Read, Write};

use crate::error::LedgerError;
use crate::ledger::EntryDraft;
use crate::transaction::{RawTransaction, TransactionRecord};

/// The first malformed row aborts the load; no partial result is returned.
pub fn load_csv<R: Read>(reader: R) -> Result<Vec<TransactionRecord>, LedgerError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.deserialize::<RawTransaction>() {
        let raw = result.inspect_err(|e| tracing::error!("rejected transaction row: {e}"))?;
        let record = TransactionRecord::try_from(raw)
            .inspect_err(|e| tracing::error!("rejected transaction row: {e}"))?;
        records.push(record);
    }

    tracing::info!("loaded {} transactions", records.len());
    Ok(records)
}

pub fn write_records<W: Write>(
    writer: W,
    records: &[TransactionRecord],
) -> Result<(), LedgerError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for record in records {
        csv_writer.serialize(RawTransaction::from(record))?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn load_drafts<R: Read>(reader: R) -> Result<Vec<EntryDraft>, LedgerError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let drafts = csv_reader
        .deserialize::<EntryDraft>()
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("read {} ledger drafts", drafts.len());
    Ok(drafts)
}
