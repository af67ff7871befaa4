use std::io::Write;

use rust_decimal::dec;
use time::macros::date;

use crate::engine::{self, DateFilter};
use crate::error::LedgerError;
use crate::ledger::Ledger;
use crate::transaction::{TransactionRecord, TransactionType};

pub fn write_report<W: Write>(
    mut writer: W,
    records: &[TransactionRecord],
) -> Result<(), LedgerError> {
    let types = engine::unique_types(records);
    let types: Vec<&str> = types.iter().map(TransactionType::as_str).collect();
    writeln!(writer, "Unique transaction types: {}", types.join(", "))?;

    writeln!(writer, "Total amount: {}", engine::total_amount(records)?)?;

    let first_of_march = DateFilter::new(Some(2025), Some(3), Some(1));
    writeln!(
        writer,
        "Total amount on 2025-03-01: {}",
        engine::total_amount_by_date(records, first_of_march)?
    )?;

    write_ids(
        &mut writer,
        "Debit transactions",
        &engine::by_type(records, &TransactionType::Debit),
    )?;
    write_ids(
        &mut writer,
        "Transactions from 2025-03-01 to 2025-03-02",
        &engine::in_date_range(records, date!(2025 - 03 - 01), date!(2025 - 03 - 02)),
    )?;
    write_ids(
        &mut writer,
        "Transactions at Техномир",
        &engine::by_merchant(records, "Техномир"),
    )?;

    match engine::average_amount(records) {
        Ok(average) => writeln!(writer, "Average amount: {}", average.round_dp(2))?,
        Err(LedgerError::DegenerateAggregate(_)) => writeln!(writer, "Average amount: n/a")?,
        Err(e) => return Err(e),
    }

    write_ids(
        &mut writer,
        "Transactions from 50 to 100",
        &engine::by_amount_range(records, dec!(50), dec!(100)),
    )?;
    writeln!(
        writer,
        "Total debit amount: {}",
        engine::total_debit_amount(records)?
    )?;
    writeln!(
        writer,
        "Month with most transactions: {}",
        engine::most_transactions_month(records)
    )?;
    writeln!(
        writer,
        "Month with most debit transactions: {}",
        engine::most_debit_transactions_month(records)
    )?;
    writeln!(
        writer,
        "Dominant transaction type: {}",
        engine::dominant_type(records)
    )?;

    writer.flush()?;
    Ok(())
}

pub fn write_ledger<W: Write>(
    mut writer: W,
    ledger: &Ledger,
    show: Option<&str>,
) -> Result<(), LedgerError> {
    for row in ledger.rows() {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            row.id, row.date, row.category, row.short_description, row.kind
        )?;
    }
    writeln!(writer, "Total: {}", ledger.formatted_total()?)?;

    if let Some(id) = show {
        let description = ledger
            .full_description(id)
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))?;
        writeln!(writer, "Full description: {description}")?;
    }

    writer.flush()?;
    Ok(())
}

fn write_ids<W: Write>(
    writer: &mut W,
    label: &str,
    records: &[&TransactionRecord],
) -> Result<(), LedgerError> {
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    writeln!(writer, "{label}: [{}]", ids.join(", "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::EntryDraft;
    use crate::sample::sample_transactions;
    use rust_decimal::Decimal;

    fn report(records: &[TransactionRecord]) -> String {
        let mut output = Vec::new();
        write_report(&mut output, records).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn sample_report() {
        let output = report(&sample_transactions());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Unique transaction types: debit, credit",
                "Total amount: 575.75",
                "Total amount on 2025-03-01: 175.75",
                "Debit transactions: [2, 4, 5]",
                "Transactions from 2025-03-01 to 2025-03-02: [1, 2, 4, 6]",
                "Transactions at Техномир: [1]",
                "Average amount: 95.96",
                "Transactions from 50 to 100: [2, 4]",
                "Total debit amount: 245.25",
                "Month with most transactions: 2",
                "Month with most debit transactions: 2",
                "Dominant transaction type: debit",
            ]
        );
    }

    #[test]
    fn empty_report_does_not_fail() {
        let output = report(&[]);
        assert!(output.contains("Total amount: 0\n"));
        assert!(output.contains("Average amount: n/a\n"));
        assert!(output.contains("Debit transactions: []\n"));
        assert!(output.contains("Dominant transaction type: equal\n"));
    }

    #[test]
    fn report_fails_on_overflowing_total() {
        let mut records = sample_transactions();
        records[0].amount = Decimal::MAX;

        let mut output = Vec::new();
        let err = write_report(&mut output, &records).unwrap_err();
        assert!(matches!(err, LedgerError::AmountOverflow(ref id) if id == "2"));
    }

    fn two_entry_ledger() -> Ledger {
        let salary = EntryDraft {
            description: "Monthly salary from the office".to_string(),
            amount: "1500".to_string(),
            category: "income".to_string(),
        };
        let rent = EntryDraft {
            description: "Rent".to_string(),
            amount: "-700.5".to_string(),
            category: "housing".to_string(),
        };
        Ledger::new()
            .add(salary.validate("1".to_string(), date!(2025 - 04 - 01)).unwrap())
            .add(rent.validate("2".to_string(), date!(2025 - 04 - 02)).unwrap())
    }

    #[test]
    fn ledger_rows_and_total() {
        let mut output = Vec::new();
        write_ledger(&mut output, &two_entry_ledger(), None).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(
            output,
            "1\t01.04.2025\tincome\tMonthly salary from the...\tincome\n\
2\t02.04.2025\thousing\tRent\texpense\n\
Total: 799.50\n"
        );
    }

    #[test]
    fn empty_ledger_prints_zero_total() {
        let mut output = Vec::new();
        write_ledger(&mut output, &Ledger::new(), None).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Total: 0.00\n");
    }

    #[test]
    fn ledger_shows_full_description() {
        let mut output = Vec::new();
        write_ledger(&mut output, &two_entry_ledger(), Some("1")).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.ends_with("Total: 799.50\nFull description: Monthly salary from the office\n"));
    }

    #[test]
    fn ledger_show_unknown_id_fails() {
        let mut output = Vec::new();
        let err = write_ledger(&mut output, &two_entry_ledger(), Some("9")).unwrap_err();
        assert!(matches!(err, LedgerError::NotFound(ref id) if id == "9"));
    }
}
