use rust_decimal::Decimal;
use rust_decimal::dec;
use time::Date;
use time::macros::date;

use crate::transaction::{TransactionRecord, TransactionType};

fn record(
    id: &str,
    date: Date,
    amount: Decimal,
    tx_type: TransactionType,
    description: &str,
    merchant_name: &str,
    card_type: &str,
) -> TransactionRecord {
    TransactionRecord {
        id: id.to_string(),
        date,
        amount,
        tx_type,
        description: description.to_string(),
        merchant_name: merchant_name.to_string(),
        card_type: card_type.to_string(),
    }
}

pub fn sample_transactions() -> Vec<TransactionRecord> {
    vec![
        record(
            "1",
            date!(2025 - 03 - 01),
            dec!(100.5),
            TransactionType::Credit,
            "Покупка в магазине \"Техномир\"",
            "Техномир",
            "кредитная",
        ),
        record(
            "2",
            date!(2025 - 03 - 02),
            dec!(50),
            TransactionType::Debit,
            "Платеж за услуги сервиса \"АвтоСервисПро\"",
            "АвтоСервисПро",
            "дебетовая",
        ),
        record(
            "3",
            date!(2025 - 03 - 03),
            dec!(200),
            TransactionType::Credit,
            "Покупка в магазине \"Мир Спорта\"",
            "Мир Спорта",
            "кредитная",
        ),
        record(
            "4",
            date!(2025 - 03 - 01),
            dec!(75.25),
            TransactionType::Debit,
            "Оплата ужина в ресторане \"Гастроном\"",
            "Гастроном",
            "дебетовая",
        ),
        record(
            "5",
            date!(2025 - 03 - 03),
            dec!(120),
            TransactionType::Debit,
            "Платеж за услуги интернет-платформы \"Учёба Онлайн\"",
            "Учёба Онлайн",
            "дебетовая",
        ),
        record(
            "6",
            date!(2025 - 03 - 02),
            dec!(30),
            TransactionType::Credit,
            "Покупка в кафе \"Кофе и сладости\"",
            "Кофе и сладости",
            "кредитная",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn fixture_has_six_unique_ids() {
        let records = sample_transactions();
        assert_eq!(records.len(), 6);
        let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn fixture_is_all_march_2025() {
        for record in sample_transactions() {
            assert_eq!(record.date.year(), 2025);
            assert_eq!(record.date.month(), time::Month::March);
        }
    }
}
