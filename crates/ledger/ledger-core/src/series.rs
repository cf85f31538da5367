//! Expense series extraction

use ledger_spi::{Period, Transaction};

/// Expense amounts ordered by transaction date, oldest first
///
/// Income is dropped. Transactions on the same date keep their relative
/// order, so the result is deterministic for a given listing.
pub fn expense_series(transactions: &[Transaction]) -> Vec<f64> {
    expense_series_in(transactions, Period::all())
}

/// Like [`expense_series`], keeping only expenses dated inside `period`
pub fn expense_series_in(transactions: &[Transaction], period: Period) -> Vec<f64> {
    let mut expenses: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.is_expense() && period.contains(t.date))
        .collect();
    expenses.sort_by_key(|t| t.date);
    expenses.into_iter().map(|t| t.amount).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ledger_spi::TransactionKind;

    fn txn(id: &str, amount: f64, kind: TransactionKind, date: (i32, u32, u32)) -> Transaction {
        Transaction {
            id: id.to_string(),
            description: "test".to_string(),
            amount,
            kind,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            category: "misc".to_string(),
            user_id: "user".to_string(),
        }
    }

    #[test]
    fn test_empty() {
        assert!(expense_series(&[]).is_empty());
    }

    #[test]
    fn test_drops_income_and_sorts_by_date() {
        let history = vec![
            txn("txn_1", 300.0, TransactionKind::Expense, (2024, 3, 1)),
            txn("txn_2", 5000.0, TransactionKind::Income, (2024, 1, 1)),
            txn("txn_3", 100.0, TransactionKind::Expense, (2024, 1, 5)),
            txn("txn_4", 200.0, TransactionKind::Expense, (2024, 2, 5)),
        ];
        assert_eq!(expense_series(&history), vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_same_day_keeps_insertion_order() {
        let history = vec![
            txn("txn_1", 12.0, TransactionKind::Expense, (2024, 5, 2)),
            txn("txn_2", 7.0, TransactionKind::Expense, (2024, 5, 1)),
            txn("txn_3", 9.0, TransactionKind::Expense, (2024, 5, 2)),
        ];
        assert_eq!(expense_series(&history), vec![7.0, 12.0, 9.0]);
    }

    #[test]
    fn test_period_excludes_other_months() {
        let history = vec![
            txn("txn_1", 80.0, TransactionKind::Expense, (2024, 3, 20)),
            txn("txn_2", 999.0, TransactionKind::Expense, (2024, 2, 28)),
            txn("txn_3", 40.0, TransactionKind::Expense, (2024, 3, 2)),
            txn("txn_4", 5000.0, TransactionKind::Income, (2024, 3, 1)),
            txn("txn_5", 777.0, TransactionKind::Expense, (2023, 3, 10)),
            txn("txn_6", 60.0, TransactionKind::Expense, (2024, 3, 11)),
        ];

        let march_2024 = Period::new(Some(2024), Some(3)).unwrap();
        assert_eq!(expense_series_in(&history, march_2024), vec![40.0, 60.0, 80.0]);

        let any_march = Period::new(None, Some(3)).unwrap();
        assert_eq!(
            expense_series_in(&history, any_march),
            vec![777.0, 40.0, 60.0, 80.0]
        );

        let year_2024 = Period::new(Some(2024), None).unwrap();
        assert_eq!(
            expense_series_in(&history, year_2024),
            vec![999.0, 40.0, 60.0, 80.0]
        );
    }

    #[test]
    fn test_unrestricted_period_matches_expense_series() {
        let history = vec![
            txn("txn_1", 80.0, TransactionKind::Expense, (2024, 3, 20)),
            txn("txn_2", 999.0, TransactionKind::Expense, (2023, 2, 28)),
        ];
        assert_eq!(
            expense_series_in(&history, Period::all()),
            expense_series(&history)
        );
    }

    #[test]
    fn test_only_income() {
        let history = vec![txn("txn_1", 5000.0, TransactionKind::Income, (2024, 1, 1))];
        assert!(expense_series(&history).is_empty());
    }
}
