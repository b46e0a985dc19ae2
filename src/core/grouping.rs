//! Account partitioning and output filename derivation
//!
//! Pure functions: no I/O, no side effects. Records are partitioned by
//! account in first-seen order, and each group derives a deterministic
//! filename from its date range.

use crate::types::TransactionRecord;
use chrono::NaiveDate;

/// All records belonging to one account, in source insertion order
///
/// Groups are only built by [`group_by_account`] and therefore always
/// hold at least one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountGroup {
    account: String,
    records: Vec<TransactionRecord>,
}

impl AccountGroup {
    fn new(record: TransactionRecord) -> Self {
        Self {
            account: record.account.clone(),
            records: vec![record],
        }
    }

    /// The account value shared by every record in the group
    pub fn account(&self) -> &str {
        &self.account
    }

    /// The group's records in insertion order
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Earliest and latest transaction date in the group
    ///
    /// A single-record group yields an identical pair. Ties between
    /// records sharing an extremum date are irrelevant: only the date
    /// itself is used.
    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        // Groups are never empty (see group_by_account)
        let first = self.records[0].date;
        self.records
            .iter()
            .skip(1)
            .fold((first, first), |(min, max), record| {
                (min.min(record.date), max.max(record.date))
            })
    }

    /// Derived output filename: `{account}_{minDate}_to_{maxDate}.csv`
    ///
    /// Dates render in ISO `YYYY-MM-DD` form. The account value is used
    /// verbatim.
    pub fn file_name(&self) -> String {
        let (min, max) = self.date_range();
        format!("{}_{}_to_{}.csv", self.account, min, max)
    }
}

/// Partition records by account
///
/// Group order follows the first appearance of each account in the
/// input; within a group, records keep their source order.
pub fn group_by_account(records: Vec<TransactionRecord>) -> Vec<AccountGroup> {
    let mut groups: Vec<AccountGroup> = Vec::new();

    for record in records {
        match groups.iter_mut().find(|g| g.account == record.account) {
            Some(group) => group.records.push(record),
            None => groups.push(AccountGroup::new(record)),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn record(account: &str, date: (i32, u32, u32)) -> TransactionRecord {
        TransactionRecord {
            account: account.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            description: "txn".to_string(),
            amount: Decimal::ONE,
        }
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let records = vec![
            record("Savings", (2020, 1, 2)),
            record("Checking", (2020, 1, 1)),
            record("Savings", (2020, 1, 3)),
            record("ISA", (2020, 1, 4)),
        ];

        let groups = group_by_account(records);

        let accounts: Vec<_> = groups.iter().map(AccountGroup::account).collect();
        assert_eq!(accounts, ["Savings", "Checking", "ISA"]);
        assert_eq!(groups[0].records().len(), 2);
    }

    #[test]
    fn test_every_record_lands_in_exactly_one_group() {
        let records = vec![
            record("A", (2020, 1, 1)),
            record("B", (2020, 1, 2)),
            record("A", (2020, 1, 3)),
        ];

        let groups = group_by_account(records.clone());

        let total: usize = groups.iter().map(|g| g.records().len()).sum();
        assert_eq!(total, records.len());
        for group in &groups {
            for rec in group.records() {
                assert_eq!(rec.account, group.account());
            }
        }
    }

    // Filename must use the min and max date regardless of input order
    #[rstest]
    #[case::sorted(&[(2020, 1, 1), (2020, 1, 5), (2020, 1, 10)])]
    #[case::reversed(&[(2020, 1, 10), (2020, 1, 5), (2020, 1, 1)])]
    #[case::shuffled(&[(2020, 1, 5), (2020, 1, 1), (2020, 1, 10)])]
    fn test_filename_is_order_independent(#[case] dates: &[(i32, u32, u32)]) {
        let records = dates.iter().map(|&d| record("Checking", d)).collect();
        let groups = group_by_account(records);

        assert_eq!(groups.len(), 1);
        assert_eq!(
            groups[0].file_name(),
            "Checking_2020-01-01_to_2020-01-10.csv"
        );
    }

    #[test]
    fn test_single_record_group_has_equal_range_ends() {
        let groups = group_by_account(vec![record("Savings", (2020, 1, 10))]);

        assert_eq!(groups.len(), 1);
        let (min, max) = groups[0].date_range();
        assert_eq!(min, max);
        assert_eq!(groups[0].file_name(), "Savings_2020-01-10_to_2020-01-10.csv");
    }

    #[test]
    fn test_duplicate_dates_are_fine() {
        let records = vec![
            record("A", (2020, 3, 26)),
            record("A", (2020, 3, 26)),
        ];
        let groups = group_by_account(records);
        assert_eq!(groups[0].file_name(), "A_2020-03-26_to_2020-03-26.csv");
    }

    #[test]
    fn test_no_records_no_groups() {
        assert!(group_by_account(Vec::new()).is_empty());
    }
}
