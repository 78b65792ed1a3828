use chrono::{DateTime, NaiveDate, Utc};

use finapi_core::{DomainError, DomainResult, ValueObject};

/// Non-negative monetary amount in the caller's unit.
///
/// No rounding or precision policy applies; amounts are plain integers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Validate a raw amount. Zero is accepted; negative values are not.
    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::validation("amount must not be negative"));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl ValueObject for Amount {}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Direction of a statement operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Credit,
    Debit,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Credit => "credit",
            OperationKind::Debit => "debit",
        }
    }
}

/// One immutable entry of a customer's statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub kind: OperationKind,
    pub amount: Amount,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Operation {
    pub fn credit(amount: Amount, description: Option<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            kind: OperationKind::Credit,
            amount,
            description,
            created_at,
        }
    }

    pub fn debit(amount: Amount, created_at: DateTime<Utc>) -> Self {
        Self {
            kind: OperationKind::Debit,
            amount,
            description: None,
            created_at,
        }
    }

    /// Signed contribution of this operation to the balance.
    pub fn signed_amount(&self) -> i128 {
        let amount = i128::from(self.amount.value());
        match self.kind {
            OperationKind::Credit => amount,
            OperationKind::Debit => -amount,
        }
    }
}

impl ValueObject for Operation {}

/// Append-only, insertion-ordered sequence of operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statement {
    operations: Vec<Operation>,
}

impl Statement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    /// All operations, oldest first.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Operations whose UTC calendar day is `date`, in statement order.
    pub fn on_date(&self, date: NaiveDate) -> Vec<Operation> {
        self.operations
            .iter()
            .filter(|op| op.created_at.date_naive() == date)
            .cloned()
            .collect()
    }

    /// Left fold from zero: credits add, debits subtract.
    ///
    /// Accumulates in `i128` so the result is exact for any run of `i64`
    /// amounts.
    pub fn balance(&self) -> i128 {
        self.operations
            .iter()
            .map(Operation::signed_amount)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn amount(v: i64) -> Amount {
        Amount::new(v).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn negative_amount_is_rejected() {
        let err = Amount::new(-1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(Amount::new(0).unwrap(), Amount::ZERO);
    }

    #[test]
    fn empty_statement_has_zero_balance() {
        let statement = Statement::new();
        assert!(statement.is_empty());
        assert_eq!(statement.balance(), 0);
    }

    #[test]
    fn balance_adds_credits_and_subtracts_debits() {
        let mut statement = Statement::new();
        statement.append(Operation::credit(amount(100), Some("init".into()), at(2024, 1, 1, 9)));
        statement.append(Operation::debit(amount(40), at(2024, 1, 1, 10)));
        statement.append(Operation::credit(amount(5), None, at(2024, 1, 2, 9)));

        assert_eq!(statement.balance(), 65);
        assert_eq!(statement.len(), 3);
        assert_eq!(statement.operations()[1].kind, OperationKind::Debit);
    }

    #[test]
    fn on_date_filters_by_utc_day_and_keeps_order() {
        let mut statement = Statement::new();
        statement.append(Operation::credit(amount(1), None, at(2024, 3, 1, 0)));
        statement.append(Operation::credit(amount(2), None, at(2024, 3, 2, 12)));
        statement.append(Operation::debit(amount(1), at(2024, 3, 1, 23)));

        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let ops = statement.on_date(day);
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].kind, OperationKind::Credit);
        assert_eq!(ops[1].kind, OperationKind::Debit);

        let empty_day = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        assert!(statement.on_date(empty_day).is_empty());
    }

    #[test]
    fn balance_is_exact_past_the_i64_range() {
        let mut statement = Statement::new();
        statement.append(Operation::credit(amount(i64::MAX), None, at(2024, 1, 1, 9)));
        statement.append(Operation::credit(amount(1), None, at(2024, 1, 1, 10)));
        assert_eq!(statement.balance(), i128::from(i64::MAX) + 1);

        statement.append(Operation::debit(amount(i64::MAX), at(2024, 1, 1, 11)));
        assert_eq!(statement.balance(), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the balance after a run of deposits is their sum.
        #[test]
        fn balance_of_credits_is_their_sum(
            amounts in prop::collection::vec(0i64..1_000_000i64, 0..50)
        ) {
            let mut statement = Statement::new();
            for a in &amounts {
                statement.append(Operation::credit(amount(*a), None, Utc::now()));
            }
            prop_assert_eq!(statement.balance(), amounts.iter().map(|a| i128::from(*a)).sum::<i128>());
        }

        /// Property: filtering by day yields an order-preserving subsequence
        /// whose members all fall on that day.
        #[test]
        fn on_date_is_an_ordered_subsequence(
            entries in prop::collection::vec((1u32..=5u32, 0u32..24u32, 0i64..1_000i64), 0..40),
            day in 1u32..=5u32,
        ) {
            let mut statement = Statement::new();
            for (d, h, a) in &entries {
                statement.append(Operation::credit(amount(*a), None, at(2024, 6, *d, *h)));
            }

            let date = NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
            let filtered = statement.on_date(date);

            prop_assert!(filtered.iter().all(|op| op.created_at.date_naive() == date));

            let expected: Vec<Operation> = statement
                .operations()
                .iter()
                .filter(|op| op.created_at.date_naive() == date)
                .cloned()
                .collect();
            prop_assert_eq!(filtered, expected);
        }
    }
}
