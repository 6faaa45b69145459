//! Ledger service
//!
//! In-memory operations on a loaded record set: add, delete with renumbering,
//! keyword search and field-level modification. Nothing here touches the
//! disk; callers load the sheet first and save it afterwards.

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{NewTransaction, Transaction, TransactionField, TransactionId};

/// The record set for one command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap transactions in the order they were read
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Get all transactions in order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The id the next added transaction will get
    ///
    /// One past the largest id present, independent of the record count.
    pub fn next_id(&self) -> LedgerResult<TransactionId> {
        match self.transactions.iter().map(|t| t.id).max() {
            Some(max) => max.next(),
            None => Ok(TransactionId::FIRST),
        }
    }

    /// Append a new transaction and return it
    pub fn add(&mut self, input: NewTransaction) -> LedgerResult<&Transaction> {
        let txn = Transaction::new(self.next_id()?, input);
        debug!(id = %txn.id, "adding transaction");
        self.transactions.push(txn);
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// Remove every transaction with `id`, then renumber the rest `1..=N`
    ///
    /// Returns the number of transactions removed. Renumbering follows the
    /// current order, so any id other than "current position" is invalidated.
    pub fn delete(&mut self, id: TransactionId) -> LedgerResult<usize> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = before - self.transactions.len();

        if removed == 0 {
            return Err(LedgerError::transaction_not_found(id.to_string()));
        }

        self.renumber();
        debug!(%id, removed, "deleted transaction");
        Ok(removed)
    }

    /// Find transactions whose searchable fields contain `keyword`
    pub fn find(&self, keyword: &str) -> LedgerResult<Vec<&Transaction>> {
        let found: Vec<_> = self
            .transactions
            .iter()
            .filter(|t| t.contains_keyword(keyword))
            .collect();

        if found.is_empty() {
            return Err(LedgerError::transaction_not_found(keyword));
        }
        Ok(found)
    }

    /// Overwrite `field` on every transaction with `id`
    ///
    /// Hand-edited sheets may repeat an id; all matches are changed. Returns
    /// the number of transactions changed.
    pub fn modify(&mut self, id: TransactionId, field: &str, value: &str) -> LedgerResult<usize> {
        let mut matches = self.transactions.iter_mut().filter(|t| t.id == id).peekable();
        if matches.peek().is_none() {
            return Err(LedgerError::transaction_not_found(id.to_string()));
        }

        let field: TransactionField = field.parse()?;
        let mut changed = 0;
        for txn in matches {
            txn.set_field(field, value);
            changed += 1;
        }

        debug!(%id, %field, changed, "modified transaction");
        Ok(changed)
    }

    fn renumber(&mut self) {
        for (position, txn) in self.transactions.iter_mut().enumerate() {
            txn.id = TransactionId::new(position as i64 + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(reason: &str, counterparty: &str) -> NewTransaction {
        NewTransaction {
            date: "2024-06-01".into(),
            reason: reason.into(),
            amount: "10.00".into(),
            path: "none".into(),
            counterparty: counterparty.into(),
            note: "-".into(),
        }
    }

    fn ids(ledger: &Ledger) -> Vec<i64> {
        ledger.transactions().iter().map(|t| t.id.value()).collect()
    }

    fn ledger_with(reasons: &[&str]) -> Ledger {
        let mut ledger = Ledger::new();
        for reason in reasons {
            ledger.add(input(reason, "shop")).unwrap();
        }
        ledger
    }

    #[test]
    fn test_next_id_empty() {
        assert_eq!(Ledger::new().next_id().unwrap(), TransactionId::new(1));
    }

    #[test]
    fn test_next_id_uses_max_not_count() {
        let a = Transaction::new(TransactionId::new(9), input("a", "x"));
        let b = Transaction::new(TransactionId::new(4), input("b", "x"));
        let ledger = Ledger::from_transactions(vec![a, b]);

        assert_eq!(ledger.next_id().unwrap(), TransactionId::new(10));
    }

    #[test]
    fn test_add_after_max_id_fails_without_change() {
        let txns = vec![Transaction::new(TransactionId::new(i64::MAX), input("a", "x"))];
        let mut ledger = Ledger::from_transactions(txns);
        let before = ledger.clone();

        let err = ledger.add(input("b", "x")).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_add_appends_with_sequential_ids() {
        let ledger = ledger_with(&["rent", "food", "fuel"]);

        assert_eq!(ids(&ledger), vec![1, 2, 3]);
        assert_eq!(ledger.transactions()[2].reason, "fuel");
    }

    #[test]
    fn test_delete_renumbers_in_order() {
        let mut ledger = ledger_with(&["rent", "food", "fuel", "gift"]);

        assert_eq!(ledger.delete(TransactionId::new(2)).unwrap(), 1);

        assert_eq!(ids(&ledger), vec![1, 2, 3]);
        let reasons: Vec<_> = ledger.transactions().iter().map(|t| t.reason.as_str()).collect();
        assert_eq!(reasons, vec!["rent", "fuel", "gift"]);
    }

    #[test]
    fn test_delete_missing_leaves_ledger_unchanged() {
        let mut ledger = ledger_with(&["rent", "food"]);
        let before = ledger.clone();

        let err = ledger.delete(TransactionId::new(5)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_delete_removes_duplicates_and_densifies() {
        let txns = vec![
            Transaction::new(TransactionId::new(3), input("a", "x")),
            Transaction::new(TransactionId::new(7), input("b", "x")),
            Transaction::new(TransactionId::new(3), input("c", "x")),
            Transaction::new(TransactionId::new(12), input("d", "x")),
        ];
        let mut ledger = Ledger::from_transactions(txns);

        assert_eq!(ledger.delete(TransactionId::new(3)).unwrap(), 2);
        assert_eq!(ids(&ledger), vec![1, 2]);
        assert_eq!(ledger.transactions()[1].reason, "d");
    }

    #[test]
    fn test_add_delete_add() {
        let mut ledger = ledger_with(&["rent", "food", "fuel"]);
        ledger.delete(TransactionId::new(2)).unwrap();
        let added = ledger.add(input("gift", "friend")).unwrap().id;

        assert_eq!(added, TransactionId::new(3));
        assert_eq!(ids(&ledger), vec![1, 2, 3]);
    }

    #[test]
    fn test_find_preserves_order() {
        let mut ledger = Ledger::new();
        ledger.add(input("abc-lunch", "x")).unwrap();
        ledger.add(input("rent", "landlord")).unwrap();
        ledger.add(input("dinner", "zabcz")).unwrap();

        let found = ledger.find("abc").unwrap();
        let found_ids: Vec<_> = found.iter().map(|t| t.id.value()).collect();
        assert_eq!(found_ids, vec![1, 3]);
    }

    #[test]
    fn test_find_skips_amount() {
        let ledger = ledger_with(&["rent"]);

        let err = ledger.find("10.00").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let ledger = ledger_with(&["Rent"]);

        assert!(ledger.find("rent").is_err());
        assert_eq!(ledger.find("Rent").unwrap().len(), 1);
    }

    #[test]
    fn test_modify_targets_one_field() {
        let mut ledger = ledger_with(&["rent", "food", "fuel"]);
        let before = ledger.clone();

        assert_eq!(ledger.modify(TransactionId::new(2), "amount", "99.00").unwrap(), 1);

        let changed = &ledger.transactions()[1];
        assert_eq!(changed.amount, "99.00");
        assert_eq!(changed.reason, "food");
        assert_eq!(ledger.transactions()[0], before.transactions()[0]);
        assert_eq!(ledger.transactions()[2], before.transactions()[2]);
    }

    #[test]
    fn test_modify_every_duplicate() {
        let txns = vec![
            Transaction::new(TransactionId::new(1), input("a", "x")),
            Transaction::new(TransactionId::new(1), input("b", "x")),
        ];
        let mut ledger = Ledger::from_transactions(txns);

        assert_eq!(ledger.modify(TransactionId::new(1), "note", "dup").unwrap(), 2);
        assert!(ledger.transactions().iter().all(|t| t.note == "dup"));
    }

    #[test]
    fn test_modify_rejects_id_and_unknown_fields() {
        let mut ledger = ledger_with(&["rent"]);
        let before = ledger.clone();

        assert!(matches!(
            ledger.modify(TransactionId::new(1), "id", "5"),
            Err(LedgerError::UnknownField(_))
        ));
        assert!(matches!(
            ledger.modify(TransactionId::new(1), "payee", "bob"),
            Err(LedgerError::UnknownField(_))
        ));
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_modify_missing_id() {
        let mut ledger = ledger_with(&["rent"]);

        let err = ledger.modify(TransactionId::new(4), "date", "x").unwrap_err();
        assert!(err.is_not_found());
    }
}
