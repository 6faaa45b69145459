//! Transaction display formatting

use crate::models::Transaction;

/// Format transaction details as a labelled block
pub fn format_transaction_details(txn: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction {}: \n", txn.id));
    output.push_str(&format!("date: {}\n", txn.date));
    output.push_str(&format!("amount: {}\n", txn.amount));
    output.push_str(&format!("reason: {}\n", txn.reason));
    output.push_str(&format!("path: {}\n", txn.path));
    output.push_str(&format!("counterparty: {}\n", txn.counterparty));
    output.push_str(&format!("note: {}\n", txn.note));

    output
}

/// Format several transactions, each block followed by a blank line
pub fn format_transaction_list<'a, I>(transactions: I) -> String
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .map(|txn| format_transaction_details(txn) + "\n")
        .collect()
}
