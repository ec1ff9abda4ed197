//! Transaction types returned by the finance backend.
//!
//! The backend owns transaction parsing and persistence; the bot only
//! renders what comes back.

use serde::Deserialize;

/// Receipt returned after a `+/-valor descrição, categoria` message is
/// accepted by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisteredTransaction {
    /// Parsed description of the transaction.
    pub description: String,

    /// Absolute amount in the user's currency.
    pub amount: f64,
}

/// The transaction removed by an undo request.
#[derive(Debug, Clone, Deserialize)]
pub struct DeletedTransaction {
    /// Description of the removed transaction.
    pub description: String,

    /// Absolute amount of the removed transaction.
    pub amount: f64,
}

/// Whether a transaction is money in or money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A transaction as returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRecord {
    /// Direction of the transaction.
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Date as formatted by the backend.
    pub transaction_date: String,

    /// Description of the transaction.
    pub description: String,

    /// Absolute amount.
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_transaction_deserialization() {
        let json = r#"{"description": "pizza", "amount": 50.0}"#;
        let tx: RegisteredTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.description, "pizza");
        assert_eq!(tx.amount, 50.0);
    }

    #[test]
    fn test_transaction_record_deserialization() {
        let json = r#"{
            "type": "income",
            "transaction_date": "2024-03-01",
            "description": "salario",
            "amount": 3200.0
        }"#;

        let record: TransactionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, TransactionKind::Income);
        assert_eq!(record.transaction_date, "2024-03-01");
        assert_eq!(record.description, "salario");
    }

    #[test]
    fn test_transaction_kind_uses_lowercase_wire_names() {
        let kind: TransactionKind = serde_json::from_str(r#""expense""#).unwrap();
        assert_eq!(kind, TransactionKind::Expense);

        let unknown = serde_json::from_str::<TransactionKind>(r#""transfer""#);
        assert!(unknown.is_err());
    }
}
