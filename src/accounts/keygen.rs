//! Bulk account generation.

use crate::accounts::store::AccountRecord;
use crate::blockchain::Wallet;

/// Derive `count` fresh accounts, logging each derived address.
pub fn generate_records(count: usize) -> Vec<AccountRecord> {
    let mut records = Vec::with_capacity(count);

    for i in 0..count {
        let wallet = Wallet::generate();
        tracing::info!(index = i + 1, address = %wallet.address(), "Wallet created");

        records.push(AccountRecord {
            private_key: wallet.private_key_hex(),
            address: wallet.address().to_string(),
            public_key: wallet.public_key_hex(),
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generates_requested_count() {
        assert_eq!(generate_records(0).len(), 0);
        assert_eq!(generate_records(3).len(), 3);
    }

    #[test]
    fn test_records_are_distinct_and_rederivable() {
        let records = generate_records(4);

        let addresses: HashSet<_> = records.iter().map(|r| r.address.clone()).collect();
        assert_eq!(addresses.len(), 4);

        for record in &records {
            let wallet = Wallet::from_raw_key(&record.private_key).unwrap();
            assert_eq!(wallet.address().to_string(), record.address);
            assert_eq!(wallet.public_key_hex(), record.public_key);
        }
    }
}
