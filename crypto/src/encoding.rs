//! Canonical byte encoding of transactions.

use cairn_types::Transaction;

/// Domain separator prepended to every encoded transaction.
pub const TX_DOMAIN: &[u8] = b"cairn-tx";

/// Encode a transaction as `domain || len(sender) || sender || len(receiver) || receiver || amount`.
///
/// Lengths are `u32` big-endian, the amount is `u64` big-endian.
pub fn encode_transaction(tx: &Transaction) -> Vec<u8> {
    let sender = tx.sender().as_str().as_bytes();
    let receiver = tx.receiver().as_str().as_bytes();

    let mut buffer = Vec::with_capacity(TX_DOMAIN.len() + 16 + sender.len() + receiver.len());
    buffer.extend_from_slice(TX_DOMAIN);
    put_bytes(&mut buffer, sender);
    put_bytes(&mut buffer, receiver);
    buffer.extend_from_slice(&tx.amount().raw().to_be_bytes());
    buffer
}

fn put_bytes(buffer: &mut Vec<u8>, bytes: &[u8]) {
    // Saturates at u32::MAX; addresses never approach that length.
    let len = u32::try_from(bytes.len()).unwrap_or(u32::MAX);
    buffer.extend_from_slice(&len.to_be_bytes());
    buffer.extend_from_slice(bytes);
}
