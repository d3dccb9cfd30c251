use proptest::prelude::*;

use cairn_ledger::{ChainStatus, Ledger};
use cairn_nullables::NullValidator;
use cairn_types::{Amount, Digest, Proof, SystemClock};

#[derive(Clone, Debug)]
enum Op {
    Submit { sender: String, receiver: String, amount: u64 },
    Mine { miner: String },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[a-z0-9]{1,8}", "[a-z0-9]{1,8}", any::<u64>())
            .prop_map(|(sender, receiver, amount)| Op::Submit { sender, receiver, amount }),
        "[a-z0-9]{1,8}".prop_map(|miner| Op::Mine { miner }),
    ]
}

fn build(ops: &[Op]) -> Ledger<NullValidator, SystemClock> {
    let mut ledger =
        Ledger::with_parts(Default::default(), NullValidator::new(), SystemClock).unwrap();
    for op in ops {
        match op {
            Op::Submit { sender, receiver, amount } => {
                ledger.new_transaction(sender.as_str(), receiver.as_str(), Amount::new(*amount));
            }
            Op::Mine { miner } => {
                ledger.mine(miner.as_str()).unwrap();
                assert_pool_empty(&ledger);
            }
        }
    }
    ledger
}

fn assert_pool_empty(ledger: &Ledger<NullValidator, SystemClock>) {
    assert!(ledger.pending().is_empty(), "pool must be empty after sealing");
}

fn mines(ops: &[Op]) -> usize {
    ops.iter().filter(|op| matches!(op, Op::Mine { .. })).count()
}

proptest! {
    /// Any chain built through new_transaction/mine verifies.
    #[test]
    fn built_chains_always_verify(ops in prop::collection::vec(op(), 0..24)) {
        let ledger = build(&ops);
        let expected = mines(&ops) + 1;
        prop_assert_eq!(ledger.len(), expected);
        prop_assert_eq!(ledger.verify(), ChainStatus::Valid { length: expected });
        prop_assert_eq!(ledger.check_chain().len(), expected);
    }

    /// Indexes start at 1 and increase by exactly one.
    #[test]
    fn indexes_are_contiguous(ops in prop::collection::vec(op(), 0..24)) {
        let ledger = build(&ops);
        for (position, block) in ledger.chain().iter().enumerate() {
            prop_assert_eq!(block.index, position as u64 + 1);
        }
    }

    /// Changing any non-genesis proof is detected.
    #[test]
    fn tampered_proof_is_detected(
        blocks in 1usize..8,
        target in any::<prop::sample::Index>(),
        delta in 1u64..u64::MAX,
    ) {
        let ops: Vec<_> = (0..blocks).map(|i| Op::Mine { miner: format!("m{i}") }).collect();
        let mut ledger = build(&ops);
        let at = 1 + target.index(blocks);
        let proof = ledger.chain()[at].proof;
        ledger.chain_mut()[at].proof = Proof(proof.0.wrapping_add(delta));
        prop_assert!(ledger.check_chain().is_empty());
        prop_assert_eq!(
            ledger.verify().violation().map(|v| v.index()),
            Some(at as u64 + 1)
        );
    }

    /// Changing any non-genesis previous hash is detected.
    #[test]
    fn tampered_link_is_detected(
        blocks in 1usize..8,
        target in any::<prop::sample::Index>(),
        forged in prop::array::uniform32(0u8..),
    ) {
        let ops: Vec<_> = (0..blocks).map(|i| Op::Mine { miner: format!("m{i}") }).collect();
        let mut ledger = build(&ops);
        let at = 1 + target.index(blocks);
        let forged = Digest::new(forged);
        prop_assume!(forged != ledger.chain()[at].previous_hash);
        ledger.chain_mut()[at].previous_hash = forged;
        prop_assert!(ledger.check_chain().is_empty());
    }
}
