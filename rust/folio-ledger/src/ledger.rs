use crate::{LedgerError, ShareSet, TOTAL_SHARE_BPS};
use folio_common::{PartyId, WorkId};
use std::collections::HashMap;
use tracing::debug;

/// One work's royalty state: its fixed share set and the payments that
/// have accumulated since the last distribution pass.
#[derive(Clone, Debug)]
struct LedgerEntry {
    shares: ShareSet,
    accrued: u128,
}

/// One distribution's payout to a single beneficiary.
pub type Payout = (PartyId, u128);

/// The royalty ledger: per-work accrual and per-beneficiary pending
/// balances.
///
/// The ledger is the sole writer of balance fields after a work is
/// created. Accumulated balances only grow through [`deposit`] and only
/// reset to zero atomically with a full [`distribute`] pass; pending
/// balances only shrink through the external payout system's [`debit`].
///
/// [`deposit`]: RoyaltyLedger::deposit
/// [`distribute`]: RoyaltyLedger::distribute
/// [`debit`]: RoyaltyLedger::debit
#[derive(Clone, Debug, Default)]
pub struct RoyaltyLedger {
    entries: HashMap<WorkId, LedgerEntry>,
    pending: HashMap<(WorkId, PartyId), u128>,
}

impl RoyaltyLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the ledger entry for a newly created work.
    ///
    /// Called exactly once per work by the registration orchestrator. The
    /// share invariants are proven by [`ShareSet`] construction; a second
    /// initialization of the same work is a programming defect and fails
    /// loudly.
    pub fn initialize(&mut self, work_id: WorkId, shares: ShareSet) {
        let displaced = self.entries.insert(
            work_id,
            LedgerEntry {
                shares,
                accrued: 0,
            },
        );
        assert!(
            displaced.is_none(),
            "royalty ledger initialized twice for {work_id}"
        );
    }

    /// Adds a payment to the work's accumulated balance.
    ///
    /// Rejects the deposit, leaving the balance untouched, if accepting it
    /// would overflow the accumulator.
    pub fn deposit(&mut self, work_id: WorkId, amount: u128) -> Result<(), LedgerError> {
        let entry = self
            .entries
            .get_mut(&work_id)
            .ok_or(LedgerError::UnknownWork(work_id))?;
        entry.accrued = entry
            .accrued
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow { work_id, amount })?;
        debug!(%work_id, amount, "deposited royalty payment");
        Ok(())
    }

    /// Distributes the work's entire accumulated balance among its
    /// collaborators.
    ///
    /// Each collaborator receives `floor(balance * share / 10000)`; the
    /// remainder left by flooring (at most collaborators − 1) goes to the
    /// holder of the largest share, ties broken by lowest party
    /// identifier. The accumulated balance resets to zero in the same
    /// mutation that credits the pending balances - no caller can observe
    /// one without the other.
    pub fn distribute(&mut self, work_id: WorkId) -> Result<Vec<Payout>, LedgerError> {
        let entry = self
            .entries
            .get_mut(&work_id)
            .ok_or(LedgerError::UnknownWork(work_id))?;
        if entry.accrued == 0 {
            return Err(LedgerError::NothingToDistribute(work_id));
        }

        let balance = entry.accrued;
        let mut payouts: Vec<Payout> = entry
            .shares
            .entries()
            .iter()
            .map(|share| {
                (
                    share.party,
                    balance * u128::from(share.share) / u128::from(TOTAL_SHARE_BPS),
                )
            })
            .collect();

        let floored: u128 = payouts.iter().map(|(_, amount)| amount).sum();
        let remainder = balance - floored;
        if remainder > 0 {
            let recipient = entry.shares.remainder_recipient();
            for payout in payouts.iter_mut() {
                if payout.0 == recipient {
                    payout.1 += remainder;
                    break;
                }
            }
        }

        entry.accrued = 0;
        for (party, amount) in &payouts {
            *self.pending.entry((work_id, *party)).or_insert(0) += amount;
        }

        debug!(%work_id, balance, "distributed accumulated royalties");
        Ok(payouts)
    }

    /// The work's accumulated, not yet distributed balance.
    pub fn accrued(&self, work_id: WorkId) -> Result<u128, LedgerError> {
        self.entries
            .get(&work_id)
            .map(|entry| entry.accrued)
            .ok_or(LedgerError::UnknownWork(work_id))
    }

    /// The work's share set.
    pub fn shares(&self, work_id: WorkId) -> Result<&ShareSet, LedgerError> {
        self.entries
            .get(&work_id)
            .map(|entry| &entry.shares)
            .ok_or(LedgerError::UnknownWork(work_id))
    }

    /// A beneficiary's withdrawable balance for a work.
    pub fn pending(&self, work_id: WorkId, party: &PartyId) -> u128 {
        self.pending.get(&(work_id, *party)).copied().unwrap_or(0)
    }

    /// Debits a pending balance on behalf of the external payout system.
    ///
    /// The core never initiates transfers itself; this is the hook the
    /// withdrawal boundary calls once it has paid a beneficiary out.
    pub fn debit(
        &mut self,
        work_id: WorkId,
        party: &PartyId,
        amount: u128,
    ) -> Result<(), LedgerError> {
        let available = self.pending(work_id, party);
        if amount > available {
            return Err(LedgerError::InsufficientPending {
                work_id,
                party: *party,
                requested: amount,
                available,
            });
        }
        if amount == available {
            self.pending.remove(&(work_id, *party));
        } else {
            self.pending.insert((work_id, *party), available - amount);
        }
        Ok(())
    }
}
