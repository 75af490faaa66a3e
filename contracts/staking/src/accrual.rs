//! Settlement of the global accumulator against the ledger clock.
//!
//! Every operation that changes principal or pays reward settles first, so
//! no account is ever credited from a stale accumulator.

use soroban_sdk::Env;

use crate::rewards;
use crate::state::{ParticipantAccount, Pool};

/// Accumulator value as of now, including time not yet settled.
pub fn current_reward_per_unit(env: &Env, pool: &Pool) -> i128 {
    let elapsed = env
        .ledger()
        .timestamp()
        .saturating_sub(pool.last_update_time);

    rewards::reward_per_unit(
        pool.reward_per_unit_stored,
        pool.reward_rate,
        elapsed,
        pool.total_principal,
    )
}

/// Reward owed to `account` right now. Reads only.
pub fn earned(env: &Env, pool: &Pool, account: &ParticipantAccount) -> i128 {
    let current = current_reward_per_unit(env, pool);
    rewards::earned(
        account.principal,
        current,
        account.reward_per_unit_paid,
        account.accrued,
    )
}

/// Advance the stored accumulator to now.
pub fn settle_pool(env: &Env, pool: &mut Pool) {
    pool.reward_per_unit_stored = current_reward_per_unit(env, pool);
    pool.last_update_time = env.ledger().timestamp();
}

/// Fold everything `account` earned since its checkpoint into `accrued`
/// and move the checkpoint to the pool's stored accumulator.
///
/// The pool must already be settled.
pub fn settle_account(pool: &Pool, account: &mut ParticipantAccount) {
    account.accrued = rewards::earned(
        account.principal,
        pool.reward_per_unit_stored,
        account.reward_per_unit_paid,
        account.accrued,
    );
    account.reward_per_unit_paid = pool.reward_per_unit_stored;
}

/// Settle the pool and, when given, one account.
pub fn settle(env: &Env, pool: &mut Pool, account: Option<&mut ParticipantAccount>) {
    settle_pool(env, pool);
    if let Some(account) = account {
        settle_account(pool, account);
    }
}
