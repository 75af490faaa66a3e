use common::ttl;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Storage key constants ───────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");
const POOL: Symbol = symbol_short!("POOL");

/// Prefix for per-participant persistent keys: `(ACCOUNT, address)`.
const ACCOUNT: Symbol = symbol_short!("ACCOUNT");

// ── Types ───────────────────────────────────────────────────────────────────

/// Fixed contract configuration, written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    /// Token participants deposit as principal.
    pub stake_token: Address,
    /// Token paid out as reward.
    pub reward_token: Address,
}

/// Process-wide accrual state. There is exactly one.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Pool {
    /// Sum of every participant's principal.
    pub total_principal: i128,
    /// Cumulative reward per unit of principal, scaled by `rewards::SCALE`.
    /// Never decreases.
    pub reward_per_unit_stored: i128,
    /// Ledger timestamp of the last settlement.
    pub last_update_time: u64,
    /// Reward units emitted per second across the whole pool.
    pub reward_rate: i128,
    /// Set once by `initialize_reward_distribution`.
    pub distribution_initialized: bool,
}

/// One participant's position.
///
/// Created on first touch and never removed; an account with zero
/// principal and zero `accrued` is simply empty.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParticipantAccount {
    pub principal: i128,
    /// Accumulator value at this account's last settlement.
    pub reward_per_unit_paid: i128,
    /// Reward settled into the account and not yet paid out.
    pub accrued: i128,
}

// ── Storage helpers ─────────────────────────────────────────────────────────

pub(crate) fn account_key(participant: &Address) -> (Symbol, Address) {
    (ACCOUNT, participant.clone())
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&CONFIG)
}

pub fn get_config(env: &Env) -> Option<Config> {
    env.storage().instance().get(&CONFIG)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&CONFIG, config);
}

/// Load the pool, or the empty pool before bootstrap.
pub fn get_pool(env: &Env) -> Pool {
    env.storage().instance().get(&POOL).unwrap_or_default()
}

pub fn set_pool(env: &Env, pool: &Pool) {
    env.storage().instance().set(&POOL, pool);
    ttl::extend_instance(env);
}

/// Load an account, defaulting to the empty account on first access.
/// Does not touch the TTL; only `set_account` does.
pub fn get_account(env: &Env, participant: &Address) -> ParticipantAccount {
    env.storage()
        .persistent()
        .get(&account_key(participant))
        .unwrap_or_default()
}

/// Persist an account and push its TTL out.
pub fn set_account(env: &Env, participant: &Address, account: &ParticipantAccount) {
    let key = account_key(participant);
    env.storage().persistent().set(&key, account);
    ttl::extend_persistent(env, &key);
}
