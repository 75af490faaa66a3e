//! Contract-wide reentrancy lock.
//!
//! The flag lives in instance storage, so it covers the whole contract
//! rather than a single account. A failed invocation rolls back its storage
//! writes, which means the flag cannot outlive the call that set it.

use soroban_sdk::{symbol_short, Env, Symbol};

const LOCKED: Symbol = symbol_short!("LOCKED");

/// Takes the lock. Returns `false` when it is already held.
pub fn enter(env: &Env) -> bool {
    if is_locked(env) {
        return false;
    }
    env.storage().instance().set(&LOCKED, &true);
    true
}

/// Releases the lock.
pub fn leave(env: &Env) {
    env.storage().instance().remove(&LOCKED);
}

/// Returns whether an operation currently holds the lock.
pub fn is_locked(env: &Env) -> bool {
    env.storage().instance().get(&LOCKED).unwrap_or(false)
}
