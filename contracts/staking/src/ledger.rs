//! Principal bookkeeping.
//!
//! Each operation settles, updates storage, then moves tokens. If the token
//! contract refuses the transfer the whole invocation fails and the host
//! discards the storage writes made before it.

use soroban_sdk::{log, Address, Env};

use crate::state::{self, Config};
use crate::{accrual, events, transfer, ContractError};

/// Add `amount` to `participant`'s principal. Returns the new pool total.
pub fn deposit(
    env: &Env,
    config: &Config,
    participant: &Address,
    amount: i128,
) -> Result<i128, ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    let mut pool = state::get_pool(env);
    let mut account = state::get_account(env, participant);
    accrual::settle(env, &mut pool, Some(&mut account));

    account.principal = account
        .principal
        .checked_add(amount)
        .ok_or(ContractError::MathOverflow)?;
    pool.total_principal = pool
        .total_principal
        .checked_add(amount)
        .ok_or(ContractError::MathOverflow)?;

    state::set_account(env, participant, &account);
    state::set_pool(env, &pool);

    transfer::transfer_in(env, &config.stake_token, participant, amount)?;

    log!(env, "deposit", participant.clone(), amount, pool.total_principal);
    events::publish_staked(env, participant.clone(), amount, pool.total_principal);

    Ok(pool.total_principal)
}

/// Remove `amount` from `participant`'s principal. Returns the new pool total.
pub fn withdraw(
    env: &Env,
    config: &Config,
    participant: &Address,
    amount: i128,
) -> Result<i128, ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    let mut pool = state::get_pool(env);
    let mut account = state::get_account(env, participant);
    if amount > account.principal {
        return Err(ContractError::InsufficientPrincipal);
    }

    accrual::settle(env, &mut pool, Some(&mut account));

    account.principal -= amount;
    pool.total_principal = pool
        .total_principal
        .checked_sub(amount)
        .ok_or(ContractError::MathOverflow)?;

    state::set_account(env, participant, &account);
    state::set_pool(env, &pool);

    transfer::transfer_out(env, &config.stake_token, participant, amount)?;

    log!(env, "withdraw", participant.clone(), amount, pool.total_principal);
    events::publish_withdrawn(env, participant.clone(), amount, pool.total_principal);

    Ok(pool.total_principal)
}
