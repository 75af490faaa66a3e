//! Adapter over the token contracts that actually hold value.
//!
//! The pool never moves tokens itself; it asks the stake or reward token
//! contract to do it. A transfer either fully succeeds or the calling
//! operation aborts with [`ContractError::TransferFailed`].

use soroban_sdk::{log, token, Address, Env};

use crate::ContractError;

/// Pull `amount` of `token` from `from` into the pool.
pub fn transfer_in(
    env: &Env,
    token: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let pool = env.current_contract_address();
    transfer(env, token, from, &pool, amount)
}

/// Push `amount` of `token` from the pool to `to`.
pub fn transfer_out(
    env: &Env,
    token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let pool = env.current_contract_address();
    transfer(env, token, &pool, to, amount)
}

/// Balance of `token` held by `holder`.
pub fn balance_of(env: &Env, token: &Address, holder: &Address) -> i128 {
    token::Client::new(env, token).balance(holder)
}

/// Balance of `token` held by the pool itself.
pub fn pool_balance(env: &Env, token: &Address) -> i128 {
    balance_of(env, token, &env.current_contract_address())
}

fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    match token::Client::new(env, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "token transfer rejected", token.clone(), amount);
            Err(ContractError::TransferFailed)
        }
    }
}
