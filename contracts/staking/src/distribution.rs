//! Reward configuration and payout.

use soroban_sdk::{log, Address, Env};

use crate::state::{self, Config};
use crate::{accrual, events, rewards, transfer, ContractError};

/// Replace the emission rate after settling accrual at the old one.
pub fn set_reward_rate(env: &Env, new_rate: i128) -> Result<(), ContractError> {
    if !(0..=rewards::MAX_REWARD_RATE).contains(&new_rate) {
        return Err(ContractError::InvalidConfiguration);
    }

    let mut pool = state::get_pool(env);
    accrual::settle_pool(env, &mut pool);

    let old_rate = pool.reward_rate;
    pool.reward_rate = new_rate;
    state::set_pool(env, &pool);

    log!(env, "reward rate set", old_rate, new_rate);
    events::publish_rate_set(env, old_rate, new_rate);

    Ok(())
}

/// One-shot setup: emit `total_reward` evenly over `duration` seconds.
///
/// The pool must already hold the reward being promised.
pub fn initialize_distribution(
    env: &Env,
    config: &Config,
    total_reward: i128,
    duration: u64,
) -> Result<i128, ContractError> {
    let mut pool = state::get_pool(env);
    if pool.distribution_initialized {
        return Err(ContractError::AlreadyInitialized);
    }
    if total_reward <= 0 || duration == 0 {
        return Err(ContractError::InvalidConfiguration);
    }
    if transfer::pool_balance(env, &config.reward_token) < total_reward {
        return Err(ContractError::InsufficientRewardBalance);
    }

    let rate = rewards::rate_for(total_reward, duration).ok_or(ContractError::MathOverflow)?;
    if rate > rewards::MAX_REWARD_RATE {
        return Err(ContractError::InvalidConfiguration);
    }

    accrual::settle_pool(env, &mut pool);
    pool.reward_rate = rate;
    pool.distribution_initialized = true;
    state::set_pool(env, &pool);

    log!(env, "distribution initialized", total_reward, duration, rate);
    events::publish_distribution_initialized(env, total_reward, duration, rate);

    Ok(rate)
}

/// Pay `participant` what they have earned, capped at the pool's reward
/// balance. Returns the amount actually paid.
///
/// Only the paid amount leaves `accrued`; a shortfall stays claimable.
pub fn claim(env: &Env, config: &Config, participant: &Address) -> Result<i128, ContractError> {
    let mut pool = state::get_pool(env);
    let mut account = state::get_account(env, participant);
    accrual::settle(env, &mut pool, Some(&mut account));
    state::set_pool(env, &pool);

    let owed = account.accrued;
    if owed <= 0 {
        // Keep the fresh checkpoint; nothing to pay.
        state::set_account(env, participant, &account);
        return Ok(0);
    }

    let available = transfer::pool_balance(env, &config.reward_token);
    let paid = owed.min(available.max(0));
    account.accrued = owed - paid;
    state::set_account(env, participant, &account);

    if paid == 0 {
        log!(env, "claim deferred, reward pool empty", participant.clone(), owed);
        return Ok(0);
    }

    transfer::transfer_out(env, &config.reward_token, participant, paid)?;

    let shortfall = owed - paid;
    log!(env, "claim", participant.clone(), paid, shortfall);
    events::publish_reward_paid(env, participant.clone(), paid, shortfall);

    Ok(paid)
}

/// Pull `amount` reward units from `from` into the pool.
pub fn deposit_rewards(
    env: &Env,
    config: &Config,
    from: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    transfer::transfer_in(env, &config.reward_token, from, amount)?;

    log!(env, "rewards deposited", from.clone(), amount);
    events::publish_rewards_deposited(env, from.clone(), amount);

    Ok(())
}
