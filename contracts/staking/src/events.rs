use soroban_sdk::{contracttype, symbol_short, Address, Env};

// ── Payloads ────────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub stake_token: Address,
    pub reward_token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub participant: Address,
    pub amount: i128,
    pub total_principal: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub participant: Address,
    pub amount: i128,
    pub total_principal: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPaidEvent {
    pub participant: Address,
    pub amount: i128,
    /// Earned reward left unpaid because the pool ran short.
    pub shortfall: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RateSetEvent {
    pub old_rate: i128,
    pub new_rate: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DistributionInitializedEvent {
    pub total_reward: i128,
    pub duration: u64,
    pub reward_rate: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsDepositedEvent {
    pub from: Address,
    pub amount: i128,
}

// ── Publishers ──────────────────────────────────────────────────────────────
// Topics lead with a short symbol; participant-scoped events add the
// participant address as a second topic so indexers can filter on it.

pub fn publish_initialized(env: &Env, admin: Address, stake_token: Address, reward_token: Address) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            stake_token,
            reward_token,
        },
    );
}

pub fn publish_staked(env: &Env, participant: Address, amount: i128, total_principal: i128) {
    env.events().publish(
        (symbol_short!("STAKED"), participant.clone()),
        StakedEvent {
            participant,
            amount,
            total_principal,
        },
    );
}

pub fn publish_withdrawn(env: &Env, participant: Address, amount: i128, total_principal: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), participant.clone()),
        WithdrawnEvent {
            participant,
            amount,
            total_principal,
        },
    );
}

pub fn publish_reward_paid(env: &Env, participant: Address, amount: i128, shortfall: i128) {
    env.events().publish(
        (symbol_short!("RWD_PAID"), participant.clone()),
        RewardPaidEvent {
            participant,
            amount,
            shortfall,
        },
    );
}

pub fn publish_rate_set(env: &Env, old_rate: i128, new_rate: i128) {
    env.events().publish(
        (symbol_short!("RATE_SET"),),
        RateSetEvent { old_rate, new_rate },
    );
}

pub fn publish_distribution_initialized(
    env: &Env,
    total_reward: i128,
    duration: u64,
    reward_rate: i128,
) {
    env.events().publish(
        (symbol_short!("DIST_INIT"),),
        DistributionInitializedEvent {
            total_reward,
            duration,
            reward_rate,
        },
    );
}

pub fn publish_rewards_deposited(env: &Env, from: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("RWD_DEP"), from.clone()),
        RewardsDepositedEvent { from, amount },
    );
}
