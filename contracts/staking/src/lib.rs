#![no_std]

pub mod accrual;
pub mod distribution;
pub mod events;
pub mod ledger;
pub mod rewards;
pub mod state;
pub mod transfer;

use common::guard;
use soroban_sdk::{contract, contractimpl, log, Address, Env};

pub use state::{Config, ParticipantAccount, Pool};

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    InsufficientPrincipal = 5,
    InvalidConfiguration = 6,
    InsufficientRewardBalance = 7,
    TransferFailed = 8,
    Reentrant = 9,
    MathOverflow = 10,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingContract;

#[contractimpl]
impl StakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// * `stake_token`  – token participants deposit.
    /// * `reward_token` – token paid out as reward; must differ from
    ///   `stake_token` so reward holdings never include principal.
    ///
    /// The reward rate starts at zero; see `initialize_reward_distribution`
    /// and `set_reward_rate`.
    pub fn initialize(
        env: Env,
        admin: Address,
        stake_token: Address,
        reward_token: Address,
    ) -> Result<(), ContractError> {
        if state::has_config(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        if stake_token == reward_token {
            return Err(ContractError::InvalidConfiguration);
        }

        admin.require_auth();

        state::set_config(
            &env,
            &Config {
                admin: admin.clone(),
                stake_token: stake_token.clone(),
                reward_token: reward_token.clone(),
            },
        );
        state::set_pool(
            &env,
            &Pool {
                last_update_time: env.ledger().timestamp(),
                ..Pool::default()
            },
        );

        log!(&env, "pool initialized", admin.clone());
        events::publish_initialized(&env, admin, stake_token, reward_token);

        Ok(())
    }

    // ── Participant operations ──────────────────────────────────────────────

    /// Deposit `amount` stake tokens. Returns the new total principal.
    ///
    /// Accrual is settled first so the new principal does not earn
    /// retroactively.
    pub fn deposit(env: Env, participant: Address, amount: i128) -> Result<i128, ContractError> {
        let config = Self::load_config(&env)?;
        participant.require_auth();

        with_lock(&env, || ledger::deposit(&env, &config, &participant, amount))
    }

    /// Withdraw `amount` of principal. Returns the new total principal.
    pub fn withdraw(env: Env, participant: Address, amount: i128) -> Result<i128, ContractError> {
        let config = Self::load_config(&env)?;
        participant.require_auth();

        with_lock(&env, || ledger::withdraw(&env, &config, &participant, amount))
    }

    /// Claim earned reward. Returns the amount paid, which is less than
    /// earned when the pool is short; the rest stays claimable.
    pub fn claim(env: Env, participant: Address) -> Result<i128, ContractError> {
        let config = Self::load_config(&env)?;
        participant.require_auth();

        with_lock(&env, || distribution::claim(&env, &config, &participant))
    }

    /// Withdraw all principal and claim all reward in one step. Returns the
    /// reward paid.
    pub fn exit(env: Env, participant: Address) -> Result<i128, ContractError> {
        let config = Self::load_config(&env)?;
        participant.require_auth();

        with_lock(&env, || {
            let principal = state::get_account(&env, &participant).principal;
            ledger::withdraw(&env, &config, &participant, principal)?;
            distribution::claim(&env, &config, &participant)
        })
    }

    // ── Admin operations ─────────────────────────────────────────────────────

    /// Replace the reward rate (units per second across the pool). Rates
    /// above `rewards::MAX_REWARD_RATE` are rejected.
    ///
    /// Accrual up to now is settled at the old rate before the change.
    pub fn set_reward_rate(env: Env, caller: Address, rate: i128) -> Result<(), ContractError> {
        Self::require_admin(&env, &caller)?;

        distribution::set_reward_rate(&env, rate)
    }

    /// Emit `total_reward` over `duration` seconds. Callable once.
    ///
    /// The pool must already hold `total_reward`; fund it with
    /// `deposit_rewards` first. Returns the derived rate.
    pub fn initialize_reward_distribution(
        env: Env,
        caller: Address,
        total_reward: i128,
        duration: u64,
    ) -> Result<i128, ContractError> {
        let config = Self::require_admin(&env, &caller)?;

        with_lock(&env, || {
            distribution::initialize_distribution(&env, &config, total_reward, duration)
        })
    }

    /// Move `amount` reward tokens from the admin into the pool.
    pub fn deposit_rewards(env: Env, caller: Address, amount: i128) -> Result<(), ContractError> {
        let config = Self::require_admin(&env, &caller)?;

        with_lock(&env, || {
            distribution::deposit_rewards(&env, &config, &caller, amount)
        })
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn is_initialized(env: Env) -> bool {
        state::has_config(&env)
    }

    pub fn get_config(env: Env) -> Result<Config, ContractError> {
        Self::load_config(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        Ok(Self::load_config(&env)?.admin)
    }

    /// Stored pool state, as of the last settlement.
    pub fn get_pool(env: Env) -> Pool {
        state::get_pool(&env)
    }

    /// Stored account state, as of its last settlement.
    pub fn get_account(env: Env, participant: Address) -> ParticipantAccount {
        state::get_account(&env, &participant)
    }

    pub fn get_total_principal(env: Env) -> i128 {
        state::get_pool(&env).total_principal
    }

    pub fn get_principal(env: Env, participant: Address) -> i128 {
        state::get_account(&env, &participant).principal
    }

    pub fn get_reward_rate(env: Env) -> i128 {
        state::get_pool(&env).reward_rate
    }

    /// Accumulator value as of now, including unsettled time.
    pub fn reward_per_unit(env: Env) -> i128 {
        accrual::current_reward_per_unit(&env, &state::get_pool(&env))
    }

    /// Reward `participant` could claim right now if the pool were fully
    /// funded.
    pub fn earned(env: Env, participant: Address) -> i128 {
        let pool = state::get_pool(&env);
        let account = state::get_account(&env, &participant);
        accrual::earned(&env, &pool, &account)
    }

    /// Reward tokens currently held by the pool.
    pub fn reward_balance(env: Env) -> Result<i128, ContractError> {
        let config = Self::load_config(&env)?;
        Ok(transfer::pool_balance(&env, &config.reward_token))
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn load_config(env: &Env) -> Result<Config, ContractError> {
        state::get_config(env).ok_or(ContractError::NotInitialized)
    }

    /// Guard: `caller` signed and is the stored admin.
    fn require_admin(env: &Env, caller: &Address) -> Result<Config, ContractError> {
        let config = Self::load_config(env)?;
        caller.require_auth();
        if *caller != config.admin {
            return Err(ContractError::Unauthorized);
        }
        Ok(config)
    }
}

/// Run `op` holding the contract-wide reentrancy lock.
///
/// An `Err` fails the invocation, and the host discards the lock together
/// with every other write, so only the success path releases it.
fn with_lock<T>(
    env: &Env,
    op: impl FnOnce() -> Result<T, ContractError>,
) -> Result<T, ContractError> {
    if !guard::enter(env) {
        return Err(ContractError::Reentrant);
    }
    let result = op()?;
    guard::leave(env);
    Ok(result)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
