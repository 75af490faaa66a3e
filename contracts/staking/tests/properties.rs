//! Invariants that must hold across arbitrary operation sequences.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use proptest_derive::Arbitrary;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, Address, Env};
use staking::{StakingContract, StakingContractClient};

const STARTING_BALANCE: i128 = 100_000_000;
const INITIAL_REWARDS: i128 = 2_000_000;

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Who {
    Alice,
    Bob,
    Carol,
}

#[derive(Debug, Clone, Arbitrary)]
enum Op {
    Deposit { who: Who, amount: u16 },
    Withdraw { who: Who, amount: u16 },
    Claim { who: Who },
    Exit { who: Who },
    Advance { seconds: u16 },
    SetRate { rate: u8 },
    Fund { amount: u16 },
}

struct Harness {
    env: Env,
    contract_id: Address,
    client: StakingContractClient<'static>,
    admin: Address,
    stake: token::Client<'static>,
    reward: token::Client<'static>,
    reward_mint: token::StellarAssetClient<'static>,
    participants: [Address; 3],
}

impl Harness {
    fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().with_mut(|li| li.timestamp = 1_700_000_000);

        let issuer = Address::generate(&env);
        let stake_id = env
            .register_stellar_asset_contract_v2(issuer.clone())
            .address();
        let reward_id = env.register_stellar_asset_contract_v2(issuer).address();
        let stake_mint = token::StellarAssetClient::new(&env, &stake_id);
        let reward_mint = token::StellarAssetClient::new(&env, &reward_id);

        let contract_id = env.register(StakingContract, ());
        let client = StakingContractClient::new(&env, &contract_id);
        let admin = Address::generate(&env);
        client.initialize(&admin, &stake_id, &reward_id);

        let participants = [
            Address::generate(&env),
            Address::generate(&env),
            Address::generate(&env),
        ];
        for p in participants.iter() {
            stake_mint.mint(p, &STARTING_BALANCE);
        }

        reward_mint.mint(&admin, &INITIAL_REWARDS);
        client.deposit_rewards(&admin, &INITIAL_REWARDS);

        Harness {
            stake: token::Client::new(&env, &stake_id),
            reward: token::Client::new(&env, &reward_id),
            reward_mint,
            env,
            contract_id,
            client,
            admin,
            participants,
        }
    }

    fn who(&self, who: Who) -> &Address {
        match who {
            Who::Alice => &self.participants[0],
            Who::Bob => &self.participants[1],
            Who::Carol => &self.participants[2],
        }
    }

    fn apply(&self, op: &Op) -> Result<(), TestCaseError> {
        match *op {
            Op::Deposit { who, amount } => {
                let _ = self.client.try_deposit(self.who(who), &i128::from(amount));
            }
            Op::Withdraw { who, amount } => {
                let _ = self
                    .client
                    .try_withdraw(self.who(who), &i128::from(amount));
            }
            Op::Claim { who } => {
                let held_before = self.client.reward_balance();
                if let Ok(Ok(paid)) = self.client.try_claim(self.who(who)) {
                    prop_assert!(paid >= 0);
                    prop_assert!(paid <= held_before, "paid {} of {}", paid, held_before);
                    prop_assert_eq!(self.client.reward_balance(), held_before - paid);
                }
            }
            Op::Exit { who } => {
                let held_before = self.client.reward_balance();
                if let Ok(Ok(paid)) = self.client.try_exit(self.who(who)) {
                    prop_assert!(paid <= held_before);
                    prop_assert_eq!(self.client.get_principal(self.who(who)), 0);
                }
            }
            Op::Advance { seconds } => {
                self.env
                    .ledger()
                    .with_mut(|li| li.timestamp += u64::from(seconds));
            }
            Op::SetRate { rate } => {
                self.client.set_reward_rate(&self.admin, &i128::from(rate));
            }
            Op::Fund { amount } => {
                if amount > 0 {
                    let amount = i128::from(amount);
                    self.reward_mint.mint(&self.admin, &amount);
                    self.client.deposit_rewards(&self.admin, &amount);
                }
            }
        }
        Ok(())
    }

    fn principal_sum(&self) -> i128 {
        self.participants
            .iter()
            .map(|p| self.client.get_principal(p))
            .sum()
    }
}

fn run(ops: &[Op]) -> Result<(), TestCaseError> {
    let h = Harness::new();
    let mut last_rpu = h.client.get_pool().reward_per_unit_stored;
    let mut funded = INITIAL_REWARDS;

    for op in ops {
        h.apply(op)?;
        if let Op::Fund { amount } = *op {
            funded += i128::from(amount);
        }

        let pool = h.client.get_pool();
        prop_assert_eq!(pool.total_principal, h.principal_sum());
        prop_assert_eq!(h.stake.balance(&h.contract_id), pool.total_principal);
        prop_assert!(pool.reward_per_unit_stored >= last_rpu);
        last_rpu = pool.reward_per_unit_stored;

        for p in h.participants.iter() {
            let account = h.client.get_account(p);
            prop_assert!(account.principal >= 0);
            prop_assert!(account.accrued >= 0);
            prop_assert!(h.client.earned(p) >= account.accrued);
        }
    }

    // Reward tokens only ever move from the pool to participants.
    let paid_out: i128 = h.participants.iter().map(|p| h.reward.balance(p)).sum();
    prop_assert_eq!(paid_out + h.client.reward_balance(), funded);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ledger_invariants_hold(ops in prop::collection::vec(any::<Op>(), 1..40)) {
        run(&ops)?;
    }

    #[test]
    fn accumulator_stalls_with_empty_pool(rate in 1u8.., seconds in 1u16..) {
        let h = Harness::new();
        h.client.set_reward_rate(&h.admin, &i128::from(rate));
        h.env.ledger().with_mut(|li| li.timestamp += u64::from(seconds));

        prop_assert_eq!(h.client.reward_per_unit(), 0);
        prop_assert_eq!(h.client.earned(&h.participants[0]), 0);
    }

    #[test]
    fn split_matches_share_within_truncation(
        small in 1u16..,
        rate in 1u8..,
        seconds in 1u16..,
    ) {
        let h = Harness::new();
        let a = i128::from(small);
        let b = 3 * a;
        h.client.deposit(&h.participants[0], &a);
        h.client.deposit(&h.participants[1], &b);
        h.client.set_reward_rate(&h.admin, &i128::from(rate));
        h.env.ledger().with_mut(|li| li.timestamp += u64::from(seconds));

        let emitted = i128::from(rate) * i128::from(seconds);
        let ea = h.client.earned(&h.participants[0]);
        let eb = h.client.earned(&h.participants[1]);

        // Truncation only ever rounds down, by less than one unit each.
        prop_assert!(ea + eb <= emitted);
        prop_assert!(4 * ea <= emitted);
        prop_assert!(emitted - 4 * ea <= 4);
        prop_assert!((eb - 3 * ea).abs() <= 3);
    }
}
