#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, Address, Env};
use staking::{StakingContract, StakingContractClient};

#[derive(Arbitrary, Debug)]
enum Action {
    Deposit { who: u8, amount: u32 },
    Withdraw { who: u8, amount: u32 },
    Claim { who: u8 },
    Exit { who: u8 },
    Advance { seconds: u32 },
    SetRate { rate: u32 },
    Fund { amount: u32 },
}

#[derive(Arbitrary, Debug)]
struct Input {
    actions: Vec<Action>,
}

const PARTICIPANTS: usize = 4;

fuzz_target!(|input: Input| {
    let env = Env::default();
    env.mock_all_auths();

    let issuer = Address::generate(&env);
    let stake_id = env
        .register_stellar_asset_contract_v2(issuer.clone())
        .address();
    let reward_id = env.register_stellar_asset_contract_v2(issuer).address();
    let stake = token::Client::new(&env, &stake_id);
    let stake_mint = token::StellarAssetClient::new(&env, &stake_id);
    let reward_mint = token::StellarAssetClient::new(&env, &reward_id);

    let contract_id = env.register(StakingContract, ());
    let client = StakingContractClient::new(&env, &contract_id);
    let admin = Address::generate(&env);
    client.initialize(&admin, &stake_id, &reward_id);

    let participants: Vec<Address> = (0..PARTICIPANTS)
        .map(|_| {
            let p = Address::generate(&env);
            stake_mint.mint(&p, &i128::from(u32::MAX));
            p
        })
        .collect();
    let pick = |who: u8| &participants[usize::from(who) % PARTICIPANTS];

    let mut last_rpu = 0i128;

    for action in input.actions.iter().take(64) {
        match *action {
            Action::Deposit { who, amount } => {
                let _ = client.try_deposit(pick(who), &i128::from(amount));
            }
            Action::Withdraw { who, amount } => {
                let _ = client.try_withdraw(pick(who), &i128::from(amount));
            }
            Action::Claim { who } => {
                let held = client.reward_balance();
                if let Ok(Ok(paid)) = client.try_claim(pick(who)) {
                    assert!(paid >= 0 && paid <= held, "claim paid beyond pool balance");
                }
            }
            Action::Exit { who } => {
                let held = client.reward_balance();
                if let Ok(Ok(paid)) = client.try_exit(pick(who)) {
                    assert!(paid <= held, "exit paid beyond pool balance");
                }
            }
            Action::Advance { seconds } => {
                env.ledger()
                    .with_mut(|li| li.timestamp += u64::from(seconds % 1_000_000));
            }
            Action::SetRate { rate } => {
                let _ = client.try_set_reward_rate(&admin, &i128::from(rate % 1_000_000));
            }
            Action::Fund { amount } => {
                if amount > 0 {
                    reward_mint.mint(&admin, &i128::from(amount));
                    client.deposit_rewards(&admin, &i128::from(amount));
                }
            }
        }

        let pool = client.get_pool();
        let sum: i128 = participants.iter().map(|p| client.get_principal(p)).sum();
        assert_eq!(pool.total_principal, sum, "principal not conserved");
        assert_eq!(stake.balance(&contract_id), pool.total_principal);
        assert!(pool.reward_per_unit_stored >= last_rpu, "accumulator went backwards");
        last_rpu = pool.reward_per_unit_stored;
    }
});
