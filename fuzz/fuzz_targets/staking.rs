#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::Address as _,
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use staking::{StakingContract, StakingContractClient};

const STARTING_BALANCE: i128 = 1_000_000;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { who: u8, amount: i64 },
    Unstake { who: u8, amount: i64 },
    AddToWhitelist { who: u8 },
    RemoveFromWhitelist { who: u8 },
    SetStaking(bool),
    SetUnstaking(bool),
    Refund { who: u8 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(StakingContract, ());
    let client = StakingContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let _ = client.try_initialize(&admin, &token);

    // users[0] is the admin so admin-only calls are hit both ways.
    let mut users = vec![admin.clone()];
    let live_until = env.ledger().sequence() + 100_000;
    for _ in 0..4 {
        let user = Address::generate(&env);
        StellarAssetClient::new(&env, &token).mint(&user, &STARTING_BALANCE);
        TokenClient::new(&env, &token).approve(&user, &contract_id, &(STARTING_BALANCE * 1_000), &live_until);
        users.push(user);
    }

    for action in actions {
        match action {
            FuzzAction::Stake { who, amount } => {
                let user = &users[who as usize % users.len()];
                let _ = client.try_stake(user, &(amount as i128));
            }
            FuzzAction::Unstake { who, amount } => {
                let user = &users[who as usize % users.len()];
                let _ = client.try_unstake(user, &(amount as i128));
            }
            FuzzAction::AddToWhitelist { who } => {
                let account = &users[who as usize % users.len()];
                let _ = client.try_add_to_whitelist(&admin, account);
            }
            FuzzAction::RemoveFromWhitelist { who } => {
                let account = &users[who as usize % users.len()];
                let _ = client.try_remove_from_whitelist(&admin, account);
            }
            FuzzAction::SetStaking(enabled) => {
                let _ = if enabled {
                    client.try_allow_staking(&admin)
                } else {
                    client.try_deny_staking(&admin)
                };
            }
            FuzzAction::SetUnstaking(enabled) => {
                let _ = if enabled {
                    client.try_allow_unstaking(&admin)
                } else {
                    client.try_deny_unstaking(&admin)
                };
            }
            FuzzAction::Refund { who } => {
                let caller = &users[who as usize % users.len()];
                let _ = client.try_refund(caller);
            }
        }

        // Conservation: custody holds exactly what the ledger records.
        let custody = TokenClient::new(&env, &token).balance(&contract_id);
        let mut recorded = 0i128;
        for user in users.iter().skip(1) {
            let staked = client.get_balance(user);
            assert!(staked >= 0);
            assert_eq!(
                TokenClient::new(&env, &token).balance(user) + staked,
                STARTING_BALANCE
            );
            recorded += staked;
        }
        assert_eq!(recorded, custody);
        assert_eq!(client.get_total_staked(), custody);
    }
});
