//! Signature enforcement.
//!
//! The other suites run under `mock_all_auths`, which signs for every
//! address. Here the fixture is built that way, then only a chosen signer's
//! authorization is mocked for the call under test.

use soroban_sdk::{
    testutils::{Address as _, MockAuth, MockAuthInvoke},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env, IntoVal, Val, Vec,
};

use crate::{StakingContract, StakingContractClient};

// ── Test helpers ─────────────────────────────────────────────────────────────

struct Fixture {
    env: Env,
    client: StakingContractClient<'static>,
    admin: Address,
    token: Address,
    victim: Address,
    intruder: Address,
}

/// An initialized contract with both flags open and one whitelisted account
/// holding 100 tokens, 40 of them staked and the rest approved.
fn setup() -> Fixture {
    let env = Env::default();
    env.mock_all_auths();

    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(StakingContract, ());
    let client = StakingContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin, &token);
    client.allow_staking(&admin);
    client.allow_unstaking(&admin);

    let victim = Address::generate(&env);
    StellarAssetClient::new(&env, &token).mint(&victim, &100);
    TokenClient::new(&env, &token).approve(
        &victim,
        &contract_id,
        &100,
        &(env.ledger().sequence() + 1_000),
    );
    client.add_to_whitelist(&admin, &victim);
    client.stake(&victim, &40);

    let intruder = Address::generate(&env);

    Fixture {
        env,
        client,
        admin,
        token,
        victim,
        intruder,
    }
}

/// Mock exactly one authorization: `signer` approving `fn_name(args)`.
fn sign_as(f: &Fixture, signer: &Address, fn_name: &'static str, args: Vec<Val>) {
    f.env.mock_auths(&[MockAuth {
        address: signer,
        invoke: &MockAuthInvoke {
            contract: &f.client.address,
            fn_name,
            args,
            sub_invokes: &[],
        },
    }]);
}

fn custody(f: &Fixture) -> i128 {
    TokenClient::new(&f.env, &f.token).balance(&f.client.address)
}

fn wallet(f: &Fixture, owner: &Address) -> i128 {
    TokenClient::new(&f.env, &f.token).balance(owner)
}

// ── Admin entry points ────────────────────────────────────────────────────────

#[test]
fn test_refund_in_admins_name_needs_admin_signature() {
    let f = setup();

    sign_as(&f, &f.intruder, "refund", (f.admin.clone(),).into_val(&f.env));
    assert!(f.client.try_refund(&f.admin).is_err());

    assert_eq!(f.client.get_balance(&f.victim), 40);
    assert_eq!(f.client.get_total_staked(), 40);
    assert_eq!(custody(&f), 40);
    assert_eq!(wallet(&f, &f.victim), 60);
    assert!(f.client.staking_enabled());
    assert!(f.client.unstaking_enabled());

    // The same call signed by the admin goes through.
    sign_as(&f, &f.admin, "refund", (f.admin.clone(),).into_val(&f.env));
    f.client.refund(&f.admin);
    assert_eq!(wallet(&f, &f.victim), 100);
}

#[test]
fn test_flag_change_in_admins_name_needs_admin_signature() {
    let f = setup();
    sign_as(&f, &f.admin, "deny_staking", (f.admin.clone(),).into_val(&f.env));
    f.client.deny_staking(&f.admin);

    sign_as(&f, &f.intruder, "allow_staking", (f.admin.clone(),).into_val(&f.env));
    assert!(f.client.try_allow_staking(&f.admin).is_err());
    assert!(!f.client.staking_enabled());

    sign_as(&f, &f.admin, "allow_staking", (f.admin.clone(),).into_val(&f.env));
    f.client.allow_staking(&f.admin);
    assert!(f.client.staking_enabled());
}

#[test]
fn test_whitelist_edit_in_admins_name_needs_admin_signature() {
    let f = setup();

    sign_as(
        &f,
        &f.intruder,
        "add_to_whitelist",
        (f.admin.clone(), f.intruder.clone()).into_val(&f.env),
    );
    assert!(f
        .client
        .try_add_to_whitelist(&f.admin, &f.intruder)
        .is_err());
    assert!(!f.client.is_whitelisted(&f.intruder));
}

#[test]
fn test_no_signature_at_all_is_rejected() {
    let f = setup();
    f.env.mock_auths(&[]);

    assert!(f.client.try_refund(&f.admin).is_err());
    assert!(f.client.try_deny_unstaking(&f.admin).is_err());
    assert!(f.client.try_unstake(&f.victim, &40).is_err());

    assert!(f.client.unstaking_enabled());
    assert_eq!(f.client.get_balance(&f.victim), 40);
    assert_eq!(custody(&f), 40);
}

// ── Staker entry points ───────────────────────────────────────────────────────

#[test]
fn test_stake_in_victims_name_needs_victim_signature() {
    let f = setup();

    sign_as(
        &f,
        &f.intruder,
        "stake",
        (f.victim.clone(), 60_i128).into_val(&f.env),
    );
    assert!(f.client.try_stake(&f.victim, &60).is_err());

    // The approved tokens stay in the victim's wallet.
    assert_eq!(wallet(&f, &f.victim), 60);
    assert_eq!(f.client.get_balance(&f.victim), 40);
    assert_eq!(custody(&f), 40);

    sign_as(
        &f,
        &f.victim,
        "stake",
        (f.victim.clone(), 60_i128).into_val(&f.env),
    );
    f.client.stake(&f.victim, &60);
    assert_eq!(f.client.get_balance(&f.victim), 100);
}

#[test]
fn test_unstake_in_victims_name_needs_victim_signature() {
    let f = setup();

    sign_as(
        &f,
        &f.intruder,
        "unstake",
        (f.victim.clone(), 40_i128).into_val(&f.env),
    );
    assert!(f.client.try_unstake(&f.victim, &40).is_err());

    assert_eq!(f.client.get_balance(&f.victim), 40);
    assert_eq!(wallet(&f, &f.victim), 60);
    assert_eq!(wallet(&f, &f.intruder), 0);
    assert_eq!(custody(&f), 40);
}
