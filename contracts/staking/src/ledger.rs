use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

use crate::ContractError;

// ── Storage key constants ───────────────────────────────────────────────────

const TOTAL_STAKED: Symbol = symbol_short!("TOT_STK");
const HOLDERS: Symbol = symbol_short!("HOLDERS");

// Per-account balances use tuple keys: (USER_STAKE, account)
const USER_STAKE: Symbol = symbol_short!("STK");

const TTL_THRESHOLD: u32 = 518_400;
const TTL_EXTEND_TO: u32 = 2_073_600;

// ── Reads ───────────────────────────────────────────────────────────────────

/// Staked balance of `account`. An account with no entry holds zero.
pub fn balance_of(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&(USER_STAKE, account.clone()))
        .unwrap_or(0)
}

/// Sum of every balance in the ledger.
pub fn total_staked(env: &Env) -> i128 {
    env.storage().instance().get(&TOTAL_STAKED).unwrap_or(0)
}

/// Every account currently holding a nonzero balance, in the order each
/// first became a holder.
pub fn holders(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&HOLDERS)
        .unwrap_or(Vec::new(env))
}

// ── Mutations ───────────────────────────────────────────────────────────────

/// Adds `amount` to `account` and returns the new balance.
///
/// `amount` must already be validated as positive.
pub fn credit(env: &Env, account: &Address, amount: i128) -> Result<i128, ContractError> {
    let prev = balance_of(env, account);
    let next = prev.checked_add(amount).ok_or(ContractError::Overflow)?;
    let total = total_staked(env)
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;

    write_balance(env, account, next);
    write_total(env, total);
    if prev == 0 {
        let mut list = holders(env);
        list.push_back(account.clone());
        write_holders(env, &list);
    } else {
        extend_holders_ttl(env);
    }
    Ok(next)
}

/// Removes `amount` from `account` and returns the new balance.
///
/// Fails with `InsufficientStakedBalance` before writing anything when the
/// account holds less than `amount`.
pub fn debit(env: &Env, account: &Address, amount: i128) -> Result<i128, ContractError> {
    let prev = balance_of(env, account);
    if prev < amount {
        return Err(ContractError::InsufficientStakedBalance);
    }
    let next = prev - amount;
    let total = total_staked(env)
        .checked_sub(amount)
        .ok_or(ContractError::Overflow)?;

    write_balance(env, account, next);
    write_total(env, total);
    if next == 0 {
        untrack_holder(env, account);
    } else {
        extend_holders_ttl(env);
    }
    Ok(next)
}

/// Zeroes every balance and empties the holder index.
///
/// Returns each former holder with the amount it held, for the caller to pay
/// out. The ledger is fully drained before any value leaves the contract.
pub fn drain(env: &Env) -> Vec<(Address, i128)> {
    let mut owed = Vec::new(env);
    for account in holders(env).iter() {
        let amount = balance_of(env, &account);
        write_balance(env, &account, 0);
        if amount > 0 {
            owed.push_back((account, amount));
        }
    }
    write_holders(env, &Vec::new(env));
    write_total(env, 0);
    owed
}

// ── Storage helpers ─────────────────────────────────────────────────────────

fn write_balance(env: &Env, account: &Address, amount: i128) {
    let key = (USER_STAKE, account.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn write_total(env: &Env, total: i128) {
    env.storage().instance().set(&TOTAL_STAKED, &total);
}

fn write_holders(env: &Env, list: &Vec<Address>) {
    env.storage().persistent().set(&HOLDERS, list);
    env.storage()
        .persistent()
        .extend_ttl(&HOLDERS, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn extend_holders_ttl(env: &Env) {
    if env.storage().persistent().has(&HOLDERS) {
        env.storage()
            .persistent()
            .extend_ttl(&HOLDERS, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}

fn untrack_holder(env: &Env, account: &Address) {
    let mut kept = Vec::new(env);
    for holder in holders(env).iter() {
        if holder != *account {
            kept.push_back(holder);
        }
    }
    write_holders(env, &kept);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
