//! # On-chain Allowlist
//!
//! Membership is stored as one persistent entry per address. Presence of the
//! entry means membership, so an address that was never added and an address
//! that was removed are indistinguishable.
//!
//! Both [`add`] and [`remove`] are idempotent and report whether membership
//! actually changed, which lets callers decide whether to publish an event.

use soroban_sdk::{contracttype, Address, Env};

// ── Storage key ──────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum WhitelistKey {
    Member(Address),
}

// ── TTL constants (~30 / ~120 days at 5s ledgers) ─────────────────────────────

const TTL_THRESHOLD: u32 = 518_400;
const TTL_EXTEND_TO: u32 = 2_073_600;

fn member_key(account: &Address) -> WhitelistKey {
    WhitelistKey::Member(account.clone())
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Returns `true` when `account` is currently on the allowlist.
pub fn is_whitelisted(env: &Env, account: &Address) -> bool {
    env.storage().persistent().has(&member_key(account))
}

/// Adds `account` to the allowlist.
///
/// Returns `false` (and writes nothing) when the account was already a member.
pub fn add(env: &Env, account: &Address) -> bool {
    let key = member_key(account);
    if env.storage().persistent().has(&key) {
        return false;
    }
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    true
}

/// Extends the membership entry of `account`, if it is a member.
///
/// Called on each use so an active member's entry outlives idle periods.
pub fn extend_ttl(env: &Env, account: &Address) {
    let key = member_key(account);
    if env.storage().persistent().has(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}

/// Removes `account` from the allowlist.
///
/// Returns `false` when the account was not a member.
pub fn remove(env: &Env, account: &Address) -> bool {
    let key = member_key(account);
    if !env.storage().persistent().has(&key) {
        return false;
    }
    env.storage().persistent().remove(&key);
    true
}

// ── Tests ─────────────────────────────────────────────────────────────────────
