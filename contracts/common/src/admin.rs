//! # Single Administrator
//!
//! One administrator address lives in instance storage. Handing the role to
//! another address is a two-step process: the current administrator proposes
//! a successor, and the successor accepts. Until acceptance the current
//! administrator keeps full control and may cancel the proposal.
//!
//! The administrator may itself be a custom account contract, in which case
//! `require_auth` on it runs that contract's own authorization policy.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage keys ─────────────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");

// ── Administrator ────────────────────────────────────────────────────────────

/// Stores `admin` as the administrator, replacing any previous one.
/// Callers must verify authorization beforehand.
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&ADMIN, admin);
}

/// Returns the administrator, if one has been set.
pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&ADMIN)
}

/// Returns `true` when `caller` is the stored administrator.
///
/// Fails closed: with no administrator stored, nobody is the administrator.
pub fn is_admin(env: &Env, caller: &Address) -> bool {
    match get_admin(env) {
        Some(admin) => admin == *caller,
        None => false,
    }
}

// ── Two-step handover ────────────────────────────────────────────────────────

pub fn set_pending_admin(env: &Env, candidate: &Address) {
    env.storage().instance().set(&PENDING_ADMIN, candidate);
}

pub fn get_pending_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_ADMIN)
}

/// Removes the pending proposal and returns the address it named.
pub fn take_pending_admin(env: &Env) -> Option<Address> {
    let pending = get_pending_admin(env);
    if pending.is_some() {
        env.storage().instance().remove(&PENDING_ADMIN);
    }
    pending
}

/// Promotes the pending administrator if it is `candidate`.
///
/// Returns the previous administrator on success. Returns `None` and leaves
/// storage untouched when no proposal exists or it names someone else.
pub fn accept_pending_admin(env: &Env, candidate: &Address) -> Option<Address> {
    let pending = get_pending_admin(env)?;
    if pending != *candidate {
        return None;
    }
    let previous = get_admin(env)?;
    set_admin(env, candidate);
    env.storage().instance().remove(&PENDING_ADMIN);
    Some(previous)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
