//! Access gate: who may touch the ledger, and whether it is open.
//!
//! Whitelist membership is delegated to [`common::whitelist`]. The two
//! activity flags live in instance storage; an absent flag reads `false`, so
//! a freshly initialized contract accepts neither stakes nor unstakes.

use common::whitelist;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::ContractError;

const STAKING_ENABLED: Symbol = symbol_short!("STK_ON");
const UNSTAKING_ENABLED: Symbol = symbol_short!("USTK_ON");

/// The two balance-affecting activities a flag can gate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Activity {
    Staking,
    Unstaking,
}

impl Activity {
    fn flag_key(self) -> Symbol {
        match self {
            Activity::Staking => STAKING_ENABLED,
            Activity::Unstaking => UNSTAKING_ENABLED,
        }
    }

    fn disabled_error(self) -> ContractError {
        match self {
            Activity::Staking => ContractError::StakingDisabled,
            Activity::Unstaking => ContractError::UnstakingDisabled,
        }
    }
}

pub fn is_whitelisted(env: &Env, account: &Address) -> bool {
    whitelist::is_whitelisted(env, account)
}

pub fn add_to_whitelist(env: &Env, account: &Address) -> bool {
    whitelist::add(env, account)
}

pub fn remove_from_whitelist(env: &Env, account: &Address) -> bool {
    whitelist::remove(env, account)
}

pub fn is_enabled(env: &Env, activity: Activity) -> bool {
    env.storage()
        .instance()
        .get(&activity.flag_key())
        .unwrap_or(false)
}

pub fn set_enabled(env: &Env, activity: Activity, enabled: bool) {
    env.storage().instance().set(&activity.flag_key(), &enabled);
}

/// Turns both flags off. Used by the refund sweep.
pub fn close(env: &Env) {
    set_enabled(env, Activity::Staking, false);
    set_enabled(env, Activity::Unstaking, false);
}

/// Guard: `account` must be whitelisted and `activity` enabled.
///
/// Membership is checked first, so a non-member always sees
/// `NotWhitelisted` whatever the flag says. On success the member's entry
/// TTL is extended.
pub fn require_open(env: &Env, account: &Address, activity: Activity) -> Result<(), ContractError> {
    if !is_whitelisted(env, account) {
        return Err(ContractError::NotWhitelisted);
    }
    if !is_enabled(env, activity) {
        return Err(activity.disabled_error());
    }
    whitelist::extend_ttl(env, account);
    Ok(())
}
