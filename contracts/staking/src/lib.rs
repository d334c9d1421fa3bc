#![cfg_attr(not(test), no_std)]

pub mod events;
pub mod gate;
pub mod ledger;

use common::admin;
use soroban_sdk::{
    contract, contractimpl, log, symbol_short, token, Address, Env, Symbol, Vec,
};

use gate::Activity;

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const STAKE_TOKEN: Symbol = symbol_short!("STK_TOK");

const INSTANCE_TTL_THRESHOLD: u32 = 518_400;
const INSTANCE_TTL_EXTEND_TO: u32 = 2_073_600;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    NotWhitelisted = 5,
    StakingDisabled = 6,
    UnstakingDisabled = 7,
    InsufficientStakedBalance = 8,
    TransferFailed = 9,
    NoPendingAdmin = 10,
    Overflow = 11,
}

// ── Contract ─────────────────────────────────────────────────────────────────

/// Custody ledger for a single token.
///
/// Whitelisted accounts deposit the token with `stake` and take it back with
/// `unstake`, each gated by an admin-controlled flag. The admin can sweep
/// every balance back to its owner with `refund`, which also closes both
/// flags.
///
/// Every fallible entry point returns `Result`; a returned error aborts the
/// invocation and the host discards all of its storage writes and nested
/// token movements.
#[contract]
pub struct StakingContract;

#[contractimpl]
impl StakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `admin` – address allowed to curate the whitelist, flip the flags
    ///   and trigger a refund.
    /// * `token` – token contract whose units are held in custody.
    ///
    /// Both flags start closed and the whitelist starts empty.
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin::set_admin(&env, &admin);
        env.storage().instance().set(&STAKE_TOKEN, &token);
        env.storage().instance().set(&INITIALIZED, &true);
        // Flags, balances and the holder index read as closed/zero/empty
        // when absent, so nothing else needs writing.
        Self::extend_instance_ttl(&env);

        events::publish_initialized(&env, admin, token);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` tokens into custody.
    ///
    /// The staker must have approved this contract for at least `amount`
    /// on the token contract beforehand.
    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        gate::require_open(&env, &staker, Activity::Staking)?;

        // 1. Pull tokens from the staker into custody.
        let token = Self::token_client(&env)?;
        let custody = env.current_contract_address();
        if token.balance(&staker) < amount {
            log!(&env, "stake: wallet balance below amount", staker, amount);
            return Err(ContractError::TransferFailed);
        }
        if !matches!(
            token.try_transfer_from(&custody, &staker, &custody, &amount),
            Ok(Ok(()))
        ) {
            log!(&env, "stake: transfer_from rejected", staker, amount);
            return Err(ContractError::TransferFailed);
        }

        // 2. Record the deposit.
        ledger::credit(&env, &staker, amount)?;
        Self::extend_instance_ttl(&env);

        events::publish_staked(&env, staker, amount);

        Ok(())
    }

    // ── Unstaking ───────────────────────────────────────────────────────────

    /// Withdraw `amount` previously staked tokens.
    ///
    /// The ledger is debited before the token moves (checks-effects-
    /// interactions); a failed transfer aborts the call, which discards the
    /// debit.
    pub fn unstake(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        gate::require_open(&env, &staker, Activity::Unstaking)?;

        // 1. Debit the ledger; fails untouched on insufficient balance.
        ledger::debit(&env, &staker, amount)?;

        // 2. Return tokens to the staker.
        let token = Self::token_client(&env)?;
        if !matches!(
            token.try_transfer(&env.current_contract_address(), &staker, &amount),
            Ok(Ok(()))
        ) {
            log!(&env, "unstake: transfer rejected", staker, amount);
            return Err(ContractError::TransferFailed);
        }
        Self::extend_instance_ttl(&env);

        events::publish_unstaked(&env, staker, amount);

        Ok(())
    }

    // ── Refund ──────────────────────────────────────────────────────────────

    /// Return every staked balance to its owner and close both flags.
    ///
    /// All-or-nothing: if any single payout fails the whole sweep fails with
    /// `TransferFailed` and no balance, flag or token holding changes.
    pub fn refund(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let token = Self::token_client(&env)?;
        let custody = env.current_contract_address();

        // 1. Drain the ledger before paying anyone.
        let owed = ledger::drain(&env);

        // 2. Pay every former holder in full.
        for (account, amount) in owed.iter() {
            if !matches!(token.try_transfer(&custody, &account, &amount), Ok(Ok(()))) {
                log!(&env, "refund: transfer rejected", account, amount);
                return Err(ContractError::TransferFailed);
            }
        }

        // 3. Close the gate until the admin reopens it.
        gate::close(&env);
        Self::extend_instance_ttl(&env);

        events::publish_refunded(&env);

        Ok(())
    }

    // ── Access gate: whitelist ───────────────────────────────────────────────

    /// Add `account` to the whitelist. Adding a member again is a no-op.
    pub fn add_to_whitelist(env: Env, caller: Address, account: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if gate::add_to_whitelist(&env, &account) {
            events::publish_whitelist_added(&env, account);
        }
        Self::extend_instance_ttl(&env);
        Ok(())
    }

    /// Remove `account` from the whitelist. Removing a non-member is a no-op.
    ///
    /// Removal does not touch the account's balance; it only blocks further
    /// stakes and unstakes until it is re-added or refunded.
    pub fn remove_from_whitelist(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if gate::remove_from_whitelist(&env, &account) {
            events::publish_whitelist_removed(&env, account);
        }
        Self::extend_instance_ttl(&env);
        Ok(())
    }

    // ── Access gate: flags ───────────────────────────────────────────────────

    /// Open staking to whitelisted accounts. Admin only.
    pub fn allow_staking(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::set_flag(&env, &caller, Activity::Staking, true)
    }

    /// Stop accepting new stakes. Admin only.
    pub fn deny_staking(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::set_flag(&env, &caller, Activity::Staking, false)
    }

    /// Let whitelisted accounts withdraw. Admin only.
    pub fn allow_unstaking(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::set_flag(&env, &caller, Activity::Unstaking, true)
    }

    /// Stop withdrawals. Admin only.
    pub fn deny_unstaking(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::set_flag(&env, &caller, Activity::Unstaking, false)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Return the account's staked balance (zero if it never staked).
    pub fn get_balance(env: Env, account: Address) -> i128 {
        ledger::balance_of(&env, &account)
    }

    /// Return the sum of all staked balances.
    pub fn get_total_staked(env: Env) -> i128 {
        ledger::total_staked(&env)
    }

    /// Return every account that currently holds a nonzero balance.
    pub fn get_stakers(env: Env) -> Vec<Address> {
        ledger::holders(&env)
    }

    /// Whether `account` may stake and unstake while the flags allow it.
    pub fn is_whitelisted(env: Env, account: Address) -> bool {
        gate::is_whitelisted(&env, &account)
    }

    /// Current value of the staking flag.
    pub fn staking_enabled(env: Env) -> bool {
        gate::is_enabled(&env, Activity::Staking)
    }

    /// Current value of the unstaking flag.
    pub fn unstaking_enabled(env: Env) -> bool {
        gate::is_enabled(&env, Activity::Unstaking)
    }

    /// Whether `initialize` has run.
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    /// The current administrator.
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        admin::get_admin(&env).ok_or(ContractError::NotInitialized)
    }

    /// The token contract held in custody.
    pub fn get_token(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&STAKE_TOKEN)
            .ok_or(ContractError::NotInitialized)
    }

    // ── Admin transfer (two-step) ──────────────────────────────────────────

    /// Propose a new admin address. Only the current admin can call this.
    /// The new admin must call `accept_admin` to complete the transfer.
    pub fn propose_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;

        admin::set_pending_admin(&env, &new_admin);
        Self::extend_instance_ttl(&env);

        events::publish_admin_transfer_proposed(&env, current_admin, new_admin);

        Ok(())
    }

    /// Accept the pending admin transfer. Only the proposed new admin can call this.
    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        new_admin.require_auth();

        if admin::get_pending_admin(&env).is_none() {
            return Err(ContractError::NoPendingAdmin);
        }
        let old_admin =
            admin::accept_pending_admin(&env, &new_admin).ok_or(ContractError::Unauthorized)?;
        Self::extend_instance_ttl(&env);

        events::publish_admin_transfer_accepted(&env, old_admin, new_admin);

        Ok(())
    }

    /// Cancel a pending admin transfer. Only the current admin can call this.
    pub fn cancel_admin_transfer(env: Env, current_admin: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;

        let pending = admin::take_pending_admin(&env).ok_or(ContractError::NoPendingAdmin)?;
        Self::extend_instance_ttl(&env);

        events::publish_admin_transfer_cancelled(&env, current_admin, pending);

        Ok(())
    }

    /// Get the pending admin address, if any.
    pub fn get_pending_admin(env: Env) -> Option<Address> {
        admin::get_pending_admin(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: revert if `caller` is not the stored admin.
    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !admin::is_admin(env, caller) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn set_flag(
        env: &Env,
        caller: &Address,
        activity: Activity,
        enabled: bool,
    ) -> Result<(), ContractError> {
        Self::require_initialized(env)?;
        caller.require_auth();
        Self::require_admin(env, caller)?;

        gate::set_enabled(env, activity, enabled);
        Self::extend_instance_ttl(env);

        match activity {
            Activity::Staking => events::publish_staking_flag_set(env, enabled),
            Activity::Unstaking => events::publish_unstaking_flag_set(env, enabled),
        }
        Ok(())
    }

    fn token_client(env: &Env) -> Result<token::TokenClient<'_>, ContractError> {
        let token: Address = env
            .storage()
            .instance()
            .get(&STAKE_TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        Ok(token::TokenClient::new(env, &token))
    }

    fn extend_instance_ttl(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────






#[cfg(test)]
mod test_auth;
