use soroban_sdk::{Address, Env};

use crate::errors::AirdropError;
use crate::events;
use crate::storage_types::*;

// Roles

pub fn has_role(env: &Env, account: &Address, role: Role) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Role(role, account.clone()))
        .unwrap_or(false)
}

pub fn require_role(env: &Env, account: &Address, role: Role) -> Result<(), AirdropError> {
    if !has_role(env, account, role) {
        return Err(AirdropError::AccessControlUnauthorizedAccount);
    }
    Ok(())
}

/// Returns `false` when `account` already held `role`.
pub fn grant_role(env: &Env, role: Role, account: &Address, sender: &Address) -> bool {
    if has_role(env, account, role) {
        return false;
    }

    let key = DataKey::Role(role, account.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);

    events::emit_role_granted(
        env,
        events::RoleChangedEvent {
            role,
            account: account.clone(),
            sender: sender.clone(),
        },
    );
    true
}

/// Returns `false` when `account` did not hold `role`.
pub fn revoke_role(env: &Env, role: Role, account: &Address, sender: &Address) -> bool {
    if !has_role(env, account, role) {
        return false;
    }

    env.storage()
        .persistent()
        .remove(&DataKey::Role(role, account.clone()));

    events::emit_role_revoked(
        env,
        events::RoleChangedEvent {
            role,
            account: account.clone(),
            sender: sender.clone(),
        },
    );
    true
}

// Pause switch

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn require_not_paused(env: &Env) -> Result<(), AirdropError> {
    if is_paused(env) {
        return Err(AirdropError::EnforcedPause);
    }
    Ok(())
}

pub fn set_paused(env: &Env, paused: bool, account: &Address) {
    env.storage().instance().set(&DataKey::Paused, &paused);
    events::emit_pause_toggled(
        env,
        events::PauseToggledEvent {
            paused,
            account: account.clone(),
        },
    );
}

// Null address

/// The contract's own address is the sink nothing can ever be paid out of,
/// so it stands in for the zero address.
pub fn is_null_address(env: &Env, address: &Address) -> bool {
    *address == env.current_contract_address()
}
