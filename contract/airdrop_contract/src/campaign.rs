use soroban_sdk::{log, token, Address, Env};

use crate::access;
use crate::errors::AirdropError;
use crate::events;
use crate::storage_types::*;
use crate::vesting;

// Registry helpers

pub fn get_next_campaign_id(env: &Env) -> CampaignId {
    env.storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or(0)
}

pub fn get_campaign(env: &Env, campaign_id: CampaignId) -> Option<Campaign> {
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(campaign_id))
}

pub fn load_campaign(env: &Env, campaign_id: CampaignId) -> Result<Campaign, AirdropError> {
    get_campaign(env, campaign_id).ok_or(AirdropError::CampaignNotFound)
}

/// Loads a campaign that still accepts allocation edits.
pub fn load_open_campaign(env: &Env, campaign_id: CampaignId) -> Result<Campaign, AirdropError> {
    let campaign = load_campaign(env, campaign_id)?;
    if campaign.finalized {
        return Err(AirdropError::CampaignAlreadyFinalized);
    }
    Ok(campaign)
}

pub fn save_campaign(env: &Env, campaign_id: CampaignId, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign_id);
    env.storage().persistent().set(&key, campaign);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn get_vesting_start_limit(env: &Env) -> VestingStartLimit {
    env.storage()
        .instance()
        .get(&DataKey::VestingStartLimit)
        .unwrap_or(VestingStartLimit::Unbounded)
}

/// Escrowed for the campaign and neither claimed nor recovered yet.
pub fn remaining_escrow(campaign: &Campaign) -> Result<i128, AirdropError> {
    campaign
        .total_allocated
        .checked_sub(campaign.total_claimed)
        .and_then(|left| left.checked_sub(campaign.total_withdrawn))
        .ok_or(AirdropError::ArithmeticOverflow)
}

/// What `withdraw_unclaimed_tokens` would pay out right now. Nothing is
/// escrowed before finalization.
pub fn recoverable_amount(campaign: &Campaign) -> Result<i128, AirdropError> {
    if !campaign.finalized {
        return Ok(0);
    }
    remaining_escrow(campaign).map(|left| left.max(0))
}

// Lifecycle

pub fn create_campaign(env: &Env, token: Address) -> Result<CampaignId, AirdropError> {
    if access::is_null_address(env, &token) {
        return Err(AirdropError::InvalidTokenAddress);
    }

    let campaign_id = get_next_campaign_id(env);
    let next_id = campaign_id
        .checked_add(1)
        .ok_or(AirdropError::ArithmeticOverflow)?;

    save_campaign(env, campaign_id, &Campaign::new(token.clone()));
    env.storage().instance().set(&DataKey::NextCampaignId, &next_id);

    events::emit_campaign_created(
        env,
        events::CampaignCreatedEvent { campaign_id, token },
    );

    Ok(campaign_id)
}

/// Locks the schedule and pulls the campaign's full allocation from `funder`
/// into the contract.
pub fn finalize_campaign(
    env: &Env,
    funder: &Address,
    campaign_id: CampaignId,
    vesting_start: u64,
    vesting_duration: u64,
    now: u64,
) -> Result<(), AirdropError> {
    let mut campaign = load_open_campaign(env, campaign_id)?;

    if campaign.total_allocated == 0 {
        return Err(AirdropError::ZeroAmount);
    }
    if vesting_start <= now {
        return Err(AirdropError::InvalidVestingStart);
    }
    if let VestingStartLimit::MaxDelay(max_delay) = get_vesting_start_limit(env) {
        if vesting_start > now.saturating_add(max_delay) {
            return Err(AirdropError::InvalidVestingStart);
        }
    }
    vesting::vesting_end(vesting_start, vesting_duration)?;

    campaign.finalized = true;
    campaign.vesting_start = vesting_start;
    campaign.vesting_duration = vesting_duration;
    save_campaign(env, campaign_id, &campaign);

    let token_client = token::Client::new(env, &campaign.token);
    token_client.transfer(
        funder,
        &env.current_contract_address(),
        &campaign.total_allocated,
    );

    log!(
        env,
        "campaign {} finalized: {} escrowed, vesting {}+{}",
        campaign_id,
        campaign.total_allocated,
        vesting_start,
        vesting_duration
    );

    events::emit_campaign_finalized(
        env,
        events::CampaignFinalizedEvent {
            campaign_id,
            vesting_start,
            vesting_duration,
        },
    );

    Ok(())
}

/// Sends the campaign's unclaimed remainder to `to`. Once everything has
/// been recovered further calls succeed and move nothing.
pub fn withdraw_unclaimed_tokens(
    env: &Env,
    campaign_id: CampaignId,
    to: &Address,
    now: u64,
) -> Result<i128, AirdropError> {
    if access::is_null_address(env, to) {
        return Err(AirdropError::InvalidAddress);
    }

    let mut campaign = load_campaign(env, campaign_id)?;
    if !campaign.finalized {
        return Err(AirdropError::VestingNotEnded);
    }
    if now < vesting::vesting_end(campaign.vesting_start, campaign.vesting_duration)? {
        return Err(AirdropError::VestingNotEnded);
    }

    let amount = recoverable_amount(&campaign)?;
    if amount > 0 {
        campaign.total_withdrawn = campaign
            .total_withdrawn
            .checked_add(amount)
            .ok_or(AirdropError::ArithmeticOverflow)?;
        save_campaign(env, campaign_id, &campaign);

        let token_client = token::Client::new(env, &campaign.token);
        token_client.transfer(&env.current_contract_address(), to, &amount);
    }

    log!(env, "campaign {} recovered {}", campaign_id, amount);

    events::emit_unclaimed_withdrawn(
        env,
        events::UnclaimedWithdrawnEvent {
            campaign_id,
            to: to.clone(),
            amount,
        },
    );

    Ok(amount)
}
