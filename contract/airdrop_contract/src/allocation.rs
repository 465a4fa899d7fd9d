use soroban_sdk::{token, Address, Env, Vec};

use crate::access;
use crate::campaign;
use crate::errors::AirdropError;
use crate::events;
use crate::storage_types::*;
use crate::vesting;

// Ledger helpers

pub fn get_allocation(env: &Env, campaign_id: CampaignId, recipient: &Address) -> Allocation {
    env.storage()
        .persistent()
        .get(&DataKey::Allocation(campaign_id, recipient.clone()))
        .unwrap_or_default()
}

fn save_allocation(env: &Env, campaign_id: CampaignId, recipient: &Address, allocation: &Allocation) {
    let key = DataKey::Allocation(campaign_id, recipient.clone());
    env.storage().persistent().set(&key, allocation);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}

/// Overwrites the recipient's allocation and moves the campaign total by the
/// difference. Returns the previous allocation.
fn overwrite_allocation(
    env: &Env,
    campaign_id: CampaignId,
    campaign: &mut Campaign,
    recipient: &Address,
    amount: i128,
) -> Result<i128, AirdropError> {
    let mut allocation = get_allocation(env, campaign_id, recipient);
    let previous = allocation.total_allocation;

    campaign.total_allocated = campaign
        .total_allocated
        .checked_sub(previous)
        .and_then(|total| total.checked_add(amount))
        .ok_or(AirdropError::ArithmeticOverflow)?;

    allocation.total_allocation = amount;
    save_allocation(env, campaign_id, recipient, &allocation);

    Ok(previous)
}

// Allocation edits (open campaigns only)

pub fn add_recipients(
    env: &Env,
    campaign_id: CampaignId,
    recipients: Vec<Address>,
    amounts: Vec<i128>,
) -> Result<u32, AirdropError> {
    let mut campaign = campaign::load_open_campaign(env, campaign_id)?;

    if recipients.len() != amounts.len() {
        return Err(AirdropError::ArraysMismatch);
    }
    if recipients.len() > MAX_BATCH_SIZE {
        return Err(AirdropError::ArrayTooLarge);
    }

    // Whole batch is checked before the first write.
    for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
        if access::is_null_address(env, &recipient) {
            return Err(AirdropError::InvalidAddress);
        }
        if amount == 0 {
            return Err(AirdropError::ZeroAmount);
        }
        if amount < 0 {
            return Err(AirdropError::InvalidAmount);
        }
    }

    for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
        overwrite_allocation(env, campaign_id, &mut campaign, &recipient, amount)?;
    }
    campaign::save_campaign(env, campaign_id, &campaign);

    let count = recipients.len();
    events::emit_recipients_added(
        env,
        events::RecipientsAddedEvent { campaign_id, count },
    );

    Ok(count)
}

pub fn change_user_allocation(
    env: &Env,
    campaign_id: CampaignId,
    recipient: &Address,
    new_amount: i128,
) -> Result<(), AirdropError> {
    if access::is_null_address(env, recipient) {
        return Err(AirdropError::InvalidAddress);
    }

    let mut campaign = campaign::load_open_campaign(env, campaign_id)?;

    if new_amount < 0 {
        return Err(AirdropError::InvalidAmount);
    }
    if get_allocation(env, campaign_id, recipient).total_allocation == new_amount {
        return Err(AirdropError::AllocationNotChanged);
    }

    let old_amount = overwrite_allocation(env, campaign_id, &mut campaign, recipient, new_amount)?;
    campaign::save_campaign(env, campaign_id, &campaign);

    events::emit_allocation_changed(
        env,
        events::AllocationChangedEvent {
            campaign_id,
            recipient: recipient.clone(),
            old_amount,
            new_amount,
        },
    );

    Ok(())
}

// Claims (finalized campaigns only)

/// Claimable for `allocation` at `now`, never more than the campaign still
/// holds in escrow.
fn claimable_for(campaign: &Campaign, allocation: &Allocation, now: u64) -> Result<i128, AirdropError> {
    let claimable = vesting::claimable_amount(
        allocation.total_allocation,
        allocation.claimed,
        campaign.vesting_start,
        campaign.vesting_duration,
        now,
    )?;
    let escrow = campaign::remaining_escrow(campaign)?.max(0);
    Ok(claimable.min(escrow))
}

pub fn get_claimable_amount(env: &Env, campaign_id: CampaignId, recipient: &Address, now: u64) -> i128 {
    match campaign::get_campaign(env, campaign_id) {
        Some(campaign) if campaign.finalized => {
            let allocation = get_allocation(env, campaign_id, recipient);
            claimable_for(&campaign, &allocation, now).unwrap_or(0)
        }
        _ => 0,
    }
}

pub fn claim(
    env: &Env,
    campaign_id: CampaignId,
    recipient: &Address,
    now: u64,
) -> Result<i128, AirdropError> {
    let mut campaign = campaign::get_campaign(env, campaign_id)
        .filter(|campaign| campaign.finalized)
        .ok_or(AirdropError::CampaignNotFinalized)?;

    let mut allocation = get_allocation(env, campaign_id, recipient);
    let amount = claimable_for(&campaign, &allocation, now)?;
    if amount == 0 {
        return Err(AirdropError::NoTokensToClaim);
    }

    allocation.claimed = allocation
        .claimed
        .checked_add(amount)
        .ok_or(AirdropError::ArithmeticOverflow)?;
    campaign.total_claimed = campaign
        .total_claimed
        .checked_add(amount)
        .ok_or(AirdropError::ArithmeticOverflow)?;

    save_allocation(env, campaign_id, recipient, &allocation);
    campaign::save_campaign(env, campaign_id, &campaign);

    // A failing transfer aborts the invocation and discards the writes above.
    let token_client = token::Client::new(env, &campaign.token);
    token_client.transfer(&env.current_contract_address(), recipient, &amount);

    events::emit_tokens_claimed(
        env,
        events::TokensClaimedEvent {
            campaign_id,
            recipient: recipient.clone(),
            amount,
        },
    );

    Ok(amount)
}
