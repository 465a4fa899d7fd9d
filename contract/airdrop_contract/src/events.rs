use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::{CampaignId, Role};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecipientsAddedEvent {
    pub campaign_id: CampaignId,
    pub count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocationChangedEvent {
    pub campaign_id: CampaignId,
    pub recipient: Address,
    pub old_amount: i128,
    pub new_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignFinalizedEvent {
    pub campaign_id: CampaignId,
    pub vesting_start: u64,
    pub vesting_duration: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensClaimedEvent {
    pub campaign_id: CampaignId,
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnclaimedWithdrawnEvent {
    pub campaign_id: CampaignId,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseToggledEvent {
    pub paused: bool,
    pub account: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleChangedEvent {
    pub role: Role,
    pub account: Address,
    pub sender: Address,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_recipients_added(env: &Env, event: RecipientsAddedEvent) {
    env.events()
        .publish((Symbol::new(env, "recipients_added"),), event);
}

pub fn emit_allocation_changed(env: &Env, event: AllocationChangedEvent) {
    env.events()
        .publish((Symbol::new(env, "allocation_changed"),), event);
}

pub fn emit_campaign_finalized(env: &Env, event: CampaignFinalizedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_finalized"),), event);
}

pub fn emit_tokens_claimed(env: &Env, event: TokensClaimedEvent) {
    env.events()
        .publish((Symbol::new(env, "tokens_claimed"),), event);
}

pub fn emit_unclaimed_withdrawn(env: &Env, event: UnclaimedWithdrawnEvent) {
    env.events()
        .publish((Symbol::new(env, "unclaimed_withdrawn"),), event);
}

pub fn emit_pause_toggled(env: &Env, event: PauseToggledEvent) {
    env.events()
        .publish((Symbol::new(env, "pause_toggled"),), event);
}

pub fn emit_role_granted(env: &Env, event: RoleChangedEvent) {
    env.events()
        .publish((Symbol::new(env, "role_granted"),), event);
}

pub fn emit_role_revoked(env: &Env, event: RoleChangedEvent) {
    env.events()
        .publish((Symbol::new(env, "role_revoked"),), event);
}
