#![no_std]

mod access;
mod allocation;
mod campaign;
mod errors;
mod events;
mod storage_types;
mod vesting;


use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

pub use errors::AirdropError;
pub use storage_types::{
    Allocation, Campaign, CampaignId, Role, VestingStartLimit, DEFAULT_MAX_VESTING_START_DELAY,
    MAX_BATCH_SIZE,
};
use storage_types::{DataKey, TTL_INSTANCE};

#[contract]
pub struct AirdropContract;

#[contractimpl]
impl AirdropContract {
    /// Initialize the contract, granting `admin` the admin role.
    ///
    /// `vesting_start_limit` bounds how far after finalization a campaign may
    /// start vesting; it cannot be changed later.
    pub fn initialize(
        env: Env,
        admin: Address,
        vesting_start_limit: VestingStartLimit,
    ) -> Result<(), AirdropError> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(AirdropError::AlreadyInitialized);
        }
        admin.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Paused, &false);
        env.storage().instance().set(&DataKey::NextCampaignId, &0u64);
        env.storage()
            .instance()
            .set(&DataKey::VestingStartLimit, &vesting_start_limit);
        access::grant_role(&env, Role::Admin, &admin, &admin);

        extend_instance(&env);
        Ok(())
    }

    // Campaign registry

    /// Open a new campaign distributing `token`. Returns its id.
    pub fn create_campaign(env: Env, caller: Address, token: Address) -> Result<CampaignId, AirdropError> {
        require_admin(&env, &caller)?;
        access::require_not_paused(&env)?;

        let campaign_id = campaign::create_campaign(&env, token)?;
        extend_instance(&env);
        Ok(campaign_id)
    }

    /// Lock the schedule of a campaign and escrow its total allocation.
    ///
    /// # Arguments
    /// * `caller` - Admin funding the campaign; must hold `total_allocated` of the token
    /// * `vesting_start` - Unix timestamp, strictly in the future
    /// * `vesting_duration` - Seconds of linear release; 0 releases everything at start
    pub fn finalize_campaign(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
        vesting_start: u64,
        vesting_duration: u64,
    ) -> Result<(), AirdropError> {
        require_admin(&env, &caller)?;
        access::require_not_paused(&env)?;

        let now = env.ledger().timestamp();
        campaign::finalize_campaign(&env, &caller, campaign_id, vesting_start, vesting_duration, now)?;
        extend_instance(&env);
        Ok(())
    }

    /// Recover what recipients of a finished campaign left unclaimed.
    /// Returns the amount sent, 0 once the campaign is fully recovered.
    pub fn withdraw_unclaimed_tokens(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
        to: Address,
    ) -> Result<i128, AirdropError> {
        require_admin(&env, &caller)?;
        access::require_not_paused(&env)?;

        let now = env.ledger().timestamp();
        let amount = campaign::withdraw_unclaimed_tokens(&env, campaign_id, &to, now)?;
        extend_instance(&env);
        Ok(amount)
    }

    // Allocation ledger

    /// Set allocations for up to `MAX_BATCH_SIZE` recipients. An address that
    /// already has an allocation is overwritten, not topped up.
    pub fn add_recipients(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
        recipients: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<(), AirdropError> {
        require_admin(&env, &caller)?;
        access::require_not_paused(&env)?;

        allocation::add_recipients(&env, campaign_id, recipients, amounts)?;
        extend_instance(&env);
        Ok(())
    }

    /// Correct a single allocation before finalization.
    pub fn change_user_allocation(
        env: Env,
        caller: Address,
        campaign_id: CampaignId,
        recipient: Address,
        new_amount: i128,
    ) -> Result<(), AirdropError> {
        require_admin(&env, &caller)?;
        access::require_not_paused(&env)?;

        allocation::change_user_allocation(&env, campaign_id, &recipient, new_amount)?;
        extend_instance(&env);
        Ok(())
    }

    /// Claim everything vested so far. Only the recipient can claim, and
    /// tokens always go to the recipient.
    pub fn claim(env: Env, recipient: Address, campaign_id: CampaignId) -> Result<i128, AirdropError> {
        recipient.require_auth();
        access::require_not_paused(&env)?;

        let now = env.ledger().timestamp();
        let amount = allocation::claim(&env, campaign_id, &recipient, now)?;
        extend_instance(&env);
        Ok(amount)
    }

    // Access & lifecycle

    pub fn pause(env: Env, caller: Address) -> Result<(), AirdropError> {
        require_admin(&env, &caller)?;
        if access::is_paused(&env) {
            return Err(AirdropError::EnforcedPause);
        }

        access::set_paused(&env, true, &caller);
        log!(&env, "paused by {}", caller);
        extend_instance(&env);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), AirdropError> {
        require_admin(&env, &caller)?;
        if !access::is_paused(&env) {
            return Err(AirdropError::ExpectedPause);
        }

        access::set_paused(&env, false, &caller);
        log!(&env, "unpaused by {}", caller);
        extend_instance(&env);
        Ok(())
    }

    pub fn grant_role(env: Env, caller: Address, role: Role, account: Address) -> Result<(), AirdropError> {
        require_admin(&env, &caller)?;
        access::grant_role(&env, role, &account, &caller);
        Ok(())
    }

    pub fn revoke_role(env: Env, caller: Address, role: Role, account: Address) -> Result<(), AirdropError> {
        require_admin(&env, &caller)?;
        access::revoke_role(&env, role, &account, &caller);
        Ok(())
    }

    /// Give up `role` held by `account` itself.
    pub fn renounce_role(env: Env, account: Address, role: Role) {
        account.require_auth();
        access::revoke_role(&env, role, &account, &account);
    }

    // Queries

    pub fn has_role(env: Env, account: Address, role: Role) -> bool {
        access::has_role(&env, &account, role)
    }

    pub fn is_paused(env: Env) -> bool {
        access::is_paused(&env)
    }

    pub fn get_vesting_start_limit(env: Env) -> VestingStartLimit {
        campaign::get_vesting_start_limit(&env)
    }

    pub fn get_next_campaign_id(env: Env) -> CampaignId {
        campaign::get_next_campaign_id(&env)
    }

    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Option<Campaign> {
        campaign::get_campaign(&env, campaign_id)
    }

    pub fn get_campaign_token(env: Env, campaign_id: CampaignId) -> Option<Address> {
        campaign::get_campaign(&env, campaign_id).map(|c| c.token)
    }

    pub fn get_campaign_total_amount(env: Env, campaign_id: CampaignId) -> i128 {
        campaign::get_campaign(&env, campaign_id).map_or(0, |c| c.total_allocated)
    }

    pub fn get_campaign_finalized(env: Env, campaign_id: CampaignId) -> bool {
        campaign::get_campaign(&env, campaign_id).map_or(false, |c| c.finalized)
    }

    pub fn get_campaign_vesting_start(env: Env, campaign_id: CampaignId) -> u64 {
        campaign::get_campaign(&env, campaign_id).map_or(0, |c| c.vesting_start)
    }

    pub fn get_campaign_vesting_duration(env: Env, campaign_id: CampaignId) -> u64 {
        campaign::get_campaign(&env, campaign_id).map_or(0, |c| c.vesting_duration)
    }

    /// What `withdraw_unclaimed_tokens` would currently pay out, ignoring
    /// whether the schedule has ended.
    pub fn get_campaign_recoverable_amount(env: Env, campaign_id: CampaignId) -> i128 {
        campaign::get_campaign(&env, campaign_id)
            .and_then(|c| campaign::recoverable_amount(&c).ok())
            .unwrap_or(0)
    }

    pub fn get_campaign_recipient_info(env: Env, campaign_id: CampaignId, recipient: Address) -> Allocation {
        allocation::get_allocation(&env, campaign_id, &recipient)
    }

    pub fn get_claimable_amount(env: Env, campaign_id: CampaignId, recipient: Address) -> i128 {
        allocation::get_claimable_amount(&env, campaign_id, &recipient, env.ledger().timestamp())
    }
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), AirdropError> {
    caller.require_auth();
    access::require_role(env, caller, Role::Admin)
}

fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}
