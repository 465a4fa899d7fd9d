use soroban_sdk::{contracttype, Address};

// Storage keys for instance data and persistent records
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    Paused,
    NextCampaignId,
    VestingStartLimit,
    Campaign(CampaignId),
    Allocation(CampaignId, Address), // (campaign id, recipient)
    Role(Role, Address),
}

pub type CampaignId = u64;

/// Roles known to the access guard.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Role {
    /// Creates campaigns, edits allocations, finalizes, pauses and recovers funds.
    Admin,
}

/// Upper bound on how far in the future a campaign may start vesting,
/// fixed at `initialize`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum VestingStartLimit {
    Unbounded,
    MaxDelay(u64), // seconds after finalization
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub token: Address,
    /// Sum of every recipient's `total_allocation`.
    pub total_allocated: i128,
    /// Sum of every recipient's `claimed`.
    pub total_claimed: i128,
    /// Recovered by the admin after the schedule ended.
    pub total_withdrawn: i128,
    pub finalized: bool,
    pub vesting_start: u64,
    pub vesting_duration: u64,
}

impl Campaign {
    pub fn new(token: Address) -> Self {
        Self {
            token,
            total_allocated: 0,
            total_claimed: 0,
            total_withdrawn: 0,
            finalized: false,
            vesting_start: 0,
            vesting_duration: 0,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct Allocation {
    pub total_allocation: i128,
    pub claimed: i128,
}

// Constants
pub const MAX_BATCH_SIZE: u32 = 100;
pub const DEFAULT_MAX_VESTING_START_DELAY: u64 = 86400 * 30; // 30 days
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
