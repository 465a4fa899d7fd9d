use soroban_sdk::contracterror;

/// Every failure an entry point can report. Codes are stable; off-chain
/// tooling branches on them.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AirdropError {
    InvalidAddress = 1,
    InvalidTokenAddress = 2,
    CampaignNotFound = 3,
    CampaignAlreadyFinalized = 4,
    ArraysMismatch = 5,
    ArrayTooLarge = 6,
    ZeroAmount = 7,
    AllocationNotChanged = 8,
    InvalidVestingStart = 9,
    CampaignNotFinalized = 10,
    NoTokensToClaim = 11,
    VestingNotEnded = 12,
    AccessControlUnauthorizedAccount = 13,
    EnforcedPause = 14,
    ExpectedPause = 15,
    AlreadyInitialized = 16,
    InvalidAmount = 17,
    ArithmeticOverflow = 18,
}
