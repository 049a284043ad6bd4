use soroban_sdk::{contracttype, Address, BytesN, Env};

pub const DEFAULT_MAX_SUPPLY: u32 = 508;
pub const LEGENDARY_SUPPLY: u32 = 8;
pub const MAX_PER_ADDRESS: u32 = 2;
/// 0.25 units of the payment asset, in stroops.
pub const DEFAULT_LISTING_PRICE: i128 = 2_500_000;

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_TTL_EXTEND: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_EXTEND - DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_TTL_EXTEND: u32 = 120 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_EXTEND - 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Admin,
    Minter,
    PreferredMinter,
    DoorStaffMinter,
}

/// Inclusive activation window in ledger seconds. `(0, 0)` is disabled.
#[contracttype]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PhaseWindow {
    pub start: u64,
    pub end: u64,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ClaimedItem {
    pub token_id: u32,
    pub loot_id: u32,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClaimRecord {
    pub item1: Option<ClaimedItem>,
    pub item2: Option<ClaimedItem>,
}

/// Funds a buyer has paid ahead of a door-staff redemption.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoorStaffEscrow {
    pub count: u32,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // instance
    Initialized,
    PaymentToken,
    ListingPrice,
    MaxSupply,
    Issued,
    LegendariesMinted,
    NextTokenId,
    PublicClaim,
    DoorRedeem,
    PrivateMintWindow,
    DoorStaffWindow,
    PreferredMinterRoot,
    ClaimedTokenRoot,
    TotalEscrowed,
    // persistent
    Role(Role, Address),
    MintedBy(Address),
    Owner(u32),
    Balance(Address),
    OwnedToken(Address, u32),
    OwnedIndex(u32),
    Claims(Address),
    ClaimedToken(u32),
    Escrow(Address),
}

pub type MerkleRoot = BytesN<32>;

pub(crate) fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub(crate) fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
