#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, log, symbol_short, Address, BytesN, Env, Symbol, Vec,
};

mod access;
mod claims;
mod events;
mod merkle;
mod nft;
mod payment;
mod phase;
mod storage_types;
mod supply;

pub use access::Operation;
pub use claims::RootSlot;
pub use phase::Channel;
pub use storage_types::{
    ClaimRecord, ClaimedItem, DoorStaffEscrow, PhaseWindow, Role, DEFAULT_LISTING_PRICE,
    DEFAULT_MAX_SUPPLY, LEGENDARY_SUPPLY, MAX_PER_ADDRESS,
};

use claims::ClaimItem;
use phase::Phases;
use storage_types::{extend_instance, DataKey};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAdmin = 3,
    NotMinter = 4,
    NotPreferredMinter = 5,
    NotTokenOwner = 6,
    PrivateMintNotActive = 7,
    PublicMintNotActive = 8,
    DoorStaffMintNotActive = 9,
    PrivateMintActive = 10,
    DoorStaffMintActive = 11,
    PublicMintActive = 12,
    IncorrectPayment = 13,
    MaxPerRequest = 14,
    AddressLimitReached = 15,
    AllLegendariesMinted = 16,
    SoldOut = 17,
    MaxSupplyBelowIssued = 18,
    InvalidItem1Proof = 19,
    InvalidItem2Proof = 20,
    InvalidProof = 21,
    DuplicateTokenIds = 22,
    DuplicateLootIds = 23,
    TokenAlreadyClaimed = 24,
    ClaimSlotsFull = 25,
    ClaimRootNotSet = 26,
    InvalidAmount = 27,
    InvalidWindow = 28,
    EmptyBatch = 29,
    DuplicateAccount = 30,
    CannotRevokeOwnAdmin = 31,
    InsufficientEscrow = 32,
    NothingToRefund = 33,
    InsufficientFunds = 34,
    TokenNotFound = 35,
    IndexOutOfBounds = 36,
    Overflow = 37,
}

/// Coarse failure categories callers can branch on.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Unauthorized,
    PhaseClosed,
    PhaseConflict,
    PaymentMismatch,
    CapExceeded,
    AlreadyInitialized,
    InvalidProof,
    InvalidArgument,
    NotFound,
}

impl Error {
    pub fn class(self) -> ErrorClass {
        use Error::*;
        match self {
            NotAdmin | NotMinter | NotPreferredMinter | NotTokenOwner | CannotRevokeOwnAdmin => {
                ErrorClass::Unauthorized
            }
            PrivateMintNotActive | PublicMintNotActive | DoorStaffMintNotActive => {
                ErrorClass::PhaseClosed
            }
            PrivateMintActive | DoorStaffMintActive | PublicMintActive => ErrorClass::PhaseConflict,
            IncorrectPayment => ErrorClass::PaymentMismatch,
            MaxPerRequest | AddressLimitReached | AllLegendariesMinted | SoldOut
            | MaxSupplyBelowIssued | ClaimSlotsFull | InsufficientEscrow | InsufficientFunds
            | Overflow => ErrorClass::CapExceeded,
            AlreadyInitialized => ErrorClass::AlreadyInitialized,
            InvalidItem1Proof | InvalidItem2Proof | InvalidProof => ErrorClass::InvalidProof,
            DuplicateTokenIds | DuplicateLootIds | TokenAlreadyClaimed | InvalidAmount
            | InvalidWindow | EmptyBatch | DuplicateAccount => ErrorClass::InvalidArgument,
            NotInitialized | ClaimRootNotSet | NothingToRefund | TokenNotFound
            | IndexOutOfBounds => ErrorClass::NotFound,
        }
    }
}

fn ensure_initialized(e: &Env) -> Result<(), Error> {
    if !e.storage().instance().has(&DataKey::Initialized) {
        return Err(Error::NotInitialized);
    }
    extend_instance(e);
    Ok(())
}

// Requests on the capped channels may ask for at most two units at once.
fn check_capped_request(count: u32) -> Result<(), Error> {
    if count == 0 {
        return Err(Error::InvalidAmount);
    }
    if count > MAX_PER_ADDRESS {
        return Err(Error::MaxPerRequest);
    }
    Ok(())
}

fn issue(e: &Env, channel: Symbol, to: &Address, count: u32) -> Vec<u32> {
    let ids = nft::mint(e, to, count);
    events::emit_minted(e, channel, to, &ids);
    ids
}

#[contract]
pub struct RedemptionContract;

#[contractimpl]
impl RedemptionContract {
    /// Set up the contract. Only can be called once.
    ///
    /// # Arguments
    /// * `admin` - Receives the Admin role
    /// * `payment_token` - Asset contract every paid channel settles in
    /// * `private_mint_start`, `private_mint_end` - Private mint window, `(0, 0)` to leave it disabled
    /// * `door_staff_start`, `door_staff_end` - Door staff window, `(0, 0)` to leave it disabled
    /// * `preferred_minter_root` - Optional preferred-minter list root
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        e: Env,
        admin: Address,
        payment_token: Address,
        private_mint_start: u64,
        private_mint_end: u64,
        door_staff_start: u64,
        door_staff_end: u64,
        preferred_minter_root: Option<BytesN<32>>,
    ) -> Result<(), Error> {
        if e.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        let private_window = PhaseWindow::new(private_mint_start, private_mint_end)?;
        let door_staff_window = PhaseWindow::new(door_staff_start, door_staff_end)?;

        let store = e.storage().instance();
        store.set(&DataKey::Initialized, &true);
        store.set(&DataKey::PaymentToken, &payment_token);
        store.set(&DataKey::ListingPrice, &DEFAULT_LISTING_PRICE);
        store.set(&DataKey::MaxSupply, &DEFAULT_MAX_SUPPLY);
        phase::set_window(&e, Channel::Private, private_window);
        phase::set_window(&e, Channel::DoorStaff, door_staff_window);
        if let Some(root) = preferred_minter_root {
            claims::initialize_root(&e, RootSlot::PreferredMinter, &root)?;
        }
        access::grant(&e, Role::Admin, &admin);
        extend_instance(&e);

        log!(&e, "redemption initialized with admin: {}", admin);
        events::emit_initialized(&e, &admin);
        Ok(())
    }

    // ---- Access control ----

    /// Whether `account` currently holds `role`.
    pub fn has_role(e: Env, role: Role, account: Address) -> bool {
        access::has_role(&e, role, &account)
    }

    /// Give `role` to `account`. Admin only; granting a held role is a no-op.
    ///
    /// # Arguments
    /// * `caller` - Must hold the Admin role
    /// * `role` - Role to grant
    /// * `account` - Receiver of the role
    pub fn grant_role(e: Env, caller: Address, role: Role, account: Address) -> Result<(), Error> {
        ensure_initialized(&e)?;
        access::require(&e, Operation::ManageRoles, &caller)?;
        if access::grant(&e, role, &account) {
            events::emit_role_granted(&e, role, &account, &caller);
        }
        Ok(())
    }

    /// Take `role` away from `account`. An admin cannot revoke its own Admin
    /// role; use `transfer_admin` instead.
    pub fn revoke_role(e: Env, caller: Address, role: Role, account: Address) -> Result<(), Error> {
        ensure_initialized(&e)?;
        access::require(&e, Operation::ManageRoles, &caller)?;
        access::check_revocable(&caller, role, &account)?;
        if access::revoke(&e, role, &account) {
            events::emit_role_revoked(&e, role, &account, &caller);
        }
        Ok(())
    }

    /// Grant `role` to every account, or to none of them.
    pub fn batch_grant_role(
        e: Env,
        caller: Address,
        role: Role,
        accounts: Vec<Address>,
    ) -> Result<(), Error> {
        ensure_initialized(&e)?;
        access::require(&e, Operation::ManageRoles, &caller)?;
        access::check_batch(&accounts)?;
        for account in accounts.iter() {
            if access::grant(&e, role, &account) {
                events::emit_role_granted(&e, role, &account, &caller);
            }
        }
        Ok(())
    }

    /// Revoke `role` from every account, or from none of them.
    pub fn batch_revoke_role(
        e: Env,
        caller: Address,
        role: Role,
        accounts: Vec<Address>,
    ) -> Result<(), Error> {
        ensure_initialized(&e)?;
        access::require(&e, Operation::ManageRoles, &caller)?;
        access::check_batch(&accounts)?;
        for account in accounts.iter() {
            access::check_revocable(&caller, role, &account)?;
        }
        for account in accounts.iter() {
            if access::revoke(&e, role, &account) {
                events::emit_role_revoked(&e, role, &account, &caller);
            }
        }
        Ok(())
    }

    /// Move the Admin role from `caller` to `new_admin` in one step.
    pub fn transfer_admin(e: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        ensure_initialized(&e)?;
        access::require(&e, Operation::TransferAdmin, &caller)?;
        access::transfer_admin(&e, &caller, &new_admin);
        log!(&e, "admin transferred to: {}", new_admin);
        events::emit_admin_transferred(&e, &caller, &new_admin);
        Ok(())
    }

    // ---- Merkle roots and verification ----

    /// Set the preferred-minter list root. Write-once.
    pub fn initialize_mint(e: Env, caller: Address, root: BytesN<32>) -> Result<(), Error> {
        Self::set_root(&e, &caller, RootSlot::PreferredMinter, &root)
    }

    /// Set the claimed-token list root. Write-once.
    pub fn initialize_claim(e: Env, caller: Address, root: BytesN<32>) -> Result<(), Error> {
        Self::set_root(&e, &caller, RootSlot::ClaimedToken, &root)
    }

    pub fn get_preferred_minter_root(e: Env) -> Option<BytesN<32>> {
        claims::root(&e, RootSlot::PreferredMinter)
    }

    pub fn get_claimed_token_root(e: Env) -> Option<BytesN<32>> {
        claims::root(&e, RootSlot::ClaimedToken)
    }

    /// Check `leaf` against `root` with a sorted-pair proof.
    pub fn verify(e: Env, leaf: BytesN<32>, proof: Vec<BytesN<32>>, root: BytesN<32>) -> bool {
        merkle::verify(&e, &leaf, &proof, &root)
    }

    pub fn verify_address(e: Env, proof: Vec<BytesN<32>>, root: BytesN<32>, account: Address) -> bool {
        merkle::verify(&e, &merkle::address_leaf(&e, &account), &proof, &root)
    }

    pub fn verify_token(e: Env, proof: Vec<BytesN<32>>, root: BytesN<32>, token_id: u32) -> bool {
        merkle::verify(&e, &merkle::token_leaf(&e, token_id), &proof, &root)
    }

    pub fn verify_pairing(
        e: Env,
        proof: Vec<BytesN<32>>,
        root: BytesN<32>,
        token_id: u32,
        account: Address,
    ) -> bool {
        merkle::verify(&e, &merkle::pairing_leaf(&e, token_id, &account), &proof, &root)
    }

    pub fn is_preferred_minter(
        e: Env,
        proof: Vec<BytesN<32>>,
        root: BytesN<32>,
        identity: Address,
    ) -> bool {
        claims::is_preferred_minter(&e, &proof, &root, &identity)
    }

    /// Returns `identity` if the claimed-token list pairs it with `token_id`.
    pub fn address_of_claimed_token(
        e: Env,
        proof: Vec<BytesN<32>>,
        token_id: u32,
        identity: Address,
    ) -> Result<Address, Error> {
        claims::address_of_claimed_token(&e, &proof, token_id, &identity)
    }

    // ---- Phases and pricing ----

    pub fn public_claim(e: Env) -> bool {
        Phases::load(&e).public_claim
    }

    pub fn door_redeem(e: Env) -> bool {
        Phases::load(&e).door_redeem
    }

    /// Whether the private window covers the current ledger time.
    pub fn private_mint_active(e: Env) -> bool {
        Phases::load(&e).is_open(Channel::Private, e.ledger().timestamp())
    }

    /// Whether door staff can redeem right now (toggle or window).
    pub fn door_staff_mint_active(e: Env) -> bool {
        Phases::load(&e).is_open(Channel::DoorStaff, e.ledger().timestamp())
    }

    pub fn get_private_mint_window(e: Env) -> PhaseWindow {
        Phases::load(&e).private_window
    }

    pub fn get_door_staff_window(e: Env) -> PhaseWindow {
        Phases::load(&e).door_staff_window
    }

    /// Flip the public channel and return its new state. Admin only.
    pub fn toggle_public_claim(e: Env, caller: Address) -> Result<bool, Error> {
        Self::toggle(&e, &caller, Channel::Public)
    }

    pub fn toggle_door_staff_redeem(e: Env, caller: Address) -> Result<bool, Error> {
        Self::toggle(&e, &caller, Channel::DoorStaff)
    }

    /// Replace the private window. Admin only.
    ///
    /// # Arguments
    /// * `start`, `end` - Inclusive ledger timestamps, `(0, 0)` disables the window
    pub fn set_private_mint_window(e: Env, caller: Address, start: u64, end: u64) -> Result<(), Error> {
        Self::set_window(&e, &caller, Channel::Private, start, end)
    }

    pub fn set_door_staff_window(e: Env, caller: Address, start: u64, end: u64) -> Result<(), Error> {
        Self::set_window(&e, &caller, Channel::DoorStaff, start, end)
    }

    pub fn get_listing_price(e: Env) -> i128 {
        phase::listing_price(&e)
    }

    /// Per-unit price in the payment asset for every paid channel.
    pub fn set_listing_price(e: Env, caller: Address, price: i128) -> Result<(), Error> {
        ensure_initialized(&e)?;
        access::require(&e, Operation::SetListingPrice, &caller)?;
        phase::set_listing_price(&e, price)?;
        events::emit_price_set(&e, price);
        Ok(())
    }

    // ---- Supply ----

    pub fn get_max_supply(e: Env) -> u32 {
        supply::max_supply(&e)
    }

    /// Units left before the max supply is reached.
    pub fn get_available_supply(e: Env) -> u32 {
        supply::available(&e)
    }

    pub fn total_issued(e: Env) -> u32 {
        supply::issued(&e)
    }

    /// Units `identity` has taken from the capped channels.
    pub fn minted_by(e: Env, identity: Address) -> u32 {
        supply::minted_by(&e, &identity)
    }

    pub fn legendaries_minted(e: Env) -> u32 {
        supply::legendaries_minted(&e)
    }

    /// Add `delta` (possibly negative) to the max supply and return the new value.
    pub fn set_max_supply(e: Env, caller: Address, delta: i64) -> Result<u32, Error> {
        ensure_initialized(&e)?;
        access::require(&e, Operation::SetMaxSupply, &caller)?;
        let max_supply = supply::adjust_max_supply(&e, delta)?;
        log!(&e, "max supply set to {}", max_supply);
        events::emit_max_supply_set(&e, max_supply);
        Ok(max_supply)
    }

    // ---- Issuance ----

    /// Mint during the private window for a preferred minter, either by role
    /// or by a proof against the preferred-minter root.
    pub fn private_mint(
        e: Env,
        buyer: Address,
        count: u32,
        proof: Vec<BytesN<32>>,
        payment: i128,
    ) -> Result<Vec<u32>, Error> {
        ensure_initialized(&e)?;
        buyer.require_auth();
        Phases::load(&e).require_open(Channel::Private, e.ledger().timestamp())?;

        let preferred = access::has_role(&e, Role::PreferredMinter, &buyer)
            || claims::root(&e, RootSlot::PreferredMinter)
                .map(|root| claims::is_preferred_minter(&e, &proof, &root, &buyer))
                .unwrap_or(false);
        // Not "private mint inactive": the window is open, the buyer just
        // isn't on the list.
        if !preferred {
            return Err(Error::NotPreferredMinter);
        }

        check_capped_request(count)?;
        let amount = payment::require_exact(&e, count, payment)?;
        supply::reserve(&e, &buyer, count)?;
        payment::collect(&e, &buyer, amount)?;
        Ok(issue(&e, symbol_short!("private"), &buyer, count))
    }

    /// Buy up to two units while the public channel is on.
    ///
    /// # Arguments
    /// * `buyer` - Pays and receives the tokens
    /// * `count` - 1 or 2, counted against the buyer's cap of two
    /// * `payment` - Exactly `count` times the listing price
    pub fn public_mint(e: Env, buyer: Address, count: u32, payment: i128) -> Result<Vec<u32>, Error> {
        ensure_initialized(&e)?;
        buyer.require_auth();
        Phases::load(&e).require_open(Channel::Public, e.ledger().timestamp())?;

        check_capped_request(count)?;
        let amount = payment::require_exact(&e, count, payment)?;
        supply::reserve(&e, &buyer, count)?;
        payment::collect(&e, &buyer, amount)?;
        Ok(issue(&e, symbol_short!("public"), &buyer, count))
    }

    /// Paid mint that only runs while the private, door staff and public
    /// channels are all closed.
    pub fn additional_mint(
        e: Env,
        buyer: Address,
        count: u32,
        payment: i128,
    ) -> Result<Vec<u32>, Error> {
        ensure_initialized(&e)?;
        buyer.require_auth();
        Phases::load(&e).require_all_closed(e.ledger().timestamp())?;

        check_capped_request(count)?;
        let amount = payment::require_exact(&e, count, payment)?;
        supply::reserve(&e, &buyer, count)?;
        payment::collect(&e, &buyer, amount)?;
        Ok(issue(&e, symbol_short!("addl"), &buyer, count))
    }

    /// Admin mint from the fixed legendary allotment. No payment.
    pub fn mint_legendary(e: Env, caller: Address, count: u32) -> Result<Vec<u32>, Error> {
        ensure_initialized(&e)?;
        access::require(&e, Operation::MintLegendary, &caller)?;
        if count == 0 {
            return Err(Error::InvalidAmount);
        }
        supply::reserve_legendary(&e, count)?;
        Ok(issue(&e, symbol_short!("legend"), &caller, count))
    }

    /// Prepay `count` units for a later door staff redemption. Allowed in
    /// any phase.
    pub fn pay_door_staff(
        e: Env,
        buyer: Address,
        count: u32,
        payment: i128,
    ) -> Result<DoorStaffEscrow, Error> {
        ensure_initialized(&e)?;
        buyer.require_auth();
        if count == 0 {
            return Err(Error::InvalidAmount);
        }
        let amount = payment::require_exact(&e, count, payment)?;
        let escrow = payment::deposit_escrow(&e, &buyer, count, amount)?;
        payment::collect(&e, &buyer, amount)?;
        events::emit_escrowed(&e, &buyer, count, amount);
        Ok(escrow)
    }

    /// Door staff fulfils `count` prepaid units for `recipient`, drawing
    /// `payment` down from the recipient's escrow.
    ///
    /// `payment` is checked against what was prepaid for those units, so a
    /// later listing price change does not strand the order.
    pub fn door_staff_redeem(
        e: Env,
        caller: Address,
        count: u32,
        recipient: Address,
        payment: i128,
    ) -> Result<Vec<u32>, Error> {
        ensure_initialized(&e)?;
        access::require(&e, Operation::DoorStaffRedeem, &caller)?;
        Phases::load(&e).require_open(Channel::DoorStaff, e.ledger().timestamp())?;
        if count == 0 {
            return Err(Error::InvalidAmount);
        }

        payment::draw_escrow(&e, &recipient, count, payment)?;
        supply::reserve_uncapped(&e, count)?;
        let ids = issue(&e, symbol_short!("door"), &recipient, count);
        events::emit_redeemed(&e, &caller, &recipient, count);
        Ok(ids)
    }

    /// Return everything `recipient` has in door staff escrow.
    pub fn refund_door_staff_payment(e: Env, caller: Address, recipient: Address) -> Result<i128, Error> {
        ensure_initialized(&e)?;
        access::require(&e, Operation::RefundDoorStaff, &caller)?;
        let amount = payment::refund_escrow(&e, &recipient)?;
        events::emit_refunded(&e, &recipient, amount);
        Ok(amount)
    }

    pub fn escrow_of(e: Env, identity: Address) -> Option<DoorStaffEscrow> {
        payment::escrow_of(&e, &identity)
    }

    pub fn total_escrowed(e: Env) -> i128 {
        payment::total_escrowed(&e)
    }

    /// Admin payout of collected funds. Escrowed door staff payments are
    /// never withdrawable.
    pub fn withdraw(e: Env, caller: Address, to: Address, amount: i128) -> Result<(), Error> {
        ensure_initialized(&e)?;
        access::require(&e, Operation::Withdraw, &caller)?;
        payment::withdraw(&e, &to, amount)?;
        log!(&e, "withdrew {} to {}", amount, to);
        events::emit_withdrawn(&e, &to, amount);
        Ok(())
    }

    // ---- Claims ----

    /// Pair one or two owned tokens with loot ids. Pass `token_id2 = 0`
    /// and an empty `proof2` to claim a single item.
    #[allow(clippy::too_many_arguments)]
    pub fn claim(
        e: Env,
        caller: Address,
        token_id1: u32,
        loot_id1: u32,
        proof1: Vec<BytesN<32>>,
        token_id2: u32,
        loot_id2: u32,
        proof2: Vec<BytesN<32>>,
    ) -> Result<ClaimRecord, Error> {
        ensure_initialized(&e)?;
        caller.require_auth();
        let first = ClaimItem {
            token_id: token_id1,
            loot_id: loot_id1,
            proof: proof1,
        };
        let second = ClaimItem {
            token_id: token_id2,
            loot_id: loot_id2,
            proof: proof2,
        };
        let record = claims::claim(&e, &caller, &first, &second)?;
        events::emit_claimed(&e, &caller, &record);
        Ok(record)
    }

    /// Admin view of the claim record held by `identity`.
    pub fn view_claims(e: Env, caller: Address, identity: Address) -> Result<ClaimRecord, Error> {
        ensure_initialized(&e)?;
        access::require(&e, Operation::ViewClaims, &caller)?;
        Ok(claims::record_of(&e, &identity))
    }

    /// Whether `token_id` has already been paired with a loot item.
    pub fn is_token_claimed(e: Env, token_id: u32) -> bool {
        claims::is_claimed(&e, token_id)
    }

    // ---- Token ownership ----

    /// Number of tokens held by `owner`.
    pub fn balance_of(e: Env, owner: Address) -> u32 {
        nft::balance_of(&e, &owner)
    }

    pub fn owner_of(e: Env, token_id: u32) -> Result<Address, Error> {
        nft::owner_of(&e, token_id).ok_or(Error::TokenNotFound)
    }

    /// The token at `index` in `owner`'s list, `0..balance_of(owner)`.
    pub fn token_of_owner(e: Env, owner: Address, index: u32) -> Result<u32, Error> {
        nft::token_of_owner(&e, &owner, index).ok_or(Error::IndexOutOfBounds)
    }

    /// Move `token_id` from `from` to `to`. `from` must own it and sign.
    pub fn transfer(e: Env, from: Address, to: Address, token_id: u32) -> Result<(), Error> {
        ensure_initialized(&e)?;
        from.require_auth();
        nft::transfer(&e, &from, &to, token_id)?;
        events::emit_transferred(&e, &from, &to, token_id);
        Ok(())
    }
}

impl RedemptionContract {
    fn set_root(e: &Env, caller: &Address, slot: RootSlot, root: &BytesN<32>) -> Result<(), Error> {
        ensure_initialized(e)?;
        // A filled slot reports AlreadyInitialized to every caller.
        if claims::root(e, slot).is_some() {
            return Err(Error::AlreadyInitialized);
        }
        access::require(e, Operation::InitializeRoot, caller)?;
        claims::initialize_root(e, slot, root)?;
        events::emit_root_set(e, slot, root);
        Ok(())
    }

    fn toggle(e: &Env, caller: &Address, channel: Channel) -> Result<bool, Error> {
        ensure_initialized(e)?;
        access::require(e, Operation::ConfigurePhases, caller)?;
        let active = phase::toggle(e, channel);
        log!(e, "phase toggled");
        events::emit_toggled(e, channel, active);
        Ok(active)
    }

    fn set_window(e: &Env, caller: &Address, channel: Channel, start: u64, end: u64) -> Result<(), Error> {
        ensure_initialized(e)?;
        access::require(e, Operation::ConfigurePhases, caller)?;
        let window = PhaseWindow::new(start, end)?;
        phase::set_window(e, channel, window);
        events::emit_window_set(e, channel, &window);
        Ok(())
    }
}

#[cfg(test)]
mod test_helpers;
