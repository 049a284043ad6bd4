//! Issuance channel state: the two time windows, the two admin toggles and
//! the listing price.
//!
//! Nothing here reads the clock. Callers pass the ledger timestamp in, so
//! every check is evaluated at call time and is deterministic under test.

use soroban_sdk::Env;

use crate::storage_types::{DataKey, PhaseWindow, DEFAULT_LISTING_PRICE};
use crate::Error;

impl PhaseWindow {
    pub const DISABLED: PhaseWindow = PhaseWindow { start: 0, end: 0 };

    pub fn new(start: u64, end: u64) -> Result<Self, Error> {
        if start > end {
            return Err(Error::InvalidWindow);
        }
        Ok(PhaseWindow { start, end })
    }

    pub fn is_disabled(&self) -> bool {
        self.start == 0 && self.end == 0
    }

    pub fn is_active(&self, now: u64) -> bool {
        !self.is_disabled() && self.start <= now && now <= self.end
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Channel {
    Private,
    DoorStaff,
    Public,
}

impl Channel {
    pub fn closed_error(self) -> Error {
        match self {
            Channel::Private => Error::PrivateMintNotActive,
            Channel::DoorStaff => Error::DoorStaffMintNotActive,
            Channel::Public => Error::PublicMintNotActive,
        }
    }

    pub fn conflict_error(self) -> Error {
        match self {
            Channel::Private => Error::PrivateMintActive,
            Channel::DoorStaff => Error::DoorStaffMintActive,
            Channel::Public => Error::PublicMintActive,
        }
    }
}

/// Snapshot of every phase input, loaded once per call.
#[derive(Clone, Debug)]
pub struct Phases {
    pub private_window: PhaseWindow,
    pub door_staff_window: PhaseWindow,
    pub public_claim: bool,
    pub door_redeem: bool,
}

impl Phases {
    pub fn load(env: &Env) -> Self {
        let store = env.storage().instance();
        Phases {
            private_window: store
                .get(&DataKey::PrivateMintWindow)
                .unwrap_or(PhaseWindow::DISABLED),
            door_staff_window: store
                .get(&DataKey::DoorStaffWindow)
                .unwrap_or(PhaseWindow::DISABLED),
            public_claim: store.get(&DataKey::PublicClaim).unwrap_or(false),
            door_redeem: store.get(&DataKey::DoorRedeem).unwrap_or(false),
        }
    }

    pub fn is_open(&self, channel: Channel, now: u64) -> bool {
        match channel {
            Channel::Private => self.private_window.is_active(now),
            Channel::DoorStaff => self.door_redeem || self.door_staff_window.is_active(now),
            Channel::Public => self.public_claim,
        }
    }

    pub fn require_open(&self, channel: Channel, now: u64) -> Result<(), Error> {
        if self.is_open(channel, now) {
            Ok(())
        } else {
            Err(channel.closed_error())
        }
    }

    /// The additional channel only runs while every other channel is shut.
    pub fn require_all_closed(&self, now: u64) -> Result<(), Error> {
        for channel in [Channel::Private, Channel::DoorStaff, Channel::Public] {
            if self.is_open(channel, now) {
                return Err(channel.conflict_error());
            }
        }
        Ok(())
    }
}

pub fn set_window(env: &Env, channel: Channel, window: PhaseWindow) {
    let key = match channel {
        Channel::Private => DataKey::PrivateMintWindow,
        Channel::DoorStaff => DataKey::DoorStaffWindow,
        Channel::Public => return,
    };
    env.storage().instance().set(&key, &window);
}

/// Flip a boolean toggle and return its new value.
pub fn toggle(env: &Env, channel: Channel) -> bool {
    let key = match channel {
        Channel::Public => DataKey::PublicClaim,
        Channel::DoorStaff => DataKey::DoorRedeem,
        Channel::Private => return false,
    };
    let next = !env.storage().instance().get(&key).unwrap_or(false);
    env.storage().instance().set(&key, &next);
    next
}

pub fn listing_price(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::ListingPrice)
        .unwrap_or(DEFAULT_LISTING_PRICE)
}

pub fn set_listing_price(env: &Env, price: i128) -> Result<(), Error> {
    if price < 0 {
        return Err(Error::InvalidAmount);
    }
    env.storage().instance().set(&DataKey::ListingPrice, &price);
    Ok(())
}
