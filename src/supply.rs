//! Issued-count bookkeeping. Every reservation checks its caps and commits
//! the counters in the same step, before any token is created.

use soroban_sdk::{Address, Env};

use crate::storage_types::{
    extend_persistent, DataKey, DEFAULT_MAX_SUPPLY, LEGENDARY_SUPPLY, MAX_PER_ADDRESS,
};
use crate::Error;

pub fn max_supply(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::MaxSupply)
        .unwrap_or(DEFAULT_MAX_SUPPLY)
}

pub fn issued(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::Issued).unwrap_or(0)
}

pub fn available(env: &Env) -> u32 {
    max_supply(env).saturating_sub(issued(env))
}

pub fn minted_by(env: &Env, identity: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::MintedBy(identity.clone()))
        .unwrap_or(0)
}

pub fn legendaries_minted(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::LegendariesMinted)
        .unwrap_or(0)
}

fn checked_issue(env: &Env, count: u32) -> Result<u32, Error> {
    let next = issued(env).checked_add(count).ok_or(Error::Overflow)?;
    if next > max_supply(env) {
        return Err(Error::SoldOut);
    }
    Ok(next)
}

/// Reserve `count` units for a per-address capped channel.
pub fn reserve(env: &Env, identity: &Address, count: u32) -> Result<(), Error> {
    let minted = minted_by(env, identity);
    let per_identity = minted.checked_add(count).ok_or(Error::Overflow)?;
    if per_identity > MAX_PER_ADDRESS {
        return Err(Error::AddressLimitReached);
    }
    let next = checked_issue(env, count)?;

    let key = DataKey::MintedBy(identity.clone());
    env.storage().persistent().set(&key, &per_identity);
    extend_persistent(env, &key);
    env.storage().instance().set(&DataKey::Issued, &next);
    Ok(())
}

/// Reserve `count` units without a per-address cap (door staff).
pub fn reserve_uncapped(env: &Env, count: u32) -> Result<(), Error> {
    let next = checked_issue(env, count)?;
    env.storage().instance().set(&DataKey::Issued, &next);
    Ok(())
}

/// Reserve `count` units from the fixed legendary allotment.
pub fn reserve_legendary(env: &Env, count: u32) -> Result<(), Error> {
    let legendaries = legendaries_minted(env)
        .checked_add(count)
        .ok_or(Error::Overflow)?;
    if legendaries > LEGENDARY_SUPPLY {
        return Err(Error::AllLegendariesMinted);
    }
    let next = checked_issue(env, count)?;
    env.storage()
        .instance()
        .set(&DataKey::LegendariesMinted, &legendaries);
    env.storage().instance().set(&DataKey::Issued, &next);
    Ok(())
}

/// Apply `delta` to the max supply. The result may never drop below what
/// has already been issued.
pub fn adjust_max_supply(env: &Env, delta: i64) -> Result<u32, Error> {
    let next = i64::from(max_supply(env))
        .checked_add(delta)
        .ok_or(Error::Overflow)?;
    if next < i64::from(issued(env)) {
        return Err(Error::MaxSupplyBelowIssued);
    }
    let next = u32::try_from(next).map_err(|_| Error::Overflow)?;
    env.storage().instance().set(&DataKey::MaxSupply, &next);
    Ok(next)
}
