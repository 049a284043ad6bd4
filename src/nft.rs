//! Enumerable token ownership.
//!
//! Ids are handed out sequentially from 1. Each owner's tokens sit in a
//! dense index `0..balance`, kept dense on transfer by moving the last
//! token into the vacated slot.

use soroban_sdk::{Address, Env, Vec};

use crate::storage_types::{extend_persistent, DataKey};
use crate::Error;

pub fn balance_of(env: &Env, owner: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(owner.clone()))
        .unwrap_or(0)
}

pub fn owner_of(env: &Env, token_id: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Owner(token_id))
}

pub fn token_of_owner(env: &Env, owner: &Address, index: u32) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::OwnedToken(owner.clone(), index))
}

fn set_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    extend_persistent(env, key);
}

fn append_owned(env: &Env, owner: &Address, token_id: u32) {
    let index = balance_of(env, owner);
    set_persistent(env, &DataKey::OwnedToken(owner.clone(), index), &token_id);
    set_persistent(env, &DataKey::OwnedIndex(token_id), &index);
    set_persistent(env, &DataKey::Owner(token_id), owner);
    set_persistent(env, &DataKey::Balance(owner.clone()), &(index + 1));
}

fn remove_owned(env: &Env, owner: &Address, token_id: u32) {
    let last = balance_of(env, owner) - 1;
    let index: u32 = env
        .storage()
        .persistent()
        .get(&DataKey::OwnedIndex(token_id))
        .unwrap_or(last);
    if index != last {
        if let Some(moved) = token_of_owner(env, owner, last) {
            set_persistent(env, &DataKey::OwnedToken(owner.clone(), index), &moved);
            set_persistent(env, &DataKey::OwnedIndex(moved), &index);
        }
    }
    env.storage()
        .persistent()
        .remove(&DataKey::OwnedToken(owner.clone(), last));
    set_persistent(env, &DataKey::Balance(owner.clone()), &last);
}

/// Create `count` fresh tokens owned by `to` and return their ids.
pub fn mint(env: &Env, to: &Address, count: u32) -> Vec<u32> {
    let first: u32 = env
        .storage()
        .instance()
        .get(&DataKey::NextTokenId)
        .unwrap_or(1);
    let mut ids = Vec::new(env);
    for token_id in first..first + count {
        append_owned(env, to, token_id);
        ids.push_back(token_id);
    }
    env.storage()
        .instance()
        .set(&DataKey::NextTokenId, &(first + count));
    ids
}

pub fn transfer(env: &Env, from: &Address, to: &Address, token_id: u32) -> Result<(), Error> {
    let owner = owner_of(env, token_id).ok_or(Error::TokenNotFound)?;
    if owner != *from {
        return Err(Error::NotTokenOwner);
    }
    if from == to {
        return Ok(());
    }
    remove_owned(env, from, token_id);
    append_owned(env, to, token_id);
    Ok(())
}
