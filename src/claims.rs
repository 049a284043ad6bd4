//! Claim registry: the two write-once Merkle roots and the per-identity
//! record of claimed (token, loot) pairs.

use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::merkle;
use crate::nft;
use crate::storage_types::{extend_persistent, ClaimRecord, ClaimedItem, DataKey, MerkleRoot};
use crate::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RootSlot {
    PreferredMinter,
    ClaimedToken,
}

impl RootSlot {
    fn key(self) -> DataKey {
        match self {
            RootSlot::PreferredMinter => DataKey::PreferredMinterRoot,
            RootSlot::ClaimedToken => DataKey::ClaimedTokenRoot,
        }
    }
}

pub fn root(env: &Env, slot: RootSlot) -> Option<MerkleRoot> {
    env.storage().instance().get(&slot.key())
}

/// Fill a root slot. A slot that already holds a root stays untouched.
pub fn initialize_root(env: &Env, slot: RootSlot, value: &MerkleRoot) -> Result<(), Error> {
    let key = slot.key();
    if env.storage().instance().has(&key) {
        return Err(Error::AlreadyInitialized);
    }
    env.storage().instance().set(&key, value);
    Ok(())
}

pub fn is_preferred_minter(
    env: &Env,
    proof: &Vec<BytesN<32>>,
    root: &MerkleRoot,
    identity: &Address,
) -> bool {
    merkle::verify(env, &merkle::address_leaf(env, identity), proof, root)
}

/// Confirms that the claimed-token list pairs `token_id` with `identity`.
pub fn address_of_claimed_token(
    env: &Env,
    proof: &Vec<BytesN<32>>,
    token_id: u32,
    identity: &Address,
) -> Result<Address, Error> {
    let root = root(env, RootSlot::ClaimedToken).ok_or(Error::ClaimRootNotSet)?;
    if merkle::verify(env, &merkle::pairing_leaf(env, token_id, identity), proof, &root) {
        Ok(identity.clone())
    } else {
        Err(Error::InvalidProof)
    }
}

pub fn record_of(env: &Env, identity: &Address) -> ClaimRecord {
    env.storage()
        .persistent()
        .get(&DataKey::Claims(identity.clone()))
        .unwrap_or_default()
}

pub fn is_claimed(env: &Env, token_id: u32) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::ClaimedToken(token_id))
}

/// One half of a claim request.
pub struct ClaimItem {
    pub token_id: u32,
    pub loot_id: u32,
    pub proof: Vec<BytesN<32>>,
}

impl ClaimItem {
    /// Token ids start at 1, so an id of 0 with no proof is an empty slot.
    pub fn is_empty(&self) -> bool {
        self.token_id == 0 && self.proof.is_empty()
    }
}

/// Validate and record a claim of one or two items for `caller`.
///
/// Argument checks run before any proof is hashed. Nothing is written
/// unless every check passes.
pub fn claim(
    env: &Env,
    caller: &Address,
    first: &ClaimItem,
    second: &ClaimItem,
) -> Result<ClaimRecord, Error> {
    let has_second = !second.is_empty();
    if has_second {
        if first.token_id == second.token_id {
            return Err(Error::DuplicateTokenIds);
        }
        if first.loot_id == second.loot_id {
            return Err(Error::DuplicateLootIds);
        }
    }

    let root = root(env, RootSlot::ClaimedToken).ok_or(Error::ClaimRootNotSet)?;

    let requested: [(&ClaimItem, Error); 2] = [
        (first, Error::InvalidItem1Proof),
        (second, Error::InvalidItem2Proof),
    ];
    let requested = if has_second { &requested[..] } else { &requested[..1] };

    for (item, _) in requested {
        if nft::owner_of(env, item.token_id).as_ref() != Some(caller) {
            return Err(Error::NotTokenOwner);
        }
    }
    for (item, proof_error) in requested {
        let leaf = merkle::pairing_leaf(env, item.token_id, caller);
        if !merkle::verify(env, &leaf, &item.proof, &root) {
            return Err(*proof_error);
        }
    }
    for (item, _) in requested {
        if is_claimed(env, item.token_id) {
            return Err(Error::TokenAlreadyClaimed);
        }
    }

    let mut record = record_of(env, caller);
    for (item, _) in requested {
        let entry = Some(ClaimedItem {
            token_id: item.token_id,
            loot_id: item.loot_id,
        });
        if record.item1.is_none() {
            record.item1 = entry;
        } else if record.item2.is_none() {
            record.item2 = entry;
        } else {
            return Err(Error::ClaimSlotsFull);
        }
    }

    for (item, _) in requested {
        let key = DataKey::ClaimedToken(item.token_id);
        env.storage().persistent().set(&key, caller);
        extend_persistent(env, &key);
    }
    let key = DataKey::Claims(caller.clone());
    env.storage().persistent().set(&key, &record);
    extend_persistent(env, &key);
    Ok(record)
}
