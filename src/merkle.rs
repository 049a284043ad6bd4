//! Sorted-pair keccak-256 Merkle proofs.
//!
//! At every level the running hash and the sibling are concatenated smaller
//! first and hashed again, so a proof carries no left/right flags. Lists
//! built off-ledger must use the same convention (`sort: true` trees).

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, Vec};

/// Recompute the root from `leaf` and `proof` and compare it with `root`.
///
/// A malformed proof simply fails to reproduce the root.
pub fn verify(env: &Env, leaf: &BytesN<32>, proof: &Vec<BytesN<32>>, root: &BytesN<32>) -> bool {
    let mut computed = leaf.clone();
    for sibling in proof.iter() {
        computed = hash_pair(env, &computed, &sibling);
    }
    computed == *root
}

/// Parent of two nodes under the sorted-pair convention.
pub fn hash_pair(env: &Env, a: &BytesN<32>, b: &BytesN<32>) -> BytesN<32> {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let mut combined = Bytes::new(env);
    combined.append(&lo.clone().into());
    combined.append(&hi.clone().into());
    env.crypto().keccak256(&combined).into()
}

pub fn address_leaf(env: &Env, account: &Address) -> BytesN<32> {
    env.crypto().keccak256(&account.clone().to_xdr(env)).into()
}

pub fn token_leaf(env: &Env, token_id: u32) -> BytesN<32> {
    env.crypto().keccak256(&token_word(env, token_id)).into()
}

/// Leaf for a (token id, owner) pairing in the claimed-token list.
pub fn pairing_leaf(env: &Env, token_id: u32, owner: &Address) -> BytesN<32> {
    let mut data = token_word(env, token_id);
    data.append(&owner.clone().to_xdr(env));
    env.crypto().keccak256(&data).into()
}

// Token ids are encoded as a 32-byte big-endian word.
fn token_word(env: &Env, token_id: u32) -> Bytes {
    let mut word = [0u8; 32];
    word[28..].copy_from_slice(&token_id.to_be_bytes());
    Bytes::from_array(env, &word)
}
