#![cfg(test)]
//! Shared fixtures: a contract wired to a Stellar asset, and an
//! off-ledger style sorted-pair Merkle tree for building proofs.

extern crate std;

use std::vec::Vec as StdVec;

use super::*;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, BytesN, Env, Vec,
};

/// Ledger time the fixtures start at.
pub const T0: u64 = 1_700_000_000;
pub const HOUR: u64 = 3600;

pub struct Setup {
    pub env: Env,
    pub client: RedemptionContractClient<'static>,
    pub contract_id: Address,
    pub admin: Address,
    pub token: token::Client<'static>,
    pub token_admin: token::StellarAssetClient<'static>,
}

impl Setup {
    /// Give `who` enough of the payment asset for `units` at the listing price.
    pub fn fund(&self, who: &Address, units: u32) {
        let amount = self.client.get_listing_price() * i128::from(units);
        self.token_admin.mint(who, &amount);
    }

    pub fn price(&self, units: u32) -> i128 {
        self.client.get_listing_price() * i128::from(units)
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().with_mut(|li| li.timestamp = timestamp);
    }

    pub fn funded_buyer(&self, units: u32) -> Address {
        let buyer = Address::generate(&self.env);
        self.fund(&buyer, units);
        buyer
    }
}

pub fn setup_with(
    private_window: (u64, u64),
    door_staff_window: (u64, u64),
    preferred_minter_root: Option<BytesN<32>>,
) -> Setup {
    setup_in(
        Env::default(),
        private_window,
        door_staff_window,
        preferred_minter_root,
    )
}

/// Like `setup_with`, for tests that build their lists in `env` first.
pub fn setup_in(
    env: Env,
    private_window: (u64, u64),
    door_staff_window: (u64, u64),
    preferred_minter_root: Option<BytesN<32>>,
) -> Setup {
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = T0);

    let admin = Address::generate(&env);
    let asset = env.register_stellar_asset_contract_v2(admin.clone());
    let token = token::Client::new(&env, &asset.address());
    let token_admin = token::StellarAssetClient::new(&env, &asset.address());

    let contract_id = env.register_contract(None, RedemptionContract);
    let client = RedemptionContractClient::new(&env, &contract_id);
    client.initialize(
        &admin,
        &asset.address(),
        &private_window.0,
        &private_window.1,
        &door_staff_window.0,
        &door_staff_window.1,
        &preferred_minter_root,
    );

    Setup {
        env,
        client,
        contract_id,
        admin,
        token,
        token_admin,
    }
}

/// Every window disabled, no preferred-minter root.
pub fn setup() -> Setup {
    setup_with((0, 0), (0, 0), None)
}

/// Sorted-pair tree. Odd nodes are carried up unpaired.
pub struct MerkleTree {
    layers: StdVec<StdVec<BytesN<32>>>,
}

impl MerkleTree {
    pub fn new(env: &Env, leaves: StdVec<BytesN<32>>) -> Self {
        assert!(!leaves.is_empty(), "tree needs at least one leaf");
        let mut layers = std::vec![leaves];
        while layers.last().unwrap().len() > 1 {
            let level = layers.last().unwrap();
            let next = level
                .chunks(2)
                .map(|pair| match pair {
                    [a, b] => merkle::hash_pair(env, a, b),
                    [a] => a.clone(),
                    _ => unreachable!(),
                })
                .collect();
            layers.push(next);
        }
        MerkleTree { layers }
    }

    pub fn root(&self) -> BytesN<32> {
        self.layers.last().unwrap()[0].clone()
    }

    pub fn proof(&self, env: &Env, leaf: &BytesN<32>) -> Vec<BytesN<32>> {
        let mut index = self.layers[0]
            .iter()
            .position(|l| l == leaf)
            .expect("leaf not in tree");
        let mut proof = Vec::new(env);
        for level in &self.layers[..self.layers.len() - 1] {
            let sibling = index ^ 1;
            if sibling < level.len() {
                proof.push_back(level[sibling].clone());
            }
            index /= 2;
        }
        proof
    }
}

pub fn address_tree(env: &Env, accounts: &[Address]) -> MerkleTree {
    MerkleTree::new(
        env,
        accounts.iter().map(|a| merkle::address_leaf(env, a)).collect(),
    )
}

pub fn pairing_tree(env: &Env, pairs: &[(u32, Address)]) -> MerkleTree {
    MerkleTree::new(
        env,
        pairs
            .iter()
            .map(|(id, owner)| merkle::pairing_leaf(env, *id, owner))
            .collect(),
    )
}

pub fn generate_accounts(env: &Env, n: usize) -> StdVec<Address> {
    (0..n).map(|_| Address::generate(env)).collect()
}
