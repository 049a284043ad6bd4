//! Role flags per (role, account) and the single permission check used by
//! every privileged entry point.

use soroban_sdk::{Address, Env, Vec};

use crate::storage_types::{extend_persistent, DataKey, Role};
use crate::Error;

/// Privileged operations, each mapped to the roles allowed to perform it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    ManageRoles,
    TransferAdmin,
    InitializeRoot,
    ConfigurePhases,
    SetListingPrice,
    SetMaxSupply,
    MintLegendary,
    ViewClaims,
    Withdraw,
    DoorStaffRedeem,
    RefundDoorStaff,
}

impl Operation {
    fn allowed_roles(self) -> &'static [Role] {
        match self {
            Operation::DoorStaffRedeem | Operation::RefundDoorStaff => {
                &[Role::Minter, Role::DoorStaffMinter]
            }
            _ => &[Role::Admin],
        }
    }

    fn denial(self) -> Error {
        match self {
            Operation::DoorStaffRedeem | Operation::RefundDoorStaff => Error::NotMinter,
            _ => Error::NotAdmin,
        }
    }
}

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Role(role, account.clone()))
        .unwrap_or(false)
}

pub fn permits(env: &Env, op: Operation, caller: &Address) -> bool {
    op.allowed_roles()
        .iter()
        .any(|role| has_role(env, *role, caller))
}

/// Authenticate `caller` and check it may perform `op`.
pub fn require(env: &Env, op: Operation, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if permits(env, op, caller) {
        Ok(())
    } else {
        Err(op.denial())
    }
}

/// Returns `true` if the flag changed.
pub fn grant(env: &Env, role: Role, account: &Address) -> bool {
    if has_role(env, role, account) {
        return false;
    }
    let key = DataKey::Role(role, account.clone());
    env.storage().persistent().set(&key, &true);
    extend_persistent(env, &key);
    true
}

/// Returns `true` if the flag changed.
pub fn revoke(env: &Env, role: Role, account: &Address) -> bool {
    if !has_role(env, role, account) {
        return false;
    }
    env.storage()
        .persistent()
        .remove(&DataKey::Role(role, account.clone()));
    true
}

/// Admin may only leave an account through `transfer_admin`.
pub fn check_revocable(caller: &Address, role: Role, account: &Address) -> Result<(), Error> {
    if role == Role::Admin && caller == account {
        return Err(Error::CannotRevokeOwnAdmin);
    }
    Ok(())
}

/// Validates a whole batch before any flag is flipped.
pub fn check_batch(accounts: &Vec<Address>) -> Result<(), Error> {
    if accounts.is_empty() {
        return Err(Error::EmptyBatch);
    }
    for i in 0..accounts.len() {
        let a = accounts.get_unchecked(i);
        for j in (i + 1)..accounts.len() {
            if a == accounts.get_unchecked(j) {
                return Err(Error::DuplicateAccount);
            }
        }
    }
    Ok(())
}

pub fn transfer_admin(env: &Env, from: &Address, to: &Address) {
    if from == to {
        return;
    }
    grant(env, Role::Admin, to);
    revoke(env, Role::Admin, from);
}
