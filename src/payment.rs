//! Exact-amount payment collection, door-staff escrow and treasury payout,
//! all denominated in the configured payment asset.

use soroban_sdk::{token, Address, Env};

use crate::phase;
use crate::storage_types::{extend_persistent, DataKey, DoorStaffEscrow};
use crate::Error;

fn payment_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(Error::NotInitialized)
}

/// `count` units at the current listing price.
pub fn price_of(env: &Env, count: u32) -> Result<i128, Error> {
    phase::listing_price(env)
        .checked_mul(i128::from(count))
        .ok_or(Error::Overflow)
}

/// Payments must match the price exactly; there is no change-making.
pub fn require_exact(env: &Env, count: u32, payment: i128) -> Result<i128, Error> {
    let expected = price_of(env, count)?;
    if payment != expected {
        return Err(Error::IncorrectPayment);
    }
    Ok(expected)
}

/// Move `amount` from `from` into the contract.
pub fn collect(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let client = token::Client::new(env, &payment_token(env)?);
    client.transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

fn pay_out(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let client = token::Client::new(env, &payment_token(env)?);
    client.transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}

pub fn escrow_of(env: &Env, identity: &Address) -> Option<DoorStaffEscrow> {
    env.storage()
        .persistent()
        .get(&DataKey::Escrow(identity.clone()))
}

pub fn total_escrowed(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalEscrowed)
        .unwrap_or(0)
}

fn set_total_escrowed(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalEscrowed, &total);
}

fn store_escrow(env: &Env, identity: &Address, escrow: &DoorStaffEscrow) {
    let key = DataKey::Escrow(identity.clone());
    if escrow.count == 0 && escrow.amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, escrow);
        extend_persistent(env, &key);
    }
}

/// Add a prepaid door-staff order to `identity`'s escrow.
pub fn deposit_escrow(env: &Env, identity: &Address, count: u32, amount: i128) -> Result<DoorStaffEscrow, Error> {
    let mut escrow = escrow_of(env, identity).unwrap_or(DoorStaffEscrow { count: 0, amount: 0 });
    escrow.count = escrow.count.checked_add(count).ok_or(Error::Overflow)?;
    escrow.amount = escrow.amount.checked_add(amount).ok_or(Error::Overflow)?;
    let total = total_escrowed(env).checked_add(amount).ok_or(Error::Overflow)?;

    store_escrow(env, identity, &escrow);
    set_total_escrowed(env, total);
    Ok(escrow)
}

/// Price of `count` units out of `escrow`, at the rate the buyer actually
/// prepaid. Releasing the last units takes whatever is left.
pub fn escrowed_price(escrow: &DoorStaffEscrow, count: u32) -> Result<i128, Error> {
    if count == 0 || escrow.count < count {
        return Err(Error::InsufficientEscrow);
    }
    if count == escrow.count {
        return Ok(escrow.amount);
    }
    let amount = escrow
        .amount
        .checked_mul(i128::from(count))
        .ok_or(Error::Overflow)?;
    Ok(amount / i128::from(escrow.count))
}

/// Release `count` prepaid units from `identity`'s escrow to the treasury.
/// `payment` must equal their escrowed price, whatever the listing price
/// is now.
pub fn draw_escrow(env: &Env, identity: &Address, count: u32, payment: i128) -> Result<DoorStaffEscrow, Error> {
    let mut escrow = escrow_of(env, identity).ok_or(Error::InsufficientEscrow)?;
    let amount = escrowed_price(&escrow, count)?;
    if payment != amount {
        return Err(Error::IncorrectPayment);
    }
    escrow.count -= count;
    escrow.amount -= amount;

    store_escrow(env, identity, &escrow);
    set_total_escrowed(env, total_escrowed(env) - amount);
    Ok(escrow)
}

/// Return the whole escrow to `identity` and clear it.
pub fn refund_escrow(env: &Env, identity: &Address) -> Result<i128, Error> {
    let escrow = escrow_of(env, identity).ok_or(Error::NothingToRefund)?;
    if escrow.amount == 0 {
        return Err(Error::NothingToRefund);
    }
    env.storage()
        .persistent()
        .remove(&DataKey::Escrow(identity.clone()));
    set_total_escrowed(env, total_escrowed(env) - escrow.amount);
    pay_out(env, identity, escrow.amount)?;
    Ok(escrow.amount)
}

/// Contract balance not held in escrow.
pub fn withdrawable(env: &Env) -> Result<i128, Error> {
    let client = token::Client::new(env, &payment_token(env)?);
    let balance = client.balance(&env.current_contract_address());
    Ok(balance - total_escrowed(env))
}

pub fn withdraw(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    if amount > withdrawable(env)? {
        return Err(Error::InsufficientFunds);
    }
    pay_out(env, to, amount)
}
