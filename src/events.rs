use soroban_sdk::{symbol_short, Address, BytesN, Env, Symbol, Vec};

use crate::claims::RootSlot;
use crate::phase::Channel;
use crate::storage_types::{ClaimRecord, PhaseWindow, Role};

pub fn emit_initialized(env: &Env, admin: &Address) {
    env.events().publish((symbol_short!("init"),), admin.clone());
}

pub fn emit_role_granted(env: &Env, role: Role, account: &Address, by: &Address) {
    env.events()
        .publish((symbol_short!("role_gr"), role, account.clone()), by.clone());
}

pub fn emit_role_revoked(env: &Env, role: Role, account: &Address, by: &Address) {
    env.events()
        .publish((symbol_short!("role_rv"), role, account.clone()), by.clone());
}

pub fn emit_admin_transferred(env: &Env, from: &Address, to: &Address) {
    env.events()
        .publish((symbol_short!("adm_xfer"), from.clone()), to.clone());
}

pub fn emit_root_set(env: &Env, slot: RootSlot, root: &BytesN<32>) {
    let name = match slot {
        RootSlot::PreferredMinter => symbol_short!("mint"),
        RootSlot::ClaimedToken => symbol_short!("claim"),
    };
    env.events()
        .publish((symbol_short!("root_set"), name), root.clone());
}

fn channel_name(channel: Channel) -> Symbol {
    match channel {
        Channel::Private => symbol_short!("private"),
        Channel::DoorStaff => symbol_short!("door"),
        Channel::Public => symbol_short!("public"),
    }
}

pub fn emit_toggled(env: &Env, channel: Channel, active: bool) {
    env.events()
        .publish((symbol_short!("phase"), channel_name(channel)), active);
}

pub fn emit_window_set(env: &Env, channel: Channel, window: &PhaseWindow) {
    env.events()
        .publish((symbol_short!("phase"), channel_name(channel)), *window);
}

pub fn emit_price_set(env: &Env, price: i128) {
    env.events().publish((symbol_short!("price"),), price);
}

pub fn emit_max_supply_set(env: &Env, max_supply: u32) {
    env.events().publish((symbol_short!("max_sup"),), max_supply);
}

pub fn emit_minted(env: &Env, channel: Symbol, to: &Address, token_ids: &Vec<u32>) {
    env.events()
        .publish((symbol_short!("mint"), channel, to.clone()), token_ids.clone());
}

pub fn emit_claimed(env: &Env, claimer: &Address, record: &ClaimRecord) {
    env.events()
        .publish((symbol_short!("claim"), claimer.clone()), record.clone());
}

pub fn emit_escrowed(env: &Env, buyer: &Address, count: u32, amount: i128) {
    env.events()
        .publish((symbol_short!("escrow"), buyer.clone()), (count, amount));
}

pub fn emit_redeemed(env: &Env, staff: &Address, recipient: &Address, count: u32) {
    env.events().publish(
        (symbol_short!("redeem"), staff.clone(), recipient.clone()),
        count,
    );
}

pub fn emit_refunded(env: &Env, recipient: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("refund"), recipient.clone()), amount);
}

pub fn emit_transferred(env: &Env, from: &Address, to: &Address, token_id: u32) {
    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        token_id,
    );
}

pub fn emit_withdrawn(env: &Env, to: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("withdraw"), to.clone()), amount);
}
