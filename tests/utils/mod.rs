#![allow(dead_code)]

use authority_counter::CounterRecord;
use mollusk_svm::{program::keyed_account_for_system_program, Mollusk};
use solana_sdk::{
    account::Account,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

pub const PROGRAM: Pubkey = Pubkey::new_from_array(authority_counter::ID);

pub const INITIALIZE: u8 = 0;
pub const TERMINATE: u8 = 1;
pub const UPDATE: u8 = 2;
pub const ADD: u8 = 3;
pub const SUBTRACT: u8 = 4;

pub const STARTING_LAMPORTS: u64 = 10_000_000_000;

pub fn mollusk() -> Mollusk {
    Mollusk::new(&PROGRAM, "authority_counter")
}

pub fn system_program() -> (Pubkey, Account) {
    keyed_account_for_system_program()
}

pub fn wallet() -> (Pubkey, Account) {
    (
        Pubkey::new_unique(),
        Account::new(STARTING_LAMPORTS, 0, &system_program().0),
    )
}

/// A fresh keypair address with nothing stored at it.
pub fn empty_address() -> (Pubkey, Account) {
    (Pubkey::new_unique(), Account::default())
}

fn data_with(discriminator: u8, value: Option<u64>) -> Vec<u8> {
    let mut data = vec![discriminator];
    if let Some(value) = value {
        data.extend_from_slice(&value.to_le_bytes());
    }
    data
}

pub fn initialize(counter: Pubkey, authority: Pubkey, initial_value: u64) -> Instruction {
    Instruction::new_with_bytes(
        PROGRAM,
        &data_with(INITIALIZE, Some(initial_value)),
        vec![
            AccountMeta::new(counter, true),
            AccountMeta::new(authority, true),
            AccountMeta::new_readonly(system_program().0, false),
        ],
    )
}

fn authority_instruction(
    discriminator: u8,
    value: Option<u64>,
    counter: Pubkey,
    authority: Pubkey,
) -> Instruction {
    Instruction::new_with_bytes(
        PROGRAM,
        &data_with(discriminator, value),
        vec![
            AccountMeta::new(counter, false),
            AccountMeta::new(authority, true),
        ],
    )
}

pub fn terminate(counter: Pubkey, authority: Pubkey) -> Instruction {
    authority_instruction(TERMINATE, None, counter, authority)
}

pub fn update(counter: Pubkey, authority: Pubkey, quantity: u64) -> Instruction {
    authority_instruction(UPDATE, Some(quantity), counter, authority)
}

pub fn add(counter: Pubkey, authority: Pubkey, quantity: u64) -> Instruction {
    authority_instruction(ADD, Some(quantity), counter, authority)
}

pub fn subtract(counter: Pubkey, authority: Pubkey, quantity: u64) -> Instruction {
    authority_instruction(SUBTRACT, Some(quantity), counter, authority)
}

/// Bytes a counter account holds for `(data, authority)`.
pub fn record_bytes(data: u64, authority: &Pubkey) -> Vec<u8> {
    bytemuck::bytes_of(&CounterRecord::new(data, &authority.to_bytes())).to_vec()
}

/// Client-side fetch: the stored `(data, authority)`, or `None` once the account is gone.
pub fn fetch(account: &Account) -> Option<(u64, Pubkey)> {
    if account.lamports == 0 || account.owner != PROGRAM {
        return None;
    }
    let record = CounterRecord::load(&account.data).ok()?;
    Some((record.data(), Pubkey::new_from_array(*record.authority())))
}

pub fn account<'a>(accounts: &'a [(Pubkey, Account)], key: &Pubkey) -> &'a Account {
    accounts
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, account)| account)
        .expect("account missing from result")
}
