//! Counter record state machine.
//!
//! Every address is either absent or holds one [`CounterRecord`]. Operations
//! read, validate and only then write, so a rejected operation leaves the
//! store as it found it. Existence is always checked before authorization.

use crate::{state::CounterRecord, store::RecordStore, CounterError};
use pinocchio::{program_error::ProgramError, pubkey::Pubkey, ProgramResult};

/// Create a record at `address` holding `initial_value`, controlled by `authority`.
pub fn create<S: RecordStore>(
    store: &mut S,
    address: &Pubkey,
    initial_value: u64,
    authority: &Pubkey,
) -> ProgramResult {
    if store.read(address)?.is_some() {
        return Err(CounterError::AlreadyInitialized.into());
    }

    store.allocate(address, CounterRecord::LEN)?;
    store.write(address, &CounterRecord::new(initial_value, authority))
}

/// The record at `address`, or `None` if there is none.
pub fn fetch<S: RecordStore>(
    store: &S,
    address: &Pubkey,
) -> Result<Option<CounterRecord>, ProgramError> {
    store.read(address)
}

/// Overwrite the value.
pub fn set<S: RecordStore>(
    store: &mut S,
    address: &Pubkey,
    new_value: u64,
    signer: &Pubkey,
) -> ProgramResult {
    let mut record = load_authorized(store, address, signer)?;
    record.set_data(new_value);
    store.write(address, &record)
}

/// Add `delta` and return the new value.
pub fn increment<S: RecordStore>(
    store: &mut S,
    address: &Pubkey,
    delta: u64,
    signer: &Pubkey,
) -> Result<u64, ProgramError> {
    let mut record = load_authorized(store, address, signer)?;
    let value = record.checked_increment(delta)?;
    store.write(address, &record)?;
    Ok(value)
}

/// Subtract `delta` and return the new value.
pub fn decrement<S: RecordStore>(
    store: &mut S,
    address: &Pubkey,
    delta: u64,
    signer: &Pubkey,
) -> Result<u64, ProgramError> {
    let mut record = load_authorized(store, address, signer)?;
    let value = record.checked_decrement(delta)?;
    store.write(address, &record)?;
    Ok(value)
}

/// Remove the record; the address reads as absent afterwards.
pub fn destroy<S: RecordStore>(store: &mut S, address: &Pubkey, signer: &Pubkey) -> ProgramResult {
    load_authorized(store, address, signer)?;
    store.free(address)
}

fn load_authorized<S: RecordStore>(
    store: &S,
    address: &Pubkey,
    signer: &Pubkey,
) -> Result<CounterRecord, ProgramError> {
    let record = store
        .read(address)?
        .ok_or(CounterError::AccountNotInitialized)?;

    if record.authority() != signer || !store.verify_signer(signer) {
        return Err(CounterError::NotAuthorized.into());
    }

    Ok(record)
}
