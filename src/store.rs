//! Host boundary for counter records.
//!
//! The state machine never touches accounts directly. It goes through a
//! [`RecordStore`], which maps addresses to records and answers whether an
//! identity signed the current operation.

use crate::{close_account, create_account, state::CounterRecord, CounterError};
use pinocchio::{
    account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};

/// Address-keyed record storage provided by the host.
pub trait RecordStore {
    /// Reserve `size` bytes at `address`.
    ///
    /// Fails with [`CounterError::AlreadyInitialized`] when the address is occupied.
    fn allocate(&mut self, address: &Pubkey, size: usize) -> ProgramResult;

    /// Release the storage at `address`, returning its allowance to the authority.
    fn free(&mut self, address: &Pubkey) -> ProgramResult;

    /// `Ok(None)` when nothing is stored at `address`.
    fn read(&self, address: &Pubkey) -> Result<Option<CounterRecord>, ProgramError>;

    fn write(&mut self, address: &Pubkey, record: &CounterRecord) -> ProgramResult;

    /// Whether `identity` authorized the current operation.
    fn verify_signer(&self, identity: &Pubkey) -> bool;
}

/// Record store over the accounts of a single instruction.
///
/// `record` is the counter account; `authority` pays for its creation, proves
/// authorization, and receives its lamports when it is freed.
pub struct AccountStore<'a> {
    record: &'a AccountInfo,
    authority: &'a AccountInfo,
}

impl<'a> AccountStore<'a> {
    pub fn new(record: &'a AccountInfo, authority: &'a AccountInfo) -> Self {
        Self { record, authority }
    }

    fn is_record(&self, address: &Pubkey) -> bool {
        self.record.key() == address
    }
}

impl RecordStore for AccountStore<'_> {
    fn allocate(&mut self, address: &Pubkey, size: usize) -> ProgramResult {
        if !self.is_record(address) {
            return Err(ProgramError::InvalidArgument);
        }
        if !self.record.is_owned_by(&pinocchio_system::ID) || !self.record.data_is_empty() {
            return Err(CounterError::AlreadyInitialized.into());
        }

        create_account!(
            from: self.authority,
            to: self.record,
            space: size,
            owner: &crate::ID
        );
        Ok(())
    }

    fn free(&mut self, address: &Pubkey) -> ProgramResult {
        if !self.is_record(address) {
            return Err(ProgramError::InvalidArgument);
        }

        close_account!(self.record, self.authority);
        Ok(())
    }

    fn read(&self, address: &Pubkey) -> Result<Option<CounterRecord>, ProgramError> {
        if !self.is_record(address)
            || !self.record.is_owned_by(&crate::ID)
            || self.record.lamports() == 0
            || self.record.data_is_empty()
        {
            return Ok(None);
        }

        let data = self.record.try_borrow_data()?;
        CounterRecord::load(&data).map(|record| Some(*record))
    }

    fn write(&mut self, address: &Pubkey, record: &CounterRecord) -> ProgramResult {
        if !self.is_record(address) {
            return Err(ProgramError::InvalidArgument);
        }

        let mut data = self.record.try_borrow_mut_data()?;
        if data.len() != CounterRecord::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        data.copy_from_slice(bytemuck::bytes_of(record));
        Ok(())
    }

    fn verify_signer(&self, identity: &Pubkey) -> bool {
        self.authority.key() == identity && self.authority.is_signer()
    }
}
