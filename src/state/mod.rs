use crate::{define_state, CounterError};
use pinocchio::{program_error::ProgramError, pubkey::Pubkey};

define_state! {
    /// Counter record as laid out in account data: the value, then its authority.
    pub struct CounterRecord {
        /// Little-endian u64
        pub data: [u8; 8],
        pub authority: [u8; 32],
    }
}

impl CounterRecord {
    pub fn new(data: u64, authority: &Pubkey) -> Self {
        Self {
            data: data.to_le_bytes(),
            authority: *authority,
        }
    }

    /// View raw account bytes as a record.
    pub fn load(bytes: &[u8]) -> Result<&Self, ProgramError> {
        bytemuck::try_from_bytes::<Self>(bytes).map_err(|_| ProgramError::InvalidAccountData)
    }

    #[inline(always)]
    pub fn data(&self) -> u64 {
        u64::from_le_bytes(self.data)
    }

    #[inline(always)]
    pub fn authority(&self) -> &Pubkey {
        &self.authority
    }

    pub fn set_data(&mut self, value: u64) {
        self.data = value.to_le_bytes();
    }

    /// Add `delta`, leaving the record untouched on overflow.
    pub fn checked_increment(&mut self, delta: u64) -> Result<u64, CounterError> {
        let value = self
            .data()
            .checked_add(delta)
            .ok_or(CounterError::CounterOverflow)?;
        self.set_data(value);
        Ok(value)
    }

    /// Subtract `delta`, leaving the record untouched on underflow.
    pub fn checked_decrement(&mut self, delta: u64) -> Result<u64, CounterError> {
        let value = self
            .data()
            .checked_sub(delta)
            .ok_or(CounterError::CounterOverflow)?;
        self.set_data(value);
        Ok(value)
    }
}
