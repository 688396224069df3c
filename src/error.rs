use crate::define_program_errors;

define_program_errors! {
    /// Errors returned by the counter program as `ProgramError::Custom(code)`
    pub enum CounterError {
        /// The signer is not the authority stored in the counter
        NotAuthorized = 6000 => "You are not authorized to perform this action",
        /// Checked arithmetic left the u64 range, in either direction
        CounterOverflow = 6001 => "Counter overflow",
        AlreadyInitialized = 6002 => "Counter already initialized",
        AccountNotInitialized = 6003 => "Counter not initialized",
        InvalidDiscriminator = 6004 => "Invalid instruction discriminator",
    }
}
