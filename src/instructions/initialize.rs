use crate::{define_instruction_with_metadata, machine, store::AccountStore};
use pinocchio_log::log;

define_instruction_with_metadata!(
    discriminant: 0,
    Initialize,
    accounts: {
        counter: deferred => signer => writable, desc: "New counter account",
        authority: signer => writable, desc: "Authority of the counter and rent payer",
        system_program: any, desc: "System program",
    },
    data: {
        initial_value: [u8; 8],
    },
    process: {
        let initial_value = u64::from_le_bytes(initial_value);

        let mut store = AccountStore::new(counter, authority);
        machine::create(&mut store, counter.key(), initial_value, authority.key())?;

        log!("Initialized counter with data: {}!", initial_value);
        Ok(())
    }
);
