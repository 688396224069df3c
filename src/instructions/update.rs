use crate::{define_instruction_with_metadata, machine, store::AccountStore};
use pinocchio_log::log;

define_instruction_with_metadata!(
    discriminant: 2,
    Update,
    accounts: {
        counter: deferred => writable, desc: "Counter account to overwrite",
        authority: deferred => signer => writable, desc: "Authority of the counter",
    },
    data: {
        quantity: [u8; 8],
    },
    process: {
        let quantity = u64::from_le_bytes(quantity);

        let mut store = AccountStore::new(counter, authority);
        machine::set(&mut store, counter.key(), quantity, authority.key())?;

        log!("Counter updated to {}", quantity);
        Ok(())
    }
);
