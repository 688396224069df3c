use crate::{define_instruction_with_metadata, machine, store::AccountStore};
use pinocchio_log::log;

define_instruction_with_metadata!(
    discriminant: 4,
    Subtract,
    accounts: {
        counter: deferred => writable, desc: "Counter account to subtract from",
        authority: deferred => signer => writable, desc: "Authority of the counter",
    },
    data: {
        quantity: [u8; 8],
    },
    process: {
        let quantity = u64::from_le_bytes(quantity);

        let mut store = AccountStore::new(counter, authority);
        let count = machine::decrement(&mut store, counter.key(), quantity, authority.key())?;

        log!("Subtracted {} from your counter. Current count: {}", quantity, count);
        Ok(())
    }
);
