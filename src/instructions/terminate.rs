use crate::{define_instruction_with_metadata, machine, store::AccountStore};
use pinocchio_log::log;

define_instruction_with_metadata!(
    discriminant: 1,
    Terminate,
    accounts: {
        counter: deferred => writable, desc: "Counter account to close",
        authority: deferred => signer => writable, desc: "Authority of the counter, receives the rent",
    },
    data: {},
    process: {
        let mut store = AccountStore::new(counter, authority);
        machine::destroy(&mut store, counter.key(), authority.key())?;

        log!("Terminated counter!");
        Ok(())
    }
);
