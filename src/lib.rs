#![cfg_attr(not(test), no_std)]
#![allow(unexpected_cfgs)]

#[macro_use]
pub mod jiminy;
pub mod error;
pub mod instructions;
pub mod machine;
pub mod state;
pub mod store;

pub use error::CounterError;
pub use instructions::*;
pub use state::CounterRecord;

pinocchio_pubkey::declare_id!("8M9FqY8bHsN5TE6BZdDxnnZfUATbKKjmLCXjwzuQJ9ZN");

// Instruction enum and dispatch, regenerated by build.rs
pub mod generated;
pub use generated::*;

#[cfg(not(feature = "no-entrypoint"))]
pinocchio::program_entrypoint!(process_instruction);
#[cfg(not(feature = "no-entrypoint"))]
pinocchio::default_allocator!();
pinocchio::nostd_panic_handler!();
