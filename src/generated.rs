// @generated by build.rs from src/instructions, src/error.rs and src/state.
// Do not edit by hand.

use shank::ShankInstruction;

#[repr(u8)]
#[derive(Clone, Debug, PartialEq, ShankInstruction)]
pub enum ProgramInstructions {
    #[account(0, signer, writable, name = "counter", desc = "New counter account")]
    #[account(1, signer, writable, name = "authority", desc = "Authority of the counter and rent payer")]
    #[account(2, name = "system_program", desc = "System program")]
    Initialize {
        initial_value: [u8; 8],
    },

    #[account(0, writable, name = "counter", desc = "Counter account to close")]
    #[account(1, signer, writable, name = "authority", desc = "Authority of the counter, receives the rent")]
    Terminate {
    },

    #[account(0, writable, name = "counter", desc = "Counter account to overwrite")]
    #[account(1, signer, writable, name = "authority", desc = "Authority of the counter")]
    Update {
        quantity: [u8; 8],
    },

    #[account(0, writable, name = "counter", desc = "Counter account to add to")]
    #[account(1, signer, writable, name = "authority", desc = "Authority of the counter")]
    Add {
        quantity: [u8; 8],
    },

    #[account(0, writable, name = "counter", desc = "Counter account to subtract from")]
    #[account(1, signer, writable, name = "authority", desc = "Authority of the counter")]
    Subtract {
        quantity: [u8; 8],
    },

}

/// Account layouts for IDL generation
pub mod accounts {
    #[repr(C)]
    #[derive(Clone, shank::ShankAccount)]
    pub struct CounterRecord {
        pub data: [u8; 8],
        pub authority: [u8; 32],
    }
}

pub fn process_instruction(
    program_id: &pinocchio::pubkey::Pubkey,
    accounts: &[pinocchio::account_info::AccountInfo],
    instruction_data: &[u8],
) -> pinocchio::ProgramResult {
    if program_id != &crate::ID {
        return Err(pinocchio::program_error::ProgramError::IncorrectProgramId);
    }

    match instruction_data.first() {
        Some(0) => {
            pinocchio_log::log!("Instruction: Initialize");
            crate::instructions::InitializeInstruction::try_from((accounts, &instruction_data[1..]))?.process()
        }
        Some(1) => {
            pinocchio_log::log!("Instruction: Terminate");
            crate::instructions::TerminateInstruction::try_from((accounts, &instruction_data[1..]))?.process()
        }
        Some(2) => {
            pinocchio_log::log!("Instruction: Update");
            crate::instructions::UpdateInstruction::try_from((accounts, &instruction_data[1..]))?.process()
        }
        Some(3) => {
            pinocchio_log::log!("Instruction: Add");
            crate::instructions::AddInstruction::try_from((accounts, &instruction_data[1..]))?.process()
        }
        Some(4) => {
            pinocchio_log::log!("Instruction: Subtract");
            crate::instructions::SubtractInstruction::try_from((accounts, &instruction_data[1..]))?.process()
        }
        _ => Err(crate::error::CounterError::InvalidDiscriminator.into()),
    }
}
