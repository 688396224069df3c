/// Generates complete instruction handler with minimal boilerplate
/// Also generates metadata for automatic shank enum generation via build script
#[macro_export]
macro_rules! define_instruction_with_metadata {
    (
        discriminant: $disc:literal,
        $name:ident,
        // Accounts with their validation rules and descriptions
        accounts: {
            $(
                $account:ident: $account_type:tt $(=> $validation:tt)*, desc: $desc:literal
            ),* $(,)?
        },
        // Instruction data fields
        data: {
            $(
                $field:ident: $field_type:ty
            ),* $(,)?
        },
        // Process function body
        process: $process_body:block
    ) => {
        use bytemuck::{Pod, Zeroable};
        use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};

        #[repr(C)]
        pub struct $name<'info> {
            $(pub $account: &'info AccountInfo,)*
        }

        ::paste::paste! {
            #[repr(C)]
            #[derive(Clone, Copy, Pod, Zeroable)]
            pub struct [<$name Data>] {
                $(pub $field: $field_type,)*
            }

            impl [<$name Data>] {
                pub const LEN: usize = core::mem::size_of::<Self>();
            }

            #[repr(C)]
            pub struct [<$name Instruction>]<'info> {
                pub accounts: $name<'info>,
                pub data: [<$name Data>],
            }
        }

        impl<'info> TryFrom<&'info [AccountInfo]> for $name<'info> {
            type Error = ProgramError;

            fn try_from(accounts: &'info [AccountInfo]) -> Result<Self, Self::Error> {
                let [$($account,)* ..] = accounts else {
                    return Err(ProgramError::NotEnoughAccountKeys);
                };

                $(
                    validate_account!($account, $account_type $(=> $validation)*);
                )*

                Ok(Self {
                    $($account,)*
                })
            }
        }

        ::paste::paste! {
            impl<'info> TryFrom<(&'info [AccountInfo], &'info [u8])> for [<$name Instruction>]<'info> {
                type Error = ProgramError;

                fn try_from((accounts, data): (&'info [AccountInfo], &'info [u8])) -> Result<Self, Self::Error> {
                    let accounts = $name::try_from(accounts)?;
                    let data = bytemuck::try_from_bytes::<[<$name Data>]>(data)
                        .map_err(|_| ProgramError::InvalidInstructionData)?;

                    Ok(Self {
                        accounts,
                        data: *data,
                    })
                }
            }

            impl<'info> [<$name Instruction>]<'info> {
                pub fn process(self) -> ProgramResult {
                    let Self { accounts, data } = self;
                    #[allow(unused_variables)]
                    let $name { $($account,)* } = accounts;
                    #[allow(unused_variables)]
                    let [<$name Data>] { $($field,)* } = data;

                    $process_body
                }
            }

            // Metadata mirrored by the build script into the shank instruction enum
            #[doc(hidden)]
            #[allow(non_snake_case)]
            pub mod [<$name _METADATA>] {
                pub const DISCRIMINATOR: u8 = $disc;
                pub const NAME: &str = stringify!($name);

                /// (name, kind, description) in account order
                pub const ACCOUNTS: &[(&str, &str, &str)] = &[
                    $(
                        (stringify!($account), stringify!($account_type), $desc),
                    )*
                ];

                pub const SHANK_ATTRS: &[(&str, &[&str])] = &[
                    $(
                        (stringify!($account), define_instruction_with_metadata!(@shank_attrs $account_type $(=> $validation)*)),
                    )*
                ];

                pub const FIELDS: &[(&str, &str)] = &[
                    $(
                        (stringify!($field), stringify!($field_type)),
                    )*
                ];
            }
        }
    };

    // Shank attributes derived from the account kind and its flags
    (@shank_attrs signer => writable) => { &["signer", "writable"] };
    (@shank_attrs signer) => { &["signer"] };
    (@shank_attrs deferred => signer => writable) => { &["signer", "writable"] };
    (@shank_attrs deferred => signer) => { &["signer"] };
    (@shank_attrs $account_type:tt => writable) => { &["writable"] };
    (@shank_attrs $account_type:tt) => { &[] };
}

/// Validates accounts based on type and additional rules
///
/// `deferred` accounts carry their flags for the IDL only. Their existence,
/// ownership and signature are decided later by the record store, so that a
/// missing record is reported before a missing signature.
#[macro_export]
macro_rules! validate_account {
    // Signer validation
    ($account:expr, signer) => {{
        if !$account.is_signer() {
            return Err(::pinocchio::program_error::ProgramError::MissingRequiredSignature);
        }
    }};

    // Signer + writable
    ($account:expr, signer => writable) => {{
        if !$account.is_signer() {
            return Err(::pinocchio::program_error::ProgramError::MissingRequiredSignature);
        }
        if !$account.is_writable() {
            return Err(::pinocchio::program_error::ProgramError::InvalidAccountData);
        }
    }};

    // Checked by the record store
    ($account:expr, deferred $(=> $flag:tt)*) => {{}};

    // Any account type
    ($account:expr, any) => {{}};
}

/// Create a program-owned account for a keypair address that signed the transaction
///
/// An address that already holds lamports cannot go through `CreateAccount`,
/// so it is topped up to rent exemption, allocated and assigned instead.
#[macro_export]
macro_rules! create_account {
    (
        from: $from:expr,
        to: $to:expr,
        space: $space:expr,
        owner: $owner:expr
    ) => {{
        use pinocchio::sysvars::{rent::Rent, Sysvar};

        let space: usize = $space;
        let required = Rent::get()?.minimum_balance(space);
        let current = $to.lamports();

        if current == 0 {
            pinocchio_system::instructions::CreateAccount {
                from: $from,
                to: $to,
                lamports: required,
                space: space as u64,
                owner: $owner,
            }
            .invoke()?;
        } else {
            if required > current {
                pinocchio_system::instructions::Transfer {
                    from: $from,
                    to: $to,
                    lamports: required - current,
                }
                .invoke()?;
            }
            pinocchio_system::instructions::Allocate {
                account: $to,
                space: space as u64,
            }
            .invoke()?;
            pinocchio_system::instructions::Assign {
                account: $to,
                owner: $owner,
            }
            .invoke()?;
        }
    }};
}

/// Close account, handing its lamports to `$receiver`
#[macro_export]
macro_rules! close_account {
    ($account:expr, $receiver:expr) => {{
        {
            let lamports = *$account.try_borrow_lamports()?;
            let mut receiver = $receiver.try_borrow_mut_lamports()?;
            *receiver = receiver
                .checked_add(lamports)
                .ok_or(::pinocchio::program_error::ProgramError::ArithmeticOverflow)?;
        }

        // Leave nothing behind in the data region
        {
            let mut data = $account.try_borrow_mut_data()?;
            data.fill(0);
        }
        $account.close()?;
    }};
}

/// Define state structs as zero-copy `Pod` records for account data
#[macro_export]
macro_rules! define_state {
    (
        $(
            $(#[$meta:meta])*
            pub struct $name:ident {
                $(
                    $(#[$field_meta:meta])*
                    pub $field:ident: $field_type:ty
                ),* $(,)?
            }
        )*
    ) => {
        $(
            $(#[$meta])*
            #[repr(C)]
            #[derive(Clone, Copy, Debug, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
            pub struct $name {
                $(
                    $(#[$field_meta])*
                    pub $field: $field_type,
                )*
            }

            impl $name {
                pub const LEN: usize = ::core::mem::size_of::<Self>();
            }
        )*
    };
}

/// Define program errors with stable custom codes and display messages
///
/// The generated enum is compatible with shank IDL generation and converts
/// into `ProgramError::Custom(code)`.
///
/// Usage:
/// ```ignore
/// define_program_errors! {
///     pub enum MyProgramError {
///         /// Custom error message
///         CustomError = 6000 => "Custom error",
///         AnotherError = 6001 => "Another error",
///     }
/// }
/// ```
#[macro_export]
macro_rules! define_program_errors {
    (
        $(#[$meta:meta])*
        pub enum $error_name:ident {
            $(
                $(#[doc = $doc:literal])*
                $variant:ident = $code:literal => $msg:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, ::shank::ShankType)]
        #[repr(u32)]
        pub enum $error_name {
            $(
                $(#[doc = $doc])*
                $variant = $code,
            )*
        }

        impl From<$error_name> for ::pinocchio::program_error::ProgramError {
            fn from(e: $error_name) -> Self {
                Self::Custom(e as u32)
            }
        }

        impl TryFrom<u32> for $error_name {
            type Error = ::pinocchio::program_error::ProgramError;

            fn try_from(code: u32) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok($error_name::$variant),)*
                    _ => Err(::pinocchio::program_error::ProgramError::InvalidArgument),
                }
            }
        }

        impl core::fmt::Display for $error_name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $(
                        $error_name::$variant => f.write_str($msg),
                    )*
                }
            }
        }
    };
}
