use ink::prelude::string::String;
use ink::primitives::AccountId;

pub type Balance = <ink::env::DefaultEnvironment as ink::env::Environment>::Balance;
pub type Result<T> = core::result::Result<T, Error>;

// -------- metadata --------

pub const TOKEN_NAME: &str = "Capibara";
pub const TOKEN_SYMBOL: &str = "CAPI";
pub const TOKEN_DECIMALS: u8 = 18;

/// One whole token in base units.
pub const ONE_CAPI: Balance = 1_000_000_000_000_000_000;
/// Minted once to the deployer; nothing is ever minted afterwards.
pub const INITIAL_SUPPLY: Balance = 1_000_000_000 * ONE_CAPI;

// -------- fee schedule (basis points of the gross amount) --------

pub const BPS_DENOMINATOR: Balance = 10_000;
pub const TOTAL_FEE_BPS: Balance = 200;
pub const BURN_FEE_BPS: Balance = 50;
pub const DEVELOPMENT_FEE_BPS: Balance = 50;
pub const DONATION_FEE_BPS: Balance = 100;

const _: () = assert!(BURN_FEE_BPS + DEVELOPMENT_FEE_BPS + DONATION_FEE_BPS == TOTAL_FEE_BPS);

pub const STORAGE_VERSION: u32 = 1;

/// The all-zero account; never a valid recipient or fee sink.
pub fn zero_acc() -> AccountId {
    AccountId::from([0u8; 32])
}

pub fn token_name() -> String {
    String::from(TOKEN_NAME)
}

pub fn token_symbol() -> String {
    String::from(TOKEN_SYMBOL)
}

#[derive(scale::Encode, scale::Decode, Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    InsufficientBalance,
    InsufficientAllowance,
    InvalidRecipient,
    Unauthorized,
    ZeroAddress,
    Overflow,
}

// -------- events --------

/// Net amount that reached the recipient after fees.
#[ink::event]
#[derive(Debug, PartialEq, Eq)]
pub struct Transfer {
    #[ink(topic)]
    pub from_acc: AccountId,
    #[ink(topic)]
    pub to_acc: AccountId,
    pub amount_val: Balance,
}

#[ink::event]
#[derive(Debug, PartialEq, Eq)]
pub struct Minted {
    #[ink(topic)]
    pub to_acc: AccountId,
    pub amount_val: Balance,
}

#[ink::event]
#[derive(Debug, PartialEq, Eq)]
pub struct TokensBurned {
    #[ink(topic)]
    pub from_acc: AccountId,
    pub amount_val: Balance,
}

#[ink::event]
#[derive(Debug, PartialEq, Eq)]
pub struct DevelopmentFeeSent {
    #[ink(topic)]
    pub from_acc: AccountId,
    #[ink(topic)]
    pub to_acc: AccountId,
    pub amount_val: Balance,
}

#[ink::event]
#[derive(Debug, PartialEq, Eq)]
pub struct DonationSent {
    #[ink(topic)]
    pub from_acc: AccountId,
    #[ink(topic)]
    pub to_acc: AccountId,
    pub amount_val: Balance,
}

#[ink::event]
#[derive(Debug, PartialEq, Eq)]
pub struct Approval {
    #[ink(topic)]
    pub owner_acc: AccountId,
    #[ink(topic)]
    pub spender_acc: AccountId,
    pub amount_val: Balance,
}

#[ink::event]
#[derive(Debug, PartialEq, Eq)]
pub struct DevelopmentAddressUpdated {
    #[ink(topic)]
    pub previous_acc: AccountId,
    #[ink(topic)]
    pub new_acc: AccountId,
}

#[ink::event]
#[derive(Debug, PartialEq, Eq)]
pub struct DonationAddressUpdated {
    #[ink(topic)]
    pub previous_acc: AccountId,
    #[ink(topic)]
    pub new_acc: AccountId,
}
