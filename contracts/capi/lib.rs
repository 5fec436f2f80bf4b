#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod logic;
pub mod model;

#[ink::contract]
mod capi {
    use ink::prelude::string::String;
    use ink::storage::Mapping;

    use crate::logic::{split_amount, FeeSplit};
    use crate::model::{
        token_name, token_symbol, zero_acc, Approval, DevelopmentAddressUpdated, DevelopmentFeeSent,
        DonationAddressUpdated, DonationSent, Error, Minted, Result, TokensBurned, Transfer,
        INITIAL_SUPPLY, STORAGE_VERSION, TOKEN_DECIMALS,
    };

    #[ink(storage)]
    pub struct Capi {
        // governance / fee sinks
        owner_acc: AccountId,
        development_acc: AccountId,
        donation_acc: AccountId,

        // token state
        total_supply: Balance,
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,

        // versioning (future migrations)
        storage_ver_u32: u32,
    }

    impl Capi {
        // -------- constructors --------

        /// Mints the whole supply to the deployer, who also becomes the owner.
        #[ink(constructor)]
        pub fn new(development_acc: AccountId, donation_acc: AccountId) -> Result<Self> {
            if development_acc == zero_acc() || donation_acc == zero_acc() {
                return Err(Error::ZeroAddress)
            }
            let owner_acc = Self::env().caller();
            let mut balances = Mapping::default();
            balances.insert(&owner_acc, &INITIAL_SUPPLY);

            Self::env().emit_event(Minted { to_acc: owner_acc, amount_val: INITIAL_SUPPLY });

            Ok(Self {
                owner_acc,
                development_acc,
                donation_acc,
                total_supply: INITIAL_SUPPLY,
                balances,
                allowances: Mapping::default(),
                storage_ver_u32: STORAGE_VERSION,
            })
        }

        // -------- modifiers (helpers) --------

        fn only_owner(&self) -> Result<()> {
            if self.env().caller() != self.owner_acc {
                ink::env::debug_println!("capi: caller is not the owner");
                return Err(Error::Unauthorized)
            }
            Ok(())
        }

        // -------- read API --------

        #[ink(message)]
        pub fn name(&self) -> String {
            token_name()
        }

        #[ink(message)]
        pub fn symbol(&self) -> String {
            token_symbol()
        }

        #[ink(message)]
        pub fn decimals(&self) -> u8 {
            TOKEN_DECIMALS
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        /// Everything burned by transfer fees so far.
        #[ink(message)]
        pub fn total_burned(&self) -> Balance {
            INITIAL_SUPPLY.saturating_sub(self.total_supply)
        }

        #[ink(message)]
        pub fn balance_of(&self, owner_acc: AccountId) -> Balance {
            self.balances.get(&owner_acc).unwrap_or(0)
        }

        #[ink(message)]
        pub fn my_balance(&self) -> Balance {
            let caller_acc = self.env().caller();
            self.balance_of(caller_acc)
        }

        #[ink(message)]
        pub fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
            self.allowances.get(&(owner_acc, spender_acc)).unwrap_or(0)
        }

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.owner_acc
        }

        #[ink(message)]
        pub fn development_wallet(&self) -> AccountId {
            self.development_acc
        }

        #[ink(message)]
        pub fn donation_wallet(&self) -> AccountId {
            self.donation_acc
        }

        #[ink(message)]
        pub fn storage_version(&self) -> u32 {
            self.storage_ver_u32
        }

        // -------- admin --------

        #[ink(message)]
        pub fn set_development_wallet(&mut self, new_acc: AccountId) -> Result<()> {
            self.only_owner()?;
            if new_acc == zero_acc() {
                return Err(Error::ZeroAddress)
            }
            let previous_acc = self.development_acc;
            self.development_acc = new_acc;
            self.env().emit_event(DevelopmentAddressUpdated { previous_acc, new_acc });
            Ok(())
        }

        #[ink(message)]
        pub fn set_donation_wallet(&mut self, new_acc: AccountId) -> Result<()> {
            self.only_owner()?;
            if new_acc == zero_acc() {
                return Err(Error::ZeroAddress)
            }
            let previous_acc = self.donation_acc;
            self.donation_acc = new_acc;
            self.env().emit_event(DonationAddressUpdated { previous_acc, new_acc });
            Ok(())
        }

        // -------- write API --------

        /// Sends `amount_val` minus the 2% transfer fee to `to_acc`.
        #[ink(message)]
        pub fn transfer(&mut self, to_acc: AccountId, amount_val: Balance) -> Result<()> {
            let from_acc = self.env().caller();
            self.transfer_with_fees(from_acc, to_acc, amount_val)
        }

        #[ink(message)]
        pub fn approve(&mut self, spender_acc: AccountId, amount_val: Balance) -> Result<()> {
            if spender_acc == zero_acc() {
                return Err(Error::ZeroAddress)
            }
            let owner_acc = self.env().caller();
            self.set_allowance(owner_acc, spender_acc, amount_val);
            Ok(())
        }

        #[ink(message)]
        pub fn increase_allowance(&mut self, spender_acc: AccountId, add_val: Balance) -> Result<()> {
            if spender_acc == zero_acc() {
                return Err(Error::ZeroAddress)
            }
            let owner_acc = self.env().caller();
            let current_val = self.allowance(owner_acc, spender_acc);
            let new_val = current_val.checked_add(add_val).ok_or(Error::Overflow)?;
            self.set_allowance(owner_acc, spender_acc, new_val);
            Ok(())
        }

        #[ink(message)]
        pub fn decrease_allowance(&mut self, spender_acc: AccountId, sub_val: Balance) -> Result<()> {
            let owner_acc = self.env().caller();
            let current_val = self.allowance(owner_acc, spender_acc);
            let new_val = current_val
                .checked_sub(sub_val)
                .ok_or(Error::InsufficientAllowance)?;
            self.set_allowance(owner_acc, spender_acc, new_val);
            Ok(())
        }

        /// Spends the caller's allowance on `from_acc`. The allowance is charged the
        /// gross amount; fees are split exactly as in `transfer`.
        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            amount_val: Balance,
        ) -> Result<()> {
            let caller_acc = self.env().caller();
            let current_allow = self.allowance(from_acc, caller_acc);
            if current_allow < amount_val {
                return Err(Error::InsufficientAllowance)
            }

            self.transfer_with_fees(from_acc, to_acc, amount_val)?;

            // Reduce allowance last
            let new_allow = current_allow - amount_val;
            self.allowances.insert(&(from_acc, caller_acc), &new_allow);
            Ok(())
        }

        // ---- internals ----

        fn set_allowance(&mut self, owner_acc: AccountId, spender_acc: AccountId, amount_val: Balance) {
            self.allowances.insert(&(owner_acc, spender_acc), &amount_val);
            self.env().emit_event(Approval { owner_acc, spender_acc, amount_val });
        }

        /// All checks run before the first storage write, so a rejected transfer
        /// leaves balances, supply and events untouched even off-chain.
        fn transfer_with_fees(
            &mut self,
            from_acc: AccountId,
            to_acc: AccountId,
            amount_val: Balance,
        ) -> Result<()> {
            if to_acc == zero_acc() {
                ink::env::debug_println!("capi: transfer to the zero account");
                return Err(Error::InvalidRecipient)
            }
            let from_bal = self.balance_of(from_acc);
            if from_bal < amount_val {
                return Err(Error::InsufficientBalance)
            }

            let split: FeeSplit = split_amount(amount_val)?;
            let new_from = from_bal.checked_sub(split.debit_val()).ok_or(Error::Overflow)?;
            let new_supply = self
                .total_supply
                .checked_sub(split.burn_val)
                .ok_or(Error::Overflow)?;
            let development_acc = self.development_acc;
            let donation_acc = self.donation_acc;

            // Credits cannot overflow: every balance is bounded by the supply.
            self.balances.insert(&from_acc, &new_from);
            self.credit(to_acc, split.net_val)?;
            self.total_supply = new_supply;
            self.credit(development_acc, split.dev_val)?;
            self.credit(donation_acc, split.donation_val)?;

            self.env().emit_event(Transfer { from_acc, to_acc, amount_val: split.net_val });
            self.env().emit_event(TokensBurned { from_acc, amount_val: split.burn_val });
            self.env().emit_event(DevelopmentFeeSent {
                from_acc,
                to_acc: development_acc,
                amount_val: split.dev_val,
            });
            self.env().emit_event(DonationSent {
                from_acc,
                to_acc: donation_acc,
                amount_val: split.donation_val,
            });
            Ok(())
        }

        fn credit(&mut self, to_acc: AccountId, amount_val: Balance) -> Result<()> {
            let to_bal = self.balance_of(to_acc);
            let new_to = to_bal.checked_add(amount_val).ok_or(Error::Overflow)?;
            self.balances.insert(&to_acc, &new_to);
            Ok(())
        }
    }


}
