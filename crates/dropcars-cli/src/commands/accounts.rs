use anyhow::Result;
use clap::{Args, ValueEnum};
use dropcars_core::api::{AccountFilter, AccountStatus, AccountType};

use crate::context::Context;
use crate::summary::{print_account, print_accounts};

#[derive(Clone, Copy, ValueEnum)]
pub enum AccountTypeArg {
    Vendor,
    VehicleOwner,
    Driver,
}

impl From<AccountTypeArg> for AccountType {
    fn from(arg: AccountTypeArg) -> Self {
        match arg {
            AccountTypeArg::Vendor => AccountType::Vendor,
            AccountTypeArg::VehicleOwner => AccountType::VehicleOwner,
            AccountTypeArg::Driver => AccountType::Driver,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AccountStatusArg {
    Active,
    Inactive,
    Pending,
    Blocked,
}

impl From<AccountStatusArg> for AccountStatus {
    fn from(arg: AccountStatusArg) -> Self {
        match arg {
            AccountStatusArg::Active => AccountStatus::Active,
            AccountStatusArg::Inactive => AccountStatus::Inactive,
            AccountStatusArg::Pending => AccountStatus::Pending,
            AccountStatusArg::Blocked => AccountStatus::Blocked,
        }
    }
}

#[derive(Args)]
pub struct ListArgs {
    /// Only accounts of this type
    #[arg(long = "type", value_enum)]
    pub account_type: Option<AccountTypeArg>,

    /// Only accounts with this status
    #[arg(long, value_enum)]
    pub status: Option<AccountStatusArg>,
}

#[derive(Args)]
pub struct SetStatusArgs {
    /// Account ID
    pub account_id: String,

    /// New status
    #[arg(value_enum)]
    pub status: AccountStatusArg,
}

pub fn list(ctx: &Context, args: &ListArgs) -> Result<()> {
    let filter = AccountFilter {
        account_type: args.account_type.map(Into::into),
        status: args.status.map(Into::into),
    };
    let client = ctx.client()?;
    let accounts = ctx.call("Fetching accounts...", || client.list_accounts(&filter))?;
    print_accounts(&accounts);
    Ok(())
}

pub fn set_status(ctx: &Context, args: &SetStatusArgs) -> Result<()> {
    let client = ctx.client()?;
    let account = ctx.call("Updating account...", || {
        client.set_account_status(&args.account_id, args.status.into())
    })?;
    print_account(&account);
    Ok(())
}
