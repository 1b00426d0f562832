use anyhow::Result;
use clap::Args;

use crate::context::Context;
use crate::summary::print_wallet;

#[derive(Args)]
pub struct ShowArgs {
    /// Account ID
    pub account_id: String,
}

#[derive(Args)]
pub struct CreditArgs {
    /// Account ID
    pub account_id: String,

    /// Amount to add
    pub amount: f64,

    /// Reason recorded with the credit
    #[arg(long, default_value = "manual credit")]
    pub reason: String,
}

pub fn show(ctx: &Context, args: &ShowArgs) -> Result<()> {
    let client = ctx.client()?;
    let wallet = ctx.call("Fetching wallet...", || client.wallet(&args.account_id))?;
    print_wallet(&wallet);
    Ok(())
}

pub fn credit(ctx: &Context, args: &CreditArgs) -> Result<()> {
    let client = ctx.client()?;
    let wallet = ctx.call("Crediting wallet...", || {
        client.credit_wallet(&args.account_id, args.amount, &args.reason)
    })?;
    print_wallet(&wallet);
    Ok(())
}
