use anyhow::Result;
use clap::Args;

use crate::context::Context;
use crate::summary::print_orders;

#[derive(Args)]
pub struct OrdersArgs {
    /// Only orders with this status (passed through to the server)
    #[arg(long)]
    pub status: Option<String>,
}

pub fn run(ctx: &Context, args: &OrdersArgs) -> Result<()> {
    let client = ctx.client()?;
    let orders = ctx.call("Fetching orders...", || client.list_orders(args.status.as_deref()))?;
    print_orders(&orders);
    Ok(())
}
