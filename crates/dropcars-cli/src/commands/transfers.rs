use anyhow::Result;
use clap::{Args, ValueEnum};
use dropcars_core::api::{TransferAction, TransferStatus};

use crate::context::Context;
use crate::summary::print_transfers;

#[derive(Clone, Copy, ValueEnum)]
pub enum TransferStatusArg {
    Pending,
    Approved,
    Rejected,
}

impl From<TransferStatusArg> for TransferStatus {
    fn from(arg: TransferStatusArg) -> Self {
        match arg {
            TransferStatusArg::Pending => TransferStatus::Pending,
            TransferStatusArg::Approved => TransferStatus::Approved,
            TransferStatusArg::Rejected => TransferStatus::Rejected,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ActionArg {
    Approve,
    Reject,
}

impl From<ActionArg> for TransferAction {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Approve => TransferAction::Approve,
            ActionArg::Reject => TransferAction::Reject,
        }
    }
}

#[derive(Args)]
pub struct ListArgs {
    /// Only transfers with this status
    #[arg(long, value_enum, default_value = "pending")]
    pub status: TransferStatusArg,
}

#[derive(Args)]
pub struct ProcessArgs {
    /// Transfer ID
    pub transfer_id: String,

    #[arg(value_enum)]
    pub action: ActionArg,

    /// Free-text note stored with the decision
    #[arg(long)]
    pub notes: Option<String>,
}

pub fn list(ctx: &Context, args: &ListArgs) -> Result<()> {
    let client = ctx.client()?;
    let transfers = ctx.call("Fetching transfers...", || {
        client.list_transfers(Some(args.status.into()))
    })?;
    print_transfers(&transfers);
    Ok(())
}

pub fn process(ctx: &Context, args: &ProcessArgs) -> Result<()> {
    let client = ctx.client()?;
    let transfer = ctx.call("Processing transfer...", || {
        client.process_transfer(&args.transfer_id, args.action.into(), args.notes.as_deref())
    })?;
    print_transfers(std::slice::from_ref(&transfer));
    Ok(())
}
