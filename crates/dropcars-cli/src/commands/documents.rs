use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use dropcars_core::api::{DocumentStatus, DocumentStatusUpdate};

use crate::context::Context;
use crate::summary::{print_document, print_documents};

#[derive(Clone, Copy, ValueEnum)]
pub enum VerdictArg {
    Verified,
    Invalid,
    Pending,
}

impl From<VerdictArg> for DocumentStatus {
    fn from(arg: VerdictArg) -> Self {
        match arg {
            VerdictArg::Verified => DocumentStatus::Verified,
            VerdictArg::Invalid => DocumentStatus::Invalid,
            VerdictArg::Pending => DocumentStatus::Pending,
        }
    }
}

#[derive(Args)]
pub struct ListArgs {
    /// Account ID
    pub account_id: String,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// Document ID
    pub document_id: String,

    /// Verification status to set
    #[arg(value_enum)]
    pub status: VerdictArg,

    /// Reason shown to the account holder (required for `invalid`)
    #[arg(long)]
    pub reason: Option<String>,
}

pub fn list(ctx: &Context, args: &ListArgs) -> Result<()> {
    let client = ctx.client()?;
    let documents = ctx.call("Fetching documents...", || client.list_documents(&args.account_id))?;
    print_documents(&documents);
    Ok(())
}

pub fn verify(ctx: &Context, args: &VerifyArgs) -> Result<()> {
    if matches!(args.status, VerdictArg::Invalid) && args.reason.is_none() {
        bail!("--reason is required when marking a document invalid");
    }
    let update = DocumentStatusUpdate {
        status: args.status.into(),
        reason: args.reason.clone(),
    };
    let client = ctx.client()?;
    let document = ctx.call("Updating document...", || {
        client.set_document_status(&args.document_id, &update)
    })?;
    print_document(&document);
    Ok(())
}
