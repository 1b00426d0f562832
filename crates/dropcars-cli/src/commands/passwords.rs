use anyhow::Result;
use clap::Args;
use console::Term;

use crate::context::Context;

#[derive(Args)]
pub struct ResetArgs {
    /// Account ID
    pub account_id: String,

    /// New password (prompted for when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

pub fn reset(ctx: &Context, args: &ResetArgs) -> Result<()> {
    let password = match args.password {
        Some(ref p) => p.clone(),
        None => {
            let term = Term::stderr();
            term.write_str("New password: ")?;
            term.read_secure_line()?
        }
    };

    let client = ctx.client()?;
    ctx.call("Resetting password...", || {
        client.reset_password(&args.account_id, &password)
    })?;
    println!("Password reset for {}", args.account_id);
    Ok(())
}
