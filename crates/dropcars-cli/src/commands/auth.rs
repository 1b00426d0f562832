use anyhow::{bail, Context as _, Result};
use clap::Args;
use console::Term;
use dropcars_core::session::SessionStore;

use crate::context::Context;

#[derive(Args)]
pub struct LoginArgs {
    /// Operator username
    pub username: String,

    /// Password (prompted for when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

pub fn login(ctx: &Context, args: &LoginArgs) -> Result<()> {
    let password = match args.password {
        Some(ref p) => p.clone(),
        None => {
            let term = Term::stderr();
            term.write_str("Password: ")?;
            term.read_secure_line()?
        }
    };
    if password.is_empty() {
        bail!("Password must not be empty");
    }

    let mut client = ctx.anonymous_client()?;
    let session = ctx.call("Logging in...", || client.login(&args.username, &password))?;
    ctx.store.save(&session).with_context(|| {
        format!("Failed to save session to {}", ctx.store.path().display())
    })?;

    println!("Logged in as {}", session.username);
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<()> {
    ctx.store.clear().context("Failed to clear session")?;
    println!("Logged out");
    Ok(())
}

pub fn whoami(ctx: &Context) -> Result<()> {
    match ctx.session()? {
        Some(session) => println!(
            "{} ({} token) @ {}",
            session.username, session.token_type, ctx.config.api.base_url
        ),
        None => println!("Not logged in"),
    }
    Ok(())
}
