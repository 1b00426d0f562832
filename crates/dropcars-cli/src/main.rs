mod commands;
mod context;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use context::Context;

#[derive(Parser)]
#[command(name = "dropcars", about = "Drop Cars admin console")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL from the config
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login(commands::auth::LoginArgs),
    /// Forget the stored session
    Logout,
    /// Show who the stored session belongs to
    Whoami,
    /// List accounts, filtered by type and status
    Accounts(commands::accounts::ListArgs),
    /// Change an account's status
    AccountStatus(commands::accounts::SetStatusArgs),
    /// List an account's documents
    Documents(commands::documents::ListArgs),
    /// Mark a document verified or invalid
    VerifyDocument(commands::documents::VerifyArgs),
    /// List orders
    Orders(commands::orders::OrdersArgs),
    /// List transfers
    Transfers(commands::transfers::ListArgs),
    /// Approve or reject a pending transfer
    ProcessTransfer(commands::transfers::ProcessArgs),
    /// Show an account's wallet
    Wallet(commands::wallets::ShowArgs),
    /// Credit an account's wallet
    CreditWallet(commands::wallets::CreditArgs),
    /// Set a new password for an account
    ResetPassword(commands::passwords::ResetArgs),
    /// Replay a pinch/pan gesture script and print the transform per step
    Gesture(commands::gesture::GestureArgs),
    /// Print or save the default config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Commands that never touch the API or config file.
    match &cli.command {
        Commands::Gesture(args) => return commands::gesture::run(args),
        Commands::Config(args) => return commands::config::run(args),
        _ => {}
    }

    let ctx = Context::load(cli.config.as_deref(), cli.api_url.as_deref())?;

    match &cli.command {
        Commands::Login(args) => commands::auth::login(&ctx, args),
        Commands::Logout => commands::auth::logout(&ctx),
        Commands::Whoami => commands::auth::whoami(&ctx),
        Commands::Accounts(args) => commands::accounts::list(&ctx, args),
        Commands::AccountStatus(args) => commands::accounts::set_status(&ctx, args),
        Commands::Documents(args) => commands::documents::list(&ctx, args),
        Commands::VerifyDocument(args) => commands::documents::verify(&ctx, args),
        Commands::Orders(args) => commands::orders::run(&ctx, args),
        Commands::Transfers(args) => commands::transfers::list(&ctx, args),
        Commands::ProcessTransfer(args) => commands::transfers::process(&ctx, args),
        Commands::Wallet(args) => commands::wallets::show(&ctx, args),
        Commands::CreditWallet(args) => commands::wallets::credit(&ctx, args),
        Commands::ResetPassword(args) => commands::passwords::reset(&ctx, args),
        Commands::Gesture(_) | Commands::Config(_) => Ok(()),
    }
}
