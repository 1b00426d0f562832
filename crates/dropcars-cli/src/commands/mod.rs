pub mod accounts;
pub mod auth;
pub mod config;
pub mod documents;
pub mod gesture;
pub mod orders;
pub mod passwords;
pub mod transfers;
pub mod wallets;
