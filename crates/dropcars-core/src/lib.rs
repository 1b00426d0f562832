pub mod api;
pub mod config;
pub mod consts;
pub mod error;
pub mod io;
pub mod session;
pub mod transform;
