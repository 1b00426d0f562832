mod admin;
mod dispatch;
mod image;
mod state;

pub use dispatch::spawn_worker;
