pub use admin::*;
pub mod admin;

pub use register::*;
pub mod register;

pub use transfer::*;
pub mod transfer;

pub use update::*;
pub mod update;

pub mod utils;
