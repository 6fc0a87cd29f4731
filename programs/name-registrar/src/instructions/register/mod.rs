pub use register_name::*;
mod register_name;

pub use renew_name::*;
mod renew_name;

pub mod utils;
