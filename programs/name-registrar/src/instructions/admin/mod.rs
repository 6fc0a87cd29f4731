pub use initialize::*;
mod initialize;

pub use update_fee::*;
mod update_fee;

pub use update_authority::*;
mod update_authority;
