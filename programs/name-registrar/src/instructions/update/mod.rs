pub use set_resolver::*;
mod set_resolver;
