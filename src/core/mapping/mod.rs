pub mod list;
mod remap;
pub mod types;

pub use list::*;
pub use types::*;
