pub mod fs;
pub mod mapping;
pub mod path;
