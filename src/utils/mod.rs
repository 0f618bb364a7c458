mod errors;

pub use errors::Error;

pub type PathmapResult<T> = Result<T, Error>;
