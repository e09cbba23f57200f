pub mod bigint;
pub mod parse;

mod cmp;
mod ops;

pub use bigint::BigInt;
pub use parse::ParseBigIntError;
