//! Individual generators and combinators.
//!
//! Every function here builds a [`fuzz_core::Thunk`]; nothing is sampled
//! until the thunk is run against a [`fuzz_core::Source`].

pub mod array;
pub mod big_int;
pub mod boolean;
pub mod date;
pub mod logic;
pub mod number;
pub mod object;
pub mod sequence;
pub mod set;
pub mod string;
pub mod unicode;

mod subset;
