//! The witness encoding stops at five type parameters.

use kind_macros::higher_kind;

#[higher_kind]
pub struct Wide<A, B, C, D, E, F>(A, B, C, D, E, F);

fn main() {}
