//! Typeclasses cannot take lifetime parameters.

use kind_macros::typeclass;

#[typeclass]
pub trait Parse<'a, T> {
    fn parse(&self, input: &'a str) -> T;
}

fn main() {}
