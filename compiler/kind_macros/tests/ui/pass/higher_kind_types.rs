//! `#[higher_kind]` on every supported item kind.

use kind_macros::higher_kind;

#[higher_kind]
pub struct Wrapper<T>(pub T);

#[higher_kind]
#[derive(Debug, Clone)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

#[higher_kind]
pub union Raw<T: Copy> {
    pub value: T,
    pub bits: u64,
}

#[higher_kind]
pub trait Stream<T> {
    fn next(&mut self) -> Option<T>;
}

fn main() {
    let wrapped = Wrapper(3);
    let either: Either<i32, String> = Either::Left(wrapped.0);
    let _ = either.clone();
}
