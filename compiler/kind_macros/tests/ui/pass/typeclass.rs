//! `#[typeclass]` leaves the trait usable as written.

use kind_macros::typeclass;

#[typeclass]
pub trait Semigroup<T> {
    fn combine(&self, a: T, b: T) -> T;
}

#[typeclass]
pub trait Marker {}

#[typeclass]
pub struct Codec<T> {
    pub name: &'static str,
    pub encode: fn(&T) -> Vec<u8>,
}

struct Sum;

impl Semigroup<i32> for Sum {
    fn combine(&self, a: i32, b: i32) -> i32 {
        a + b
    }
}

impl Marker for Sum {}

fn main() {
    assert_eq!(Sum.combine(1, 2), 3);
    let codec: Codec<u8> = Codec {
        name: "byte",
        encode: |b| vec![*b],
    };
    assert_eq!((codec.encode)(&7), vec![7]);
    assert_eq!(codec.name, "byte");
}
