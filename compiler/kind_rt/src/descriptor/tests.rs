use super::*;
use std::collections::HashSet;

const SEMIGROUP: &str = "demo::algebra::Semigroup";

#[test]
fn reified_equals_explicit() {
    let reified = InstanceDescriptor::reified::<(i32,)>(SEMIGROUP);
    let explicit = InstanceDescriptor::new(SEMIGROUP, vec![TypeToken::of::<i32>()]);
    assert_eq!(reified, explicit);

    let mut set = HashSet::new();
    set.insert(reified);
    assert!(set.contains(&explicit));
}

#[test]
fn order_matters() {
    let ab = InstanceDescriptor::reified::<(u8, String)>("demo::Both");
    let ba = InstanceDescriptor::reified::<(String, u8)>("demo::Both");
    assert_ne!(ab, ba);
}

#[test]
fn identity_matters() {
    assert_ne!(
        InstanceDescriptor::reified::<(i32,)>("demo::Monoid"),
        InstanceDescriptor::reified::<(i32,)>(SEMIGROUP)
    );
}

#[test]
fn display() {
    assert_eq!(
        InstanceDescriptor::reified::<(u8, bool)>("demo::Both").to_string(),
        "demo::Both<u8, bool>"
    );
    assert_eq!(
        InstanceDescriptor::reified::<()>("demo::Unit").to_string(),
        "demo::Unit"
    );
}

#[test]
fn accessors() {
    let d = InstanceDescriptor::reified::<(u8, bool)>("demo::Both");
    assert_eq!(d.identity(), "demo::Both");
    assert_eq!(d.arity(), 2);
    assert_eq!(d.arguments()[1], TypeToken::of::<bool>());
}
