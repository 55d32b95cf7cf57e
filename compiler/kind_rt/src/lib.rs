//! Kind Runtime (`kind_rt`)
//!
//! Runtime support for code generated by `kindc`.
//!
//! # Witness Encoding
//!
//! Rust cannot abstract over a type constructor such as `Option` itself,
//! only over `Option<T>` for some `T`. The kind encoding works around this
//! by representing "constructor `F` applied to `A`" as [`Kind<F, A>`],
//! where `F` is an uninhabited *witness marker* generated once per
//! declaration. Code can then be generic over `F`.
//!
//! Getting the concrete value back is an explicitly unsafe narrowing cast
//! ([`Kind::narrow_unchecked`]). Generated accessors wrap it once per
//! declaration.
//!
//! # Instance Lookup
//!
//! Typeclass instances are registered and resolved by
//! [`InstanceDescriptor`]: a declaration identity plus the ordered
//! [`TypeToken`]s of its type arguments. Generated lookup functions build the
//! descriptor and call [`instance`].

mod descriptor;
mod kind;
mod registry;
mod token;

pub use descriptor::InstanceDescriptor;
pub use kind::{Kind, Kind2, Kind3, Kind4, Kind5};
pub use registry::{instance, register_instance, Instance, InstanceRegistry, ResolveError};
pub use token::{TypeArgs, TypeToken};
