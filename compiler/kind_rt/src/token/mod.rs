//! Type tokens: runtime stand-ins for statically known types.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A runtime token for a type.
///
/// Two tokens are equal iff they stand for the same type. The recorded name
/// is for messages only and never takes part in comparisons.
#[derive(Copy, Clone)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    /// The token for `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeToken {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeToken({})", self.name)
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// An ordered list of type arguments, written as a tuple type.
///
/// `(A, B)` yields `[token(A), token(B)]`; `()` yields nothing. Generated
/// lookup functions name their type parameters in declaration order, so the
/// tokens come out in declaration order too.
pub trait TypeArgs {
    fn tokens() -> Vec<TypeToken>;
}

macro_rules! impl_type_args {
    ($($param:ident),*) => {
        impl<$($param: 'static),*> TypeArgs for ($($param,)*) {
            fn tokens() -> Vec<TypeToken> {
                vec![$(TypeToken::of::<$param>()),*]
            }
        }
    };
}

impl_type_args!();
impl_type_args!(A);
impl_type_args!(A, B);
impl_type_args!(A, B, C);
impl_type_args!(A, B, C, D);
impl_type_args!(A, B, C, D, E);
