//! Witness-encoded values.

use std::any::{type_name, Any};
use std::fmt;
use std::marker::PhantomData;

/// A value of type constructor `F` applied to `A`.
///
/// `F` is a witness marker: an uninhabited type standing for one
/// declaration. The value itself is stored type-erased; `Kind` only records
/// at the type level which declaration and argument it claims to hold.
///
/// Wrapping is always safe. Narrowing back is not, because nothing ties the
/// stored value to `F` except the code that produced it.
pub struct Kind<F, A> {
    value: Box<dyn Any>,
    value_type: &'static str,
    _witness: PhantomData<fn() -> (F, A)>,
}

/// Constructor `F` applied to two arguments.
pub type Kind2<F, A, B> = Kind<Kind<F, A>, B>;
/// Constructor `F` applied to three arguments.
pub type Kind3<F, A, B, C> = Kind<Kind2<F, A, B>, C>;
/// Constructor `F` applied to four arguments.
pub type Kind4<F, A, B, C, D> = Kind<Kind3<F, A, B, C>, D>;
/// Constructor `F` applied to five arguments.
pub type Kind5<F, A, B, C, D, E> = Kind<Kind4<F, A, B, C, D>, E>;

impl<F, A> Kind<F, A> {
    /// Erase a concrete value into the encoding.
    pub fn wrap<T: 'static>(value: T) -> Self {
        Kind {
            value: Box::new(value),
            value_type: type_name::<T>(),
            _witness: PhantomData,
        }
    }

    /// Recover the concrete value without checking its type.
    ///
    /// Debug builds assert the stored type and panic on a mismatch.
    ///
    /// # Safety
    ///
    /// The value must have been wrapped as exactly `T`. Narrowing to any
    /// other type is undefined behavior in release builds.
    pub unsafe fn narrow_unchecked<T: 'static>(self) -> T {
        debug_assert!(
            self.value.is::<T>(),
            "narrowing a `{}` to `{}`",
            self.value_type,
            type_name::<T>()
        );
        let raw = Box::into_raw(self.value).cast::<T>();
        // SAFETY: the caller guarantees the erased value is a `T`, so the
        // allocation has `T`'s layout.
        *unsafe { Box::from_raw(raw) }
    }

    /// Recover the concrete value, checking its type first.
    ///
    /// Returns the encoding unchanged if it does not hold a `T`.
    pub fn try_narrow<T: 'static>(self) -> Result<T, Self> {
        match self.value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Kind {
                value,
                value_type: self.value_type,
                _witness: PhantomData,
            }),
        }
    }

    /// Whether the stored value is a `T`.
    pub fn holds<T: 'static>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrow the stored value if it is a `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Type name of the stored value.
    pub fn value_type(&self) -> &'static str {
        self.value_type
    }
}

impl<F, A> fmt::Debug for Kind<F, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kind")
            .field("witness", &type_name::<F>())
            .field("argument", &type_name::<A>())
            .field("value", &self.value_type)
            .finish()
    }
}
