// @generated by kindc. Do not edit.
// source: demo::data::Box
// module: demo::data
// tag: higher_kind

/// Witness marker for [`Box`] in the kind encoding.
pub enum BoxHK {}

/// [`Box`] applied to all of its type parameters.
pub type BoxKind<T> = ::kind_rt::Kind<BoxHK, T>;

/// Narrowing accessor from [`BoxKind`] back to [`Box`].
#[allow(unsafe_code)]
pub trait BoxNarrow<T> {
    /// Recover the [`Box`] this value was wrapped from.
    ///
    /// # Safety
    ///
    /// The value must have been wrapped from a `Box<T>`. Nothing checks
    /// this in release builds.
    unsafe fn narrow(self) -> Box<T>;
}

#[allow(unsafe_code)]
impl<T: 'static> BoxNarrow<T> for BoxKind<T> {
    unsafe fn narrow(self) -> Box<T> {
        // SAFETY: forwarded to the caller.
        unsafe { self.narrow_unchecked::<Box<T>>() }
    }
}
