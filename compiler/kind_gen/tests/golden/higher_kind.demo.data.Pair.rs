// @generated by kindc. Do not edit.
// source: demo::data::Pair
// module: demo::data
// tag: higher_kind

/// Witness marker for [`Pair`] in the kind encoding.
pub enum PairHK {}

/// [`Pair`] applied to all of its type parameters.
pub type PairKind<A, B> = ::kind_rt::Kind2<PairHK, A, B>;

/// [`Pair`] partially applied to `A`.
pub type PairPartialKind1<A> = ::kind_rt::Kind<PairHK, A>;

/// Narrowing accessor from [`PairKind`] back to [`Pair`].
#[allow(unsafe_code)]
pub trait PairNarrow<A: Clone, B> {
    /// Recover the [`Pair`] this value was wrapped from.
    ///
    /// # Safety
    ///
    /// The value must have been wrapped from a `Pair<A, B>`. Nothing checks
    /// this in release builds.
    unsafe fn narrow(self) -> Pair<A, B>;
}

#[allow(unsafe_code)]
impl<A: Clone + 'static, B: 'static> PairNarrow<A, B> for PairKind<A, B> {
    unsafe fn narrow(self) -> Pair<A, B> {
        // SAFETY: forwarded to the caller.
        unsafe { self.narrow_unchecked::<Pair<A, B>>() }
    }
}
