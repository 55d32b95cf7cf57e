// @generated by kindc. Do not edit.
// source: demo::algebra::Semigroup
// module: demo::algebra
// tag: typeclass

/// Resolve the registered [`Semigroup`] instance for the given type arguments.
///
/// `I` is the type the instance was registered as.
pub fn semigroup<T: 'static, I>() -> ::core::result::Result<::kind_rt::Instance<I>, ::kind_rt::ResolveError>
where
    I: Semigroup<T> + Send + Sync + 'static,
{
    ::kind_rt::instance(::kind_rt::InstanceDescriptor::reified::<(T,)>("demo::algebra::Semigroup"))
}

/// Register a [`Semigroup`] instance for the given type arguments.
///
/// The first registration for a set of type arguments wins; returns
/// `false` if an instance was already registered.
pub fn register_semigroup<T: 'static, I>(instance: ::kind_rt::Instance<I>) -> bool
where
    I: Semigroup<T> + Send + Sync + 'static,
{
    ::kind_rt::register_instance(::kind_rt::InstanceDescriptor::reified::<(T,)>("demo::algebra::Semigroup"), instance)
}
