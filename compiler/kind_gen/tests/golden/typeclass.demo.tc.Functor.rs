// @generated by kindc. Do not edit.
// source: demo::tc::Functor
// module: demo::tc
// tag: typeclass

/// Resolve the registered [`Functor`] instance for the given type arguments.
///
/// `I` is the type the instance was registered as.
pub fn functor<F: 'static, I>() -> ::core::result::Result<::kind_rt::Instance<I>, ::kind_rt::ResolveError>
where
    I: Functor<F> + Send + Sync + 'static,
{
    ::kind_rt::instance(::kind_rt::InstanceDescriptor::reified::<(F,)>("demo::tc::Functor"))
}

/// Register a [`Functor`] instance for the given type arguments.
///
/// The first registration for a set of type arguments wins; returns
/// `false` if an instance was already registered.
pub fn register_functor<F: 'static, I>(instance: ::kind_rt::Instance<I>) -> bool
where
    I: Functor<F> + Send + Sync + 'static,
{
    ::kind_rt::register_instance(::kind_rt::InstanceDescriptor::reified::<(F,)>("demo::tc::Functor"), instance)
}
