//! Typeclass instance registry.
//!
//! Maps an [`InstanceDescriptor`] to a previously registered instance. The
//! first registration for a descriptor wins; later ones are ignored, so
//! every lookup for a descriptor sees the same value for the life of the
//! registry.

use std::any::{type_name, Any};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::InstanceDescriptor;

/// A shared, resolved instance.
///
/// Interface typeclasses resolve to `Instance<Impl>` for the implementing
/// type the instance was registered as, class typeclasses to
/// `Instance<Class<..>>`.
pub type Instance<I> = Arc<I>;

/// Errors resolving an instance.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("no instance registered for `{descriptor}`")]
    NotFound { descriptor: InstanceDescriptor },

    #[error("instance registered for `{descriptor}` is not a `{expected}`")]
    TypeMismatch {
        descriptor: InstanceDescriptor,
        expected: &'static str,
    },
}

/// Thread-safe registry of typeclass instances.
#[derive(Default)]
pub struct InstanceRegistry {
    // Values are `Instance<I>` for the `I` they were registered with.
    entries: RwLock<FxHashMap<InstanceDescriptor, Box<dyn Any + Send + Sync>>>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an instance unless one is already present.
    ///
    /// Returns `true` if this call inserted the instance.
    pub fn register<I>(&self, descriptor: InstanceDescriptor, instance: Instance<I>) -> bool
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let mut entries = self.entries.write();
        if entries.contains_key(&descriptor) {
            tracing::debug!(%descriptor, "instance already registered; keeping the first");
            return false;
        }
        tracing::debug!(%descriptor, instance = type_name::<I>(), "registering instance");
        entries.insert(descriptor, Box::new(instance));
        true
    }

    /// Resolve the instance registered for `descriptor`.
    pub fn resolve<I>(&self, descriptor: &InstanceDescriptor) -> Result<Instance<I>, ResolveError>
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let entries = self.entries.read();
        let Some(entry) = entries.get(descriptor) else {
            tracing::trace!(%descriptor, "instance not found");
            return Err(ResolveError::NotFound {
                descriptor: descriptor.clone(),
            });
        };
        entry
            .downcast_ref::<Instance<I>>()
            .cloned()
            .ok_or_else(|| ResolveError::TypeMismatch {
                descriptor: descriptor.clone(),
                expected: type_name::<I>(),
            })
    }

    pub fn contains(&self, descriptor: &InstanceDescriptor) -> bool {
        self.entries.read().contains_key(descriptor)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

static GLOBAL: OnceLock<InstanceRegistry> = OnceLock::new();

fn global() -> &'static InstanceRegistry {
    GLOBAL.get_or_init(InstanceRegistry::new)
}

/// Resolve an instance from the process-wide registry.
///
/// This is what generated lookup functions call.
pub fn instance<I>(descriptor: InstanceDescriptor) -> Result<Instance<I>, ResolveError>
where
    I: ?Sized + Send + Sync + 'static,
{
    global().resolve(&descriptor)
}

/// Register an instance in the process-wide registry.
///
/// Returns `true` if this call inserted the instance.
pub fn register_instance<I>(descriptor: InstanceDescriptor, instance: Instance<I>) -> bool
where
    I: ?Sized + Send + Sync + 'static,
{
    global().register(descriptor, instance)
}
