//! Dependency container - startup-scoped service registry
//!
//! Maps a type to a resolution strategy with one of two lifetimes: lazy
//! singleton (factory runs at most once, result cached) or factory
//! (factory runs on every resolution). Registration happens during process
//! startup; `KeelContext` resolves everything eagerly and drops the
//! container, so runtime code holds plain constructor-injected references.
//!
//! First-time resolution of a singleton is single-flight: concurrent
//! callers block on a per-registration lock and exactly one factory
//! invocation occurs. A factory that resolves the type it is itself
//! resolving (directly or through other registrations) fails fast with
//! `CircularDependency` instead of deadlocking.

use std::any::{type_name, Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, RwLock};

use crate::domain::result::{Error, Result};

type AnyValue = Box<dyn Any + Send + Sync>;
type BoxedFactory = Box<dyn Fn(&Container) -> Result<AnyValue> + Send + Sync>;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Lifetime {
    Singleton,
    Factory,
}

struct Registration {
    type_id: TypeId,
    type_name: &'static str,
    lifetime: Lifetime,
    factory: BoxedFactory,
    /// Singleton slot; factory registrations never touch it
    cell: OnceLock<AnyValue>,
    init: Mutex<()>,
}

static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(0);

thread_local! {
    /// Types currently being resolved on this thread, keyed by container.
    /// Re-entering one means a registration cycle.
    static RESOLVING: RefCell<Vec<(u64, TypeId)>> = RefCell::new(Vec::new());
}

/// Marks a (container, type) pair as in-flight on this thread for the
/// duration of a factory call
struct ResolveGuard {
    key: (u64, TypeId),
}

impl ResolveGuard {
    fn enter(key: (u64, TypeId), type_name: &'static str) -> Result<Self> {
        RESOLVING.with(|stack| {
            let mut stack = stack.borrow_mut();
            if stack.contains(&key) {
                return Err(Error::CircularDependency(type_name));
            }
            stack.push(key);
            Ok(Self { key })
        })
    }
}

impl Drop for ResolveGuard {
    fn drop(&mut self) {
        RESOLVING.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(pos) = stack.iter().rposition(|key| *key == self.key) {
                stack.remove(pos);
            }
        });
    }
}

/// Type-keyed service registry
pub struct Container {
    id: u64,
    registrations: RwLock<HashMap<TypeId, Arc<Registration>>>,
}

impl Container {
    pub fn new() -> Self {
        Self {
            id: NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed),
            registrations: RwLock::new(HashMap::new()),
        }
    }

    /// Register a lazy singleton
    ///
    /// The factory runs at most once, on first resolution; the result is
    /// cached for the container's lifetime.
    pub fn register_singleton<T, F>(&self, factory: F) -> Result<()>
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(&Container) -> Result<T> + Send + Sync + 'static,
    {
        self.register::<T, F>(Lifetime::Singleton, factory)
    }

    /// Register a factory: a fresh value on every resolution
    pub fn register_factory<T, F>(&self, factory: F) -> Result<()>
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(&Container) -> Result<T> + Send + Sync + 'static,
    {
        self.register::<T, F>(Lifetime::Factory, factory)
    }

    fn register<T, F>(&self, lifetime: Lifetime, factory: F) -> Result<()>
    where
        T: Clone + Send + Sync + 'static,
        F: Fn(&Container) -> Result<T> + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<T>();
        let mut registrations = self
            .registrations
            .write()
            .unwrap_or_else(|e| e.into_inner());

        if registrations.contains_key(&type_id) {
            return Err(Error::AlreadyRegistered(type_name::<T>()));
        }

        registrations.insert(
            type_id,
            Arc::new(Registration {
                type_id,
                type_name: type_name::<T>(),
                lifetime,
                factory: Box::new(move |container| {
                    factory(container).map(|value| Box::new(value) as AnyValue)
                }),
                cell: OnceLock::new(),
                init: Mutex::new(()),
            }),
        );
        Ok(())
    }

    pub fn is_registered<T: 'static>(&self) -> bool {
        self.registrations
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(&TypeId::of::<T>())
    }

    /// Resolve a registered type
    ///
    /// Fails with `NotRegistered` (no factory invoked) when the type was
    /// never registered, and with `CircularDependency` when resolution
    /// re-enters a type already being constructed on this thread.
    pub fn resolve<T: Clone + Send + Sync + 'static>(&self) -> Result<T> {
        let registration = self
            .registration_for(TypeId::of::<T>())
            .ok_or(Error::NotRegistered(type_name::<T>()))?;

        match registration.lifetime {
            Lifetime::Factory => {
                let _guard =
                    ResolveGuard::enter((self.id, registration.type_id), registration.type_name)?;
                let value = (registration.factory)(self)?;
                Self::downcast(value.as_ref(), registration.type_name)
            }
            Lifetime::Singleton => {
                self.init_singleton(&registration)?;
                match registration.cell.get() {
                    Some(value) => Self::downcast(value.as_ref(), registration.type_name),
                    None => Err(Error::config(format!(
                        "Singleton {} failed to initialize",
                        registration.type_name
                    ))),
                }
            }
        }
    }

    /// Eagerly construct every registered singleton
    ///
    /// Surfaces wiring errors at startup instead of on first use.
    pub fn ensure_initialized(&self) -> Result<()> {
        let registrations: Vec<Arc<Registration>> = {
            let map = self.registrations.read().unwrap_or_else(|e| e.into_inner());
            map.values().cloned().collect()
        };

        for registration in registrations {
            if registration.lifetime == Lifetime::Singleton {
                self.init_singleton(&registration)?;
            }
        }
        Ok(())
    }

    /// Fill a singleton's cell, running its factory at most once even
    /// under concurrent first resolution
    fn init_singleton(&self, registration: &Arc<Registration>) -> Result<()> {
        if registration.cell.get().is_some() {
            return Ok(());
        }

        // The cycle check must precede the init lock: a cyclic factory
        // re-entering here on the same thread would otherwise deadlock on
        // its own registration's lock.
        let _guard = ResolveGuard::enter((self.id, registration.type_id), registration.type_name)?;

        let _init = registration.init.lock().unwrap_or_else(|e| e.into_inner());
        if registration.cell.get().is_none() {
            let value = (registration.factory)(self)?;
            let _ = registration.cell.set(value);
        }
        Ok(())
    }

    fn registration_for(&self, type_id: TypeId) -> Option<Arc<Registration>> {
        // Clone the Arc out so no lock is held while factories run;
        // factories may themselves resolve from this container.
        self.registrations
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&type_id)
            .cloned()
    }

    fn downcast<T: Clone + 'static>(
        value: &(dyn Any + Send + Sync),
        type_name: &'static str,
    ) -> Result<T> {
        value.downcast_ref::<T>().cloned().ok_or_else(|| {
            Error::config(format!(
                "Container slot for {} holds an unexpected type",
                type_name
            ))
        })
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}
