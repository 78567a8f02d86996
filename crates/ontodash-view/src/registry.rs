//! Renderer registry
//!
//! Provides [`RendererRegistry`], the `(namespace, identifier) → renderer`
//! table the resolver looks tab renderers up in. Entries initialise lazily,
//! at most once per registry; a failed initialisation is kept and reported
//! on every later lookup.

use crate::error::LoadError;
use crate::renderer::{ViewModule, ViewRenderer};
use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;

/// Lookup namespace
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Shared namespace used by projects without a renderer prefix
    Root,
    /// Profile namespace named by a project's `module_prefix`
    Module(String),
}

impl Namespace {
    /// Profile namespace
    #[inline]
    #[must_use]
    pub fn module(prefix: impl Into<String>) -> Self {
        Self::Module(prefix.into())
    }

    /// Qualified key of an identifier (`prefix.ident`, or `ident` at root)
    #[must_use]
    pub fn qualify(&self, ident: &str) -> String {
        match self {
            Self::Root => ident.to_string(),
            Self::Module(prefix) => format!("{prefix}.{ident}"),
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("<root>"),
            Self::Module(prefix) => f.write_str(prefix),
        }
    }
}

type Loader = Box<dyn Fn() -> Result<ViewModule, LoadError> + Send + Sync>;

struct Entry {
    loader: Loader,
    module: OnceCell<Result<ViewModule, LoadError>>,
}

impl Entry {
    fn new(loader: Loader) -> Self {
        Self {
            loader,
            module: OnceCell::new(),
        }
    }

    fn get(&self, key: &str) -> &Result<ViewModule, LoadError> {
        self.module.get_or_init(|| {
            let loaded = (self.loader)();
            match &loaded {
                Ok(module) => tracing::debug!(key, module = module.name(), "initialised renderer"),
                Err(err) => tracing::warn!(key, error = %err, "renderer initialisation failed"),
            }
            loaded
        })
    }
}

/// Registry of tab renderers
///
/// `Send + Sync`: one registry serves every session of the process.
#[derive(Default)]
pub struct RendererRegistry {
    entries: IndexMap<(Namespace, String), Entry>,
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("entry_count", &self.entries.len())
            .field("keys", &self.keys())
            .finish()
    }
}

impl RendererRegistry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create registry with the built-in renderers
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        crate::profiles::register_defaults(&mut registry);
        registry
    }

    /// Register a renderer (replaces an existing entry)
    pub fn register(
        &mut self,
        namespace: Namespace,
        ident: impl Into<String>,
        renderer: impl ViewRenderer + 'static,
    ) {
        let ident = ident.into();
        let module = ViewModule::new(namespace.qualify(&ident), renderer);
        self.register_module(namespace, ident, module);
    }

    /// Register a ready-made entry, which may lack a render capability
    pub fn register_module(
        &mut self,
        namespace: Namespace,
        ident: impl Into<String>,
        module: ViewModule,
    ) {
        self.register_lazy(namespace, ident, move || Ok(module.clone()));
    }

    /// Register an entry built on first lookup
    pub fn register_lazy<F>(&mut self, namespace: Namespace, ident: impl Into<String>, loader: F)
    where
        F: Fn() -> Result<ViewModule, LoadError> + Send + Sync + 'static,
    {
        self.entries
            .insert((namespace, ident.into()), Entry::new(Box::new(loader)));
    }

    /// Look up the render capability of an entry
    ///
    /// # Errors
    /// - [`LoadError::NotFound`] if nothing is registered
    /// - [`LoadError::NoRender`] if the entry has no render capability
    /// - the cached [`LoadError`] if initialisation failed
    pub fn lookup(
        &self,
        namespace: &Namespace,
        ident: &str,
    ) -> Result<Arc<dyn ViewRenderer>, LoadError> {
        let key = namespace.qualify(ident);
        let entry = self
            .entries
            .get(&(namespace.clone(), ident.to_string()))
            .ok_or_else(|| LoadError::NotFound(key.clone()))?;

        match entry.get(&key) {
            Ok(module) => module
                .renderer()
                .cloned()
                .ok_or(LoadError::NoRender(key)),
            Err(err) => Err(err.clone()),
        }
    }

    /// Check if an entry is registered (initialised or not)
    #[inline]
    #[must_use]
    pub fn contains(&self, namespace: &Namespace, ident: &str) -> bool {
        self.entries
            .contains_key(&(namespace.clone(), ident.to_string()))
    }

    /// Qualified keys in registration order
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries
            .keys()
            .map(|(namespace, ident)| namespace.qualify(ident))
            .collect()
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::renderer::RenderEnv;
    use ontodash_project::ProjectDescriptor;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Noop;

    impl ViewRenderer for Noop {
        fn render(&self, _: &ProjectDescriptor, _: &mut RenderEnv<'_>) -> Result<(), RenderError> {
            Ok(())
        }
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn registry_is_send_sync() {
        assert_send_sync::<RendererRegistry>();
    }

    #[test]
    fn qualify_keys() {
        assert_eq!(Namespace::Root.qualify("mission"), "mission");
        assert_eq!(Namespace::module("catapult").qualify("mission"), "catapult.mission");
    }

    #[test]
    fn lookup_registered_renderer() {
        let mut registry = RendererRegistry::new();
        registry.register(Namespace::module("catapult"), "mission", Noop);

        assert!(registry.lookup(&Namespace::module("catapult"), "mission").is_ok());
        assert_eq!(
            registry.lookup(&Namespace::Root, "mission").err(),
            Some(LoadError::NotFound("mission".to_string()))
        );
    }

    #[test]
    fn entry_without_render_is_reported() {
        let mut registry = RendererRegistry::new();
        registry.register_module(Namespace::Root, "notes", ViewModule::without_render("notes"));

        assert_eq!(
            registry.lookup(&Namespace::Root, "notes").err(),
            Some(LoadError::NoRender("notes".to_string()))
        );
    }

    #[test]
    fn lazy_entries_initialise_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut registry = RendererRegistry::new();
        registry.register_lazy(Namespace::Root, "mission", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(ViewModule::new("mission", Noop))
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        for _ in 0..3 {
            assert!(registry.lookup(&Namespace::Root, "mission").is_ok());
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_initialisation_is_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut registry = RendererRegistry::new();
        registry.register_lazy(Namespace::Root, "broken", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(LoadError::failed("broken", "missing dependency"))
        });

        for _ in 0..2 {
            let err = registry.lookup(&Namespace::Root, "broken").err();
            assert!(matches!(err, Some(LoadError::Failed { .. })));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn defaults_cover_catapult_and_root() {
        let registry = RendererRegistry::with_defaults();
        let catapult = Namespace::module("catapult");

        for ident in [
            "architecture",
            "mission",
            "functional_architecture",
            "system_logical_architecture",
            "requirements",
        ] {
            assert!(registry.contains(&catapult, ident), "missing catapult.{ident}");
        }
        assert!(registry.contains(&Namespace::Root, "requirements"));
        assert!(!registry.contains(&Namespace::Root, "architecture"));
    }
}
