//! Module registration.
//!
//! A module is an [`ImmutableMap`] from member name to object. Functions are
//! stored as [`Builtin`] objects named `module.function`; constants are
//! stored as-is.

use std::sync::Arc;

use tessera_foundation::{Builtin, Callable, ImmutableMap, Object};

use crate::config::StdlibConfig;
use crate::modules::BUILTIN_MODULES;
use crate::trace::{SharedTracer, Traced, Tracer};

// =============================================================================
// Module Builder
// =============================================================================

/// Collects the members of one module.
///
/// ```
/// use tessera_foundation::Object;
/// use tessera_stdlib::adapters::func_ai_ri;
/// use tessera_stdlib::ModuleBuilder;
///
/// let module = ModuleBuilder::new("demo")
///     .function("double", func_ai_ri(|n| n * 2))
///     .constant("answer", 42i64)
///     .build();
///
/// assert_eq!(module.get("answer"), Some(&Object::Int(42)));
/// ```
#[derive(Debug)]
pub struct ModuleBuilder {
    name: String,
    members: Vec<(String, Object)>,
    tracer: Option<SharedTracer>,
}

impl ModuleBuilder {
    /// Starts an empty module.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            tracer: None,
        }
    }

    /// Wraps every function registered afterwards in [`Traced`].
    #[must_use]
    pub fn traced(mut self, tracer: SharedTracer) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Returns the module name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a function under `name`.
    ///
    /// A later registration under the same name replaces an earlier one.
    #[must_use]
    pub fn function(mut self, name: &str, func: impl Callable + 'static) -> Self {
        let qualified: Arc<str> = format!("{}.{name}", self.name).into();
        let builtin = match &self.tracer {
            Some(tracer) => Builtin::new(
                Arc::clone(&qualified),
                Traced::new(Arc::clone(&qualified), func, Arc::clone(tracer)),
            ),
            None => Builtin::new(qualified, func),
        };
        self.members.push((name.to_string(), Object::Builtin(builtin)));
        self
    }

    /// Registers a constant under `name`.
    #[must_use]
    pub fn constant(mut self, name: &str, value: impl Into<Object>) -> Self {
        self.members.push((name.to_string(), value.into()));
        self
    }

    /// Finishes the module.
    #[must_use]
    pub fn build(self) -> ImmutableMap {
        self.members.into_iter().collect()
    }
}

// =============================================================================
// Standard Library Catalogue
// =============================================================================

/// The built-in modules, selected by a [`StdlibConfig`].
///
/// Every registered function shares one tracer.
#[derive(Debug)]
pub struct Stdlib {
    modules: ImmutableMap,
    tracer: SharedTracer,
}

impl Stdlib {
    /// Registers every built-in module without tracing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&StdlibConfig::default())
    }

    /// Registers the modules `config` selects.
    ///
    /// Names in the allow-list that match no built-in module are ignored.
    #[must_use]
    pub fn with_config(config: &StdlibConfig) -> Self {
        let tracer = Tracer::new(config.trace.clone()).shared();

        let modules = BUILTIN_MODULES
            .iter()
            .filter(|(name, _)| config.includes(name))
            .map(|(name, register)| {
                let mut builder = ModuleBuilder::new(*name);
                if config.trace.enabled {
                    builder = builder.traced(Arc::clone(&tracer));
                }
                (*name, Object::ImmutableMap(register(builder).build()))
            })
            .collect();

        Self { modules, tracer }
    }

    /// Returns the named module.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<ImmutableMap> {
        self.modules.get(name).and_then(Object::as_map).cloned()
    }

    /// Returns the registered module names in sorted order.
    #[must_use]
    pub fn module_names(&self) -> Vec<&str> {
        self.modules.keys().collect()
    }

    /// Returns every registered module, keyed by name.
    #[must_use]
    pub fn modules(&self) -> ImmutableMap {
        self.modules.clone()
    }

    /// Returns the tracer shared by every registered function.
    #[must_use]
    pub fn tracer(&self) -> &SharedTracer {
        &self.tracer
    }
}

impl Default for Stdlib {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
