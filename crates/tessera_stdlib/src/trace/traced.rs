//! A callable wrapper that reports its calls to a shared tracer.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use tessera_foundation::{Arity, CallError, Callable, Object};

use super::Tracer;

/// A tracer shared by every traced builtin of a catalogue.
pub type SharedTracer = Arc<Mutex<Tracer>>;

/// Wraps a callable, recording a call event before and a result event after
/// each invocation.
///
/// Results pass through unchanged. The tracer lock is never held while the
/// wrapped callable runs, so a traced builtin may call other traced builtins.
pub struct Traced<C> {
    name: Arc<str>,
    inner: C,
    tracer: SharedTracer,
}

impl<C: Callable> Traced<C> {
    /// Wraps `inner`, recording events under `name`.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, inner: C, tracer: SharedTracer) -> Self {
        Self {
            name: name.into(),
            inner,
            tracer,
        }
    }

    /// Returns the wrapped callable.
    #[must_use]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    fn with_tracer(&self, record: impl FnOnce(&mut Tracer)) {
        let mut tracer = self.tracer.lock().unwrap_or_else(PoisonError::into_inner);
        if tracer.is_enabled() {
            record(&mut tracer);
        }
    }
}

impl<C: Callable> Callable for Traced<C> {
    fn call(&self, args: &[Object]) -> Result<Object, CallError> {
        self.with_tracer(|t| t.call(Arc::clone(&self.name), args.len()));

        let result = self.inner.call(args);

        match &result {
            Ok(object) => self.with_tracer(|t| t.returned(Arc::clone(&self.name), object)),
            Err(reason) => self.with_tracer(|t| t.rejected(Arc::clone(&self.name), reason)),
        }
        result
    }

    fn arity(&self) -> Arity {
        self.inner.arity()
    }
}

impl<C> fmt::Debug for Traced<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Traced({})", self.name)
    }
}
