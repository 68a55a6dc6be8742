//! The uniform calling contract between the runtime and native code.

use std::fmt;
use std::sync::Arc;

use crate::error::CallError;
use crate::kind::Arity;
use crate::object::Object;

/// A value the runtime can invoke with a list of objects.
///
/// `Err` is reserved for calling-convention failures (see [`CallError`]). A
/// native function that fails on its own terms returns
/// `Ok(Object::Error(..))` instead.
///
/// Implementations hold no per-call state, so a callable may be invoked
/// concurrently whenever the function it wraps is reentrant.
pub trait Callable: Send + Sync {
    /// Invokes the callable.
    ///
    /// # Errors
    ///
    /// Returns a [`CallError`] if the arguments do not fit the signature.
    fn call(&self, args: &[Object]) -> Result<Object, CallError>;

    /// Number of arguments accepted.
    fn arity(&self) -> Arity {
        Arity::Variadic(0)
    }
}

/// Native function working directly on objects.
///
/// The arity is checked before `func` runs, so `func` may assume the
/// argument count fits.
#[derive(Clone)]
pub struct NativeFn<F> {
    arity: Arity,
    func: F,
}

impl<F> NativeFn<F>
where
    F: Fn(&[Object]) -> Result<Object, CallError> + Send + Sync,
{
    /// Creates a native function with the given arity.
    #[must_use]
    pub const fn new(arity: Arity, func: F) -> Self {
        Self { arity, func }
    }

    /// Creates a native function accepting any number of arguments.
    #[must_use]
    pub const fn variadic(func: F) -> Self {
        Self::new(Arity::Variadic(0), func)
    }
}

impl<F> Callable for NativeFn<F>
where
    F: Fn(&[Object]) -> Result<Object, CallError> + Send + Sync,
{
    fn call(&self, args: &[Object]) -> Result<Object, CallError> {
        if !self.arity.accepts(args.len()) {
            let expected = match self.arity {
                Arity::Exact(n) | Arity::Variadic(n) => n,
            };
            return Err(CallError::wrong_num_arguments(expected, args.len()));
        }
        (self.func)(args)
    }

    fn arity(&self) -> Arity {
        self.arity
    }
}

impl<F> fmt::Debug for NativeFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFn({})", self.arity)
    }
}

/// A named callable stored in the object system.
///
/// Constructed once at registration and immutable afterwards. Cloning shares
/// the underlying callable.
#[derive(Clone)]
pub struct Builtin {
    name: Arc<str>,
    func: Arc<dyn Callable>,
}

impl Builtin {
    /// Wraps `func` under `name`.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, func: impl Callable + 'static) -> Self {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Returns the registered name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if both builtins wrap the same callable.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl Callable for Builtin {
    fn call(&self, args: &[Object]) -> Result<Object, CallError> {
        self.func.call(args)
    }

    fn arity(&self) -> Arity {
        self.func.arity()
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}
