//! Control signals raised by partial functions.
//!
//! Every function value in this crate returns an [`Outcome`], which is either
//! the produced value or a [`Signal`]. There are three signal kinds:
//!
//! - [`Signal::NotApplicable`]: the partial function has no result for the
//!   given arguments. `apply_or_else`, `or_else`, `lift` and `run_with`
//!   intercept it; anything else lets it through.
//! - [`Signal::ShortCircuit`]: abort the enclosing traversal and hand a payload
//!   to whoever is listening. No combinator in this crate intercepts it; only
//!   the traversal that started the iteration does.
//! - [`Signal::Failure`]: a genuine error. Always propagated.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::function::{Function1, Signal};
//!
//! let reciprocal = Function1::from_fn(|value: i32| {
//!     if value == 0 {
//!         Err(Signal::NotApplicable)
//!     } else {
//!         Ok(1.0 / f64::from(value))
//!     }
//! });
//!
//! assert!(matches!(reciprocal.apply(0), Err(Signal::NotApplicable)));
//! assert_eq!(reciprocal.apply(4).ok(), Some(0.25));
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;

/// The result of applying a partial function.
pub type Outcome<T> = Result<T, Signal>;

/// A non-value result of applying a function.
#[derive(Debug)]
pub enum Signal {
    /// The function is not defined for the given arguments.
    NotApplicable,
    /// Abort the enclosing traversal, carrying a payload.
    ShortCircuit(ShortCircuit),
    /// A genuine failure unrelated to partiality or early exit.
    Failure(Failure),
}

impl Signal {
    /// Builds a [`Signal::ShortCircuit`] carrying `payload`.
    pub fn short_circuit<P>(payload: P) -> Self
    where
        P: Any + Send + Sync,
    {
        Self::ShortCircuit(ShortCircuit::new(payload))
    }

    /// Wraps an arbitrary error as a [`Signal::Failure`].
    pub fn failure<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Failure(Failure::new(error))
    }

    /// Returns `true` for [`Signal::NotApplicable`].
    #[inline]
    pub const fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable)
    }

    /// Returns `true` for [`Signal::ShortCircuit`].
    #[inline]
    pub const fn is_short_circuit(&self) -> bool {
        matches!(self, Self::ShortCircuit(_))
    }

    /// Returns `true` for [`Signal::Failure`].
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Extracts the short-circuit, giving the signal back unchanged otherwise.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` when this is not a [`Signal::ShortCircuit`].
    pub fn into_short_circuit(self) -> Result<ShortCircuit, Self> {
        match self {
            Self::ShortCircuit(short_circuit) => Ok(short_circuit),
            other => Err(other),
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApplicable => {
                write!(formatter, "function is not applicable to the given arguments")
            }
            Self::ShortCircuit(_) => write!(formatter, "short circuit raised outside a traversal"),
            Self::Failure(failure) => write!(formatter, "{failure}"),
        }
    }
}

impl Error for Signal {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Failure(failure) => Some(failure.as_error()),
            _ => None,
        }
    }
}

impl From<ShortCircuit> for Signal {
    fn from(short_circuit: ShortCircuit) -> Self {
        Self::ShortCircuit(short_circuit)
    }
}

impl From<Failure> for Signal {
    fn from(failure: Failure) -> Self {
        Self::Failure(failure)
    }
}

/// Early-exit signal carrying an opaque, caller-chosen payload.
///
/// The payload is recovered with [`ShortCircuit::payload`] or
/// [`ShortCircuit::into_payload`], naming the type it was raised with.
///
/// # Examples
///
/// ```rust
/// use fnkit::function::ShortCircuit;
///
/// let short_circuit = ShortCircuit::new(String::from("found"));
/// assert_eq!(short_circuit.payload::<String>().map(String::as_str), Some("found"));
/// assert!(short_circuit.payload::<i32>().is_none());
/// ```
pub struct ShortCircuit {
    payload: Box<dyn Any + Send + Sync>,
}

impl ShortCircuit {
    /// Creates a short-circuit carrying `payload`.
    pub fn new<P>(payload: P) -> Self
    where
        P: Any + Send + Sync,
    {
        Self {
            payload: Box::new(payload),
        }
    }

    /// Creates a short-circuit whose payload is `()`.
    pub fn empty() -> Self {
        Self::new(())
    }

    /// Returns the payload if it has type `P`.
    pub fn payload<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }

    /// Returns `true` if the payload has type `P`.
    pub fn carries<P: Any>(&self) -> bool {
        self.payload.is::<P>()
    }

    /// Takes the payload out if it has type `P`.
    ///
    /// # Errors
    ///
    /// Gives the short-circuit back untouched when the payload has another type.
    pub fn into_payload<P: Any>(self) -> Result<P, Self> {
        match self.payload.downcast::<P>() {
            Ok(payload) => Ok(*payload),
            Err(payload) => Err(Self { payload }),
        }
    }
}

impl fmt::Debug for ShortCircuit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ShortCircuit").finish_non_exhaustive()
    }
}

/// A genuine failure raised from inside a function body.
#[derive(Debug)]
pub struct Failure {
    source: Box<dyn Error + Send + Sync + 'static>,
}

impl Failure {
    /// Wraps `error`.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            source: Box::new(error),
        }
    }

    /// Builds a failure from a plain message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            source: message.into().into(),
        }
    }

    /// Returns the wrapped error.
    pub fn as_error(&self) -> &(dyn Error + 'static) {
        self.source.as_ref()
    }

    /// Attempts to view the wrapped error as `E`.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.source.downcast_ref::<E>()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.source)
    }
}

/// Returns `Err(Signal::NotApplicable)`.
///
/// Shorthand for the body of a partial function outside its domain.
///
/// ```rust
/// use fnkit::function::{not_applicable, Function1, Outcome};
///
/// let positive_only = Function1::from_fn(|value: i32| -> Outcome<i32> {
///     if value > 0 { Ok(value) } else { not_applicable() }
/// });
/// assert!(positive_only.apply(-1).is_err());
/// ```
#[inline]
pub const fn not_applicable<T>() -> Outcome<T> {
    Err(Signal::NotApplicable)
}

/// Returns `Err(Signal::ShortCircuit)` carrying `payload`.
#[inline]
pub fn break_out<T, P>(payload: P) -> Outcome<T>
where
    P: Any + Send + Sync,
{
    Err(Signal::short_circuit(payload))
}

/// Returns `Err(Signal::Failure)` wrapping `error`.
///
/// ```rust
/// use std::num::ParseIntError;
///
/// use fnkit::function::{failure, Function1, Outcome, Signal};
///
/// let parse = Function1::from_fn(|text: &'static str| -> Outcome<i32> {
///     text.parse::<i32>().or_else(failure)
/// });
/// match parse.apply("x") {
///     Err(Signal::Failure(failure)) => assert!(failure.downcast_ref::<ParseIntError>().is_some()),
///     other => panic!("expected a failure, got {other:?}"),
/// }
/// ```
#[inline]
pub fn failure<T, E>(error: E) -> Outcome<T>
where
    E: Error + Send + Sync + 'static,
{
    Err(Signal::failure(error))
}
