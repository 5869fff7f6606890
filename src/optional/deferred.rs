//! Lazily evaluated views over an [`Optional`].
//!
//! Each method of [`Deferred`] mirrors an [`Optional`] operation but returns a
//! [`Function0`] instead of running immediately. Nothing is evaluated until
//! the returned function is applied, and it is re-evaluated on every
//! application.

use super::container::Optional;
use super::error::ElementMissing;
use crate::function::{Function0, Outcome, PartialFn0, PartialFn1};

/// Thunk-producing counterpart of an [`Optional`].
///
/// # Examples
///
/// ```rust
/// use fnkit::optional::Optional;
///
/// let deferred = Optional::some(20).deferred();
/// let doubled = deferred.map(|value: i32| Ok(value * 2));
///
/// assert_eq!(doubled.apply().ok(), Some(Optional::some(40)));
/// assert_eq!(deferred.is_defined().apply().ok(), Some(true));
/// ```
#[derive(Debug, Clone)]
pub struct Deferred<T> {
    optional: Optional<T>,
}

impl<T> Deferred<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub(crate) const fn new(optional: Optional<T>) -> Self {
        Self { optional }
    }

    /// Thunk for [`Optional::is_defined`].
    pub fn is_defined(&self) -> Function0<bool> {
        let defined = self.optional.is_defined();
        Function0::total(move || defined)
    }

    /// Thunk for [`Optional::not_defined`].
    pub fn not_defined(&self) -> Function0<bool> {
        let not_defined = self.optional.not_defined();
        Function0::total(move || not_defined)
    }

    /// Thunk for [`Optional::get`].
    ///
    /// Applying it on an absent container signals a failure carrying
    /// [`ElementMissing`].
    pub fn get(&self) -> Function0<T> {
        let optional = self.optional.clone();
        Function0::from_fn(move || match &optional {
            Optional::Present(value) => Ok(value.clone()),
            Optional::Absent => Err(ElementMissing {
                operation: "Deferred::get",
            }
            .into()),
        })
    }

    /// Thunk for [`Optional::map`].
    pub fn map<B, F>(&self, mapper: F) -> Function0<Optional<B>>
    where
        B: 'static,
        F: PartialFn1<T, B> + Send + Sync + 'static,
    {
        let optional = self.optional.clone();
        let mapper = mapper.adapt();
        Function0::from_fn(move || optional.clone().map(mapper.clone()))
    }

    /// Thunk for [`Optional::flat_map`].
    pub fn flat_map<B, F>(&self, mapper: F) -> Function0<Optional<B>>
    where
        B: 'static,
        F: PartialFn1<T, Optional<B>> + Send + Sync + 'static,
    {
        let optional = self.optional.clone();
        let mapper = mapper.adapt();
        Function0::from_fn(move || optional.clone().flat_map(mapper.clone()))
    }

    /// Thunk for [`Optional::filter`].
    pub fn filter<F>(&self, predicate: F) -> Function0<Optional<T>>
    where
        F: PartialFn1<T, bool> + Send + Sync + 'static,
    {
        let optional = self.optional.clone();
        let predicate = predicate.adapt();
        Function0::from_fn(move || optional.clone().filter(predicate.clone()))
    }

    /// Thunk for [`Optional::or_else`].
    pub fn or_else(&self, other: T) -> Function0<T> {
        let optional = self.optional.clone();
        Function0::total(move || optional.clone().or_else(other.clone()))
    }

    /// Thunk for [`Optional::or_else_get`]. `producer` runs only on
    /// application of an absent container.
    pub fn or_else_get<F>(&self, producer: F) -> Function0<T>
    where
        F: PartialFn0<T> + Send + Sync + 'static,
    {
        let optional = self.optional.clone();
        let producer = producer.adapt();
        Function0::from_fn(move || optional.clone().or_else_get(producer.clone()))
    }

    /// Thunk for [`Optional::run_with`].
    pub fn run_with<X, F>(&self, consumer: F) -> Function0<()>
    where
        X: 'static,
        F: PartialFn1<T, X> + Send + Sync + 'static,
    {
        let optional = self.optional.clone();
        let consumer = consumer.adapt();
        Function0::from_fn(move || -> Outcome<()> { optional.clone().run_with(consumer.clone()) })
    }
}
