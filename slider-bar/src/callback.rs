//! Shared change-listener handle.

use std::{fmt, sync::Arc};

/// Stable, comparable callback handle for `Fn(T)`.
///
/// `CallbackWith` compares by identity (`Arc::ptr_eq`), so re-registering a
/// clone of the current listener is observable as "the same listener".
pub struct CallbackWith<T> {
    handler: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> CallbackWith<T> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) {
        (self.handler)(value)
    }
}

impl<T, F> From<F> for CallbackWith<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T> Clone for CallbackWith<T> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T> PartialEq for CallbackWith<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T> Eq for CallbackWith<T> {}

impl<T> fmt::Debug for CallbackWith<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackWith").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI32, Ordering};

    use super::*;

    #[test]
    fn compares_by_identity() {
        let a = CallbackWith::new(|_: i32| {});
        let b = CallbackWith::new(|_: i32| {});
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn forwards_the_argument() {
        let seen = Arc::new(AtomicI32::new(0));
        let callback: CallbackWith<i32> = {
            let seen = Arc::clone(&seen);
            CallbackWith::new(move |value: i32| seen.store(value, Ordering::SeqCst))
        };
        callback.call(55);
        assert_eq!(seen.load(Ordering::SeqCst), 55);
    }
}
