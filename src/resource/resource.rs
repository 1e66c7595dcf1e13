use std::error::Error;

/// A unit of external state that has to be released exactly once after being acquired.
///
/// Release consumes the resource, so a released resource can't be used or released again.
/// Implementors shouldn't release in [`Drop`]: that's the job of
/// [`Owner`](crate::scope::Owner), and a resource that releases itself would be released twice.
pub trait Resource: Sized {
    /// A short, human readable name for the kind of resource, used in logs and by observers.
    const KIND: &'static str;

    /// Whatever is needed to acquire the resource.
    type Params;
    type AcquireError: Error;
    type ReleaseError: Error;

    /// Acquires the resource. There's no requirement for this to be retryable or idempotent.
    ///
    /// # Errors
    /// Returns an error if the resource couldn't be acquired, in which case there is nothing to
    /// release.
    fn acquire(params: Self::Params) -> Result<Self, Self::AcquireError>;

    /// Releases the resource.
    ///
    /// # Errors
    /// Returns an error if the release didn't go cleanly. The resource counts as released
    /// regardless, it can't be retried.
    fn release(self) -> Result<(), Self::ReleaseError>;
}
