use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut};
use std::thread;

use super::{Exit, Observer, Silent};
use crate::resource::Resource;

/// A scope-bound owner of exactly one [`Resource`].
///
/// The resource is acquired when the Owner is created and released when it's dropped. Dropping
/// happens on every way out of a scope: the end of the block, an early `return`, a `?`, or
/// unwinding from a signaled error. Release happens at most once, and never before acquisition
/// has completed.
///
/// While the Owner is alive, the resource is used through [`Deref`] and [`DerefMut`].
///
/// # Lifecycle
/// An Owner only ever exists in the acquired state. [`Owner::acquire`] either returns an Owner
/// holding a resource or an error with nothing to release. The released state is reached exactly
/// once, via [`Drop`] or [`Owner::release`]. [`Owner::into_inner`] leaves the lifecycle
/// altogether by handing the raw resource back.
///
/// # Examples
/// ```
/// # use scoped_resource::resource::HeapCell;
/// # use scoped_resource::scope::{Event, Exit, Journal, Owner};
/// let journal = Journal::new();
/// {
///     let mut cell = Owner::<HeapCell<u32>, _>::acquire_observed(0, &journal).unwrap();
///     cell.set(42);
///     assert_eq!(cell.get(), 42);
/// }
/// assert_eq!(journal.events(), [
///     Event::Acquired("heap cell"),
///     Event::Released("heap cell", Exit::Scope),
/// ]);
/// ```
pub struct Owner<R: Resource, O: Observer = Silent> {
    // Some for the entire life of the Owner, taken only on the way out.
    resource: Option<R>,
    observer: O,
}

impl<R: Resource> Owner<R> {
    /// Acquires a new resource with the provided parameters and returns an Owner for it.
    ///
    /// # Errors
    /// Returns the resource's own acquisition error. In this case nothing was acquired and
    /// nothing will be released.
    pub fn acquire(params: R::Params) -> Result<Owner<R>, R::AcquireError> {
        Owner::acquire_observed(params, Silent)
    }
}

impl<R: Resource, O: Observer> Owner<R, O> {
    /// Acquires a new resource, just like [`Owner::acquire`], reporting the acquisition and
    /// eventual release to `observer`.
    ///
    /// # Errors
    /// Returns the resource's own acquisition error, in which case `observer` hears nothing.
    pub fn acquire_observed(params: R::Params, observer: O) -> Result<Owner<R, O>, R::AcquireError> {
        let resource = R::acquire(params)?;
        tracing::trace!(kind = R::KIND, "acquired resource");

        // Build the Owner before notifying, if the observer panics the resource is still released.
        let owner = Owner {
            resource: Some(resource),
            observer,
        };
        owner.observer.acquired(R::KIND);
        Ok(owner)
    }

    /// Releases the resource now rather than at the end of the scope, handing any release error
    /// to the caller instead of panicking.
    ///
    /// # Errors
    /// Returns the resource's release error. The resource is considered released either way.
    pub fn release(mut self) -> Result<(), R::ReleaseError> {
        self.release_with(Exit::Explicit)
    }

    /// Gives up ownership of the resource without releasing it. The caller becomes responsible
    /// for calling [`Resource::release`].
    pub fn into_inner(mut self) -> R {
        tracing::trace!(kind = R::KIND, "resource disarmed");
        // SAFETY: The resource is only taken by methods consuming self, so it is still present.
        unsafe { self.resource.take().unwrap_unchecked() }
    }

    pub const fn observer(&self) -> &O {
        &self.observer
    }

    fn release_with(&mut self, exit: Exit) -> Result<(), R::ReleaseError> {
        let Some(resource) = self.resource.take() else {
            return Ok(());
        };

        let result = resource.release();
        match &result {
            Ok(()) => tracing::debug!(kind = R::KIND, %exit, "released resource"),
            Err(error) => tracing::warn!(kind = R::KIND, %exit, %error, "release failed"),
        }
        self.observer.released(R::KIND, exit);
        result
    }
}

impl<R: Resource, O: Observer> Deref for Owner<R, O> {
    type Target = R;

    fn deref(&self) -> &Self::Target {
        // SAFETY: The resource is only taken by methods consuming self, so it is still present.
        unsafe { self.resource.as_ref().unwrap_unchecked() }
    }
}

impl<R: Resource, O: Observer> DerefMut for Owner<R, O> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The resource is only taken by methods consuming self, so it is still present.
        unsafe { self.resource.as_mut().unwrap_unchecked() }
    }
}

impl<R: Resource, O: Observer> Drop for Owner<R, O> {
    fn drop(&mut self) {
        let unwinding = thread::panicking();
        let exit = if unwinding { Exit::Unwind } else { Exit::Scope };

        if let Err(error) = self.release_with(exit) {
            if unwinding {
                // Panicking again would abort the process along with every other pending release.
                tracing::error!(kind = R::KIND, %error, "error while releasing during unwind");
            } else {
                panic!("error while releasing {}: {}", R::KIND, error);
            }
        }
    }
}

impl<R: Resource + Debug, O: Observer> Debug for Owner<R, O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Owner").field(&**self).finish()
    }
}
