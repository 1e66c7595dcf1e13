use std::alloc::{self, Layout};
use std::convert::Infallible;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use super::Resource;

/// A single heap-allocated value of `T`. The simplest managed resource there is: memory that has
/// to be handed back to the allocator.
///
/// A HeapCell doesn't free itself. Dropping one without calling [`Resource::release`] leaks both
/// the allocation and the value inside it, which is exactly the hazard that
/// [`Owner`](crate::scope::Owner) exists to remove.
///
/// # Examples
/// ```
/// # use scoped_resource::resource::{HeapCell, Resource};
/// let Ok(mut cell) = HeapCell::acquire(0_u32);
/// cell.set(42);
/// assert_eq!(cell.get(), 42);
/// let Ok(()) = cell.release();
/// ```
pub struct HeapCell<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) _phantom: PhantomData<T>,
}

// SAFETY: HeapCell uniquely owns its value, in the same way that a Box does.
unsafe impl<T: Send> Send for HeapCell<T> {}

// SAFETY: Shared access to a HeapCell only ever gives out shared references to the value.
unsafe impl<T: Sync> Sync for HeapCell<T> {}

impl<T> HeapCell<T> {
    /// Replaces the contained value, dropping the old one.
    pub fn set(&mut self, value: T) {
        *self.value_mut() = value;
    }

    /// Replaces the contained value, returning the old one.
    pub fn replace(&mut self, value: T) -> T {
        mem::replace(self.value_mut(), value)
    }

    pub const fn value(&self) -> &T {
        // SAFETY: ptr is valid and initialized from acquisition until release, which consumes self.
        unsafe { self.ptr.as_ref() }
    }

    pub const fn value_mut(&mut self) -> &mut T {
        // SAFETY: As above, and &mut self guarantees exclusive access.
        unsafe { self.ptr.as_mut() }
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Aborts
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T: Copy> HeapCell<T> {
    pub const fn get(&self) -> T {
        *self.value()
    }
}

impl<T> Resource for HeapCell<T> {
    const KIND: &'static str = "heap cell";

    type Params = T;
    type AcquireError = Infallible;
    type ReleaseError = Infallible;

    fn acquire(initial: T) -> Result<HeapCell<T>, Infallible> {
        let ptr = HeapCell::<T>::make_ptr(Layout::new::<T>());
        // SAFETY: ptr is either freshly allocated for a T or dangling for a ZST, valid for writes
        // in both cases.
        unsafe { ptr.as_ptr().write(initial) };

        Ok(HeapCell {
            ptr,
            _phantom: PhantomData,
        })
    }

    fn release(self) -> Result<(), Infallible> {
        let layout = Layout::new::<T>();
        // SAFETY: The value is initialized and, because self is consumed, never accessed again.
        unsafe { ptr::drop_in_place(self.ptr.as_ptr()) };

        if layout.size() != 0 {
            // SAFETY: ptr was allocated by the global allocator with this same layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) };
        }
        Ok(())
    }
}

impl<T: Debug> Debug for HeapCell<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HeapCell").field(self.value()).finish()
    }
}
