// ============================================================================
// Render Buffer
// Lazily allocated, exclusively owned text storage for "n/d" rendering
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt::Write;

/// Bytes reserved on first allocation unless configured otherwise.
pub const DEFAULT_RENDER_CAPACITY: usize = 120;

/// Largest capacity a configuration may request.
pub const MAX_RENDER_CAPACITY: usize = 64 * 1024;

/// Owned scratch buffer behind [`Rational::render`](super::Rational::render).
///
/// The allocation is made once and reused; the contents are rewritten on
/// every [`write_fraction`](Self::write_fraction). Cloning a buffer yields an
/// empty one, so copies of a value never share or duplicate the cache.
#[derive(Debug, Default)]
pub struct RenderBuffer {
    buf: Option<String>,
}

impl RenderBuffer {
    /// An unallocated buffer.
    #[inline]
    pub const fn new() -> Self {
        Self { buf: None }
    }

    /// Whether storage has been allocated.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.buf.is_some()
    }

    /// Reserved capacity in bytes, zero when unallocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.as_ref().map_or(0, String::capacity)
    }

    /// Overwrite the buffer with `numerator/denominator`, allocating
    /// `capacity` bytes first if nothing is allocated yet.
    ///
    /// # Errors
    /// Returns `AllocationFailure` if the reservation cannot be satisfied.
    pub fn write_fraction(
        &mut self,
        numerator: i64,
        denominator: i64,
        capacity: usize,
    ) -> NumericResult<&str> {
        if self.buf.is_none() {
            let mut fresh = String::new();
            fresh
                .try_reserve_exact(capacity)
                .map_err(|_| NumericError::AllocationFailure)?;
            self.buf = Some(fresh);
        }

        let buf = self.buf.get_or_insert_with(String::new);
        buf.clear();
        // Writing to a String only fails if the allocator does.
        write!(buf, "{}/{}", numerator, denominator)
            .map_err(|_| NumericError::AllocationFailure)?;
        Ok(buf.as_str())
    }

    /// Drop the allocation. Safe to call on an empty buffer.
    #[inline]
    pub fn release(&mut self) {
        self.buf = None;
    }
}

impl Clone for RenderBuffer {
    fn clone(&self) -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lazy_allocation() {
        let mut buf = RenderBuffer::new();
        assert!(!buf.is_allocated());
        assert_eq!(buf.capacity(), 0);

        assert_eq!(buf.write_fraction(5, 3, DEFAULT_RENDER_CAPACITY).unwrap(), "5/3");
        assert!(buf.is_allocated());
        assert!(buf.capacity() >= DEFAULT_RENDER_CAPACITY);
    }

    #[test]
    fn test_contents_rewritten_allocation_reused() {
        let mut buf = RenderBuffer::new();
        buf.write_fraction(123_456, 789, 64).unwrap();
        let ptr = buf.buf.as_ref().unwrap().as_ptr();

        assert_eq!(buf.write_fraction(-1, 2, 64).unwrap(), "-1/2");
        assert_eq!(buf.buf.as_ref().unwrap().as_ptr(), ptr);
    }

    #[test]
    fn test_release_idempotent() {
        let mut buf = RenderBuffer::new();
        buf.write_fraction(1, 1, 8).unwrap();
        buf.release();
        assert!(!buf.is_allocated());
        buf.release();
        assert!(!buf.is_allocated());
    }

    #[test]
    fn test_failed_reservation_leaves_buffer_empty() {
        let mut buf = RenderBuffer::new();
        assert_eq!(
            buf.write_fraction(5, 3, usize::MAX),
            Err(NumericError::AllocationFailure)
        );
        assert!(!buf.is_allocated());
    }

    #[test]
    fn test_clone_is_empty() {
        let mut buf = RenderBuffer::new();
        buf.write_fraction(7, 1, 16).unwrap();
        let copy = buf.clone();
        assert!(buf.is_allocated());
        assert!(!copy.is_allocated());
    }

    #[test]
    fn test_small_capacity_still_renders() {
        let mut buf = RenderBuffer::new();
        assert_eq!(
            buf.write_fraction(i64::MIN, i64::MAX, 1).unwrap(),
            "-9223372036854775808/9223372036854775807"
        );
    }
}
