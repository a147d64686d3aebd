//! Offset/limit pagination for list endpoints.

use crate::errors::ServiceError;

pub const DEFAULT_LIMIT: u64 = 100;

/// Postgres binds offset and limit as signed 64-bit integers.
pub const MAX_WINDOW: u64 = i64::MAX as u64;

/// Offset/limit window over an insertion-ordered table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// rows to skip
    pub skip: u64,
    /// maximum rows to return; zero yields nothing
    pub limit: u64,
}

impl Pagination {
    pub fn new(skip: Option<u64>, limit: Option<u64>) -> Self {
        Self { skip: skip.unwrap_or(0), limit: limit.unwrap_or(DEFAULT_LIMIT) }
    }

    /// Like `new`, but rejects values the datastore cannot bind.
    pub fn checked(skip: Option<u64>, limit: Option<u64>) -> Result<Self, ServiceError> {
        let page = Self::new(skip, limit);
        if page.skip > MAX_WINDOW || page.limit > MAX_WINDOW {
            return Err(ServiceError::Validation(format!(
                "skip and limit must be at most {}",
                MAX_WINDOW
            )));
        }
        Ok(page)
    }

    pub fn is_empty(&self) -> bool { self.limit == 0 }

    /// Apply the window to an in-memory slice.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let skip = usize::try_from(self.skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
        items.iter().skip(skip).take(limit).cloned().collect()
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { skip: 0, limit: DEFAULT_LIMIT } }
}

#[cfg(test)]
mod tests {
    use super::{Pagination, MAX_WINDOW};
    use crate::errors::ServiceError;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let p = Pagination::new(None, None);
        assert_eq!(p, Pagination { skip: 0, limit: 100 });
        assert_eq!(p, Pagination::default());
    }

    #[test]
    fn apply_bounds_the_slice() {
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(Pagination::new(Some(2), Some(3)).apply(&items), vec![3, 4, 5]);
        assert_eq!(Pagination::new(Some(8), None).apply(&items), vec![9, 10]);
        assert!(Pagination::new(Some(20), None).apply(&items).is_empty());
    }

    #[test]
    fn zero_limit_is_empty() {
        let items = vec![1, 2, 3];
        let p = Pagination::new(None, Some(0));
        assert!(p.is_empty());
        assert!(p.apply(&items).is_empty());
    }

    #[test]
    fn checked_rejects_unbindable_windows() {
        assert_eq!(Pagination::checked(Some(MAX_WINDOW), None).unwrap().skip, MAX_WINDOW);
        assert!(matches!(Pagination::checked(Some(MAX_WINDOW + 1), None), Err(ServiceError::Validation(_))));
        assert!(matches!(Pagination::checked(None, Some(u64::MAX)), Err(ServiceError::Validation(_))));
    }
}
