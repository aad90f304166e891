use crate::server::error::validation::ValidationError;

pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: u64 = 100;

/// Validated `limit`/`offset` window over an ordered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Pagination {
    /// Validates raw query values.
    ///
    /// Missing values fall back to the defaults. Out-of-range values are rejected,
    /// never clamped.
    ///
    /// # Returns
    /// - `Ok(Pagination)` - `limit` in `1..=100` and `offset >= 0`
    /// - `Err(ValidationError)` - One entry per offending parameter
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::default();

        let limit = match limit {
            None => DEFAULT_LIMIT,
            Some(limit) if (1..=MAX_LIMIT as i64).contains(&limit) => limit as u64,
            Some(_) => {
                errors.push(
                    "limit",
                    format!("limit must be between 1 and {}", MAX_LIMIT),
                );
                DEFAULT_LIMIT
            }
        };

        let offset = match offset {
            None => 0,
            Some(offset) if offset >= 0 => offset as u64,
            Some(_) => {
                errors.push("offset", "offset must be greater than or equal to 0");
                0
            }
        };

        errors.into_result()?;

        Ok(Self { limit, offset })
    }
}

/// One page of an ordered collection together with the full count.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, pagination: Pagination) -> Self {
        Self {
            items,
            total,
            limit: pagination.limit,
            offset: pagination.offset,
        }
    }

    /// Offset of the following page, `None` once this page reaches the end.
    pub fn next_offset(&self) -> Option<u64> {
        let next = self.offset + self.limit;
        (next < self.total).then_some(next)
    }
}
