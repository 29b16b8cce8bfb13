//! Request Context
//!
//! Metadata about the current request, used for tracing.

use uuid::Uuid;

/// Context for a request, stored in request extensions.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Correlation ID for request tracing
    pub correlation_id: Option<Uuid>,
}

impl RequestContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create context with correlation ID
    pub fn with_correlation_id(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }

    /// Generate a new correlation ID if not present
    pub fn ensure_correlation_id(&mut self) -> Uuid {
        *self.correlation_id.get_or_insert_with(Uuid::new_v4)
    }
}
