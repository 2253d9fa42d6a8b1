//! Test builders — ergonomic constructors for `ServiceOrder` fixtures.
//!
//! Designed for readability in test assertions, not for production use.

use osdex_core::types::ServiceOrder;

/// Fluent builder for [`ServiceOrder`] test fixtures.
///
/// # Example
///
/// ```rust
/// let order = OrderBuilder::new("F003", "Bucha")
///     .sub("Inspeção de juntas")
///     .note("Troca da junta do cárter")
///     .build();
/// ```
pub struct OrderBuilder {
    code: String,
    description: String,
    sub_description: Option<String>,
    service_note: Option<String>,
}

impl OrderBuilder {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            sub_description: None,
            service_note: None,
        }
    }

    pub fn sub(mut self, sub: impl Into<String>) -> Self {
        self.sub_description = Some(sub.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.service_note = Some(note.into());
        self
    }

    pub fn build(self) -> ServiceOrder {
        ServiceOrder {
            code: self.code,
            description: self.description,
            sub_description: self.sub_description,
            service_note: self.service_note,
        }
    }
}

/// Shorthand for the common two-field case.
pub fn order(code: &str, description: &str) -> ServiceOrder {
    OrderBuilder::new(code, description).build()
}
