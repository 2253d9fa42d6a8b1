//! Core types for osdex-core.
//!
//! This module defines the one record type shared across all layers: the
//! [`ServiceOrder`], plus the [`Field`] discriminant the UI uses to refer to
//! its copyable parts.

use serde::{Deserialize, Serialize};

/// One service-order entry as it appears in the JSON resource.
///
/// Wire field names are the original uppercase Portuguese keys. `code` and
/// `description` are required; the other two fields may be absent. Records
/// are immutable once loaded — nothing in this crate mutates them — and
/// duplicate codes are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOrder {
    /// Short identifier, conventionally an uppercase letter prefix plus
    /// digits ("F003").
    #[serde(rename = "CODIGO")]
    pub code: String,
    /// Human-readable subject of the order.
    #[serde(rename = "DESCRICAO_OS")]
    pub description: String,
    /// Further detail, when present.
    #[serde(
        rename = "DESCRICAO_SUB_OS",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_description: Option<String>,
    /// Free text describing the work performed, when present.
    #[serde(
        rename = "SERVICO_REALIZADO",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub service_note: Option<String>,
}

impl ServiceOrder {
    /// The descriptive text fields that are present, in display order.
    /// `code` is not a descriptive field.
    pub fn descriptive_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.description.as_str()),
            self.sub_description.as_deref(),
            self.service_note.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    /// The text of one field, or `None` when the record doesn't carry it.
    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Code => Some(self.code.as_str()),
            Field::Description => Some(self.description.as_str()),
            Field::SubDescription => self.sub_description.as_deref(),
            Field::ServiceNote => self.service_note.as_deref(),
        }
    }
}

/// Which field of a [`ServiceOrder`] a UI affordance refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Code,
    Description,
    SubDescription,
    ServiceNote,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Code => write!(f, "Código"),
            Field::Description => write!(f, "OS"),
            Field::SubDescription => write!(f, "Sub-OS"),
            Field::ServiceNote => write!(f, "Serviço"),
        }
    }
}
