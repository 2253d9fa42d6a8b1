//! Static datasets used across harnesses.

use osdex_core::types::ServiceOrder;

use super::builders::OrderBuilder;

/// A well-formed resource body, as the loader expects to find on disk or
/// behind the configured URL.
pub const DATASET_JSON: &str = r#"[
  {
    "CODIGO": "F003",
    "DESCRICAO_OS": "Bucha",
    "DESCRICAO_SUB_OS": "Inspeção de juntas e mangueiras",
    "SERVICO_REALIZADO": "Troca da junta do cárter e limpeza da área"
  },
  {
    "CODIGO": "F008",
    "DESCRICAO_OS": "Troca de bicos injetores",
    "DESCRICAO_SUB_OS": "Alto consumo de combustível (0.265L/H)",
    "SERVICO_REALIZADO": "Substituição dos bicos injetores e kit de vedação"
  },
  {
    "CODIGO": "F010",
    "DESCRICAO_OS": "Freio dianteiro",
    "SERVICO_REALIZADO": "Troca de pastilhas e sangria do sistema"
  },
  {
    "CODIGO": "F021",
    "DESCRICAO_OS": "Troca de óleo do motor",
    "DESCRICAO_SUB_OS": "Revisão de 10.000 km"
  }
]"#;

/// JSON that does not parse at all.
pub const MALFORMED_JSON: &str = r#"[{"CODIGO": "F003", "#;

/// Valid JSON, but not an array.
pub const NOT_AN_ARRAY_JSON: &str = r#"{"CODIGO": "F003", "DESCRICAO_OS": "Bucha"}"#;

/// Valid JSON array, but zero records.
pub const EMPTY_ARRAY_JSON: &str = "[]";

/// An array whose first record lacks the required `DESCRICAO_OS` key.
pub const MISSING_FIELD_JSON: &str = r#"[{"CODIGO": "F003"}]"#;

/// The in-memory equivalent of [`DATASET_JSON`] for search-layer tests.
pub fn workshop_orders() -> Vec<ServiceOrder> {
    vec![
        OrderBuilder::new("F003", "Bucha")
            .sub("Inspeção de juntas e mangueiras")
            .note("Troca da junta do cárter e limpeza da área")
            .build(),
        OrderBuilder::new("F008", "Troca de bicos injetores")
            .sub("Alto consumo de combustível (0.265L/H)")
            .note("Substituição dos bicos injetores e kit de vedação")
            .build(),
        OrderBuilder::new("F010", "Freio dianteiro")
            .note("Troca de pastilhas e sangria do sistema")
            .build(),
        OrderBuilder::new("F021", "Troca de óleo do motor")
            .sub("Revisão de 10.000 km")
            .build(),
    ]
}
