//! DTOs used by the admin configuration endpoints.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::form_option::FormOption;
use crate::domain::table::TableSpec;

/// One selectable choice of a meeting-form dropdown.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OptionChoice {
    pub value: String,
    pub label: String,
}

impl From<FormOption> for OptionChoice {
    fn from(option: FormOption) -> Self {
        Self {
            value: option.value.into_inner(),
            label: option.label.into_inner(),
        }
    }
}

/// Active choices keyed by form field.
pub type MeetingFormOptions = BTreeMap<String, Vec<OptionChoice>>;

/// Tables the admin screen may browse, with their column metadata.
#[derive(Debug, Serialize)]
pub struct TableCatalog {
    pub tables: &'static [TableSpec],
}
