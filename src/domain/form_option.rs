//! Domain model for configurable meeting-form dropdown options.

use serde::Serialize;

use crate::domain::types::{FormOptionId, OptionField, OptionLabel, OptionValue};

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FormOption {
    pub id: FormOptionId,
    pub field: OptionField,
    pub value: OptionValue,
    pub label: OptionLabel,
    pub sort_order: i32,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewFormOption {
    pub field: OptionField,
    pub value: OptionValue,
    pub label: OptionLabel,
    pub sort_order: i32,
    pub active: bool,
}

/// Full replacement of an option row.
pub type UpdateFormOption = NewFormOption;
