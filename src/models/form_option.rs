//! Diesel models for meeting-form options.

use diesel::prelude::*;

use crate::domain::form_option::{
    FormOption as DomainFormOption, NewFormOption as DomainNewFormOption,
};
use crate::domain::types::{
    FormOptionId, OptionField, OptionLabel, OptionValue, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::meeting_form_options)]
pub struct FormOption {
    pub id: i32,
    pub field: String,
    pub value: String,
    pub label: String,
    pub sort_order: i32,
    pub active: bool,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::meeting_form_options)]
/// Used both for inserts and full-row updates.
pub struct NewFormOption<'a> {
    pub field: &'a str,
    pub value: &'a str,
    pub label: &'a str,
    pub sort_order: i32,
    pub active: bool,
}

impl TryFrom<FormOption> for DomainFormOption {
    type Error = TypeConstraintError;

    fn try_from(option: FormOption) -> Result<Self, Self::Error> {
        Ok(Self {
            id: FormOptionId::try_from(option.id)?,
            field: OptionField::new(option.field)?,
            value: OptionValue::new(option.value)?,
            label: OptionLabel::new(option.label)?,
            sort_order: option.sort_order,
            active: option.active,
        })
    }
}

impl<'a> From<&'a DomainNewFormOption> for NewFormOption<'a> {
    fn from(option: &'a DomainNewFormOption) -> Self {
        Self {
            field: option.field.as_str(),
            value: option.value.as_str(),
            label: option.label.as_str(),
            sort_order: option.sort_order,
            active: option.active,
        }
    }
}
