use serde::Deserialize;
use validator::Validate;

use crate::domain::form_option::NewFormOption;
use crate::domain::types::{OptionField, OptionLabel, OptionValue};
use crate::forms::{FormError, non_blank};

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// Body of the create and update form-option requests.
pub struct FormOptionForm {
    #[validate(length(min = 1, max = 100))]
    pub field: String,
    #[validate(length(min = 1, max = 255))]
    pub value: String,
    #[validate(length(min = 1, max = 255))]
    pub label: String,
    #[serde(default)]
    #[validate(range(min = 0, max = 100000))]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl TryFrom<FormOptionForm> for NewFormOption {
    type Error = FormError;

    fn try_from(form: FormOptionForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(NewFormOption {
            field: OptionField::new(form.field).map_err(|_| FormError::InvalidField)?,
            value: OptionValue::new(form.value).map_err(|_| FormError::InvalidValue)?,
            label: OptionLabel::new(form.label).map_err(|_| FormError::InvalidLabel)?,
            sort_order: form.sort_order,
            active: form.active,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FormOptionQuery {
    #[serde(default)]
    pub field: Option<String>,
}

impl FormOptionQuery {
    pub fn field(self) -> Result<Option<OptionField>, FormError> {
        non_blank(self.field)
            .map(|field| OptionField::new(field).map_err(|_| FormError::InvalidField))
            .transpose()
    }
}
