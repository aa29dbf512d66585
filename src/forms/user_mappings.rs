use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{PersonName, SalesRole};
use crate::domain::user_mapping::NewUserMapping;
use crate::forms::{FormError, non_blank};

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// Body of the create and update mapping requests.
pub struct UserMappingForm {
    /// Name exactly as it appears in meetings, call logs and sales rows.
    #[validate(length(min = 1, max = 255))]
    pub source_name: String,
    #[validate(length(min = 1, max = 255))]
    pub display_name: String,
    pub role: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl TryFrom<UserMappingForm> for NewUserMapping {
    type Error = FormError;

    fn try_from(form: UserMappingForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(NewUserMapping::new(
            PersonName::new(form.source_name).map_err(|_| FormError::InvalidName)?,
            PersonName::new(form.display_name).map_err(|_| FormError::InvalidName)?,
            form.role.parse().map_err(|_| FormError::InvalidRole)?,
            form.active,
        ))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UserMappingQuery {
    #[serde(default)]
    pub role: Option<String>,
}

impl UserMappingQuery {
    /// Role filter; blank means every role.
    pub fn role(self) -> Result<Option<SalesRole>, FormError> {
        non_blank(self.role)
            .map(|role| role.parse().map_err(|_| FormError::InvalidRole))
            .transpose()
    }
}
