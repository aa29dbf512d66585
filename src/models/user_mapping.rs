//! Diesel models for user name mappings.

use diesel::prelude::*;

use crate::domain::types::{PersonName, TypeConstraintError, UserMappingId};
use crate::domain::user_mapping::{
    NewUserMapping as DomainNewUserMapping, UpdateUserMapping as DomainUpdateUserMapping,
    UserMapping as DomainUserMapping,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::user_name_mappings)]
/// Diesel model for [`crate::domain::user_mapping::UserMapping`].
pub struct UserMapping {
    pub id: i32,
    pub source_name: String,
    pub display_name: String,
    pub role: String,
    pub active: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::user_name_mappings)]
/// Insertable form of [`UserMapping`].
pub struct NewUserMapping<'a> {
    pub source_name: &'a str,
    pub display_name: &'a str,
    pub role: &'a str,
    pub active: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::user_name_mappings)]
/// Data used when updating a [`UserMapping`] record.
pub struct UpdateUserMapping<'a> {
    pub source_name: &'a str,
    pub display_name: &'a str,
    pub role: &'a str,
    pub active: bool,
}

impl TryFrom<UserMapping> for DomainUserMapping {
    type Error = TypeConstraintError;

    fn try_from(mapping: UserMapping) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserMappingId::try_from(mapping.id)?,
            source_name: PersonName::new(mapping.source_name)?,
            display_name: PersonName::new(mapping.display_name)?,
            role: mapping.role.parse()?,
            active: mapping.active,
        })
    }
}

impl<'a> From<&'a DomainNewUserMapping> for NewUserMapping<'a> {
    fn from(mapping: &'a DomainNewUserMapping) -> Self {
        Self {
            source_name: mapping.source_name.as_str(),
            display_name: mapping.display_name.as_str(),
            role: mapping.role.as_str(),
            active: mapping.active,
        }
    }
}

impl<'a> From<&'a DomainUpdateUserMapping> for UpdateUserMapping<'a> {
    fn from(mapping: &'a DomainUpdateUserMapping) -> Self {
        Self {
            source_name: mapping.source_name.as_str(),
            display_name: mapping.display_name.as_str(),
            role: mapping.role.as_str(),
            active: mapping.active,
        }
    }
}
