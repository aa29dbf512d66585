//! Admin workflows for the name mapping table.

use crate::domain::types::UserMappingId;
use crate::domain::user_mapping::{NewUserMapping, UpdateUserMapping, UserMapping};
use crate::forms::user_mappings::{UserMappingForm, UserMappingQuery};
use crate::repository::{UserMappingReader, UserMappingWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lists mappings, optionally for a single role.
pub fn list_user_mappings<R>(repo: &R, query: UserMappingQuery) -> ServiceResult<Vec<UserMapping>>
where
    R: UserMappingReader + ?Sized,
{
    let role = query.role()?;
    Ok(repo.list_user_mappings(role)?)
}

/// Validates the form and stores a new mapping. A duplicate
/// `(source_name, role)` pair surfaces as [`ServiceError::Conflict`].
pub fn create_user_mapping<R>(repo: &R, form: UserMappingForm) -> ServiceResult<UserMapping>
where
    R: UserMappingWriter + ?Sized,
{
    let mapping = NewUserMapping::try_from(form)?;
    Ok(repo.create_user_mapping(&mapping)?)
}

pub fn update_user_mapping<R>(
    repo: &R,
    mapping_id: i32,
    form: UserMappingForm,
) -> ServiceResult<UserMapping>
where
    R: UserMappingReader + UserMappingWriter + ?Sized,
{
    let id = UserMappingId::new(mapping_id)?;
    let updates = UpdateUserMapping::try_from(form)?;

    repo.get_user_mapping(id)?.ok_or(ServiceError::NotFound)?;

    Ok(repo.update_user_mapping(id, &updates)?)
}

pub fn delete_user_mapping<R>(repo: &R, mapping_id: i32) -> ServiceResult<()>
where
    R: UserMappingWriter + ?Sized,
{
    let id = UserMappingId::new(mapping_id)?;
    repo.delete_user_mapping(id)?;
    Ok(())
}
