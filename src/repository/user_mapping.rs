use diesel::prelude::*;

use crate::{
    domain::{
        types::{SalesRole, UserMappingId},
        user_mapping::{NewUserMapping, UpdateUserMapping, UserMapping},
    },
    models::user_mapping::{
        NewUserMapping as DbNewUserMapping, UpdateUserMapping as DbUpdateUserMapping,
        UserMapping as DbUserMapping,
    },
    repository::{
        DieselRepository, UserMappingReader, UserMappingWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl UserMappingReader for DieselRepository {
    fn list_user_mappings(&self, role: Option<SalesRole>) -> RepositoryResult<Vec<UserMapping>> {
        use crate::schema::user_name_mappings;

        let mut conn = self.conn()?;

        let mut query = user_name_mappings::table.into_boxed();
        if let Some(role) = role {
            query = query.filter(user_name_mappings::role.eq(role.as_str()));
        }

        let rows = query
            .order((
                user_name_mappings::role.asc(),
                user_name_mappings::display_name.asc(),
                user_name_mappings::source_name.asc(),
            ))
            .select(DbUserMapping::as_select())
            .load::<DbUserMapping>(&mut conn)?;

        rows.into_iter()
            .map(|row| UserMapping::try_from(row).map_err(RepositoryError::from))
            .collect()
    }

    fn get_user_mapping(&self, id: UserMappingId) -> RepositoryResult<Option<UserMapping>> {
        use crate::schema::user_name_mappings;

        let mut conn = self.conn()?;

        let row = user_name_mappings::table
            .find(id.get())
            .select(DbUserMapping::as_select())
            .first::<DbUserMapping>(&mut conn)
            .optional()?;

        row.map(UserMapping::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }
}

impl UserMappingWriter for DieselRepository {
    fn create_user_mapping(&self, mapping: &NewUserMapping) -> RepositoryResult<UserMapping> {
        use crate::schema::user_name_mappings;

        let mut conn = self.conn()?;

        let db_mapping: DbNewUserMapping = mapping.into();
        let created = diesel::insert_into(user_name_mappings::table)
            .values(&db_mapping)
            .get_result::<DbUserMapping>(&mut conn)?;

        UserMapping::try_from(created).map_err(RepositoryError::from)
    }

    fn update_user_mapping(
        &self,
        id: UserMappingId,
        mapping: &UpdateUserMapping,
    ) -> RepositoryResult<UserMapping> {
        use crate::schema::user_name_mappings;

        let mut conn = self.conn()?;

        let db_updates: DbUpdateUserMapping = mapping.into();
        let updated = diesel::update(user_name_mappings::table.find(id.get()))
            .set(&db_updates)
            .get_result::<DbUserMapping>(&mut conn)?;

        UserMapping::try_from(updated).map_err(RepositoryError::from)
    }

    fn delete_user_mapping(&self, id: UserMappingId) -> RepositoryResult<()> {
        use crate::schema::user_name_mappings;

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(user_name_mappings::table.find(id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
