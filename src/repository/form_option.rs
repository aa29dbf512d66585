use diesel::prelude::*;

use crate::{
    domain::{
        form_option::{FormOption, NewFormOption, UpdateFormOption},
        types::FormOptionId,
    },
    models::form_option::{FormOption as DbFormOption, NewFormOption as DbNewFormOption},
    repository::{
        DieselRepository, FormOptionListQuery, FormOptionReader, FormOptionWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl FormOptionReader for DieselRepository {
    fn list_form_options(&self, query: &FormOptionListQuery) -> RepositoryResult<Vec<FormOption>> {
        use crate::schema::meeting_form_options;

        let mut conn = self.conn()?;

        let mut items = meeting_form_options::table.into_boxed();
        if let Some(field) = &query.field {
            items = items.filter(meeting_form_options::field.eq(field.as_str().to_string()));
        }
        if query.active_only {
            items = items.filter(meeting_form_options::active.eq(true));
        }

        let rows = items
            .order((
                meeting_form_options::field.asc(),
                meeting_form_options::sort_order.asc(),
                meeting_form_options::label.asc(),
                meeting_form_options::id.asc(),
            ))
            .select(DbFormOption::as_select())
            .load::<DbFormOption>(&mut conn)?;

        rows.into_iter()
            .map(|row| FormOption::try_from(row).map_err(RepositoryError::from))
            .collect()
    }
}

impl FormOptionWriter for DieselRepository {
    fn create_form_option(&self, option: &NewFormOption) -> RepositoryResult<FormOption> {
        use crate::schema::meeting_form_options;

        let mut conn = self.conn()?;

        let db_option: DbNewFormOption = option.into();
        let created = diesel::insert_into(meeting_form_options::table)
            .values(&db_option)
            .get_result::<DbFormOption>(&mut conn)?;

        FormOption::try_from(created).map_err(RepositoryError::from)
    }

    fn update_form_option(
        &self,
        id: FormOptionId,
        option: &UpdateFormOption,
    ) -> RepositoryResult<FormOption> {
        use crate::schema::meeting_form_options;

        let mut conn = self.conn()?;

        let db_updates: DbNewFormOption = option.into();
        let updated = diesel::update(meeting_form_options::table.find(id.get()))
            .set(&db_updates)
            .get_result::<DbFormOption>(&mut conn)?;

        FormOption::try_from(updated).map_err(RepositoryError::from)
    }

    fn delete_form_option(&self, id: FormOptionId) -> RepositoryResult<()> {
        use crate::schema::meeting_form_options;

        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(meeting_form_options::table.find(id.get())).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
