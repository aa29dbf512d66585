//! Meeting-form dropdown options: admin CRUD and the public listing.

use crate::domain::form_option::{FormOption, NewFormOption, UpdateFormOption};
use crate::domain::types::FormOptionId;
use crate::dto::admin::{MeetingFormOptions, OptionChoice};
use crate::forms::form_options::{FormOptionForm, FormOptionQuery};
use crate::repository::{FormOptionListQuery, FormOptionReader, FormOptionWriter};
use crate::services::ServiceResult;

/// Active options grouped by field, each group ordered by `sort_order`
/// and then label.
pub fn meeting_form_options<R>(repo: &R) -> ServiceResult<MeetingFormOptions>
where
    R: FormOptionReader + ?Sized,
{
    let mut options = repo.list_form_options(&FormOptionListQuery::new().active_only())?;
    options.sort_by(|a, b| {
        a.field
            .cmp(&b.field)
            .then(a.sort_order.cmp(&b.sort_order))
            .then_with(|| a.label.cmp(&b.label))
    });

    let mut grouped = MeetingFormOptions::new();
    for option in options {
        grouped
            .entry(option.field.as_str().to_string())
            .or_default()
            .push(OptionChoice::from(option));
    }
    Ok(grouped)
}

/// Every option, active or not, for the admin screen.
pub fn list_form_options<R>(repo: &R, query: FormOptionQuery) -> ServiceResult<Vec<FormOption>>
where
    R: FormOptionReader + ?Sized,
{
    let mut list_query = FormOptionListQuery::new();
    if let Some(field) = query.field()? {
        list_query = list_query.field(field);
    }
    Ok(repo.list_form_options(&list_query)?)
}

pub fn create_form_option<R>(repo: &R, form: FormOptionForm) -> ServiceResult<FormOption>
where
    R: FormOptionWriter + ?Sized,
{
    let option = NewFormOption::try_from(form)?;
    Ok(repo.create_form_option(&option)?)
}

/// Replaces an option; a missing row surfaces as not found.
pub fn update_form_option<R>(
    repo: &R,
    option_id: i32,
    form: FormOptionForm,
) -> ServiceResult<FormOption>
where
    R: FormOptionWriter + ?Sized,
{
    let id = FormOptionId::new(option_id)?;
    let updates = UpdateFormOption::try_from(form)?;
    Ok(repo.update_form_option(id, &updates)?)
}

pub fn delete_form_option<R>(repo: &R, option_id: i32) -> ServiceResult<()>
where
    R: FormOptionWriter + ?Sized,
{
    let id = FormOptionId::new(option_id)?;
    repo.delete_form_option(id)?;
    Ok(())
}
