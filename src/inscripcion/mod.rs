//! Registration domain logic: form record, validation, repository
//! selection and the mail-compose hand-off.

mod age;
mod form;
mod mailto;
mod selection;
mod validate;

pub use age::{calc_age, calc_age_at};
pub use form::{Field, FieldErrors, FormData, CI_PLACES};
pub use mailto::build_mailto;
pub use selection::{toggle_selected_repo, SELECTION_LIMIT};
pub use validate::{validate_form, validate_form_at};
