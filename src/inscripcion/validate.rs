//! Form validation rules

use super::age::calc_age_at;
use super::form::{Field, FieldErrors, FormData};
use chrono::{Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Minimum accepted age (inclusive)
pub const MIN_AGE: i32 = 15;
/// Maximum accepted age (exclusive)
pub const MAX_AGE: i32 = 30;

static CEDULA_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{6,10}$").unwrap());
static CELULAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?\d{7,15}$").unwrap());

/// Validate the whole form against today's date.
///
/// Pure and deterministic for a fixed date: the result contains exactly
/// the failing fields. Callers decide which errors to surface based on
/// which fields the user has touched.
pub fn validate_form(data: &FormData) -> FieldErrors {
    validate_form_at(data, Local::now().date_naive())
}

/// Validate the whole form against an explicit reference date.
pub fn validate_form_at(data: &FormData, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if data.nombres.trim().is_empty() {
        errors.insert(Field::Nombres, "El nombre es requerido.");
    }
    if data.apellidos.trim().is_empty() {
        errors.insert(Field::Apellidos, "Los apellidos son requeridos.");
    }

    let cedula = data.cedula.trim();
    if cedula.is_empty() {
        errors.insert(Field::Cedula, "El N° de CI es requerido.");
    } else if !CEDULA_PATTERN.is_match(cedula) {
        errors.insert(Field::Cedula, "CI válido: 6-10 dígitos.");
    }

    if data.expedicion.is_empty() {
        errors.insert(Field::Expedicion, "Seleccione el lugar de expedición.");
    }

    if data.celular.trim().is_empty() {
        errors.insert(Field::Celular, "El celular es requerido.");
    } else {
        // Interior whitespace is fine on input ("+591 7XXXXXXX")
        let digits: String = data.celular.chars().filter(|c| !c.is_whitespace()).collect();
        if !CELULAR_PATTERN.is_match(&digits) {
            errors.insert(Field::Celular, "Número de celular inválido.");
        }
    }

    if data.direccion.trim().is_empty() {
        errors.insert(Field::Direccion, "La dirección es requerida.");
    }
    if data.github.trim().is_empty() {
        errors.insert(Field::Github, "El usuario de GitHub es requerido.");
    }

    if data.fecha_nacimiento.is_empty() {
        errors.insert(Field::FechaNacimiento, "La fecha de nacimiento es requerida.");
    } else {
        match calc_age_at(&data.fecha_nacimiento, today) {
            None => {
                errors.insert(Field::FechaNacimiento, "Solo desarrolladores menores de 30 años.");
            }
            Some(age) if age >= MAX_AGE => {
                errors.insert(Field::FechaNacimiento, "Solo desarrolladores menores de 30 años.");
            }
            Some(age) if age < MIN_AGE => {
                errors.insert(Field::FechaNacimiento, "Fecha de nacimiento inválida.");
            }
            Some(_) => {}
        }
    }

    errors
}
