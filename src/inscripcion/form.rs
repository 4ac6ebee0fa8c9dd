//! Form record and field identifiers

use std::collections::BTreeMap;

/// Issuing places for the identity card (department codes)
pub const CI_PLACES: [&str; 10] = ["SC", "LP", "CB", "OR", "PT", "TJ", "CH", "BE", "PA", "PO"];

/// Closed set of registration form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Nombres,
    Apellidos,
    Cedula,
    Expedicion,
    Celular,
    Direccion,
    Github,
    FechaNacimiento,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 8] = [
        Field::Nombres,
        Field::Apellidos,
        Field::Cedula,
        Field::Expedicion,
        Field::Celular,
        Field::Direccion,
        Field::Github,
        Field::FechaNacimiento,
    ];

    /// Display label for the field
    pub fn label(&self) -> &'static str {
        match self {
            Field::Nombres => "Nombres",
            Field::Apellidos => "Apellidos",
            Field::Cedula => "N° Cédula de Identidad",
            Field::Expedicion => "Expedición del C.I.",
            Field::Celular => "N° Celular",
            Field::Direccion => "Dirección",
            Field::Github => "Usuario de GitHub",
            Field::FechaNacimiento => "Fecha de Nacimiento",
        }
    }

    /// Placeholder text shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Nombres => "Ej. María Elena",
            Field::Apellidos => "Ej. González Pérez",
            Field::Cedula => "Ej. 1234567",
            Field::Expedicion => "Seleccionar...",
            Field::Celular => "+591 7XXXXXXX",
            Field::Direccion => "Ej. Av. Monseñor Rivero #123, Santa Cruz",
            Field::Github => "Ej. octocat",
            Field::FechaNacimiento => "AAAA-MM-DD",
        }
    }
}

/// One registration submission as entered by the user.
///
/// Every field is always present; the empty string is the unset sentinel.
/// Created empty when the form mounts and discarded on navigation away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub nombres: String,
    pub apellidos: String,
    pub cedula: String,
    pub expedicion: String,
    pub celular: String,
    pub direccion: String,
    pub github: String,
    pub fecha_nacimiento: String,
}

impl FormData {
    /// Read a field by identifier
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Nombres => &self.nombres,
            Field::Apellidos => &self.apellidos,
            Field::Cedula => &self.cedula,
            Field::Expedicion => &self.expedicion,
            Field::Celular => &self.celular,
            Field::Direccion => &self.direccion,
            Field::Github => &self.github,
            Field::FechaNacimiento => &self.fecha_nacimiento,
        }
    }

    /// Mutable access to a field by identifier
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Nombres => &mut self.nombres,
            Field::Apellidos => &mut self.apellidos,
            Field::Cedula => &mut self.cedula,
            Field::Expedicion => &mut self.expedicion,
            Field::Celular => &mut self.celular,
            Field::Direccion => &mut self.direccion,
            Field::Github => &mut self.github,
            Field::FechaNacimiento => &mut self.fecha_nacimiento,
        }
    }
}

/// Sparse mapping from field to a human-readable error message.
///
/// Absence of a key means the field currently has no error. Recomputed
/// from scratch by the validator; never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_is_empty() {
        let form = FormData::default();
        for field in Field::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut form = FormData::default();
        form.get_mut(Field::Nombres).push_str("María");
        form.get_mut(Field::Github).push_str("octocat");
        assert_eq!(form.nombres, "María");
        assert_eq!(form.github, "octocat");
    }

    #[test]
    fn test_all_covers_every_field_once() {
        let mut seen = std::collections::BTreeSet::new();
        for field in Field::ALL {
            assert!(seen.insert(field), "duplicate field in ALL: {field:?}");
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_ci_places_are_two_letter_codes() {
        assert_eq!(CI_PLACES.len(), 10);
        for place in CI_PLACES {
            assert_eq!(place.len(), 2);
        }
    }

    #[test]
    fn test_field_errors_absent_key_means_no_error() {
        let mut errors = FieldErrors::default();
        assert!(errors.is_empty());
        assert!(errors.get(Field::Cedula).is_none());

        errors.insert(Field::Cedula, "CI válido: 6-10 dígitos.");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Cedula), Some("CI válido: 6-10 dígitos."));
        assert!(errors.get(Field::Nombres).is_none());
    }

    #[test]
    fn test_field_errors_insert_replaces() {
        let mut errors = FieldErrors::default();
        errors.insert(Field::Celular, "primero");
        errors.insert(Field::Celular, "segundo");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Celular), Some("segundo"));
    }
}
