//! Application state definitions

use crate::github::Repo;
use crate::inscripcion::{
    calc_age, toggle_selected_repo, validate_form, Field, FieldErrors, FormData, CI_PLACES,
    SELECTION_LIMIT,
};
use std::collections::HashSet;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Landing page capturing the login email
    #[default]
    Login,
    /// Registration form
    Inscripcion,
}

/// View parameters for navigation
#[derive(Debug, Clone, Default)]
pub struct ViewParams {
    /// Inbound `email` query parameter for the inscription view
    pub email: Option<String>,
}

/// Focus index of the repository panel, one past the last form field
pub const REPO_PANEL: usize = Field::ALL.len();

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,

    // Landing page
    pub login_input: String,
    pub login_error: Option<String>,

    // Inscription form
    pub email_destinatario: String,
    pub form: FormData,
    pub errors: FieldErrors,
    pub touched: HashSet<Field>,
    pub active_field: usize,

    // Repositories
    pub repos: Option<Vec<Repo>>,
    pub selected_repos: Vec<Repo>,
    pub repo_cursor: usize,
    pub repo_loading: bool,
    pub repo_error: Option<String>,

    // Submission
    pub submitted: bool,
    pub mailto_url: Option<String>,
}

impl AppState {
    /// The form field currently focused, or `None` on the repo panel
    pub fn focused_field(&self) -> Option<Field> {
        Field::ALL.get(self.active_field).copied()
    }

    /// Whether the repo panel can take focus
    pub fn repo_panel_available(&self) -> bool {
        self.repos.as_ref().is_some_and(|repos| !repos.is_empty())
    }

    fn focus_count(&self) -> usize {
        Field::ALL.len() + usize::from(self.repo_panel_available())
    }

    /// Move focus to the next field, wrapping into the repo panel when
    /// one is available
    pub fn next_field(&mut self) {
        self.active_field = (self.active_field + 1) % self.focus_count();
    }

    /// Move focus to the previous field
    pub fn prev_field(&mut self) {
        let count = self.focus_count();
        if self.active_field == 0 {
            self.active_field = count - 1;
        } else {
            self.active_field -= 1;
        }
    }

    /// Recompute the full error mapping from the current form
    pub fn revalidate(&mut self) {
        self.errors = validate_form(&self.form);
    }

    /// Mark a field as interacted-with; its errors become visible
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Mark every field touched (submit surfaces everything)
    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }

    /// Error to display for a field: computed errors gated by touched
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.touched.contains(&field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Append a character to the focused field. The expedicion selector
    /// ignores typed characters; it is cycled instead.
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if field == Field::Expedicion {
            return;
        }
        self.form.get_mut(field).push(c);
        self.after_edit(field);
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if field == Field::Expedicion {
            self.form.expedicion.clear();
        } else {
            self.form.get_mut(field).pop();
        }
        self.after_edit(field);
    }

    /// Cycle the expedicion selector. From unset, stepping forward lands
    /// on the first place and stepping backward on the last.
    pub fn cycle_expedicion(&mut self, step: isize) {
        let places = CI_PLACES.len() as isize;
        let current = CI_PLACES
            .iter()
            .position(|place| *place == self.form.expedicion);
        let next = match current {
            Some(index) => (index as isize + step).rem_euclid(places),
            None if step > 0 => 0,
            None => places - 1,
        };
        self.form.expedicion = CI_PLACES[next as usize].to_string();
        self.after_edit(Field::Expedicion);
    }

    /// Editing a touched field refreshes its visible error immediately
    fn after_edit(&mut self, field: Field) {
        if self.touched.contains(&field) {
            self.revalidate();
        }
        if self.submitted {
            self.submitted = false;
            self.mailto_url = None;
        }
    }

    /// Age for the hint under the date field, when one can be derived
    pub fn current_age(&self) -> Option<i32> {
        calc_age(&self.form.fecha_nacimiento)
    }

    /// Repositories currently listed (empty until a fetch succeeds)
    pub fn listed_repos(&self) -> &[Repo] {
        self.repos.as_deref().unwrap_or_default()
    }

    pub fn is_selected(&self, repo: &Repo) -> bool {
        self.selected_repos.iter().any(|item| item.id == repo.id)
    }

    /// Whether the selection is at capacity
    pub fn selection_full(&self) -> bool {
        self.selected_repos.len() >= SELECTION_LIMIT
    }

    pub fn repo_cursor_up(&mut self) {
        self.repo_cursor = self.repo_cursor.saturating_sub(1);
    }

    pub fn repo_cursor_down(&mut self) {
        let count = self.listed_repos().len();
        if count > 0 && self.repo_cursor < count - 1 {
            self.repo_cursor += 1;
        }
    }

    /// Toggle the repository under the cursor through the selection
    /// tracker (cap 2, silent reject at capacity)
    pub fn toggle_repo_at_cursor(&mut self) {
        let Some(repo) = self.listed_repos().get(self.repo_cursor).cloned() else {
            return;
        };
        self.selected_repos = toggle_selected_repo(&self.selected_repos, &repo, SELECTION_LIMIT);
    }

    /// Drop everything scoped to one inscription visit. The form is
    /// never persisted; navigating away discards it.
    pub fn reset_inscripcion(&mut self) {
        self.email_destinatario.clear();
        self.form = FormData::default();
        self.errors = FieldErrors::default();
        self.touched.clear();
        self.active_field = 0;
        self.repos = None;
        self.selected_repos.clear();
        self.repo_cursor = 0;
        self.repo_loading = false;
        self.repo_error = None;
        self.submitted = false;
        self.mailto_url = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(id: u64, name: &str) -> Repo {
        Repo {
            id,
            name: name.to_string(),
            description: String::new(),
            html_url: format!("https://github.com/octocat/{name}"),
            language: String::new(),
            stargazers_count: 0,
            private: false,
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn test_next_field_wraps_over_form_without_repos() {
            let mut state = AppState::default();
            for _ in 0..Field::ALL.len() {
                state.next_field();
            }
            assert_eq!(state.active_field, 0);
        }

        #[test]
        fn test_repo_panel_joins_the_cycle_once_listed() {
            let mut state = AppState {
                repos: Some(vec![repo(1, "a")]),
                ..Default::default()
            };
            state.active_field = Field::ALL.len() - 1;
            state.next_field();
            assert_eq!(state.active_field, REPO_PANEL);
            assert!(state.focused_field().is_none());
            state.next_field();
            assert_eq!(state.active_field, 0);
        }

        #[test]
        fn test_empty_listing_does_not_take_focus() {
            let mut state = AppState {
                repos: Some(vec![]),
                ..Default::default()
            };
            state.active_field = Field::ALL.len() - 1;
            state.next_field();
            assert_eq!(state.active_field, 0);
        }

        #[test]
        fn test_prev_field_wraps_backward() {
            let mut state = AppState::default();
            state.prev_field();
            assert_eq!(state.active_field, Field::ALL.len() - 1);
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn test_input_char_writes_to_focused_field() {
            let mut state = AppState::default();
            state.input_char('M');
            state.input_char('a');
            assert_eq!(state.form.nombres, "Ma");
        }

        #[test]
        fn test_untouched_edits_do_not_surface_errors() {
            let mut state = AppState::default();
            state.input_char('x');
            state.backspace();
            assert!(state.visible_error(Field::Nombres).is_none());
        }

        #[test]
        fn test_touched_field_revalidates_on_edit() {
            let mut state = AppState::default();
            state.touch(Field::Nombres);
            state.input_char('M');
            assert!(state.visible_error(Field::Nombres).is_none());
            state.backspace();
            assert_eq!(
                state.visible_error(Field::Nombres),
                Some("El nombre es requerido.")
            );
        }

        #[test]
        fn test_visible_error_gated_by_touched() {
            let mut state = AppState::default();
            state.revalidate();
            assert!(state.errors.get(Field::Celular).is_some());
            assert!(state.visible_error(Field::Celular).is_none());
            state.touch(Field::Celular);
            assert!(state.visible_error(Field::Celular).is_some());
        }

        #[test]
        fn test_expedicion_ignores_typed_characters() {
            let mut state = AppState::default();
            state.active_field = 3; // expedicion
            state.input_char('S');
            assert_eq!(state.form.expedicion, "");
        }

        #[test]
        fn test_expedicion_cycles_through_places() {
            let mut state = AppState::default();
            state.cycle_expedicion(1);
            assert_eq!(state.form.expedicion, "SC");
            state.cycle_expedicion(1);
            assert_eq!(state.form.expedicion, "LP");
            state.cycle_expedicion(-1);
            assert_eq!(state.form.expedicion, "SC");
        }

        #[test]
        fn test_expedicion_backward_from_unset_lands_on_last() {
            let mut state = AppState::default();
            state.cycle_expedicion(-1);
            assert_eq!(state.form.expedicion, "PO");
        }

        #[test]
        fn test_expedicion_backspace_clears_selection() {
            let mut state = AppState::default();
            state.cycle_expedicion(1);
            state.active_field = 3;
            state.backspace();
            assert_eq!(state.form.expedicion, "");
        }

        #[test]
        fn test_edit_after_submission_clears_the_confirmation() {
            let mut state = AppState {
                submitted: true,
                mailto_url: Some("https://mail.google.com/mail/?view=cm".to_string()),
                ..Default::default()
            };
            state.input_char('x');
            assert!(!state.submitted);
            assert!(state.mailto_url.is_none());
        }
    }

    mod repos {
        use super::*;

        fn listed_state() -> AppState {
            AppState {
                repos: Some(vec![repo(1, "a"), repo(2, "b"), repo(3, "c")]),
                ..Default::default()
            }
        }

        #[test]
        fn test_cursor_stays_in_bounds() {
            let mut state = listed_state();
            state.repo_cursor_up();
            assert_eq!(state.repo_cursor, 0);
            for _ in 0..10 {
                state.repo_cursor_down();
            }
            assert_eq!(state.repo_cursor, 2);
        }

        #[test]
        fn test_toggle_selects_and_deselects_under_cursor() {
            let mut state = listed_state();
            state.toggle_repo_at_cursor();
            assert!(state.is_selected(&repo(1, "a")));
            state.toggle_repo_at_cursor();
            assert!(!state.is_selected(&repo(1, "a")));
        }

        #[test]
        fn test_selection_full_after_two() {
            let mut state = listed_state();
            state.toggle_repo_at_cursor();
            state.repo_cursor_down();
            state.toggle_repo_at_cursor();
            assert!(state.selection_full());

            // Third toggle is silently rejected by the tracker
            state.repo_cursor_down();
            state.toggle_repo_at_cursor();
            assert_eq!(state.selected_repos.len(), 2);
            assert!(!state.is_selected(&repo(3, "c")));
        }
    }

    #[test]
    fn test_reset_discards_the_visit() {
        let mut state = AppState {
            email_destinatario: "dev@example.com".to_string(),
            repos: Some(vec![repo(1, "a")]),
            submitted: true,
            mailto_url: Some("https://mail.google.com/mail/?view=cm".to_string()),
            ..Default::default()
        };
        state.form.nombres = "María".to_string();
        state.touch_all();
        state.revalidate();

        state.reset_inscripcion();

        assert_eq!(state.form, FormData::default());
        assert!(state.errors.is_empty());
        assert!(state.touched.is_empty());
        assert!(state.repos.is_none());
        assert!(!state.submitted);
        assert!(state.mailto_url.is_none());
    }
}
