//! Application state and core logic

use crate::auth::{self, FileLoginStore, LoginStore};
use crate::config::TuiConfig;
use crate::github::{GithubClient, RepoLister};
use crate::inscripcion::{build_mailto, Field};
use crate::routes::{build_inscripcion_url, Route};
use crate::state::{AppState, View, ViewParams, REPO_PANEL};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Repository listing client
    github: Box<dyn RepoLister>,
    /// Login email persistence
    store: Box<dyn LoginStore>,
    /// Whether the app should quit
    quit: bool,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance against the real GitHub API and the
    /// file-backed login store
    pub fn new(config: &TuiConfig, initial_route: Option<Route>) -> Result<Self> {
        let github = match &config.github_api_url {
            Some(base_url) => GithubClient::with_base_url(base_url.clone())?,
            None => GithubClient::new()?,
        };
        Ok(Self::with_parts(
            Box::new(github),
            Box::new(FileLoginStore::new()),
            initial_route,
        ))
    }

    /// Create an App with injected collaborators
    pub fn with_parts(
        github: Box<dyn RepoLister>,
        store: Box<dyn LoginStore>,
        initial_route: Option<Route>,
    ) -> Self {
        let mut app = Self {
            state: AppState::default(),
            github,
            store,
            quit: false,
            status_message: None,
        };
        if let Some(route) = initial_route {
            app.open_route(route);
        }
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Navigate to a route
    pub fn open_route(&mut self, route: Route) {
        match route {
            Route::Login => {
                self.state.reset_inscripcion();
                self.state.view_params = ViewParams::default();
                self.state.current_view = View::Login;
            }
            Route::Inscripcion { email } => {
                self.state.view_params = ViewParams { email: Some(email) };
                self.enter_inscripcion();
            }
        }
    }

    /// Enter the inscription view, resolving the destination email from
    /// the navigation parameter or the remembered login
    fn enter_inscripcion(&mut self) {
        let from_query = self.state.view_params.email.clone().unwrap_or_default();
        self.state.email_destinatario =
            auth::resolve_login_email(&from_query, self.store.as_mut());
        self.state.current_view = View::Inscripcion;
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Login => self.handle_login_key(key),
            View::Inscripcion => self.handle_inscripcion_key(key).await,
        }
        Ok(())
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Enter => self.submit_login(),
            KeyCode::Backspace => {
                self.state.login_input.pop();
                self.state.login_error = None;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.login_input.push(c);
                self.state.login_error = None;
            }
            _ => {}
        }
    }

    /// Validate and persist the login email, then navigate to the
    /// inscription form with the email as its entry parameter
    fn submit_login(&mut self) {
        let email = auth::normalize_email(&self.state.login_input);
        if !auth::is_valid_email(&email) {
            self.state.login_error = Some("Ingrese un correo electrónico válido.".to_string());
            return;
        }
        self.state.login_error = None;
        self.store.set(&email);
        tracing::info!("login accepted, opening the inscription form");
        if let Some(route) = Route::parse(&build_inscripcion_url(&email)) {
            self.open_route(route);
        }
    }

    async fn handle_inscripcion_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => {
                    self.submit();
                    return;
                }
                KeyCode::Char('g') => {
                    self.fetch_repos().await;
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => self.leave_inscripcion(),
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            _ => {
                if self.state.focused_field().is_some() {
                    self.handle_field_key(key);
                } else {
                    self.handle_repo_panel_key(key);
                }
            }
        }
    }

    fn focus_next(&mut self) {
        self.blur_current();
        self.state.next_field();
    }

    fn focus_prev(&mut self) {
        self.blur_current();
        self.state.prev_field();
    }

    /// Leaving a field counts as blur: it becomes touched and the whole
    /// form is revalidated. Which errors show is still gated per field.
    fn blur_current(&mut self) {
        if let Some(field) = self.state.focused_field() {
            self.state.touch(field);
            self.state.revalidate();
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        let Some(field) = self.state.focused_field() else {
            return;
        };
        match key.code {
            KeyCode::Enter => self.focus_next(),
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Up | KeyCode::Left if field == Field::Expedicion => {
                self.state.cycle_expedicion(-1);
            }
            KeyCode::Down | KeyCode::Right if field == Field::Expedicion => {
                self.state.cycle_expedicion(1);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.input_char(c);
            }
            _ => {}
        }
    }

    fn handle_repo_panel_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.repo_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.repo_cursor_down(),
            KeyCode::Char(' ') | KeyCode::Enter => self.state.toggle_repo_at_cursor(),
            _ => {}
        }
    }

    /// Fetch the user's public repositories. Prior results, errors and
    /// selection are cleared before the single request goes out.
    pub async fn fetch_repos(&mut self) {
        let username = self.state.form.github.trim().to_string();
        if username.is_empty() {
            self.state.touch(Field::Github);
            self.state
                .errors
                .insert(Field::Github, "Ingrese su usuario de GitHub primero.");
            return;
        }

        self.state.repo_loading = true;
        self.state.repo_error = None;
        self.state.repos = None;
        self.state.selected_repos.clear();
        self.state.repo_cursor = 0;

        tracing::info!(user = %username, "consulting public repositories");
        let outcome = self.github.list_public_repos(&username).await;

        self.state.repo_error = outcome.error.map(|err| err.to_string());
        self.state.repos = outcome.repos;
        self.state.repo_loading = false;

        if self.state.repo_panel_available() {
            self.state.active_field = REPO_PANEL;
        } else if self.state.active_field == REPO_PANEL {
            self.state.active_field = 0;
        }
    }

    /// Submit the form: surface every error, run the submit-time
    /// blocking checks, then build the compose URI and hand it off
    pub fn submit(&mut self) {
        self.state.touch_all();
        self.state.revalidate();
        if !self.state.errors.is_empty() {
            tracing::info!(errors = self.state.errors.len(), "submission blocked by field errors");
            return;
        }

        if self.state.email_destinatario.is_empty() {
            self.state.repo_error =
                Some("No se encontró el correo del login. Vuelva a iniciar sesión.".to_string());
            return;
        }
        if !self.state.repo_panel_available() {
            self.state.repo_error =
                Some("Consulte sus repositorios de GitHub antes de enviar.".to_string());
            return;
        }
        if self.state.selected_repos.is_empty() {
            self.state.repo_error = Some("Seleccione al menos 1 repositorio.".to_string());
            return;
        }

        self.state.repo_error = None;
        let url = build_mailto(
            &self.state.email_destinatario,
            &self.state.form,
            &self.state.selected_repos,
        );
        match self.copy_to_clipboard(&url) {
            Ok(()) => {
                self.status_message =
                    Some("✓ Enlace de postulación copiado al portapapeles.".to_string());
            }
            Err(err) => {
                tracing::warn!("clipboard unavailable: {err}");
                self.status_message =
                    Some("Copia el enlace mostrado para abrir tu correo.".to_string());
            }
        }
        self.state.mailto_url = Some(url);
        self.state.submitted = true;
    }

    fn leave_inscripcion(&mut self) {
        self.state.reset_inscripcion();
        self.state.view_params = ViewParams::default();
        self.state.current_view = View::Login;
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
