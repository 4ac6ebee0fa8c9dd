//! Navigation routes between the login and inscription views.
//!
//! The inscription entry point carries the login email as a query
//! parameter, the same shape the app accepts as an optional startup
//! argument (`inscripcion-tui "/inscripcion?email=dev%40example.com"`).

use reqwest::Url;
use std::sync::LazyLock;

static ROUTE_BASE: LazyLock<Url> = LazyLock::new(|| Url::parse("app://inscripcion/").unwrap());

/// A navigable location in the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Inscripcion { email: String },
}

impl Route {
    /// Parse a route string. Unknown paths are rejected rather than
    /// falling back to the login view, so typos in a startup argument
    /// stay visible.
    pub fn parse(input: &str) -> Option<Route> {
        let url = ROUTE_BASE.join(input).ok()?;
        match url.path() {
            "" | "/" => Some(Route::Login),
            "/inscripcion" => {
                let email = url
                    .query_pairs()
                    .find(|(key, _)| key == "email")
                    .map(|(_, value)| value.into_owned())
                    .unwrap_or_default();
                Some(Route::Inscripcion { email })
            }
            _ => None,
        }
    }
}

/// Build the inscription entry route from a login email, percent-encoding
/// it into the `email` query parameter
pub fn build_inscripcion_url(email: &str) -> String {
    let mut url = ROUTE_BASE.clone();
    url.set_path("/inscripcion");
    url.query_pairs_mut().append_pair("email", email);
    format!("/inscripcion?{}", url.query().unwrap_or_default())
}
