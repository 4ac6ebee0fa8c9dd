//! Mail-compose URI construction

use super::form::FormData;
use crate::github::Repo;
use reqwest::Url;
use std::sync::LazyLock;

/// Fixed subject line for every submission
pub const MAIL_SUBJECT: &str = "Postulación Hackathon Virtual Banco BISA";

static COMPOSE_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://mail.google.com/mail/").unwrap());

/// Build the web mail composer URI for a submission.
///
/// Recipient, subject and body travel as independently percent-encoded
/// query parameters. Pure formatting; opening the URI and the actual
/// send are entirely the mail client's business.
pub fn build_mailto(to: &str, form: &FormData, repos: &[Repo]) -> String {
    let body = build_body(form, repos);

    let mut url = COMPOSE_BASE.clone();
    url.query_pairs_mut()
        .append_pair("view", "cm")
        .append_pair("to", to)
        .append_pair("su", MAIL_SUBJECT)
        .append_pair("body", &body);
    url.to_string()
}

/// Fixed plain-text summary template
fn build_body(form: &FormData, repos: &[Repo]) -> String {
    let line = |label: &str, value: &str| format!("{label:<18}{value}\n");

    let mut body = String::new();
    body.push_str("POSTULACIÓN HACKATHON VIRTUAL BANCO BISA\n");
    body.push_str(&"─".repeat(42));
    body.push_str("\n\n");
    body.push_str(&line("Nombres:", &form.nombres));
    body.push_str(&line("Apellidos:", &form.apellidos));
    body.push_str(&line(
        "N° CI:",
        &format!("{} ({})", form.cedula, form.expedicion),
    ));
    body.push_str(&line("Celular:", &form.celular));
    body.push_str(&line("Dirección:", &form.direccion));
    body.push_str(&line("GitHub:", &form.github));
    body.push_str(&line("Fecha nacimiento:", &form.fecha_nacimiento));
    body.push('\n');
    body.push_str("REPOSITORIOS SELECCIONADOS:\n");

    let repo_lines: Vec<String> = repos
        .iter()
        .map(|repo| format!("• {}: {}", repo.name, repo.html_url))
        .collect();
    body.push_str(&repo_lines.join("\n"));

    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn repo(id: u64, name: &str, url: &str) -> Repo {
        Repo {
            id,
            name: name.to_string(),
            description: String::new(),
            html_url: url.to_string(),
            language: String::new(),
            stargazers_count: 0,
            private: false,
        }
    }

    fn filled_form() -> FormData {
        FormData {
            nombres: "María Elena".to_string(),
            apellidos: "González Pérez".to_string(),
            cedula: "1234567".to_string(),
            expedicion: "SC".to_string(),
            celular: "+591 71234567".to_string(),
            direccion: "Av. Monseñor Rivero #123".to_string(),
            github: "octocat".to_string(),
            fecha_nacimiento: "2000-05-20".to_string(),
        }
    }

    fn decoded_params(uri: &str) -> Vec<(String, String)> {
        Url::parse(uri)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn param<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    #[test]
    fn test_uri_targets_the_composer() {
        let uri = build_mailto("x@y.com", &filled_form(), &[]);
        let url = Url::parse(&uri).unwrap();
        assert_eq!(url.host_str(), Some("mail.google.com"));
        assert_eq!(url.path(), "/mail/");
        assert_eq!(param(&decoded_params(&uri), "view"), "cm");
    }

    #[test]
    fn test_recipient_and_subject_decode_exactly() {
        let uri = build_mailto("x@y.com", &filled_form(), &[]);
        let params = decoded_params(&uri);
        assert_eq!(param(&params, "to"), "x@y.com");
        assert_eq!(param(&params, "su"), MAIL_SUBJECT);
    }

    #[test]
    fn test_body_carries_labelled_fields() {
        let uri = build_mailto("x@y.com", &filled_form(), &[]);
        let params = decoded_params(&uri);
        let body = param(&params, "body");

        assert!(body.starts_with("POSTULACIÓN HACKATHON VIRTUAL BANCO BISA\n"));
        assert!(body.contains(&"─".repeat(42)));
        assert!(body.contains("Nombres:          María Elena\n"));
        assert!(body.contains("N° CI:            1234567 (SC)\n"));
        assert!(body.contains("Dirección:        Av. Monseñor Rivero #123\n"));
        assert!(body.contains("Fecha nacimiento: 2000-05-20\n"));
    }

    #[test]
    fn test_repo_bullets_keep_selection_order() {
        let repos = vec![
            repo(2, "segundo", "https://github.com/octocat/segundo"),
            repo(1, "primero", "https://github.com/octocat/primero"),
        ];
        let uri = build_mailto("x@y.com", &filled_form(), &repos);
        let body = param(&decoded_params(&uri), "body").to_string();

        let segundo = body.find("• segundo: https://github.com/octocat/segundo").unwrap();
        let primero = body.find("• primero: https://github.com/octocat/primero").unwrap();
        assert!(segundo < primero, "bullets must follow selection order");
        assert!(body.contains("REPOSITORIOS SELECCIONADOS:\n"));
    }

    #[test]
    fn test_dynamic_text_is_percent_encoded() {
        let uri = build_mailto("x@y.com", &filled_form(), &[]);
        // Raw spaces and newlines never appear in a well-formed URI
        assert!(!uri.contains(' '));
        assert!(!uri.contains('\n'));
    }
}
