use crate::app::App;
use crate::errors::ServerError;
use crate::releases::{DownloadsView, RepoConfig};
use crate::responses::{html_response, hx_redirect, no_content, redirect, ResultResp};
use crate::templates::pages::{downloads_page, login_page, LoginPageVm};
use crate::auth::SubmitOutcome;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

const LOGIN_PATH: &str = "/login";
const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let repo = app.config.default_repo().ok_or(ServerError::NotFound)?;
            downloads(app, repo)
        }
        ("GET", p) if p.starts_with("/downloads/") => {
            let name = &p["/downloads/".len()..];
            let repo = app.config.find_repo(name).ok_or(ServerError::NotFound)?;
            downloads(app, repo)
        }
        ("GET", LOGIN_PATH) => show_login(&req, app),
        ("POST", LOGIN_PATH) => submit_login(req, app),
        _ => Err(ServerError::NotFound),
    }
}

fn downloads(app: &App, repo: &RepoConfig) -> ResultResp {
    let view = match app.releases().latest_release(repo) {
        Ok(release) => {
            tracing::info!(%repo, tag = %release.tag_name, assets = release.assets.len(), "rendering release");
            DownloadsView::from_release(repo, &app.config.github.archive_base, &release)
        }
        Err(e) => {
            tracing::warn!(%repo, error = %e, "latest release unavailable");
            DownloadsView::unavailable(repo)
        }
    };

    html_response(downloads_page(&view))
}

fn show_login(req: &Request, app: &App) -> ResultResp {
    let mut form = app.login_form(LOGIN_PATH, None);
    match parse_query(req).get("modal").map(String::as_str) {
        Some("open") => form.click_login(),
        _ => form.click_cancel(),
    }

    html_response(login_page(&LoginPageVm::from_form(&form)))
}

fn submit_login(req: Request, app: &App) -> ResultResp {
    let htmx = is_htmx(&req);
    let mut fields = read_form(req)?;

    // The submit button lives inside the modal, so it is open at click time.
    let mut form = app.login_form(LOGIN_PATH, fields.remove("form_id"));
    form.click_login();
    form.set_username(fields.remove("username").unwrap_or_default());
    form.set_password(fields.remove("password").unwrap_or_default());

    match form.click_submit() {
        SubmitOutcome::Navigated(to) if htmx => hx_redirect(&to),
        SubmitOutcome::Navigated(to) => redirect(&to),
        SubmitOutcome::Failed(_) | SubmitOutcome::AlreadyPending if htmx => no_content(),
        SubmitOutcome::Failed(_) | SubmitOutcome::AlreadyPending => {
            html_response(login_page(&LoginPageVm::from_form(&form)))
        }
    }
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = req.into_body();
    let mut buf = Vec::new();
    body.reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;

    if buf.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form body too large".into()));
    }

    Ok(url::form_urlencoded::parse(&buf).into_owned().collect())
}
