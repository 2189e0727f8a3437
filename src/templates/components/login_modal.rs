use maud::{html, Markup};

// The hrefs are the no-JS fallback; with JS the dialog toggles in place and
// nothing is fetched.
const SHOW_MODAL: &str = "document.getElementById('login-modal').hidden = false; return false;";
const HIDE_MODAL: &str = "document.getElementById('login-modal').hidden = true; return false;";

/// Control that opens the login dialog.
pub fn login_open_button() -> Markup {
    html! {
        a id="login-open" class="button" href="/login?modal=open" onclick=(SHOW_MODAL) { "Login" }
    }
}

/// The login dialog. Hidden unless `open`.
///
/// `form_id` identifies this rendered form so a resubmit can be held back
/// while its request is pending. With htmx the submit button is also
/// disabled for that time.
pub fn login_modal(open: bool, username: &str, form_id: &str) -> Markup {
    html! {
        div id="login-modal" class="modal" hidden[!open] {
            form
                id="login-form"
                method="post"
                action="/login"
                hx-post="/login"
                hx-swap="none"
                hx-disabled-elt="#login-submit"
            {
                input type="hidden" name="form_id" value=(form_id);

                label for="username" { "Username" }
                input type="text" id="username" name="username" value=(username) autocomplete="username";

                label for="password" { "Password" }
                input type="password" id="password" name="password" autocomplete="current-password";

                div class="modal-actions" {
                    button type="submit" id="login-submit" class="primary" { "Sign in" }
                    a id="login-cancel" class="button" href="/login" onclick=(HIDE_MODAL) { "Cancel" }
                }
            }
        }
    }
}
