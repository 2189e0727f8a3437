use crate::auth::LoginForm;
use crate::templates::{
    components::{login_modal, login_open_button},
    desktop_layout,
};
use maud::{html, Markup};

/// What the login page shows. The password is never echoed back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginPageVm {
    pub modal_open: bool,
    pub username: String,
    pub form_id: String,
}

impl LoginPageVm {
    pub fn from_form(form: &LoginForm<'_>) -> Self {
        Self {
            modal_open: form.is_modal_open(),
            username: form.username().to_string(),
            form_id: form.form_id().to_string(),
        }
    }
}

pub fn login_page(vm: &LoginPageVm) -> Markup {
    desktop_layout(
        "Sign in",
        html! {
            main class="container narrow" {
                h1 { "Sign in" }

                (login_open_button())
                (login_modal(vm.modal_open, &vm.username, &vm.form_id))
            }
        },
    )
}
