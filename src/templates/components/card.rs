use maud::{html, Markup};

/// Titled panel; `subtitle` renders as a muted line under the heading.
pub fn card(title: &str, subtitle: Option<&str>, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            @if let Some(sub) = subtitle {
                p class="muted" { (sub) }
            }
            div class="card-body" {
                (body)
            }
        }
    }
}
