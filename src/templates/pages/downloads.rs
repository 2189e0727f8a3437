// templates/pages/downloads.rs

use crate::releases::DownloadsView;
use crate::templates::{
    components::{archive_buttons, card, downloads_table},
    desktop_layout,
};
use maud::{html, Markup};

pub fn downloads_page(view: &DownloadsView) -> Markup {
    let title = format!("{} downloads", view.repo);
    let heading = match &view.tag_name {
        Some(tag) => format!("Latest release: {tag}"),
        None => "Latest release".to_string(),
    };
    let subtitle = view
        .tag_name
        .is_none()
        .then_some("Release information is currently unavailable.");

    desktop_layout(
        &title,
        html! {
            main class="container" {
                h1 { (view.repo.to_string()) }

                (card(&heading, subtitle, html! {
                    (archive_buttons(&view.archives))
                    (downloads_table(&view.rows))
                }))
            }
        },
    )
}
