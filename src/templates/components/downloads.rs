use crate::releases::{ArchiveLink, AssetRow};
use maud::{html, Markup};

/// `#zips`: one button per source archive.
pub fn archive_buttons(archives: &[ArchiveLink]) -> Markup {
    html! {
        div id="zips" class="archive-buttons" {
            @for link in archives {
                a class="button" data-kind=(link.kind.extension()) href=(link.url) { (link.label) }
            }
        }
    }
}

/// `#downloads`: one row per release asset, name linked, size in bytes.
pub fn downloads_table(rows: &[AssetRow]) -> Markup {
    html! {
        table id="downloads" {
            thead {
                tr {
                    th { "File" }
                    th { "Size (bytes)" }
                }
            }
            tbody {
                @for row in rows {
                    tr {
                        td {
                            @if let Some(url) = &row.url {
                                a href=(url) { (row.name) }
                            } @else {
                                (row.name)
                            }
                        }
                        td class="size" { (row.size) }
                    }
                }
            }
        }
    }
}
