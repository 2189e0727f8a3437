use maud::{html, Markup, PreEscaped, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

const STYLE: &str = "
body { font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem; }
header { display: flex; align-items: center; justify-content: space-between; }
header ul { display: flex; gap: 1rem; list-style: none; }
.button { display: inline-block; padding: .4rem .9rem; border: 1px solid #524ed2; border-radius: 6px; text-decoration: none; }
#downloads { border-collapse: collapse; margin-top: 1rem; }
#downloads td, #downloads th { padding: .3rem .8rem; border-bottom: 1px solid #ddd; text-align: left; }
#downloads td.size { text-align: right; }
.muted { color: #666; }
.modal { border: 1px solid #ccc; border-radius: 8px; padding: 1rem; max-width: 360px; }
.modal label, .modal input { display: block; margin-bottom: .5rem; }
";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
                script src=(HTMX_SRC) defer {}
            }
            body {
                header {
                    h3 { "Releases" }
                    nav {
                        ul {
                            li { a href="/" { "Downloads" } }
                            li { a href="/login" { "Login" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
