use maud::{html, Markup, PreEscaped, DOCTYPE};

pub fn desktop_layout(title: &str, stylesheet: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if let Some(css) = stylesheet {
                    style { (PreEscaped(css)) }
                }
            }
            body {
                header {
                    h1 { (title) }
                }
                main {
                    (content)
                }
            }
        }
    }
}
