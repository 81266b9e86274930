use crate::templates::layouts::desktop::head;
use maud::{html, Markup, DOCTYPE};

/// Bare page for the signed-out screens: no sidebar, no logout button.
pub fn auth_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(title))
            body {
                main class="container" style="max-width: 420px; margin: 4rem auto;" {
                    h1 { "Hotel Management" }
                    p class="muted" { "Welcome Back" }
                    (content)
                }
            }
        }
    }
}
