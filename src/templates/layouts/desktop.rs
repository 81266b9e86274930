use crate::api::AdminUser;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

const BASE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f9fafb; color: #111827; }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: 220px; background: #0d1827; color: #fff; padding: 1.5rem 1rem; }
.sidebar a { display: block; color: #cbd5e1; padding: 0.5rem 0.75rem; border-radius: 6px; text-decoration: none; }
.sidebar a.active { background: #1e293b; color: #fff; }
.main { flex: 1; }
.topbar { display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 1.5rem; background: #fff; border-bottom: 1px solid #e5e7eb; }
.container { padding: 1.5rem; }
.stats { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 1rem; }
.card { background: #fff; border-radius: 12px; padding: 1rem; box-shadow: 0 1px 2px rgba(0,0,0,.06); }
.skeleton { background: #e5e7eb; border-radius: 6px; height: 1rem; margin-bottom: .75rem; animation: pulse 1.5s infinite; }
@keyframes pulse { 50% { opacity: .5; } }
table { width: 100%; border-collapse: collapse; font-size: .9rem; }
th { background: #0d1827; color: #fff; text-align: left; padding: .75rem 1rem; }
td { padding: .75rem 1rem; border-bottom: 1px solid #e5e7eb; }
.empty, .muted { color: #6b7280; }
.error { color: #ef4444; }
.pager { display: flex; justify-content: center; gap: .5rem; margin-top: 1.5rem; }
.overlay { position: fixed; inset: 0; background: rgba(0,0,0,.5); display: flex; align-items: center; justify-content: center; }
.modal { background: #fff; width: 100%; max-width: 28rem; border-radius: 16px; padding: 1.5rem; position: relative; }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Dashboard,
    Orders,
    Revenue,
}

const NAV_ITEMS: [(Nav, &str, &str); 3] = [
    (Nav::Dashboard, "/dashboard", "Dashboard"),
    (Nav::Orders, "/myorders", "My Orders"),
    (Nav::Revenue, "/totalrevenue", "Total Revenue"),
];

/// `<head>` shared by every page.
pub fn head(title: &str) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            title { (title) " | Hotel Management" }
            style { (PreEscaped(BASE_CSS)) }
            script src=(HTMX_SRC) defer {}
        }
    }
}

/// Signed-in shell: sidebar navigation, top bar with the admin's name, content.
pub fn desktop_layout(
    title: &str,
    active: Nav,
    user: Option<&AdminUser>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(title))
            body {
                div class="layout" {
                    aside class="sidebar" {
                        h3 { "Hotel Management" }
                        nav {
                            @for (item, href, label) in NAV_ITEMS {
                                a href=(href) class=[(item == active).then_some("active")] { (label) }
                            }
                        }
                    }
                    div class="main" {
                        header class="topbar" {
                            h2 { (title) }
                            div {
                                @if let Some(user) = user {
                                    span class="muted" { (user.display_name()) }
                                    " "
                                }
                                form action="/logout" method="post" style="display: inline;" {
                                    button type="submit" { "Logout" }
                                }
                            }
                        }
                        main class="container" {
                            (content)
                        }
                    }
                }
                div id="modal" {}
            }
        }
    }
}
