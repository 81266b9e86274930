use crate::templates::components::error_message;
use crate::templates::layouts::auth_layout;
use maud::{html, Markup};

/// Field values and messages to re-render the sign-in form with.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub phone: String,
    pub phone_error: Option<String>,
    pub password_error: Option<String>,
    pub api_error: Option<String>,
}

impl LoginForm {
    pub fn has_errors(&self) -> bool {
        self.phone_error.is_some() || self.password_error.is_some()
    }
}

pub fn login_page(form: &LoginForm) -> Markup {
    auth_layout(
        "Login",
        html! {
            h2 { "Login to your account" }

            form action="/login" method="post" class="card" {
                div {
                    label for="phone" { "Phone Number" }
                    input type="tel" id="phone" name="phone" placeholder="Phone Number"
                        value=(form.phone) autocomplete="tel";
                    @if let Some(msg) = &form.phone_error {
                        (error_message(msg))
                    }
                }

                div {
                    label for="password" { "Password" }
                    input type="password" id="password" name="password" placeholder="Password"
                        autocomplete="current-password";
                    @if let Some(msg) = &form.password_error {
                        (error_message(msg))
                    }
                }

                @if let Some(msg) = &form.api_error {
                    (error_message(msg))
                }

                button type="submit" { "Login" }
            }
        },
    )
}
