// src/tests/router_tests/auth_tests.rs
use crate::api::{ApiError, PageQuery};
use crate::tests::utils::*;
use std::sync::Arc;

#[test]
fn login_page_renders() {
    let state = test_state(StubApi::serving(orders_body(&[])));

    let resp = send(get("/", None), &state);
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("Login to your account"));
}

#[test]
fn login_sets_cookie_and_redirects() {
    let state = test_state(StubApi::serving(orders_body(&[])));

    let resp = send(
        post_form("/login", "phone=9000000000&password=secret", None),
        &state,
    );

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/dashboard");
    let cookie = header(&resp, "Set-Cookie");
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));
    assert_eq!(state.sessions.len(), 1);
}

#[test]
fn login_requires_phone_and_password() {
    let state = test_state(StubApi::serving(orders_body(&[])));

    let resp = send(post_form("/login", "phone=+&password=", None), &state);

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains("Phone Number is required"));
    assert!(body.contains("Password is required"));
    assert!(state.sessions.is_empty());
}

#[test]
fn login_shows_api_message() {
    let stub = StubApi::new(Ok(orders_page(orders_body(&[])))).with_login(Err(
        ApiError::Status {
            status: 401,
            message: Some("User not found".into()),
        },
    ));
    let state = test_state(Arc::new(stub));

    let resp = send(post_form("/login", "phone=123&password=x", None), &state);

    assert_eq!(resp.status(), 401);
    let body = read_body(resp);
    assert!(body.contains("User not found"));
    assert!(body.contains(r#"value="123""#), "phone should be kept");
    assert!(state.sessions.is_empty());
}

#[test]
fn login_falls_back_to_invalid_credentials() {
    let stub = StubApi::new(Ok(orders_page(orders_body(&[]))))
        .with_login(Err(ApiError::Network("connection refused".into())));
    let state = test_state(Arc::new(stub));

    let resp = send(post_form("/login", "phone=123&password=x", None), &state);

    assert_eq!(resp.status(), 401);
    assert!(read_body(resp).contains("Invalid credentials"));
}

#[test]
fn signed_in_root_redirects_to_dashboard() {
    let state = test_state(StubApi::serving(orders_body(&[])));
    let cookie = sign_in(&state);

    let resp = send(get("/", Some(&cookie)), &state);
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/dashboard");
}

#[test]
fn logout_revokes_session() {
    let state = test_state(StubApi::serving(orders_body(&[])));
    let cookie = sign_in(&state);

    let resp = send(post_form("/logout", "", Some(&cookie)), &state);

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/");
    assert!(header(&resp, "Set-Cookie").contains("Max-Age=0"));
    assert!(state.sessions.is_empty());

    let resp = send(get("/", Some(&cookie)), &state);
    assert_eq!(resp.status(), 200, "old cookie no longer signs in");
}

#[test]
fn fetches_carry_the_session_credential() {
    let stub = StubApi::serving(orders_body(&[Some("Alice")]));
    let state = test_state(stub.clone());
    let cookie = sign_in(&state);

    send(get("/dashboard/content", Some(&cookie)), &state);
    send(get("/dashboard/content", None), &state);

    let calls = stub.order_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], (Some("api-token".to_string()), PageQuery::new(1, 10)));
    assert_eq!(calls[1], (None, PageQuery::new(1, 10)));
}

#[test]
fn unknown_path_is_not_found() {
    let state = test_state(StubApi::serving(orders_body(&[])));

    let resp = send(get("/nowhere", None), &state);
    assert_eq!(resp.status(), 404);
}
