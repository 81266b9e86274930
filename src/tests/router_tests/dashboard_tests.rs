// src/tests/router_tests/dashboard_tests.rs
use crate::tests::utils::*;
use serde_json::json;

fn dashboard_body() -> serde_json::Value {
    json!({
        "data": [
            {
                "_id": "o1",
                "customer": { "name": "Alice" },
                "items": [
                    { "name": "Deluxe Room", "quantity": 1 },
                    { "name": "Breakfast", "quantity": 2 }
                ],
                "grandTotal": 4500,
                "createdAt": "2024-07-01T09:00:00Z"
            },
            {
                "_id": "o2",
                "customer": { "name": "Bob" },
                "grandTotal": 1200,
                "createdAt": "2024-07-02T09:00:00Z"
            },
            { "_id": "o3", "customer": null, "grandTotal": 300 }
        ],
        "summary": { "totalOrders": 57, "totalRevenue": 12345 }
    })
}

#[test]
fn dashboard_shell_does_not_fetch() {
    let stub = StubApi::serving(dashboard_body());
    let state = test_state(stub.clone());
    let cookie = sign_in(&state);

    let resp = send(get("/dashboard", Some(&cookie)), &state);

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains(r#"hx-get="/dashboard/content""#));
    assert!(body.contains("skeleton"));
    assert!(body.contains("Front Desk"));
    assert!(stub.order_calls().is_empty());
}

#[test]
fn dashboard_content_shows_summary_and_latest_orders() {
    let state = test_state(StubApi::serving(dashboard_body()));
    let cookie = sign_in(&state);

    let resp = send(get("/dashboard/content", Some(&cookie)), &state);

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains("Total Orders"));
    assert!(body.contains("<h2>57</h2>"));
    assert!(body.contains("₹12345"));
    assert!(body.contains("Latest 10 Orders"));

    let bob = body.find("Bob").unwrap();
    let alice = body.find("Alice").unwrap();
    let missing = body.find("<td>N/A</td>").unwrap();
    assert!(bob < alice && alice < missing, "newest first, undated last");
}

#[test]
fn dashboard_without_summary_shows_zero() {
    let state = test_state(StubApi::serving(json!({ "data": [] })));

    let body = read_body(send(get("/dashboard/content", None), &state));
    assert!(body.contains("<h2>0</h2>"));
    assert!(body.contains("₹0"));
    assert!(body.contains("No orders found"));
}

#[test]
fn dashboard_failure_renders_error_only() {
    let state = test_state(StubApi::failing());

    let resp = send(get("/dashboard/content", None), &state);

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains("Failed to load dashboard data"));
    assert!(!body.contains("<table>"));
}

#[test]
fn dashboard_results_are_cached_per_session() {
    let stub = StubApi::serving(dashboard_body());
    let state = test_state(stub.clone());
    let cookie = sign_in(&state);

    send(get("/dashboard/content", Some(&cookie)), &state);
    send(get("/dashboard/content", Some(&cookie)), &state);
    send(get("/dashboard/order?id=o1", Some(&cookie)), &state);

    assert_eq!(stub.order_calls().len(), 1);
}

#[test]
fn order_modal_lists_items() {
    let state = test_state(StubApi::serving(dashboard_body()));
    let cookie = sign_in(&state);

    let resp = send(get("/dashboard/order?id=o1", Some(&cookie)), &state);

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains("Order Details"));
    assert!(body.contains("Customer: Alice"));
    assert!(body.contains("Deluxe Room"));
    assert!(body.contains("Qty: 2"));
    assert!(body.contains("₹4500"));
}

#[test]
fn order_modal_without_items() {
    let state = test_state(StubApi::serving(dashboard_body()));

    let body = read_body(send(get("/dashboard/order?id=o2", None), &state));
    assert!(body.contains("No items found"));
}

#[test]
fn order_modal_for_unknown_id() {
    let state = test_state(StubApi::serving(dashboard_body()));

    let resp = send(get("/dashboard/order?id=zzz", None), &state);

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains("Order not found"));
    assert!(!body.contains("<!DOCTYPE html>"));
}

#[test]
fn order_modal_without_id_is_rejected() {
    let state = test_state(StubApi::serving(dashboard_body()));

    assert_eq!(send(get("/dashboard/order", None), &state).status(), 400);
}

#[test]
fn order_modal_when_api_is_down() {
    let state = test_state(StubApi::failing());

    let resp = send(get("/dashboard/order?id=o1", None), &state);

    assert_eq!(resp.status(), 200);
    let body = read_body(resp);
    assert!(body.contains(r#"class="overlay""#));
    assert!(body.contains("Failed to load orders"));
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("Grand Total"));
}

#[test]
fn order_modal_shows_placeholders_for_irregular_items() {
    let state = test_state(StubApi::serving(json!({
        "data": [{
            "_id": "odd",
            "id": "odd",
            "customer": "65f0c0ffee",
            "items": [{ "name": "Lassi", "quantity": null }],
            "grandTotal": "250"
        }]
    })));

    let body = read_body(send(get("/dashboard/order?id=odd", None), &state));

    assert!(body.contains("Customer: N/A"));
    assert!(body.contains("Lassi"));
    assert!(body.contains("Qty: N/A"));
    assert!(body.contains("₹250"));
}
