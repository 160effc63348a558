use super::*;
use std::sync::{Arc, Mutex};

use axum::{extract::State, http::Method, http::Uri, Router};
use shared::domain::{MenuItemId, OrderId};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct CapturedRequests {
    log: Arc<Mutex<Vec<(Method, String, String)>>>,
}

async fn capture(
    State(state): State<CapturedRequests>,
    method: Method,
    uri: Uri,
    body: String,
) -> &'static str {
    state
        .log
        .lock()
        .expect("request log poisoned")
        .push((method, uri.to_string(), body));
    "ok"
}

async fn spawn_capture_server() -> (CapturedRequests, Url) {
    let state = CapturedRequests::default();
    let app = Router::new().fallback(capture).with_state(state.clone());
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    let base = Url::parse(&format!("http://{addr}/")).expect("base url");
    (state, base)
}

fn sample_submission(items: Vec<MenuItemId>) -> OrderFormSubmission {
    OrderFormSubmission {
        customer_choice: "new".to_string(),
        name: "Asha".to_string(),
        phone: "9876543210".to_string(),
        email: String::new(),
        address: String::new(),
        payment_method: shared::domain::PaymentMethod::Upi,
        order_type: shared::domain::OrderType::DineIn,
        table_number: Some("T3".to_string()),
        discount_percent: 10.0,
        items,
    }
}

#[test]
fn status_update_path_composes_exactly() {
    assert_eq!(
        status_update_path(OrderId(7), "Preparing").as_deref(),
        Some("/update_status/7/Preparing")
    );
}

#[test]
fn empty_status_composes_no_path() {
    assert_eq!(status_update_path(OrderId(7), ""), None);
}

#[test]
fn filter_rewrite_preserves_unrelated_query_parameters() {
    let current = Url::parse("http://localhost:5000/?page=2&q=chai").expect("url");
    let rewritten = with_order_filters(&current, "Pending", "Dine-in");
    let pairs: Vec<(String, String)> = rewritten
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("page".to_string(), "2".to_string()),
            ("q".to_string(), "chai".to_string()),
            ("status".to_string(), "Pending".to_string()),
            ("order_type".to_string(), "Dine-in".to_string()),
        ]
    );
}

#[test]
fn filter_rewrite_overwrites_existing_filters_without_duplicates() {
    let current =
        Url::parse("http://localhost:5000/?status=Pending&order_type=All").expect("url");
    let rewritten = with_order_filters(&current, "Completed", "Takeaway");
    let statuses: Vec<String> = rewritten
        .query_pairs()
        .filter(|(k, _)| k == "status")
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(statuses, vec!["Completed".to_string()]);
    assert_eq!(
        rewritten.query(),
        Some("status=Completed&order_type=Takeaway")
    );
}

#[tokio::test]
async fn update_status_navigates_to_composed_path() {
    let (state, base) = spawn_capture_server().await;
    let client = PosClient::new(base);

    let navigated = client
        .update_status(OrderId(3), "Completed")
        .await
        .expect("update status");
    assert_eq!(navigated.as_deref(), Some("/update_status/3/Completed"));

    let log = state.log.lock().expect("request log poisoned");
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].0, Method::GET);
    assert_eq!(log[0].1, "/update_status/3/Completed");
}

#[tokio::test]
async fn empty_status_sends_nothing() {
    let (state, base) = spawn_capture_server().await;
    let client = PosClient::new(base);

    let navigated = client.update_status(OrderId(3), "").await.expect("no-op");
    assert_eq!(navigated, None);
    assert!(state.log.lock().expect("request log poisoned").is_empty());
}

#[tokio::test]
async fn place_order_posts_form_with_repeated_items() {
    let (state, base) = spawn_capture_server().await;
    let client = PosClient::new(base);

    let form = sample_submission(vec![MenuItemId(1), MenuItemId(5)]);
    client.place_order(&form).await.expect("place order");

    let log = state.log.lock().expect("request log poisoned");
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].0, Method::POST);
    assert_eq!(log[0].1, "/add");
    let body = &log[0].2;
    assert!(body.contains("customer_id=new"));
    assert!(body.contains("order_type=Dine-in"));
    assert!(body.contains("payment_method=UPI"));
    assert!(body.contains("table_number=T3"));
    assert!(body.contains("items=1&items=5"));
}

#[tokio::test]
async fn filter_navigation_hits_rewritten_url() {
    let (state, base) = spawn_capture_server().await;
    let client = PosClient::new(base.clone());

    let current = base.join("/?page=4").expect("current url");
    let navigated = client
        .apply_order_filters(&current, "All", "Delivery")
        .await
        .expect("filter navigation");
    assert_eq!(
        navigated.query(),
        Some("page=4&status=All&order_type=Delivery")
    );

    let log = state.log.lock().expect("request log poisoned");
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].1, "/?page=4&status=All&order_type=Delivery");
}

#[tokio::test]
async fn delete_routes_use_path_parameters() {
    let (state, base) = spawn_capture_server().await;
    let client = PosClient::new(base);

    client.delete_order(OrderId(11)).await.expect("delete order");
    client
        .delete_customer(shared::domain::CustomerId(4))
        .await
        .expect("delete customer");

    let log = state.log.lock().expect("request log poisoned");
    assert_eq!(log[0].1, "/delete/11");
    assert_eq!(log[1].1, "/delete_customer/4");
}
