//! GraphQL API tests: queries and mutations over HTTP, subscriptions
//! against the schema directly.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use axum::http::StatusCode;
use juice_bar_integration_tests::TestApp;
use serde_json::{Value, json};
use tokio_stream::StreamExt;

const JUICE_FIELDS: &str = "id name description price category inStock imageUrl";

fn names(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect()
}

fn first_error(body: &Value) -> &str {
    body["errors"][0]["message"].as_str().unwrap()
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn test_graphiql_is_served() {
    let app = TestApp::new();
    let resp = app.get("/graphql").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.as_str().unwrap().contains("graphiql"));
}

#[tokio::test]
async fn test_juices_query() {
    let app = TestApp::new();
    let body = app
        .graphql(&format!("{{ juices {{ {JUICE_FIELDS} }} }}"), Value::Null)
        .await;

    assert!(body.get("errors").is_none());
    let juices = &body["data"]["juices"];
    assert_eq!(juices.as_array().unwrap().len(), 5);
    assert_eq!(juices[1]["id"], "2");
    assert_eq!(juices[1]["name"], "Green Detox");
    assert_eq!(juices[1]["price"], 5.99);
    assert_eq!(juices[1]["category"], "Vegetable");
    assert_eq!(juices[4]["inStock"], false);
}

#[tokio::test]
async fn test_juice_query_returns_null_for_unknown_id() {
    let app = TestApp::new();

    let body = app
        .graphql(
            "query($id: ID!) { juice(id: $id) { name } }",
            json!({ "id": "4" }),
        )
        .await;
    assert_eq!(body["data"]["juice"]["name"], "Pineapple Paradise");

    let body = app
        .graphql(r#"{ juice(id: "99") { name } }"#, Value::Null)
        .await;
    assert!(body.get("errors").is_none());
    assert!(body["data"]["juice"].is_null());
}

#[tokio::test]
async fn test_category_and_search_queries() {
    let app = TestApp::new();

    let body = app
        .graphql(
            r#"{
                vegetables: juicesByCategory(category: "Vegetable") { name }
                none: juicesByCategory(category: "vegetable") { name }
                berries: searchJuices(query: "BERRIES") { name }
                everything: searchJuices(query: "") { name }
            }"#,
            Value::Null,
        )
        .await;

    let data = &body["data"];
    assert_eq!(names(&data["vegetables"]), ["Green Detox", "Carrot Ginger Zing"]);
    assert!(data["none"].as_array().unwrap().is_empty());
    assert_eq!(names(&data["berries"]), ["Berry Blast"]);
    assert_eq!(data["everything"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_orders_query_resolves_juices() {
    let app = TestApp::new();
    let body = app
        .graphql(
            "{ orders { id customerName items juices { name } total status createdAt } }",
            Value::Null,
        )
        .await;

    let orders = &body["data"]["orders"];
    assert_eq!(orders[0]["customerName"], "Alice Johnson");
    assert_eq!(orders[0]["items"], json!(["1", "3"]));
    assert_eq!(names(&orders[0]["juices"]), ["Orange Juice", "Berry Blast"]);
    assert_eq!(orders[0]["total"], 11.98);
    assert_eq!(orders[0]["status"], "delivered");
    assert!(orders[0]["createdAt"].as_str().unwrap().ends_with('Z'));
    assert_eq!(orders[1]["status"], "pending");

    let body = app
        .graphql(r#"{ order(id: "12") { id } }"#, Value::Null)
        .await;
    assert!(body["data"]["order"].is_null());
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn test_create_juice_mutation_applies_defaults() {
    let app = TestApp::new();
    let body = app
        .graphql(
            &format!(
                "mutation($input: JuiceInput!) {{
                    createJuice(input: $input) {{ {JUICE_FIELDS} }}
                }}"
            ),
            json!({ "input": { "name": "Watermelon Wave", "price": 3.75 } }),
        )
        .await;

    let juice = &body["data"]["createJuice"];
    assert_eq!(juice["id"], "6");
    assert_eq!(juice["price"], 3.75);
    assert_eq!(juice["description"], "");
    assert_eq!(juice["category"], "Fruit");
    assert_eq!(juice["inStock"], true);
    assert_eq!(juice["imageUrl"], "/images/placeholder.jpg");

    // Same store behind both front-ends
    let resp = app.get("/api/juices/6").await;
    assert_eq!(resp.body["name"], "Watermelon Wave");
}

#[tokio::test]
async fn test_create_juice_mutation_rejects_missing_price() {
    let app = TestApp::new();
    let body = app
        .graphql(
            r#"mutation { createJuice(input: { name: "No Price" }) { id } }"#,
            Value::Null,
        )
        .await;

    assert!(body["errors"].as_array().is_some_and(|errors| !errors.is_empty()));
    assert_eq!(app.state.store().juices().list().unwrap().len(), 5);
}

#[tokio::test]
async fn test_update_juice_mutation_is_partial() {
    let app = TestApp::new();
    let body = app
        .graphql(
            r#"mutation {
                updateJuice(id: "3", input: { description: "", inStock: false }) {
                    name description price inStock
                }
            }"#,
            Value::Null,
        )
        .await;

    let juice = &body["data"]["updateJuice"];
    assert_eq!(juice["name"], "Berry Blast");
    assert_eq!(juice["description"], "");
    assert_eq!(juice["price"], 6.99);
    assert_eq!(juice["inStock"], false);

    let body = app
        .graphql(
            r#"mutation { updateJuice(id: "99", input: { name: "Ghost" }) { id } }"#,
            Value::Null,
        )
        .await;
    assert_eq!(first_error(&body), "Juice not found");
}

#[tokio::test]
async fn test_delete_juice_mutation() {
    let app = TestApp::new();
    let delete = r#"mutation { deleteJuice(id: "1") }"#;

    let body = app.graphql(delete, Value::Null).await;
    assert_eq!(body["data"]["deleteJuice"], true);

    let body = app.graphql(delete, Value::Null).await;
    assert_eq!(first_error(&body), "Juice not found");

    // The order keeps the id but no longer resolves the juice
    let body = app
        .graphql(r#"{ order(id: "1") { items juices { name } total } }"#, Value::Null)
        .await;
    let order = &body["data"]["order"];
    assert_eq!(order["items"], json!(["1", "3"]));
    assert_eq!(names(&order["juices"]), ["Berry Blast"]);
    assert_eq!(order["total"], 11.98);
}

#[tokio::test]
async fn test_create_order_mutation() {
    let app = TestApp::new();
    let body = app
        .graphql(
            "mutation($input: OrderInput!) {
                createOrder(input: $input) { id items juices { id } total status }
            }",
            json!({
                "input": { "customerName": "Test Customer", "items": ["1", "1", "nope"] }
            }),
        )
        .await;

    let order = &body["data"]["createOrder"];
    assert_eq!(order["id"], "3");
    assert_eq!(order["items"], json!(["1", "1", "nope"]));
    assert_eq!(order["juices"], json!([{ "id": "1" }, { "id": "1" }]));
    assert_eq!(order["total"], 9.98);
    assert_eq!(order["status"], "pending");
}

#[tokio::test]
async fn test_update_order_status_mutation() {
    let app = TestApp::new();

    let body = app
        .graphql(
            r#"mutation { updateOrderStatus(id: "2", status: "processing") { id status } }"#,
            Value::Null,
        )
        .await;
    assert_eq!(body["data"]["updateOrderStatus"]["status"], "processing");

    let body = app
        .graphql(
            r#"mutation { updateOrderStatus(id: "9", status: "shipped") { id } }"#,
            Value::Null,
        )
        .await;
    assert_eq!(first_error(&body), "Order not found");
}

// ============================================================================
// Subscriptions
// ============================================================================

/// Keep running `mutation` until aborted, so the subscription sees at least
/// one event no matter when its receiver is registered.
fn spawn_repeating(app: &TestApp, mutation: &'static str) -> tokio::task::JoinHandle<()> {
    let schema = app.state.schema().clone();
    tokio::spawn(async move {
        for _ in 0..100 {
            let response = schema.execute(mutation).await;
            assert!(response.errors.is_empty());
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    })
}

#[tokio::test]
async fn test_juice_added_subscription() {
    let app = TestApp::new();
    let mut stream = app
        .state
        .schema()
        .execute_stream("subscription { juiceAdded { name category } }");

    let writer = spawn_repeating(
        &app,
        r#"mutation {
            createJuice(input: { name: "Kiwi Cooler", price: 4.25, category: "Smoothie" }) { id }
        }"#,
    );

    let response = tokio::time::timeout(Duration::from_secs(5), stream.next())
        .await
        .unwrap()
        .unwrap();
    writer.abort();

    assert!(response.errors.is_empty());
    let data = response.data.into_json().unwrap();
    assert_eq!(data["juiceAdded"]["name"], "Kiwi Cooler");
    assert_eq!(data["juiceAdded"]["category"], "Smoothie");
}

#[tokio::test]
async fn test_order_created_subscription_ignores_juice_events() {
    let app = TestApp::new();
    let mut stream = app
        .state
        .schema()
        .execute_stream("subscription { orderCreated { customerName total } }");

    let juices = spawn_repeating(
        &app,
        r#"mutation { createJuice(input: { name: "Noise", price: 1.0 }) { id } }"#,
    );
    let orders = spawn_repeating(
        &app,
        r#"mutation { createOrder(input: { customerName: "Subscriber", items: ["2"] }) { id } }"#,
    );

    let response = tokio::time::timeout(Duration::from_secs(5), stream.next())
        .await
        .unwrap()
        .unwrap();
    juices.abort();
    orders.abort();

    let data = response.data.into_json().unwrap();
    assert_eq!(data["orderCreated"]["customerName"], "Subscriber");
    assert_eq!(data["orderCreated"]["total"], 5.99);
}
