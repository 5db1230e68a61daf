//! End-to-end HTTP tests: router + route guard + handlers over a bound port.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use roomkeep_gateway::{app_state::AppState, config, router};

const CFG: &str = r#"
version: 1
sessions:
  - { token: "admin-dev", user_id: "u-admin", role: admin }
  - { token: "support-dev", user_id: "u-support", role: support }
  - { token: "user-dev", user_id: "u-tenant", role: user }
  - { token: "other-dev", user_id: "u-other", role: user }
"#;

struct Gateway {
    base: String,
    client: Client,
}

impl Gateway {
    async fn start() -> Self {
        let state = AppState::new(config::load_from_str(CFG).unwrap()).unwrap();
        let app = router::build_router(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { base: format!("http://{addr}"), client: Client::new() }
    }

    async fn get(&self, token: Option<&str>, path: &str) -> (StatusCode, Value) {
        let mut req = self.client.get(format!("{}{path}", self.base));
        if let Some(t) = token {
            req = req.bearer_auth(t);
        }
        read(req.send().await.unwrap()).await
    }

    async fn send(
        &self,
        method: &str,
        token: &str,
        path: &str,
        body: Value,
    ) -> (StatusCode, Value) {
        let url = format!("{}{path}", self.base);
        let req = match method {
            "POST" => self.client.post(url),
            "PUT" => self.client.put(url),
            other => panic!("unsupported method {other}"),
        };
        read(req.bearer_auth(token).json(&body).send().await.unwrap()).await
    }

    async fn seed_room(&self) -> String {
        let (status, body) = self.send("POST", "admin-dev", "/rooms", room_body()).await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }
}

async fn read(resp: reqwest::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let text = resp.text().await.unwrap();
    let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
    (status, body)
}

fn room_body() -> Value {
    json!({
        "name": "A-101",
        "water_rate": 18,
        "electric_rate": 7,
        "rate_daily": 500,
        "rate_monthly": 4000
    })
}

fn bill_body(rent_due_day: Option<u32>) -> Value {
    json!({
        "room": { "water_rate": 18, "electric_rate": 7, "rate_daily": 500, "rate_monthly": 4000 },
        "previous": { "water_meter": 100, "electric_meter": 500 },
        "current": { "water_meter": 110, "electric_meter": 550 },
        "booking": { "booking_type": "monthly" },
        "billing_date": "2024-05-06",
        "rent_due_day": rent_due_day
    })
}

fn assert_error(body: &Value, code: &str) {
    assert_eq!(body["error"], code, "body={body}");
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()), "body={body}");
}

#[tokio::test]
async fn public_and_anonymous_access() {
    let gw = Gateway::start().await;

    let (status, body) = gw.get(None, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");

    let (status, body) = gw.get(None, "/rooms").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error(&body, "UNAUTHENTICATED");

    let (status, body) = gw.get(Some("forged"), "/session").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error(&body, "UNAUTHENTICATED");
}

#[tokio::test]
async fn session_describes_role() {
    let gw = Gateway::start().await;

    let (status, body) = gw.get(Some("user-dev"), "/session").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], "u-tenant");
    assert_eq!(body["role"], "user");
    assert_eq!(body["level"], 1);
    assert_eq!(body["redirect"], "/dashboard");
    assert!(body["permissions"].as_array().unwrap().contains(&json!("rooms:read")));
}

#[tokio::test]
async fn guard_and_handler_permissions() {
    let gw = Gateway::start().await;

    // Route table denies support on admin paths.
    let (status, body) = gw.get(Some("support-dev"), "/admin/users").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error(&body, "FORBIDDEN");

    // Route table allows support on /rooms, the handler denies create.
    let (status, body) = gw.send("POST", "support-dev", "/rooms", room_body()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error(&body, "FORBIDDEN");

    let room_id = gw.seed_room().await;
    let (status, body) = gw.get(Some("user-dev"), &format!("/rooms/{room_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "A-101");

    let (status, _) = gw.get(Some("user-dev"), &format!("/meters/{room_id}")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = gw.get(Some("admin-dev"), "/admin/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn ad_hoc_billing() {
    let gw = Gateway::start().await;

    let (status, body) = gw.send("POST", "user-dev", "/billing/calculate", bill_body(None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error(&body, "FORBIDDEN");

    let (status, body) =
        gw.send("POST", "support-dev", "/billing/calculate", bill_body(None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4530.0);
    assert_eq!(body["waterUsage"], 10.0);

    let (status, body) =
        gw.send("POST", "support-dev", "/billing/calculate", bill_body(Some(5))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lateFee"], 100.0);

    for day in [0, 40] {
        let (status, body) =
            gw.send("POST", "support-dev", "/billing/calculate", bill_body(Some(day))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "day={day}");
        assert_error(&body, "BAD_REQUEST");
    }
}

#[tokio::test]
async fn stored_booking_billing_checks_due_day() {
    let gw = Gateway::start().await;
    let room_id = gw.seed_room().await;

    for (on, water, electric) in [("2024-04-01", 100, 500), ("2024-05-01", 110, 550)] {
        let reading =
            json!({ "recorded_on": on, "water_meter": water, "electric_meter": electric });
        let path = format!("/meters/{room_id}");
        let (status, _) = gw.send("POST", "support-dev", &path, reading).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let booking = json!({ "room_id": room_id, "booking_type": "monthly" });
    let (status, body) = gw.send("POST", "user-dev", "/bookings", booking).await;
    assert_eq!(status, StatusCode::CREATED);
    let path = format!("/billing/bookings/{}", body["id"].as_str().unwrap());

    let req = json!({ "billing_date": "2024-05-02", "rent_due_day": 0 });
    let (status, body) = gw.send("POST", "support-dev", &path, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "BAD_REQUEST");

    let req = json!({ "billing_date": "2024-05-02" });
    let (status, body) = gw.send("POST", "support-dev", &path, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["total"], 4530.0);
}

#[tokio::test]
async fn users_only_see_own_bookings() {
    let gw = Gateway::start().await;
    let room_id = gw.seed_room().await;

    // A user cannot book on someone else's behalf.
    let mine = json!({ "room_id": room_id, "booking_type": "daily", "tenant_user_id": "u-other" });
    let (status, body) = gw.send("POST", "user-dev", "/bookings", mine).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["tenant_user_id"], "u-tenant");

    let theirs =
        json!({ "room_id": room_id, "booking_type": "monthly", "tenant_user_id": "u-other" });
    let (status, body) = gw.send("POST", "support-dev", "/bookings", theirs).await;
    assert_eq!(status, StatusCode::CREATED);
    let theirs_id = body["id"].as_str().unwrap().to_string();

    let (status, body) = gw.get(Some("user-dev"), "/bookings").await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["tenant_user_id"], "u-tenant");

    let (status, body) = gw.get(Some("user-dev"), &format!("/bookings/{theirs_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "NOT_FOUND");

    let (status, body) = gw.get(Some("support-dev"), "/bookings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn role_change_over_http() {
    let gw = Gateway::start().await;

    let (status, body) =
        gw.send("PUT", "admin-dev", "/admin/users/u-admin/role", json!({ "role": "user" })).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error(&body, "FORBIDDEN");

    let promote = json!({ "role": "support" });
    let (status, body) = gw.send("PUT", "admin-dev", "/admin/users/u-tenant/role", promote).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["previous"], "user");
    assert_eq!(body["role"], "support");

    // The promoted session now clears the staff-only route table entry.
    let (status, body) = gw.get(Some("user-dev"), "/meters/room-404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "NOT_FOUND");
}
