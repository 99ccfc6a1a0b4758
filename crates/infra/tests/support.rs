use std::time::Duration;

use serde_json::{json, Value};
use wellpulse_domain::ApiConfig;
use wellpulse_infra::observability::init_test_tracing;
use wellpulse_infra::ApiClient;
use wiremock::{MockServer, Request, ResponseTemplate};

/// Cookie the mock backend issues on a successful renewal.
pub const FRESH_ACCESS: &str = "fresh";

/// Delay on the renewal endpoint so concurrent 401s overlap with it.
pub const RENEWAL_DELAY: Duration = Duration::from_millis(300);

/// Client pointed at the mock server with default timeouts.
pub fn client_for(server: &MockServer) -> ApiClient {
    init_test_tracing();
    ApiClient::builder().config(ApiConfig::with_base_url(server.uri())).build().unwrap()
}

/// 200 response with a success envelope around `data`.
pub fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"ok": true, "data": data, "error": null}))
}

/// Error response with a failure envelope.
pub fn failure(status: u16, code: &str, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "ok": false,
        "data": null,
        "error": {"code": code, "message": message}
    }))
}

pub fn unauthorized() -> ResponseTemplate {
    failure(401, "unauthorized", "Not authenticated")
}

/// Renewal response that rotates the access cookie.
pub fn renewed() -> ResponseTemplate {
    ok(json!({"message": "Token refreshed"}))
        .insert_header("set-cookie", format!("access_token={FRESH_ACCESS}; Path=/; HttpOnly"))
        .set_delay(RENEWAL_DELAY)
}

/// Matches requests carrying `name=value` in their cookie header.
pub fn has_cookie(
    name: &'static str,
    value: &'static str,
) -> impl Fn(&Request) -> bool + Send + Sync + 'static {
    move |request: &Request| {
        request
            .headers
            .get("cookie")
            .and_then(|header| header.to_str().ok())
            .is_some_and(|cookies| {
                cookies.split(';').any(|pair| pair.trim() == format!("{name}={value}"))
            })
    }
}

pub fn user_json(id: &str, email: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "full_name": "Ana Silva",
        "role": "user",
        "created_at": "2025-03-01T08:30:00",
        "updated_at": "2025-03-01T08:30:00",
        "last_login": null
    })
}

pub fn checkin_json(id: &str, mood: u8) -> Value {
    json!({
        "id": id,
        "user_id": "u1",
        "mood": mood,
        "sleep_hours": 7.5,
        "notes": "",
        "created_at": "2025-03-01T08:30:00"
    })
}

pub fn settings_json() -> Value {
    json!({
        "id": "s1",
        "user_id": "u1",
        "preferences": {"theme": "dark", "language": "en", "timezone": "UTC"}
    })
}

pub fn dashboard_json() -> Value {
    json!({
        "avg_mood": 6.5,
        "avg_sleep": 7.2,
        "checkin_streak": 4,
        "open_alerts": 1,
        "mood_trend": [],
        "sleep_trend": [],
        "stress_distribution": [],
        "recent_checkins": []
    })
}
