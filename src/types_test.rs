use super::*;

fn profile_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "username": "alice",
        "email": "alice@example.com",
        "full_name": "Alice Liddell",
        "created_at": "2024-03-01T10:00:00",
        "updated_at": "2024-03-02T11:30:00"
    })
}

#[test]
fn user_without_avatar_deserializes() {
    let user: User = serde_json::from_value(profile_json()).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.username, "alice");
    assert_eq!(user.avatar, None);
}

#[test]
fn user_with_avatar_deserializes() {
    let mut json = profile_json();
    json["avatar"] = serde_json::json!("https://cdn.example.com/a.png");
    let user: User = serde_json::from_value(json).unwrap();
    assert_eq!(user.avatar.as_deref(), Some("https://cdn.example.com/a.png"));
}

#[test]
fn user_serialization_omits_missing_avatar() {
    let user: User = serde_json::from_value(profile_json()).unwrap();
    let out = serde_json::to_value(&user).unwrap();
    assert!(out.get("avatar").is_none());
}

#[test]
fn envelope_unwraps_login_response() {
    let json = serde_json::json!({
        "code": 200,
        "message": "ok",
        "data": { "access_token": "tok-1", "token_type": "bearer" }
    });
    let env: Envelope<LoginResponse> = serde_json::from_value(json).unwrap();
    assert_eq!(env.code, 200);
    assert_eq!(env.data.access_token, "tok-1");
    assert_eq!(env.data.token_type, "bearer");
}

#[test]
fn envelope_defaults_code_and_message() {
    let json = serde_json::json!({ "data": { "access_token": "t", "token_type": "bearer" } });
    let env: Envelope<LoginResponse> = serde_json::from_value(json).unwrap();
    assert_eq!(env.code, 0);
    assert!(env.message.is_empty());
}

#[test]
fn envelope_requires_data() {
    let json = serde_json::json!({ "code": 0, "message": "ok" });
    assert!(serde_json::from_value::<Envelope<User>>(json).is_err());
}

#[test]
fn login_request_serializes_credentials() {
    let body = serde_json::to_value(LoginRequest { username: "u", password: "p" }).unwrap();
    assert_eq!(body, serde_json::json!({ "username": "u", "password": "p" }));
}

#[test]
fn register_request_uses_backend_field_names() {
    let req = RegisterRequest {
        username: "bob".into(),
        password: "hunter2".into(),
        email: "bob@example.com".into(),
        full_name: "Bob Builder".into(),
    };
    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(body["full_name"], "Bob Builder");
    assert_eq!(body.as_object().unwrap().len(), 4);
}
