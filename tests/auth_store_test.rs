//! Integration tests for login, registration and profiles.

mod common;

use common::{form_fields, profile, profile_json, setup, TOKEN};
use postbook::components::auth::{AuthAction, AuthState};
use postbook::environment::types::{Attachment, Credentials, NewProfile, ProfileUpdate};
use postbook::{App, Config, Environment, Error};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> Credentials {
    Credentials {
        email: "anna@example.com".to_string(),
        password: "secret".to_string(),
    }
}

#[tokio::test]
async fn test_login_persists_token_for_later_requests() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::new(&server.uri())
        .unwrap()
        .with_data_dir(temp_dir.path());
    let app = App::new(Environment::restore(config.clone()).unwrap());
    assert!(!app.environment().session.is_authenticated());

    Mock::given(method("POST"))
        .and(path("/authen/jwt/create"))
        .and(body_json(json!({ "email": "anna@example.com", "password": "secret" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "refresh": "r", "access": "fresh" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/profile/"))
        .and(header("Authorization", "JWT fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([profile_json(1, "anna")])))
        .expect(1)
        .mount(&server)
        .await;

    app.auth.dispatch(AuthAction::Login(credentials())).await.unwrap();
    app.auth.dispatch(AuthAction::GetProfiles).await.unwrap();
    assert_eq!(
        app.auth.with(|s| s.profiles().clone()),
        im::vector![profile(1, "anna")]
    );

    // the token request itself is anonymous
    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));

    let restored = Environment::restore(config.clone()).unwrap();
    assert_eq!(restored.session.token().as_deref(), Some("fresh"));

    app.auth.dispatch(AuthAction::Logout).await.unwrap();
    let restored = Environment::restore(config).unwrap();
    assert!(!restored.session.is_authenticated());
}

#[tokio::test]
async fn test_failed_login_leaves_session_empty() {
    let server = MockServer::start().await;
    let app = App::new(Environment::new(Config::new(&server.uri()).unwrap()));
    Mock::given(method("POST"))
        .and(path("/authen/jwt/create"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "nope" })))
        .mount(&server)
        .await;

    let result = app.sign_in(credentials()).await;

    assert!(matches!(
        result,
        Err(Error::Status {
            endpoint: "token_issue",
            status: 401,
            ..
        })
    ));
    assert!(!app.environment().session.is_authenticated());
    // the loading flag is reset, the sign in modal stays open
    assert_eq!(app.auth.state(), AuthState::default());
}

#[tokio::test]
async fn test_register_does_not_touch_state() {
    let (server, app) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/register/"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "id": 4, "email": "anna@example.com" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    app.auth.dispatch(AuthAction::Register(credentials())).await.unwrap();

    assert_eq!(app.auth.state(), AuthState::default());
    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_my_profile_takes_first_element() {
    let (server, app) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/myprofile/"))
        .and(header("Authorization", format!("JWT {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([profile_json(2, "bob")])))
        .expect(1)
        .mount(&server)
        .await;

    app.auth.dispatch(AuthAction::GetMyProfile).await.unwrap();

    assert_eq!(app.auth.with(|s| s.my_profile().clone()), profile(2, "bob"));
}

#[tokio::test]
async fn test_my_profile_empty_collection_is_error() {
    let (server, app) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/myprofile/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let result = app.auth.dispatch(AuthAction::GetMyProfile).await;

    assert_eq!(
        result,
        Err(Error::EmptyCollection {
            endpoint: "my_profile"
        })
    );
    assert_eq!(app.auth.state(), AuthState::default());
}

#[tokio::test]
async fn test_create_profile_sends_nickname() {
    let (server, app) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/profile/"))
        .and(body_json(json!({ "nickName": "dan" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(profile_json(4, "dan")))
        .expect(1)
        .mount(&server)
        .await;

    app.auth
        .dispatch(AuthAction::CreateProfile(NewProfile {
            nick_name: "dan".to_string(),
        }))
        .await
        .unwrap();

    let state = app.auth.state();
    assert_eq!(state.my_profile(), &profile(4, "dan"));
    assert_eq!(state.profiles(), &im::vector![profile(4, "dan")]);
}

#[tokio::test]
async fn test_update_profile_replaces_singleton_and_entry() {
    let (server, app) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/profile/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            profile_json(1, "ann"),
            profile_json(2, "bob"),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/myprofile/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([profile_json(2, "bob")])))
        .mount(&server)
        .await;
    let mut updated = profile_json(2, "robert");
    updated["img"] = json!("http://localhost/media/me.png");
    Mock::given(method("PUT"))
        .and(path("/api/profile/2/"))
        .and(body_string_contains("filename=\"me.png\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated.clone()))
        .expect(1)
        .mount(&server)
        .await;

    load_profiles(&app).await;
    app.auth
        .dispatch(AuthAction::EditNickname("robert".to_string()))
        .await
        .unwrap();
    let nick_name = app.auth.with(|s| s.my_profile().nick_name.clone());
    app.auth
        .dispatch(AuthAction::UpdateProfile(ProfileUpdate {
            id: 2,
            nick_name,
            img: Some(Attachment::new("me.png", vec![1, 2, 3])),
        }))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        form_fields(&requests.last().unwrap().body, "nickName"),
        vec!["robert"]
    );

    let updated: postbook::environment::types::Profile = serde_json::from_value(updated).unwrap();
    let state = app.auth.state();
    assert_eq!(state.my_profile(), &updated);
    assert_eq!(state.profiles(), &im::vector![profile(1, "ann"), updated]);
}

async fn load_profiles(app: &App) {
    app.auth.dispatch(AuthAction::GetProfiles).await.unwrap();
    app.auth.dispatch(AuthAction::GetMyProfile).await.unwrap();
}
