#![allow(dead_code)]

use postbook::environment::types::{Post, Profile};
use postbook::{App, Config, Environment};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

/// A logged in app talking to a fresh mock server
pub async fn setup() -> (MockServer, App) {
    let server = MockServer::start().await;
    let environment = Environment::new(Config::new(&server.uri()).expect("valid mock url"));
    environment.session.set(TOKEN.to_string());
    (server, App::new(environment))
}

pub fn post_json(id: i64, title: &str, liked: &[i64]) -> Value {
    json!({
        "id": id,
        "title": title,
        "userPost": 1,
        "created_on": "2021-05-01",
        "img": null,
        "liked": liked,
    })
}

pub fn post(id: i64, title: &str, liked: &[i64]) -> Post {
    serde_json::from_value(post_json(id, title, liked)).expect("valid post")
}

pub fn profile_json(id: i64, nick_name: &str) -> Value {
    json!({
        "id": id,
        "nickName": nick_name,
        "userProfile": id * 10,
        "created_on": "2021-05-01",
        "img": null,
    })
}

pub fn profile(id: i64, nick_name: &str) -> Profile {
    serde_json::from_value(profile_json(id, nick_name)).expect("valid profile")
}

/// Values of all multipart text fields called `name`, in order
pub fn form_fields(body: &[u8], name: &str) -> Vec<String> {
    let body = String::from_utf8_lossy(body);
    let marker = format!("name=\"{name}\"\r\n\r\n");
    body.split(&marker)
        .skip(1)
        .filter_map(|rest| rest.split("\r\n").next())
        .map(str::to_string)
        .collect()
}
