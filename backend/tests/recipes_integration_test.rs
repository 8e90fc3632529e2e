//! Integration tests for recipe endpoints

mod common;

use axum::http::StatusCode;
use lifestyle_hub_backend::ai::GeminiClient;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn recipe(name: &str, cuisine: &str, vegetarian: bool, ingredients: &str) -> serde_json::Value {
    json!({
        "recipe_name": name,
        "cuisine_type": cuisine,
        "is_vegetarian": vegetarian,
        "prep_time_minutes": 10,
        "cook_time_minutes": 25,
        "ingredients": ingredients
    })
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_recipe_derives_total_time() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let created = app
        .create_recipe(&user, recipe("Margherita", "italian", true, "dough, tomato, mozzarella"))
        .await;

    assert_eq!(created["cuisine_type"], "Italian");
    assert_eq!(created["total_cooking_time"], 35);
    assert_eq!(created["is_vegetarian"], true);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_and_delete_recipe() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = Some(user.access_token.as_str());

    let created = app
        .create_recipe(&user, recipe("Tacos", "Mexican", false, "tortillas, beef"))
        .await;
    let path = format!("/recipes/{}", created["id"].as_str().unwrap());

    let (status, updated) = app
        .put(&path, &json!({ "cook_time_minutes": 5, "is_vegetarian": true }), token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["total_cooking_time"], 15);
    assert_eq!(updated["recipe_name"], "Tacos");

    let (status, _) = app.put(&path, &json!({ "cuisine_type": "Klingon" }), token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.delete(&path, token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Recipe deleted successfully");

    let (status, _) = app.delete(&path, token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_recipes_are_private_to_owner() {
    let app = common::TestApp::new().await;
    let owner = app.create_test_user().await;
    let intruder = app.create_test_user().await;

    let created = app
        .create_recipe(&owner, recipe("Dal", "Indian", true, "lentils, cumin"))
        .await;
    let path = format!("/recipes/{}", created["id"].as_str().unwrap());

    let (status, _) = app.get(&path, Some(&intruder.access_token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post(
            "/recipes/shopping-list",
            &json!({ "recipe_ids": [created["id"]] }),
            Some(&intruder.access_token),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_recipes_filters_and_default_page_size() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = Some(user.access_token.as_str());

    for i in 0..4 {
        app.create_recipe(&user, recipe(&format!("Pasta {}", i), "Italian", true, "pasta"))
            .await;
    }
    for i in 0..3 {
        app.create_recipe(&user, recipe(&format!("Curry {}", i), "Indian", false, "rice"))
            .await;
    }

    let (status, page) = app.get("/recipes", token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["per_page"], 5);
    assert_eq!(page["recipes"].as_array().unwrap().len(), 5);
    assert_eq!(page["total"], 7);
    assert_eq!(page["pages"], 2);

    let (_, italian) = app.get("/recipes?cuisine_type=italian", token).await;
    assert_eq!(italian["total"], 4);

    let (_, meat) = app.get("/recipes?is_vegetarian=FALSE", token).await;
    assert_eq!(meat["total"], 3);

    // Non-boolean flag is ignored
    let (_, all) = app.get("/recipes?is_vegetarian=maybe", token).await;
    assert_eq!(all["total"], 7);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_shopping_list_fallback() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let a = app
        .create_recipe(&user, recipe("Salad", "Other", true, "Tomatoes, cucumber"))
        .await;
    let b = app
        .create_recipe(&user, recipe("Salsa", "Mexican", true, "tomatoes\nonion\nlime"))
        .await;

    let (status, list) = app
        .post(
            "/recipes/shopping-list",
            &json!({ "recipe_ids": [a["id"], b["id"]] }),
            Some(&user.access_token),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["source"], "fallback");
    let names: Vec<&str> = list["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 4);
    assert_eq!(
        names.iter().filter(|n| n.eq_ignore_ascii_case("tomatoes")).count(),
        1
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_shopping_list_from_provider() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{
                "text": "Sure!\n```json\n{\"items\": [{\"name\": \"Lentils\", \"quantity\": \"500 g\"}], \"notes\": \"Check the pantry\"}\n```"
            }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        GeminiClient::new(&server.uri(), "gemini-1.5-flash", "test-key", Duration::from_secs(5))
            .unwrap();
    let app = common::TestApp::with_ai(Arc::new(client)).await;
    let user = app.create_test_user().await;

    let dal = app
        .create_recipe(&user, recipe("Dal", "Indian", true, "lentils, cumin"))
        .await;

    let (status, list) = app
        .post(
            "/recipes/shopping-list",
            &json!({ "recipe_ids": [dal["id"]] }),
            Some(&user.access_token),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["source"], "ai");
    assert_eq!(list["items"][0]["quantity"], "500 g");
    assert_eq!(list["notes"], "Check the pantry");
}
