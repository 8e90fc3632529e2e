//! Integration tests for workout endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

fn cardio(minutes: i32, notes: &str) -> serde_json::Value {
    json!({
        "workout_type": "cardio",
        "duration_minutes": minutes,
        "intensity": 4,
        "notes": notes
    })
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_workout_derives_calories() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let workout = app
        .create_workout(
            &user,
            json!({ "workout_type": "STRENGTH", "duration_minutes": 30, "intensity": 3 }),
        )
        .await;

    assert_eq!(workout["workout_type"], "Strength");
    assert_eq!(workout["calories_burned"], 540);
    assert_eq!(workout["goal_achieved"], false);
    assert_eq!(workout["user_id"], user.id.as_str());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_workout_rejects_out_of_range_values() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    for body in [
        json!({ "workout_type": "Yoga", "duration_minutes": 0, "intensity": 3 }),
        json!({ "workout_type": "Yoga", "duration_minutes": 30, "intensity": 0 }),
        json!({ "workout_type": "Zumba", "duration_minutes": 30, "intensity": 3 }),
    ] {
        let (status, _) = app.post("/workouts", &body, Some(&user.access_token)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_get_update_delete_workout() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = Some(user.access_token.as_str());

    let created = app.create_workout(&user, cardio(20, "easy run")).await;
    let path = format!("/workouts/{}", created["id"].as_str().unwrap());

    let (status, fetched) = app.get(&path, token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["notes"], "easy run");

    // Partial update keeps untouched fields
    let (status, updated) = app
        .put(&path, &json!({ "intensity": 5, "goal_achieved": true }), token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["intensity"], 5);
    assert_eq!(updated["duration_minutes"], 20);
    assert_eq!(updated["notes"], "easy run");
    assert_eq!(updated["calories_burned"], 20 * 5 * 8);

    // Explicit null clears notes
    let (status, cleared) = app.put(&path, &json!({ "notes": null }), token).await;
    assert_eq!(status, StatusCode::OK);
    assert!(cleared["notes"].is_null());

    let (status, _) = app.delete(&path, token).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get(&path, token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_workouts_are_private_to_owner() {
    let app = common::TestApp::new().await;
    let owner = app.create_test_user().await;
    let intruder = app.create_test_user().await;

    let workout = app.create_workout(&owner, cardio(30, "mine")).await;
    let path = format!("/workouts/{}", workout["id"].as_str().unwrap());
    let token = Some(intruder.access_token.as_str());

    let (status, _) = app.get(&path, token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.put(&path, &json!({ "intensity": 1 }), token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&path, token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, page) = app.get("/workouts", token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 0);

    // Still intact for the owner
    let (status, fetched) = app.get(&path, Some(&owner.access_token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["intensity"], 4);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_workouts_pagination() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = Some(user.access_token.as_str());

    for i in 0..12 {
        app.create_workout(&user, cardio(10 + i, "interval")).await;
    }

    let (status, page) = app.get("/workouts?per_page=5", token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["workouts"].as_array().unwrap().len(), 5);
    assert_eq!(page["total"], 12);
    assert_eq!(page["pages"], 3);
    assert_eq!(page["current_page"], 1);
    assert_eq!(page["per_page"], 5);
    // Newest first
    assert_eq!(page["workouts"][0]["duration_minutes"], 21);

    let (_, last) = app.get("/workouts?per_page=5&page=3", token).await;
    assert_eq!(last["workouts"].as_array().unwrap().len(), 2);

    let (_, past_end) = app.get("/workouts?per_page=5&page=9", token).await;
    assert!(past_end["workouts"].as_array().unwrap().is_empty());
    assert_eq!(past_end["total"], 12);

    // Garbage falls back to defaults
    let (status, defaults) = app.get("/workouts?page=abc&per_page=-3", token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(defaults["current_page"], 1);
    assert_eq!(defaults["per_page"], 10);
    assert_eq!(defaults["pages"], 2);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_workouts_filters() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;
    let token = Some(user.access_token.as_str());

    app.create_workout(&user, cardio(30, "Hill Sprints")).await;
    app.create_workout(&user, cardio(30, "long ride")).await;
    app.create_workout(
        &user,
        json!({ "workout_type": "Yoga", "duration_minutes": 45, "intensity": 2, "notes": "hill yoga" }),
    )
    .await;

    let (_, by_type) = app.get("/workouts?workout_type=Cardio", token).await;
    assert_eq!(by_type["total"], 2);

    let (_, by_text) = app.get("/workouts?q=HILL", token).await;
    assert_eq!(by_text["total"], 2);

    let (_, both) = app.get("/workouts?workout_type=yoga&q=hill", token).await;
    assert_eq!(both["total"], 1);

    // Unknown type is ignored rather than rejected
    let (status, unknown) = app.get("/workouts?workout_type=zumba", token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unknown["total"], 3);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_suggestion_falls_back_without_ai() {
    let app = common::TestApp::new().await;
    let user = app.create_test_user().await;

    let (status, suggestion) = app
        .post(
            "/workouts/suggestion",
            &json!({ "workout_type": "strength" }),
            Some(&user.access_token),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(suggestion["source"], "fallback");
    assert_eq!(suggestion["title"], "Strength Session Suggestion");
    assert_eq!(suggestion["exercises"].as_array().unwrap().len(), 4);
}
