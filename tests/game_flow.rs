mod support;

use reqwest::StatusCode;
use serde_json::{Value, json};

async fn new_game(base_url: &str, width: i64, height: i64) -> Value {
    let res = reqwest::get(format!("{base_url}/newGame?w={width}&h={height}"))
        .await
        .expect("request should succeed");
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.expect("expected json body")
}

async fn validate(base_url: &str, body: &Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{base_url}/validateGame"))
        .json(body)
        .send()
        .await
        .expect("request should succeed")
}

fn right() -> Value {
    json!({ "velX": 1, "velY": 0 })
}

fn down() -> Value {
    json!({ "velX": 0, "velY": 1 })
}

#[tokio::test]
async fn test_new_game_returns_fresh_state() {
    let base_url = support::spawn_server(vec![9, 4]).await;

    let game = new_game(&base_url, 12, 7).await;

    assert_eq!(game["width"], 12);
    assert_eq!(game["height"], 7);
    assert_eq!(game["score"], 0);
    assert_eq!(game["fruit"], json!({ "x": 9, "y": 4 }));
    assert_eq!(game["snake"], json!({ "x": 0, "y": 0, "velX": 1, "velY": 0 }));
    assert!(uuid::Uuid::parse_str(game["gameId"].as_str().expect("game id")).is_ok());
}

#[tokio::test]
async fn test_new_game_rejects_bad_dimensions() {
    let base_url = support::spawn_server(vec![0]).await;

    let res = reqwest::get(format!("{base_url}/newGame?w=abc&h=5"))
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_round_trip_reaches_fruit_and_relocates_it() {
    // New game draws (2, 1). The replay draws (2, 1) again, which is the
    // eaten cell, so the fruit moves on to (7, 5).
    let base_url = support::spawn_server(vec![2, 1, 7, 5]).await;
    let mut game = new_game(&base_url, 10, 10).await;
    assert_eq!(game["fruit"], json!({ "x": 2, "y": 1 }));
    game["ticks"] = json!([right(), right(), down()]);

    let res = validate(&base_url, &game).await;

    assert_eq!(res.status(), StatusCode::OK);
    let next: Value = res.json().await.expect("expected json body");
    assert_eq!(
        next,
        json!({
            "gameId": game["gameId"],
            "width": 10,
            "height": 10,
            "score": 1,
            "fruit": { "x": 7, "y": 5 },
            "snake": { "x": 2, "y": 1, "velX": 0, "velY": 1 }
        })
    );
}

#[tokio::test]
async fn test_second_round_builds_on_returned_state() {
    let base_url = support::spawn_server(vec![1, 0, 1, 2]).await;
    let mut game = new_game(&base_url, 5, 5).await;
    game["ticks"] = json!([right()]);

    let res = validate(&base_url, &game).await;
    assert_eq!(res.status(), StatusCode::OK);
    let mut next: Value = res.json().await.expect("expected json body");
    assert_eq!(next["fruit"], json!({ "x": 1, "y": 2 }));

    next["ticks"] = json!([down(), down()]);
    let res = validate(&base_url, &next).await;

    // The second replay draws (1, 0) first, which differs from (1, 2).
    assert_eq!(res.status(), StatusCode::OK);
    let last: Value = res.json().await.expect("expected json body");
    assert_eq!(last["score"], 2);
    assert_eq!(last["snake"], json!({ "x": 1, "y": 2, "velX": 0, "velY": 1 }));
    assert_eq!(last["fruit"], json!({ "x": 1, "y": 0 }));
}

#[tokio::test]
async fn test_replay_outcomes_map_to_status_codes() {
    let base_url = support::spawn_server(vec![0]).await;
    let base = json!({
        "gameId": "flow-test",
        "width": 10,
        "height": 10,
        "score": 0,
        "fruit": { "x": 1, "y": 1 },
        "snake": { "x": 0, "y": 0, "velX": 1, "velY": 0 }
    });

    let cases = [
        (json!([right()]), StatusCode::NOT_FOUND),
        (json!([{ "velX": 0, "velY": -1 }]), StatusCode::IM_A_TEAPOT),
        (json!([{ "velX": 1, "velY": 1 }]), StatusCode::IM_A_TEAPOT),
        (json!([{ "velX": i64::MAX, "velY": 0 }]), StatusCode::IM_A_TEAPOT),
        (json!([]), StatusCode::BAD_REQUEST),
    ];

    for (ticks, expected) in cases {
        let mut body = base.clone();
        body["ticks"] = ticks.clone();
        let res = validate(&base_url, &body).await;
        assert_eq!(res.status(), expected, "ticks {ticks}");
    }
}

#[tokio::test]
async fn test_wrong_method_returns_405() {
    let base_url = support::spawn_server(vec![0]).await;

    let res = reqwest::Client::new()
        .delete(format!("{base_url}/validateGame"))
        .send()
        .await
        .expect("request should succeed");

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = res.json().await.expect("expected json body");
    assert_eq!(body["message"], "Method not allowed.");
}
