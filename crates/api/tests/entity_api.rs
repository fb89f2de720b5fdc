//! HTTP-level CRUD tests for destinations, activities, accommodations and
//! trips, including the cascade and restrict behaviour seen through the API.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_destination, delete, destination_body, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_list_contains_destination(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/destinations", &destination_body("Paris")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["name"], "Paris");
    assert_eq!(created["statusId"], 1);
    assert!(created["createdAt"].is_string());

    let response = get(app, "/api/destinations").await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0], created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_update_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);
    let id = create_destination(&app, "Paris").await;

    let response = put_json(
        app.clone(),
        &format!("/api/destinations/{id}"),
        &json!({"name": "Paris, France", "priorityId": 3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, &format!("/api/destinations/{id}")).await).await;
    assert_eq!(json["name"], "Paris, France");
    assert_eq!(json["priorityId"], 3);
    assert_eq!(json["country"], "France");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_entity_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/trips/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");

    let response = put_json(app.clone(), "/api/activities/999", &json!({"name": "X"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(app, "/api/accommodations/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_ids_are_rejected_before_lookup(pool: PgPool) {
    let app = common::build_test_app(pool);

    for uri in ["/api/destinations/0", "/api/destinations/-1", "/api/destinations/abc"] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body_json(response).await["code"], "INVALID_ID");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn paris_eiffel_tower_scenario(pool: PgPool) {
    let app = common::build_test_app(pool);
    let paris = create_destination(&app, "Paris").await;

    let response = post_json(
        app.clone(),
        "/api/activities",
        &json!({
            "name": "Eiffel Tower",
            "description": "Iconic tower",
            "category": "sightseeing",
            "destinationId": paris,
            "statusId": 1,
            "priorityId": 3
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let tower = body_json(response).await;
    assert_eq!(tower["destinationId"], paris);

    let response = get(app.clone(), &format!("/api/destinations/{paris}/activities")).await;
    let activities = body_json(response).await;
    assert_eq!(activities.as_array().unwrap().len(), 1);
    assert_eq!(activities[0]["name"], "Eiffel Tower");

    // Deleting the destination removes its activities.
    let response = delete(app.clone(), &format!("/api/destinations/{paris}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), &format!("/api/activities/{}", tower["id"])).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let all = body_json(get(app, "/api/activities").await).await;
    assert!(all.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn accommodation_uses_type_on_the_wire(pool: PgPool) {
    let app = common::build_test_app(pool);
    let paris = create_destination(&app, "Paris").await;

    let response = post_json(
        app.clone(),
        "/api/accommodations",
        &json!({
            "name": "Hotel Lumiere",
            "type": "hotel",
            "destinationId": paris,
            "image": "",
            "statusId": 3,
            "priorityId": 2
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["type"], "hotel");

    let stays = body_json(get(app, &format!("/api/destinations/{paris}/accommodations")).await).await;
    assert_eq!(stays.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn trip_destination_links(pool: PgPool) {
    let app = common::build_test_app(pool);
    let paris = create_destination(&app, "Paris").await;

    let response = post_json(
        app.clone(),
        "/api/trips",
        &json!({
            "name": "Spring in Paris",
            "startDate": "2027-04-01",
            "endDate": "2027-04-08",
            "statusId": 2,
            "priorityId": 3
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let trip = body_json(response).await["id"].as_i64().unwrap();

    let uri = format!("/api/trips/{trip}/destinations");
    let response = post_json(app.clone(), &uri, &json!({"destinationId": paris})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    // Linking twice is harmless.
    let response = post_json(app.clone(), &uri, &json!({"destinationId": paris})).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let linked = body_json(get(app.clone(), &uri).await).await;
    assert_eq!(linked.as_array().unwrap().len(), 1);
    assert_eq!(linked[0]["name"], "Paris");

    let response = delete(app.clone(), &format!("{uri}/{paris}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = delete(app.clone(), &format!("{uri}/{paris}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_json(app, &uri, &json!({"destinationId": 999})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["fieldErrors"]["destinationId"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn referenced_status_delete_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool);
    let paris = create_destination(&app, "Paris").await;

    let response = delete(app.clone(), "/api/travel-statuses/1").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    let statuses = body_json(get(app.clone(), "/api/travel-statuses").await).await;
    assert_eq!(statuses.as_array().unwrap().len(), 6);
    let dest = body_json(get(app, &format!("/api/destinations/{paris}")).await).await;
    assert_eq!(dest["statusId"], 1);
}
