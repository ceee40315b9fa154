//! HTTP-level integration tests for the `/api/v1/pokemons` endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, get, get_auth, ids, patch_auth, post_json, seeded_app,
    seeded_store, ALICE, BOB,
};
use pokedex_db::store::CatalogStore;
use serde_json::json;

// ---------------------------------------------------------------------------
// Listing: authentication
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_requires_credentials() {
    let app = seeded_app().await;
    let response = get(app, "/api/v1/pokemons").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn list_rejects_bad_credentials() {
    for header in [
        "Bearer alice:wrong",
        "Bearer nobody:secret1",
        "Bearer alice",
        "Bearer alice:",
        "Basic alice:secret1",
        "Bearer alice:secret1:extra",
    ] {
        let app = seeded_app().await;
        let response = get_auth(app, "/api/v1/pokemons", header).await;
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{header:?} should be rejected"
        );
    }
}

// ---------------------------------------------------------------------------
// Listing: pagination and filters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_defaults_to_first_ten_in_id_order() {
    let app = seeded_app().await;
    let response = get_auth(app, "/api/v1/pokemons", ALICE).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(ids(&json), (1..=10).collect::<Vec<_>>());
}

#[tokio::test]
async fn second_page_of_five() {
    let app = seeded_app().await;
    let response = get_auth(app, "/api/v1/pokemons?page=2&limit=5", ALICE).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(&body_json(response).await), vec![6, 7, 8, 9, 10]);
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let app = seeded_app().await;
    let response = get_auth(app, "/api/v1/pokemons?page=9&limit=5", ALICE).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(ids(&body_json(response).await).is_empty());
}

#[tokio::test]
async fn largest_page_and_limit_are_an_empty_page() {
    let app = seeded_app().await;
    let response = get_auth(
        app,
        "/api/v1/pokemons?page=4294967295&limit=4294967295",
        ALICE,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn non_positive_or_garbage_paging_is_rejected() {
    for query in ["limit=0", "limit=-1", "page=0", "page=abc", "limit=2.5"] {
        let app = seeded_app().await;
        let response = get_auth(app, &format!("/api/v1/pokemons?{query}"), ALICE).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "{query} should be rejected"
        );
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn name_filter_is_case_insensitive_substring() {
    let app = seeded_app().await;
    let response = get_auth(app, "/api/v1/pokemons?name=BULB", ALICE).await;

    assert_eq!(ids(&body_json(response).await), vec![1, 11, 12]);
}

#[tokio::test]
async fn name_filter_treats_metacharacters_literally() {
    let app = seeded_app().await;
    let response = get_auth(app, "/api/v1/pokemons?name=r.%20m", ALICE).await;
    assert_eq!(ids(&body_json(response).await), vec![7]);

    let app = seeded_app().await;
    let response = get_auth(app, "/api/v1/pokemons?name=.*", ALICE).await;
    assert!(ids(&body_json(response).await).is_empty());
}

#[tokio::test]
async fn type_filter_matches_any_requested_type() {
    let app = seeded_app().await;
    let response = get_auth(
        app,
        "/api/v1/pokemons?types=Fire,%20Water&limit=20",
        ALICE,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(&body_json(response).await), vec![3, 4, 8, 9]);
}

#[tokio::test]
async fn unknown_type_is_rejected() {
    let app = seeded_app().await;
    let response = get_auth(app, "/api/v1/pokemons?types=Fire,Lava", ALICE).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blank_types_mean_no_filter() {
    let app = seeded_app().await;
    let response = get_auth(app, "/api/v1/pokemons?types=%20,&limit=20", ALICE).await;

    assert_eq!(ids(&body_json(response).await).len(), 12);
}

#[tokio::test]
async fn favorites_only_combines_with_type_filter() {
    let app = seeded_app().await;
    let response = get_auth(
        app,
        "/api/v1/pokemons?favoritesOnly=true&types=Grass",
        ALICE,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ids(&body_json(response).await), vec![2, 5]);
}

#[tokio::test]
async fn favorites_only_flag_is_case_insensitive() {
    let app = seeded_app().await;
    let response = get_auth(app, "/api/v1/pokemons?favoritesOnly=TRUE", ALICE).await;
    assert_eq!(ids(&body_json(response).await), vec![2, 5]);

    let app = seeded_app().await;
    let response = get_auth(app, "/api/v1/pokemons?favoritesOnly=1", ALICE).await;
    assert_eq!(ids(&body_json(response).await).len(), 10);
}

#[tokio::test]
async fn favorites_only_with_no_favorites_is_empty() {
    let app = seeded_app().await;
    let response = get_auth(app, "/api/v1/pokemons?favoritesOnly=true", BOB).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn favorites_only_follows_toggles() {
    let store = seeded_store().await;

    let response = patch_auth(
        build_test_app(store.clone()),
        "/api/v1/users/favorites/7",
        ALICE,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(
        build_test_app(store),
        "/api/v1/pokemons?favoritesOnly=true",
        ALICE,
    )
    .await;
    assert_eq!(ids(&body_json(response).await), vec![2, 5, 7]);
}

// ---------------------------------------------------------------------------
// Public reads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn types_are_distinct_and_sorted() {
    let app = seeded_app().await;
    let response = get(app, "/api/v1/pokemons/types").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!(["Bug", "Electric", "Fairy", "Fire", "Grass", "Poison", "Psychic", "Water"])
    );
}

#[tokio::test]
async fn get_by_id_returns_the_record() {
    let app = seeded_app().await;
    let response = get(app, "/api/v1/pokemons/id/6").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Pikachu");
    assert_eq!(json["types"], json!(["Electric"]));
    assert_eq!(json["maxCP"], 100);
}

#[tokio::test]
async fn get_by_unknown_id_is_404() {
    let app = seeded_app().await;
    let response = get(app, "/api/v1/pokemons/id/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Pokemon with id 999 not found");
}

#[tokio::test]
async fn get_by_non_numeric_id_is_400() {
    let app = seeded_app().await;
    let response = get(app, "/api/v1/pokemons/id/pikachu").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_by_name_is_exact_and_case_insensitive() {
    let app = seeded_app().await;
    let response = get(app, "/api/v1/pokemons/name/bulbasaur").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], 1);

    let app = seeded_app().await;
    let response = get(app, "/api/v1/pokemons/name/bulba").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "Pokemon with name bulba not found"
    );
}

#[tokio::test]
async fn get_by_name_decodes_the_path() {
    let app = seeded_app().await;
    let response = get(app, "/api/v1/pokemons/name/mr.%20mime").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], 7);
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_returns_201_and_stores_the_record() {
    let store = seeded_store().await;
    let body = json!({
        "id": 25,
        "name": "Raichu",
        "classification": "Mouse Pokémon",
        "types": ["Electric"],
        "weaknesses": ["Ground"],
        "fleeRate": 0.08,
        "maxCP": 2631,
        "maxHP": 2984,
        "attacks": {
            "fast": [{ "name": "Thunder Shock", "type": "Electric", "damage": 5 }],
            "special": []
        }
    });

    let response = post_json(build_test_app(store.clone()), "/api/v1/pokemons", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["id"], 25);
    assert_eq!(json["attacks"]["fast"][0]["type"], "Electric");

    let stored = store.find_pokemon(25).await.unwrap().unwrap();
    assert_eq!(stored.max_hp, 2984);
}

#[tokio::test]
async fn create_rejects_unknown_types() {
    let app = seeded_app().await;
    let body = json!({ "id": 99, "name": "Missingno", "types": ["Bird"] });

    let response = post_json(app, "/api/v1/pokemons", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_rejects_missing_fields() {
    let app = seeded_app().await;
    let response = post_json(app, "/api/v1/pokemons", json!({ "name": "Nameless" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn create_never_overwrites_an_existing_id() {
    let store = seeded_store().await;
    let body = json!({ "id": 1, "name": "Impostor", "types": ["Normal"] });

    let response = post_json(build_test_app(store.clone()), "/api/v1/pokemons", body).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(store.find_pokemon(1).await.unwrap().unwrap().name, "Bulbasaur");
}
