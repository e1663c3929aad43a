use std::time::Duration;

use larder_engine::{CatalogClient, CatalogError, CatalogSettings, ReqwestCatalogClient};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestCatalogClient {
    let settings = CatalogSettings {
        base_url: format!("{}/", server.uri()),
        ..CatalogSettings::default()
    };
    ReqwestCatalogClient::new(settings).expect("catalog client")
}

#[tokio::test]
async fn search_returns_the_full_result_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.php"))
        .and(query_param("s", "chicken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meals": [
                {
                    "idMeal": "52940",
                    "strMeal": "Brown Stew Chicken",
                    "strArea": "Jamaican",
                    "strCategory": "Chicken",
                    "strMealThumb": "https://example.com/stew.jpg",
                    "strIngredient1": "Chicken",
                    "strMeasure1": "1 whole",
                },
                {
                    "idMeal": "52846",
                    "strMeal": "Chicken & mushroom Hotpot",
                    "strArea": "British",
                },
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let meals = client.search("chicken").await.expect("search ok");

    assert_eq!(meals.len(), 2);
    assert_eq!(meals[0].id, "52940");
    assert_eq!(meals[0].name, "Brown Stew Chicken");
    assert_eq!(meals[0].area.as_deref(), Some("Jamaican"));
    assert_eq!(meals[0].ingredients().len(), 1);
    assert_eq!(meals[1].id, "52846");
}

#[tokio::test]
async fn null_meals_means_no_matches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.php"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "meals": null })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let meals = client.search("zzz").await.expect("search ok");
    assert!(meals.is_empty());
}

#[tokio::test]
async fn category_filter_returns_partial_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/filter.php"))
        .and(query_param("c", "Dessert"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meals": [
                {
                    "idMeal": "52893",
                    "strMeal": "Apple & Blackberry Crumble",
                    "strMealThumb": "https://example.com/crumble.jpg",
                },
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let meals = client.in_category("Dessert").await.expect("filter ok");

    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].id, "52893");
    assert_eq!(meals[0].area, None);
    assert_eq!(meals[0].instructions, None);
}

#[tokio::test]
async fn lookup_returns_the_single_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lookup.php"))
        .and(query_param("i", "52772"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "meals": [
                {
                    "idMeal": "52772",
                    "strMeal": "Teriyaki Chicken Casserole",
                    "strInstructions": "Preheat oven to 350F.",
                },
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let meal = client.by_id("52772").await.expect("lookup ok");
    let meal = meal.expect("meal present");
    assert_eq!(meal.name, "Teriyaki Chicken Casserole");
}

#[tokio::test]
async fn lookup_of_unknown_id_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/lookup.php"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "meals": null })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let meal = client.by_id("99999").await.expect("lookup ok");
    assert_eq!(meal, None);
}

#[tokio::test]
async fn http_error_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.php"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.search("chicken").await.unwrap_err();
    assert_eq!(err, CatalogError::Status(404));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.php"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!({ "meals": null })),
        )
        .mount(&server)
        .await;

    let settings = CatalogSettings {
        base_url: format!("{}/", server.uri()),
        request_timeout: Duration::from_millis(50),
        ..CatalogSettings::default()
    };
    let client = ReqwestCatalogClient::new(settings).expect("catalog client");

    let err = client.search("slow").await.unwrap_err();
    assert_eq!(err, CatalogError::Timeout);
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.php"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.search("chicken").await.unwrap_err();
    assert!(matches!(err, CatalogError::Decode(_)), "got {:?}", err);
}
