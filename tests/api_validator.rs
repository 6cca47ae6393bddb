use api_contract::field::{self, FieldSchemaExt};
use api_contract::{
    ApiValidator, EndpointConfig, HttpMethod, PathMatcher, RequestData, SchemaBuilder,
    ValidationResult,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn user_response() -> EndpointConfig {
    EndpointConfig::new()
        .response("id", field::number())
        .response("name", field::string())
}

#[test]
fn test_exact_literal_paths_resolve() {
    let api = ApiValidator::new(
        SchemaBuilder::new()
            .get("/users", user_response())
            .get("/health/live", user_response())
            .delete("/sessions/current", user_response())
            .build(),
    );
    for summary in api.endpoints() {
        let method = summary.method.as_str();
        let result = api.validate_request(method, &summary.path, Some(&RequestData::new()));
        assert!(result.is_valid(), "{} {} should resolve", method, summary.path);
    }
}

#[test]
fn test_parameter_segments() {
    let schema = SchemaBuilder::new().get("/users/:id", user_response()).build();
    let matcher = PathMatcher::new(&schema);
    assert_eq!(matcher.find("GET", "/users/123").unwrap().path(), "/users/:id");
    assert_eq!(matcher.find("GET", "/users/abc").unwrap().path(), "/users/:id");
    assert!(matcher.find("GET", "/users/123/edit").is_none());
}

#[test]
fn test_registration_order_decides_overlaps() {
    let schema = SchemaBuilder::new()
        .get("/users/:id", user_response().description("by id"))
        .get("/users/active", user_response().description("active"))
        .build();
    let hit = PathMatcher::new(&schema).find("GET", "/users/active").unwrap();
    assert_eq!(hit.path(), "/users/:id");
    assert_eq!(hit.description.as_deref(), Some("by id"));
}

#[test]
fn test_mock_response_has_id_and_name() {
    let api = ApiValidator::new(SchemaBuilder::new().get("/users/:id", user_response()).build());
    let mock = api.generate_mock_response("GET", "/users/123");
    assert!(!mock["id"].is_null());
    assert!(!mock["name"].is_null());
    let body = api.generate_mock_request("POST", "/users");
    assert_eq!(body, json!({"name": "John Doe", "email": "john@example.com"}));
}

#[test]
fn test_response_only_endpoint_without_data() {
    let api = ApiValidator::new(SchemaBuilder::new().get("/users", user_response()).build());
    assert_eq!(
        api.validate_request("GET", "/users", None),
        ValidationResult::Valid { data: None }
    );
}

#[test]
fn test_post_body_round_trip() {
    let api = ApiValidator::new(
        SchemaBuilder::new()
            .post(
                "/users",
                user_response()
                    .body("name", field::string())
                    .body("email", field::string()),
            )
            .build(),
    );
    let data = RequestData::new().with_body(json!({"name": "John", "email": "john@example.com"}));
    let result = api.validate_request("POST", "/users", Some(&data));
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"valid": true, "data": {"name": "John", "email": "john@example.com"}})
    );
}

#[test]
fn test_unregistered_response_pair() {
    let api = ApiValidator::new(SchemaBuilder::new().get("/users", user_response()).build());
    let result = api.validate_response("PUT", "/users/9", &json!({"id": 9}));
    assert_eq!(
        result,
        ValidationResult::Invalid {
            errors: vec!["Endpoint not found: PUT /users/9".to_string()]
        }
    );
}

#[test]
fn test_failures_short_circuit_on_first_step() {
    let api = ApiValidator::new(
        SchemaBuilder::new()
            .patch(
                "/users/:id",
                user_response()
                    .param("id", field::string())
                    .body("name", field::string().min_len(1)),
            )
            .build(),
    );
    // Params are checked against an empty object first, so the bad body is never reached.
    let data = RequestData::new().with_body(json!({"name": ""}));
    let result = api.validate_request("PATCH", "/users/1", Some(&data));
    assert_eq!(result.errors(), &["id: Required".to_string()]);
}

#[test]
fn test_request_data_deserializes_from_json() {
    let api = ApiValidator::new(
        SchemaBuilder::new()
            .get(
                "/search",
                user_response().query("q", field::string()).query(
                    "limit",
                    field::integer().min(1.0).max(100.0).optional(),
                ),
            )
            .build(),
    );
    let data: RequestData =
        serde_json::from_value(json!({"query": {"q": "rust", "limit": 500}})).unwrap();
    let result = api.validate_request("GET", "/search", Some(&data));
    assert_eq!(result.errors().len(), 1);
    assert!(result.errors()[0].starts_with("limit: "), "{:?}", result.errors());
    assert!(result.errors()[0].contains("maximum"), "{:?}", result.errors());
}

#[test]
fn test_typescript_names() {
    let api = ApiValidator::new(
        SchemaBuilder::new()
            .get("/users/:id", user_response())
            .post("/order-items", user_response().body("sku", field::string()))
            .build(),
    );
    let types = api.generate_typescript();
    assert!(types.contains("export interface GetUsersIdResponse {"));
    assert!(types.contains("export interface PostOrderItemsResponse {"));
    assert!(types.contains("export interface PostOrderItemsRequest {"));
    assert!(!types.contains("GetUsersIdRequest"));
}

#[test]
fn test_endpoint_listing_order() {
    let api = ApiValidator::new(
        SchemaBuilder::new()
            .post("/b", user_response())
            .get("/a", user_response().tag("alpha"))
            .build(),
    );
    let listed: Vec<(HttpMethod, String)> = api
        .endpoints()
        .into_iter()
        .map(|e| (e.method, e.path))
        .collect();
    assert_eq!(
        listed,
        vec![
            (HttpMethod::Post, "/b".to_string()),
            (HttpMethod::Get, "/a".to_string())
        ]
    );
}

#[test]
fn test_free_function_entry_points() {
    let api = api_contract::api_validator(
        api_contract::schema_builder()
            .post(
                "/users",
                EndpointConfig::new()
                    .body("name", field::string())
                    .body("email", field::string().email())
                    .response("id", field::number()),
            )
            .build(),
    );
    let ok = RequestData::new().with_body(json!({"name": "Ada", "email": "ada@example.com"}));
    assert!(api.validate_request("POST", "/users", Some(&ok)).is_valid());

    let bad = RequestData::new().with_body(json!({"name": "Ada", "email": "ada"}));
    let result = api.validate_request("POST", "/users", Some(&bad));
    assert_eq!(result.errors().len(), 1);
    assert!(result.errors()[0].starts_with("email: "), "{:?}", result.errors());
}
