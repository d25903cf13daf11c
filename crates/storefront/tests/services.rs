mod common;

use common::{FakeBackend, app_state, customer, farmer, logged_in};
use serde_json::json;
use shared::errors::ClientError;
use storefront::{
    domain::{
        requests::{
            auth::RegisterRequest,
            order::OrderItemRequest,
            product::{ImageUpload, ProductForm, ProductQuery},
        },
        response::{cart::CartItem, user::Role},
    },
};

fn kale_form() -> ProductForm {
    ProductForm {
        name: "Kale".into(),
        description: "Curly".into(),
        price: 2.5,
        stock: 40,
        category_id: Some(3),
        image: None,
    }
}

#[tokio::test]
async fn login_stores_the_session() {
    let backend = FakeBackend::start().await;
    backend.respond_json(
        "POST",
        "/login",
        200,
        json!({"token": "abc123", "user": {"id": 1, "UserName": "bob", "Role": "Farmer"}}),
    );

    let state = app_state(&backend);
    let response = state
        .di_container
        .auth_service
        .login("bob@farm.test", "secret")
        .await
        .unwrap();

    assert_eq!(response.token, "abc123");
    assert_eq!(
        backend.last_request().json(),
        json!({"Email": "bob@farm.test", "Password": "secret"})
    );

    assert_eq!(state.session.token().await.unwrap().as_deref(), Some("abc123"));
    assert!(state.session.has_role(&Role::Farmer).await.unwrap());
    assert_eq!(state.session.read().await.unwrap(), Some(response.user));
}

#[tokio::test]
async fn failed_login_leaves_no_session() {
    let backend = FakeBackend::start().await;
    backend.respond_json("POST", "/login", 401, json!({"message": "Invalid credentials"}));

    let state = app_state(&backend);
    let err = state
        .di_container
        .auth_service
        .login("bob@farm.test", "wrong")
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Invalid credentials");
    assert!(!state.session.is_authenticated().await.unwrap());
}

#[tokio::test]
async fn register_sends_the_role_string() {
    let backend = FakeBackend::start().await;
    backend.respond_json("POST", "/register", 201, json!({"message": "User registered"}));

    let state = app_state(&backend);
    let request = RegisterRequest {
        user_name: "carol".into(),
        email: "carol@farm.test".into(),
        password: "pw".into(),
        role: Role::Farmer,
    };
    let value = state.di_container.auth_service.register(&request).await.unwrap();

    assert_eq!(value, json!({"message": "User registered"}));
    assert_eq!(
        backend.last_request().json(),
        json!({"UserName": "carol", "Email": "carol@farm.test", "Password": "pw", "Role": "Farmer"})
    );
}

#[tokio::test]
async fn logout_clears_without_a_request() {
    let backend = FakeBackend::start().await;
    let state = app_state(&backend);
    logged_in(&state, &farmer()).await;

    state.di_container.auth_service.logout().await.unwrap();

    assert!(state.session.read().await.unwrap().is_none());
    assert!(!state.session.has_role(&Role::Farmer).await.unwrap());
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn product_listing_accepts_both_envelopes() {
    let backend = FakeBackend::start().await;
    let state = app_state(&backend);
    let products = &state.di_container.product_service;

    backend.respond_json(
        "GET",
        "/products",
        200,
        json!({"products": [{"ProductId": 1, "Name": "Eggs", "Price": 3.0}]}),
    );
    let wrapped = products.find_all(&ProductQuery::new()).await.unwrap();
    assert_eq!(wrapped.len(), 1);
    assert_eq!(wrapped[0].display_name(), "Eggs");

    backend.respond_json(
        "GET",
        "/products",
        200,
        json!([{"id": 2, "ProductName": "Milk", "Price": 1.2}, {"id": 3, "Price": 4.0}]),
    );
    let bare = products
        .find_all(&ProductQuery::new().param("category", 2))
        .await
        .unwrap();
    assert_eq!(bare.len(), 2);
    assert_eq!(bare[0].key(), Some(2));
    assert_eq!(backend.last_request().query.as_deref(), Some("category=2"));

    backend.respond_json("GET", "/products", 200, json!({"data": []}));
    assert!(products.find_all(&ProductQuery::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn blank_search_falls_back_to_listing() {
    let backend = FakeBackend::start().await;
    backend.respond_json("GET", "/products", 200, json!({"products": []}));
    backend.respond_json(
        "GET",
        "/products/search",
        200,
        json!({"products": [{"ProductId": 9, "Name": "Honey", "Price": 8.0}]}),
    );

    let state = app_state(&backend);
    let products = &state.di_container.product_service;

    products.search("   ").await.unwrap();
    assert_eq!(backend.count("GET", "/products"), 1);
    assert_eq!(backend.count("GET", "/products/search"), 0);

    let found = products.search("honey").await.unwrap();
    assert_eq!(found[0].key(), Some(9));
    assert_eq!(backend.last_request().query.as_deref(), Some("q=honey"));
}

#[tokio::test]
async fn product_detail_accepts_wrapped_or_bare_record() {
    let backend = FakeBackend::start().await;
    backend.respond_json(
        "GET",
        "/products/5",
        200,
        json!({"product": {"ProductId": 5, "Name": "Plums", "Price": 2.0, "Stock": 0}}),
    );

    let state = app_state(&backend);
    let product = state.di_container.product_service.find_by_id(5).await.unwrap();

    assert_eq!(product.display_name(), "Plums");
    assert!(!product.in_stock());
}

#[tokio::test]
async fn product_management_needs_a_farmer() {
    let backend = FakeBackend::start().await;
    backend.respond_json("POST", "/products", 201, json!({"message": "created"}));
    backend.respond_json("DELETE", "/products/3", 200, json!({"message": "deleted"}));

    let state = app_state(&backend);
    let products = &state.di_container.product_service;

    let err = products.create_product(kale_form()).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthenticated));

    logged_in(&state, &customer()).await;
    let err = products.create_product(kale_form()).await.unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(_)));
    let err = products.delete_product(3).await.unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(_)));

    assert!(backend.requests().is_empty());

    logged_in(&state, &farmer()).await;
    products.delete_product(3).await.unwrap();
    assert_eq!(backend.count("DELETE", "/products/3"), 1);
}

#[tokio::test]
async fn farmer_creates_product_as_multipart() {
    let backend = FakeBackend::start().await;
    backend.respond_json("POST", "/products", 201, json!({"message": "created"}));

    let state = app_state(&backend);
    logged_in(&state, &farmer()).await;

    let mut form = kale_form();
    form.image = Some(ImageUpload {
        file_name: "kale.png".into(),
        bytes: vec![0x89, b'P', b'N', b'G'],
        mime: Some("image/png".into()),
    });

    let value = state
        .di_container
        .product_service
        .create_product(form)
        .await
        .unwrap();
    assert_eq!(value, json!({"message": "created"}));

    let request = backend.last_request();
    assert!(
        request
            .content_type
            .as_deref()
            .unwrap()
            .starts_with("multipart/form-data")
    );
    assert_eq!(request.authorization.as_deref(), Some("Bearer tok-123"));

    let body = request.body_text();
    for field in ["Name", "Description", "Price", "Stock", "CategoryID", "image"] {
        assert!(body.contains(&format!("name=\"{field}\"")), "missing {field}");
    }
    assert!(body.contains("filename=\"kale.png\""));
}

#[tokio::test]
async fn farmer_updates_product_as_multipart() {
    let backend = FakeBackend::start().await;
    backend.respond_json("PUT", "/products/4", 200, json!({"message": "updated"}));

    let state = app_state(&backend);
    logged_in(&state, &farmer()).await;

    let mut form = kale_form();
    form.price = 3.25;

    let value = state
        .di_container
        .product_service
        .update_product(4, form)
        .await
        .unwrap();
    assert_eq!(value, json!({"message": "updated"}));

    let request = backend.last_request();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/api/products/4");
    assert_eq!(request.authorization.as_deref(), Some("Bearer tok-123"));
    assert!(
        request
            .content_type
            .as_deref()
            .unwrap()
            .starts_with("multipart/form-data")
    );

    let body = request.body_text();
    assert!(body.contains("name=\"Price\"\r\n\r\n3.25"));
    assert!(!body.contains("name=\"image\""));
}

#[tokio::test]
async fn product_listing_tolerates_decimal_strings() {
    let backend = FakeBackend::start().await;
    backend.respond_json(
        "GET",
        "/products",
        200,
        json!([
            {"ProductId": 1, "Name": "Eggs", "Price": "3.50"},
            {"ProductId": 2, "Name": "Milk", "Price": 2.0},
            {"ProductId": 3, "Name": "Herbs", "Price": null}
        ]),
    );

    let state = app_state(&backend);
    let products = state
        .di_container
        .product_service
        .find_all(&ProductQuery::new())
        .await
        .unwrap();

    let prices: Vec<f64> = products.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![3.5, 2.0, 0.0]);
}

#[tokio::test]
async fn invalid_product_form_is_rejected_locally() {
    let backend = FakeBackend::start().await;
    let state = app_state(&backend);
    logged_in(&state, &farmer()).await;

    let mut form = kale_form();
    form.name = String::new();
    form.category_id = None;

    let err = state
        .di_container
        .product_service
        .update_product(4, form)
        .await
        .unwrap_err();

    match err {
        ClientError::Validation(messages) => {
            assert!(messages.contains(&"Name is required".to_string()));
            assert!(messages.contains(&"Category is required".to_string()));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn add_to_cart_requires_login() {
    let backend = FakeBackend::start().await;
    backend.respond_json("POST", "/cart", 201, json!({"message": "added"}));

    let state = app_state(&backend);
    let cart = &state.di_container.cart_service;

    let err = cart.add_to_cart(7, 2).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthenticated));

    logged_in(&state, &customer()).await;
    cart.add_to_cart(7, 2).await.unwrap();
    assert_eq!(
        backend.last_request().json(),
        json!({"ProductID": 7, "Quantity": 2})
    );
}

#[tokio::test]
async fn cart_reads_the_items_envelope() {
    let backend = FakeBackend::start().await;
    backend.respond_json(
        "GET",
        "/cart",
        200,
        json!({"items": [
            {"CartItemId": 1, "ProductId": 10, "ProductName": "Eggs", "Price": 3.0, "Quantity": 2},
            {"CartItemId": 2, "ProductId": 11, "ProductName": "Milk", "Price": 1.5, "Quantity": 1}
        ]}),
    );

    let state = app_state(&backend);
    logged_in(&state, &customer()).await;

    let items = state.di_container.cart_service.get_cart().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(storefront::domain::response::cart::cart_total(&items), 7.5);
}

#[tokio::test]
async fn checkout_posts_the_cart_lines() {
    let backend = FakeBackend::start().await;
    backend.respond_json("POST", "/orders", 201, json!({"message": "Order placed"}));

    let state = app_state(&backend);
    logged_in(&state, &customer()).await;

    let cart = vec![
        CartItem {
            cart_item_id: Some(1),
            product_id: Some(10),
            price: 3.0,
            quantity: 2,
            ..Default::default()
        },
        CartItem {
            cart_item_id: Some(2),
            product_id: Some(11),
            price: 1.5,
            quantity: 1,
            ..Default::default()
        },
    ];

    state.di_container.order_service.checkout(&cart).await.unwrap();

    assert_eq!(
        backend.last_request().json(),
        json!({"Items": [
            {"ProductId": 10, "Quantity": 2},
            {"ProductId": 11, "Quantity": 1}
        ]})
    );
}

#[tokio::test]
async fn empty_order_never_reaches_the_backend() {
    let backend = FakeBackend::start().await;
    let state = app_state(&backend);
    let orders = &state.di_container.order_service;

    let err = orders.checkout(&[]).await.unwrap_err();
    assert_eq!(err.message(), "Cart is empty");

    let err = orders.create_order(&Vec::<OrderItemRequest>::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));

    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn orders_keep_server_totals() {
    let backend = FakeBackend::start().await;
    backend.respond_json(
        "GET",
        "/orders",
        200,
        json!({"orders": [{
            "OrderId": 12,
            "OrderDate": "2025-03-01T10:15:00Z",
            "Status": "Shipped",
            "TotalAmount": 9.0,
            "items": [{"ProductName": "Eggs", "Quantity": 3, "UnitPrice": 3.0}]
        }]}),
    );

    let state = app_state(&backend);
    logged_in(&state, &customer()).await;

    let orders = state.di_container.order_service.get_orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].total_amount, 9.0);
    assert_eq!(orders[0].computed_total(), 9.0);
}

#[tokio::test]
async fn updating_the_session_user_refreshes_the_cache() {
    let backend = FakeBackend::start().await;
    backend.respond_json("PUT", "/users/2", 200, json!({"message": "updated"}));
    backend.respond_json("PUT", "/users/5", 200, json!({"message": "updated"}));

    let state = app_state(&backend);
    logged_in(&state, &customer()).await;
    let users = &state.di_container.user_service;

    let renamed = customer().with_user_name("alicia");
    users.update_user(2, &renamed).await.unwrap();
    assert_eq!(
        state.session.read().await.unwrap().and_then(|u| u.user_name),
        Some("alicia".to_string())
    );

    let other = storefront::domain::response::user::UserRecord::new(5).with_user_name("zed");
    users.update_user(5, &other).await.unwrap();
    assert_eq!(state.session.read().await.unwrap().map(|u| u.id), Some(2));

    assert_eq!(backend.last_request().json()["UserName"], "zed");
}

#[tokio::test]
async fn deleting_the_session_user_logs_out() {
    let backend = FakeBackend::start().await;
    backend.respond_json("DELETE", "/users/9", 200, json!({"message": "deleted"}));
    backend.respond_json("DELETE", "/users/2", 200, json!({"message": "deleted"}));

    let state = app_state(&backend);
    logged_in(&state, &customer()).await;
    let users = &state.di_container.user_service;

    users.delete_user(9).await.unwrap();
    assert!(state.session.is_authenticated().await.unwrap());

    users.delete_user(2).await.unwrap();
    assert!(!state.session.is_authenticated().await.unwrap());
}

#[tokio::test]
async fn user_lookup_accepts_the_user_envelope() {
    let backend = FakeBackend::start().await;
    backend.respond_json(
        "GET",
        "/users/2",
        200,
        json!({"user": {"id": 2, "UserName": "alice", "Role": "Customer", "Phone": "555"}}),
    );

    let state = app_state(&backend);
    let user = state.di_container.user_service.find_by_id(2).await.unwrap();

    assert_eq!(user.user_name.as_deref(), Some("alice"));
    assert_eq!(user.extra["Phone"], "555");
}

#[tokio::test]
async fn categories_need_a_farmer_to_create() {
    let backend = FakeBackend::start().await;
    backend.respond_json(
        "GET",
        "/categories",
        200,
        json!({"categories": [{"CategoryId": 1, "Name": "Dairy"}]}),
    );
    backend.respond_json("POST", "/categories", 201, json!({"message": "created"}));

    let state = app_state(&backend);
    let categories = &state.di_container.category_service;

    let listed = categories.get_categories().await.unwrap();
    assert_eq!(listed[0].display_name(), "Dairy");

    logged_in(&state, &customer()).await;
    assert!(matches!(
        categories.create_category("Fruit").await.unwrap_err(),
        ClientError::Forbidden(_)
    ));

    logged_in(&state, &farmer()).await;
    categories.create_category(" Fruit ").await.unwrap();
    assert_eq!(backend.last_request().json(), json!({"Name": "Fruit"}));
}

#[tokio::test]
async fn reviews_go_to_the_product_path() {
    let backend = FakeBackend::start().await;
    backend.respond_json(
        "GET",
        "/reviews/5",
        200,
        json!({"reviews": [{"ProductID": 5, "Rating": 4, "Comment": "Sweet"}]}),
    );
    backend.respond_json("POST", "/reviews/5", 201, json!({"message": "thanks"}));

    let state = app_state(&backend);
    logged_in(&state, &customer()).await;
    let reviews = &state.di_container.review_service;

    let listed = reviews.get_reviews(5).await.unwrap();
    assert_eq!(listed[0].rating, Some(4));

    reviews.create_review(5, 5, "Great").await.unwrap();
    assert_eq!(
        backend.last_request().json(),
        json!({"ProductID": 5, "Rating": 5, "Comment": "Great"})
    );
}
