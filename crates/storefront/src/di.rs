use crate::{
    abstract_trait::{
        auth::DynAuthService, cart::DynCartService, category::DynCategoryService,
        order::DynOrderService, product::DynProductService, review::DynReviewService,
        session::DynSessionStore, user::DynUserService,
    },
    client::ApiClient,
    service::{
        AuthService, CartService, CategoryService, OrderService, ProductService, ReviewService,
        UserService,
    },
};
use shared::{errors::ClientError, utils::Metrics};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub user_service: DynUserService,
    pub product_service: DynProductService,
    pub cart_service: DynCartService,
    pub order_service: DynOrderService,
    pub category_service: DynCategoryService,
    pub review_service: DynReviewService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"DynAuthService")
            .field("user_service", &"DynUserService")
            .field("product_service", &"DynProductService")
            .field("cart_service", &"DynCartService")
            .field("order_service", &"DynOrderService")
            .field("category_service", &"DynCategoryService")
            .field("review_service", &"DynReviewService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(
        base_url: &str,
        session: DynSessionStore,
        metrics: Metrics,
    ) -> Result<Self, ClientError> {
        let client = ApiClient::new(base_url, session.clone(), metrics)?;

        let auth_service: DynAuthService =
            Arc::new(AuthService::new(client.clone(), session.clone()));

        let user_service: DynUserService =
            Arc::new(UserService::new(client.clone(), session.clone()));

        let product_service: DynProductService =
            Arc::new(ProductService::new(client.clone(), session.clone()));

        let cart_service: DynCartService =
            Arc::new(CartService::new(client.clone(), session.clone()));

        let order_service: DynOrderService = Arc::new(OrderService::new(client.clone()));

        let category_service: DynCategoryService =
            Arc::new(CategoryService::new(client.clone(), session));

        let review_service: DynReviewService = Arc::new(ReviewService::new(client));

        Ok(Self {
            auth_service,
            user_service,
            product_service,
            cart_service,
            order_service,
            category_service,
            review_service,
        })
    }
}
