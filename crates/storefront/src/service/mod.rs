mod auth;
mod cart;
mod category;
mod order;
mod product;
mod review;
mod user;

pub use self::auth::AuthService;
pub use self::cart::CartService;
pub use self::category::CategoryService;
pub use self::order::OrderService;
pub use self::product::ProductService;
pub use self::review::ReviewService;
pub use self::user::UserService;

use crate::{abstract_trait::session::DynSessionStore, domain::response::user::Role};
use shared::errors::ClientError;
use tracing::warn;
use validator::{Validate, ValidationErrors};

/// Fails locally unless a session exists and its user holds `Farmer`.
pub(crate) async fn require_farmer(
    session: &DynSessionStore,
    action: &str,
) -> Result<(), ClientError> {
    if !session.is_authenticated().await? {
        warn!("{action} attempted without a session");
        return Err(ClientError::Unauthenticated);
    }

    if !session.has_role(&Role::Farmer).await? {
        warn!("{action} attempted by a non-Farmer user");
        return Err(ClientError::Forbidden(format!(
            "Only farmers are allowed to {action}"
        )));
    }

    Ok(())
}

pub(crate) async fn require_login(session: &DynSessionStore) -> Result<(), ClientError> {
    if session.is_authenticated().await? {
        Ok(())
    } else {
        Err(ClientError::Unauthenticated)
    }
}

pub(crate) fn validate<T: Validate>(input: &T) -> Result<(), ClientError> {
    input
        .validate()
        .map_err(|errors| ClientError::Validation(validation_messages(&errors)))
}

fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
        })
        .collect();
    messages.sort();
    messages
}
