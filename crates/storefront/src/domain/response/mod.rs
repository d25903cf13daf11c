pub mod cart;
pub mod category;
pub mod envelope;
mod lenient;
pub mod order;
pub mod product;
pub mod review;
pub mod session;
pub mod user;
