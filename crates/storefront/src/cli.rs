use crate::{
    domain::{
        requests::{
            auth::RegisterRequest,
            product::{
                DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, ImageUpload, ProductFilter, ProductForm,
                ProductQuery,
            },
        },
        response::{
            cart::cart_total,
            category::Category,
            order::Order,
            product::Product,
            user::{Role, UserRecord},
        },
    },
    state::AppState,
};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use shared::{errors::ClientError, utils::display_date};
use std::{io::Write, path::PathBuf};

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Farm storefront client")]
pub struct Cli {
    /// Print the request metrics after the command finishes.
    #[arg(long, global = true)]
    pub metrics: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and remember the session.
    Login { email: String, password: String },
    Register {
        user_name: String,
        email: String,
        password: String,
        #[arg(long, default_value = "Customer")]
        role: String,
    },
    Logout,
    /// Show the logged-in user.
    Whoami,
    Products(ProductsArgs),
    Product { id: i64 },
    Categories,
    Cart,
    CartAdd {
        product_id: i64,
        #[arg(default_value_t = 1)]
        quantity: i64,
    },
    CartRemove { cart_item_id: i64 },
    /// Turn the current cart into an order.
    Checkout,
    Orders,
    Reviews { product_id: i64 },
    Review {
        product_id: i64,
        rating: i64,
        #[arg(default_value = "")]
        comment: String,
    },
    Profile,
    ProfileUpdate {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    ProfileDelete,
    AddProduct(AddProductArgs),
    DeleteProduct { id: i64 },
    AddCategory { name: String },
}

#[derive(Debug, Args)]
pub struct ProductsArgs {
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub category: Option<i64>,
    #[arg(long, default_value_t = DEFAULT_MIN_PRICE)]
    pub min: f64,
    #[arg(long, default_value_t = DEFAULT_MAX_PRICE)]
    pub max: f64,
}

#[derive(Debug, Args)]
pub struct AddProductArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long)]
    pub price: f64,
    #[arg(long)]
    pub stock: i64,
    #[arg(long)]
    pub category: Option<i64>,
    #[arg(long)]
    pub image: Option<PathBuf>,
}

pub async fn execute(command: Command, state: &AppState, out: &mut dyn Write) -> Result<()> {
    let di = &state.di_container;

    match command {
        Command::Login { email, password } => {
            let response = di.auth_service.login(&email, &password).await?;
            writeln!(out, "Logged in as {}", user_label(&response.user))?;
        }
        Command::Register {
            user_name,
            email,
            password,
            role,
        } => {
            let request = RegisterRequest {
                user_name,
                email,
                password,
                role: Role::from(role),
            };
            di.auth_service.register(&request).await?;
            writeln!(out, "Registration successful. Please log in.")?;
        }
        Command::Logout => {
            di.auth_service.logout().await?;
            writeln!(out, "Logged out")?;
        }
        Command::Whoami => match state.session.read().await? {
            Some(user) => writeln!(out, "{}", user_label(&user))?,
            None => writeln!(out, "Not logged in")?,
        },
        Command::Products(args) => {
            let products = match args.search.as_deref() {
                Some(query) => di.product_service.search(query).await?,
                None => di.product_service.find_all(&ProductQuery::new()).await?,
            };

            let filter = ProductFilter {
                category_id: args.category,
                min_price: args.min,
                max_price: args.max,
            };
            let products = filter.apply(products);

            if products.is_empty() {
                writeln!(out, "No products found")?;
            }
            for product in &products {
                writeln!(out, "{}", product_line(product))?;
            }
        }
        Command::Product { id } => {
            let product = di.product_service.find_by_id(id).await?;
            writeln!(out, "{}", product_line(&product))?;
            if let Some(description) = product.description.as_deref().filter(|d| !d.is_empty()) {
                writeln!(out, "  {description}")?;
            }
        }
        Command::Categories => {
            for category in di.category_service.get_categories().await? {
                writeln!(out, "{}", category_line(&category))?;
            }
        }
        Command::Cart => {
            let items = di.cart_service.get_cart().await?;
            if items.is_empty() {
                writeln!(out, "Your cart is empty")?;
                return Ok(());
            }

            for item in &items {
                writeln!(
                    out,
                    "[{}] {} x{} @ {:.2} = {:.2}",
                    opt_id(item.cart_item_id),
                    item.product_name.as_deref().unwrap_or("Unnamed product"),
                    item.quantity,
                    item.price,
                    item.line_total()
                )?;
            }
            writeln!(out, "Total: {:.2}", cart_total(&items))?;
        }
        Command::CartAdd {
            product_id,
            quantity,
        } => {
            di.cart_service.add_to_cart(product_id, quantity).await?;
            writeln!(out, "Added to cart")?;
        }
        Command::CartRemove { cart_item_id } => {
            di.cart_service.remove_from_cart(cart_item_id).await?;
            writeln!(out, "Removed from cart")?;
        }
        Command::Checkout => {
            let items = di.cart_service.get_cart().await?;
            if items.is_empty() {
                return Err(ClientError::Validation(vec!["Cart is empty".to_string()]).into());
            }
            di.order_service.checkout(&items).await?;
            writeln!(out, "Order placed successfully!")?;
        }
        Command::Orders => {
            let orders = di.order_service.get_orders().await?;
            if orders.is_empty() {
                writeln!(out, "No orders yet")?;
            }
            for order in &orders {
                write_order(out, order)?;
            }
        }
        Command::Reviews { product_id } => {
            let reviews = di.review_service.get_reviews(product_id).await?;
            if reviews.is_empty() {
                writeln!(out, "No reviews yet")?;
            }
            for review in &reviews {
                writeln!(
                    out,
                    "{}/5 {}",
                    review.rating.unwrap_or_default(),
                    review.comment.as_deref().unwrap_or("")
                )?;
            }
        }
        Command::Review {
            product_id,
            rating,
            comment,
        } => {
            di.review_service
                .create_review(product_id, rating, &comment)
                .await?;
            writeln!(out, "Review submitted")?;
        }
        Command::Profile => {
            let id = session_user(state).await?.id;
            let user = di.user_service.find_by_id(id).await?;
            writeln!(out, "{}", user_label(&user))?;
            if let Some(created_at) = user.created_at.as_deref() {
                writeln!(out, "Member since {}", display_date(created_at))?;
            }
        }
        Command::ProfileUpdate { name, email } => {
            let mut user = session_user(state).await?;
            if let Some(name) = name {
                user.user_name = Some(name);
            }
            if let Some(email) = email {
                user.email = Some(email);
            }
            di.user_service.update_user(user.id, &user).await?;
            writeln!(out, "Profile updated")?;
        }
        Command::ProfileDelete => {
            let id = session_user(state).await?.id;
            di.user_service.delete_user(id).await?;
            writeln!(out, "Account deleted")?;
        }
        Command::AddProduct(args) => {
            let image = match args.image {
                Some(path) => Some(ImageUpload::from_path(&path).await?),
                None => None,
            };
            let form = ProductForm {
                name: args.name,
                description: args.description,
                price: args.price,
                stock: args.stock,
                category_id: args.category,
                image,
            };
            di.product_service.create_product(form).await?;
            writeln!(out, "Product added")?;
        }
        Command::DeleteProduct { id } => {
            di.product_service.delete_product(id).await?;
            writeln!(out, "Product deleted")?;
        }
        Command::AddCategory { name } => {
            di.category_service.create_category(&name).await?;
            writeln!(out, "Category added")?;
        }
    }

    Ok(())
}

async fn session_user(state: &AppState) -> Result<UserRecord, ClientError> {
    state
        .session
        .read()
        .await?
        .ok_or(ClientError::Unauthenticated)
}

fn opt_id(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "?".to_string())
}

fn user_label(user: &UserRecord) -> String {
    let mut label = user.user_name.clone().unwrap_or_else(|| format!("user {}", user.id));
    if let Some(email) = &user.email {
        label.push_str(&format!(" <{email}>"));
    }
    if let Some(role) = &user.role {
        label.push_str(&format!(" ({role})"));
    }
    label
}

fn product_line(product: &Product) -> String {
    let stock = match product.available_stock() {
        Some(0) => "out of stock".to_string(),
        Some(n) => format!("{n} in stock"),
        None => "stock unknown".to_string(),
    };
    format!(
        "[{}] {} {:.2} ({stock})",
        opt_id(product.key()),
        product.display_name(),
        product.price
    )
}

fn category_line(category: &Category) -> String {
    format!("[{}] {}", opt_id(category.key()), category.display_name())
}

fn write_order(out: &mut dyn Write, order: &Order) -> std::io::Result<()> {
    writeln!(
        out,
        "Order #{} {} {} total {:.2}",
        opt_id(order.order_id),
        order.order_date.as_deref().map(display_date).unwrap_or_default(),
        order.status.as_deref().unwrap_or("Pending"),
        order.total_amount
    )?;
    for line in &order.items {
        writeln!(
            out,
            "  {} x{} @ {:.2}",
            line.product_name.as_deref().unwrap_or("Unnamed product"),
            line.quantity,
            line.unit_price
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_product_filters() {
        let cli = Cli::try_parse_from([
            "storefront", "products", "--category", "2", "--min", "5", "--max", "20",
        ])
        .unwrap();

        match cli.command {
            Command::Products(args) => {
                assert_eq!(args.category, Some(2));
                assert_eq!(args.min, 5.0);
                assert_eq!(args.max, 20.0);
                assert!(args.search.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cart_add_defaults_to_one() {
        let cli = Cli::try_parse_from(["storefront", "cart-add", "7"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::CartAdd {
                product_id: 7,
                quantity: 1
            }
        ));
    }

    #[test]
    fn metrics_flag_is_global() {
        let cli = Cli::try_parse_from(["storefront", "orders", "--metrics"]).unwrap();
        assert!(cli.metrics);
    }

    #[test]
    fn user_label_shows_what_is_known() {
        let user = UserRecord::new(1)
            .with_user_name("bob")
            .with_role(Role::Farmer);
        assert_eq!(user_label(&user), "bob (Farmer)");
        assert_eq!(user_label(&UserRecord::new(4)), "user 4");
    }
}
