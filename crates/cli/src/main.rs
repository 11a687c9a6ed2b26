//! Gnouby Perfumes command-line storefront.
//!
//! # Usage
//!
//! ```bash
//! # Create an account and browse
//! gnouby register -n "Amina Hassan" -e amina@example.com -p 'Gnouby#2024'
//! gnouby catalog --gender women --sort price-low
//!
//! # Shop
//! gnouby cart add 3 --quantity 2
//! gnouby promo apply nubian10
//! gnouby checkout -n "Amina Hassan" -e amina@example.com -p "+20 100 123 4567" \
//!     -a "12 Corniche Rd" -c Aswan -z 81511
//!
//! # Review history
//! gnouby orders list --status shipped --sort highest
//! ```
//!
//! All state lives under the configured data directory (`GNOUBY_DATA_DIR`,
//! default `.gnouby`), so every invocation picks up where the last left off.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use std::fs::File;

use clap::{Parser, Subcommand};

use gnouby_storefront::catalog::{Catalog, PromoRegistry};
use gnouby_storefront::config::StorefrontConfig;
use gnouby_storefront::state::Storefront;

mod commands;
mod seed;

#[derive(Parser)]
#[command(name = "gnouby")]
#[command(author, version, about = "Gnouby Perfumes storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and log in
    Register {
        /// Full name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (at least 8 characters, mixed case, digit, symbol)
        #[arg(short, long)]
        password: String,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Street address
        #[arg(long)]
        address: Option<String>,

        /// Keep the session after this terminal closes
        #[arg(long)]
        remember: bool,
    },
    /// Log in to an existing account
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Keep the session after this terminal closes
        #[arg(long)]
        remember: bool,
    },
    /// Log out of the current session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Update the logged-in user's profile
    Profile {
        /// New full name
        #[arg(long)]
        name: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New street address
        #[arg(long)]
        address: Option<String>,

        /// Current password, required when changing the password
        #[arg(long)]
        current_password: Option<String>,

        /// New password (at least 6 characters)
        #[arg(long)]
        new_password: Option<String>,

        /// Confirmation of the new password
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Browse the product catalog
    Catalog {
        /// Price band: 0-50, 50-100, 100-200, or 200+ (repeatable)
        #[arg(long = "band")]
        bands: Vec<String>,

        /// Gender category: men, women, or unisex (repeatable)
        #[arg(long = "gender")]
        genders: Vec<String>,

        /// Minimum star rating
        #[arg(long)]
        min_rating: Option<rust_decimal::Decimal>,

        /// Brand name (repeatable)
        #[arg(long = "brand")]
        brands: Vec<String>,

        /// Sort: default, price-low, price-high, rating, or name
        #[arg(long, default_value = "default")]
        sort: String,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the applied promo code
    Promo {
        #[command(subcommand)]
        action: PromoAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Place an order for the current cart
    Checkout {
        /// Recipient full name
        #[arg(short, long)]
        name: String,

        /// Contact email
        #[arg(short, long)]
        email: String,

        /// Contact phone (at least 10 digits)
        #[arg(short, long)]
        phone: String,

        /// Street address
        #[arg(short, long)]
        address: String,

        /// City
        #[arg(short, long)]
        city: String,

        /// Postal code
        #[arg(short = 'z', long)]
        postal: String,
    },
    /// Browse order history
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart with totals
    Show,
    /// Add a product to the cart
    Add {
        /// Catalog product id
        product_id: i32,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Catalog product id
        product_id: i32,
    },
    /// Set a product's quantity exactly (0 removes it)
    Set {
        /// Catalog product id
        product_id: i32,

        /// New quantity
        quantity: u32,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum PromoAction {
    /// Apply a promo code to the cart
    Apply {
        /// Promo code (case-insensitive)
        code: String,
    },
    /// Remove the applied promo code
    Remove,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show the wishlist
    Show,
    /// Add a product to the wishlist
    Add {
        /// Catalog product id
        product_id: i32,
    },
    /// Remove a product from the wishlist
    Remove {
        /// Catalog product id
        product_id: i32,
    },
    /// Toggle a product's wishlist membership
    Toggle {
        /// Catalog product id
        product_id: i32,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders with filter, search, sort, and pagination
    List {
        /// Status filter: all, pending, processing, shipped, or delivered
        #[arg(long, default_value = "all")]
        status: String,

        /// Sort: newest, oldest, highest, or lowest
        #[arg(long, default_value = "newest")]
        sort: String,

        /// Search order ids and item names
        #[arg(long, default_value = "")]
        search: String,

        /// One-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show one order in full
    Show {
        /// Order id (e.g. ORD-ABC123-0)
        order_id: String,
    },
    /// Add a past order's items back into the cart
    Reorder {
        /// Order id
        order_id: String,
    },
    /// Show order counts by status
    Stats,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let storefront = open_storefront()?;

    match cli.command {
        Commands::Register {
            name,
            email,
            password,
            phone,
            address,
            remember,
        } => commands::account::register(&storefront, &name, &email, &password, phone, address, remember)?,
        Commands::Login {
            email,
            password,
            remember,
        } => commands::account::login(&storefront, &email, &password, remember)?,
        Commands::Logout => commands::account::logout(&storefront)?,
        Commands::Whoami => commands::account::whoami(&storefront),
        Commands::Profile {
            name,
            email,
            phone,
            address,
            current_password,
            new_password,
            confirm_password,
        } => commands::account::update_profile(
            &storefront,
            name,
            email,
            phone,
            address,
            current_password,
            new_password,
            confirm_password,
        )?,
        Commands::Catalog {
            bands,
            genders,
            min_rating,
            brands,
            sort,
        } => commands::browse::catalog(&storefront, &bands, &genders, min_rating, brands, &sort)?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&storefront),
            CartAction::Add {
                product_id,
                quantity,
            } => commands::cart::add(&storefront, product_id, quantity)?,
            CartAction::Remove { product_id } => commands::cart::remove(&storefront, product_id)?,
            CartAction::Set {
                product_id,
                quantity,
            } => commands::cart::set_quantity(&storefront, product_id, quantity)?,
            CartAction::Clear => commands::cart::clear(&storefront)?,
        },
        Commands::Promo { action } => match action {
            PromoAction::Apply { code } => commands::cart::apply_promo(&storefront, &code)?,
            PromoAction::Remove => commands::cart::remove_promo(&storefront)?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Show => commands::wishlist::show(&storefront),
            WishlistAction::Add { product_id } => commands::wishlist::add(&storefront, product_id)?,
            WishlistAction::Remove { product_id } => {
                commands::wishlist::remove(&storefront, product_id)?;
            }
            WishlistAction::Toggle { product_id } => {
                commands::wishlist::toggle(&storefront, product_id)?;
            }
        },
        Commands::Checkout {
            name,
            email,
            phone,
            address,
            city,
            postal,
        } => commands::orders::checkout(&storefront, &name, &email, &phone, &address, &city, &postal)?,
        Commands::Orders { action } => match action {
            OrdersAction::List {
                status,
                sort,
                search,
                page,
            } => commands::orders::list(&storefront, &status, &sort, &search, page)?,
            OrdersAction::Show { order_id } => commands::orders::show(&storefront, &order_id)?,
            OrdersAction::Reorder { order_id } => commands::orders::reorder(&storefront, &order_id)?,
            OrdersAction::Stats => commands::orders::stats(&storefront),
        },
    }
    Ok(())
}

/// Open the storefront with its configured catalog, falling back to the
/// built-in seed catalog.
fn open_storefront() -> Result<Storefront, Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_reader(File::open(path)?)?,
        None => seed::builtin_catalog(),
    };

    Ok(Storefront::new(config, catalog, PromoRegistry::builtin())?)
}
