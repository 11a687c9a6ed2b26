//! Account commands: register, login, logout, whoami, and profile edits.

use gnouby_storefront::error::Result;
use gnouby_storefront::models::user::{NewAccount, ProfilePatch};
use gnouby_storefront::state::Storefront;

/// Create an account and log in as it.
pub fn register(
    storefront: &Storefront,
    name: &str,
    email: &str,
    password: &str,
    phone: Option<String>,
    address: Option<String>,
    remember: bool,
) -> Result<()> {
    let account = NewAccount {
        full_name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        phone,
        address,
    };
    let user = storefront.identity().register(&account, remember)?;
    println!("Welcome, {}! You are now logged in.", user.first_name());
    Ok(())
}

/// Log in to an existing account.
pub fn login(storefront: &Storefront, email: &str, password: &str, remember: bool) -> Result<()> {
    let user = storefront.identity().login(email, password, remember)?;
    println!("Welcome back, {}!", user.first_name());
    Ok(())
}

/// End the current session.
pub fn logout(storefront: &Storefront) -> Result<()> {
    storefront.identity().logout()?;
    println!("Logged out.");
    Ok(())
}

/// Print the logged-in user, if any.
pub fn whoami(storefront: &Storefront) {
    match storefront.identity().current_user() {
        Some(user) => {
            println!("{} <{}>", user.full_name, user.email);
            if !user.phone.is_empty() {
                println!("Phone:   {}", user.phone);
            }
            if !user.address.is_empty() {
                println!("Address: {}", user.address);
            }
            println!("Orders:  {}", user.orders.len());
            println!("Member since {}", user.created_at.format("%Y-%m-%d"));
        }
        None => println!("Not logged in."),
    }
}

/// Update the current user's profile. Omitted fields keep their current
/// values.
#[allow(clippy::too_many_arguments)]
pub fn update_profile(
    storefront: &Storefront,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    current_password: Option<String>,
    new_password: Option<String>,
    confirm_password: Option<String>,
) -> Result<()> {
    let identity = storefront.identity();
    let current = identity
        .current_user()
        .ok_or(gnouby_storefront::error::StorefrontError::AuthRequired)?;

    let patch = ProfilePatch {
        full_name: name.unwrap_or(current.full_name),
        email: email.unwrap_or_else(|| current.email.to_string()),
        phone: phone.unwrap_or(current.phone),
        address: address.unwrap_or(current.address),
        current_password,
        new_password,
        confirm_password,
    };
    let user = identity.update_profile(&patch)?;
    println!("Profile updated for {} <{}>.", user.full_name, user.email);
    Ok(())
}
