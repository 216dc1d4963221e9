mod app_system;
mod auth;
mod backend;
mod clients;
mod config;
mod domain;
mod error;
mod notify;
mod op_framework;
mod ops;
mod pages;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;

use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, PortalSystem};
use crate::auth::static_source;
use crate::config::PortalConfig;
use crate::pages::UserProfilePage;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting restaurant portal");

    let config = PortalConfig::from_env();
    // A pre-issued token from the environment stands in for the external
    // auth provider; deployments plug a real token source in here.
    let token = std::env::var("API_ACCESS_TOKEN").unwrap_or_default();
    let system = PortalSystem::new(config, static_source(token));

    let span = tracing::info_span!("restaurant_lookup");
    let restaurant = async {
        info!("Fetching my restaurant");
        system.restaurants.get_my_restaurant().await
    }
    .instrument(span)
    .await;

    match restaurant {
        Ok(restaurant) => {
            info!(restaurant = %restaurant.restaurant_name, "Restaurant loaded")
        }
        Err(e) => error!(error = %e, "Restaurant lookup failed"),
    }

    let span = tracing::info_span!("order_review");
    let orders = async {
        info!("Fetching orders");
        system.orders.get_my_orders().await
    }
    .instrument(span)
    .await;

    match orders {
        Ok(orders) => info!(count = orders.len(), "Orders fetched"),
        Err(e) => error!(error = %e, "Order fetch failed"),
    }

    let page = UserProfilePage::new(system.users.clone());
    match page.load().await {
        Ok(user) => info!(user = %user.email, "Profile loaded"),
        Err(e) => error!(error = %e, "Profile load failed"),
    }
    match page.view().await.map_err(|e| e.to_string())? {
        pages::ProfileView::Loading => info!("Profile page: loading"),
        pages::ProfileView::LoadFailed => info!("Profile page: unable to load user profile"),
        pages::ProfileView::Form(form) => {
            info!(user = %form.current_user.email, "Profile page: form ready")
        }
    }
    drop(page);

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Portal session complete");
    Ok(())
}
