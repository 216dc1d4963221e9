use tokio::sync::mpsc;
use tracing::{error, info};

use crate::auth::{SessionActor, TokenSource};
use crate::backend::Backend;
use crate::clients::{OrderClient, RestaurantClient, UserClient};
use crate::config::PortalConfig;
use crate::notify::{notice_channel, spawn_notice_log, Notice};
use crate::op_framework::OperationActor;
use crate::ops::{
    CreateMyRestaurant, GetMyRestaurant, GetMyUser, ListMyOrders, UpdateMyRestaurant,
    UpdateMyUser, UpdateOrderStatus,
};

/// The running portal: one session actor, one actor per operation, and a
/// notice sink, wired together and exposed through the resource clients.
///
/// Responsible for starting up actors, wiring them together, and handling
/// shutdown.
pub struct PortalSystem {
    pub restaurants: RestaurantClient,
    pub orders: OrderClient,
    pub users: UserClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PortalSystem {
    /// Starts the system with the default notice sink, which logs every
    /// toast.
    pub fn new(config: PortalConfig, token_source: TokenSource) -> Self {
        let (mut system, notices) = Self::with_notices(config, token_source);
        system.handles.push(spawn_notice_log(notices));
        system
    }

    /// Starts the system and hands the notice receiver to the caller, for
    /// embedders (and tests) that present toasts themselves.
    pub fn with_notices(
        config: PortalConfig,
        token_source: TokenSource,
    ) -> (Self, mpsc::Receiver<Notice>) {
        let capacity = config.channel_capacity;
        let (notices, notice_rx) = notice_channel(capacity);
        let mut handles = Vec::new();

        // 1. Session service
        let (session_actor, session) = SessionActor::new(capacity, token_source);
        handles.push(tokio::spawn(session_actor.run()));

        let backend = Backend::new(config.api_base_url, session);

        // 2. Restaurant operations
        let (actor, get_restaurant) = OperationActor::new(
            GetMyRestaurant::new(backend.clone()),
            capacity,
            notices.clone(),
        );
        handles.push(tokio::spawn(actor.run()));
        let (actor, create_restaurant) = OperationActor::new(
            CreateMyRestaurant::new(backend.clone()),
            capacity,
            notices.clone(),
        );
        handles.push(tokio::spawn(actor.run()));
        let (actor, update_restaurant) = OperationActor::new(
            UpdateMyRestaurant::new(backend.clone()),
            capacity,
            notices.clone(),
        );
        handles.push(tokio::spawn(actor.run()));
        let restaurants =
            RestaurantClient::new(get_restaurant, create_restaurant, update_restaurant);

        // 3. Order operations
        let (actor, list_orders) =
            OperationActor::new(ListMyOrders::new(backend.clone()), capacity, notices.clone());
        handles.push(tokio::spawn(actor.run()));
        let (actor, update_status) = OperationActor::new(
            UpdateOrderStatus::new(backend.clone()),
            capacity,
            notices.clone(),
        );
        handles.push(tokio::spawn(actor.run()));
        let orders = OrderClient::new(list_orders, update_status);

        // 4. User operations
        let (actor, get_user) =
            OperationActor::new(GetMyUser::new(backend.clone()), capacity, notices.clone());
        handles.push(tokio::spawn(actor.run()));
        let (actor, update_user) =
            OperationActor::new(UpdateMyUser::new(backend), capacity, notices);
        handles.push(tokio::spawn(actor.run()));
        let users = UserClient::new(get_user, update_user);

        (
            Self {
                restaurants,
                orders,
                users,
                handles,
            },
            notice_rx,
        )
    }

    /// Closes every actor mailbox by dropping the clients, then waits for
    /// the actors to drain and stop.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down portal...");
        drop(self.restaurants);
        drop(self.orders);
        drop(self.users);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Portal shutdown complete.");
        Ok(())
    }
}
