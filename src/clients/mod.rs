//! Resource-level clients grouping the operation clients for one backend
//! resource. Every mutating operation exposes the same state surface and the
//! same explicit reset, so no resource carries a one-off error-handling path.

mod macros;
pub mod order_client;
pub mod restaurant_client;
pub mod user_client;

pub use order_client::OrderClient;
pub use restaurant_client::RestaurantClient;
pub use user_client::UserClient;
