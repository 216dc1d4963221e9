//! Concrete [`Operation`](crate::op_framework::Operation) implementations,
//! one per backend endpoint.

pub mod order;
pub mod restaurant;
pub mod user;

pub use order::*;
pub use restaurant::*;
pub use user::*;
