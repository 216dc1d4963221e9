pub mod order;
pub mod restaurant;
pub mod user;

pub use order::*;
pub use restaurant::*;
pub use user::*;
