//! Actor wiring, shutdown and logging setup.

pub mod shop_system;
pub mod tracing;

pub use self::shop_system::{ShopSystem, SystemError};
pub use self::tracing::setup_tracing;
