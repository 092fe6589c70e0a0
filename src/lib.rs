pub mod catalog;
pub mod config;
pub mod effect;
pub mod model;
pub mod price;
pub mod skins;
pub mod store;

pub use catalog::{CatalogItem, CoinPackage, Rank};
pub use config::StoreConfig;
pub use effect::{Effect, Notice, Severity};
pub use model::{Account, Command, Order, OrderId, OrderStatus, Page, Session, SessionId};
pub use price::Price;
pub use store::{AuthError, CommandError, Store};
