//! Entity models
//!
//! Plain serde structs — all business logic lives in the server crate.

pub mod cart;
pub mod customer;
pub mod discount;
pub mod inventory;
pub mod order;
pub mod product;
pub mod shipping_rate;
pub mod store_info;

pub use cart::{Cart, LineItem};
pub use customer::Customer;
pub use discount::{Discount, DiscountKind};
pub use inventory::InventoryRecord;
pub use order::{Address, FinancialStatus, Order, OrderStatus, Totals};
pub use product::Product;
pub use shipping_rate::ShippingRate;
pub use store_info::StoreInfo;
