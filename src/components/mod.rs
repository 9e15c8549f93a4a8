//! UI Components
//!
//! Leptos components for the kitchen panel and the order composer.

mod toast_banner;
mod pending_order_card;
mod history_list;
mod kitchen_panel;
mod menu_catalog;
mod cart_view;
mod order_composer;

pub use toast_banner::ToastBanner;
pub use pending_order_card::PendingOrderCard;
pub use history_list::HistoryList;
pub use kitchen_panel::KitchenPanel;
pub use menu_catalog::{MenuCatalog, MENU};
pub use cart_view::CartView;
pub use order_composer::OrderComposer;
