//! Scenario presets for a business-administration app under test.
//!
//! Where backdrop-core gives a test raw routes and envelopes, this
//! crate gives it named building blocks: authentication flows and
//! paginated list endpoints over a deterministic fixture domain. A
//! scenario assembles its backend by calling a handful of presets
//! against its [`MockPage`](backdrop_core::MockPage) instead of
//! hand-rolling every route.

pub mod auth;
pub mod fixtures;
pub mod listing;

pub use auth::{authenticated_state, current_user, login, login_failure, logout};
pub use listing::{
    customer_list, order_list, paginated_list, permission_list, product_list, role_list,
    supplier_list, transaction_list, user_list, warehouse_list, warehouse_stock_list,
};
