//! Paginated resource-listing presets.
//!
//! One preset per list endpoint of the demo domain, all delegating to
//! [`paginated_list`]. Patterns end in `**` so the same registration
//! absorbs any query string the application sends.

use backdrop_core::{fabricate, paginate, MockPage, Result, RouteAction};
use serde::Serialize;
use std::sync::Arc;

use crate::fixtures::{
    Customer, Order, Permission, Product, Role, Supplier, Transaction, User, Warehouse,
    WarehouseStock,
};

/// Serve `items` as paginated success envelopes for every request
/// matching `pattern`.
///
/// The page selection comes from the request's `page`/`pageSize` query
/// parameters, defaulting to the first page of ten. The collection is
/// captured once and shared by every dispatch.
pub fn paginated_list<T>(page: &MockPage, pattern: &str, items: Vec<T>) -> Result<()>
where
    T: Serialize + Clone + Send + Sync + 'static,
{
    let items = Arc::new(items);
    page.route(pattern, move |interception| {
        let items = Arc::clone(&items);
        async move {
            let envelope = paginate(&items, interception.request.page_request());
            Ok(RouteAction::Fulfill(fabricate::success(&envelope).await?))
        }
    })
}

pub fn user_list(page: &MockPage, users: Vec<User>) -> Result<()> {
    paginated_list(page, "**/api/users**", users)
}

pub fn role_list(page: &MockPage, roles: Vec<Role>) -> Result<()> {
    paginated_list(page, "**/api/roles**", roles)
}

pub fn permission_list(page: &MockPage, permissions: Vec<Permission>) -> Result<()> {
    paginated_list(page, "**/api/permissions**", permissions)
}

pub fn product_list(page: &MockPage, products: Vec<Product>) -> Result<()> {
    paginated_list(page, "**/api/products**", products)
}

pub fn warehouse_list(page: &MockPage, warehouses: Vec<Warehouse>) -> Result<()> {
    paginated_list(page, "**/api/warehouses**", warehouses)
}

/// Stock rows live under their own endpoint, not under `/warehouses`.
pub fn warehouse_stock_list(page: &MockPage, stock: Vec<WarehouseStock>) -> Result<()> {
    paginated_list(page, "**/api/warehouse-stocks**", stock)
}

pub fn transaction_list(page: &MockPage, transactions: Vec<Transaction>) -> Result<()> {
    paginated_list(page, "**/api/transactions**", transactions)
}

pub fn customer_list(page: &MockPage, customers: Vec<Customer>) -> Result<()> {
    paginated_list(page, "**/api/customers**", customers)
}

pub fn order_list(page: &MockPage, orders: Vec<Order>) -> Result<()> {
    paginated_list(page, "**/api/orders**", orders)
}

pub fn supplier_list(page: &MockPage, suppliers: Vec<Supplier>) -> Result<()> {
    paginated_list(page, "**/api/suppliers**", suppliers)
}
