//! Fixture records served by the bundled presets.
//!
//! The harness itself imposes no schema; these are the records of a
//! business-administration domain (users, catalog, warehousing, sales)
//! that the preset catalog serves. Builders are deterministic: the same
//! arguments always produce the same records, so assertions can name
//! exact values. All wire forms use camelCase keys.

use serde::{Deserialize, Serialize};

/// Application user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    /// Role name as granted, e.g. `admin` or `clerk`
    pub role: String,
    pub active: bool,
}

/// Named role grouping a set of permissions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

/// Single grantable capability
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub id: u64,
    pub name: String,
    pub description: String,
}

/// Sellable product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub category: String,
    pub stock: u32,
}

/// Storage site
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub active: bool,
}

/// Stock level of one product at one warehouse
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseStock {
    pub id: u64,
    pub warehouse_id: u64,
    pub product_id: u64,
    pub quantity: u32,
}

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Inbound,
    Outbound,
}

/// One recorded stock movement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u64,
    pub kind: TransactionKind,
    pub product_id: u64,
    pub warehouse_id: u64,
    pub quantity: u32,
    /// ISO-8601 timestamp
    pub recorded_at: String,
}

/// Buying customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Lifecycle state of an order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Cancelled,
}

/// Customer order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub order_number: String,
    pub customer_id: u64,
    pub status: OrderStatus,
    pub total: f64,
}

/// Goods supplier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: u64,
    pub name: String,
    pub contact_email: String,
    pub phone: String,
}

/// Authenticated session as the login endpoint returns it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
    pub user: User,
}

/// The everyday demo user most scenarios run as.
pub fn demo_user() -> User {
    User {
        id: 1,
        username: "mgarcia".to_string(),
        email: "mgarcia@example.test".to_string(),
        full_name: "Maria Garcia".to_string(),
        role: "admin".to_string(),
        active: true,
    }
}

/// Session wrapping `user`, with a fixed token the test can assert on.
pub fn admin_session(user: User) -> AuthSession {
    AuthSession {
        access_token: "mock-access-token-0001".to_string(),
        token_type: "Bearer".to_string(),
        expires_in: 3600,
        user,
    }
}

/// `n` products with sequential ids and cycling categories.
pub fn product_catalog(n: usize) -> Vec<Product> {
    let categories = ["Electronics", "Stationery", "Furniture"];
    (1..=n as u64)
        .map(|i| Product {
            id: i,
            name: format!("Product {i}"),
            sku: format!("SKU-{i:04}"),
            price: i as f64 * 2.5,
            category: categories[(i as usize - 1) % categories.len()].to_string(),
            stock: 100 + i as u32,
        })
        .collect()
}

/// `n` users; every third one is inactive.
pub fn user_directory(n: usize) -> Vec<User> {
    (1..=n as u64)
        .map(|i| User {
            id: i,
            username: format!("user{i}"),
            email: format!("user{i}@example.test"),
            full_name: format!("User {i}"),
            role: if i == 1 { "admin" } else { "clerk" }.to_string(),
            active: i % 3 != 0,
        })
        .collect()
}

/// The three roles the demo domain knows.
pub fn role_set() -> Vec<Role> {
    vec![
        Role {
            id: 1,
            name: "admin".to_string(),
            description: "Full access".to_string(),
            permissions: vec![
                "users.manage".to_string(),
                "catalog.manage".to_string(),
                "orders.manage".to_string(),
            ],
        },
        Role {
            id: 2,
            name: "manager".to_string(),
            description: "Catalog and order management".to_string(),
            permissions: vec!["catalog.manage".to_string(), "orders.manage".to_string()],
        },
        Role {
            id: 3,
            name: "clerk".to_string(),
            description: "Read-only access".to_string(),
            permissions: vec!["catalog.read".to_string(), "orders.read".to_string()],
        },
    ]
}

pub fn permission_set() -> Vec<Permission> {
    [
        "users.manage",
        "catalog.manage",
        "catalog.read",
        "orders.manage",
        "orders.read",
    ]
    .iter()
    .enumerate()
    .map(|(i, name)| Permission {
        id: i as u64 + 1,
        name: (*name).to_string(),
        description: format!("Grants {name}"),
    })
    .collect()
}

/// `n` warehouses with sequential ids.
pub fn warehouse_sites(n: usize) -> Vec<Warehouse> {
    (1..=n as u64)
        .map(|i| Warehouse {
            id: i,
            name: format!("Warehouse {i}"),
            location: format!("Dock {i}, Harbor District"),
            active: true,
        })
        .collect()
}

/// One stock row per product, round-robined across three warehouses.
pub fn stock_levels(n: usize) -> Vec<WarehouseStock> {
    (1..=n as u64)
        .map(|i| WarehouseStock {
            id: i,
            warehouse_id: (i - 1) % 3 + 1,
            product_id: i,
            quantity: 10 * i as u32,
        })
        .collect()
}

/// `n` stock movements alternating inbound and outbound.
pub fn transaction_log(n: usize) -> Vec<Transaction> {
    (1..=n as u64)
        .map(|i| Transaction {
            id: i,
            kind: if i % 2 == 0 {
                TransactionKind::Outbound
            } else {
                TransactionKind::Inbound
            },
            product_id: (i - 1) % 5 + 1,
            warehouse_id: (i - 1) % 3 + 1,
            quantity: 5 * i as u32,
            recorded_at: format!("2024-03-{:02}T10:00:00Z", (i - 1) % 28 + 1),
        })
        .collect()
}

pub fn customer_book(n: usize) -> Vec<Customer> {
    (1..=n as u64)
        .map(|i| Customer {
            id: i,
            name: format!("Customer {i}"),
            email: format!("customer{i}@example.test"),
            phone: format!("+1-555-{i:04}"),
        })
        .collect()
}

/// `n` orders cycling through the four lifecycle states.
pub fn order_book(n: usize) -> Vec<Order> {
    let statuses = [
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Shipped,
        OrderStatus::Cancelled,
    ];
    (1..=n as u64)
        .map(|i| Order {
            id: i,
            order_number: format!("ORD-{i:05}"),
            customer_id: (i - 1) % 4 + 1,
            status: statuses[(i as usize - 1) % statuses.len()],
            total: i as f64 * 19.99,
        })
        .collect()
}

pub fn supplier_directory(n: usize) -> Vec<Supplier> {
    (1..=n as u64)
        .map(|i| Supplier {
            id: i,
            name: format!("Supplier {i}"),
            contact_email: format!("sales@supplier{i}.test"),
            phone: format!("+1-555-9{i:03}"),
        })
        .collect()
}
