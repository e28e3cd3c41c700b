//! Generated demo datasets.
//!
//! Generation is deterministic in the index: the same id always produces
//! the same record, so regenerating a dataset with a different count keeps
//! every surviving row identical. Product prices and stock come from an RNG
//! seeded with the product id.

use super::item::{DemoItem, ProductItem, Status, UserItem};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Roles assigned round-robin to generated users.
pub const ROLES: [&str; 5] = ["Admin", "Editor", "Viewer", "Developer", "Tester"];

/// Categories assigned round-robin to generated products.
pub const CATEGORIES: [&str; 5] = ["Electronics", "Clothing", "Food", "Home", "Books"];

/// Smallest record count selectable at runtime.
pub const MIN_ITEM_COUNT: usize = 100;

/// Largest record count selectable at runtime.
pub const MAX_ITEM_COUNT: usize = 100_000;

/// Record count used when nothing is configured.
pub const DEFAULT_ITEM_COUNT: usize = 10_000;

/// Generate `count` rows for the basic list.
pub fn generate_demo_data(count: usize) -> Vec<DemoItem> {
    (0..count)
        .map(|index| {
            let n = index + 1;
            DemoItem {
                id: n as u64,
                name: format!("User {n}"),
                email: format!("user{n}@example.com"),
                role: ROLES[index % ROLES.len()],
                status: Status::ALL[index % Status::ALL.len()],
            }
        })
        .collect()
}

/// Generate `count` users.
pub fn generate_user_data(count: usize) -> Vec<UserItem> {
    (0..count)
        .map(|index| {
            let n = index + 1;
            UserItem {
                id: n as u64,
                name: format!("User {n}"),
                email: format!("user{n}@example.com"),
                role: ROLES[index % ROLES.len()],
                status: Status::ALL[index % Status::ALL.len()],
            }
        })
        .collect()
}

/// Generate `count` products.
///
/// Prices land in `10..=1009` and stock in `0..=99`.
pub fn generate_product_data(count: usize) -> Vec<ProductItem> {
    (0..count)
        .map(|index| {
            let n = index + 1;
            let id = n as u64;
            let mut rng = StdRng::seed_from_u64(id);
            ProductItem {
                id,
                name: format!("Product {n}"),
                price: f64::from(rng.gen_range(10u32..=1009)),
                category: CATEGORIES[index % CATEGORIES.len()],
                stock: rng.gen_range(0..100),
                description: format!("Detailed description of product {n}"),
            }
        })
        .collect()
}

/// Clamp a requested record count into the runtime range.
pub fn clamp_item_count(count: usize) -> usize {
    count.clamp(MIN_ITEM_COUNT, MAX_ITEM_COUNT)
}
