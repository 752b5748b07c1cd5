//! Cache Key Composition
//!
//! The storefront's key convention, centralized. Keys are flat strings that
//! encode the entity and the query parameters; a collision between two
//! distinct logical queries silently returns wrong data, so every call site
//! composes keys through these helpers instead of formatting by hand.
//!
//! # Convention
//! - Single entity: `category_5`, `product_42`
//! - Aggregate list page: `products_1_{"brand":"acme"}`
//! - Prefix for list invalidation: `products_`

use std::fmt::Display;

use serde::Serialize;

// == Entity Key ==
/// Key for a single entity, e.g. `entity_key("category", 5)` -> `category_5`.
pub fn entity_key(entity: &str, id: impl Display) -> String {
    format!("{}_{}", entity, id)
}

// == List Key ==
/// Key for one page of a filtered list, e.g.
/// `list_key("products", 1, &filters)` -> `products_1_{"brand":"acme"}`.
///
/// Filters are serialized with serde_json so that distinct filter/page
/// combinations always map to distinct keys. Struct field order is stable
/// under serde, so the same filters always produce the same key.
pub fn list_key<F: Serialize>(entity: &str, page: u64, filters: &F) -> serde_json::Result<String> {
    Ok(format!(
        "{}_{}_{}",
        entity,
        page,
        serde_json::to_string(filters)?
    ))
}

// == List Prefix ==
/// Prefix shared by every page/filter variant of an entity's list keys,
/// used with `invalidate_prefix` after a mutation.
pub fn list_prefix(entity: &str) -> String {
    format!("{}_", entity)
}
