//! Per-resource API interfaces
//!
//! Each module provides a typed interface for one API resource. Every
//! operation resolves to an [`crate::response::ApiResponse`] and never
//! raises for HTTP-level errors.
//!
//! | Module | Resource path | Operations |
//! |--------|---------------|------------|
//! | `organizations` | `organizations` | create, list |
//! | `products` | `products` | list |
//! | `orders` | `orders`, `orders/{id}` | create, list, get |
//! | `rewards` | `rewards/{id}` | get |
//! | `funding_sources` | `funding_sources`, `funding_sources/{id}` | list, get |

pub mod funding_sources;
pub mod orders;
pub mod organizations;
pub mod products;
pub mod rewards;

pub use funding_sources::FundingSourcesApi;
pub use orders::OrdersApi;
pub use organizations::OrganizationsApi;
pub use products::ProductsApi;
pub use rewards::RewardsApi;
