//! Shared type definitions.

pub mod category;
pub mod id;
pub mod price;
pub mod product;

pub use category::Category;
pub use id::ProductId;
pub use price::format_lira;
pub use product::Product;
