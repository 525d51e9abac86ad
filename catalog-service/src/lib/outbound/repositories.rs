pub mod client;
pub mod product;

pub use client::PostgresClientRepository;
pub use product::PostgresProductRepository;
