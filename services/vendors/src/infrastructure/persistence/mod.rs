//! Persistence implementations

mod converters;
mod postgres;
mod rows;
mod schema;

pub use postgres::PostgresVendorRepository;
pub use schema::ensure_schema;
