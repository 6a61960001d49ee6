//! vendorhub-adapter-postgres - PostgreSQL 适配器

mod connection;
mod schema;
mod transaction;

pub use connection::*;
pub use schema::*;
pub use transaction::*;
