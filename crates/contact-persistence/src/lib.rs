//! contact-persistence
//!
//! Capa de persistencia Postgres (Diesel) para contactos. Expone el almacén
//! `PgContactStore` con las dos únicas operaciones del programa (`save` y
//! `fetch_all`) más utilidades de conexión y migraciones.
//!
//! Módulos:
//! - `pg`: almacén de contactos sobre Postgres (insert transaccional, select-all).
//! - `migrations`: runner embebido de migraciones Diesel.
//! - `config`: carga de configuración desde .env.
//! - `schema`: tabla Diesel declarada para compilar queries.

pub mod config;
pub mod error;
pub mod migrations;
pub mod pg;
pub mod schema;

pub use config::init_dotenv;
pub use error::PersistenceError;
pub use pg::{build_dev_pool_from_env, build_pool, ConnectionProvider, PgContactStore, PgPool, PoolProvider};
