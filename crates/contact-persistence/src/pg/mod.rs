//! Implementación Postgres (Diesel) del almacén de contactos.
//!
//! Objetivo del módulo:
//! - Proveer las dos operaciones del programa (`save`, `fetch_all`) sobre una
//!   tabla `contacts`, aislando el mapeo dominio ↔ filas de DB del crate de
//!   dominio.
//! - `save` inserta dentro de su propia transacción read-write y captura el
//!   `id` asignado por la base vía `RETURNING`. Cada llamada toma y devuelve
//!   su propia conexión del pool; no hay batching ni reintentos.
//! - `fetch_all` lee todas las filas sin filtro ni orden, igual que el
//!   select-all del programa original.
//!
//! El pool se construye explícitamente y se pasa al almacén por valor
//! (`PoolProvider`), sin singletons globales. Las migraciones embebidas se
//! corren una sola vez al construir el pool.

use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use log::debug;

use contact_domain::Contact;

use crate::error::PersistenceError;
use crate::migrations::run_pending_migrations;
use crate::schema::contacts;

/// Alias de tipo para el pool r2d2 de conexiones Postgres.
///
/// Notas operativas:
/// - El pool se construye con `min_idle` (mínimo de conexiones inactivas) y
///   `max_size` (límite superior total).
/// - Al construirlo, se corre automáticamente el set de migraciones pendientes
///   (una sola vez).
pub type PgPool = r2d2::Pool<ConnectionManager<PgConnection>>;

/// Proveedor abstracto de conexiones.
///
/// Este trait permite:
/// - Inyectar un pool real (producción/tests de integración).
/// - Factorear en tests sin acoplar a r2d2.
///
/// Contrato: devuelve una conexión válida o `PersistenceError::TransientIo`
/// en caso de error.
pub trait ConnectionProvider: Send + Sync + 'static {
    /// Obtiene una conexión lista para ejecutar consultas Diesel.
    fn connection(&self) -> Result<r2d2::PooledConnection<ConnectionManager<PgConnection>>, PersistenceError>;
}

/// Implementación concreta de `ConnectionProvider` respaldada por un `PgPool`.
pub struct PoolProvider {
    pub pool: PgPool,
}
impl ConnectionProvider for PoolProvider {
    fn connection(&self) -> Result<r2d2::PooledConnection<ConnectionManager<PgConnection>>, PersistenceError> {
        self.pool
            .get()
            .map_err(|e| PersistenceError::TransientIo(format!("pool error: {e}")))
    }
}

/// Estructura para inserción en `contacts`.
///
/// Se inserta siempre dentro de una transacción Diesel
/// (`build_transaction().read_write()`), devolviendo `id` vía `RETURNING`.
/// El `id` nunca viene del caller.
#[derive(Insertable, Debug)]
#[diesel(table_name = contacts)]
pub struct NewContactRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<i64>,
}

/// Fila mapeada de la tabla `contacts` para lecturas.
#[derive(Queryable, Debug)]
pub struct ContactRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<i64>,
}

fn row_to_contact(row: ContactRow) -> Contact {
    Contact::restore(row.id, row.first_name, row.last_name, row.email, row.phone)
}

/// Almacén de contactos sobre Postgres.
///
/// Responsabilidades:
/// - `save`: insertar un contacto en su propia transacción y devolverlo con
///   el `id` asignado.
/// - `fetch_all`: devolver la lista completa de contactos almacenados.
pub struct PgContactStore<P: ConnectionProvider> {
    pub provider: P,
}
impl<P: ConnectionProvider> PgContactStore<P> {
    /// Crea un `PgContactStore` a partir de un `ConnectionProvider`
    /// (generalmente `PoolProvider`).
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Inserta el contacto y devuelve la versión persistida (con `id`).
    ///
    /// Cada llamada abre y cierra su propia sesión: conexión tomada del pool,
    /// transacción read-write, commit, conexión devuelta al pool al salir de
    /// scope. Un fallo revierte sólo ESTA inserción; lo ya commiteado por
    /// llamadas anteriores no se ve afectado.
    pub fn save(&self, contact: &Contact) -> Result<Contact, PersistenceError> {
        debug!("save:start {} {}", contact.first_name(), contact.last_name());
        let mut conn = self.provider.connection()?;
        let row = NewContactRow { first_name: contact.first_name(),
                                  last_name: contact.last_name(),
                                  email: contact.email(),
                                  phone: contact.phone() };
        let id: i64 = conn.build_transaction()
                          .read_write()
                          .run(|tx_conn| {
                              diesel::insert_into(contacts::table).values(&row)
                                                                  .returning(contacts::id)
                                                                  .get_result(tx_conn)
                          })
                          .map_err(PersistenceError::from)?;
        debug!("save:done id={id}");
        Ok(Contact::restore(id,
                            contact.first_name().to_string(),
                            contact.last_name().to_string(),
                            contact.email().map(|e| e.to_string()),
                            contact.phone()))
    }

    /// Lee todas las filas de `contacts`, sin filtro, orden ni paginación.
    pub fn fetch_all(&self) -> Result<Vec<Contact>, PersistenceError> {
        debug!("fetch_all:start");
        let mut conn = self.provider.connection()?;
        let rows: Vec<ContactRow> = contacts::table.load(&mut conn).map_err(PersistenceError::from)?;
        debug!("fetch_all:done count={}", rows.len());
        Ok(rows.into_iter().map(row_to_contact).collect())
    }
}

/// Construye un pool Postgres r2d2 a partir de URL.
///
/// Comportamiento:
/// - Valida y ajusta tamaños (si `min_size > max_size`, usa `min_size =
///   max_size`; tamaños 0 se elevan a 1).
/// - Ejecuta migraciones inmediatamente tras el primer `get()`.
/// - Devuelve `PersistenceError::TransientIo` ante errores del pool/manager.
pub fn build_pool(database_url: &str, min_size: u32, max_size: u32) -> Result<PgPool, PersistenceError> {
    let validated_min = if min_size == 0 { 1 } else { min_size };
    let validated_max = if max_size == 0 { 1 } else { max_size };
    if validated_min > validated_max {
        eprintln!("WARN: min_size > max_size ({} > {}), ajustando min=max",
                  validated_min, validated_max);
    }
    let final_min = validated_min.min(validated_max);
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder().min_idle(Some(final_min))
                                    .max_size(validated_max)
                                    .build(manager)
                                    .map_err(|e| PersistenceError::TransientIo(format!("pool build: {e}")))?;
    // Ejecutar migraciones una sola vez al construir (primer connection checkout).
    {
        let mut conn = pool.get()
                           .map_err(|e| PersistenceError::TransientIo(format!("pool get for migrations: {e}")))?;
        run_pending_migrations(&mut conn)?;
    }
    Ok(pool)
}

/// Helper de desarrollo: carga `.env`, lee configuración (DATABASE_URL,
/// tamaños) y construye un pool ya migrado.
pub fn build_dev_pool_from_env() -> Result<PgPool, PersistenceError> {
    crate::config::init_dotenv();
    let cfg = crate::config::DbConfig::from_env();
    build_pool(&cfg.url, cfg.min_connections, cfg.max_connections)
}
