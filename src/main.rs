//! Demo de persistencia de contactos.
//!
//! Secuencial de punta a punta: construye dos contactos con el builder,
//! guarda cada uno en su propia transacción, lee todos los almacenados y los
//! imprime. Cualquier error de base de datos aborta el proceso (exit != 0);
//! no hay reintentos ni recuperación.

use contact_domain::ContactBuilder;
use contact_persistence::pg::{PgContactStore, PoolProvider};

fn main() {
    // RUST_LOG controla la visibilidad de los logs de la capa de persistencia.
    env_logger::init();

    // Si no hay gssencmode en la URL y el env no está seteado, deshabilitar
    // GSS para evitar aborts en entornos con libpq+GSS.
    if let Ok(url) = std::env::var("DATABASE_URL") {
        if !url.to_lowercase().contains("gssencmode=") && std::env::var("PGGSSENCMODE").is_err() {
            std::env::set_var("PGGSSENCMODE", "disable");
        }
    }

    // Construcción en memoria vía builder: nombre y apellido obligatorios,
    // email y teléfono encadenables.
    let contact_b = ContactBuilder::new("Max", "Grer").with_email("greermp@gmail.com")
                                                      .with_phone(7032000574)
                                                      .build();
    let contact_c = ContactBuilder::new("Joe", "Grer").with_email("greermp@gmail.com")
                                                      .with_phone(7032000574)
                                                      .build();

    // Pool construido explícitamente y pasado al almacén por valor, sin
    // singletons. Carga .env, corre migraciones y queda listo.
    let pool = contact_persistence::build_dev_pool_from_env().expect("pool Postgres");
    let store = PgContactStore::new(PoolProvider { pool });

    store.save(&contact_b).expect("guardar contacto B");
    store.save(&contact_c).expect("guardar contacto C");

    for contact in store.fetch_all().expect("leer contactos") {
        println!("{contact}");
    }
    // El pool (y sus conexiones) se cierra al salir de scope.
}
