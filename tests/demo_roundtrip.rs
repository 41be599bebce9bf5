//! Camino completo del demo contra Postgres real (requiere DATABASE_URL).

use contact_domain::ContactBuilder;
use contact_persistence::pg::{PgContactStore, PoolProvider};

#[test]
fn demo_path_saves_and_fetches_contacts() {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL no definido: omitiendo test de integración");
        return;
    }
    let pool = contact_persistence::build_dev_pool_from_env().expect("pool");
    let store = PgContactStore::new(PoolProvider { pool });

    let saved_b = store.save(&ContactBuilder::new("Max", "Grer").with_email("greermp@gmail.com")
                                                                .with_phone(7032000574)
                                                                .build())
                       .expect("save B");
    let saved_c = store.save(&ContactBuilder::new("Joe", "Grer").with_email("greermp@gmail.com")
                                                                .with_phone(7032000574)
                                                                .build())
                       .expect("save C");
    assert_ne!(saved_b.id(), saved_c.id());

    let all = store.fetch_all().expect("fetch_all");
    let ids: Vec<_> = all.iter().filter_map(|c| c.id()).collect();
    assert!(ids.contains(&saved_b.id().unwrap()));
    assert!(ids.contains(&saved_c.id().unwrap()));
    // Cada fila impresa por el demo sale por Display
    for contact in &all {
        assert!(contact.to_string().starts_with("<contact "));
    }
}
