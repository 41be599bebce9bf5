use serde::{Deserialize, Serialize};
use std::fmt;

/// Contacto inmutable del dominio.
///
/// El `id` lo asigna la base de datos al insertar; un contacto recién
/// construido con el builder no tiene id. Email y teléfono son opcionales
/// y se aceptan tal cual (sin validar formato).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    id: Option<i64>,
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: Option<i64>,
}

impl Contact {
    // Constructor privado: sólo el builder y `restore` crean contactos.
    fn new(id: Option<i64>, first_name: String, last_name: String, email: Option<String>, phone: Option<i64>) -> Self {
        Contact { id,
                  first_name,
                  last_name,
                  email,
                  phone }
    }

    /// Reconstruye un contacto ya persistido (id asignado por la base).
    /// Lo usa la capa de persistencia al mapear filas leídas.
    pub fn restore(id: i64, first_name: String, last_name: String, email: Option<String>, phone: Option<i64>) -> Self {
        Contact::new(Some(id), first_name, last_name, email, phone)
    }

    pub fn id(&self) -> Option<i64> { self.id }
    pub fn first_name(&self) -> &str { &self.first_name }
    pub fn last_name(&self) -> &str { &self.last_name }
    pub fn email(&self) -> Option<&str> { self.email.as_deref() }
    pub fn phone(&self) -> Option<i64> { self.phone }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.map(|v| v.to_string()).unwrap_or_else(|| "-".into());
        let email = self.email.as_deref().unwrap_or("-");
        let phone = self.phone.map(|v| v.to_string()).unwrap_or_else(|| "-".into());
        write!(f, "<contact {}: {} {}, email: {}, phone: {}>",
               id, self.first_name, self.last_name, email, phone)
    }
}

/// Builder de contactos: nombre y apellido obligatorios al crearlo,
/// email y teléfono encadenables. `build` nunca falla.
#[derive(Debug, Clone)]
pub struct ContactBuilder {
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: Option<i64>,
}

impl ContactBuilder {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        ContactBuilder { first_name: first_name.to_string(),
                         last_name: last_name.to_string(),
                         email: None,
                         phone: None }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn with_phone(mut self, phone: i64) -> Self {
        self.phone = Some(phone);
        self
    }

    pub fn build(self) -> Contact {
        Contact::new(None, self.first_name, self.last_name, self.email, self.phone)
    }
}
