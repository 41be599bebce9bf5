use contact_domain::ContactBuilder;

#[test]
fn builder_with_all_fields() {
    // Full builder chain: every field lands as given, id stays unset
    let contact = ContactBuilder::new("Max", "Grer").with_email("greermp@gmail.com")
                                                    .with_phone(7032000574)
                                                    .build();
    assert_eq!(contact.first_name(), "Max");
    assert_eq!(contact.last_name(), "Grer");
    assert_eq!(contact.email(), Some("greermp@gmail.com"));
    assert_eq!(contact.phone(), Some(7032000574));
    assert!(contact.id().is_none());
}

#[test]
fn builder_without_optional_fields() {
    let contact = ContactBuilder::new("Joe", "Grer").build();
    assert_eq!(contact.first_name(), "Joe");
    assert_eq!(contact.last_name(), "Grer");
    assert!(contact.email().is_none());
    assert!(contact.phone().is_none());
    assert!(contact.id().is_none());
}

#[test]
fn builder_accepts_malformed_optional_values() {
    // Permissive on purpose: no email or phone format validation
    let contact = ContactBuilder::new("Max", "Grer").with_email("not-an-email")
                                                    .with_phone(-1)
                                                    .build();
    assert_eq!(contact.email(), Some("not-an-email"));
    assert_eq!(contact.phone(), Some(-1));
}

#[test]
fn restore_sets_identifier() {
    let contact = contact_domain::Contact::restore(42, "Max".into(), "Grer".into(), None, None);
    assert_eq!(contact.id(), Some(42));
    assert!(contact.email().is_none());
}

#[test]
fn display_marks_missing_fields() {
    let built = ContactBuilder::new("Max", "Grer").build();
    assert_eq!(built.to_string(), "<contact -: Max Grer, email: -, phone: ->");
    let stored = contact_domain::Contact::restore(7, "Max".into(), "Grer".into(),
                                                  Some("greermp@gmail.com".into()), Some(7032000574));
    assert_eq!(stored.to_string(),
               "<contact 7: Max Grer, email: greermp@gmail.com, phone: 7032000574>");
}
