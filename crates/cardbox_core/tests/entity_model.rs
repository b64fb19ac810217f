use cardbox_core::{Entity, EntityMeta, User};
use uuid::Uuid;

#[test]
fn meta_new_sets_defaults() {
    let meta = EntityMeta::new();

    assert!(Uuid::parse_str(&meta.id).is_ok());
    assert_eq!(meta.created_at, None);
    assert_eq!(meta.updated_at, None);
    assert!(meta.is_active);
    assert!(!meta.deleted);
}

#[test]
fn default_meta_still_generates_identity() {
    let first = EntityMeta::default();
    let second = EntityMeta::default();

    assert!(!first.id.is_empty());
    assert_ne!(first.id, second.id);
}

#[test]
fn user_new_sets_attributes_and_fresh_id() {
    let user = User::new("John Doe", "john.doe@example.com");

    assert!(Uuid::parse_str(user.id()).is_ok());
    assert_eq!(user.name, "John Doe");
    assert_eq!(user.email, "john.doe@example.com");
    assert!(user.meta.is_active);
    assert!(!user.meta.deleted);
}

#[test]
fn default_user_is_blank_with_fresh_id() {
    let user = User::default();

    assert!(!user.id().is_empty());
    assert_eq!(user.name, "");
    assert_eq!(user.email, "");
}

#[test]
fn new_users_get_distinct_ids() {
    let first = User::new("a", "a@example.com");
    let second = User::new("b", "b@example.com");

    assert_ne!(first.id(), second.id());
}

#[test]
fn with_id_preserves_caller_identity() {
    let user = User::with_id("external-7", "Imported", "imported@example.com");

    assert_eq!(user.id(), "external-7");
    assert_eq!(user.meta.id, "external-7");
}

#[test]
fn soft_delete_and_restore_work() {
    let mut meta = EntityMeta::new();

    meta.soft_delete();
    assert!(meta.deleted);

    meta.restore();
    assert!(!meta.deleted);
}

#[test]
fn user_serialization_uses_flat_wire_fields() {
    let user = User::with_id(
        "11111111-2222-4333-8444-555555555555",
        "John Doe",
        "john.doe@example.com",
    );

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["id"], "11111111-2222-4333-8444-555555555555");
    assert_eq!(json["name"], "John Doe");
    assert_eq!(json["email"], "john.doe@example.com");
    assert_eq!(json["is_active"], true);
    assert_eq!(json["deleted"], false);
    assert!(json["created_at"].is_null());
    assert!(json["updated_at"].is_null());

    let decoded: User = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, user);
}
