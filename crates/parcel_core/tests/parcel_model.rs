use parcel_core::{Parcel, ParcelStatus};

#[test]
fn parcel_new_starts_registered_and_unsaved() {
    let parcel = Parcel::new(1000, "test", "2024-01-01T00:00:00Z");

    assert_eq!(parcel.number, 0);
    assert_eq!(parcel.client, 1000);
    assert_eq!(parcel.status, "registered");
    assert_eq!(parcel.address, "test");
    assert_eq!(parcel.created_at, "2024-01-01T00:00:00Z");
    assert!(parcel.is_registered());
}

#[test]
fn status_literals_match_storage_values() {
    assert_eq!(ParcelStatus::Registered.as_str(), "registered");
    assert_eq!(ParcelStatus::Sent.as_str(), "sent");
    assert_eq!(ParcelStatus::Delivered.to_string(), "delivered");

    for status in [
        ParcelStatus::Registered,
        ParcelStatus::Sent,
        ParcelStatus::Delivered,
    ] {
        assert_eq!(ParcelStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(ParcelStatus::parse("Sent"), None);
}

#[test]
fn status_advances_along_lifecycle() {
    assert_eq!(ParcelStatus::Registered.next(), Some(ParcelStatus::Sent));
    assert_eq!(ParcelStatus::Sent.next(), Some(ParcelStatus::Delivered));
    assert_eq!(ParcelStatus::Delivered.next(), None);
}

#[test]
fn unknown_status_text_is_not_registered() {
    let mut parcel = Parcel::new(1, "a", "2024-01-01T00:00:00Z");
    parcel.status = "lost".to_string();

    assert_eq!(parcel.known_status(), None);
    assert!(!parcel.is_registered());
}

#[test]
fn parcel_serialization_uses_expected_wire_fields() {
    let mut parcel = Parcel::new(7, "Main st. 1", "2024-01-01T00:00:00Z");
    parcel.number = 3;

    let json = serde_json::to_value(&parcel).unwrap();
    assert_eq!(json["number"], 3);
    assert_eq!(json["client"], 7);
    assert_eq!(json["status"], "registered");
    assert_eq!(json["address"], "Main st. 1");
    assert_eq!(json["created_at"], "2024-01-01T00:00:00Z");

    let decoded: Parcel = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, parcel);

    assert_eq!(
        serde_json::to_value(ParcelStatus::Delivered).unwrap(),
        "delivered"
    );
}
