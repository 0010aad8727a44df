use showlog::show::{ShowDraft, ShowField, ShowRecord, ValidationError};

fn complete() -> ShowDraft {
    ShowDraft {
        title: "Band A".to_string(),
        date: "01/01/2099".to_string(),
        time: "20:00".to_string(),
        city: "Metropolis".to_string(),
        venue_address: "123 Main St".to_string(),
        banner_image_ref: "img://1".to_string(),
    }
}

#[test]
fn complete_draft_validates() {
    let rec = complete().validate().unwrap();
    assert_eq!(rec.title(), "Band A");
    assert_eq!(rec.date(), "01/01/2099");
    assert_eq!(rec.time(), "20:00");
    assert_eq!(rec.city(), "Metropolis");
    assert_eq!(rec.venue_address(), "123 Main St");
    assert_eq!(rec.banner_image_ref(), "img://1");
    assert_eq!(rec.to_draft(), complete());
}

#[test]
fn each_empty_field_is_reported() {
    for field in ShowField::ALL {
        let mut draft = complete();
        draft.set(field, "");
        assert!(!draft.is_complete());
        assert_eq!(
            draft.validate(),
            Err(ValidationError {
                missing: vec![field]
            })
        );
    }
}

#[test]
fn missing_fields_listed_in_declaration_order() {
    let draft = ShowDraft {
        title: "Band A".to_string(),
        city: "Metropolis".to_string(),
        ..ShowDraft::default()
    };

    let err = draft.validate().unwrap_err();
    assert_eq!(
        err.missing,
        vec![
            ShowField::Date,
            ShowField::Time,
            ShowField::VenueAddress,
            ShowField::BannerImageRef
        ]
    );
    assert_eq!(
        err.to_string(),
        "show is missing required fields: date, time, venueAddress, bannerImageRef"
    );
}

#[test]
fn whitespace_counts_as_present() {
    let mut draft = complete();
    draft.set(ShowField::City, " ");
    assert!(draft.validate().is_ok());
}

#[test]
fn serde_uses_camel_case_and_validates_on_read() {
    let rec = complete().validate().unwrap();
    let json = serde_json::to_value(&rec).unwrap();
    assert_eq!(json["venueAddress"], "123 Main St");
    assert_eq!(json["bannerImageRef"], "img://1");

    let back: ShowRecord = serde_json::from_value(json).unwrap();
    assert_eq!(back, rec);

    let partial = serde_json::json!({ "title": "Band A", "date": "01/01/2099" });
    assert!(serde_json::from_value::<ShowRecord>(partial).is_err());
}
