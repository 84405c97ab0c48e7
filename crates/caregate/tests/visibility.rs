//! End-to-end tests of the visibility engine: permission table,
//! projection, collection filtering, redaction, and capability queries,
//! exercised together the way page-level callers use them.

use proptest::prelude::*;
use serde_json::Value;

use caregate::{AccessContext, Capability, CapabilityProfile, EntityKind, EntityRecord, Role};
use caregate_testkit::fixtures::{appointment_owned_by, sample_appointment, sample_doctor, sample_patient};
use caregate_testkit::generators::{appointment_record, maybe_role, patient_record};

fn keys(value: &Value) -> Vec<String> {
    value
        .as_object()
        .expect("serialized view must be an object")
        .keys()
        .cloned()
        .collect()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn profile_lookup_is_total_with_all_ten_flags() {
    for role in ["admin", "doctor", "patient", "superuser"] {
        let profile = CapabilityProfile::for_role(Role::parse(role));
        let json = serde_json::to_value(profile).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 10, "profile for {role} must have ten flags");
        for cap in Capability::ALL {
            assert!(
                object.get(cap.name()).is_some_and(Value::is_boolean),
                "{} must be a boolean for {role}",
                cap.name()
            );
        }
    }
}

#[test]
fn unknown_role_gets_the_all_false_profile() {
    assert_eq!(
        CapabilityProfile::for_role(Role::parse("superuser")),
        &CapabilityProfile::RESTRICTED
    );
}

#[test]
fn admin_projection_equals_the_full_record() {
    init_tracing();
    let admin = AccessContext::from_session("admin", None);

    let patient = sample_patient();
    let view = serde_json::to_value(admin.project_patient(&patient)).unwrap();
    assert_eq!(view, serde_json::to_value(&patient).unwrap());

    let doctor = sample_doctor();
    let view = serde_json::to_value(admin.project_doctor(&doctor)).unwrap();
    assert_eq!(view, serde_json::to_value(&doctor).unwrap());

    let appointment = sample_appointment();
    let view = serde_json::to_value(admin.project_appointment(&appointment)).unwrap();
    assert_eq!(view, serde_json::to_value(&appointment).unwrap());
}

#[test]
fn non_admin_key_sets_are_subsets_of_admin() {
    let patient = sample_patient();
    let admin_keys = keys(&serde_json::to_value(
        AccessContext::from_session("admin", None).project_patient(&patient),
    )
    .unwrap());

    let structural = ["id", "name", "age", "gender", "bloodType", "conditions"];

    for role in ["doctor", "patient", "nobody"] {
        let ctx = AccessContext::from_session(role, Some("other"));
        let role_keys = keys(&serde_json::to_value(ctx.project_patient(&patient)).unwrap());
        for key in &role_keys {
            assert!(admin_keys.contains(key), "{role} exposed {key} beyond admin");
        }
        for key in structural {
            assert!(role_keys.contains(&key.to_owned()), "{role} missing structural {key}");
        }
    }
}

#[test]
fn patient_sees_own_contact_fields_with_matching_identity() {
    let patient = sample_patient();
    let ctx = AccessContext::from_session("patient", Some(patient.id.as_str()));
    let view = ctx.project_patient(&patient);
    assert_eq!(view.email.as_deref(), Some("jane.roe@example.com"));
    assert_eq!(view.phone.as_deref(), Some("+15551234567"));
}

#[test]
fn doctor_enumerates_only_owned_appointments_in_order() {
    let records = vec![
        appointment_owned_by("A1", "D1", "P1"),
        appointment_owned_by("A2", "D1", "P2"),
        appointment_owned_by("A3", "D2", "P3"),
    ];
    let ctx = AccessContext::from_session("doctor", Some("D1"));
    let kept = ctx.filter(&records);
    let ids: Vec<&str> = kept.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["A1", "A2"]);
}

#[test]
fn missing_identity_enumerates_nothing() {
    init_tracing();
    let records = vec![
        appointment_owned_by("A1", "D1", "P1"),
        appointment_owned_by("A2", "D2", "P2"),
    ];
    let ctx = AccessContext::from_session("doctor", None);
    assert!(ctx.filter(&records).is_empty());
}

#[test]
fn admin_mask_is_identity_even_for_masked_input() {
    let ctx = AccessContext::from_session("admin", None);
    for value in ["+15551234567", "jo*****@example.com", "+155********", "anything"] {
        assert_eq!(ctx.mask(value), value);
    }
}

#[test]
fn phone_mask_keeps_country_code_and_length() {
    let ctx = AccessContext::from_session("doctor", Some("D1"));
    let masked = ctx.mask("+15551234567");
    assert_eq!(masked, "+155********");
    assert_eq!(masked.len(), "+15551234567".len());
    assert!(!masked.contains("1234567"));
}

#[test]
fn email_mask_keeps_two_chars_and_domain() {
    let ctx = AccessContext::from_session("patient", Some("P1"));
    assert_eq!(ctx.mask("johndoe@example.com"), "jo*****@example.com");
}

#[test]
fn misspelled_capability_is_denied_even_for_admin() {
    let ctx = AccessContext::from_session("admin", None);
    assert!(ctx.can("canViewFinancialData"));
    assert!(!ctx.can("canViewFinancialDatas"));
}

#[test]
fn reprojection_never_resurrects_a_field() {
    let patient = sample_patient();
    for role in [Some(Role::Doctor), Some(Role::Patient), None] {
        let once = caregate::policy::project_patient(&patient, role, Some("P9"));
        let twice = caregate::policy::restrict_patient(once.clone(), role, Some("P9"));
        assert_eq!(once, twice);
    }
}

#[test]
fn filter_then_project_pipeline() {
    // The documented calling convention: filter the collection first,
    // then project each surviving record.
    let records = vec![
        appointment_owned_by("A1", "D1", "P1"),
        appointment_owned_by("A2", "D2", "P1"),
    ];
    let ctx = AccessContext::from_session("patient", Some("P1"));
    let views: Vec<_> = ctx
        .filter(&records)
        .into_iter()
        .map(|a| ctx.project_appointment(a))
        .collect();

    assert_eq!(views.len(), 2);
    for view in views {
        assert!(view.doctor_name.is_some());
        assert!(view.billing.is_some());
        assert!(view.confidential_notes.is_none());
    }
}

#[test]
fn kind_checked_projection_rejects_mismatch() {
    init_tracing();
    let ctx = AccessContext::from_session("admin", None);
    let record = EntityRecord::from(sample_patient());
    assert!(ctx.project(&record, EntityKind::Patient).is_ok());
    assert!(ctx.project(&record, EntityKind::Appointment).is_err());
}

proptest! {
    #[test]
    fn projection_is_always_a_key_subset_of_admin(
        record in patient_record(),
        role in maybe_role(),
    ) {
        let admin = caregate::policy::project_patient(&record, Some(Role::Admin), None);
        let other = caregate::policy::project_patient(&record, role, None);
        let admin_keys = keys(&serde_json::to_value(admin).unwrap());
        for key in keys(&serde_json::to_value(other).unwrap()) {
            prop_assert!(admin_keys.contains(&key));
        }
    }

    #[test]
    fn filter_output_is_a_subsequence_of_input(
        records in prop::collection::vec(appointment_record(), 0..8),
        role in maybe_role(),
        requester in prop::option::of("[DP][0-9]{1,3}"),
    ) {
        let kept = caregate::policy::filter_collection(
            &records,
            role,
            requester.as_deref(),
        );
        prop_assert!(kept.len() <= records.len());
        // Kept records appear in their original relative order.
        let mut cursor = 0usize;
        for record in kept {
            let position = records[cursor..]
                .iter()
                .position(|candidate| std::ptr::eq(candidate, record));
            prop_assert!(position.is_some());
            cursor += position.unwrap() + 1;
        }
    }

    #[test]
    fn projection_never_panics(
        record in patient_record(),
        role in maybe_role(),
        requester in prop::option::of("[a-zA-Z0-9]{0,6}"),
    ) {
        let _ = caregate::policy::project_patient(&record, role, requester.as_deref());
    }
}
