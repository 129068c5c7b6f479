use chrono::NaiveDate;

use client::api::profiling;
use shared_types::{
    AppErrorKind, CreateBusinessRequest, CreateFamilyRequest, CreateHouseholdRequest,
    CreateResidentRequest, ListParams, UpdateBusinessRequest, UpdateResidentRequest,
};

use crate::common::spawn_backend;

fn resident_request(first: &str, last: &str) -> CreateResidentRequest {
    CreateResidentRequest {
        res_first_name: first.to_string(),
        res_middle_name: None,
        res_last_name: last.to_string(),
        res_birthdate: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        res_civil_status: "Single".to_string(),
        res_address: "Purok 2, Zone 5".to_string(),
        res_contact_number: Some("0917-555-0101".to_string()),
        res_is_voter: true,
        fam_id: None,
    }
}

#[tokio::test]
async fn create_and_search_residents() {
    let (api, _backend) = spawn_backend().await;

    profiling::create_resident(&api, &resident_request("Juan", "Dela Cruz"))
        .await
        .unwrap();
    profiling::create_resident(&api, &resident_request("Maria", "Santos"))
        .await
        .unwrap();

    let all = profiling::resident_list(&api, &ListParams::default()).await.unwrap();
    assert_eq!(all.count, 2);

    let searched = profiling::resident_list(&api, &ListParams::default().search("santos"))
        .await
        .unwrap();
    assert_eq!(searched.count, 1);
    assert_eq!(searched.results[0].res_last_name, "Santos");
}

#[tokio::test]
async fn create_resident_with_empty_name_is_rejected_client_side() {
    let (api, backend) = spawn_backend().await;

    let mut request = resident_request("", "Dela Cruz");
    request.res_first_name = String::new();

    let err = profiling::create_resident(&api, &request).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("res_first_name"));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn update_resident_changes_only_provided_fields() {
    let (api, _backend) = spawn_backend().await;

    let created = profiling::create_resident(&api, &resident_request("Juan", "Dela Cruz"))
        .await
        .unwrap();

    let updated = profiling::update_resident(
        &api,
        created.res_id,
        &UpdateResidentRequest {
            res_civil_status: Some("Married".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.res_civil_status, "Married");
    assert_eq!(updated.res_first_name, "Juan");
    assert_eq!(updated.res_address, "Purok 2, Zone 5");
}

#[tokio::test]
async fn business_lifecycle_and_status_filter() {
    let (api, _backend) = spawn_backend().await;

    let business = profiling::create_business(
        &api,
        &CreateBusinessRequest {
            bus_name: "Aling Nena's Store".to_string(),
            bus_owner: "Nena Reyes".to_string(),
            bus_address: "Main Road".to_string(),
            bus_status: "Pending".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(business.bus_status, "Pending");

    profiling::update_business(
        &api,
        business.bus_id,
        &UpdateBusinessRequest {
            bus_status: Some("Active".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let active = profiling::business_list(&api, &ListParams::default().status("Active"))
        .await
        .unwrap();
    assert_eq!(active.count, 1);

    let pending = profiling::business_list(&api, &ListParams::default().status("Pending"))
        .await
        .unwrap();
    assert_eq!(pending.count, 0);
}

#[tokio::test]
async fn families_and_households_link_up() {
    let (api, _backend) = spawn_backend().await;

    let household = profiling::create_household(
        &api,
        &CreateHouseholdRequest {
            hh_number: "HH-0042".to_string(),
            hh_address: "Sitio Ilaya".to_string(),
            hh_head: "Pedro Penduko".to_string(),
        },
    )
    .await
    .unwrap();

    let family = profiling::create_family(
        &api,
        &CreateFamilyRequest {
            fam_name: "Penduko".to_string(),
            hh_id: Some(household.hh_id),
        },
    )
    .await
    .unwrap();
    assert_eq!(family.hh_id, Some(household.hh_id));

    let families = profiling::family_list(&api, &ListParams::default()).await.unwrap();
    assert_eq!(families.count, 1);
    let households = profiling::household_list(&api, &ListParams::default()).await.unwrap();
    assert_eq!(households.count, 1);
}
