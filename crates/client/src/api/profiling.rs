use validator::Validate;

use shared_types::{
    AppError, BusinessRecord, CreateBusinessRequest, CreateFamilyRequest, CreateHouseholdRequest,
    CreateResidentRequest, Family, Household, ListParams, Paginated, Resident,
    UpdateBusinessRequest, UpdateResidentRequest, Voter,
};

use crate::http::ApiClient;
use crate::pagination::query_string;

pub async fn resident_list(
    api: &ApiClient,
    params: &ListParams,
) -> Result<Paginated<Resident>, AppError> {
    api.get(&format!("profiling/resident-list/{}", query_string(params)))
        .await
}

pub async fn create_resident(
    api: &ApiClient,
    body: &CreateResidentRequest,
) -> Result<Resident, AppError> {
    body.validate()?;
    api.post("profiling/create-resident/", body).await
}

pub async fn update_resident(
    api: &ApiClient,
    res_id: i64,
    body: &UpdateResidentRequest,
) -> Result<Resident, AppError> {
    api.put(&format!("profiling/update-resident/{}/", res_id), body)
        .await
}

pub async fn family_list(
    api: &ApiClient,
    params: &ListParams,
) -> Result<Paginated<Family>, AppError> {
    api.get(&format!("profiling/family-list/{}", query_string(params)))
        .await
}

pub async fn create_family(api: &ApiClient, body: &CreateFamilyRequest) -> Result<Family, AppError> {
    api.post("profiling/create-family/", body).await
}

pub async fn household_list(
    api: &ApiClient,
    params: &ListParams,
) -> Result<Paginated<Household>, AppError> {
    api.get(&format!("profiling/household-list/{}", query_string(params)))
        .await
}

pub async fn create_household(
    api: &ApiClient,
    body: &CreateHouseholdRequest,
) -> Result<Household, AppError> {
    body.validate()?;
    api.post("profiling/create-household/", body).await
}

pub async fn business_list(
    api: &ApiClient,
    params: &ListParams,
) -> Result<Paginated<BusinessRecord>, AppError> {
    api.get(&format!("profiling/business-list/{}", query_string(params)))
        .await
}

pub async fn create_business(
    api: &ApiClient,
    body: &CreateBusinessRequest,
) -> Result<BusinessRecord, AppError> {
    body.validate()?;
    api.post("profiling/create-business/", body).await
}

pub async fn update_business(
    api: &ApiClient,
    bus_id: i64,
    body: &UpdateBusinessRequest,
) -> Result<BusinessRecord, AppError> {
    api.put(&format!("profiling/update-business/{}/", bus_id), body)
        .await
}

pub async fn voter_list(api: &ApiClient, params: &ListParams) -> Result<Paginated<Voter>, AppError> {
    api.get(&format!("profiling/voter-list/{}", query_string(params)))
        .await
}
