use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

// ── Validation constants ────────────────────────────────────────────

/// Valid civil status values accepted by the profiling endpoints.
pub const CIVIL_STATUSES: &[&str] = &[
    "Single", "Married", "Widowed", "Separated", "Divorced",
];

/// Valid business registration statuses.
pub const BUSINESS_STATUSES: &[&str] = &["Pending", "Active", "Expired", "Closed"];

pub fn is_valid_civil_status(s: &str) -> bool {
    CIVIL_STATUSES.contains(&s)
}

pub fn is_valid_business_status(s: &str) -> bool {
    BUSINESS_STATUSES.contains(&s)
}

// ── Rows ────────────────────────────────────────────────────────────

/// A profiled resident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resident {
    pub res_id: i64,
    pub res_first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub res_middle_name: Option<String>,
    pub res_last_name: String,
    pub res_birthdate: NaiveDate,
    pub res_civil_status: String,
    pub res_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub res_contact_number: Option<String>,
    pub res_is_voter: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fam_id: Option<i64>,
}

/// A family unit linking residents to a household.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    pub fam_id: i64,
    pub fam_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hh_id: Option<i64>,
    pub fam_member_count: i64,
}

/// A household record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Household {
    pub hh_id: i64,
    pub hh_number: String,
    pub hh_address: String,
    pub hh_head: String,
}

/// A registered business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub bus_id: i64,
    pub bus_name: String,
    pub bus_owner: String,
    pub bus_address: String,
    pub bus_status: String,
    pub bus_date_registered: NaiveDate,
}

/// A voter entry from the precinct list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voter {
    pub vot_id: i64,
    pub vot_name: String,
    pub vot_precinct: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub res_id: Option<i64>,
}

// ── Request types ───────────────────────────────────────────────────

/// Request to profile a new resident.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateResidentRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub res_first_name: String,
    #[serde(default)]
    pub res_middle_name: Option<String>,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub res_last_name: String,
    pub res_birthdate: NaiveDate,
    pub res_civil_status: String,
    pub res_address: String,
    #[serde(default)]
    pub res_contact_number: Option<String>,
    #[serde(default)]
    pub res_is_voter: bool,
    #[serde(default)]
    pub fam_id: Option<i64>,
}

/// Partial resident update; only provided fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateResidentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub res_first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub res_middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub res_last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub res_civil_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub res_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub res_contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub res_is_voter: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fam_id: Option<i64>,
}

/// Request to create a family record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFamilyRequest {
    pub fam_name: String,
    #[serde(default)]
    pub hh_id: Option<i64>,
}

/// Request to create a household record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateHouseholdRequest {
    #[validate(length(min = 1, message = "Household number is required"))]
    pub hh_number: String,
    pub hh_address: String,
    pub hh_head: String,
}

/// Request to register a business.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBusinessRequest {
    #[validate(length(min = 1, message = "Business name is required"))]
    pub bus_name: String,
    #[validate(length(min = 1, message = "Owner name is required"))]
    pub bus_owner: String,
    pub bus_address: String,
    #[serde(default = "default_business_status")]
    pub bus_status: String,
}

fn default_business_status() -> String {
    "Pending".to_string()
}

/// Partial business update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBusinessRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus_owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus_status: Option<String>,
}
