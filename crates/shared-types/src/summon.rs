use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Controlled vocabularies ─────────────────────────────────────────

/// Valid mediation statuses for the council track.
pub const MEDIATION_STATUSES: &[&str] = &[
    "Waiting for Schedule",
    "Ongoing",
    "Resolved",
    "Forwarded to Lupon",
];

/// Valid conciliation statuses for the lupon track.
pub const CONCILIATION_STATUSES: &[&str] = &[
    "Waiting for Schedule",
    "Ongoing",
    "Resolved",
    "Escalated",
];

pub const STATUS_WAITING: &str = "Waiting for Schedule";
pub const STATUS_ONGOING: &str = "Ongoing";
pub const STATUS_RESOLVED: &str = "Resolved";
pub const STATUS_FORWARDED: &str = "Forwarded to Lupon";
pub const STATUS_ESCALATED: &str = "Escalated";

/// Check whether a status string is a valid mediation status.
pub fn is_valid_mediation_status(s: &str) -> bool {
    MEDIATION_STATUSES.contains(&s)
}

/// Check whether a status string is a valid conciliation status.
pub fn is_valid_conciliation_status(s: &str) -> bool {
    CONCILIATION_STATUSES.contains(&s)
}

/// Hearing levels in sequence order. A case holds at most three
/// mediation hearings before the lupon conciliation proceedings.
pub const HEARING_LEVELS: &[&str] = &[
    "1st MEDIATION",
    "2nd MEDIATION",
    "3rd MEDIATION",
    "1st Conciliation",
    "2nd Conciliation",
    "3rd Conciliation",
];

/// Derive the level for the next hearing from how many schedules the
/// case already has. Counts past the table yield `"None"`; the
/// backend has no seventh level and the original client behaved the
/// same way.
pub fn hearing_level_for(schedule_count: usize) -> &'static str {
    HEARING_LEVELS.get(schedule_count).copied().unwrap_or("None")
}

/// Which dispute-resolution track an operation targets. Council
/// operations patch `sc_mediation_status`; lupon operations patch
/// `sc_conciliation_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseTrack {
    Council,
    Lupon,
}

impl CaseTrack {
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "Council" => Some(CaseTrack::Council),
            "Lupon" => Some(CaseTrack::Lupon),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseTrack::Council => "Council",
            CaseTrack::Lupon => "Lupon",
        }
    }
}

// ── Wire rows ───────────────────────────────────────────────────────

/// A summon case as the list endpoints return it. The two status
/// fields are independent: a case forwarded to the lupon keeps its
/// terminal mediation status while the conciliation track progresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummonCase {
    pub sc_id: i64,
    pub sc_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sc_mediation_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sc_conciliation_status: Option<String>,
    pub sc_reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sc_date_marked: Option<NaiveDate>,
    /// Originating complaint.
    pub comp_id: i64,
}

/// A bookable hearing time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummonTimeSlot {
    pub st_id: i64,
    pub st_start: String,
    pub st_end: String,
    pub st_is_booked: bool,
}

/// Staff-authored note closing out a hearing schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Remark {
    pub rem_id: i64,
    pub hs_id: i64,
    pub rem_remarks: String,
    pub rem_date: NaiveDate,
    #[serde(default)]
    pub supp_docs: Vec<SuppDoc>,
    pub staff_id: i64,
}

/// Supporting document attached to a remark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuppDoc {
    pub rsd_id: i64,
    pub rem_id: i64,
    pub rsd_file_name: String,
}

/// Minutes file attached to a hearing schedule. A schedule may carry
/// zero or more minute sets; uploads append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HearingMinutes {
    pub hm_id: i64,
    pub hs_id: i64,
    pub hm_file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hm_date_uploaded: Option<NaiveDate>,
}

/// One scheduled hearing session at a given mediation/conciliation
/// level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HearingSchedule {
    pub hs_id: i64,
    pub sc_id: i64,
    pub hs_level: String,
    pub hs_is_closed: bool,
    pub sd_date: NaiveDate,
    pub time_slot: SummonTimeSlot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<Remark>,
    #[serde(default)]
    pub minutes: Vec<HearingMinutes>,
}

/// Full case detail with nested hearing schedules, as the detail
/// endpoints return it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummonCaseDetail {
    #[serde(flatten)]
    pub case: SummonCase,
    #[serde(default)]
    pub schedules: Vec<HearingSchedule>,
}

impl SummonCaseDetail {
    /// Level the next schedule would be created at, derived from the
    /// authoritative server-side schedule list.
    pub fn next_hearing_level(&self) -> &'static str {
        hearing_level_for(self.schedules.len())
    }

    /// Whether every schedule is closed and carries a remark, the
    /// precondition for resolving, forwarding, or escalating a case.
    pub fn all_schedules_settled(&self) -> bool {
        self.schedules
            .iter()
            .all(|hs| hs.hs_is_closed && hs.remark.is_some())
    }
}

// ── Request types ───────────────────────────────────────────────────

/// Request to create a hearing schedule (books the time slot via a
/// follow-up call; see the workflow layer for the full sequence).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHearingScheduleRequest {
    pub sc_id: i64,
    pub hs_level: String,
    pub sd_date: NaiveDate,
    pub st_id: i64,
}

/// Request to create a remark on a hearing schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRemarkRequest {
    pub hs_id: i64,
    pub rem_remarks: String,
    pub rem_date: NaiveDate,
    pub staff_id: i64,
}

/// One file in an upload batch. The payload travels as an
/// already-encoded string; the client never re-encodes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileUpload {
    pub file_name: String,
    pub file: String,
}

/// Request to attach supporting documents to a remark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRemarkSuppDocsRequest {
    pub rem_id: i64,
    pub files: Vec<FileUpload>,
}

/// Request to upload hearing minutes for a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHearingMinutesRequest {
    pub hs_id: i64,
    pub files: Vec<FileUpload>,
}

/// Partial update of a summon case; only provided fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSummonCaseRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sc_mediation_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sc_conciliation_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sc_date_marked: Option<NaiveDate>,
}

/// Partial update of a hearing schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateHearingScheduleRequest {
    pub hs_is_closed: bool,
}

/// Toggle a time slot's booked flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTimeSlotRequest {
    pub st_is_booked: bool,
}

/// File-action reference fetched before escalating a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileActionResponse {
    pub fa_id: i64,
    pub comp_id: i64,
}

/// Request to raise the escalation service charge. `pr_due_date` is
/// seven days from creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentRequestRequest {
    pub comp_id: i64,
    pub fa_id: i64,
    pub pr_due_date: NaiveDate,
}

/// A raised payment request row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequestResponse {
    pub pr_id: i64,
    pub comp_id: i64,
    pub fa_id: i64,
    pub pr_due_date: NaiveDate,
}
