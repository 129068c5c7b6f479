use chrono::NaiveDate;

use shared_types::{
    AppError, CreateHearingMinutesRequest, CreateHearingScheduleRequest,
    CreatePaymentRequestRequest, CreateRemarkRequest, CreateRemarkSuppDocsRequest,
    FileActionResponse, HearingMinutes, HearingSchedule, ListParams, Paginated,
    PaymentRequestResponse, Remark, SummonCase, SummonCaseDetail, SummonTimeSlot, SuppDoc,
    UpdateHearingScheduleRequest, UpdateSummonCaseRequest, UpdateTimeSlotRequest,
};

use crate::http::ApiClient;
use crate::pagination::query_string;

/// All active summon cases, both tracks.
pub async fn summon_case_list(
    api: &ApiClient,
    params: &ListParams,
) -> Result<Paginated<SummonCase>, AppError> {
    api.get(&format!("clerk/summon-case-list/{}", query_string(params)))
        .await
}

/// Cases on the council mediation track.
pub async fn council_case_list(
    api: &ApiClient,
    params: &ListParams,
) -> Result<Paginated<SummonCase>, AppError> {
    api.get(&format!("clerk/council-case-list/{}", query_string(params)))
        .await
}

/// Cases on the lupon conciliation track.
pub async fn lupon_case_list(
    api: &ApiClient,
    params: &ListParams,
) -> Result<Paginated<SummonCase>, AppError> {
    api.get(&format!("clerk/lupon-case-list/{}", query_string(params)))
        .await
}

pub async fn summon_case_detail(
    api: &ApiClient,
    sc_id: i64,
) -> Result<SummonCaseDetail, AppError> {
    api.get(&format!("clerk/summon-case-detail/{}/", sc_id)).await
}

pub async fn council_case_detail(
    api: &ApiClient,
    sc_id: i64,
) -> Result<SummonCaseDetail, AppError> {
    api.get(&format!("clerk/council-case-detail/{}/", sc_id)).await
}

pub async fn lupon_case_detail(api: &ApiClient, sc_id: i64) -> Result<SummonCaseDetail, AppError> {
    api.get(&format!("clerk/lupon-case-detail/{}/", sc_id)).await
}

/// Free/booked time slots for a hearing date.
pub async fn list_time_slots(
    api: &ApiClient,
    date: NaiveDate,
) -> Result<Vec<SummonTimeSlot>, AppError> {
    api.get(&format!("clerk/summon-time-slot-list/?date={}", date))
        .await
}

pub async fn create_hearing_schedule(
    api: &ApiClient,
    body: &CreateHearingScheduleRequest,
) -> Result<HearingSchedule, AppError> {
    api.post("clerk/hearing-schedule/", body).await
}

pub async fn create_hearing_minutes(
    api: &ApiClient,
    body: &CreateHearingMinutesRequest,
) -> Result<Vec<HearingMinutes>, AppError> {
    api.post("clerk/hearing-minutes/", body).await
}

pub async fn create_remark(api: &ApiClient, body: &CreateRemarkRequest) -> Result<Remark, AppError> {
    api.post("clerk/remark/", body).await
}

pub async fn create_remark_supp_docs(
    api: &ApiClient,
    body: &CreateRemarkSuppDocsRequest,
) -> Result<Vec<SuppDoc>, AppError> {
    api.post("clerk/remark-supp-docs/", body).await
}

pub async fn update_summon_case(
    api: &ApiClient,
    sc_id: i64,
    body: &UpdateSummonCaseRequest,
) -> Result<SummonCase, AppError> {
    api.put(&format!("clerk/update-summon-case/{}/", sc_id), body)
        .await
}

pub async fn update_hearing_schedule(
    api: &ApiClient,
    hs_id: i64,
    body: &UpdateHearingScheduleRequest,
) -> Result<HearingSchedule, AppError> {
    api.put(&format!("clerk/update-hearing-schedule/{}/", hs_id), body)
        .await
}

pub async fn update_time_slot_availability(
    api: &ApiClient,
    st_id: i64,
    body: &UpdateTimeSlotRequest,
) -> Result<SummonTimeSlot, AppError> {
    api.put(
        &format!("clerk/update-summon-time-availability/{}/", st_id),
        body,
    )
    .await
}

/// File-action reference for a complaint, fetched before escalation.
pub async fn file_action(api: &ApiClient, comp_id: i64) -> Result<FileActionResponse, AppError> {
    api.get(&format!("clerk/file-action/{}/", comp_id)).await
}

/// Raise the escalation service-charge payment request.
pub async fn create_payment_request(
    api: &ApiClient,
    body: &CreatePaymentRequestRequest,
) -> Result<PaymentRequestResponse, AppError> {
    api.post("treasurer/payment-request/", body).await
}
