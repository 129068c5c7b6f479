use chrono::{Duration, NaiveDate, Utc};

use shared_types::{
    AppError, CaseTrack, CreateHearingMinutesRequest, CreateHearingScheduleRequest,
    CreatePaymentRequestRequest, CreateRemarkRequest, CreateRemarkSuppDocsRequest, FileUpload,
    HearingSchedule, PaymentRequestResponse, Remark, SummonCaseDetail, UpdateHearingScheduleRequest,
    UpdateSummonCaseRequest, UpdateTimeSlotRequest, STATUS_ESCALATED, STATUS_FORWARDED,
    STATUS_ONGOING, STATUS_RESOLVED, STATUS_WAITING,
};

use crate::api::summon;
use crate::http::ApiClient;

/// Days until the escalation service charge falls due.
const ESCALATION_DUE_DAYS: i64 = 7;

/// Summon mediation/conciliation workflow over the clerk endpoints.
///
/// Each operation issues a fixed sequence of independent REST calls.
/// The backend has no transaction spanning them, so a failure mid-way
/// leaves every earlier call applied and every later call unapplied;
/// the sequence order below is the backend's expected one and must
/// not be reordered.
pub struct SummonWorkflow<'a> {
    api: &'a ApiClient,
}

impl<'a> SummonWorkflow<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    async fn case_detail(&self, track: CaseTrack, sc_id: i64) -> Result<SummonCaseDetail, AppError> {
        match track {
            CaseTrack::Council => summon::council_case_detail(self.api, sc_id).await,
            CaseTrack::Lupon => summon::lupon_case_detail(self.api, sc_id).await,
        }
    }

    fn status_update(track: CaseTrack, status: &str) -> UpdateSummonCaseRequest {
        match track {
            CaseTrack::Council => UpdateSummonCaseRequest {
                sc_mediation_status: Some(status.to_string()),
                ..Default::default()
            },
            CaseTrack::Lupon => UpdateSummonCaseRequest {
                sc_conciliation_status: Some(status.to_string()),
                ..Default::default()
            },
        }
    }

    /// Whether a case may be resolved, forwarded, or escalated: every
    /// hearing schedule must be closed and carry a remark. Callers
    /// gate the terminal actions on this before issuing them.
    pub fn can_terminate(detail: &SummonCaseDetail) -> bool {
        detail.all_schedules_settled()
    }

    /// Schedule the next hearing for a case.
    ///
    /// Sequence: create the schedule row, set the case status to
    /// "Ongoing" on the chosen track, then book the time slot. The
    /// hearing level is derived from the case's current server-side
    /// schedule count, fetched here rather than taken from caller
    /// state.
    #[tracing::instrument(skip(self))]
    pub async fn add_schedule(
        &self,
        sc_id: i64,
        sd_date: NaiveDate,
        st_id: i64,
        track: CaseTrack,
    ) -> Result<HearingSchedule, AppError> {
        let detail = self.case_detail(track, sc_id).await?;
        let hs_level = detail.next_hearing_level().to_string();

        let schedule = summon::create_hearing_schedule(
            self.api,
            &CreateHearingScheduleRequest {
                sc_id,
                hs_level,
                sd_date,
                st_id,
            },
        )
        .await?;

        summon::update_summon_case(self.api, sc_id, &Self::status_update(track, STATUS_ONGOING))
            .await?;

        summon::update_time_slot_availability(
            self.api,
            st_id,
            &UpdateTimeSlotRequest { st_is_booked: true },
        )
        .await?;

        tracing::info!(sc_id, hs_id = schedule.hs_id, level = %schedule.hs_level, "hearing scheduled");
        Ok(schedule)
    }

    /// Record a remark on a hearing schedule, optionally with
    /// supporting documents.
    ///
    /// With `close` set the sequence continues: close the schedule,
    /// free its time slot, and put the case back to
    /// "Waiting for Schedule" on the chosen track.
    #[tracing::instrument(skip(self, remarks, files))]
    #[allow(clippy::too_many_arguments)]
    pub async fn add_remarks(
        &self,
        hs_id: i64,
        st_id: i64,
        sc_id: i64,
        remarks: &str,
        close: bool,
        track: CaseTrack,
        files: Vec<FileUpload>,
        staff_id: i64,
    ) -> Result<Remark, AppError> {
        let remark = summon::create_remark(
            self.api,
            &CreateRemarkRequest {
                hs_id,
                rem_remarks: remarks.to_string(),
                rem_date: Utc::now().date_naive(),
                staff_id,
            },
        )
        .await?;

        if !files.is_empty() {
            summon::create_remark_supp_docs(
                self.api,
                &CreateRemarkSuppDocsRequest {
                    rem_id: remark.rem_id,
                    files,
                },
            )
            .await?;
        }

        if close {
            summon::update_hearing_schedule(
                self.api,
                hs_id,
                &UpdateHearingScheduleRequest { hs_is_closed: true },
            )
            .await?;

            summon::update_time_slot_availability(
                self.api,
                st_id,
                &UpdateTimeSlotRequest {
                    st_is_booked: false,
                },
            )
            .await?;

            summon::update_summon_case(
                self.api,
                sc_id,
                &Self::status_update(track, STATUS_WAITING),
            )
            .await?;
        }

        tracing::info!(sc_id, hs_id, close, "remark recorded");
        Ok(remark)
    }

    /// Upload hearing minutes and close out the schedule.
    ///
    /// Sequence: post the minutes, close the schedule, set the case
    /// back to "Waiting for Schedule". The time slot is not touched
    /// here; freeing it belongs to the remark path.
    #[tracing::instrument(skip(self, files))]
    pub async fn add_hearing_minutes(
        &self,
        hs_id: i64,
        sc_id: i64,
        track: CaseTrack,
        files: Vec<FileUpload>,
    ) -> Result<(), AppError> {
        summon::create_hearing_minutes(
            self.api,
            &CreateHearingMinutesRequest { hs_id, files },
        )
        .await?;

        summon::update_hearing_schedule(
            self.api,
            hs_id,
            &UpdateHearingScheduleRequest { hs_is_closed: true },
        )
        .await?;

        summon::update_summon_case(self.api, sc_id, &Self::status_update(track, STATUS_WAITING))
            .await?;

        tracing::info!(sc_id, hs_id, "hearing minutes filed");
        Ok(())
    }

    /// Mark a case resolved on the given track and stamp the date.
    #[tracing::instrument(skip(self))]
    pub async fn resolve_case(&self, track: CaseTrack, sc_id: i64) -> Result<(), AppError> {
        let mut update = Self::status_update(track, STATUS_RESOLVED);
        update.sc_date_marked = Some(Utc::now().date_naive());
        summon::update_summon_case(self.api, sc_id, &update).await?;
        tracing::info!(sc_id, track = track.as_str(), "case resolved");
        Ok(())
    }

    /// Move a case from failed council mediation into the lupon
    /// track: one update setting the mediation status to
    /// "Forwarded to Lupon" and the conciliation status to
    /// "Waiting for Schedule" together.
    #[tracing::instrument(skip(self))]
    pub async fn forward_case(&self, sc_id: i64) -> Result<(), AppError> {
        summon::update_summon_case(
            self.api,
            sc_id,
            &UpdateSummonCaseRequest {
                sc_mediation_status: Some(STATUS_FORWARDED.to_string()),
                sc_conciliation_status: Some(STATUS_WAITING.to_string()),
                sc_date_marked: None,
            },
        )
        .await?;
        tracing::info!(sc_id, "case forwarded to lupon");
        Ok(())
    }

    /// Escalate a case out of conciliation into formal legal action.
    ///
    /// Sequence: fetch the complaint's file-action reference, raise
    /// the service-charge payment request (due seven days from
    /// today), then set the conciliation status to "Escalated".
    #[tracing::instrument(skip(self))]
    pub async fn escalate_case(
        &self,
        sc_id: i64,
        comp_id: i64,
    ) -> Result<PaymentRequestResponse, AppError> {
        let file_action = summon::file_action(self.api, comp_id).await?;

        let due_date = Utc::now().date_naive() + Duration::days(ESCALATION_DUE_DAYS);
        let payment_request = summon::create_payment_request(
            self.api,
            &CreatePaymentRequestRequest {
                comp_id,
                fa_id: file_action.fa_id,
                pr_due_date: due_date,
            },
        )
        .await?;

        summon::update_summon_case(
            self.api,
            sc_id,
            &Self::status_update(CaseTrack::Lupon, STATUS_ESCALATED),
        )
        .await?;

        tracing::info!(sc_id, comp_id, pr_id = payment_request.pr_id, "case escalated");
        Ok(payment_request)
    }
}
