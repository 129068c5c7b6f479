use shared_types::{hearing_level_for, STATUS_ONGOING};

use crate::common::spawn_backend;

#[test]
fn level_table_is_fixed_for_counts_zero_through_five() {
    let expected = [
        "1st MEDIATION",
        "2nd MEDIATION",
        "3rd MEDIATION",
        "1st Conciliation",
        "2nd Conciliation",
        "3rd Conciliation",
    ];
    for (count, level) in expected.iter().enumerate() {
        assert_eq!(hearing_level_for(count), *level, "count {}", count);
    }
}

#[test]
fn counts_past_the_table_yield_none() {
    for count in 6..10 {
        assert_eq!(hearing_level_for(count), "None");
    }
}

#[tokio::test]
async fn detail_derives_next_level_from_server_schedule_count() {
    let (api, backend) = spawn_backend().await;
    backend.seed_case(1, 5, Some(STATUS_ONGOING), None);
    backend.seed_slot(2, true);
    backend.seed_schedule(11, 1, 2, "1st MEDIATION", true, true);
    backend.seed_schedule(12, 1, 2, "2nd MEDIATION", true, true);

    let detail = client::api::summon::summon_case_detail(&api, 1).await.unwrap();
    assert_eq!(detail.schedules.len(), 2);
    assert_eq!(detail.next_hearing_level(), "3rd MEDIATION");
}
