use super::*;

#[test]
fn test_verify_moves_pending_to_in_progress() {
    let next = ReportStatus::Pending.apply(ReportAction::Verify).unwrap();
    assert_eq!(next, ReportStatus::InProgress);
}

#[test]
fn test_complete_moves_in_progress_to_done() {
    let next = ReportStatus::InProgress
        .apply(ReportAction::Complete)
        .unwrap();
    assert_eq!(next, ReportStatus::Done);
}

#[test]
fn test_rejects_actions_out_of_order() {
    assert!(matches!(
        ReportStatus::Pending.apply(ReportAction::Complete),
        Err(WorkflowError::InvalidTransition { .. })
    ));
    assert!(ReportStatus::InProgress.apply(ReportAction::Verify).is_err());
    assert!(ReportStatus::Done.apply(ReportAction::Verify).is_err());
    assert!(ReportStatus::Done.apply(ReportAction::Complete).is_err());
}

#[test]
fn test_available_actions_match_transition_table() {
    for status in ReportStatus::ALL {
        for action in [ReportAction::Verify, ReportAction::Complete] {
            let offered = status.available_actions().contains(&action);
            assert_eq!(offered, status.apply(action).is_ok());
        }
    }
}

#[test]
fn test_parse_stored_status_strings() {
    assert_eq!(
        "Menunggu Verifikasi".parse::<ReportStatus>().unwrap(),
        ReportStatus::Pending
    );
    assert_eq!(
        "Dalam Proses".parse::<ReportStatus>().unwrap(),
        ReportStatus::InProgress
    );
    assert_eq!("Selesai".parse::<ReportStatus>().unwrap(), ReportStatus::Done);
}

#[test]
fn test_legacy_verified_status_is_in_progress() {
    assert_eq!(
        "Terverifikasi".parse::<ReportStatus>().unwrap(),
        ReportStatus::InProgress
    );
}

#[test]
fn test_unknown_status_is_rejected() {
    let err = "Ditolak".parse::<ReportStatus>().unwrap_err();
    assert_eq!(err, WorkflowError::UnknownStatus("Ditolak".to_string()));
}

#[test]
fn test_report_status_serializes_as_stored_string() {
    let json = serde_json::to_string(&ReportStatus::Done).unwrap();
    assert_eq!(json, "\"Selesai\"");

    let back: ReportStatus = serde_json::from_str("\"Dalam Proses\"").unwrap();
    assert_eq!(back, ReportStatus::InProgress);
}

#[test]
fn test_spot_status_advances_until_repaired() {
    let status = SpotStatus::default();
    assert_eq!(status, SpotStatus::NotRepaired);

    let status = status.advance().unwrap();
    assert_eq!(status, SpotStatus::InRepair);

    let status = status.advance().unwrap();
    assert_eq!(status, SpotStatus::Repaired);

    assert!(matches!(
        status.advance(),
        Err(WorkflowError::FinalState(_))
    ));
}

#[test]
fn test_spot_status_lenient_decoding() {
    let status: SpotStatus = serde_json::from_str("\"sedang_diperbaiki\"").unwrap();
    assert_eq!(status, SpotStatus::InRepair);

    let status: SpotStatus = serde_json::from_str("\"rusak parah\"").unwrap();
    assert_eq!(status, SpotStatus::NotRepaired);

    let status: SpotStatus = serde_json::from_str("null").unwrap();
    assert_eq!(status, SpotStatus::NotRepaired);
}

#[test]
fn test_spot_status_labels() {
    assert_eq!(SpotStatus::NotRepaired.label(), "Belum Diperbaiki");
    assert_eq!(SpotStatus::InRepair.label(), "Sedang Diperbaiki");
    assert_eq!(SpotStatus::Repaired.label(), "Sudah Diperbaiki");
    assert_eq!(
        serde_json::to_string(&SpotStatus::Repaired).unwrap(),
        "\"sudah_diperbaiki\""
    );
}
