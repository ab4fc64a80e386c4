use super::*;

#[test]
fn ui_state_starts_with_no_notice() {
    assert!(UiState::default().notice.is_none());
}

#[test]
fn notice_constructors_set_kind_and_text() {
    let ok = Notice::success("saved");
    assert_eq!(ok.kind, NoticeKind::Success);
    assert_eq!(ok.text, "saved");

    let err = Notice::error("failed");
    assert_eq!(err.kind, NoticeKind::Error);
    assert_eq!(err.text, "failed");
}
