use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_light_theme() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn ui_state_default_sidebar_expanded_without_notice() {
    let state = UiState::default();
    assert!(!state.sidebar_collapsed);
    assert!(state.notice.is_none());
}

// =============================================================
// Notices
// =============================================================

#[test]
fn notify_replaces_previous_notice() {
    let mut state = UiState::default();
    state.notify(Notice::success("Success", "first"));
    state.notify(Notice::error("Error", "second"));
    let notice = state.notice.clone().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "second");
}

#[test]
fn dismiss_clears_notice() {
    let mut state = UiState::default();
    state.notify(Notice::success("Success", "done"));
    state.dismiss_notice();
    assert!(state.notice.is_none());
}
