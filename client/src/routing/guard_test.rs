use super::*;
use crate::state::session::Session;

fn signed_in(role: Role) -> AuthState {
    AuthState {
        session: Some(Session::new("u1", "Test User", "t@example.com", role, None)),
        loading: false,
    }
}

fn protected(required_role: Option<Role>) -> RouteAccess {
    RouteAccess::Protected { required_role }
}

// =============================================================================
// GuardState::from_auth
// =============================================================================

#[test]
fn loading_wins_over_session_presence() {
    let mut state = signed_in(Role::Doctor);
    state.loading = true;
    assert_eq!(GuardState::from_auth(&state), GuardState::Loading);
}

#[test]
fn no_session_is_unauthenticated() {
    let state = AuthState { session: None, loading: false };
    assert_eq!(GuardState::from_auth(&state), GuardState::Unauthenticated);
}

#[test]
fn session_maps_to_authorized_role() {
    assert_eq!(
        GuardState::from_auth(&signed_in(Role::Patient)),
        GuardState::Authorized(Role::Patient)
    );
}

// =============================================================================
// evaluate
// =============================================================================

#[test]
fn public_routes_always_allowed() {
    for state in [
        GuardState::Loading,
        GuardState::Unauthenticated,
        GuardState::Authorized(Role::None),
    ] {
        assert_eq!(evaluate(state, RouteAccess::Public), GuardDecision::Allow);
    }
}

#[test]
fn protected_route_while_loading_is_pending() {
    assert_eq!(evaluate(GuardState::Loading, protected(None)), GuardDecision::Pending);
}

#[test]
fn every_protected_route_redirects_anonymous_users_to_login() {
    for route in AppRoute::ALL {
        if route.access() == RouteAccess::Public {
            continue;
        }
        assert_eq!(
            evaluate(GuardState::Unauthenticated, route.access()),
            GuardDecision::Redirect("/login"),
            "{route:?}"
        );
    }
}

#[test]
fn doctor_on_patient_route_goes_to_doctor_dashboard() {
    let decision = evaluate(GuardState::Authorized(Role::Doctor), AppRoute::PatientDashboard.access());
    assert_eq!(decision, GuardDecision::Redirect("/doctor-dashboard"));
}

#[test]
fn patient_on_doctor_route_goes_to_patient_dashboard() {
    for route in [AppRoute::DoctorDashboard, AppRoute::PatientRecords, AppRoute::MedicineAdvisor] {
        assert_eq!(
            evaluate(GuardState::Authorized(Role::Patient), route.access()),
            GuardDecision::Redirect("/patient-dashboard")
        );
    }
}

#[test]
fn admin_mismatch_goes_to_admin_dashboard() {
    assert_eq!(
        evaluate(GuardState::Authorized(Role::Admin), protected(Some(Role::Doctor))),
        GuardDecision::Redirect("/admin-dashboard")
    );
}

#[test]
fn matching_role_is_allowed() {
    assert_eq!(
        evaluate(GuardState::Authorized(Role::Doctor), protected(Some(Role::Doctor))),
        GuardDecision::Allow
    );
}

#[test]
fn any_role_passes_unrestricted_protected_route() {
    for role in [Role::Patient, Role::Doctor, Role::Admin, Role::None] {
        assert_eq!(evaluate(GuardState::Authorized(role), protected(None)), GuardDecision::Allow);
    }
}

#[test]
fn roleless_user_on_restricted_route_is_flagged_not_passed() {
    assert_eq!(
        evaluate(GuardState::Authorized(Role::None), protected(Some(Role::Patient))),
        GuardDecision::RoleUnassigned { required: Role::Patient }
    );
}

// =============================================================================
// dashboard_redirect
// =============================================================================

#[test]
fn dashboard_entry_sends_roles_home() {
    assert_eq!(
        dashboard_redirect(GuardState::Authorized(Role::Patient)),
        GuardDecision::Redirect("/patient-dashboard")
    );
    assert_eq!(
        dashboard_redirect(GuardState::Authorized(Role::Doctor)),
        GuardDecision::Redirect("/doctor-dashboard")
    );
}

#[test]
fn dashboard_entry_waits_for_load() {
    assert_eq!(dashboard_redirect(GuardState::Loading), GuardDecision::Pending);
}

#[test]
fn dashboard_entry_without_role_is_flagged() {
    assert_eq!(
        dashboard_redirect(GuardState::Authorized(Role::None)),
        GuardDecision::RoleUnassigned { required: Role::None }
    );
}

// =============================================================================
// restored sessions
// =============================================================================

#[test]
fn restored_doctor_session_is_sent_to_doctor_dashboard() {
    use std::sync::Arc;

    use crate::routing::routes::AppRoute;
    use crate::services::session_store::{SESSION_STORAGE_KEY, SessionStore};
    use crate::util::storage::{KeyValueStore, MemoryStorage};

    let storage = Arc::new(MemoryStorage::new());
    storage
        .set(
            SESSION_STORAGE_KEY,
            r#"{"userId":"doc-1","displayName":"Dr. Who","email":"who@example.com","role":"doctor"}"#,
        )
        .unwrap();
    let store = SessionStore::new(storage as Arc<dyn KeyValueStore>);
    store.init();

    assert_eq!(
        evaluate(GuardState::from_auth(&store.current()), AppRoute::PatientDashboard.access()),
        GuardDecision::Redirect("/doctor-dashboard")
    );
    assert_eq!(
        evaluate(GuardState::from_auth(&store.current()), AppRoute::DoctorDashboard.access()),
        GuardDecision::Allow
    );
}
