//! Static route table.
//!
//! Every navigable path is an `AppRoute` variant carrying its access rule, so
//! the Leptos router in `app.rs` and the guard read from the same table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::Role;

/// Redirect target for admins. No admin view exists; it lands on not-found.
pub const ADMIN_DASHBOARD_PATH: &str = "/admin-dashboard";

/// Who may open a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Protected { required_role: Option<Role> },
}

/// Every view the router can dispatch to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Login,
    Signup,
    Dashboard,
    PatientDashboard,
    DoctorDashboard,
    Appointments,
    BookAppointment,
    MedicalRecords,
    PatientRecords,
    MedicineAdvisor,
    SymptomChecker,
    Chat,
    NotFound,
}

impl AppRoute {
    pub const ALL: [Self; 14] = [
        Self::Home,
        Self::Login,
        Self::Signup,
        Self::Dashboard,
        Self::PatientDashboard,
        Self::DoctorDashboard,
        Self::Appointments,
        Self::BookAppointment,
        Self::MedicalRecords,
        Self::PatientRecords,
        Self::MedicineAdvisor,
        Self::SymptomChecker,
        Self::Chat,
        Self::NotFound,
    ];

    /// Path segment without the leading slash; empty for home and not-found.
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Home | Self::NotFound => "",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Dashboard => "dashboard",
            Self::PatientDashboard => "patient-dashboard",
            Self::DoctorDashboard => "doctor-dashboard",
            Self::Appointments => "appointments",
            Self::BookAppointment => "book-appointment",
            Self::MedicalRecords => "medical-records",
            Self::PatientRecords => "patient-records",
            Self::MedicineAdvisor => "medicine-advisor",
            Self::SymptomChecker => "symptom-checker",
            Self::Chat => "chat",
        }
    }

    /// Absolute path used for links and redirects.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home | Self::NotFound => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
            Self::PatientDashboard => "/patient-dashboard",
            Self::DoctorDashboard => "/doctor-dashboard",
            Self::Appointments => "/appointments",
            Self::BookAppointment => "/book-appointment",
            Self::MedicalRecords => "/medical-records",
            Self::PatientRecords => "/patient-records",
            Self::MedicineAdvisor => "/medicine-advisor",
            Self::SymptomChecker => "/symptom-checker",
            Self::Chat => "/chat",
        }
    }

    #[must_use]
    pub fn access(self) -> RouteAccess {
        match self {
            Self::Home | Self::Login | Self::Signup | Self::NotFound => RouteAccess::Public,
            Self::PatientDashboard => RouteAccess::Protected { required_role: Some(Role::Patient) },
            Self::DoctorDashboard | Self::PatientRecords | Self::MedicineAdvisor => {
                RouteAccess::Protected { required_role: Some(Role::Doctor) }
            }
            Self::Dashboard
            | Self::Appointments
            | Self::BookAppointment
            | Self::MedicalRecords
            | Self::SymptomChecker
            | Self::Chat => RouteAccess::Protected { required_role: None },
        }
    }

    /// Resolve a location path. Query, fragment and one trailing slash are ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);
        if trimmed.is_empty() || trimmed == "/" {
            return Self::Home;
        }
        Self::ALL
            .into_iter()
            .filter(|route| !matches!(route, Self::Home | Self::NotFound))
            .find(|route| route.path() == trimmed)
            .unwrap_or(Self::NotFound)
    }
}

/// Landing dashboard for a role, `None` when the role has nowhere to go.
#[must_use]
pub fn dashboard_path_for(role: Role) -> Option<&'static str> {
    match role {
        Role::Patient => Some(AppRoute::PatientDashboard.path()),
        Role::Doctor => Some(AppRoute::DoctorDashboard.path()),
        Role::Admin => Some(ADMIN_DASHBOARD_PATH),
        Role::None => None,
    }
}
