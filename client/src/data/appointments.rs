//! Appointment fixtures and the doctor directory used for booking.

use crate::util::time;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub const ALL: [Self; 3] = [Self::Upcoming, Self::Completed, Self::Cancelled];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Doctor {
    pub name: &'static str,
    pub specialty: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Appointment {
    pub doctor: Doctor,
    pub patient: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub status: AppointmentStatus,
    pub video: bool,
}

pub const DOCTORS: &[Doctor] = &[
    Doctor { name: "Dr. Jane Smith", specialty: "Cardiologist" },
    Doctor { name: "Dr. Michael Chen", specialty: "Dermatologist" },
    Doctor { name: "Dr. Sarah Johnson", specialty: "Neurologist" },
    Doctor { name: "Dr. Robert Williams", specialty: "Orthopedic Surgeon" },
];

pub const AVAILABLE_TIMES: &[&str] = &[
    "9:00 AM", "10:00 AM", "11:00 AM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
];

pub const APPOINTMENTS: &[Appointment] = &[
    Appointment {
        doctor: DOCTORS[0],
        patient: "Emily Johnson",
        date: "June 15, 2025",
        time: "10:00 AM - 10:30 AM",
        status: AppointmentStatus::Upcoming,
        video: true,
    },
    Appointment {
        doctor: DOCTORS[1],
        patient: "David Chen",
        date: "June 18, 2025",
        time: "2:00 PM - 2:30 PM",
        status: AppointmentStatus::Upcoming,
        video: false,
    },
    Appointment {
        doctor: DOCTORS[2],
        patient: "Sarah Williams",
        date: "May 28, 2025",
        time: "3:30 PM - 4:00 PM",
        status: AppointmentStatus::Completed,
        video: true,
    },
    Appointment {
        doctor: DOCTORS[3],
        patient: "Michael Brown",
        date: "June 5, 2025",
        time: "11:00 AM - 11:30 AM",
        status: AppointmentStatus::Cancelled,
        video: false,
    },
];

#[must_use]
pub fn with_status(status: AppointmentStatus) -> Vec<Appointment> {
    APPOINTMENTS.iter().copied().filter(|a| a.status == status).collect()
}

/// Booking form contents as entered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingRequest {
    pub doctor: String,
    pub date: String,
    pub time: String,
}

/// Check a booking and build its confirmation text.
///
/// # Errors
///
/// Returns the user-facing message when a field is missing or the date does
/// not parse.
pub fn confirm_booking(request: &BookingRequest) -> Result<String, &'static str> {
    const MISSING: &str = "Please select a doctor, date, and time to book an appointment.";
    let doctor = request.doctor.trim();
    let slot = request.time.trim();
    if doctor.is_empty() || slot.is_empty() {
        return Err(MISSING);
    }
    let date = time::parse_iso_date(&request.date).ok_or(MISSING)?;
    Ok(format!(
        "Your appointment with {doctor} on {} at {slot} has been scheduled.",
        time::long_date(date)
    ))
}
