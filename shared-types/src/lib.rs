use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The bookable times for any given day, in display order. Mornings run
/// 09:00-11:30 and afternoons 14:00-17:00 on the half hour; the midday
/// gap is never offered.
pub const TIME_SLOTS: [&str; 13] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "14:00", "14:30", "15:00", "15:30",
    "16:00", "16:30", "17:00",
];

/// Service types offered on the booking form.
pub const SERVICE_TYPES: [&str; 5] = [
    "General consultation",
    "Routine check-up",
    "Specialist visit",
    "Follow-up",
    "Other",
];

/// Lifecycle state of an appointment. Stored lowercase; any state may be
/// set from any other state through the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::Completed => "Completed",
        }
    }

    /// Whether an appointment in this state keeps its time slot occupied.
    /// Cancelled and completed appointments release the slot.
    pub fn occupies_slot(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Pending | AppointmentStatus::Confirmed
        )
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown appointment status: {0}")]
pub struct UnknownStatusError(pub String);

impl FromStr for AppointmentStatus {
    type Err = UnknownStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AppointmentStatus::Pending),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "completed" => Ok(AppointmentStatus::Completed),
            other => Err(UnknownStatusError(other.to_string())),
        }
    }
}

/// A half-open blocked interval `[start_time, end_time)` within one day.
/// Times are `HH:MM` strings, so lexicographic order is chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedRange {
    pub start_time: String,
    pub end_time: String,
}

impl BlockedRange {
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    pub fn contains(&self, time: &str) -> bool {
        self.start_time.as_str() <= time && time < self.end_time.as_str()
    }
}

/// A slot is available when it is neither exactly booked nor inside any
/// blocked range for the day. Booked times that fall outside the roster
/// are harmless; they can never match an offered slot.
pub fn is_slot_available(time: &str, booked_times: &[String], blocked: &[BlockedRange]) -> bool {
    if booked_times.iter().any(|booked| booked == time) {
        return false;
    }
    !blocked.iter().any(|range| range.contains(time))
}

/// Availability of every slot in the roster, in roster order.
pub fn day_availability(
    booked_times: &[String],
    blocked: &[BlockedRange],
) -> Vec<(&'static str, bool)> {
    TIME_SLOTS
        .iter()
        .map(|slot| (*slot, is_slot_available(slot, booked_times, blocked)))
        .collect()
}

/// Strict `date < today` on `YYYY-MM-DD` strings. Today itself is not past,
/// so same-day booking stays allowed regardless of the current time.
pub fn is_past_date(date: &str, today: &str) -> bool {
    date < today
}

/// The booking form requires a date, a time and a service type before any
/// request is issued. Notes stay optional.
pub fn booking_fields_complete(date: &str, time: &str, service_type: &str) -> bool {
    !date.is_empty() && !time.is_empty() && !service_type.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn booked(times: &[&str]) -> Vec<String> {
        times.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn roster_is_ordered_and_skips_midday() {
        assert_eq!(TIME_SLOTS.len(), 13);
        assert_eq!(TIME_SLOTS.first(), Some(&"09:00"));
        assert_eq!(TIME_SLOTS.last(), Some(&"17:00"));
        for pair in TIME_SLOTS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(!TIME_SLOTS.contains(&"12:00"));
        assert!(!TIME_SLOTS.contains(&"13:30"));
    }

    #[test]
    fn every_slot_open_on_an_empty_day() {
        let availability = day_availability(&[], &[]);
        assert_eq!(availability.len(), 13);
        assert!(availability.iter().all(|(_, open)| *open));
    }

    #[test]
    fn booked_and_blocked_day() {
        let booked = booked(&["09:00"]);
        let blocked = vec![BlockedRange::new("10:00", "10:30")];
        let unavailable: Vec<&str> = day_availability(&booked, &blocked)
            .into_iter()
            .filter(|(_, open)| !open)
            .map(|(slot, _)| slot)
            .collect();
        assert_eq!(unavailable, vec!["09:00", "10:00"]);
    }

    #[test_case("10:00", false; "range start is blocked")]
    #[test_case("10:15", false; "interior is blocked")]
    #[test_case("10:30", true; "range end is open again")]
    #[test_case("09:30", true; "before the range")]
    fn blocked_range_is_half_open(time: &str, expected: bool) {
        let blocked = vec![BlockedRange::new("10:00", "10:30")];
        assert_eq!(is_slot_available(time, &[], &blocked), expected);
    }

    #[test]
    fn wide_blocked_range_covers_whole_morning() {
        let blocked = vec![BlockedRange::new("09:00", "12:00")];
        for slot in &TIME_SLOTS[..6] {
            assert!(!is_slot_available(slot, &[], &blocked));
        }
        for slot in &TIME_SLOTS[6..] {
            assert!(is_slot_available(slot, &[], &blocked));
        }
    }

    #[test]
    fn overlapping_ranges_block_the_union() {
        let blocked = vec![
            BlockedRange::new("14:00", "15:00"),
            BlockedRange::new("14:30", "16:00"),
        ];
        assert!(!is_slot_available("14:00", &[], &blocked));
        assert!(!is_slot_available("15:00", &[], &blocked));
        assert!(!is_slot_available("15:30", &[], &blocked));
        assert!(is_slot_available("16:00", &[], &blocked));
    }

    #[test]
    fn booking_outside_the_roster_blocks_nothing_offered() {
        let booked = booked(&["12:00"]);
        assert!(day_availability(&booked, &[]).iter().all(|(_, open)| *open));
    }

    #[test]
    fn booked_time_is_an_exact_match() {
        let booked = booked(&["09:00"]);
        assert!(!is_slot_available("09:00", &booked, &[]));
        assert!(is_slot_available("09:30", &booked, &[]));
    }

    #[test_case("2025-06-09", "2025-06-10", true; "yesterday is past")]
    #[test_case("2025-06-10", "2025-06-10", false; "today is not past")]
    #[test_case("2025-06-11", "2025-06-10", false; "tomorrow is not past")]
    #[test_case("2024-12-31", "2025-01-01", true; "across a year boundary")]
    fn past_date_comparison(date: &str, today: &str, expected: bool) {
        assert_eq!(is_past_date(date, today), expected);
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in AppointmentStatus::ALL {
            assert_eq!(status.as_str().parse::<AppointmentStatus>(), Ok(status));
        }
        assert_eq!(
            "rescheduled".parse::<AppointmentStatus>(),
            Err(UnknownStatusError("rescheduled".to_string()))
        );
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&AppointmentStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");
        let back: AppointmentStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(back, AppointmentStatus::Cancelled);
    }

    #[test]
    fn only_live_statuses_occupy_slots() {
        assert!(AppointmentStatus::Pending.occupies_slot());
        assert!(AppointmentStatus::Confirmed.occupies_slot());
        assert!(!AppointmentStatus::Cancelled.occupies_slot());
        assert!(!AppointmentStatus::Completed.occupies_slot());
    }

    #[test_case("", "09:00", "Other", false; "missing date")]
    #[test_case("2025-06-10", "", "Other", false; "missing time")]
    #[test_case("2025-06-10", "09:00", "", false; "missing service")]
    #[test_case("2025-06-10", "09:00", "Follow-up", true; "all present")]
    fn booking_form_completeness(date: &str, time: &str, service: &str, expected: bool) {
        assert_eq!(booking_fields_complete(date, time, service), expected);
    }
}
