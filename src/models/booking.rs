//! Modelo de Booking
//!
//! Este módulo contiene el struct Booking, el ciclo de vida de estados
//! y la semántica de solapamiento de rangos de fechas.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Booking - mapea exactamente a la tabla bookings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub car_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: Decimal,
    pub customer_name: String,
    pub customer_phone: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Estados del ciclo de vida de una reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    New,
    Confirmed,
    Canceled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::New => "New",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Canceled => "Canceled",
            BookingStatus::Completed => "Completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "New" => Some(BookingStatus::New),
            "Confirmed" => Some(BookingStatus::Confirmed),
            "Canceled" => Some(BookingStatus::Canceled),
            "Completed" => Some(BookingStatus::Completed),
            _ => None,
        }
    }

    /// Máquina de estados: New -> {Confirmed, Canceled},
    /// Confirmed -> {Canceled, Completed}. Todo lo demás es inválido.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::New, BookingStatus::Confirmed)
                | (BookingStatus::New, BookingStatus::Canceled)
                | (BookingStatus::Confirmed, BookingStatus::Canceled)
                | (BookingStatus::Confirmed, BookingStatus::Completed)
        )
    }
}

/// Acciones de staff sobre una reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Confirm,
    Cancel,
    Complete,
}

impl BookingAction {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "confirm" => Some(BookingAction::Confirm),
            "cancel" => Some(BookingAction::Cancel),
            "complete" => Some(BookingAction::Complete),
            _ => None,
        }
    }

    pub fn target_status(&self) -> BookingStatus {
        match self {
            BookingAction::Confirm => BookingStatus::Confirmed,
            BookingAction::Cancel => BookingStatus::Canceled,
            BookingAction::Complete => BookingStatus::Completed,
        }
    }
}

/// Solapamiento estricto de intervalos: los extremos que se tocan
/// (una reserva termina el día que otra empieza) NO entran en conflicto.
pub fn ranges_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_end > b_start && a_start < b_end
}

/// Precio total de una reserva: días × tarifa diaria, exacto.
pub fn total_price_for(start: NaiveDate, end: NaiveDate, price_per_day: i64) -> Decimal {
    let days = (end - start).num_days();
    Decimal::from(days * price_per_day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            BookingStatus::New,
            BookingStatus::Confirmed,
            BookingStatus::Canceled,
            BookingStatus::Completed,
        ] {
            assert_eq!(BookingStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::from_str("Pending"), None);
    }

    #[test]
    fn test_valid_transitions() {
        assert!(BookingStatus::New.can_transition_to(BookingStatus::Confirmed));
        assert!(BookingStatus::New.can_transition_to(BookingStatus::Canceled));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Canceled));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Completed));
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(!BookingStatus::New.can_transition_to(BookingStatus::Completed));
        assert!(!BookingStatus::Canceled.can_transition_to(BookingStatus::Confirmed));
        assert!(!BookingStatus::Canceled.can_transition_to(BookingStatus::New));
        assert!(!BookingStatus::Completed.can_transition_to(BookingStatus::Canceled));
        assert!(!BookingStatus::Completed.can_transition_to(BookingStatus::Confirmed));
        assert!(!BookingStatus::New.can_transition_to(BookingStatus::New));
    }

    #[test]
    fn test_booking_action() {
        assert_eq!(
            BookingAction::from_str("confirm").unwrap().target_status(),
            BookingStatus::Confirmed
        );
        assert_eq!(
            BookingAction::from_str("cancel").unwrap().target_status(),
            BookingStatus::Canceled
        );
        assert_eq!(
            BookingAction::from_str("complete").unwrap().target_status(),
            BookingStatus::Completed
        );
        assert!(BookingAction::from_str("reject").is_none());
    }

    #[test]
    fn test_overlap_strict() {
        // Solapamiento parcial
        assert!(ranges_overlap(
            date(2024, 6, 1),
            date(2024, 6, 10),
            date(2024, 6, 5),
            date(2024, 6, 15),
        ));
        // Contención
        assert!(ranges_overlap(
            date(2024, 6, 1),
            date(2024, 6, 30),
            date(2024, 6, 10),
            date(2024, 6, 12),
        ));
    }

    #[test]
    fn test_adjacent_ranges_do_not_overlap() {
        // A termina el 10, B empieza el 10: no hay conflicto
        assert!(!ranges_overlap(
            date(2024, 6, 1),
            date(2024, 6, 10),
            date(2024, 6, 10),
            date(2024, 6, 20),
        ));
        assert!(!ranges_overlap(
            date(2024, 6, 10),
            date(2024, 6, 20),
            date(2024, 6, 1),
            date(2024, 6, 10),
        ));
    }

    #[test]
    fn test_disjoint_ranges_do_not_overlap() {
        assert!(!ranges_overlap(
            date(2024, 6, 1),
            date(2024, 6, 5),
            date(2024, 6, 20),
            date(2024, 6, 25),
        ));
    }

    #[test]
    fn test_total_price() {
        // 500/día, 2024-01-01 -> 2024-01-04 = 3 días = 1500
        let price = total_price_for(date(2024, 1, 1), date(2024, 1, 4), 500);
        assert_eq!(price, Decimal::from(1500));
    }
}
