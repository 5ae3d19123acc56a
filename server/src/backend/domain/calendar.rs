//! Calendar helpers for the schedule views.
//!
//! Appointments and visits are bucketed per calendar day, days ascending. The
//! day picker filter is asymmetric: picking today or a future day
//! shows everything from today onward, while picking a past day shows only
//! that day.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use super::models::{AppointmentDetails, LogicalAppointment};

/// Anything that sits on a calendar day
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for LogicalAppointment {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for AppointmentDetails {
    fn date(&self) -> NaiveDate {
        self.appointment.date
    }
}

/// Items of one day, in their input order
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket<T> {
    pub date: NaiveDate,
    pub items: Vec<T>,
}

/// Today in the server's local timezone
pub fn current_date() -> NaiveDate {
    Local::now().date_naive()
}

/// Bucket items per day; days ascending, items keep their relative order
pub fn group_by_day<T: Dated + Clone>(items: &[T]) -> Vec<DayBucket<T>> {
    let mut by_day: BTreeMap<NaiveDate, Vec<T>> = BTreeMap::new();

    for item in items {
        by_day.entry(item.date()).or_default().push(item.clone());
    }

    by_day
        .into_iter()
        .map(|(date, items)| DayBucket { date, items })
        .collect()
}

/// Apply the day picker filter.
///
/// `selected >= today` keeps every item dated today or later; a past
/// `selected` keeps only items on exactly that day.
pub fn filter_by_selection<T: Dated + Clone>(selected: NaiveDate, today: NaiveDate, items: &[T]) -> Vec<T> {
    if selected >= today {
        items.iter().filter(|item| item.date() >= today).cloned().collect()
    } else {
        appointments_on(selected, items)
    }
}

/// Items dated exactly `date`
pub fn appointments_on<T: Dated + Clone>(date: NaiveDate, items: &[T]) -> Vec<T> {
    items.iter().filter(|item| item.date() == date).cloned().collect()
}

/// e.g. "Monday, 10 June 2024"
pub fn format_day_heading(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::test_utils::*;

    fn sample() -> Vec<AppointmentDetails> {
        let anna = client("c1", "Anna", "Nowak");
        let cut = service("s1", "Cut", 30);
        vec![
            record("a1", &anna, &cut, "2024-06-12", "09:00"),
            record("a2", &anna, &cut, "2024-06-09", "10:00"),
            record("a3", &anna, &cut, "2024-06-10", "11:00"),
            record("a4", &anna, &cut, "2024-06-09", "08:00"),
            record("a5", &anna, &cut, "2024-06-08", "12:00"),
        ]
    }

    fn ids(items: &[AppointmentDetails]) -> Vec<&str> {
        items.iter().map(|d| d.appointment.id.as_str()).collect()
    }

    #[test]
    fn test_group_by_day_sorts_days_and_keeps_member_order() {
        let buckets = group_by_day(&sample());

        let days: Vec<NaiveDate> = buckets.iter().map(|b| b.date).collect();
        assert_eq!(
            days,
            vec![date("2024-06-08"), date("2024-06-09"), date("2024-06-10"), date("2024-06-12")]
        );
        assert_eq!(ids(&buckets[1].items), vec!["a2", "a4"]);
    }

    #[test]
    fn test_selecting_today_or_later_shows_all_upcoming() {
        let today = date("2024-06-10");

        let from_today = filter_by_selection(today, today, &sample());
        assert_eq!(ids(&from_today), vec!["a1", "a3"]);

        let future = filter_by_selection(date("2024-06-20"), today, &sample());
        assert_eq!(ids(&future), vec!["a1", "a3"]);
    }

    #[test]
    fn test_selecting_a_past_day_shows_only_that_day() {
        let today = date("2024-06-10");

        let past = filter_by_selection(date("2024-06-09"), today, &sample());
        assert_eq!(ids(&past), vec!["a2", "a4"]);

        let empty_day = filter_by_selection(date("2024-06-01"), today, &sample());
        assert!(empty_day.is_empty());
    }

    #[test]
    fn test_appointments_on() {
        assert_eq!(ids(&appointments_on(date("2024-06-12"), &sample())), vec!["a1"]);
    }

    #[test]
    fn test_format_day_heading() {
        assert_eq!(format_day_heading(date("2024-06-10")), "Monday, 10 June 2024");
        assert_eq!(format_day_heading(date("2024-06-01")), "Saturday, 1 June 2024");
    }
}
