//! Collapses stored appointment rows into visits.
//!
//! Booking several services for one client at one slot stores one row per
//! service. Rows sharing `(client_id, date, time)` are one visit: the service
//! names are joined in list order, durations are summed, and payment status
//! and notes come from the first row of the group. Disagreeing payment flags
//! are not reconciled; `all_paid` is reported alongside so callers can tell.

use std::collections::HashMap;

use tracing::warn;

use super::error::SalonError;
use super::models::{
    format_date, format_time, Appointment, AppointmentDetails, ClientRef, LogicalAppointment,
    ServiceLine, ServiceRef,
};
use crate::backend::config::MissingReferencePolicy;
use chrono::{NaiveDate, NaiveTime};

/// A stored row whose client and service both exist
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAppointment<'a> {
    pub appointment: &'a Appointment,
    pub client: &'a ClientRef,
    pub service: &'a ServiceRef,
}

/// Apply the missing-reference policy to fetched records, keeping input order
pub fn resolve_all<'a, I>(
    records: I,
    policy: MissingReferencePolicy,
) -> Result<Vec<ResolvedAppointment<'a>>, SalonError>
where
    I: IntoIterator<Item = &'a AppointmentDetails>,
{
    let mut resolved = Vec::new();

    for record in records {
        match record.resolve() {
            Ok((client, service)) => resolved.push(ResolvedAppointment {
                appointment: &record.appointment,
                client,
                service,
            }),
            Err(err) => match policy {
                MissingReferencePolicy::Skip => warn!("Skipping appointment: {}", err),
                MissingReferencePolicy::Fail => return Err(err),
            },
        }
    }

    Ok(resolved)
}

pub fn visit_key(client_id: &str, date: NaiveDate, time: NaiveTime) -> String {
    format!("{}-{}-{}", client_id, format_date(date), format_time(time))
}

/// Group stored rows into visits, in order of each visit's first row
pub fn group_visits(
    records: &[AppointmentDetails],
    policy: MissingReferencePolicy,
) -> Result<Vec<LogicalAppointment>, SalonError> {
    let resolved = resolve_all(records, policy)?;

    let mut visits: Vec<LogicalAppointment> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for ResolvedAppointment { appointment, client, service } in resolved {
        let key = visit_key(&appointment.client_id, appointment.date, appointment.time);
        let line = ServiceLine {
            name: service.name.clone(),
            duration: service.duration,
        };

        match index_by_key.get(&key) {
            Some(&index) => {
                let visit = &mut visits[index];
                visit.appointment_ids.push(appointment.id.clone());
                visit.services.push(line);
                visit.duration = visit.duration.saturating_add(service.duration);
                visit.all_paid &= appointment.is_paid;
            }
            None => {
                index_by_key.insert(key.clone(), visits.len());
                visits.push(LogicalAppointment {
                    key,
                    client_id: appointment.client_id.clone(),
                    client_name: client.full_name(),
                    appointment_ids: vec![appointment.id.clone()],
                    services: vec![line],
                    service_color: service.color.clone(),
                    date: appointment.date,
                    time: appointment.time,
                    duration: service.duration,
                    is_paid: appointment.is_paid,
                    all_paid: appointment.is_paid,
                    notes: appointment.notes.clone(),
                });
            }
        }
    }

    Ok(visits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::test_utils::*;

    #[test]
    fn test_multi_service_visit_sums_durations() {
        let anna = client("c1", "Anna", "Nowak");
        let cut = service("s1", "Cut", 30);
        let color = service("s2", "Color", 45);

        let records = vec![
            record("a1", &anna, &cut, "2024-06-10", "09:00"),
            record("a2", &anna, &color, "2024-06-10", "09:00"),
        ];

        let visits = group_visits(&records, MissingReferencePolicy::Skip).unwrap();
        assert_eq!(visits.len(), 1);

        let visit = &visits[0];
        assert_eq!(visit.key, "c1-2024-06-10-09:00");
        assert_eq!(visit.client_name, "Anna Nowak");
        assert_eq!(visit.duration, 75);
        assert_eq!(visit.duration_label(), "75 min");
        assert_eq!(visit.service_names(), "Cut, Color");
        assert_eq!(visit.appointment_ids, vec!["a1", "a2"]);
        assert_eq!(visit.service_color, "#S1");
    }

    #[test]
    fn test_visit_duration_saturates() {
        let anna = client("c1", "Anna", "Nowak");
        let long = service("s1", "Long", 3_000_000_000);
        let longer = service("s2", "Longer", 3_000_000_000);

        let records = vec![
            record("a1", &anna, &long, "2024-06-10", "09:00"),
            record("a2", &anna, &longer, "2024-06-10", "09:00"),
        ];

        let visits = group_visits(&records, MissingReferencePolicy::Skip).unwrap();
        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].duration, u32::MAX);
    }

    #[test]
    fn test_different_slots_stay_separate() {
        let anna = client("c1", "Anna", "Nowak");
        let ewa = client("c2", "Ewa", "Kowalska");
        let cut = service("s1", "Cut", 30);

        let records = vec![
            record("a1", &anna, &cut, "2024-06-10", "09:00"),
            record("a2", &anna, &cut, "2024-06-10", "10:00"),
            record("a3", &ewa, &cut, "2024-06-10", "09:00"),
            record("a4", &anna, &cut, "2024-06-11", "09:00"),
        ];

        let visits = group_visits(&records, MissingReferencePolicy::Skip).unwrap();
        let keys: Vec<&str> = visits.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "c1-2024-06-10-09:00",
                "c1-2024-06-10-10:00",
                "c2-2024-06-10-09:00",
                "c1-2024-06-11-09:00",
            ]
        );
    }

    #[test]
    fn test_grouping_is_idempotent_and_order_stable() {
        let anna = client("c1", "Anna", "Nowak");
        let ewa = client("c2", "Ewa", "Kowalska");
        let cut = service("s1", "Cut", 30);
        let wash = service("s2", "Wash", 15);

        let records = vec![
            record("a1", &ewa, &cut, "2024-06-10", "11:00"),
            record("a2", &anna, &cut, "2024-06-10", "09:00"),
            record("a3", &ewa, &wash, "2024-06-10", "11:00"),
        ];

        let first = group_visits(&records, MissingReferencePolicy::Skip).unwrap();
        let second = group_visits(&records, MissingReferencePolicy::Skip).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].client_id, "c2");
        assert_eq!(first[0].services.len(), 2);
        assert_eq!(first[1].client_id, "c1");
    }

    #[test]
    fn test_first_member_decides_payment_and_notes() {
        let anna = client("c1", "Anna", "Nowak");
        let cut = service("s1", "Cut", 30);
        let color = service("s2", "Color", 45);

        let records = vec![
            with_notes(record("a1", &anna, &cut, "2024-06-10", "09:00"), "first"),
            paid(with_notes(record("a2", &anna, &color, "2024-06-10", "09:00"), "second")),
        ];

        let visit = &group_visits(&records, MissingReferencePolicy::Skip).unwrap()[0];
        assert!(!visit.is_paid);
        assert!(!visit.all_paid);
        assert_eq!(visit.notes.as_deref(), Some("first"));
    }

    #[test]
    fn test_toggling_one_member_leaves_siblings_alone() {
        let anna = client("c1", "Anna", "Nowak");
        let cut = service("s1", "Cut", 30);
        let color = service("s2", "Color", 45);

        let mut records = vec![
            record("a1", &anna, &cut, "2024-06-10", "09:00"),
            record("a2", &anna, &color, "2024-06-10", "09:00"),
        ];

        // Paying the second member does not change what the visit shows
        records[1].appointment.is_paid = true;
        let visit = &group_visits(&records, MissingReferencePolicy::Skip).unwrap()[0];
        assert!(!visit.is_paid);
        assert!(!records[0].appointment.is_paid);

        // Paying the first member flips the visit, the sibling keeps its own flag
        records[1].appointment.is_paid = false;
        records[0].appointment.is_paid = true;
        let visit = &group_visits(&records, MissingReferencePolicy::Skip).unwrap()[0];
        assert!(visit.is_paid);
        assert!(!visit.all_paid);
        assert!(!records[1].appointment.is_paid);
    }

    #[test]
    fn test_missing_reference_policy() {
        let anna = client("c1", "Anna", "Nowak");
        let cut = service("s1", "Cut", 30);

        let mut orphan = record("a2", &anna, &cut, "2024-06-10", "10:00");
        orphan.client = None;
        let records = vec![record("a1", &anna, &cut, "2024-06-10", "09:00"), orphan];

        let visits = group_visits(&records, MissingReferencePolicy::Skip).unwrap();
        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].appointment_ids, vec!["a1"]);

        let err = group_visits(&records, MissingReferencePolicy::Fail).unwrap_err();
        assert!(matches!(
            err,
            SalonError::UnresolvedReference { entity: "client", .. }
        ));
    }

    #[test]
    fn test_empty_input() {
        let visits = group_visits(&[], MissingReferencePolicy::Fail).unwrap();
        assert!(visits.is_empty());
    }
}
