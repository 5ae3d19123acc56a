//! Debtors report.
//!
//! A stored row is charged `max(duration × 3, 50)`. A client's debt is the sum
//! over their unpaid rows, so a multi-service visit is charged once per service.

use std::collections::HashMap;

use super::aggregation::resolve_all;
use super::error::SalonError;
use super::models::{AppointmentDetails, ClientRef};
use crate::backend::config::MissingReferencePolicy;

pub const PRICE_PER_MINUTE: u32 = 3;
pub const MIN_SERVICE_PRICE: u32 = 50;

/// Price of one service of the given length
pub fn service_price(duration: u32) -> u32 {
    duration.saturating_mul(PRICE_PER_MINUTE).max(MIN_SERVICE_PRICE)
}

pub fn format_price(price: u32, currency: &str) -> String {
    format!("{} {}", price, currency)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricedAppointment {
    pub details: AppointmentDetails,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DebtRecord {
    pub client: ClientRef,
    pub appointments: Vec<PricedAppointment>,
    pub total_debt: u32,
}

/// Unpaid rows grouped per client, in order of each client's first unpaid row
pub fn debts_by_client(
    records: &[AppointmentDetails],
    policy: MissingReferencePolicy,
) -> Result<Vec<DebtRecord>, SalonError> {
    let unpaid = records.iter().filter(|r| !r.appointment.is_paid);
    let resolved = resolve_all(unpaid, policy)?;

    let mut debts: Vec<DebtRecord> = Vec::new();
    let mut index_by_client: HashMap<&str, usize> = HashMap::new();

    for row in resolved {
        let price = service_price(row.service.duration);
        let priced = PricedAppointment {
            details: AppointmentDetails {
                appointment: row.appointment.clone(),
                client: Some(row.client.clone()),
                service: Some(row.service.clone()),
            },
            price,
        };

        let index = *index_by_client.entry(row.client.id.as_str()).or_insert_with(|| {
            debts.push(DebtRecord {
                client: row.client.clone(),
                appointments: Vec::new(),
                total_debt: 0,
            });
            debts.len() - 1
        });

        let debt = &mut debts[index];
        debt.appointments.push(priced);
        debt.total_debt = debt.total_debt.saturating_add(price);
    }

    Ok(debts)
}
