use crate::backend::domain::debt::{format_price, DebtRecord, PricedAppointment};
use crate::backend::io::rest::mappers::AppointmentMapper;
use shared::{Debtor, DebtorAppointment, DebtorListResponse};

/// Mapper for the debtors report; prices are labelled with the configured currency
pub struct DebtorMapper;

impl DebtorMapper {
    fn appointment_to_dto(priced: PricedAppointment, currency: &str) -> DebtorAppointment {
        DebtorAppointment {
            appointment: AppointmentMapper::details_to_dto(priced.details),
            price: priced.price,
            price_label: format_price(priced.price, currency),
        }
    }

    pub fn to_dto(record: DebtRecord, currency: &str) -> Debtor {
        Debtor {
            client: AppointmentMapper::client_summary(record.client),
            appointments: record
                .appointments
                .into_iter()
                .map(|priced| Self::appointment_to_dto(priced, currency))
                .collect(),
            total_debt: record.total_debt,
            total_debt_label: format_price(record.total_debt, currency),
        }
    }

    pub fn to_list_dto(records: Vec<DebtRecord>, currency: &str) -> DebtorListResponse {
        DebtorListResponse {
            debtors: records
                .into_iter()
                .map(|record| Self::to_dto(record, currency))
                .collect(),
        }
    }
}
