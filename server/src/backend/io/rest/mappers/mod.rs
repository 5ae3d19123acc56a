pub mod appointment_mapper;
pub mod client_mapper;
pub mod debtor_mapper;
pub mod schedule_mapper;
pub mod service_mapper;

pub use appointment_mapper::AppointmentMapper;
pub use client_mapper::ClientMapper;
pub use debtor_mapper::DebtorMapper;
pub use schedule_mapper::ScheduleMapper;
pub use service_mapper::ServiceMapper;
