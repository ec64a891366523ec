//! Fixed-payment loan math and amortization schedules

mod amortization;

pub use amortization::{
    amortization_schedule, amortization_schedule_through, loan_payment, AmortizationRow, AmortizationSchedule,
    DEFAULT_PAYMENTS_PER_YEAR,
};
