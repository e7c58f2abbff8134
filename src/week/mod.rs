//! Report week types and the file gate

mod gate;
mod range;

pub(crate) use gate::check_reports;
pub(crate) use range::{DateRange, DateStamp};
