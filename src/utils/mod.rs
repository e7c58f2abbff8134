pub(crate) mod date;
pub(crate) mod debug;
pub(crate) mod delegate;

pub(crate) use date::{format_stamp, is_stamp_shape, parse_stamp};
pub(crate) use debug::{debug_enabled, set_debug};
pub(crate) use delegate::run_downstream;
