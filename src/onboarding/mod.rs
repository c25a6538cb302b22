pub mod work_email;

pub use work_email::{skip_destination, validate_work_email, WorkEmailForm};
