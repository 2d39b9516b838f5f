pub mod filing;
pub mod form_number;
pub mod service_center;

pub use filing::FilingRequest;
pub use form_number::{FormNumber, STANDARD_PROCESSING};
pub use service_center::SERVICE_CENTERS;
