pub mod date_input;
pub mod select;

pub use date_input::DateInput;
pub use select::Select;
