pub mod form;
pub mod results;

pub use form::CalculatorForm;
pub use results::ResultsView;
