pub mod view;

pub use view::ResultsView;
