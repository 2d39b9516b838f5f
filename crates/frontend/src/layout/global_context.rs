use contracts::domain::FilingRequest;
use leptos::prelude::*;

/// Application-wide UI state shared through Leptos context.
///
/// The main view shows the calculator form until a submission is accepted,
/// then the results for that submission.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub submission: RwSignal<Option<FilingRequest>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            submission: RwSignal::new(None),
        }
    }

    pub fn open_results(&self, request: FilingRequest) {
        log::info!(
            "showing results for {} at {}",
            request.form_number,
            request.service_center
        );
        self.submission.set(Some(request));
    }

    pub fn back_to_calculator(&self) {
        log::debug!("returning to the calculator form");
        self.submission.set(None);
    }
}
