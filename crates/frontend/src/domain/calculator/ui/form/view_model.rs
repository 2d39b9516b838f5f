use contracts::domain::{FilingRequest, FormNumber, SERVICE_CENTERS, STANDARD_PROCESSING};
use leptos::prelude::*;

use crate::shared::date_utils;

/// ViewModel for the calculator form
#[derive(Clone, Copy)]
pub struct CalculatorViewModel {
    pub form: RwSignal<FilingRequest>,
    pub errors: RwSignal<Vec<String>>,
}

impl CalculatorViewModel {
    pub fn new() -> Self {
        let mut request = FilingRequest::default();
        seed_filing_date(&mut request);

        Self {
            form: RwSignal::new(request),
            errors: RwSignal::new(Vec::new()),
        }
    }

    /// Switch the selected form type and reset both dependent selections,
    /// which re-selects their placeholders.
    pub fn select_form(&self, code: String) {
        log::debug!("form type changed to '{}'", code);
        self.form.update(|f| {
            f.form_number = code;
            f.form_category.clear();
            f.service_center.clear();
        });
    }

    /// Validate the current request and hand it to `on_accepted` when
    /// complete. Incomplete submissions populate the `errors` signal instead.
    pub fn submit_command(&self, on_accepted: impl Fn(FilingRequest)) {
        let request = self.form.get_untracked();
        let errors = request.validate();

        if errors.is_empty() {
            log::info!("submission accepted for {}", request.form_number);
            self.errors.set(Vec::new());
            on_accepted(request);
        } else {
            log::debug!("submission blocked: {} required fields missing", errors.len());
            self.errors.set(errors);
        }
    }
}

/// Seed the filing date with today's local date; a pre-filled value is left
/// untouched.
pub fn seed_filing_date(request: &mut FilingRequest) {
    if request.filing_date.is_empty() {
        request.filing_date = date_utils::today_iso();
    }
}

/// Form dropdown entries as (code, "CODE - Title") pairs, catalog order
pub fn form_options() -> Vec<(String, String)> {
    FormNumber::all()
        .into_iter()
        .map(|form| {
            (
                form.code().to_string(),
                format!("{} - {}", form.code(), form.title()),
            )
        })
        .collect()
}

/// Category entries for the selected form code, table order.
/// Unknown codes and forms without a category breakdown get the single
/// standard-processing fallback entry.
pub fn category_options(form_code: &str) -> Vec<(String, String)> {
    let categories = FormNumber::from_code(form_code)
        .map(|form| form.categories())
        .unwrap_or_default();

    if categories.is_empty() {
        vec![(
            STANDARD_PROCESSING.to_string(),
            STANDARD_PROCESSING.to_string(),
        )]
    } else {
        categories
            .iter()
            .map(|category| (category.to_string(), category.to_string()))
            .collect()
    }
}

/// Service-center entries, fixed order regardless of the selected form
pub fn center_options() -> Vec<(String, String)> {
    SERVICE_CENTERS
        .iter()
        .map(|center| (center.to_string(), center.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_options_follow_catalog() {
        let options = form_options();
        assert_eq!(options.len(), 12);
        assert_eq!(
            options[0],
            (
                "I-90".to_string(),
                "I-90 - Application to Replace Permanent Resident Card".to_string()
            )
        );
        assert_eq!(options[11].0, "N-400");
    }

    #[test]
    fn test_category_options_follow_table_order() {
        let options = category_options("I-130");
        assert_eq!(options.len(), 6);
        assert_eq!(options[0].0, "Family-based: Immediate relative");
        assert_eq!(options[5].0, "Family-based: F4");

        assert_eq!(category_options("I-485").len(), 5);
        assert_eq!(category_options("I-765").len(), 3);
        assert_eq!(category_options("I-129").len(), 5);
        assert_eq!(category_options("I-140").len(), 4);
    }

    #[test]
    fn test_unknown_form_falls_back_to_standard_processing() {
        for code in ["", "X-999", "i-130"] {
            let options = category_options(code);
            assert_eq!(
                options,
                vec![(
                    STANDARD_PROCESSING.to_string(),
                    STANDARD_PROCESSING.to_string()
                )]
            );
        }
    }

    #[test]
    fn test_catalog_form_without_categories_falls_back() {
        // I-131 is offered in the form dropdown but has no category table entry
        assert_eq!(
            category_options("I-131"),
            vec![(
                STANDARD_PROCESSING.to_string(),
                STANDARD_PROCESSING.to_string()
            )]
        );
    }

    #[test]
    fn test_seed_fills_empty_filing_date_only() {
        let mut request = FilingRequest::default();
        seed_filing_date(&mut request);
        assert_eq!(request.filing_date, date_utils::today_iso());

        let mut prefilled = FilingRequest {
            filing_date: "2024-01-15".to_string(),
            ..FilingRequest::default()
        };
        seed_filing_date(&mut prefilled);
        assert_eq!(prefilled.filing_date, "2024-01-15");
    }

    #[test]
    fn test_center_options_are_form_independent() {
        let options = center_options();
        assert_eq!(options.len(), 9);
        assert_eq!(options[0].0, "California Service Center");
        assert_eq!(options[8].0, "Phoenix Lockbox");
    }
}
