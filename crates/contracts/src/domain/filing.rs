use serde::{Deserialize, Serialize};

use crate::domain::form_number::FormNumber;

/// Calculator submission payload.
///
/// Field names match the wire names of the calculator form
/// (`form_number`, `form_category`, `service_center`, `filing_date`).
/// `filing_date` is an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingRequest {
    pub form_number: String,
    pub form_category: String,
    pub service_center: String,
    pub filing_date: String,
}

impl FilingRequest {
    /// Presence-only validation of the four required fields.
    ///
    /// Returns one message per empty field, in fixed check order: form type,
    /// form category, service center, filing date. An empty result means the
    /// request is accepted.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.form_number.is_empty() {
            errors.push("Please select a form type".to_string());
        }
        if self.form_category.is_empty() {
            errors.push("Please select a form category".to_string());
        }
        if self.service_center.is_empty() {
            errors.push("Please select a field office or service center".to_string());
        }
        if self.filing_date.is_empty() {
            errors.push("Please enter a filing date".to_string());
        }

        errors
    }

    /// Resolve the selected form against the catalog
    pub fn form(&self) -> Option<FormNumber> {
        FormNumber::from_code(&self.form_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FilingRequest {
        FilingRequest {
            form_number: "I-130".to_string(),
            form_category: "Family-based: F1".to_string(),
            service_center: "Texas Service Center".to_string(),
            filing_date: "2025-11-03".to_string(),
        }
    }

    #[test]
    fn test_all_fields_missing_reports_all_in_check_order() {
        let errors = FilingRequest::default().validate();
        assert_eq!(
            errors,
            vec![
                "Please select a form type",
                "Please select a form category",
                "Please select a field office or service center",
                "Please enter a filing date",
            ]
        );
    }

    #[test]
    fn test_single_missing_field() {
        let mut request = filled();
        request.service_center.clear();
        assert_eq!(
            request.validate(),
            vec!["Please select a field office or service center"]
        );
    }

    #[test]
    fn test_complete_request_is_accepted() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn test_form_resolution() {
        assert_eq!(filled().form(), Some(FormNumber::I130));
        assert_eq!(FilingRequest::default().form(), None);
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(filled()).unwrap();
        let object = value.as_object().unwrap();
        for key in ["form_number", "form_category", "service_center", "filing_date"] {
            assert!(object.contains_key(key), "missing wire field {key}");
        }
        assert_eq!(object.len(), 4);
    }
}
