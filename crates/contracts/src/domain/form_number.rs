use serde::{Deserialize, Serialize};

/// Category label offered when a form has no published category breakdown.
pub const STANDARD_PROCESSING: &str = "Standard Processing";

/// USCIS forms offered by the processing-time calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormNumber {
    I90,
    I102,
    I129,
    I129Cw,
    I129F,
    I130,
    I131,
    I140,
    I485,
    I751,
    I765,
    N400,
}

impl FormNumber {
    /// Official form code as it appears on the USCIS site
    pub fn code(&self) -> &'static str {
        match self {
            FormNumber::I90 => "I-90",
            FormNumber::I102 => "I-102",
            FormNumber::I129 => "I-129",
            FormNumber::I129Cw => "I-129CW",
            FormNumber::I129F => "I-129F",
            FormNumber::I130 => "I-130",
            FormNumber::I131 => "I-131",
            FormNumber::I140 => "I-140",
            FormNumber::I485 => "I-485",
            FormNumber::I751 => "I-751",
            FormNumber::I765 => "I-765",
            FormNumber::N400 => "N-400",
        }
    }

    /// Human-readable form title
    pub fn title(&self) -> &'static str {
        match self {
            FormNumber::I90 => "Application to Replace Permanent Resident Card",
            FormNumber::I102 => {
                "Application for Replacement/Initial Nonimmigrant Arrival-Departure Document"
            }
            FormNumber::I129 => "Petition for a Nonimmigrant Worker",
            FormNumber::I129Cw => "Petition for a CNMI-Only Nonimmigrant Transitional Worker",
            FormNumber::I129F => "Petition for Alien Fiancé(e)",
            FormNumber::I130 => "Petition for Alien Relative",
            FormNumber::I131 => "Application for Travel Documents",
            FormNumber::I140 => "Immigrant Petition for Alien Workers",
            FormNumber::I485 => "Application to Register Permanent Residence or Adjust Status",
            FormNumber::I751 => "Petition to Remove Conditions on Residence",
            FormNumber::I765 => "Application for Employment Authorization",
            FormNumber::N400 => "Application for Naturalization",
        }
    }

    /// Processing categories for this form, in display order.
    ///
    /// An empty slice means USCIS publishes no category breakdown for the
    /// form; the UI offers the single [`STANDARD_PROCESSING`] option instead.
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            FormNumber::I130 => &[
                "Family-based: Immediate relative",
                "Family-based: F1",
                "Family-based: F2A",
                "Family-based: F2B",
                "Family-based: F3",
                "Family-based: F4",
            ],
            FormNumber::I485 => &[
                "Family-based",
                "Employment-based",
                "Special Immigrant",
                "Asylee/Refugee",
                "VAWA",
            ],
            FormNumber::I765 => &["Initial EAD", "Renewal EAD", "Replacement EAD"],
            FormNumber::I90 => &["Renewal/Replacement", "Biometric Update"],
            FormNumber::N400 => &["Military", "Non-Military"],
            FormNumber::I129 => &["H-1B", "L-1A", "L-1B", "O-1", "TN"],
            FormNumber::I140 => &["EB-1", "EB-2", "EB-3", "National Interest Waiver"],
            _ => &[],
        }
    }

    /// All forms in catalog (display) order
    pub fn all() -> Vec<FormNumber> {
        vec![
            FormNumber::I90,
            FormNumber::I102,
            FormNumber::I129,
            FormNumber::I129Cw,
            FormNumber::I129F,
            FormNumber::I130,
            FormNumber::I131,
            FormNumber::I140,
            FormNumber::I485,
            FormNumber::I751,
            FormNumber::I765,
            FormNumber::N400,
        ]
    }

    /// Parse from a form code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|form| form.code() == code)
    }
}

impl ToString for FormNumber {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for form in FormNumber::all() {
            assert_eq!(FormNumber::from_code(form.code()), Some(form));
        }
        assert_eq!(FormNumber::from_code(""), None);
        assert_eq!(FormNumber::from_code("X-999"), None);
    }

    #[test]
    fn test_catalog_order() {
        let all = FormNumber::all();
        assert_eq!(all.len(), 12);
        assert_eq!(all.first().map(|f| f.code()), Some("I-90"));
        assert_eq!(all.last().map(|f| f.code()), Some("N-400"));
    }

    #[test]
    fn test_category_table() {
        assert_eq!(FormNumber::I130.categories().len(), 6);
        assert_eq!(FormNumber::I485.categories().len(), 5);
        assert_eq!(FormNumber::I765.categories().len(), 3);
        assert_eq!(FormNumber::I90.categories().len(), 2);
        assert_eq!(FormNumber::N400.categories().len(), 2);
        assert_eq!(FormNumber::I129.categories().len(), 5);
        assert_eq!(FormNumber::I140.categories().len(), 4);
    }

    #[test]
    fn test_category_order_is_display_order() {
        assert_eq!(
            FormNumber::I130.categories().first().copied(),
            Some("Family-based: Immediate relative")
        );
        assert_eq!(FormNumber::I129.categories(), &["H-1B", "L-1A", "L-1B", "O-1", "TN"]);
    }

    #[test]
    fn test_forms_without_categories_fall_back() {
        for form in [FormNumber::I102, FormNumber::I129Cw, FormNumber::I129F,
                     FormNumber::I131, FormNumber::I751] {
            assert!(form.categories().is_empty());
        }
    }
}
