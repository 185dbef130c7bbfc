//! The fixed patient-visit record schema and its controlled vocabularies.

use std::fmt;

/// Column names of the record schema, in canonical order.
pub mod columns {
    pub const PATIENT_ID: &str = "PatientID";
    pub const VISIT_DATE: &str = "VisitDate";
    pub const AGE: &str = "Age";
    pub const GENDER: &str = "Gender";
    pub const INSURANCE: &str = "Insurance";
    pub const MEDICAL_NOTES: &str = "MedicalNotes";
    pub const TEMPERATURE: &str = "Temperature";
    pub const BLOOD_PRESSURE: &str = "BloodPressure";
    pub const CBC_RESULT: &str = "CBC_Result";
    pub const GLUCOSE_RESULT: &str = "Glucose_Result";
    pub const CHOLESTEROL_RESULT: &str = "Cholesterol_Result";
    pub const THYROID_RESULT: &str = "ThyroidTest_Result";

    /// All columns in canonical order.
    pub const ALL: [&str; 12] = [
        PATIENT_ID,
        VISIT_DATE,
        AGE,
        GENDER,
        INSURANCE,
        MEDICAL_NOTES,
        TEMPERATURE,
        BLOOD_PRESSURE,
        CBC_RESULT,
        GLUCOSE_RESULT,
        CHOLESTEROL_RESULT,
        THYROID_RESULT,
    ];

    /// Lab result columns pass through the cleaning pipeline untouched.
    pub const LAB_RESULTS: [&str; 4] = [CBC_RESULT, GLUCOSE_RESULT, CHOLESTEROL_RESULT, THYROID_RESULT];
}

/// Canonical gender values.
///
/// Raw data carries abbreviations and mixed casings; `from_raw` reduces them
/// to this closed set with an explicit default arm so the
/// unrecognized-maps-to-Other rule is auditable in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Maps a raw gender literal to its canonical value.
    ///
    /// The literal is trimmed and uppercased before lookup, so `m`, `M`,
    /// `Male`, and `MALE` all resolve to [`Gender::Male`]. Empty strings and
    /// anything outside the mapping resolve to [`Gender::Other`].
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "M" | "MALE" => Self::Male,
            "F" | "FEMALE" => Self::Female,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_mapping_covers_generator_pool() {
        let cases = [
            ("M", Gender::Male),
            ("F", Gender::Female),
            ("Male", Gender::Male),
            ("Female", Gender::Female),
            ("m", Gender::Male),
            ("f", Gender::Female),
            ("MALE", Gender::Male),
            ("FEMALE", Gender::Female),
            ("Other", Gender::Other),
            ("", Gender::Other),
        ];
        for (raw, expected) in cases {
            assert_eq!(Gender::from_raw(raw), expected, "literal {raw:?}");
        }
    }

    #[test]
    fn gender_mapping_defaults_arbitrary_text_to_other() {
        assert_eq!(Gender::from_raw("nonbinary"), Gender::Other);
        assert_eq!(Gender::from_raw("  x  "), Gender::Other);
        assert_eq!(Gender::from_raw("123"), Gender::Other);
    }

    #[test]
    fn schema_has_twelve_columns() {
        assert_eq!(columns::ALL.len(), 12);
        assert!(columns::ALL.contains(&columns::BLOOD_PRESSURE));
        for lab in columns::LAB_RESULTS {
            assert!(columns::ALL.contains(&lab));
        }
    }
}
