//! Column-local cleaning transforms.
//!
//! Every function here is total over arbitrary cell input: malformed values
//! degrade to `Missing` or a sentinel, never to an error. Table-wide concerns
//! (mean imputation, dedup) live in their own passes.

use medtab_model::{CellValue, Gender};

use crate::datetime::to_iso_date;

/// Sentinel for notes that are empty or absent at the column-local stage.
pub const NO_NOTES_SENTINEL: &str = "No notes available";

const AGE_MIN: f64 = 0.0;
const AGE_MAX: f64 = 120.0;

/// Trims and uppercases textual identifiers; stringifies numeric ones.
///
/// The identifier scheme itself (P0001 vs PAT-1 vs H3-200) is preserved, no
/// cross-scheme unification is attempted.
pub fn clean_patient_id(cell: &CellValue) -> CellValue {
    match cell {
        CellValue::Text(value) => CellValue::Text(value.trim().to_uppercase()),
        CellValue::Number(_) => CellValue::Text(cell.to_output_string()),
        CellValue::Missing => CellValue::Missing,
    }
}

/// Re-renders any recognized date encoding as `YYYY-MM-DD`; everything else
/// becomes `Missing`.
pub fn clean_visit_date(cell: &CellValue) -> CellValue {
    match cell {
        CellValue::Text(value) => match to_iso_date(value) {
            Some(iso) => CellValue::Text(iso),
            None => CellValue::Missing,
        },
        _ => CellValue::Missing,
    }
}

/// Keeps ages inside [0, 120]; out-of-range and non-numeric cells become
/// `Missing`.
pub fn clean_age(cell: &CellValue) -> CellValue {
    let value = match cell {
        CellValue::Number(value) => Some(*value),
        CellValue::Text(value) => value.trim().parse::<f64>().ok(),
        CellValue::Missing => None,
    };
    match value {
        Some(age) if (AGE_MIN..=AGE_MAX).contains(&age) => CellValue::Number(age),
        _ => CellValue::Missing,
    }
}

/// Reduces gender literals to the canonical `Male`/`Female`/`Other` set.
/// Non-textual cells map straight to `Other`.
pub fn clean_gender(cell: &CellValue) -> CellValue {
    let gender = match cell {
        CellValue::Text(value) => Gender::from_raw(value),
        _ => Gender::Other,
    };
    CellValue::Text(gender.as_str().to_string())
}

/// Replaces `N/A` and empty strings with `Unknown`; other categories pass
/// through unchanged, even unrecognized ones.
pub fn clean_insurance(cell: &CellValue) -> CellValue {
    match cell {
        CellValue::Text(value) if value.as_str() == "N/A" || value.is_empty() => {
            CellValue::Text("Unknown".to_string())
        }
        CellValue::Text(value) => CellValue::Text(value.clone()),
        CellValue::Number(_) => CellValue::Text(cell.to_output_string()),
        CellValue::Missing => CellValue::Text("Unknown".to_string()),
    }
}

/// Passes non-empty free text through; everything else gets the
/// "No notes available" sentinel.
pub fn clean_medical_notes(cell: &CellValue) -> CellValue {
    match cell {
        CellValue::Text(value) if !value.trim().is_empty() => CellValue::Text(value.clone()),
        _ => CellValue::Text(NO_NOTES_SENTINEL.to_string()),
    }
}

/// Strips unit symbols and parses the numeric remainder.
///
/// Only ASCII digits and the decimal point survive the strip, so `38.2°C`,
/// `38.2 C`, and `100.8°F` all parse. No unit conversion is performed:
/// Fahrenheit-rendered values keep their Fahrenheit-scale digits. That
/// ambiguity is inherited from the upstream data contract and deliberately
/// left in place.
pub fn clean_temperature(cell: &CellValue) -> CellValue {
    match cell {
        CellValue::Number(value) => CellValue::Number(*value),
        CellValue::Text(value) => {
            let stripped: String = value
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            match stripped.parse::<f64>() {
                Ok(parsed) => CellValue::Number(parsed),
                Err(_) => CellValue::Missing,
            }
        }
        CellValue::Missing => CellValue::Missing,
    }
}

/// Canonicalizes a blood pressure reading to `systolic/diastolic`.
///
/// Every non-digit, non-whitespace byte acts as a separator, so `120/80`,
/// `120-80`, `120\80`, and `120 over 80` all yield two integer tokens. Any
/// token count other than two (an incomplete `150`, or noise) is `Missing`.
pub fn clean_blood_pressure(cell: &CellValue) -> CellValue {
    let raw = match cell {
        CellValue::Text(value) => value.clone(),
        CellValue::Number(_) => cell.to_output_string(),
        CellValue::Missing => return CellValue::Missing,
    };
    let separated: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    let tokens: Vec<i64> = separated
        .split_whitespace()
        .filter_map(|token| token.parse::<i64>().ok())
        .collect();
    match tokens.as_slice() {
        [systolic, diastolic] => CellValue::Text(format!("{systolic}/{diastolic}")),
        _ => CellValue::Missing,
    }
}
