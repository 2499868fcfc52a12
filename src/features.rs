//! # Patient Feature Record
//! The thirteen clinical inputs the scorer works on, plus the lenient
//! coercion the ingress applies to untrusted request bodies.
//!
//! Coercion policy: every field is pulled from the raw JSON object and
//! converted Number-style — numbers pass through, numeric strings parse,
//! booleans map to 0/1, and anything absent or unparseable becomes 0.
//! This is deliberate: out-of-domain values fall through to each rule's
//! default branch instead of being rejected.

use serde::Serialize;
use serde_json::Value;

/// One patient record. Discrete fields are integers; `oldpeak`
/// (ST depression) is the only real-valued input.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PatientFeatures {
    /// Age in years.
    pub age: i32,
    /// 1 = male, 0 = female.
    pub sex: i32,
    /// Chest pain type, 0–3.
    pub cp: i32,
    /// Resting blood pressure (mm Hg).
    pub trestbps: i32,
    /// Serum cholesterol (mg/dl).
    pub chol: i32,
    /// Fasting blood sugar > 120 mg/dl, 0/1.
    pub fbs: i32,
    /// Resting ECG result, 0–2.
    pub restecg: i32,
    /// Maximum heart rate achieved (bpm).
    pub thalach: i32,
    /// Exercise-induced angina, 0/1.
    pub exang: i32,
    /// ST depression induced by exercise.
    pub oldpeak: f64,
    /// Slope of the peak exercise ST segment, 0–2.
    pub slope: i32,
    /// Number of major vessels colored by fluoroscopy, 0–3.
    pub ca: i32,
    /// Thalassemia type, 0–2.
    pub thal: i32,
}

impl PatientFeatures {
    /// Build a record from an arbitrary JSON body, coercing every field.
    ///
    /// Discrete fields truncate fractional input (e.g. `"120.5"` → 120).
    /// At a bin boundary that can shift the contribution relative to a
    /// caller that kept the fraction: trestbps 120.5 scores as ≤ 120 here.
    /// Integer typing of the discrete fields is the chosen contract.
    pub fn from_json(body: &Value) -> Self {
        Self {
            age: int_field(body, "age"),
            sex: int_field(body, "sex"),
            cp: int_field(body, "cp"),
            trestbps: int_field(body, "trestbps"),
            chol: int_field(body, "chol"),
            fbs: int_field(body, "fbs"),
            restecg: int_field(body, "restecg"),
            thalach: int_field(body, "thalach"),
            exang: int_field(body, "exang"),
            oldpeak: num_field(body, "oldpeak"),
            slope: int_field(body, "slope"),
            ca: int_field(body, "ca"),
            thal: int_field(body, "thal"),
        }
    }
}

fn num_field(body: &Value, key: &str) -> f64 {
    body.get(key).map(coerce_number).unwrap_or(0.0)
}

fn int_field(body: &Value, key: &str) -> i32 {
    num_field(body, key) as i32
}

/// Number-style coercion of a single JSON value; non-finite results
/// collapse to 0.
fn coerce_number(v: &Value) -> f64 {
    let n = match v {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_fields_pass_through() {
        let body = json!({ "age": 63, "oldpeak": 2.3, "sex": 1 });
        let f = PatientFeatures::from_json(&body);
        assert_eq!(f.age, 63);
        assert_eq!(f.sex, 1);
        assert!((f.oldpeak - 2.3).abs() < 1e-12);
    }

    #[test]
    fn numeric_strings_parse_like_form_input() {
        let body = json!({ "age": "63", "trestbps": " 145 ", "oldpeak": "2.3" });
        let f = PatientFeatures::from_json(&body);
        assert_eq!(f.age, 63);
        assert_eq!(f.trestbps, 145);
        assert!((f.oldpeak - 2.3).abs() < 1e-12);
    }

    #[test]
    fn garbage_and_absent_fields_become_zero() {
        let body = json!({ "age": "abc", "chol": null, "ca": [1, 2], "thal": {} });
        let f = PatientFeatures::from_json(&body);
        assert_eq!(f.age, 0);
        assert_eq!(f.chol, 0);
        assert_eq!(f.ca, 0);
        assert_eq!(f.thal, 0);
        // thalach not present at all
        assert_eq!(f.thalach, 0);
    }

    #[test]
    fn booleans_map_to_flags() {
        let body = json!({ "fbs": true, "exang": false });
        let f = PatientFeatures::from_json(&body);
        assert_eq!(f.fbs, 1);
        assert_eq!(f.exang, 0);
    }

    #[test]
    fn fractional_discrete_input_truncates() {
        let body = json!({ "age": 63.7 });
        let f = PatientFeatures::from_json(&body);
        assert_eq!(f.age, 63);
    }

    #[test]
    fn truncation_resolves_bin_boundaries_downward() {
        // 120.5 lands in the ≤ 120 blood-pressure bin after truncation.
        let body = json!({ "trestbps": "120.5" });
        let f = PatientFeatures::from_json(&body);
        assert_eq!(f.trestbps, 120);
        assert_eq!(
            crate::scoring::contribution(crate::scoring::TRESTBPS, f.trestbps as f64),
            -0.1
        );
    }
}
