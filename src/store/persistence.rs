//! Saving and restoring registration state through a [`KeyValueStore`].
//!
//! Restores never fail. A missing key yields the default; unreadable or
//! malformed data is logged and also yields the default. Codes that no
//! longer exist in the catalog are dropped silently.
//!
//! # Layout
//!
//! | Key | Value |
//! |-----|-------|
//! | `icrs_selected_<student id>` | JSON array of course codes, selection order |
//! | `icrs_courses` | JSON array of course offerings |

use serde_json::Value;

use super::catalog::{clamp_seats, parse_seats};
use super::{CourseCatalog, KeyValueStore, StoreResult};
use crate::models::{CourseOffering, Selection};

/// Key under which the catalog snapshot is stored.
pub const CATALOG_KEY: &str = "icrs_courses";

/// Key under which a student's selection is stored.
pub fn selection_key(student_id: &str) -> String {
    format!("icrs_selected_{student_id}")
}

/// Saves the selection as an ordered list of codes.
pub fn save_selection<S: KeyValueStore + ?Sized>(
    store: &S,
    student_id: &str,
    selection: &Selection,
) -> StoreResult<()> {
    let json = serde_json::to_string(&selection.codes())?;
    store.save(&selection_key(student_id), &json)?;
    tracing::debug!(student_id, count = selection.len(), "selection saved");
    Ok(())
}

/// Restores a selection, re-resolving stored codes against `catalog`.
///
/// Returns an empty selection when nothing usable is stored.
pub fn restore_selection<S: KeyValueStore + ?Sized>(
    store: &S,
    student_id: &str,
    catalog: &CourseCatalog,
) -> Selection {
    let key = selection_key(student_id);
    let Some(raw) = load_or_warn(store, &key) else {
        return Selection::new();
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(codes) => {
            let selection = catalog.resolve(&codes);
            if selection.len() < codes.len() {
                tracing::debug!(
                    student_id,
                    stored = codes.len(),
                    restored = selection.len(),
                    "dropped stored codes missing from catalog"
                );
            }
            selection
        }
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "malformed stored selection, starting empty");
            Selection::new()
        }
    }
}

/// Saves a full catalog snapshot.
pub fn save_catalog<S: KeyValueStore + ?Sized>(
    store: &S,
    catalog: &CourseCatalog,
) -> StoreResult<()> {
    let json = serde_json::to_string(catalog)?;
    store.save(CATALOG_KEY, &json)?;
    tracing::debug!(courses = catalog.len(), "catalog saved");
    Ok(())
}

/// Restores the catalog on top of `defaults`.
///
/// Course definitions always come from `defaults`; only seat counts are
/// taken from the stored snapshot, matched by code. Stored entries for
/// unknown codes are ignored. Stored seat values are clamped to zero or
/// more, and non-numeric values count as zero.
pub fn restore_catalog<S: KeyValueStore + ?Sized>(
    store: &S,
    defaults: Vec<CourseOffering>,
) -> CourseCatalog {
    let mut catalog = CourseCatalog::new(defaults);
    let Some(raw) = load_or_warn(store, CATALOG_KEY) else {
        return catalog;
    };

    let entries = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) => {
            tracing::warn!(key = CATALOG_KEY, "stored catalog is not an array, using defaults");
            return catalog;
        }
        Err(e) => {
            tracing::warn!(
                key = CATALOG_KEY,
                error = %e,
                "malformed stored catalog, using defaults"
            );
            return catalog;
        }
    };

    for entry in &entries {
        let Some(code) = entry.get("code").and_then(Value::as_str) else {
            continue;
        };
        let seats = entry.get("seatsLeft").map(seat_value).unwrap_or(0);
        catalog.set_seats(code, i64::from(seats));
    }
    catalog
}

fn load_or_warn<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.load(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "store read failed, using defaults");
            None
        }
    }
}

/// Interprets a stored seat value: numbers (truncated) or numeric strings,
/// clamped to zero or more. Anything else is zero.
fn seat_value(value: &Value) -> u32 {
    let raw = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(s) => parse_seats(s),
        _ => None,
    };
    clamp_seats(raw.unwrap_or(0))
}
