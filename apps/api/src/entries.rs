//! Multi-entry parser for the experience, education and projects fields.
//!
//! Users type several entries into one text box: entries are separated by `|||`
//! and the fields of one entry by `;`, e.g.
//! `Acme;NYC;2020-2022;Engineer;Built X ||| Initech;;2018-2020;Intern;Fixed Y`.
//!
//! Fields are assigned strictly by position. An intentionally blank field must be
//! written as two adjacent delimiters (`Initech;;2018`), and a field that is simply
//! missing from the end of the entry also comes out as `""`. The two cases cannot
//! be told apart after parsing.

use serde::ser::{Serialize, SerializeMap, Serializer};

pub const ENTRY_DELIMITER: &str = "|||";
pub const FIELD_DELIMITER: char = ';';

pub const EXPERIENCE_FIELDS: &[&str] = &["companyName", "location", "dates", "jobTitle", "description"];
pub const EDUCATION_FIELDS: &[&str] = &["institutionName", "location", "dates", "degree", "description"];
pub const PROJECT_FIELDS: &[&str] = &["projectName", "description", "link"];

/// Which form field an entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Experience,
    Education,
    Project,
}

impl EntryKind {
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            EntryKind::Experience => EXPERIENCE_FIELDS,
            EntryKind::Education => EDUCATION_FIELDS,
            EntryKind::Project => PROJECT_FIELDS,
        }
    }
}

/// One parsed entry: every requested field name, in order, mapped to its value.
///
/// Serializes as a JSON object with keys in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    fields: Vec<(&'static str, String)>,
}

#[cfg(test)]
impl ParsedEntry {
    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }

    fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(field, _)| *field)
    }

    fn is_blank(&self) -> bool {
        self.fields.iter().all(|(_, value)| value.is_empty())
    }
}

impl Serialize for ParsedEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, value) in &self.fields {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

/// Splits `raw` into entries and assigns the `;`-separated parts of each entry to
/// `field_names` by position.
///
/// - absent or blank input → no entries
/// - `k` chunks → exactly `k` entries, including empty chunks
/// - fewer parts than fields → the remaining fields are `""`
/// - more parts than fields → the extras are dropped
///
/// Never fails.
pub fn parse_multi_entries(raw: Option<&str>, field_names: &[&'static str]) -> Vec<ParsedEntry> {
    let raw = match raw {
        Some(text) if !text.trim().is_empty() => text,
        _ => return Vec::new(),
    };

    raw.split(ENTRY_DELIMITER)
        .map(|chunk| parse_entry(chunk, field_names))
        .collect()
}

/// Parses one form field using the field names for its kind.
pub fn parse_entries(raw: Option<&str>, kind: EntryKind) -> Vec<ParsedEntry> {
    parse_multi_entries(raw, kind.field_names())
}

fn parse_entry(chunk: &str, field_names: &[&'static str]) -> ParsedEntry {
    let mut parts = chunk.split(FIELD_DELIMITER).map(str::trim);
    let fields = field_names
        .iter()
        .map(|&name| (name, parts.next().unwrap_or_default().to_string()))
        .collect();
    ParsedEntry { fields }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORK_FIELDS: &[&str] = &["company", "location", "dates", "title", "description"];

    #[test]
    fn test_full_entry_maps_positionally() {
        let entries = parse_multi_entries(Some("Acme;NYC;2020-2022;Engineer;Built X"), WORK_FIELDS);
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.get("company"), Some("Acme"));
        assert_eq!(e.get("location"), Some("NYC"));
        assert_eq!(e.get("dates"), Some("2020-2022"));
        assert_eq!(e.get("title"), Some("Engineer"));
        assert_eq!(e.get("description"), Some("Built X"));
    }

    #[test]
    fn test_empty_and_absent_input_yield_nothing() {
        assert!(parse_multi_entries(None, WORK_FIELDS).is_empty());
        assert!(parse_multi_entries(Some(""), WORK_FIELDS).is_empty());
        assert!(parse_multi_entries(Some("  \n\t "), WORK_FIELDS).is_empty());
    }

    #[test]
    fn test_entry_count_matches_chunk_count() {
        let raw = "A;x;1;t;d ||| B;y;2;t;d|||C";
        assert_eq!(parse_multi_entries(Some(raw), WORK_FIELDS).len(), 3);

        // a trailing delimiter still produces a chunk
        let entries = parse_multi_entries(Some("A;x|||"), WORK_FIELDS);
        assert_eq!(entries.len(), 2);
        assert!(entries[1].is_blank());
    }

    #[test]
    fn test_missing_trailing_fields_default_to_empty() {
        let entries = parse_multi_entries(Some("Acme;NYC"), WORK_FIELDS);
        let e = &entries[0];
        assert_eq!(e.get("company"), Some("Acme"));
        assert_eq!(e.get("location"), Some("NYC"));
        assert_eq!(e.get("dates"), Some(""));
        assert_eq!(e.get("title"), Some(""));
        assert_eq!(e.get("description"), Some(""));
    }

    #[test]
    fn test_every_field_name_present() {
        for raw in ["", "Acme", "Acme;NYC;2020;Eng;Did;extra;more"] {
            for entry in parse_multi_entries(Some(format!("{raw}|||x").as_str()), WORK_FIELDS) {
                assert_eq!(entry.field_names().collect::<Vec<_>>(), WORK_FIELDS);
            }
        }
    }

    #[test]
    fn test_extra_parts_ignored() {
        let entries = parse_multi_entries(Some("Proj;Desc;https://x.dev;surplus"), PROJECT_FIELDS);
        assert_eq!(entries[0].get("link"), Some("https://x.dev"));
        assert_eq!(entries[0].field_names().count(), 3);
    }

    #[test]
    fn test_skipped_location_is_empty_string() {
        let entries = parse_entries(Some("Initech;;2018-2020;Intern;Fixed Y"), EntryKind::Experience);
        let e = &entries[0];
        assert_eq!(e.get("location"), Some(""));
        assert_eq!(e.get("dates"), Some("2018-2020"));
        assert_eq!(e.get("jobTitle"), Some("Intern"));
    }

    #[test]
    fn test_parts_are_trimmed() {
        let entries = parse_entries(Some("  MIT ; Cambridge, MA ;2010 - 2014; BSc  "), EntryKind::Education);
        let e = &entries[0];
        assert_eq!(e.get("institutionName"), Some("MIT"));
        assert_eq!(e.get("location"), Some("Cambridge, MA"));
        assert_eq!(e.get("degree"), Some("BSc"));
        assert_eq!(e.get("description"), Some(""));
    }

    #[test]
    fn test_serializes_in_field_order() {
        let entries = parse_entries(Some("Site;Portfolio rebuild"), EntryKind::Project);
        let json = serde_json::to_string(&entries[0]).unwrap();
        assert_eq!(
            json,
            r#"{"projectName":"Site","description":"Portfolio rebuild","link":""}"#
        );
    }
}
