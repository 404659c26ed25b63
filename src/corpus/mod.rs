// Delimited corpus parsing.
//
// A corpus is one flat string holding many records separated by `___`.
// Within a record, named fields start at a literal tag (e.g. `Skills__`)
// and run to the next `|`, except open-ended fields which run to the end
// of the record. The upstream system encodes absent values as the literal
// token `null`.

use std::collections::HashMap;

use anyhow::{bail, Result};

/// Separator between records in a corpus string.
pub const RECORD_SEPARATOR: &str = "___";
/// Separator terminating a field inside a record.
pub const FIELD_SEPARATOR: char = '|';
/// Tag marking the record identifier.
pub const ID_TAG: &str = "Id:";
/// Placeholder the upstream system emits for an absent value.
pub const NULL_TOKEN: &str = "null";

/// Where to find one named field inside a record segment.
pub struct FieldSpec {
    /// Field name used as the key in `Record::fields`.
    pub name: &'static str,
    /// Literal prefix marking where the field's text begins.
    pub tag: &'static str,
    /// An open-ended field runs to the end of the segment (with stray
    /// `|` characters removed) instead of stopping at the next `|`.
    pub open_ended: bool,
}

/// One parsed entity (project, user, or job) from a corpus.
#[derive(Debug, Clone)]
pub struct Record {
    /// Identifier, unique within the corpus.
    pub id: String,
    /// Field name -> raw (un-normalized) field text.
    pub fields: HashMap<&'static str, String>,
}

impl Record {
    /// Raw text of a named field, or "" if the field parsed empty.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }
}

/// Split a corpus into record segments, skipping empty and
/// whitespace-only segments. A corpus ending in `___` therefore parses
/// to the same record set as one without the trailing separator.
pub fn split_segments(corpus: &str) -> Vec<&str> {
    corpus
        .split(RECORD_SEPARATOR)
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

/// Parse a corpus into records carrying the declared fields.
///
/// A segment missing its `Id:` tag or any declared field tag aborts the
/// whole parse: silently skipping a malformed record would shift every
/// downstream ranking position without any visible signal.
pub fn parse(corpus: &str, specs: &[FieldSpec]) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (index, segment) in split_segments(corpus).iter().enumerate() {
        let segment = segment.replace('\n', " ");

        let Some(id) = id_text(&segment) else {
            bail!("record {index}: missing required tag {ID_TAG:?}");
        };

        let mut fields = HashMap::new();
        for spec in specs {
            let Some(text) = field_text(&segment, spec) else {
                bail!("record {index}: missing required tag {:?}", spec.tag);
            };
            fields.insert(spec.name, text);
        }

        records.push(Record { id, fields });
    }

    Ok(records)
}

/// Parse the id-plus-free-text corpus shape: each record is an `Id:` field
/// followed by unstructured text. The remainder (everything except the
/// `Id:...|` span) lands in the single field `"target"`.
pub fn parse_plain(corpus: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (index, segment) in split_segments(corpus).iter().enumerate() {
        let segment = segment.replace('\n', " ");

        let Some(start) = segment.find(ID_TAG) else {
            bail!("record {index}: missing required tag {ID_TAG:?}");
        };
        let after_tag = start + ID_TAG.len();
        let id_end = match segment[after_tag..].find(FIELD_SEPARATOR) {
            Some(offset) => after_tag + offset + 1,
            None => segment.len(),
        };

        let id = segment[after_tag..id_end]
            .trim_end_matches(FIELD_SEPARATOR)
            .to_string();
        let target = strip_null(&format!("{}{}", &segment[..start], &segment[id_end..]));

        let mut fields = HashMap::new();
        fields.insert("target", target);
        records.push(Record { id, fields });
    }

    Ok(records)
}

/// Extract one declared field from a record segment (or a bare query
/// record), with the `null` placeholder stripped. Returns `None` when the
/// tag is absent.
pub fn field_text(segment: &str, spec: &FieldSpec) -> Option<String> {
    field_between(segment, spec.tag, spec.open_ended)
}

/// The record identifier, read from the `Id:` tag to the next separator.
/// Unlike field text, identifiers are taken verbatim (no `null` stripping).
fn id_text(segment: &str) -> Option<String> {
    let start = segment.find(ID_TAG)? + ID_TAG.len();
    let rest = &segment[start..];
    let id = match rest.find(FIELD_SEPARATOR) {
        Some(end) => &rest[..end],
        None => rest,
    };
    Some(id.to_string())
}

fn field_between(segment: &str, tag: &str, open_ended: bool) -> Option<String> {
    let start = segment.find(tag)? + tag.len();
    let rest = &segment[start..];

    let raw = if open_ended {
        // Open-ended fields swallow the rest of the segment; drop any
        // stray separators so downstream text is clean
        rest.replace(FIELD_SEPARATOR, "")
    } else {
        match rest.find(FIELD_SEPARATOR) {
            Some(end) => rest[..end].to_string(),
            None => rest.to_string(),
        }
    };

    Some(strip_null(&raw))
}

fn strip_null(text: &str) -> String {
    text.replace(NULL_TOKEN, "")
}
