use super::raw::{declared_number, RawChapter};
use super::{Chapter, Verse};
use serde_json::Value;

/// Convert a classified raw chapter into the canonical model.
///
/// `position` is the 1-based position of the chapter within its book and is
/// used whenever the source does not declare a usable number. Every verse
/// entry keeps its slot: a bare string is its own text, an object supplies
/// `verse`/`text`, and anything else becomes an empty verse.
pub(crate) fn normalize(raw: RawChapter, book: &str, position: usize) -> Chapter {
    match raw {
        RawChapter::Positional(entries) => {
            let verses = read_verses(&entries, book, position);
            Chapter::new(to_number(position), verses)
        }
        RawChapter::Explicit(explicit) => {
            let number = match &explicit.chapter {
                None | Some(Value::Null) => to_number(position),
                Some(declared) => declared_number(declared).unwrap_or_else(|| {
                    tracing::warn!(
                        book,
                        position,
                        declared = %declared,
                        "unusable chapter number, using position"
                    );
                    to_number(position)
                }),
            };
            let verses = read_verses(&explicit.verses, book, position);
            Chapter::new(number, verses)
        }
    }
}

fn read_verses(entries: &[Value], book: &str, chapter: usize) -> Vec<Verse> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| read_verse(entry, book, chapter, idx + 1))
        .collect()
}

fn read_verse(entry: &Value, book: &str, chapter: usize, position: usize) -> Verse {
    let fallback = to_number(position);
    match entry {
        Value::String(text) => Verse::new(fallback, text.clone()),
        Value::Object(fields) => {
            let number = match fields.get("verse") {
                None | Some(Value::Null) => fallback,
                Some(declared) => declared_number(declared).unwrap_or_else(|| {
                    tracing::warn!(
                        book,
                        chapter,
                        position,
                        declared = %declared,
                        "unusable verse number, using position"
                    );
                    fallback
                }),
            };
            let text = match fields.get("text") {
                Some(Value::String(text)) => text.clone(),
                None | Some(Value::Null) => String::new(),
                Some(other) => {
                    tracing::warn!(
                        book,
                        chapter,
                        position,
                        text = %other,
                        "verse text is not a string"
                    );
                    String::new()
                }
            };
            Verse::new(number, text)
        }
        other => {
            tracing::warn!(
                book,
                chapter,
                position,
                entry = %other,
                "unrecognized verse entry"
            );
            Verse::new(fallback, String::new())
        }
    }
}

fn to_number(position: usize) -> u32 {
    u32::try_from(position).unwrap_or(u32::MAX)
}
