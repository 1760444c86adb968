//! "Verse of the day" selection.
//!
//! Sampling is uniform at each level in turn: book, then chapter, then verse.
//! It is NOT uniform over all verses; a verse in a short book is more likely
//! to be drawn than one in a long book.
use crate::corpus::{Book, Chapter, Corpus};
use crate::resolve::{Coordinates, Resolved};
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick a verse by three-stage uniform sampling.
///
/// Books without any non-empty usable chapter, and chapters that are malformed
/// or empty, are not candidates. Returns `None` when the corpus has no verses.
pub fn select_random<'a, R: Rng>(
    corpus: &'a Corpus,
    rng: &mut R,
) -> Option<(Coordinates, Resolved<'a>)> {
    let books: Vec<(usize, &Book)> = corpus
        .books()
        .iter()
        .enumerate()
        .filter(|(_, book)| candidate_chapters(book).next().is_some())
        .collect();
    let &(book_idx, book) = books.choose(rng)?;

    let chapters: Vec<(usize, &Chapter)> = candidate_chapters(book).collect();
    let &(chapter_idx, chapter) = chapters.choose(rng)?;

    let verse_idx = rng.gen_range(0..chapter.verse_count());
    let verse = &chapter.verses()[verse_idx];

    let at = Coordinates {
        book: book_idx + 1,
        chapter: chapter_idx + 1,
        verse: verse_idx + 1,
    };
    tracing::debug!(book = book.name(), chapter = at.chapter, verse = at.verse, "random verse");
    Some((
        at,
        Resolved {
            book,
            chapter,
            verse,
        },
    ))
}

fn candidate_chapters(book: &Book) -> impl Iterator<Item = (usize, &Chapter)> {
    book.chapters().filter(|(_, chapter)| chapter.verse_count() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    #[test]
    fn sampling_is_uniform_per_book_not_per_verse() {
        let long: Vec<String> = (1..=1000).map(|n| format!("long verse {n}")).collect();
        let document = json!({"books": [
            {"name": "Short", "chapters": [["the only verse"]]},
            {"name": "Long", "chapters": [long]}
        ]});
        let corpus = Corpus::from_value(&document).expect("load corpus");
        let mut rng = StdRng::seed_from_u64(7);

        let draws = 4000;
        let short_hits = (0..draws)
            .filter(|_| {
                let (_, picked) = select_random(&corpus, &mut rng).expect("corpus has verses");
                picked.book.name() == "Short"
            })
            .count();
        let share = short_hits as f64 / draws as f64;
        assert!(
            (0.45..=0.55).contains(&share),
            "short book share {share} should be near 1/2"
        );
    }

    #[test]
    fn skips_empty_and_malformed_chapters() {
        let document = json!({"books": [
            {"name": "Empty", "chapters": []},
            {"name": "Mixed", "chapters": [[], "bad", {"chapter": 9, "verses": [{"verse": 2, "text": "kept"}]}]}
        ]});
        let corpus = Corpus::from_value(&document).expect("load corpus");
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let (at, picked) = select_random(&corpus, &mut rng).expect("one candidate");
            assert_eq!(
                at,
                Coordinates {
                    book: 2,
                    chapter: 3,
                    verse: 1
                }
            );
            assert_eq!(picked.reference().to_string(), "Mixed 9:2");
        }
    }

    #[test]
    fn empty_corpus_yields_nothing() {
        let corpus = Corpus::from_json_str(r#"{"books": []}"#).expect("load corpus");
        let mut rng = StdRng::seed_from_u64(3);
        assert!(select_random(&corpus, &mut rng).is_none());
    }
}
