use super::*;

fn session() -> Session {
    let corpus = Corpus::from_json_str(
        r#"{"books": [
            {"name": "Genesis", "chapters": [
                ["In the beginning God created the heaven and the earth.", "And the earth was without form"],
                {"chapter": 2, "verses": [{"verse": 1, "text": "Thus the heavens and the earth were finished"}]}
            ]},
            {"name": "1 John", "chapters": [{"chapter": 4, "verses": [
                {"verse": 8, "text": "He that loveth not knoweth not God; for God is love."},
                {"verse": 16, "text": "God is love; and he that dwelleth in love dwelleth in God"}
            ]}]},
            {"name": "Leviticus", "chapters": [["Love thy neighbour as thyself"]]}
        ]}"#,
    )
    .expect("load corpus");
    Session::with_seed(Arc::new(corpus), 42)
}

#[test]
fn lists_books_and_counts() {
    let session = session();
    assert_eq!(session.list_books(), vec!["Genesis", "1 John", "Leviticus"]);
    assert_eq!(session.chapter_count(1), Ok(2));
    assert_eq!(session.verse_count(1, 1), Ok(2));
    assert_eq!(session.verse_count(2, 1), Ok(2));
    assert!(matches!(
        session.chapter_count(4),
        Err(QueryError::BookRange { count: 3, .. })
    ));
}

#[test]
fn resolve_and_show_chapter_and_verse() {
    let session = session();
    let View::Chapter(view) = session.resolve_and_show(1, 2, None).expect("chapter") else {
        panic!("expected chapter view");
    };
    assert_eq!(view.book.name(), "Genesis");
    assert_eq!(view.chapter.number(), 2);
    assert_eq!(view.chapter_index, 2);

    let View::Verse(view) = session.resolve_and_show(2, 1, Some(2)).expect("verse") else {
        panic!("expected verse view");
    };
    assert_eq!(view.reference.to_string(), "1 John 4:16");
    assert!(view.text.starts_with("God is love"));
}

#[test]
fn show_verse_reports_each_failing_level() {
    let session = session();
    let view = session.show_verse(1, 2, 1).expect("verse");
    assert_eq!(view.reference.to_string(), "Genesis 2:1");

    assert!(matches!(
        session.show_verse(2, 1, 3),
        Err(QueryError::VerseRange {
            requested: 3,
            count: 2,
            chapter: 4,
            ..
        })
    ));
    assert!(matches!(
        session.show_verse(1, 3, 1),
        Err(QueryError::ChapterRange { requested: 3, .. })
    ));
    assert!(matches!(
        session.show_verse(0, 1, 1),
        Err(QueryError::BookRange { requested: 0, .. })
    ));
}

#[test]
fn resolution_never_bookmarks() {
    let session = session();
    session.resolve_and_show(1, 1, Some(1)).expect("verse");
    assert_eq!(session.list_bookmarks().count(), 0);
}

#[test]
fn search_records_history_even_without_matches() {
    let mut session = session();
    let hits = session.search("love").expect("search");
    let refs: Vec<_> = hits.iter().map(|hit| hit.reference.to_string()).collect();
    assert_eq!(refs, vec!["1 John 4:8", "1 John 4:16", "Leviticus 1:1"]);

    let hits = session.search("Nebuchadnezzar").expect("search");
    assert!(hits.is_empty());
    assert_eq!(
        session.search_history().collect::<Vec<_>>(),
        vec!["love", "Nebuchadnezzar"]
    );
}

#[test]
fn empty_search_leaves_history_untouched() {
    let mut session = session();
    session.search("earth").expect("search");
    assert_eq!(session.search(""), Err(QueryError::EmptyQuery));
    assert_eq!(session.search("  "), Err(QueryError::EmptyQuery));
    assert_eq!(session.search_history().collect::<Vec<_>>(), vec!["earth"]);
}

#[test]
fn history_keeps_last_ten_searches() {
    let mut session = session();
    for idx in 1..=11 {
        session.search(&format!("word{idx}")).expect("search");
    }
    let history: Vec<_> = session.search_history().collect();
    assert_eq!(history.len(), 10);
    assert_eq!(history[0], "word2");
    assert_eq!(history[9], "word11");
}

#[test]
fn bookmark_same_reference_twice_keeps_latest() {
    let mut session = session();
    session.bookmark("Genesis 1:1", "In the beginning...");
    session.bookmark("Genesis 1:1", "Updated text");
    let entries: Vec<_> = session.list_bookmarks().collect();
    assert_eq!(entries, vec![("Genesis 1:1", "Updated text")]);
}

#[test]
fn failed_resolution_has_no_side_effects() {
    let mut session = session();
    assert!(session.resolve_and_show(3, 1, Some(2)).is_err());
    assert!(session.resolve_and_show(3, 2, None).is_err());
    assert_eq!(session.list_bookmarks().count(), 0);
    assert_eq!(session.search_history().count(), 0);
    assert!(session.verse_of_the_day().is_some());
}

#[test]
fn verse_of_the_day_is_reproducible_with_seed() {
    let mut first = session();
    let mut second = session();
    for _ in 0..5 {
        assert_eq!(first.verse_of_the_day(), second.verse_of_the_day());
    }
}

#[test]
fn verse_of_the_day_resolves_back_to_same_verse() {
    let mut session = session();
    let picked = session.verse_of_the_day().expect("verse");
    let at = picked.coordinates;
    let View::Verse(view) = session
        .resolve_and_show(at.book, at.chapter, Some(at.verse))
        .expect("resolve picked verse")
    else {
        panic!("expected verse view");
    };
    assert_eq!(view, picked);
}
