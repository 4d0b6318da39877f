use search_core::{DocId, Document, DocumentStatus, Execution, SearchEngine, SearchError, MAX_RESULT_DOCUMENT_COUNT};

fn ids(docs: &[Document]) -> Vec<DocId> {
    docs.iter().map(|d| d.id).collect()
}

fn pets() -> SearchEngine {
    let mut engine = SearchEngine::new(["and"]).unwrap();
    engine.add_document(1, "white cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7]).unwrap();
    engine.add_document(2, "fluffy cat fluffy eyes", DocumentStatus::Actual, &[5, -12, 2, 1]).unwrap();
    engine.add_document(3, "groomed dog expressive eyes", DocumentStatus::Actual, &[9]).unwrap();
    engine.add_document(4, "fluffy dog and collar", DocumentStatus::Actual, &[1]).unwrap();
    engine
}

/// Deterministic pseudo-random corpus over a small vocabulary.
fn generated(n: i32) -> SearchEngine {
    const WORDS: [&str; 12] = ["cat", "dog", "bird", "fluffy", "tail", "eyes", "collar", "white", "black", "big", "small", "and"];
    let mut engine = SearchEngine::with_stop_words_text("and").unwrap();
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    for id in 0..n {
        let mut text = Vec::new();
        for _ in 0..(3 + id % 7) {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            text.push(WORDS[(seed >> 33) as usize % WORDS.len()]);
        }
        let status = if id % 5 == 0 { DocumentStatus::Banned } else { DocumentStatus::Actual };
        engine.add_document(id, &text.join(" "), status, &[id % 11, -(id % 3)]).unwrap();
    }
    engine
}

#[test]
fn repeated_term_ranks_higher() {
    let engine = pets();
    let top = engine.find_top_documents("fluffy well groomed cat").unwrap();
    let pos = |id| top.iter().position(|d| d.id == id).unwrap();
    assert!(pos(2) < pos(1));
}

#[test]
fn minus_word_excludes_documents() {
    let engine = pets();
    assert_eq!(ids(&engine.find_top_documents("-cat fluffy").unwrap()), vec![4]);
    for doc in engine.find_top_documents("fluffy cat eyes -tail").unwrap() {
        assert_ne!(doc.id, 1);
    }
}

#[test]
fn minus_wins_over_same_plus_word() {
    let engine = pets();
    assert!(engine.find_top_documents("cat -cat").unwrap().is_empty());
}

#[test]
fn frequencies_sum_to_one() {
    let engine = generated(50);
    for id in engine.document_ids() {
        let freqs = engine.word_frequencies(id);
        if freqs.is_empty() {
            continue;
        }
        let sum: f64 = freqs.values().sum();
        assert!((sum - 1.0).abs() < 1e-9, "doc {id}: {sum}");
    }
}

#[test]
fn unknown_ids_are_permissive() {
    let mut engine = pets();
    assert!(engine.word_frequencies(99).is_empty());
    engine.remove_document(99);
    assert_eq!(engine.document_count(), 4);
}

#[test]
fn removal_is_idempotent() {
    let mut engine = pets();
    engine.remove_document(2);
    let once: Vec<_> = engine.document_ids().collect();
    engine.remove_document(2);
    assert_eq!(engine.document_ids().collect::<Vec<_>>(), once);
    assert!(engine.word_frequencies(2).is_empty());
    assert_eq!(once, vec![1, 3, 4]);
    assert!(engine.find_top_documents("eyes").unwrap().iter().all(|d| d.id != 2));
}

#[test]
fn add_then_remove_round_trips() {
    let mut engine = pets();
    let before = engine.clone();
    engine.add_document(10, "fluffy parrot", DocumentStatus::Actual, &[3]).unwrap();
    engine.add_document(11, "cat parrot", DocumentStatus::Irrelevant, &[]).unwrap();
    engine.remove_document_exec(Execution::Parallel, 10);
    engine.remove_document(11);

    assert_eq!(engine.document_count(), before.document_count());
    assert_eq!(engine.document_ids().collect::<Vec<_>>(), before.document_ids().collect::<Vec<_>>());
    for id in before.document_ids() {
        assert_eq!(engine.word_frequencies(id), before.word_frequencies(id));
    }
    assert_eq!(engine.find_top_documents("fluffy cat").unwrap(), before.find_top_documents("fluffy cat").unwrap());
    assert!(engine.match_document("parrot", 1).unwrap().0.is_empty());
}

#[test]
fn sequential_and_parallel_agree() {
    let engine = generated(500);
    for query in ["cat fluffy -bird", "big small white", "dog -dog", "collar eyes tail", "black"] {
        let seq = engine.find_top_documents(query).unwrap();
        let par = engine.find_top_documents_exec(Execution::Parallel, query).unwrap();
        assert_eq!(seq, par, "query {query:?}");
        assert_eq!(seq, engine.find_top_documents(query).unwrap());
        let banned = engine.find_top_documents_by_status_exec(Execution::Parallel, query, DocumentStatus::Banned).unwrap();
        assert_eq!(banned, engine.find_top_documents_by_status(query, DocumentStatus::Banned).unwrap());
    }
}

#[test]
fn parallel_removal_matches_sequential() {
    let mut seq = generated(200);
    let mut par = seq.clone();
    for id in (0..200).step_by(3) {
        seq.remove_document(id);
        par.remove_document_exec(Execution::Parallel, id);
    }
    assert_eq!(seq.document_ids().collect::<Vec<_>>(), par.document_ids().collect::<Vec<_>>());
    for id in seq.document_ids() {
        assert_eq!(seq.word_frequencies(id), par.word_frequencies(id));
    }
    assert_eq!(seq.find_top_documents("cat dog").unwrap(), par.find_top_documents("cat dog").unwrap());
}

#[test]
fn results_never_exceed_limit() {
    let engine = generated(300);
    let all = engine.find_top_documents_with("cat dog bird fluffy", |_, _, _| true).unwrap();
    assert_eq!(all.len(), MAX_RESULT_DOCUMENT_COUNT);
    for pair in all.windows(2) {
        assert!(pair[0].relevance + 1e-6 > pair[1].relevance);
    }
}

#[test]
fn equal_relevance_orders_by_rating() {
    let mut engine = SearchEngine::new(Vec::<String>::new()).unwrap();
    engine.add_document(1, "grey mouse", DocumentStatus::Actual, &[3]).unwrap();
    engine.add_document(2, "grey mouse", DocumentStatus::Actual, &[5]).unwrap();
    engine.add_document(3, "white rabbit", DocumentStatus::Actual, &[1]).unwrap();
    assert_eq!(ids(&engine.find_top_documents("mouse").unwrap()), vec![2, 1]);
}

#[test]
fn add_document_errors() {
    let mut engine = pets();
    assert_eq!(engine.add_document(-1, "x", DocumentStatus::Actual, &[]), Err(SearchError::NegativeId(-1)));
    assert_eq!(engine.add_document(1, "x", DocumentStatus::Actual, &[]), Err(SearchError::DuplicateId(1)));
    assert!(matches!(
        engine.add_document(5, "skye te\u{12}rrier", DocumentStatus::Actual, &[]),
        Err(SearchError::InvalidWord(_))
    ));
    assert_eq!(engine.document_count(), 4);
    assert!(SearchEngine::with_stop_words_text("in the\u{7}").is_err());
}

#[test]
fn malformed_queries_fail() {
    let engine = pets();
    assert_eq!(engine.find_top_documents("cat -"), Err(SearchError::EmptyMinusWord));
    assert!(matches!(engine.find_top_documents("--cat"), Err(SearchError::DoubleMinus(_))));
    assert!(matches!(engine.match_document("ca\u{1}t", 1), Err(SearchError::InvalidWord(_))));
}
