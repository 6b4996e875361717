// End-to-end pipeline tests without the network: raw dictionary text in the
// upstream ipa-dict format, through the engine, out as ranked results with
// glossary links.

use soundalike::{wiktionary_url, Config, Dictionary, Engine, SearchError};

const RAW: &str = "\
pat\t/pæt/\n\
bat\t/bæt/\n\
teresa\t/tɝˈeɪsə/, /tɝˈisə/\n\
garbage line without a tab\n\
chai\t/tʃaɪ/\n";

fn engine() -> Engine {
    Engine::new(Dictionary::from_text(RAW), Config::default())
}

#[test]
fn word_query_ranks_soundalikes() {
    let engine = engine();
    let results = engine.search("pat").unwrap();

    assert_eq!(results[0].word, "pat");
    assert_eq!(results[0].similarity, 100);
    assert_eq!(results[0].query_ipa, "/pæt/");
    assert!(results.iter().any(|r| r.word == "bat"));
}

#[test]
fn malformed_lines_are_dropped_not_fatal() {
    let engine = engine();
    assert_eq!(engine.dictionary().len(), 4);
}

#[test]
fn multi_variant_word_matches_either_variant() {
    let engine = engine();
    let results = engine.search("/tɝˈisə/").unwrap();
    assert_eq!(results[0].word, "teresa");
    assert_eq!(results[0].similarity, 100);
    assert_eq!(results[0].ipa, "/tɝˈisə/");
}

#[test]
fn errors_surface_as_values() {
    let engine = engine();
    assert_eq!(engine.search("   "), Err(SearchError::EmptyQuery));
    assert_eq!(
        engine.search("notaword"),
        Err(SearchError::WordNotFound("notaword".to_string()))
    );
}

#[test]
fn results_link_to_the_glossary() {
    let engine = engine();
    let results = engine.search("pat").unwrap();
    let url = wiktionary_url(&results[0].word, "en_US").unwrap();
    assert_eq!(url, "https://en.wiktionary.org/wiki/pat");
}
