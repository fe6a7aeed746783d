use glyphic_core::dictionary::DictionaryStore;
use glyphic_core::language::Transliterator;
use glyphic_core::types::{DEFAULT_MULTI_MSG, DEFAULT_UNDEFINED_MSG, Messages};

use super::{identity_glyphs, store};
use crate::loader::{DictionaryLoader, EmbeddedSource};
use crate::processor::HebrewTransliterator;

fn hello_world() -> HebrewTransliterator {
    HebrewTransliterator::new(
        store("ipa", &[("hello", "hɛˈloʊ"), ("world", "wɝːld")]),
        identity_glyphs("hɛˈloʊwɝːld"),
    )
}

fn hebrew_glyphs() -> DictionaryStore {
    store(
        "hebrew",
        &[("m", "מ"), ("n", "נ"), ("n(final)", "ן"), ("æ", "א"), ("ə", "א")],
    )
}

#[test]
fn hello_world_maps_each_word() {
    let conversion = hello_world().convert("Hello World");
    assert_eq!(conversion.output, "hɛˈloʊ* wɝːld*");
    assert_eq!(conversion.diagnostics, "");
}

#[test]
fn punctuation_and_case_are_ignored_for_lookup() {
    let conversion = hello_world().convert("HELLO,   world!");
    assert_eq!(conversion.output, "hɛˈloʊ* wɝːld*");
    assert_eq!(conversion.diagnostics, "");
}

#[test]
fn undefined_word_is_echoed() {
    let transliterator =
        HebrewTransliterator::new(store("ipa", &[("hello", "həloʊ")]), hebrew_glyphs());
    let conversion = transliterator.convert("xyzzy");
    assert_eq!(conversion.output, "xyzzy");
    assert_eq!(conversion.diagnostics, DEFAULT_UNDEFINED_MSG);
}

#[test]
fn undefined_word_keeps_original_token() {
    let transliterator =
        HebrewTransliterator::new(store("ipa", &[("hello", "həloʊ")]), hebrew_glyphs());
    let conversion = transliterator.convert("Xyzzy!");
    assert_eq!(conversion.output, "Xyzzy!");
    assert_eq!(conversion.diagnostics, DEFAULT_UNDEFINED_MSG);
}

#[test]
fn multiple_pronunciations_are_joined() {
    let transliterator = HebrewTransliterator::new(
        store("ipa", &[("word", "wɝd"), ("word(1)", "wɝːd")]),
        DictionaryStore::from_source("glyphs", "w w\n"),
    );
    let conversion = transliterator.convert("word");
    assert_eq!(conversion.output, "wɝd OR wɝːd");
    assert_eq!(conversion.diagnostics, DEFAULT_MULTI_MSG);
}

#[test]
fn only_last_alternate_takes_final_form() {
    let transliterator = HebrewTransliterator::new(
        store("ipa", &[("man", "mæn"), ("man(1)", "mən")]),
        hebrew_glyphs(),
    );
    assert_eq!(transliterator.phonetic("man"), "mæn OR mən");
    assert_eq!(transliterator.convert("man").output, "מאנ OR מאן");
}

#[test]
fn both_messages_are_reported_once() {
    let transliterator = HebrewTransliterator::new(
        store("ipa", &[("man", "mæn"), ("man(1)", "mən")]),
        hebrew_glyphs(),
    );
    let conversion = transliterator.convert("man foo man bar");
    assert_eq!(
        conversion.diagnostics,
        format!("{DEFAULT_UNDEFINED_MSG} {DEFAULT_MULTI_MSG}")
    );
}

#[test]
fn empty_input_yields_single_empty_word() {
    let conversion = hello_world().convert("");
    assert_eq!(conversion.output, "");
    assert_eq!(conversion.diagnostics, DEFAULT_UNDEFINED_MSG);
}

#[test]
fn edge_whitespace_produces_empty_words() {
    let conversion = hello_world().convert(" hello ");
    assert_eq!(conversion.output, " hɛˈloʊ* ");
    assert_eq!(conversion.diagnostics, DEFAULT_UNDEFINED_MSG);
}

#[test]
fn unloaded_dictionaries_degrade_to_echo() {
    let conversion = HebrewTransliterator::default().convert("hello world");
    assert_eq!(conversion.output, "hello world");
    assert_eq!(conversion.diagnostics, DEFAULT_UNDEFINED_MSG);
}

#[test]
fn custom_messages_are_used() {
    let messages = Messages {
        undefined_word: "Unknown word.".into(),
        multiple_pronunciations: "Several readings.".into(),
    };
    let transliterator = HebrewTransliterator::with_messages(
        store("ipa", &[("man", "mæn"), ("man(1)", "mən")]),
        hebrew_glyphs(),
        messages,
    );
    assert_eq!(transliterator.messages().undefined_word, "Unknown word.");
    assert_eq!(
        transliterator.convert("man xyzzy").diagnostics,
        "Unknown word. Several readings."
    );
}

#[test]
fn phonetic_text_is_exposed() {
    assert_eq!(hello_world().phonetic("Hello World"), "hɛˈloʊ wɝːld");
    assert_eq!(hello_world().phonetic("hello Xyzzy"), "hɛˈloʊ Xyzzy");
}

#[test]
fn language_code_is_hebrew() {
    assert_eq!(hello_world().language_code(), "he");
    assert_eq!(hello_world().tokenize("a  b").len(), 2);
}

#[tokio::test]
async fn embedded_dictionaries_transliterate_shalom() {
    let (phonetic, glyphs) =
        DictionaryLoader::load_pair(&EmbeddedSource::phonetic(), &EmbeddedSource::glyphs())
            .await
            .unwrap();
    let transliterator = HebrewTransliterator::new(phonetic, glyphs);

    let conversion = transliterator.convert("Shalom!");
    assert_eq!(conversion.output, "שאלוום");
    assert_eq!(conversion.diagnostics, "");

    let conversion = transliterator.convert("read");
    assert_eq!(conversion.output, "ריד OR ראד");
    assert_eq!(conversion.diagnostics, DEFAULT_MULTI_MSG);
}
