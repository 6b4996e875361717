//! Supported languages and glossary (Wiktionary) link building.
//!
//! Language codes follow the open-dict-data ipa-dict naming, which is not
//! always the Wiktionary subdomain: Malay is "ma" upstream but "ms" on
//! Wiktionary, Norwegian Bokmål "nb" lives on the Norwegian ("no") wiki, and
//! Cantonese ("yue") is covered by the Chinese wiki. Jamaican Creole ("jam")
//! and Isan ("tts") have no Wiktionary edition at all.

use phf::phf_map;

/// A supported dictionary language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// open-dict-data language code (also the dictionary file stem)
    pub code: &'static str,
    /// English display name
    pub name: &'static str,
    /// Example query words for interactive help
    pub examples: &'static [&'static str],
}

/// All languages with an ipa-dict pronunciation dictionary.
pub const LANGUAGES: &[Language] = &[
    Language { code: "ar", name: "Arabic", examples: &["كتاب", "ماء", "شمس"] },
    Language { code: "de", name: "German", examples: &["Haus", "Buch", "Wasser"] },
    Language { code: "en_UK", name: "English (UK)", examples: &["bread", "knight", "through"] },
    Language { code: "en_US", name: "English (US)", examples: &["bread", "knight", "through"] },
    Language { code: "eo", name: "Esperanto", examples: &["domo", "libro", "akvo"] },
    Language { code: "es_ES", name: "Spanish (Spain)", examples: &["casa", "agua", "libro"] },
    Language { code: "es_MX", name: "Spanish (Mexico)", examples: &["casa", "agua", "libro"] },
    Language { code: "fa", name: "Persian", examples: &["آب", "کتاب", "خورشید"] },
    Language { code: "fi", name: "Finnish", examples: &["talo", "kirja", "vesi"] },
    Language { code: "fr_FR", name: "French (France)", examples: &["maison", "livre", "eau"] },
    Language { code: "fr_QC", name: "French (Quebec)", examples: &["maison", "livre", "eau"] },
    Language { code: "is", name: "Icelandic", examples: &["hús", "bók", "vatn"] },
    Language { code: "ja", name: "Japanese", examples: &["本", "水", "家"] },
    Language { code: "jam", name: "Jamaican Creole", examples: &["house", "book", "wata"] },
    Language { code: "km", name: "Khmer", examples: &["ផ្ទះ", "សៀវភៅ", "ទឹក"] },
    Language { code: "ko", name: "Korean", examples: &["집", "책", "물"] },
    Language { code: "ma", name: "Malay", examples: &["rumah", "buku", "air"] },
    Language { code: "nb", name: "Norwegian Bokmål", examples: &["hus", "bok", "vann"] },
    Language { code: "nl", name: "Dutch", examples: &["huis", "boek", "water"] },
    Language { code: "or", name: "Odia", examples: &["ଘର", "ପୁସ୍ତକ", "ପାଣି"] },
    Language { code: "pl", name: "Polish", examples: &["dom", "książka", "woda"] },
    Language { code: "pt_BR", name: "Portuguese (Brazil)", examples: &["casa", "livro", "água"] },
    Language { code: "ro", name: "Romanian", examples: &["casă", "carte", "apă"] },
    Language { code: "sv", name: "Swedish", examples: &["hus", "bok", "vatten"] },
    Language { code: "sw", name: "Swahili", examples: &["nyumba", "kitabu", "maji"] },
    Language { code: "tts", name: "Isan", examples: &["บ้าน", "หนังสือ", "น้ำ"] },
    Language { code: "vi_C", name: "Vietnamese (Central)", examples: &["nhà", "sách", "nước"] },
    Language { code: "vi_N", name: "Vietnamese (Northern)", examples: &["nhà", "sách", "nước"] },
    Language { code: "vi_S", name: "Vietnamese (Southern)", examples: &["nhà", "sách", "nước"] },
    Language { code: "yue", name: "Cantonese", examples: &["屋", "書", "水"] },
    Language { code: "zh_hans", name: "Mandarin (Simplified)", examples: &["房子", "书", "水"] },
    Language { code: "zh_hant", name: "Mandarin (Traditional)", examples: &["房子", "書", "水"] },
];

/// Wiktionary subdomain per language code. Codes missing here (jam, tts)
/// have no Wiktionary edition.
static WIKTIONARY_SUBDOMAINS: phf::Map<&'static str, &'static str> = phf_map! {
    "ar" => "ar",
    "de" => "de",
    "en_UK" => "en",
    "en_US" => "en",
    "eo" => "eo",
    "es_ES" => "es",
    "es_MX" => "es",
    "fa" => "fa",
    "fi" => "fi",
    "fr_FR" => "fr",
    "fr_QC" => "fr",
    "is" => "is",
    "ja" => "ja",
    "km" => "km",
    "ko" => "ko",
    "ma" => "ms",
    "nb" => "no",
    "nl" => "nl",
    "or" => "or",
    "pl" => "pl",
    "pt_BR" => "pt",
    "ro" => "ro",
    "sv" => "sv",
    "sw" => "sw",
    "vi_C" => "vi",
    "vi_N" => "vi",
    "vi_S" => "vi",
    "zh_hans" => "zh",
    "zh_hant" => "zh",
    "yue" => "zh",
};

/// Look up a language by its open-dict-data code.
pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

/// Wiktionary subdomain for a language code, if that language has an edition.
pub fn wiktionary_subdomain(code: &str) -> Option<&'static str> {
    WIKTIONARY_SUBDOMAINS.get(code).copied()
}

/// Glossary URL for a word, if the language has a Wiktionary edition.
///
/// Spaces become underscores in page titles; everything else is
/// percent-encoded.
pub fn wiktionary_url(word: &str, code: &str) -> Option<String> {
    let subdomain = wiktionary_subdomain(code)?;
    let title = urlencoding::encode(&word.trim().replace(' ', "_")).into_owned();
    Some(format!("https://{subdomain}.wiktionary.org/wiki/{title}"))
}
