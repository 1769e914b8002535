//! Stoplist providers.
//!
//! A stoplist is the set of a language's most frequent function words. The
//! classifier only ever reads them, so providers hand out shared references
//! and build each list at most once.

use std::collections::{HashMap, HashSet};
use std::sync::{LazyLock, OnceLock};

use crate::error::TextsiftError;

/// Lowercased stopwords of one language.
pub type Stoplist = HashSet<String>;

/// Resolves a language name to its stoplist.
pub trait StoplistProvider {
    /// Return the stoplist for `language`, or `UnknownLanguage`.
    fn stoplist(&self, language: &str) -> Result<&Stoplist, TextsiftError>;

    /// Names of every language this provider can resolve.
    fn languages(&self) -> Vec<&str>;
}

impl<P: StoplistProvider + ?Sized> StoplistProvider for &P {
    fn stoplist(&self, language: &str) -> Result<&Stoplist, TextsiftError> {
        (**self).stoplist(language)
    }

    fn languages(&self) -> Vec<&str> {
        (**self).languages()
    }
}

/// Stoplists compiled into the crate: (language_name, file_contents).
const STOPLISTS: &[(&str, &str)] = &[
    ("Afrikaans", include_str!("Afrikaans.txt")),
    ("Arabic", include_str!("Arabic.txt")),
    ("Armenian", include_str!("Armenian.txt")),
    ("Azerbaijani", include_str!("Azerbaijani.txt")),
    ("Basque", include_str!("Basque.txt")),
    ("Bengali", include_str!("Bengali.txt")),
    ("Breton", include_str!("Breton.txt")),
    ("Bulgarian", include_str!("Bulgarian.txt")),
    ("Catalan", include_str!("Catalan.txt")),
    ("Chinese", include_str!("Chinese.txt")),
    ("Croatian", include_str!("Croatian.txt")),
    ("Czech", include_str!("Czech.txt")),
    ("Danish", include_str!("Danish.txt")),
    ("Dutch", include_str!("Dutch.txt")),
    ("English", include_str!("English.txt")),
    ("Esperanto", include_str!("Esperanto.txt")),
    ("Estonian", include_str!("Estonian.txt")),
    ("Finnish", include_str!("Finnish.txt")),
    ("French", include_str!("French.txt")),
    ("Galician", include_str!("Galician.txt")),
    ("German", include_str!("German.txt")),
    ("Greek", include_str!("Greek.txt")),
    ("Gujarati", include_str!("Gujarati.txt")),
    ("Hausa", include_str!("Hausa.txt")),
    ("Hebrew", include_str!("Hebrew.txt")),
    ("Hindi", include_str!("Hindi.txt")),
    ("Hungarian", include_str!("Hungarian.txt")),
    ("Indonesian", include_str!("Indonesian.txt")),
    ("Irish", include_str!("Irish.txt")),
    ("Italian", include_str!("Italian.txt")),
    ("Japanese", include_str!("Japanese.txt")),
    ("Kazakh", include_str!("Kazakh.txt")),
    ("Korean", include_str!("Korean.txt")),
    ("Kurdish", include_str!("Kurdish.txt")),
    ("Latin", include_str!("Latin.txt")),
    ("Latvian", include_str!("Latvian.txt")),
    ("Lithuanian", include_str!("Lithuanian.txt")),
    ("Malay", include_str!("Malay.txt")),
    ("Marathi", include_str!("Marathi.txt")),
    ("Nepali", include_str!("Nepali.txt")),
    ("Norwegian", include_str!("Norwegian.txt")),
    ("Persian", include_str!("Persian.txt")),
    ("Polish", include_str!("Polish.txt")),
    ("Portuguese", include_str!("Portuguese.txt")),
    ("Romanian", include_str!("Romanian.txt")),
    ("Russian", include_str!("Russian.txt")),
    ("Slovak", include_str!("Slovak.txt")),
    ("Slovenian", include_str!("Slovenian.txt")),
    ("Somali", include_str!("Somali.txt")),
    ("Sotho", include_str!("Sotho.txt")),
    ("Spanish", include_str!("Spanish.txt")),
    ("Swahili", include_str!("Swahili.txt")),
    ("Swedish", include_str!("Swedish.txt")),
    ("Tagalog", include_str!("Tagalog.txt")),
    ("Tajik", include_str!("Tajik.txt")),
    ("Thai", include_str!("Thai.txt")),
    ("Turkish", include_str!("Turkish.txt")),
    ("Ukrainian", include_str!("Ukrainian.txt")),
    ("Urdu", include_str!("Urdu.txt")),
    ("Vietnamese", include_str!("Vietnamese.txt")),
    ("Yoruba", include_str!("Yoruba.txt")),
    ("Zulu", include_str!("Zulu.txt")),
];

/// Alternative names that resolve to an embedded list: (alias, language_name).
const ALIASES: &[(&str, &str)] = &[
    ("Norwegian_Bokmal", "Norwegian"),
    ("Simple_English", "English"),
];

/// Index into `STOPLISTS` for a language name or alias, ignoring ASCII case.
fn position(language: &str) -> Option<usize> {
    let name = ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(language))
        .map_or(language, |(_, name)| *name);
    STOPLISTS
        .iter()
        .position(|(known, _)| known.eq_ignore_ascii_case(name))
}

fn language_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = STOPLISTS
        .iter()
        .map(|(name, _)| *name)
        .chain(ALIASES.iter().map(|(alias, _)| *alias))
        .collect();
    names.sort_unstable();
    names
}

/// Parse a stoplist file: one word per line, lowercased, blank lines skipped.
pub(crate) fn parse_stoplist(contents: &str) -> Stoplist {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// The stoplists embedded in the crate.
///
/// Each list is parsed on first use and cached for the life of the provider.
#[derive(Debug)]
pub struct EmbeddedStoplists {
    slots: Vec<OnceLock<Stoplist>>,
}

impl EmbeddedStoplists {
    pub fn new() -> Self {
        Self {
            slots: STOPLISTS.iter().map(|_| OnceLock::new()).collect(),
        }
    }

    /// Process-wide instance used by the free functions.
    pub fn shared() -> &'static EmbeddedStoplists {
        static SHARED: LazyLock<EmbeddedStoplists> = LazyLock::new(EmbeddedStoplists::new);
        &SHARED
    }
}

impl Default for EmbeddedStoplists {
    fn default() -> Self {
        Self::new()
    }
}

impl StoplistProvider for EmbeddedStoplists {
    fn stoplist(&self, language: &str) -> Result<&Stoplist, TextsiftError> {
        let index = position(language)
            .ok_or_else(|| TextsiftError::UnknownLanguage(language.to_string()))?;
        Ok(self.slots[index].get_or_init(|| parse_stoplist(STOPLISTS[index].1)))
    }

    fn languages(&self) -> Vec<&str> {
        language_names()
    }
}

/// Caller-supplied stoplists, keyed by language name (case-insensitive).
#[derive(Debug, Clone, Default)]
pub struct CustomStoplists {
    names: Vec<String>,
    lists: HashMap<String, Stoplist>,
}

impl CustomStoplists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a language. Words are trimmed and lowercased.
    pub fn insert<I, S>(&mut self, language: &str, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        let key = language.to_lowercase();
        if self.lists.insert(key, list).is_none() {
            self.names.push(language.to_string());
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_language<I, S>(mut self, language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert(language, words);
        self
    }
}

impl StoplistProvider for CustomStoplists {
    fn stoplist(&self, language: &str) -> Result<&Stoplist, TextsiftError> {
        self.lists
            .get(&language.to_lowercase())
            .ok_or_else(|| TextsiftError::UnknownLanguage(language.to_string()))
    }

    fn languages(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }
}

/// Union of every embedded stoplist, for pages mixing several languages.
pub fn all_stoplists() -> &'static Stoplist {
    static ALL: LazyLock<Stoplist> = LazyLock::new(|| {
        STOPLISTS
            .iter()
            .flat_map(|(_, contents)| parse_stoplist(contents))
            .collect()
    });
    &ALL
}

/// Stoplist for one embedded language (case-insensitive).
pub fn get_stoplist(language: &str) -> Result<&'static Stoplist, TextsiftError> {
    EmbeddedStoplists::shared().stoplist(language)
}

/// Names of the embedded languages and their aliases, sorted.
pub fn available_languages() -> Vec<&'static str> {
    language_names()
}
