use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;
use std::collections::HashSet;

lazy_static! {
    static ref RE: Regex = Regex::new(r"(?u)\p{L}[\p{L}\p{N}_']*").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
    // Words that are rarely nouns: adverbs, verbs without a common noun sense, adjectives and numerals.
    static ref NON_NOUNS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "also","always","never","often","still","just","now","even","ever","already","almost","soon","yet","however","instead","perhaps",
            "rather","quite","later","ago","away","together",
            "become","became","becomes","begin","began","begins","begun","believe","believes","bring","brings","brought","bought",
            "come","came","comes","continue","continues","create","creates","decide","decides","die","dies","eat","eats","ate","eaten",
            "fell","felt","flew","get","gets","got","gotten","give","gives","gave","given","go","goes","went","gone","grow","grows","grew","grown",
            "happen","happens","hear","hears","heard","held","include","includes","keep","keeps","kept","know","knows","knew","known",
            "learn","learns","let","lets","lose","loses","lost","make","makes","made","meant","meet","meets","met","provide","provides",
            "put","puts","ran","remain","say","says","said","see","sees","seen","seem","seems","sell","sells","sold","send","sends","sent",
            "shown","sit","sits","sat","speak","speaks","spoke","spend","spends","spent","stood","suggest","suggests",
            "take","takes","took","taken","tell","tells","told","think","thinks","tries","understand","understands","understood",
            "want","wrote","write","writes","written","won",
            "able","bad","big","certain","clear","different","early","easy","economic","entire","fast","free","full","good","great","hard",
            "high","huge","important","large","late","little","long","low","many","much","new","old","possible","real","recent","slow",
            "small","strong","sure","true","whole","wide","young",
            "one","two","three","four","five","six","seven","eight","nine","ten","first","third","several","every","another","either","neither",
        ];
        words.iter().copied().collect()
    };
    static ref ABBREVIATIONS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "mr","mrs","ms","dr","prof","sr","jr","st","vs","mt","gen","gov","sen","rep","inc","ltd","co","corp","jan","feb","mar","apr",
            "jun","jul","aug","sep","sept","oct","nov","dec","fig","e.g","i.e","u.s","u.k",
        ];
        words.iter().copied().collect()
    };
}

/// Options for the lexical tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerConfig {
    /// Reduce word tokens to their English stem (lowercased).
    pub stem: bool,
}

/// Splits articles into sentences and sentences into word tokens.
pub trait Tokenizer {
    fn tokenize_sentence(&self, text: &str) -> Vec<String>;
    fn tokenize_word(&self, sentence: &str, only_noun: bool) -> Vec<String>;
}

/// Rule-based tokenizer: punctuation sentence boundaries, regex words and a
/// lexical noun filter.
#[derive(Debug, Clone, Default)]
pub struct LexicalTokenizer {
    config: TokenizerConfig,
}

impl LexicalTokenizer {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: TokenizerConfig) -> Self { Self { config } }
}

impl Tokenizer for LexicalTokenizer {
    fn tokenize_sentence(&self, text: &str) -> Vec<String> {
        tokenize_sentence(text)
    }

    fn tokenize_word(&self, sentence: &str, only_noun: bool) -> Vec<String> {
        let words = tokenize_word(sentence, only_noun);
        if !self.config.stem {
            return words;
        }
        words
            .into_iter()
            .map(|w| STEMMER.stem(&w.to_lowercase()).to_string())
            .collect()
    }
}

fn is_terminal(c: char) -> bool { matches!(c, '.' | '!' | '?') }

fn is_closer(c: char) -> bool { matches!(c, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}') }

fn is_initial_token(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next(), chars.next()), (Some(c), Some('.'), None) if c.is_uppercase())
}

fn is_capitalized(word: &str) -> bool { word.chars().next().map_or(false, char::is_uppercase) }

/// True when the period after `prefix` closes an abbreviation or an initial.
/// A lone capital counts as an initial only next to another initial or after a
/// capitalized word that does not open the sentence (J. R. R. Tolkien, John F. Kennedy),
/// so "grade A." and "Plan B." still end their sentences.
fn ends_with_abbreviation(prefix: &str, next_word: Option<&str>) -> bool {
    let words: Vec<&str> = prefix
        .split_whitespace()
        .map(|w| w.trim_start_matches(|c: char| matches!(c, '(' | '"' | '\'' | '[' | '\u{201c}')))
        .collect();
    let last = match words.last() {
        Some(w) => *w,
        None => return false,
    };
    let mut chars = last.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if !c.is_uppercase() { return false; }
        let prev = words.len().checked_sub(2).map(|i| words[i]);
        let after_initial = prev.map_or(false, is_initial_token);
        let after_name = words.len() > 2 && prev.map_or(false, is_capitalized);
        return after_initial || after_name || next_word.map_or(false, is_initial_token);
    }
    ABBREVIATIONS.contains(last.to_lowercase().as_str())
}

fn push_trimmed(out: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() { out.push(trimmed.to_string()); }
}

/// Split text into sentences. Each sentence is the trimmed original substring,
/// terminal punctuation included, in document order.
pub fn tokenize_sentence(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < chars.len() {
        let (offset, c) = chars[i];
        if !is_terminal(c) { i += 1; continue; }
        let mut j = i + 1;
        while j < chars.len() && (is_terminal(chars[j].1) || is_closer(chars[j].1)) { j += 1; }
        let end = chars.get(j).map(|&(b, _)| b).unwrap_or(text.len());
        let at_boundary = j >= chars.len() || chars[j].1.is_whitespace();
        let abbreviated = c == '.'
            && j == i + 1
            && ends_with_abbreviation(&text[start..offset], text[end..].split_whitespace().next());
        if at_boundary && !abbreviated {
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
        i = j;
    }
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn is_noun_candidate(token: &str) -> bool {
    let lower = token.to_lowercase();
    if lower.chars().count() < 2 { return false; }
    if STOPWORDS.contains(lower.as_str()) || NON_NOUNS.contains(lower.as_str()) { return false; }
    if is_capitalized(token) { return true; }
    let len = lower.chars().count();
    // -ly adverbs and -ed verb forms; capitalized words (Italy, Alfred) are kept above
    let adverb = lower.ends_with("ly") && len > 4;
    let past = lower.ends_with("ed") && len > 5 && lower != "hundred";
    !(adverb || past)
}

/// Tokenize a sentence into NFKC-normalized word tokens with their original casing.
/// With `only_noun`, tokens rejected by the lexical noun heuristic are dropped.
pub fn tokenize_word(sentence: &str, only_noun: bool) -> Vec<String> {
    let normalized = sentence.nfkc().collect::<String>();
    RE.find_iter(&normalized)
        .map(|m| m.as_str())
        .filter(|token| !only_noun || is_noun_candidate(token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminal_punctuation() {
        let s = tokenize_sentence("Cats chase mice. Mice run fast! Do dogs chase cats? Birds fly high.");
        assert_eq!(s, vec!["Cats chase mice.", "Mice run fast!", "Do dogs chase cats?", "Birds fly high."]);
    }

    #[test]
    fn keeps_abbreviations_and_initials_inside_sentence() {
        let s = tokenize_sentence("Mr. Smith met John F. Kennedy at noon. They talked about J. R. R. Tolkien.");
        assert_eq!(s, vec!["Mr. Smith met John F. Kennedy at noon.", "They talked about J. R. R. Tolkien."]);
    }

    #[test]
    fn lone_capitals_can_end_sentences() {
        let s = tokenize_sentence("He got a grade of A. Then he left. Plan B. It worked.");
        assert_eq!(s, vec!["He got a grade of A.", "Then he left.", "Plan B.", "It worked."]);
    }

    #[test]
    fn absorbs_closing_quotes_and_trailing_text() {
        let s = tokenize_sentence("He said \"stop.\" Then nothing");
        assert_eq!(s, vec!["He said \"stop.\"", "Then nothing"]);
    }

    #[test]
    fn empty_text_has_no_sentences() {
        assert!(tokenize_sentence("").is_empty());
        assert!(tokenize_sentence("   \n ").is_empty());
    }

    #[test]
    fn noun_filter_drops_stopwords_adjectives_and_verb_forms() {
        assert_eq!(tokenize_word("Birds fly high.", true), vec!["Birds", "fly"]);
        assert_eq!(tokenize_word("Birds fly high.", false), vec!["Birds", "fly", "high"]);
        assert_eq!(tokenize_word("The storm quickly passed over Italy.", true), vec!["storm", "Italy"]);
    }

    #[test]
    fn noun_filter_keeps_nouns_that_double_as_verbs() {
        assert_eq!(
            tokenize_word("The report on climate work and water use was released.", true),
            vec!["report", "climate", "work", "water", "use"]
        );
        assert_eq!(tokenize_word("The play had a strong lead and a second act.", true), vec!["play", "lead", "second", "act"]);
    }

    #[test]
    fn stemming_is_opt_in() {
        let t = LexicalTokenizer::with_config(TokenizerConfig { stem: true });
        assert_eq!(t.tokenize_word("Running runners", false), vec!["run", "runner"]);
        assert_eq!(LexicalTokenizer::new().tokenize_word("Running runners", false), vec!["Running", "runners"]);
    }
}
