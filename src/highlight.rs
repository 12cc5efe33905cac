//! Per-line syntax highlighting for the diff result view and the JSON output
//! panel.
//!
//! The highlighter consumes one display row at a time and returns a flat
//! token list whose texts concatenate back to the input line losslessly; it
//! has no bearing on alignment correctness. Tokenization is a coarse
//! regex-based pass (comments, string literals, numbers, keywords), not a
//! grammar: enough for colorized rendering, nothing more.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ToolError;

/// Languages offered by the host's selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Tsx,
    Javascript,
    Json,
    Python,
    Css,
    Html,
    Rust,
    Sql,
    Bash,
    Plaintext,
}

impl Default for Language {
    /// JSON is preselected in the language dropdown.
    fn default() -> Self {
        Language::Json
    }
}

impl Language {
    /// All languages in selector order.
    pub const ALL: [Language; 10] = [
        Language::Tsx,
        Language::Javascript,
        Language::Json,
        Language::Python,
        Language::Css,
        Language::Html,
        Language::Rust,
        Language::Sql,
        Language::Bash,
        Language::Plaintext,
    ];

    /// Stable wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Tsx => "tsx",
            Language::Javascript => "javascript",
            Language::Json => "json",
            Language::Python => "python",
            Language::Css => "css",
            Language::Html => "html",
            Language::Rust => "rust",
            Language::Sql => "sql",
            Language::Bash => "bash",
            Language::Plaintext => "plaintext",
        }
    }

    /// Human-readable label for the selector.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Tsx => "TypeScript/JSX",
            Language::Javascript => "JavaScript",
            Language::Json => "JSON",
            Language::Python => "Python",
            Language::Css => "CSS",
            Language::Html => "HTML",
            Language::Rust => "Rust",
            Language::Sql => "SQL",
            Language::Bash => "Bash",
            Language::Plaintext => "Plain Text",
        }
    }

    /// Parses a wire identifier back into a language tag.
    pub fn from_string(s: &str) -> Result<Language, ToolError> {
        match s {
            "tsx" => Ok(Language::Tsx),
            "javascript" => Ok(Language::Javascript),
            "json" => Ok(Language::Json),
            "python" => Ok(Language::Python),
            "css" => Ok(Language::Css),
            "html" => Ok(Language::Html),
            "rust" => Ok(Language::Rust),
            "sql" => Ok(Language::Sql),
            "bash" => Ok(Language::Bash),
            "plaintext" => Ok(Language::Plaintext),
            _ => Err(ToolError::UnknownLanguage(s.to_string())),
        }
    }

    fn comment_style(&self) -> CommentStyle {
        match self {
            Language::Tsx | Language::Javascript | Language::Rust => CommentStyle::Slash,
            Language::Python | Language::Bash => CommentStyle::Hash,
            Language::Sql => CommentStyle::Dash,
            Language::Json | Language::Css | Language::Html | Language::Plaintext => {
                CommentStyle::None
            }
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Language::Tsx => &[
                "const", "let", "var", "function", "return", "if", "else", "for", "while",
                "class", "import", "export", "from", "default", "new", "async", "await", "try",
                "catch", "throw", "typeof", "in", "of", "this", "null", "undefined", "true",
                "false", "interface", "type", "extends", "implements", "enum", "as", "readonly",
            ],
            Language::Javascript => &[
                "const", "let", "var", "function", "return", "if", "else", "for", "while",
                "class", "import", "export", "from", "default", "new", "async", "await", "try",
                "catch", "throw", "typeof", "in", "of", "this", "null", "undefined", "true",
                "false",
            ],
            Language::Json => &["true", "false", "null"],
            Language::Python => &[
                "def", "return", "if", "elif", "else", "for", "while", "import", "from", "as",
                "class", "try", "except", "finally", "with", "lambda", "pass", "break",
                "continue", "None", "True", "False", "and", "or", "not", "in", "is", "yield",
                "raise", "global", "assert", "del",
            ],
            Language::Css => &[
                "important", "inherit", "initial", "unset", "auto", "none", "hidden", "solid",
                "dashed", "dotted", "bold", "italic", "normal", "center", "absolute",
                "relative", "fixed", "static", "block", "inline", "flex", "grid",
            ],
            Language::Html => &[],
            Language::Rust => &[
                "fn", "let", "mut", "pub", "use", "mod", "struct", "enum", "trait", "impl",
                "for", "while", "loop", "if", "else", "match", "return", "self", "Self",
                "crate", "super", "where", "async", "await", "move", "ref", "static", "const",
                "unsafe", "dyn", "in", "as", "break", "continue", "type", "true", "false",
            ],
            Language::Sql => &[
                "SELECT", "FROM", "WHERE", "AND", "OR", "NOT", "NULL", "INSERT", "INTO",
                "VALUES", "UPDATE", "SET", "DELETE", "CREATE", "TABLE", "DROP", "ALTER",
                "JOIN", "LEFT", "RIGHT", "INNER", "OUTER", "ON", "GROUP", "BY", "ORDER",
                "HAVING", "LIMIT", "OFFSET", "AS", "DISTINCT", "UNION", "ALL", "BETWEEN",
                "LIKE", "IN", "IS", "EXISTS", "CASE", "WHEN", "THEN", "ELSE", "END",
                "PRIMARY", "KEY", "FOREIGN", "REFERENCES", "INDEX",
            ],
            Language::Bash => &[
                "if", "then", "else", "elif", "fi", "for", "do", "done", "while", "case",
                "esac", "function", "in", "echo", "exit", "return", "local", "export",
                "readonly", "shift", "source", "set", "unset", "trap", "true", "false",
            ],
            Language::Plaintext => &[],
        }
    }
}

/// Line-comment marker family shared by several languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentStyle {
    Slash,
    Hash,
    Dash,
    None,
}

/// Classification of one token within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Keyword,
    Literal,
    Number,
    Comment,
    Punctuation,
    Text,
}

/// One colorizable slice of a line. Token texts concatenate back to the
/// original line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    fn new(text: &str, kind: TokenKind) -> Self {
        Self {
            text: text.to_string(),
            kind,
        }
    }
}

/// Per-line tokenizer boundary.
///
/// The host feeds aligner output rows through this one row at a time; any
/// implementation producing a lossless token cover of the line is
/// substitutable.
pub trait LineHighlighter {
    fn highlight(&self, line: &str, language: Language) -> Vec<Token>;
}

/// Default regex-based tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexHighlighter;

const STRING_NUMBER_WORD: &str = concat!(
    r#"(?P<string>"(?:\\.|[^"\\])*"?|'(?:\\.|[^'\\])*'?|`[^`]*`?)"#,
    r"|(?P<number>\b\d+(?:\.\d+)?\b)",
    r"|(?P<word>[A-Za-z_][A-Za-z0-9_]*)",
);

fn build_pattern(comment_marker: Option<&str>) -> Regex {
    let source = match comment_marker {
        Some(marker) => format!(r"(?P<comment>{marker}.*)|{STRING_NUMBER_WORD}"),
        None => STRING_NUMBER_WORD.to_string(),
    };
    Regex::new(&source).expect("static token pattern is valid")
}

fn pattern_for(style: CommentStyle) -> &'static Regex {
    static SLASH: OnceLock<Regex> = OnceLock::new();
    static HASH: OnceLock<Regex> = OnceLock::new();
    static DASH: OnceLock<Regex> = OnceLock::new();
    static PLAIN: OnceLock<Regex> = OnceLock::new();
    match style {
        CommentStyle::Slash => SLASH.get_or_init(|| build_pattern(Some("//"))),
        CommentStyle::Hash => HASH.get_or_init(|| build_pattern(Some("#"))),
        CommentStyle::Dash => DASH.get_or_init(|| build_pattern(Some("--"))),
        CommentStyle::None => PLAIN.get_or_init(|| build_pattern(None)),
    }
}

impl RegexHighlighter {
    fn gap_token(text: &str) -> Token {
        let kind = if text.trim().is_empty() {
            TokenKind::Text
        } else {
            TokenKind::Punctuation
        };
        Token::new(text, kind)
    }

    fn word_kind(word: &str, language: Language) -> TokenKind {
        let keywords = language.keywords();
        let hit = if language == Language::Sql {
            let canon = word.to_ascii_uppercase();
            keywords.contains(&canon.as_str())
        } else {
            keywords.contains(&word)
        };
        if hit { TokenKind::Keyword } else { TokenKind::Text }
    }
}

impl LineHighlighter for RegexHighlighter {
    fn highlight(&self, line: &str, language: Language) -> Vec<Token> {
        if line.is_empty() {
            return Vec::new();
        }
        if language == Language::Plaintext {
            return vec![Token::new(line, TokenKind::Text)];
        }

        let pattern = pattern_for(language.comment_style());
        let mut tokens = Vec::new();
        let mut cursor = 0usize;

        for caps in pattern.captures_iter(line) {
            let Some(whole) = caps.get(0) else { continue };
            if whole.start() > cursor {
                tokens.push(Self::gap_token(&line[cursor..whole.start()]));
            }
            let kind = if caps.name("comment").is_some() {
                TokenKind::Comment
            } else if caps.name("string").is_some() {
                TokenKind::Literal
            } else if caps.name("number").is_some() {
                TokenKind::Number
            } else {
                Self::word_kind(whole.as_str(), language)
            };
            tokens.push(Token::new(whole.as_str(), kind));
            cursor = whole.end();
        }
        if cursor < line.len() {
            tokens.push(Self::gap_token(&line[cursor..]));
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::{Language, LineHighlighter, RegexHighlighter, TokenKind};

    fn rebuild(tokens: &[super::Token]) -> String {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Tokens always concatenate back to the input line.
    #[test]
    fn tokens_are_lossless() {
        let lines = [
            "const x = \"a // not comment\" + 1; // real comment",
            "  SELECT id, name FROM users WHERE age > 21 -- adults",
            "def f(x): return x * 2  # double",
            "{\"key\": [1, 2.5, true, null]}",
            "no special tokens here",
        ];
        let languages = [
            Language::Javascript,
            Language::Sql,
            Language::Python,
            Language::Json,
            Language::Plaintext,
        ];
        for (line, language) in lines.iter().zip(languages) {
            let tokens = RegexHighlighter.highlight(line, language);
            assert_eq!(rebuild(&tokens), *line, "lossy tokenization for {line:?}");
        }
    }

    #[test]
    fn classifies_javascript_line() {
        let tokens = RegexHighlighter.highlight("const n = 42; // answer", Language::Javascript);
        assert_eq!(tokens[0].text, "const");
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert!(tokens.iter().any(|t| t.text == "42" && t.kind == TokenKind::Number));
        assert!(
            tokens
                .iter()
                .any(|t| t.text == "// answer" && t.kind == TokenKind::Comment)
        );
    }

    /// A comment marker inside a string literal stays part of the literal.
    #[test]
    fn string_swallows_comment_marker() {
        let tokens = RegexHighlighter.highlight("tag = \"not # a comment\"", Language::Python);
        assert!(
            tokens
                .iter()
                .any(|t| t.text == "\"not # a comment\"" && t.kind == TokenKind::Literal)
        );
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Comment));
    }

    /// SQL keywords match regardless of case.
    #[test]
    fn sql_keywords_case_insensitive() {
        let tokens = RegexHighlighter.highlight("select * from t", Language::Sql);
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert!(tokens.iter().any(|t| t.text == "from" && t.kind == TokenKind::Keyword));
    }

    #[test]
    fn plaintext_is_single_token() {
        let tokens = RegexHighlighter.highlight("if x = 1 // y", Language::Plaintext);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Text);
        assert!(RegexHighlighter.highlight("", Language::Plaintext).is_empty());
    }

    #[test]
    fn language_wire_names_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_string(language.as_str()).unwrap(), language);
        }
        assert!(Language::from_string("cobol").is_err());
    }
}
