//! Language definition data model.
//!
//! Each supported language is described by an immutable [`LanguageSpec`]
//! record: its identity (name, extensions, filenames, shebangs) and the
//! token tables that drive the generic line classifier. One state machine
//! serves every language; there is no per-language code.

use serde::Serialize;

/// Start/end delimiter pair for a block comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockDelim {
    /// Token that opens the comment (e.g. `/*`).
    pub start: &'static str,
    /// Token that closes the comment (e.g. `*/`).
    pub end: &'static str,
    /// Whether the comment nests: a nested delimiter tracks a depth counter
    /// and requires one end token per start token. A non-nested delimiter
    /// closes on the first end token regardless of intervening starts.
    pub nested: bool,
}

impl BlockDelim {
    /// A non-nesting block comment delimiter pair.
    pub const fn plain(start: &'static str, end: &'static str) -> Self {
        Self {
            start,
            end,
            nested: false,
        }
    }

    /// A nesting block comment delimiter pair.
    pub const fn nesting(start: &'static str, end: &'static str) -> Self {
        Self {
            start,
            end,
            nested: true,
        }
    }
}

/// Start/end delimiter pair for a string or character literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuoteDelim {
    /// Token that opens the literal.
    pub start: &'static str,
    /// Token that closes the literal.
    pub end: &'static str,
    /// Escape token that suppresses the next character while inside the
    /// literal. `None` for literals without escaping (and always ignored in
    /// verbatim quotes).
    pub escape: Option<&'static str>,
}

impl QuoteDelim {
    /// A quote pair with backslash escaping.
    pub const fn escaped(start: &'static str, end: &'static str) -> Self {
        Self {
            start,
            end,
            escape: Some("\\"),
        }
    }

    /// A quote pair without any escape token.
    pub const fn raw(start: &'static str, end: &'static str) -> Self {
        Self {
            start,
            end,
            escape: None,
        }
    }
}

/// Delimiters marking a region of embedded content in another language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmbedDelim {
    /// Token that opens the region (e.g. `<script>`).
    pub start: &'static str,
    /// Token that closes the region (e.g. `</script>`). The first match
    /// wins; embed regions do not nest.
    pub end: &'static str,
    /// Name of the language the region's content is classified as.
    pub language: &'static str,
}

/// Immutable description of one language's lexical grammar.
///
/// Built once (normally by [`crate::languages::builtin_languages`]) and
/// never mutated; the registry and every classifier share it read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSpec {
    /// Canonical language name (e.g. `Rust`, `C++`).
    pub name: &'static str,
    /// File extensions, lowercase, without the leading period. Multi-dot
    /// extensions (e.g. `d.ts`) are allowed and win over shorter ones.
    /// Matching is case-insensitive.
    pub extensions: Vec<&'static str>,
    /// Exact filenames, lowercase (e.g. `makefile`). Matching is
    /// case-insensitive and takes precedence over extensions.
    pub filenames: Vec<&'static str>,
    /// Interpreter basenames matched against a `#!` first line, including
    /// the argument of `#!/usr/bin/env`.
    pub shebangs: Vec<&'static str>,
    /// Tokens that start an end-of-line comment. Ordered; longest match
    /// wins, remaining ties go to the earlier entry.
    pub line_comments: Vec<&'static str>,
    /// Line comment tokens additionally tagged as documentation
    /// (e.g. `///`, `//!`). Checked before `line_comments`.
    pub doc_line_comments: Vec<&'static str>,
    /// Block comment delimiter pairs.
    pub block_comments: Vec<BlockDelim>,
    /// Ordinary string literal delimiters; escape tokens are honored.
    pub quotes: Vec<QuoteDelim>,
    /// Verbatim string delimiters (e.g. Rust raw strings); no escaping
    /// applies inside.
    pub verbatim_quotes: Vec<QuoteDelim>,
    /// Documentation string delimiters (e.g. Python `"""`). Counted as
    /// documentation when `CountConfig::count_doc_strings` is enabled,
    /// otherwise as code.
    pub doc_quotes: Vec<QuoteDelim>,
    /// Embedded-language region delimiters.
    pub embeddings: Vec<EmbedDelim>,
    /// Whether the language is primarily documentation (e.g. Markdown):
    /// ordinary text counts as comment rather than code.
    pub literate: bool,
}

impl LanguageSpec {
    /// Create a spec with the given name and no tokens.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            extensions: Vec::new(),
            filenames: Vec::new(),
            shebangs: Vec::new(),
            line_comments: Vec::new(),
            doc_line_comments: Vec::new(),
            block_comments: Vec::new(),
            quotes: Vec::new(),
            verbatim_quotes: Vec::new(),
            doc_quotes: Vec::new(),
            embeddings: Vec::new(),
            literate: false,
        }
    }

    /// Builder: set file extensions.
    pub fn extensions(mut self, extensions: &[&'static str]) -> Self {
        self.extensions = extensions.to_vec();
        self
    }

    /// Builder: set exact filenames.
    pub fn filenames(mut self, filenames: &[&'static str]) -> Self {
        self.filenames = filenames.to_vec();
        self
    }

    /// Builder: set shebang interpreter names.
    pub fn shebangs(mut self, shebangs: &[&'static str]) -> Self {
        self.shebangs = shebangs.to_vec();
        self
    }

    /// Builder: set line comment tokens.
    pub fn line_comments(mut self, tokens: &[&'static str]) -> Self {
        self.line_comments = tokens.to_vec();
        self
    }

    /// Builder: set documentation line comment tokens.
    pub fn doc_line_comments(mut self, tokens: &[&'static str]) -> Self {
        self.doc_line_comments = tokens.to_vec();
        self
    }

    /// Builder: set block comment delimiters.
    pub fn block_comments(mut self, delims: &[BlockDelim]) -> Self {
        self.block_comments = delims.to_vec();
        self
    }

    /// Builder: set string literal delimiters.
    pub fn quotes(mut self, delims: &[QuoteDelim]) -> Self {
        self.quotes = delims.to_vec();
        self
    }

    /// Builder: set verbatim string delimiters.
    pub fn verbatim_quotes(mut self, delims: &[QuoteDelim]) -> Self {
        self.verbatim_quotes = delims.to_vec();
        self
    }

    /// Builder: set documentation string delimiters.
    pub fn doc_quotes(mut self, delims: &[QuoteDelim]) -> Self {
        self.doc_quotes = delims.to_vec();
        self
    }

    /// Builder: set embedded-language regions.
    pub fn embeddings(mut self, delims: &[EmbedDelim]) -> Self {
        self.embeddings = delims.to_vec();
        self
    }

    /// Builder: mark the language as literate.
    pub fn literate(mut self) -> Self {
        self.literate = true;
        self
    }

    /// Whether any multi-character construct (block comment, quote,
    /// embedding) is defined. Languages without them only need line-level
    /// classification.
    pub fn has_multiline_constructs(&self) -> bool {
        !self.block_comments.is_empty()
            || !self.quotes.is_empty()
            || !self.verbatim_quotes.is_empty()
            || !self.doc_quotes.is_empty()
            || !self.embeddings.is_empty()
    }
}
