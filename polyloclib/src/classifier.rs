//! The line classification state machine.
//!
//! This module contains the single generic scanner that classifies every
//! physical line of a file as code, comment, documentation or blank. It is
//! driven entirely by the token tables of a [`LanguageSpec`]; no language
//! has dedicated parsing code.
//!
//! The scan is a single left-to-right pass with bounded lookahead for
//! multi-character tokens. Block comments may nest, string literals are
//! opaque to comment detection, escape tokens suppress string terminators,
//! and unterminated constructs at end of input are tolerated: counting
//! never fails on malformed content.

use std::ops::Range;

use crate::counts::Counts;
use crate::language::{BlockDelim, EmbedDelim, LanguageSpec, QuoteDelim};
use crate::options::CountConfig;

/// A region of embedded content found during classification.
///
/// The byte range covers whole lines of the host text and excludes the
/// delimiter tokens, which are counted as host code. The range is
/// classified separately under the named language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedSpan {
    /// Byte range of the embedded content within the classified text.
    pub range: Range<usize>,
    /// Name of the embedded language.
    pub language: &'static str,
}

/// What kind of string literal the scanner is inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteKind {
    /// Ordinary string: escape tokens honored, contents count as code.
    Normal,
    /// Verbatim string: no escaping, contents count as code.
    Verbatim,
    /// Documentation string: contents count as documentation.
    Doc,
}

/// Scanner mode. `LineComment` resets to `Code` at the next newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Code,
    LineComment,
    BlockComment { delim: BlockDelim, depth: u32 },
    InString { delim: QuoteDelim, kind: QuoteKind },
}

/// What was seen on the current physical line. Code takes precedence over
/// documentation, documentation over plain comment; none of the three
/// means blank (unless a multi-line construct spans the line).
#[derive(Debug, Default, Clone, Copy)]
struct LineFlags {
    saw_code: bool,
    saw_comment: bool,
    saw_doc: bool,
}

/// A token match found at the current position in `Code` mode.
#[derive(Debug, Clone, Copy)]
enum StartToken {
    Quote(QuoteDelim, QuoteKind),
    Block(BlockDelim),
    Line { doc: bool },
    Embed(EmbedDelim),
}

/// Classifies text according to one language's grammar.
///
/// Stateless between calls; all transient classification state lives on
/// the stack of [`classify`](Self::classify), so one classifier can be
/// shared freely.
pub struct LineClassifier<'a> {
    language: &'a LanguageSpec,
    config: CountConfig,
}

impl<'a> LineClassifier<'a> {
    /// Create a classifier for the given language.
    pub fn new(language: &'a LanguageSpec, config: CountConfig) -> Self {
        Self { language, config }
    }

    /// Classify every line of `text`, returning the counts and any
    /// embedded-language spans found for delegation.
    pub fn classify(&self, text: &str) -> (Counts, Vec<EmbeddedSpan>) {
        let mut counts = Counts::new();
        let mut spans = Vec::new();
        let mut mode = Mode::Code;
        let mut flags = LineFlags::default();
        let mut i = 0;

        while i < text.len() {
            let rest = &text[i..];
            let Some(ch) = rest.chars().next() else { break };

            if ch == '\n' {
                self.finish_line(&mut counts, &mode, &mut flags);
                if mode == Mode::LineComment {
                    mode = Mode::Code;
                }
                i += 1;
                continue;
            }

            match &mut mode {
                Mode::LineComment => {
                    // Flags were set when the comment token was matched.
                    i += ch.len_utf8();
                }

                Mode::InString { delim, kind } => {
                    match kind {
                        QuoteKind::Doc => flags.saw_doc = true,
                        _ => flags.saw_code = true,
                    }

                    if *kind != QuoteKind::Verbatim {
                        if let Some(escape) = delim.escape {
                            if rest.starts_with(escape) {
                                // Skip the escape token and the escaped
                                // character, but never swallow a newline:
                                // the physical line still ends there.
                                let after = i + escape.len();
                                i = match text[after..].chars().next() {
                                    Some(c) if c != '\n' => after + c.len_utf8(),
                                    _ => after,
                                };
                                continue;
                            }
                        }
                    }

                    if rest.starts_with(delim.end) {
                        i += delim.end.len();
                        mode = Mode::Code;
                    } else {
                        i += ch.len_utf8();
                    }
                }

                Mode::BlockComment { delim, depth } => {
                    flags.saw_comment = true;

                    if delim.nested && rest.starts_with(delim.start) {
                        *depth += 1;
                        i += delim.start.len();
                    } else if rest.starts_with(delim.end) {
                        *depth -= 1;
                        i += delim.end.len();
                        if *depth == 0 {
                            mode = Mode::Code;
                        }
                    } else {
                        i += ch.len_utf8();
                    }
                }

                Mode::Code => match self.match_start_token(rest) {
                    Some((len, StartToken::Quote(delim, kind))) => {
                        let kind = if kind == QuoteKind::Doc && !self.config.count_doc_strings {
                            QuoteKind::Normal
                        } else {
                            kind
                        };
                        match kind {
                            QuoteKind::Doc => flags.saw_doc = true,
                            _ => flags.saw_code = true,
                        }
                        mode = Mode::InString { delim, kind };
                        i += len;
                    }
                    Some((len, StartToken::Block(delim))) => {
                        flags.saw_comment = true;
                        mode = Mode::BlockComment { delim, depth: 1 };
                        i += len;
                    }
                    Some((len, StartToken::Line { doc })) => {
                        if doc {
                            flags.saw_doc = true;
                        } else {
                            flags.saw_comment = true;
                        }
                        mode = Mode::LineComment;
                        i += len;
                    }
                    Some((len, StartToken::Embed(delim))) => {
                        flags.saw_code = true;
                        i = self.enter_embedded(
                            text,
                            i + len,
                            delim,
                            &mut counts,
                            &mut flags,
                            &mode,
                            &mut spans,
                        );
                    }
                    None => {
                        if !ch.is_whitespace() {
                            if self.language.literate {
                                flags.saw_comment = true;
                            } else {
                                flags.saw_code = true;
                            }
                        }
                        i += ch.len_utf8();
                    }
                },
            }
        }

        // A final line without a trailing newline still counts.
        if !text.is_empty() && !text.ends_with('\n') {
            self.finish_line(&mut counts, &mode, &mut flags);
        }

        (counts, spans)
    }

    /// Find the token starting at the current position, if any.
    ///
    /// The longest token literal wins. Equal lengths are resolved by
    /// category priority (quotes, block comments, line comments, embedded
    /// regions) and then by declaration order within the category.
    fn match_start_token(&self, rest: &str) -> Option<(usize, StartToken)> {
        let mut best: Option<(usize, StartToken)> = None;
        let mut consider = |len: usize, token: StartToken| {
            if best.map_or(true, |(b, _)| len > b) {
                best = Some((len, token));
            }
        };

        for delim in &self.language.doc_quotes {
            if rest.starts_with(delim.start) {
                consider(delim.start.len(), StartToken::Quote(*delim, QuoteKind::Doc));
            }
        }
        for delim in &self.language.verbatim_quotes {
            if rest.starts_with(delim.start) {
                consider(
                    delim.start.len(),
                    StartToken::Quote(*delim, QuoteKind::Verbatim),
                );
            }
        }
        for delim in &self.language.quotes {
            if rest.starts_with(delim.start) {
                consider(
                    delim.start.len(),
                    StartToken::Quote(*delim, QuoteKind::Normal),
                );
            }
        }
        for delim in &self.language.block_comments {
            if rest.starts_with(delim.start) {
                consider(delim.start.len(), StartToken::Block(*delim));
            }
        }
        for token in &self.language.doc_line_comments {
            if rest.starts_with(token) {
                consider(token.len(), StartToken::Line { doc: true });
            }
        }
        for token in &self.language.line_comments {
            if rest.starts_with(token) {
                consider(token.len(), StartToken::Line { doc: false });
            }
        }
        for delim in &self.language.embeddings {
            if rest.starts_with(delim.start) {
                consider(delim.start.len(), StartToken::Embed(*delim));
            }
        }

        best
    }

    /// Handle an embedded region whose start token ends at `after`.
    ///
    /// The content between the delimiter lines is recorded as a span for
    /// delegation and skipped by the host scan; the delimiter lines
    /// themselves count as host code. Regions that close on the same line,
    /// or never close, contribute nothing: the host keeps scanning after
    /// the start token.
    #[allow(clippy::too_many_arguments)]
    fn enter_embedded(
        &self,
        text: &str,
        after: usize,
        delim: EmbedDelim,
        counts: &mut Counts,
        flags: &mut LineFlags,
        mode: &Mode,
        spans: &mut Vec<EmbeddedSpan>,
    ) -> usize {
        let Some(end_offset) = text[after..].find(delim.end) else {
            return after;
        };
        let end_pos = after + end_offset;

        let Some(newline) = text[after..end_pos].find('\n') else {
            return after;
        };
        let content_begin = after + newline + 1;
        // Start of the line holding the end token. The newline found above
        // guarantees rfind succeeds.
        let content_end = match text[..end_pos].rfind('\n') {
            Some(pos) => pos + 1,
            None => return after,
        };

        if content_end > content_begin {
            spans.push(EmbeddedSpan {
                range: content_begin..content_end,
                language: delim.language,
            });
        }

        // Close out the opening-tag line as host code and resume the scan
        // at the line holding the end token.
        self.finish_line(counts, mode, flags);
        content_end
    }

    /// Classify the line that just ended and reset the per-line flags.
    fn finish_line(&self, counts: &mut Counts, mode: &Mode, flags: &mut LineFlags) {
        if flags.saw_code {
            counts.code += 1;
        } else if flags.saw_doc {
            counts.docs += 1;
        } else if flags.saw_comment {
            counts.comments += 1;
        } else {
            // A blank-looking line inside an open multi-line construct is a
            // structural continuation of that construct, not a blank line.
            match mode {
                Mode::BlockComment { .. } => counts.comments += 1,
                Mode::InString {
                    kind: QuoteKind::Doc,
                    ..
                } => counts.docs += 1,
                Mode::InString { .. } => counts.code += 1,
                _ => counts.blank += 1,
            }
        }
        *flags = LineFlags::default();
    }
}
