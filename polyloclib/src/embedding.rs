//! Embedded-language delegation.
//!
//! The classifier reports embedded regions as byte spans; this module
//! recursively classifies each span under its own language and merges the
//! results into a per-language [`FileCount`]. Because spans cover whole
//! lines and exclude the delimiter lines, every physical line of the host
//! text is attributed to exactly one language.

use crate::classifier::LineClassifier;
use crate::counts::FileCount;
use crate::language::LanguageSpec;
use crate::options::CountConfig;
use crate::registry::LanguageRegistry;

/// Classify `text` under `language`, delegating embedded regions.
///
/// A region whose language is not in the registry is classified with the
/// host grammar instead of being skipped, so line totals stay intact.
/// Recursion bottoms out because each span is strictly smaller than the
/// text it was found in.
pub fn count_text(
    registry: &LanguageRegistry,
    language: &LanguageSpec,
    text: &str,
    config: CountConfig,
) -> FileCount {
    let (counts, spans) = LineClassifier::new(language, config).classify(text);
    let mut file = FileCount::single(language.name, counts);

    for span in spans {
        let embedded = registry.find_by_name(span.language).unwrap_or(language);
        let sub = count_text(registry, embedded, &text[span.range], config);
        file.merge(sub);
    }

    file
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counts::Counts;
    use crate::language::{BlockDelim, EmbedDelim, QuoteDelim};

    fn registry() -> LanguageRegistry {
        LanguageRegistry::new(vec![
            LanguageSpec::new("HTML")
                .extensions(&["html"])
                .block_comments(&[BlockDelim::plain("<!--", "-->")])
                .embeddings(&[
                    EmbedDelim {
                        start: "<script>",
                        end: "</script>",
                        language: "JavaScript",
                    },
                    EmbedDelim {
                        start: "<style>",
                        end: "</style>",
                        language: "CSS",
                    },
                ]),
            LanguageSpec::new("JavaScript")
                .extensions(&["js"])
                .line_comments(&["//"])
                .quotes(&[QuoteDelim::escaped("\"", "\"")]),
            LanguageSpec::new("CSS")
                .extensions(&["css"])
                .block_comments(&[BlockDelim::plain("/*", "*/")]),
        ])
        .unwrap()
    }

    fn count(registry: &LanguageRegistry, language: &str, text: &str) -> FileCount {
        let spec = registry.find_by_name(language).unwrap();
        count_text(registry, spec, text, CountConfig::default())
    }

    #[test]
    fn test_plain_file_single_language() {
        let registry = registry();
        let file = count(&registry, "JavaScript", "var x = 1;\n// note\n");

        assert_eq!(file.languages.len(), 1);
        assert_eq!(
            file.languages["JavaScript"],
            Counts {
                code: 1,
                comments: 1,
                ..Counts::default()
            }
        );
    }

    #[test]
    fn test_embedded_script_delegated() {
        let registry = registry();
        let text = "<body>\n<script>\nvar x = 1;\n// comment\n\n</script>\n</body>\n";
        let file = count(&registry, "HTML", text);

        assert_eq!(file.languages["HTML"].code, 4);
        assert_eq!(file.languages["JavaScript"].code, 1);
        assert_eq!(file.languages["JavaScript"].comments, 1);
        assert_eq!(file.languages["JavaScript"].blank, 1);
        assert_eq!(file.total_lines(), text.lines().count() as u64);
    }

    #[test]
    fn test_multiple_regions_accumulate() {
        let registry = registry();
        let text = "<script>\nvar a;\n</script>\n<script>\nvar b;\nvar c;\n</script>\n";
        let file = count(&registry, "HTML", text);

        assert_eq!(file.languages["JavaScript"].code, 3);
        assert_eq!(file.languages["HTML"].code, 4);
    }

    #[test]
    fn test_distinct_embedded_languages() {
        let registry = registry();
        let text = "<script>\nvar a;\n</script>\n<style>\nbody {}\n</style>\n";
        let file = count(&registry, "HTML", text);

        assert_eq!(file.languages.len(), 3);
        assert_eq!(file.languages["JavaScript"].code, 1);
        assert_eq!(file.languages["CSS"].code, 1);
        assert_eq!(file.total_lines(), 6);
    }

    #[test]
    fn test_unknown_embedded_language_falls_back_to_host() {
        let registry = LanguageRegistry::new(vec![LanguageSpec::new("Host")
            .extensions(&["host"])
            .line_comments(&["#"])
            .embeddings(&[EmbedDelim {
                start: "<data>",
                end: "</data>",
                language: "Nonexistent",
            }])])
        .unwrap();

        let text = "<data>\nvalue\n# note\n</data>\n";
        let spec = registry.find_by_name("Host").unwrap();
        let file = count_text(&registry, spec, text, CountConfig::default());

        // Content lines are classified with the host grammar under the
        // host name, so no line disappears.
        assert_eq!(file.languages.len(), 1);
        assert_eq!(file.total_lines(), 4);
        assert_eq!(file.languages["Host"].comments, 1);
    }
}
