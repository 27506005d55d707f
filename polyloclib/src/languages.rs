//! The built-in language table.
//!
//! Pure data: every entry is a [`LanguageSpec`] built with the builder
//! methods, and the generic classifier does the rest. Adding a language
//! means adding an entry here; the registry rejects the table at startup
//! if an extension, filename or shebang is claimed twice.

use crate::language::{BlockDelim, EmbedDelim, LanguageSpec, QuoteDelim};

/// All built-in language definitions.
pub fn builtin_languages() -> Vec<LanguageSpec> {
    vec![
        LanguageSpec::new("Rust")
            .extensions(&["rs"])
            .line_comments(&["//"])
            .doc_line_comments(&["///", "//!"])
            .block_comments(&[BlockDelim::nesting("/*", "*/")])
            .quotes(&[QuoteDelim::escaped("\"", "\"")])
            .verbatim_quotes(&[
                QuoteDelim::raw("r#\"", "\"#"),
                QuoteDelim::raw("r\"", "\""),
            ]),
        LanguageSpec::new("C")
            .extensions(&["c", "h"])
            .line_comments(&["//"])
            .block_comments(&[BlockDelim::plain("/*", "*/")])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::escaped("'", "'")]),
        LanguageSpec::new("C++")
            .extensions(&["cc", "cpp", "cxx", "hh", "hpp", "hxx"])
            .line_comments(&["//"])
            .block_comments(&[BlockDelim::plain("/*", "*/")])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::escaped("'", "'")]),
        LanguageSpec::new("C#")
            .extensions(&["cs"])
            .line_comments(&["//"])
            .doc_line_comments(&["///"])
            .block_comments(&[BlockDelim::plain("/*", "*/")])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::escaped("'", "'")])
            .verbatim_quotes(&[QuoteDelim::raw("@\"", "\"")]),
        LanguageSpec::new("Java")
            .extensions(&["java"])
            .line_comments(&["//"])
            .block_comments(&[BlockDelim::plain("/*", "*/")])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::escaped("'", "'")])
            .verbatim_quotes(&[QuoteDelim::raw("\"\"\"", "\"\"\"")]),
        LanguageSpec::new("Go")
            .extensions(&["go"])
            .line_comments(&["//"])
            .block_comments(&[BlockDelim::plain("/*", "*/")])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::escaped("'", "'")])
            .verbatim_quotes(&[QuoteDelim::raw("`", "`")]),
        LanguageSpec::new("JavaScript")
            .extensions(&["js", "mjs", "cjs", "jsx"])
            .shebangs(&["node"])
            .line_comments(&["//"])
            .block_comments(&[BlockDelim::plain("/*", "*/")])
            .quotes(&[
                QuoteDelim::escaped("\"", "\""),
                QuoteDelim::escaped("'", "'"),
                QuoteDelim::escaped("`", "`"),
            ]),
        LanguageSpec::new("TypeScript")
            .extensions(&["ts", "tsx", "d.ts"])
            .line_comments(&["//"])
            .block_comments(&[BlockDelim::plain("/*", "*/")])
            .quotes(&[
                QuoteDelim::escaped("\"", "\""),
                QuoteDelim::escaped("'", "'"),
                QuoteDelim::escaped("`", "`"),
            ]),
        LanguageSpec::new("Python")
            .extensions(&["py", "pyw"])
            .shebangs(&["python", "python2", "python3"])
            .line_comments(&["#"])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::escaped("'", "'")])
            .doc_quotes(&[
                QuoteDelim::escaped("\"\"\"", "\"\"\""),
                QuoteDelim::escaped("'''", "'''"),
            ]),
        LanguageSpec::new("Ruby")
            .extensions(&["rb"])
            .filenames(&["rakefile", "gemfile"])
            .shebangs(&["ruby"])
            .line_comments(&["#"])
            .block_comments(&[BlockDelim::plain("=begin", "=end")])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::escaped("'", "'")]),
        LanguageSpec::new("Shell")
            .extensions(&["sh"])
            .shebangs(&["sh", "bash", "zsh", "ksh", "dash"])
            .line_comments(&["#"])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::raw("'", "'")]),
        LanguageSpec::new("Perl")
            .extensions(&["pl", "pm"])
            .shebangs(&["perl"])
            .line_comments(&["#"])
            .block_comments(&[BlockDelim::plain("=pod", "=cut")])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::escaped("'", "'")]),
        LanguageSpec::new("PHP")
            .extensions(&["php"])
            .shebangs(&["php"])
            .line_comments(&["//", "#"])
            .block_comments(&[BlockDelim::plain("/*", "*/")])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::escaped("'", "'")]),
        LanguageSpec::new("Lua")
            .extensions(&["lua"])
            .shebangs(&["lua"])
            .line_comments(&["--"])
            .block_comments(&[BlockDelim::plain("--[[", "]]")])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::escaped("'", "'")])
            .verbatim_quotes(&[QuoteDelim::raw("[[", "]]")]),
        LanguageSpec::new("Haskell")
            .extensions(&["hs"])
            .line_comments(&["--"])
            .block_comments(&[BlockDelim::nesting("{-", "-}")])
            .quotes(&[QuoteDelim::escaped("\"", "\"")]),
        LanguageSpec::new("OCaml")
            .extensions(&["ml", "mli"])
            .block_comments(&[BlockDelim::nesting("(*", "*)")])
            .quotes(&[QuoteDelim::escaped("\"", "\"")]),
        LanguageSpec::new("Swift")
            .extensions(&["swift"])
            .line_comments(&["//"])
            .doc_line_comments(&["///"])
            .block_comments(&[BlockDelim::nesting("/*", "*/")])
            .quotes(&[QuoteDelim::escaped("\"", "\"")]),
        LanguageSpec::new("Kotlin")
            .extensions(&["kt", "kts"])
            .line_comments(&["//"])
            .block_comments(&[BlockDelim::nesting("/*", "*/")])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::escaped("'", "'")])
            .verbatim_quotes(&[QuoteDelim::raw("\"\"\"", "\"\"\"")]),
        LanguageSpec::new("Scala")
            .extensions(&["scala", "sc"])
            .line_comments(&["//"])
            .block_comments(&[BlockDelim::nesting("/*", "*/")])
            .quotes(&[QuoteDelim::escaped("\"", "\"")])
            .verbatim_quotes(&[QuoteDelim::raw("\"\"\"", "\"\"\"")]),
        LanguageSpec::new("D")
            .extensions(&["d"])
            .line_comments(&["//"])
            .doc_line_comments(&["///"])
            .block_comments(&[
                BlockDelim::plain("/*", "*/"),
                BlockDelim::nesting("/+", "+/"),
            ])
            .quotes(&[QuoteDelim::escaped("\"", "\"")])
            .verbatim_quotes(&[QuoteDelim::raw("r\"", "\""), QuoteDelim::raw("`", "`")]),
        LanguageSpec::new("Dart")
            .extensions(&["dart"])
            .line_comments(&["//"])
            .doc_line_comments(&["///"])
            .block_comments(&[BlockDelim::nesting("/*", "*/")])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::escaped("'", "'")]),
        LanguageSpec::new("Elixir")
            .extensions(&["ex", "exs"])
            .shebangs(&["elixir"])
            .line_comments(&["#"])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::escaped("'", "'")])
            .doc_quotes(&[QuoteDelim::escaped("\"\"\"", "\"\"\"")]),
        LanguageSpec::new("Erlang")
            .extensions(&["erl", "hrl"])
            .line_comments(&["%"])
            .quotes(&[QuoteDelim::escaped("\"", "\"")]),
        LanguageSpec::new("R")
            .extensions(&["r"])
            .shebangs(&["rscript"])
            .line_comments(&["#"])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::escaped("'", "'")]),
        LanguageSpec::new("Zig")
            .extensions(&["zig"])
            .line_comments(&["//"])
            .doc_line_comments(&["///", "//!"])
            .quotes(&[QuoteDelim::escaped("\"", "\"")]),
        LanguageSpec::new("PowerShell")
            .extensions(&["ps1", "psm1", "psd1"])
            .line_comments(&["#"])
            .block_comments(&[BlockDelim::plain("<#", "#>")])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::raw("'", "'")]),
        LanguageSpec::new("HTML")
            .extensions(&["html", "htm"])
            .block_comments(&[BlockDelim::plain("<!--", "-->")])
            .quotes(&[QuoteDelim::raw("\"", "\""), QuoteDelim::raw("'", "'")])
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
        LanguageSpec::new("Vue")
            .extensions(&["vue"])
            .block_comments(&[BlockDelim::plain("<!--", "-->")])
            .quotes(&[QuoteDelim::raw("\"", "\""), QuoteDelim::raw("'", "'")])
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
        LanguageSpec::new("XML")
            .extensions(&["xml", "svg", "xsd", "xsl"])
            .block_comments(&[BlockDelim::plain("<!--", "-->")])
            .quotes(&[QuoteDelim::raw("\"", "\""), QuoteDelim::raw("'", "'")]),
        LanguageSpec::new("CSS")
            .extensions(&["css"])
            .block_comments(&[BlockDelim::plain("/*", "*/")])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::escaped("'", "'")]),
        LanguageSpec::new("Sass")
            .extensions(&["scss", "sass"])
            .line_comments(&["//"])
            .block_comments(&[BlockDelim::plain("/*", "*/")])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::escaped("'", "'")]),
        LanguageSpec::new("SQL")
            .extensions(&["sql"])
            .line_comments(&["--"])
            .block_comments(&[BlockDelim::plain("/*", "*/")])
            .quotes(&[QuoteDelim::escaped("'", "'")]),
        LanguageSpec::new("TOML")
            .extensions(&["toml"])
            .filenames(&["cargo.lock"])
            .line_comments(&["#"])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::raw("'", "'")])
            .verbatim_quotes(&[QuoteDelim::raw("'''", "'''")]),
        LanguageSpec::new("YAML")
            .extensions(&["yml", "yaml"])
            .line_comments(&["#"])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::raw("'", "'")]),
        LanguageSpec::new("JSON")
            .extensions(&["json"])
            .quotes(&[QuoteDelim::escaped("\"", "\"")]),
        LanguageSpec::new("Ini")
            .extensions(&["ini", "cfg"])
            .line_comments(&[";", "#"]),
        LanguageSpec::new("Makefile")
            .extensions(&["mk", "mak"])
            .filenames(&["makefile", "gnumakefile"])
            .line_comments(&["#"])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::escaped("'", "'")]),
        LanguageSpec::new("Dockerfile")
            .extensions(&["dockerfile"])
            .filenames(&["dockerfile", "containerfile"])
            .line_comments(&["#"])
            .quotes(&[QuoteDelim::escaped("\"", "\""), QuoteDelim::escaped("'", "'")]),
        LanguageSpec::new("CMake")
            .extensions(&["cmake"])
            .filenames(&["cmakelists.txt"])
            .line_comments(&["#"])
            .quotes(&[QuoteDelim::escaped("\"", "\"")]),
        LanguageSpec::new("Markdown")
            .extensions(&["md", "markdown"])
            .literate(),
        LanguageSpec::new("Plain Text")
            .extensions(&["txt"])
            .literate(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::LanguageRegistry;
    use std::path::Path;

    #[test]
    fn test_table_has_no_conflicts() {
        assert!(LanguageRegistry::new(builtin_languages()).is_ok());
    }

    #[test]
    fn test_common_extensions_resolve() {
        let registry = LanguageRegistry::builtin();
        for (path, expected) in [
            ("main.rs", "Rust"),
            ("app.py", "Python"),
            ("index.html", "HTML"),
            ("lib.d.ts", "TypeScript"),
            ("Makefile", "Makefile"),
            ("Dockerfile", "Dockerfile"),
            ("README.md", "Markdown"),
        ] {
            assert_eq!(
                registry.resolve(Path::new(path), None).map(|l| l.name),
                Some(expected),
                "path {path}"
            );
        }
    }

    #[test]
    fn test_embedded_languages_exist() {
        // Every embedding target must itself be a registered language so
        // delegation never falls back silently for built-in definitions.
        let registry = LanguageRegistry::builtin();
        for language in registry.languages() {
            for embed in &language.embeddings {
                assert!(
                    registry.find_by_name(embed.language).is_some(),
                    "{} embeds unknown language {}",
                    language.name,
                    embed.language
                );
            }
        }
    }
}
