//! Language registry and file-to-language resolution.
//!
//! The registry owns the language definitions and builds lookup maps for
//! the three identification strategies: exact filename, shebang line and
//! file extension. Construction validates that no two languages claim the
//! same key, so resolution is unambiguous by the time any file is counted.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::PolylocError;
use crate::language::LanguageSpec;
use crate::languages::builtin_languages;
use crate::Result;

static BUILTIN: OnceLock<LanguageRegistry> = OnceLock::new();

/// Immutable collection of language definitions with lookup maps.
///
/// Lookup keys are stored lowercase; matching is case-insensitive.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<LanguageSpec>,
    by_name: HashMap<String, usize>,
    by_filename: HashMap<String, usize>,
    by_extension: HashMap<String, usize>,
    by_shebang: HashMap<String, usize>,
}

impl LanguageRegistry {
    /// Build a registry from a set of language definitions.
    ///
    /// Fails if two definitions share a name or claim the same filename,
    /// extension or shebang interpreter. Conflicts are a definition bug,
    /// so they surface at construction rather than during a count.
    pub fn new(languages: Vec<LanguageSpec>) -> Result<Self> {
        let mut by_name: HashMap<String, usize> = HashMap::new();
        let mut by_filename: HashMap<String, usize> = HashMap::new();
        let mut by_extension: HashMap<String, usize> = HashMap::new();
        let mut by_shebang: HashMap<String, usize> = HashMap::new();

        for (index, language) in languages.iter().enumerate() {
            if by_name.contains_key(&language.name.to_lowercase()) {
                return Err(PolylocError::DuplicateLanguage(language.name.to_string()));
            }
            by_name.insert(language.name.to_lowercase(), index);

            for filename in &language.filenames {
                let key = filename.to_lowercase();
                if let Some(&prev) = by_filename.get(&key) {
                    return Err(PolylocError::ConflictingFilename {
                        filename: key,
                        first: languages[prev].name.to_string(),
                        second: language.name.to_string(),
                    });
                }
                by_filename.insert(key, index);
            }

            for extension in &language.extensions {
                let key = extension.to_lowercase();
                if let Some(&prev) = by_extension.get(&key) {
                    return Err(PolylocError::ConflictingExtension {
                        extension: key,
                        first: languages[prev].name.to_string(),
                        second: language.name.to_string(),
                    });
                }
                by_extension.insert(key, index);
            }

            for interpreter in &language.shebangs {
                let key = interpreter.to_lowercase();
                if let Some(&prev) = by_shebang.get(&key) {
                    return Err(PolylocError::ConflictingShebang {
                        interpreter: key,
                        first: languages[prev].name.to_string(),
                        second: language.name.to_string(),
                    });
                }
                by_shebang.insert(key, index);
            }
        }

        Ok(Self {
            languages,
            by_name,
            by_filename,
            by_extension,
            by_shebang,
        })
    }

    /// The process-wide registry of built-in languages.
    ///
    /// Built on first use. The built-in table is validated by tests, so a
    /// conflict here is unreachable in a released build.
    pub fn builtin() -> &'static LanguageRegistry {
        BUILTIN.get_or_init(|| {
            LanguageRegistry::new(builtin_languages())
                .unwrap_or_else(|e| panic!("builtin language table is inconsistent: {e}"))
        })
    }

    /// All registered languages, in registration order.
    pub fn languages(&self) -> &[LanguageSpec] {
        &self.languages
    }

    /// Look up a language by its canonical name, case-insensitively.
    pub fn find_by_name(&self, name: &str) -> Option<&LanguageSpec> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&i| &self.languages[i])
    }

    /// Resolve the language for a file.
    ///
    /// Strategies are tried in order of specificity: exact filename first,
    /// then the shebang of the first line, then the longest matching
    /// extension (`d.ts` wins over `ts`). Returns `None` when nothing
    /// matches; such files are reported as unrecognized, never guessed.
    pub fn resolve(&self, path: &Path, first_line: Option<&str>) -> Option<&LanguageSpec> {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            let lower = name.to_lowercase();

            if let Some(&i) = self.by_filename.get(&lower) {
                return Some(&self.languages[i]);
            }

            if let Some(line) = first_line {
                if let Some(language) = self.resolve_shebang(line) {
                    return Some(language);
                }
            }

            // Longest extension wins: try every dot-separated suffix of the
            // filename, most specific first.
            let mut rest = lower.as_str();
            while let Some(dot) = rest.find('.') {
                rest = &rest[dot + 1..];
                if let Some(&i) = self.by_extension.get(rest) {
                    return Some(&self.languages[i]);
                }
            }
        }

        None
    }

    /// Resolve a language from a shebang line, if it is one.
    ///
    /// Handles both direct interpreters (`#!/bin/bash`) and the `env` form
    /// (`#!/usr/bin/env python3`).
    fn resolve_shebang(&self, first_line: &str) -> Option<&LanguageSpec> {
        let rest = first_line.strip_prefix("#!")?;
        let mut words = rest.split_whitespace();
        let program = words.next()?;
        let basename = program.rsplit('/').next()?;

        let interpreter = if basename == "env" {
            words.next()?
        } else {
            basename
        };

        self.by_shebang
            .get(&interpreter.to_lowercase())
            .map(|&i| &self.languages[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageSpec;
    use std::path::PathBuf;

    fn registry() -> LanguageRegistry {
        LanguageRegistry::new(vec![
            LanguageSpec::new("Rust").extensions(&["rs"]),
            LanguageSpec::new("TypeScript").extensions(&["ts"]),
            LanguageSpec::new("TypeScript Typings").extensions(&["d.ts"]),
            LanguageSpec::new("Makefile")
                .extensions(&["mk"])
                .filenames(&["makefile", "gnumakefile"]),
            LanguageSpec::new("Python")
                .extensions(&["py"])
                .shebangs(&["python", "python3"]),
            LanguageSpec::new("Shell")
                .extensions(&["sh"])
                .shebangs(&["sh", "bash"]),
        ])
        .unwrap()
    }

    fn resolve<'a>(
        registry: &'a LanguageRegistry,
        path: &str,
        first_line: Option<&str>,
    ) -> Option<&'a str> {
        registry
            .resolve(&PathBuf::from(path), first_line)
            .map(|l| l.name)
    }

    #[test]
    fn test_resolve_by_extension() {
        let registry = registry();
        assert_eq!(resolve(&registry, "src/main.rs", None), Some("Rust"));
    }

    #[test]
    fn test_extension_case_insensitive() {
        let registry = registry();
        assert_eq!(resolve(&registry, "MAIN.RS", None), Some("Rust"));
    }

    #[test]
    fn test_longest_extension_wins() {
        let registry = registry();
        assert_eq!(
            resolve(&registry, "types.d.ts", None),
            Some("TypeScript Typings")
        );
        assert_eq!(resolve(&registry, "app.ts", None), Some("TypeScript"));
    }

    #[test]
    fn test_filename_beats_extension() {
        let registry = registry();
        assert_eq!(resolve(&registry, "Makefile", None), Some("Makefile"));
        assert_eq!(resolve(&registry, "GNUmakefile", None), Some("Makefile"));
    }

    #[test]
    fn test_shebang_direct() {
        let registry = registry();
        assert_eq!(
            resolve(&registry, "install", Some("#!/bin/bash")),
            Some("Shell")
        );
    }

    #[test]
    fn test_shebang_env_form() {
        let registry = registry();
        assert_eq!(
            resolve(&registry, "run", Some("#!/usr/bin/env python3")),
            Some("Python")
        );
    }

    #[test]
    fn test_shebang_beats_extension() {
        // Resolution order: filename, then shebang, then extension.
        let registry = registry();
        assert_eq!(
            resolve(&registry, "script.ts", Some("#!/usr/bin/env bash")),
            Some("Shell")
        );
    }

    #[test]
    fn test_non_shebang_first_line_ignored() {
        let registry = registry();
        assert_eq!(resolve(&registry, "main.rs", Some("fn main() {}")), Some("Rust"));
    }

    #[test]
    fn test_unrecognized() {
        let registry = registry();
        assert_eq!(resolve(&registry, "data.xyz", None), None);
        assert_eq!(resolve(&registry, "LICENSE", None), None);
    }

    #[test]
    fn test_find_by_name() {
        let registry = registry();
        assert_eq!(registry.find_by_name("rust").map(|l| l.name), Some("Rust"));
        assert!(registry.find_by_name("COBOL").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = LanguageRegistry::new(vec![
            LanguageSpec::new("Rust").extensions(&["rs"]),
            LanguageSpec::new("Rust").extensions(&["rust"]),
        ]);
        assert!(matches!(result, Err(PolylocError::DuplicateLanguage(_))));
    }

    #[test]
    fn test_conflicting_extension_rejected() {
        let result = LanguageRegistry::new(vec![
            LanguageSpec::new("A").extensions(&["x"]),
            LanguageSpec::new("B").extensions(&["x"]),
        ]);
        assert!(matches!(
            result,
            Err(PolylocError::ConflictingExtension { .. })
        ));
    }

    #[test]
    fn test_conflicting_shebang_rejected() {
        let result = LanguageRegistry::new(vec![
            LanguageSpec::new("A").shebangs(&["sh"]),
            LanguageSpec::new("B").shebangs(&["sh"]),
        ]);
        assert!(matches!(
            result,
            Err(PolylocError::ConflictingShebang { .. })
        ));
    }

    #[test]
    fn test_builtin_registry_is_consistent() {
        // Construction panics on conflicts, so reaching here proves the
        // built-in table is valid.
        let registry = LanguageRegistry::builtin();
        assert!(registry.languages().len() > 20);
    }
}
