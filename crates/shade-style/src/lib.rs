//! Build-time styling configuration: content scan paths, utility
//! declarations, class-candidate extraction, and utility CSS emission.

use globset::Glob;
use globset::GlobSet;
use globset::GlobSetBuilder;
use shade_core::ShadeError;
use shade_core::ShadeResult;

const SPIN_KEYFRAMES: &str = "@keyframes spin{to{transform:rotate(360deg)}}";

/// A named animation shorthand, emitted as `.animate-{name}{animation:{value}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationUtility {
    pub name: String,
    pub value: String,
}

impl AnimationUtility {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The slow-spin utility shipped with the default configuration.
    pub fn spin_slow() -> Self {
        Self::new("spin-slow", "spin 2s linear infinite")
    }

    fn class_name(&self) -> String {
        format!("animate-{}", self.name)
    }

    fn uses_spin_keyframes(&self) -> bool {
        self.value
            .split_whitespace()
            .next()
            .is_some_and(|keyframes| keyframes == "spin")
    }
}

/// Third-party styling plugin declaration. Purely declarative; carried so a
/// build front end can report what the configuration pulls in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylePlugin {
    Forms,
    Custom(String),
}

impl StylePlugin {
    pub fn name(&self) -> &str {
        match self {
            Self::Forms => "@tailwindcss/forms",
            Self::Custom(name) => name,
        }
    }
}

/// Build-time styling configuration: which document paths are scanned for
/// class usage, and which extra utilities and plugins are declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleBuildConfig {
    pub content: Vec<String>,
    pub animations: Vec<AnimationUtility>,
    pub plugins: Vec<StylePlugin>,
}

impl Default for StyleBuildConfig {
    fn default() -> Self {
        Self {
            content: vec!["./templates/**/*.{html,svg}".to_owned()],
            animations: vec![AnimationUtility::spin_slow()],
            plugins: vec![StylePlugin::Forms],
        }
    }
}

impl StyleBuildConfig {
    /// Compiles the content globs into a path matcher.
    pub fn content_matcher(&self) -> ShadeResult<ContentMatcher> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.content {
            let glob = Glob::new(normalize_pattern(pattern))
                .map_err(|error| ShadeError::bad_content_glob(pattern, error))?;
            builder.add(glob);
        }

        let set = builder
            .build()
            .map_err(|error| ShadeError::bad_content_glob("<combined>", error))?;
        Ok(ContentMatcher { set })
    }
}

/// Decides which files fall under the configured content scan.
#[derive(Debug, Clone)]
pub struct ContentMatcher {
    set: GlobSet,
}

impl ContentMatcher {
    pub fn matches(&self, path: &str) -> bool {
        self.set.is_match(normalize_pattern(path))
    }
}

fn normalize_pattern(pattern: &str) -> &str {
    pattern.strip_prefix("./").unwrap_or(pattern)
}

/// Extracts class candidates from `class` attributes in markup.
///
/// The attribute name is matched case-insensitively; values may be single- or
/// double-quoted or bare. An attribute with no value or an unterminated quote
/// is ignored. Candidates come back sorted and deduplicated.
pub fn extract_class_candidates(markup: &str) -> Vec<String> {
    let bytes = markup.as_bytes();
    let mut idx = 0_usize;
    let mut out = Vec::new();

    while idx < bytes.len() {
        if bytes[idx] != b'<' {
            idx = idx.saturating_add(1);
            continue;
        }

        if markup[idx..].starts_with("<!--") {
            idx = match markup[idx..].find("-->") {
                Some(offset) => idx.saturating_add(offset).saturating_add(3),
                None => bytes.len(),
            };
            continue;
        }

        let Some(close) = find_tag_close(bytes, idx) else {
            break;
        };
        collect_class_values(&markup[idx + 1..close], &mut out);
        idx = close.saturating_add(1);
    }

    out.sort();
    out.dedup();
    out
}

fn find_tag_close(bytes: &[u8], open: usize) -> Option<usize> {
    let mut idx = open.saturating_add(1);
    let mut in_single = false;
    let mut in_double = false;

    while idx < bytes.len() {
        match bytes[idx] {
            b'\'' if !in_double => in_single = !in_single,
            b'"' if !in_single => in_double = !in_double,
            b'>' if !in_single && !in_double => return Some(idx),
            _ => {}
        }
        idx = idx.saturating_add(1);
    }

    None
}

fn collect_class_values(tag: &str, out: &mut Vec<String>) {
    let bytes = tag.as_bytes();
    let mut idx = 0_usize;

    // Skip the tag name.
    while idx < bytes.len() && !bytes[idx].is_ascii_whitespace() {
        idx = idx.saturating_add(1);
    }

    while idx < bytes.len() {
        while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
            idx = idx.saturating_add(1);
        }

        let name_start = idx;
        while idx < bytes.len() && !bytes[idx].is_ascii_whitespace() && bytes[idx] != b'=' {
            idx = idx.saturating_add(1);
        }
        let name = &tag[name_start..idx];
        if name.is_empty() {
            idx = idx.saturating_add(1);
            continue;
        }

        while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
            idx = idx.saturating_add(1);
        }

        if idx >= bytes.len() || bytes[idx] != b'=' {
            // Valueless attribute; nothing to collect.
            continue;
        }
        idx = idx.saturating_add(1);

        while idx < bytes.len() && bytes[idx].is_ascii_whitespace() {
            idx = idx.saturating_add(1);
        }
        if idx >= bytes.len() {
            return;
        }

        let value = match bytes[idx] {
            quote @ (b'\'' | b'"') => {
                let start = idx.saturating_add(1);
                let Some(offset) = bytes[start..].iter().position(|byte| *byte == quote) else {
                    return;
                };
                idx = start.saturating_add(offset).saturating_add(1);
                &tag[start..start + offset]
            }
            _ => {
                let start = idx;
                while idx < bytes.len() && !bytes[idx].is_ascii_whitespace() {
                    idx = idx.saturating_add(1);
                }
                &tag[start..idx]
            }
        };

        if name.eq_ignore_ascii_case("class") {
            for class_name in value.split_whitespace() {
                out.push(class_name.to_owned());
            }
        }
    }
}

/// Utility rules compiled for one scan, in deterministic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtilitySheet {
    pub rules: Vec<String>,
}

impl UtilitySheet {
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn to_css(&self) -> String {
        self.rules.join("\n")
    }
}

/// Emits minimal utility CSS for the candidates the toolkit knows how to
/// satisfy; unknown candidates are skipped.
pub fn emit_utilities(config: &StyleBuildConfig, candidates: &[String]) -> UtilitySheet {
    let used = |class_name: &str| candidates.iter().any(|candidate| candidate == class_name);

    let mut rules = Vec::new();
    if used("hidden") {
        rules.push(".hidden{display:none}".to_owned());
    }
    if used("block") {
        rules.push(".block{display:block}".to_owned());
    }

    let animations: Vec<&AnimationUtility> = config
        .animations
        .iter()
        .filter(|animation| used(&animation.class_name()))
        .collect();

    if animations
        .iter()
        .any(|animation| animation.uses_spin_keyframes())
    {
        rules.push(SPIN_KEYFRAMES.to_owned());
    }

    for animation in animations {
        rules.push(format!(
            ".{}{{animation:{}}}",
            animation.class_name(),
            animation.value
        ));
    }

    UtilitySheet { rules }
}

#[cfg(test)]
mod tests {
    use super::AnimationUtility;
    use super::StyleBuildConfig;
    use super::StylePlugin;
    use super::emit_utilities;
    use super::extract_class_candidates;

    #[test]
    fn default_config_carries_observed_values() {
        let config = StyleBuildConfig::default();
        assert_eq!(config.content, ["./templates/**/*.{html,svg}"]);
        assert_eq!(config.animations, [AnimationUtility::spin_slow()]);
        assert_eq!(config.plugins, [StylePlugin::Forms]);
        assert_eq!(config.plugins[0].name(), "@tailwindcss/forms");
    }

    #[test]
    fn content_matcher_covers_nested_templates_only() {
        let config = StyleBuildConfig::default();
        let matcher = config.content_matcher();
        assert!(matcher.is_ok());
        let Ok(matcher) = matcher else {
            return;
        };

        assert!(matcher.matches("templates/index.html"));
        assert!(matcher.matches("./templates/quiz/detail.html"));
        assert!(matcher.matches("templates/icons/spinner.svg"));
        assert!(!matcher.matches("static/js/main.js"));
        assert!(!matcher.matches("templates/readme.md"));
    }

    #[test]
    fn bad_content_glob_surfaces_as_error() {
        let config = StyleBuildConfig {
            content: vec!["templates/[".to_owned()],
            ..StyleBuildConfig::default()
        };
        let error = config.content_matcher();
        assert!(error.is_err_and(|error| error.code == "style.content.bad_glob"));
    }

    #[test]
    fn extracts_quoted_bare_and_mixed_case_class_attributes() {
        let markup = r#"
            <div class="card hidden">
              <span CLASS='muted'>x</span>
              <svg class=block viewBox="0 0 16 16"></svg>
              <p data-class="not-a-class">y</p>
            </div>
        "#;
        let candidates = extract_class_candidates(markup);
        assert_eq!(candidates, ["block", "card", "hidden", "muted"]);
    }

    #[test]
    fn duplicate_candidates_collapse_and_comments_are_skipped() {
        let markup = r#"
            <!-- <div class="ghost"> -->
            <div class="hidden"></div>
            <div class="hidden"></div>
        "#;
        assert_eq!(extract_class_candidates(markup), ["hidden"]);
    }

    #[test]
    fn unterminated_quote_contributes_nothing() {
        assert!(extract_class_candidates(r#"<div class="broken"#).is_empty());
        assert!(extract_class_candidates("<div class=>").is_empty());
        assert!(extract_class_candidates("").is_empty());
    }

    #[test]
    fn emits_rules_for_known_candidates_in_stable_order() {
        let config = StyleBuildConfig::default();
        let candidates = [
            "animate-spin-slow".to_owned(),
            "block".to_owned(),
            "hidden".to_owned(),
            "unknown-utility".to_owned(),
        ];

        let sheet = emit_utilities(&config, &candidates);
        assert_eq!(
            sheet.rules,
            vec![
                ".hidden{display:none}".to_owned(),
                ".block{display:block}".to_owned(),
                "@keyframes spin{to{transform:rotate(360deg)}}".to_owned(),
                ".animate-spin-slow{animation:spin 2s linear infinite}".to_owned(),
            ]
        );
        assert_eq!(sheet.rule_count(), 4);
    }

    #[test]
    fn emits_nothing_without_candidates() {
        let sheet = emit_utilities(&StyleBuildConfig::default(), &[]);
        assert_eq!(sheet.rule_count(), 0);
        assert!(sheet.to_css().is_empty());
    }
}
