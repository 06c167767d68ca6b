use once_cell::sync::Lazy;
use regex::Regex;
use std::{str::FromStr, sync::Arc};

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::item::services::base36;

const TIMESTAMPED_BASE_MAX: usize = 50;

// Patterns are literals; a failure here is a programming error.
static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^[:word:]\s-]").expect("valid slug pattern"));
static SEPARATOR_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_-]+").expect("valid slug pattern"));

/// Lower-cases, drops everything but ASCII word characters, whitespace and
/// hyphens, then joins the remaining words with single hyphens.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let kept = NON_SLUG_CHARS.replace_all(lowered.trim(), "");
    let joined = SEPARATOR_RUNS.replace_all(&kept, "-");
    joined.trim_matches('-').to_string()
}

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

/// Caps the base at 50 characters and appends the current time in base 36,
/// so the first candidate is almost always free.
#[derive(Clone)]
pub struct TimestampedSlugGenerator {
    clock: Arc<dyn Clock>,
}

impl TimestampedSlugGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl SlugGenerator for TimestampedSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let base = slugify(input);
        let capped: String = base.chars().take(TIMESTAMPED_BASE_MAX).collect();
        let capped = capped.trim_end_matches('-');
        if capped.is_empty() {
            return String::new();
        }
        let millis = u64::try_from(self.clock.now().timestamp_millis()).unwrap_or_default();
        format!("{capped}-{}", base36(millis))
    }

    /// Requested slugs are kept as the caller wrote them, minus the cleanup.
    fn normalize(&self, input: &str) -> String {
        slugify(input)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlugStrategy {
    #[default]
    Plain,
    Timestamped,
}

impl FromStr for SlugStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "timestamped" => Ok(Self::Timestamped),
            other => Err(format!("unknown slug strategy `{other}`")),
        }
    }
}

pub fn slug_generator(strategy: SlugStrategy, clock: Arc<dyn Clock>) -> Arc<dyn SlugGenerator> {
    match strategy {
        SlugStrategy::Plain => Arc::new(DefaultSlugGenerator),
        SlugStrategy::Timestamped => Arc::new(TimestampedSlugGenerator::new(clock)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;

    struct Fixed(DateTime<Utc>);

    impl Clock for Fixed {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn basic_titles() {
        assert_eq!(slugify("My First Thought"), "my-first-thought");
        assert_eq!(slugify("  Hello,   World! "), "hello-world");
        assert_eq!(slugify("Rust & Go"), "rust-go");
        assert_eq!(slugify("snake_case--and  dashes"), "snake-case-and-dashes");
    }

    #[test]
    fn punctuation_inside_words_is_dropped() {
        assert_eq!(slugify("don't stop"), "dont-stop");
        assert_eq!(slugify("v1.2.3"), "v123");
    }

    #[test]
    fn non_ascii_letters_are_removed() {
        assert_eq!(slugify("Café Crème"), "caf-crme");
        assert_eq!(slugify("日本語"), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn leading_and_trailing_separators_are_trimmed() {
        assert_eq!(slugify("--already-slugged--"), "already-slugged");
        assert_eq!(slugify("_x_"), "x");
    }

    #[test]
    fn timestamped_caps_and_suffixes() {
        let clock: Arc<dyn Clock> =
            Arc::new(Fixed(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
        let generator = TimestampedSlugGenerator::new(clock);
        assert_eq!(generator.slugify("Cool Link"), "cool-link-lqu5m2o0");

        let long = "word ".repeat(30);
        let slug = generator.slugify(&long);
        let base = slug.strip_suffix("-lqu5m2o0").unwrap();
        assert!(base.len() <= TIMESTAMPED_BASE_MAX);
        assert!(!base.ends_with('-'));
        assert_eq!(generator.slugify("???"), "");
    }

    #[test]
    fn timestamped_normalize_never_adds_a_suffix() {
        let clock: Arc<dyn Clock> =
            Arc::new(Fixed(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
        let generator = TimestampedSlugGenerator::new(clock);
        assert_eq!(generator.normalize("cool-link-lqu5m2o0"), "cool-link-lqu5m2o0");
        assert_eq!(generator.normalize(" My Slug "), "my-slug");
        assert_eq!(DefaultSlugGenerator.normalize(" My Slug "), "my-slug");
    }

    proptest! {
        #[test]
        fn slug_output_is_always_url_safe(input in "\\PC{0,64}") {
            let slug = slugify(&input);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }

        #[test]
        fn slugify_is_idempotent(input in "[ a-zA-Z0-9_.!-]{0,40}") {
            let once = slugify(&input);
            prop_assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn strategy_parses() {
        assert_eq!("plain".parse::<SlugStrategy>(), Ok(SlugStrategy::Plain));
        assert_eq!(
            " Timestamped ".parse::<SlugStrategy>(),
            Ok(SlugStrategy::Timestamped)
        );
        assert!("random".parse::<SlugStrategy>().is_err());
    }
}
