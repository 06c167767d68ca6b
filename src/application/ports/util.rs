// src/application/ports/util.rs

/// Turns free text into a URL-safe slug candidate. Must be pure apart from
/// any injected clock, and may return an empty string.
pub trait SlugGenerator: Send + Sync {
    /// Candidate for a brand-new slug, e.g. one derived from a title.
    fn slugify(&self, input: &str) -> String;

    /// Clean up a slug the caller asked for. Never decorates it, so sending
    /// back an existing slug yields the same slug.
    fn normalize(&self, input: &str) -> String {
        self.slugify(input)
    }
}
