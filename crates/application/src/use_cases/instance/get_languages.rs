use driftwood_domain::{Language, ISO_639_1_LANGUAGES};

/// Languages a post can be tagged with. Backed by a static table, so there
/// is nothing to cache.
#[derive(Default)]
pub struct GetLanguagesUseCase;

impl GetLanguagesUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self) -> &'static [Language] {
        ISO_639_1_LANGUAGES
    }
}
