use driftwood_domain::Language;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LanguageResponse {
    pub code: &'static str,
    pub name: &'static str,
}

impl From<&Language> for LanguageResponse {
    fn from(language: &Language) -> Self {
        Self {
            code: language.code,
            name: language.name,
        }
    }
}
