//! Site content, embedded at build time and shared through context.

use std::sync::Arc;

use folio_domain::content::Portfolio;
use folio_domain::error::FolioError;
use leptos::prelude::*;

const CONTENT: &str = include_str!("../../../../content/portfolio.toml");

/// Decode and validate the embedded content.
///
/// # Errors
///
/// Returns the decode or validation error for broken content.
pub fn load() -> Result<Portfolio, FolioError> {
    Portfolio::from_toml_str(CONTENT)
}

pub fn provide_portfolio(portfolio: Portfolio) {
    provide_context(Arc::new(portfolio));
}

/// Content installed by [`provide_portfolio`].
pub fn use_portfolio() -> Option<Arc<Portfolio>> {
    use_context::<Arc<Portfolio>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_load_embedded_content() {
        let portfolio = load().unwrap();
        assert!(!portfolio.experiences.is_empty());
        assert!(!portfolio.projects.is_empty());
    }
}
