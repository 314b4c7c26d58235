pub const DEFAULT_BASE_URL: &str = "https://example.com";
pub const DEFAULT_FALLBACK_COUNTRY: &str = "India";

/// Where the site lives. Every absolute URL in structured data hangs off
/// `base_url`, which never ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteIdentity {
    base_url: String,
    fallback_country: String,
}

impl SiteIdentity {
    pub fn new(base_url: impl Into<String>, fallback_country: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            fallback_country: fallback_country.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn fallback_country(&self) -> &str {
        &self.fallback_country
    }

    /// `path` is site-relative and starts with `/`.
    pub fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for SiteIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_FALLBACK_COUNTRY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_dropped() {
        let site = SiteIdentity::new("https://jane.dev/", "Portugal");
        assert_eq!(site.base_url(), "https://jane.dev");
        assert_eq!(site.absolute("/blog/x"), "https://jane.dev/blog/x");
    }

    #[test]
    fn test_defaults() {
        let site = SiteIdentity::default();
        assert_eq!(site.base_url(), "https://example.com");
        assert_eq!(site.fallback_country(), "India");
    }
}
