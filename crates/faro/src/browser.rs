//! Page handles for audit targets.
//!
//! The page is owned and lifecycle-managed by the calling context; the
//! pipeline only reads its current URL and passes the handle through to
//! the engine. With the `browser` feature enabled a real CDP-backed
//! handle is available; a plain stub exists for tests and
//! engine-less builds.

/// A live page under audit
pub trait Page: Send + Sync {
    /// URL the page is currently showing
    fn current_url(&self) -> &str;
}

/// Fixed-URL page stub
#[derive(Debug, Clone)]
pub struct StaticPage {
    url: String,
}

impl StaticPage {
    /// Create a stub page showing `url`
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Page for StaticPage {
    fn current_url(&self) -> &str {
        &self.url
    }
}

#[cfg(feature = "browser")]
mod cdp {
    use std::sync::Arc;

    use chromiumoxide::page::Page as CdpPage;
    use tokio::sync::Mutex;

    use super::Page;
    use crate::result::{FaroError, FaroResult};

    /// Page backed by a live CDP connection
    ///
    /// The URL is cached on navigation so `current_url` stays
    /// synchronous and lock-free.
    #[derive(Debug)]
    pub struct BrowserPage {
        url: String,
        inner: Arc<Mutex<CdpPage>>,
    }

    impl BrowserPage {
        /// Wrap an existing CDP page currently showing `url`
        #[must_use]
        pub fn new(page: CdpPage, url: impl Into<String>) -> Self {
            Self {
                url: url.into(),
                inner: Arc::new(Mutex::new(page)),
            }
        }

        /// Navigate to a URL
        ///
        /// # Errors
        ///
        /// Returns [`FaroError::NavigationError`] if navigation fails
        pub async fn goto(&mut self, url: &str) -> FaroResult<()> {
            {
                let page = self.inner.lock().await;
                page.goto(url)
                    .await
                    .map_err(|e| FaroError::NavigationError {
                        url: url.to_string(),
                        message: e.to_string(),
                    })?;
            }
            self.url = url.to_string();
            Ok(())
        }

        /// Shared CDP handle for engine bindings
        #[must_use]
        pub fn cdp(&self) -> Arc<Mutex<CdpPage>> {
            Arc::clone(&self.inner)
        }
    }

    impl Page for BrowserPage {
        fn current_url(&self) -> &str {
            &self.url
        }
    }
}

#[cfg(feature = "browser")]
pub use cdp::BrowserPage;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_page_url() {
        let page = StaticPage::new("https://example.com/pricing");
        assert_eq!(page.current_url(), "https://example.com/pricing");
    }

    #[test]
    fn test_static_page_is_object_safe() {
        let page = StaticPage::new("https://example.com/");
        let dynamic: &dyn Page = &page;
        assert_eq!(dynamic.current_url(), "https://example.com/");
    }
}
