use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

const CACHE_PARAM: &str = "picCache";

/// Recency tag appended to picture URLs so the webview refetches them
/// after a picture is replaced.
#[derive(Debug)]
pub struct PicCache {
    token: AtomicI64,
}

impl PicCache {
    pub fn new() -> Self {
        Self::with_token(now_millis())
    }

    pub fn with_token(token: i64) -> Self {
        Self {
            token: AtomicI64::new(token),
        }
    }

    pub fn token(&self) -> i64 {
        self.token.load(Ordering::Relaxed)
    }

    /// Moves the token to the current time.
    pub fn refresh(&self) {
        let token = now_millis();
        self.token.store(token, Ordering::Relaxed);
        debug!(token, "Picture cache token refreshed");
    }

    pub fn wrap(&self, url: &str) -> String {
        format!("{}?{}={}", url, CACHE_PARAM, self.token())
    }
}

impl Default for PicCache {
    fn default() -> Self {
        Self::new()
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// Shared by callers that have no injected cache
static GLOBAL_PIC_CACHE: Lazy<PicCache> = Lazy::new(PicCache::new);

pub fn pic_cache_refresh() {
    GLOBAL_PIC_CACHE.refresh();
}

pub fn pic_cache_wrapper(url: &str) -> String {
    GLOBAL_PIC_CACHE.wrap(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_wrap_appends_token() {
        let cache = PicCache::with_token(1700000000000);
        assert_eq!(
            cache.wrap("http://x/img.png"),
            "http://x/img.png?picCache=1700000000000"
        );
    }

    #[test]
    fn test_new_token_is_current_time() {
        let before = now_millis();
        let cache = PicCache::new();
        assert!(cache.token() >= before);
        assert!(cache.token() <= now_millis());
    }

    #[test]
    fn test_refresh_changes_token() {
        let cache = PicCache::with_token(0);
        let first = cache.wrap("http://x/img.png");

        cache.refresh();
        let second = cache.wrap("http://x/img.png");

        assert_ne!(first, second);
        assert!(second.starts_with("http://x/img.png?picCache="));
        assert!(cache.token() > 0);
    }

    #[test]
    fn test_global_cache_refresh() {
        let url = "http://x/img.png";
        let first = pic_cache_wrapper(url);
        assert!(first.starts_with("http://x/img.png?picCache="));

        sleep(Duration::from_millis(5));
        pic_cache_refresh();
        let second = pic_cache_wrapper(url);

        assert!(second.starts_with("http://x/img.png?picCache="));
        assert_ne!(first, second);
    }

    #[test]
    fn test_token_parses_back() {
        let cache = PicCache::new();
        let wrapped = cache.wrap("a.png");
        let token: i64 = wrapped.rsplit('=').next().unwrap().parse().unwrap();
        assert_eq!(token, cache.token());
    }
}
