//! Cookie-backed token storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access/refresh pair issued at login lives in two site-wide cookies. The
//! route gate and the header read the access cookie on every render, so its
//! absence is the only "logged out" signal used for routing.
//!
//! DESIGN
//! ======
//! Components depend on the `TokenStore` trait, never on `document.cookie`
//! directly. `BrowserCookies` talks to the real document under `csr`;
//! `MemoryCookies` emulates a cookie jar (including expiry) for tests. Both
//! write and read the same header strings through the helpers below.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

pub const ACCESS_TOKEN: &str = "access_token";
pub const REFRESH_TOKEN: &str = "refresh_token";
pub const DEFAULT_TTL_DAYS: i64 = 7;

const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
const EPOCH_EXPIRES: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Named string storage with per-entry expiry.
pub trait TokenStore: Send + Sync {
    /// Write `name=value` expiring `ttl_days` from now. Overwrites silently.
    fn set(&self, name: &str, value: &str, ttl_days: i64);
    /// First entry whose name matches exactly.
    fn get(&self, name: &str) -> Option<String>;
    /// Overwrite the entry with an already-expired timestamp.
    fn delete(&self, name: &str);
}

pub type SharedTokenStore = Arc<dyn TokenStore>;

/// Persist both halves of a freshly issued token pair with the default lifetime.
pub fn save_token_pair(store: &dyn TokenStore, access: &str, refresh: &str) {
    store.set(ACCESS_TOKEN, access, DEFAULT_TTL_DAYS);
    store.set(REFRESH_TOKEN, refresh, DEFAULT_TTL_DAYS);
}

pub fn clear_token_pair(store: &dyn TokenStore) {
    store.delete(ACCESS_TOKEN);
    store.delete(REFRESH_TOKEN);
}

/// Whether a non-empty access token cookie exists. The value is not inspected.
pub fn has_access_token(store: &dyn TokenStore) -> bool {
    store
        .get(ACCESS_TOKEN)
        .is_some_and(|value| !value.is_empty())
}

/// Cookie date in the `Thu, 01 Jan 1970 00:00:00 GMT` form.
pub fn format_expires(at: DateTime<Utc>) -> String {
    at.format(EXPIRES_FORMAT).to_string()
}

pub fn parse_expires(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw.trim(), EXPIRES_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Absolute expiry `ttl_days` after `now`, saturating on overflow.
pub fn expiry_after(now: DateTime<Utc>, ttl_days: i64) -> DateTime<Utc> {
    TimeDelta::try_days(ttl_days)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

pub fn set_cookie_header(name: &str, value: &str, expires: DateTime<Utc>) -> String {
    let expires = format_expires(expires);
    format!("{name}={value}; expires={expires}; path=/")
}

pub fn expired_cookie_header(name: &str) -> String {
    format!("{name}=; expires={EPOCH_EXPIRES}; path=/")
}

/// Scan a `document.cookie` style string (`a=1; b=2`) for `name`.
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|entry| entry.strip_prefix(prefix.as_str()))
        .map(str::to_owned)
}

/// Cookie storage of the current browser document.
///
/// Outside `csr` builds there is no document: reads return `None` and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

#[cfg(feature = "csr")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

impl BrowserCookies {
    fn write(header: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(doc) = html_document() else {
                log::warn!("cookie write skipped: no document");
                return;
            };
            if doc.set_cookie(header).is_err() {
                log::warn!("cookie write rejected by browser");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = header;
        }
    }

    fn read() -> String {
        #[cfg(feature = "csr")]
        {
            html_document()
                .and_then(|doc| doc.cookie().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "csr"))]
        {
            String::new()
        }
    }
}

impl TokenStore for BrowserCookies {
    fn set(&self, name: &str, value: &str, ttl_days: i64) {
        let expires = expiry_after(Utc::now(), ttl_days);
        Self::write(&set_cookie_header(name, value, expires));
    }

    fn get(&self, name: &str) -> Option<String> {
        find_cookie(&Self::read(), name)
    }

    fn delete(&self, name: &str) {
        Self::write(&expired_cookie_header(name));
    }
}

#[derive(Debug)]
struct Jar {
    now: DateTime<Utc>,
    /// Insertion-ordered `(name, value, expires)`; `None` is a session cookie.
    entries: Vec<(String, String, Option<DateTime<Utc>>)>,
    headers: Vec<String>,
}

impl Jar {
    fn live(&self) -> impl Iterator<Item = &(String, String, Option<DateTime<Utc>>)> {
        self.entries
            .iter()
            .filter(|(_, _, expires)| expires.is_none_or(|at| at > self.now))
    }

    fn accept(&mut self, header: &str) {
        self.headers.push(header.to_owned());

        let mut parts = header.split(';');
        let Some((name, value)) = parts.next().and_then(|pair| pair.split_once('=')) else {
            return;
        };
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let expires = parts
            .filter_map(|attr| attr.trim().split_once('='))
            .find(|(key, _)| key.eq_ignore_ascii_case("expires"))
            .and_then(|(_, raw)| parse_expires(raw));

        let existing = self.entries.iter().position(|(n, _, _)| n == name);
        if expires.is_some_and(|at| at <= self.now) {
            if let Some(idx) = existing {
                self.entries.remove(idx);
            }
            return;
        }
        match existing {
            Some(idx) => {
                value.trim().clone_into(&mut self.entries[idx].1);
                self.entries[idx].2 = expires;
            }
            None => {
                let entry = (name.to_owned(), value.trim().to_owned(), expires);
                self.entries.push(entry);
            }
        }
    }
}

/// In-memory cookie jar with a controllable clock.
#[derive(Debug)]
pub struct MemoryCookies {
    jar: Mutex<Jar>,
}

impl Default for MemoryCookies {
    fn default() -> Self {
        Self::at(Utc::now())
    }
}

impl MemoryCookies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jar whose clock starts at `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        let jar = Mutex::new(Jar {
            now,
            entries: Vec::new(),
            headers: Vec::new(),
        });
        Self { jar }
    }

    fn lock(&self) -> MutexGuard<'_, Jar> {
        self.jar.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a raw `Set-Cookie` style header, as `document.cookie = …` would.
    pub fn accept(&self, header: &str) {
        self.lock().accept(header);
    }

    /// Move the clock forward; entries past their expiry disappear from reads.
    pub fn advance(&self, by: TimeDelta) {
        let mut jar = self.lock();
        let now = jar.now.checked_add_signed(by);
        jar.now = now.unwrap_or(DateTime::<Utc>::MAX_UTC);
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.lock().now
    }

    /// Live entries rendered like `document.cookie`.
    pub fn cookie_string(&self) -> String {
        let jar = self.lock();
        jar.live()
            .map(|(name, value, _)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Every header written so far, oldest first.
    pub fn headers(&self) -> Vec<String> {
        self.lock().headers.clone()
    }
}

impl TokenStore for MemoryCookies {
    fn set(&self, name: &str, value: &str, ttl_days: i64) {
        let mut jar = self.lock();
        let header = set_cookie_header(name, value, expiry_after(jar.now, ttl_days));
        jar.accept(&header);
    }

    fn get(&self, name: &str) -> Option<String> {
        find_cookie(&self.cookie_string(), name)
    }

    fn delete(&self, name: &str) {
        self.accept(&expired_cookie_header(name));
    }
}
