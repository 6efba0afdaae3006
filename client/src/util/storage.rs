//! `localStorage`-backed token slot.
//!
//! Reads and writes the bearer token under the well-known `token` key so a
//! page reload restores the session. Requires a browser environment; native
//! builds see an always-empty slot.

use agentdesk::TokenStorage;
#[cfg(feature = "csr")]
use agentdesk::TOKEN_KEY;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(TOKEN_KEY)
                .ok()
                .flatten()
                .filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let saved = local_storage().is_some_and(|storage| storage.set_item(TOKEN_KEY, token).is_ok());
            if !saved {
                log::warn!("failed to persist session token to localStorage");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}
