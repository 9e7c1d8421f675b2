//! Best-effort wallet session cleanup ("hard disconnect")
//!
//! Removes the wallet connector's localStorage artifacts and WalletConnect
//! IndexedDB databases, then optionally reloads the page. Every step is
//! best-effort: failures are swallowed, never propagated.

use wasm_bindgen::prelude::*;

/// Exact localStorage keys owned by the wallet stack.
const SESSION_KEYS: &[&str] = &["wagmi.store"];

/// localStorage key prefixes owned by WalletConnect.
const SESSION_KEY_PREFIXES: &[&str] =
    &["wc@2:", "@walletconnect", "walletconnect", "WALLETCONNECT_"];

/// WalletConnect IndexedDB database names.
const SESSION_DATABASES: &[&str] = &["WALLETCONNECT_INDEXED_DB", "walletconnect"];

fn is_session_key(key: &str) -> bool {
    SESSION_KEYS.contains(&key) || SESSION_KEY_PREFIXES.iter().any(|p| key.starts_with(p))
}

/// Clear local wallet session artifacts, optionally reloading afterwards.
#[wasm_bindgen(js_name = clearWalletSession)]
pub fn clear_wallet_session(reload: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Ok(Some(storage)) = window.local_storage() {
        let mut doomed = Vec::new();
        if let Ok(len) = storage.length() {
            for i in 0..len {
                if let Ok(Some(key)) = storage.key(i) {
                    if is_session_key(&key) {
                        doomed.push(key);
                    }
                }
            }
        }
        for key in doomed {
            let _ = storage.remove_item(&key);
        }
    }

    if let Ok(Some(idb)) = window.indexed_db() {
        for name in SESSION_DATABASES {
            let _ = idb.delete_database(name);
        }
    }

    if reload {
        let _ = window.location().reload();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key_matching() {
        assert!(is_session_key("wagmi.store"));
        assert!(is_session_key("wc@2:core:0.3//keychain"));
        assert!(is_session_key("@walletconnect/universal-provider"));
        assert!(is_session_key("WALLETCONNECT_DEEPLINK_CHOICE"));
        assert!(!is_session_key("theme"));
        assert!(!is_session_key("wagmi"));
    }
}
