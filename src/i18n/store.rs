use std::collections::HashMap;
use std::sync::RwLock;

use crate::api::ApiClient;

use super::{FALLBACK_LANG, Lang};

type Bundle = HashMap<String, String>;

/// Translation bundles keyed by language code. The base and fallback
/// languages are bundled into the binary and parsed at process start;
/// other codes can be fetched from the API during server rendering.
pub struct LocaleStore {
    bundles: RwLock<HashMap<String, Bundle>>,
}

impl LocaleStore {
    /// Build the store from the bundled resources.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        let mut bundles = HashMap::new();
        bundles.insert(
            Lang::En.code().to_string(),
            serde_json::from_str(include_str!("../../locales/en.json"))?,
        );
        bundles.insert(
            Lang::Pl.code().to_string(),
            serde_json::from_str(include_str!("../../locales/pl.json"))?,
        );
        Ok(Self { bundles: RwLock::new(bundles) })
    }

    pub fn contains(&self, code: &str) -> bool {
        match self.bundles.read() {
            Ok(bundles) => bundles.contains_key(code),
            Err(_) => false,
        }
    }

    pub fn insert(&self, code: &str, bundle: Bundle) {
        if let Ok(mut bundles) = self.bundles.write() {
            bundles.insert(code.to_string(), bundle);
        }
    }

    /// Look up a key for the given language, falling back to the fallback
    /// language and finally to the key itself so a missing translation
    /// never breaks a page.
    pub fn lookup(&self, lang: Lang, key: &str) -> String {
        let Ok(bundles) = self.bundles.read() else {
            return key.to_string();
        };
        bundles
            .get(lang.code())
            .and_then(|b| b.get(key))
            .or_else(|| bundles.get(FALLBACK_LANG.code()).and_then(|b| b.get(key)))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Fetch a bundle by code if it is missing from the process image.
    /// Fetch failures are logged and absorbed; lookups then run on the
    /// fallback chain.
    pub async fn ensure(&self, code: &str, api: &ApiClient) {
        if self.contains(code) {
            return;
        }
        match api.locale_bundle(code).await {
            Ok(bundle) => self.insert(code, bundle),
            Err(e) => log::warn!("Failed to fetch locale bundle {code}: {e}"),
        }
    }
}
