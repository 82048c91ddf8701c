//! Label bundle for `navbar-ui`.
//!
//! The visible navbar strings live in an embedded Fluent file rather than in
//! the markup:
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/navbar-ui.ftl   (fallback, the only shipped locale)
//! ```
//!
//! Only the fallback bundle is ever selected, so lookups return the same text
//! on every platform regardless of the OS or browser locale.
//!
//! Usage in a component:
//! ```ignore
//! crate::i18n::init(); // idempotent
//! let home = crate::t!("nav-home");
//! ```
use std::sync::Once;

use dioxus::logger::tracing;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Label lookup through the shared loader.
///
/// Keys are checked against the fallback `.ftl` at compile time.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
}

/// Fluent domain; the fallback file must be `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "navbar-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    FluentLanguageLoader::new(DOMAIN, fallback_language())
});

static INIT: Once = Once::new();

pub fn fallback_language() -> LanguageIdentifier {
    "en-US".parse().expect("valid fallback language identifier")
}

/// Load the embedded fallback bundle (idempotent).
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = LOADER.load_fallback_language(&Localizations) {
            tracing::warn!("failed loading navbar labels ({err}); lookups will render Fluent's missing-id text");
        }
    });
}

/// Language folders embedded under `i18n/`.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
