use crate::i18n;
use crate::t;
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Static top bar: brand heading on the left, a two-entry menu on the right.
///
/// Takes no props and wires no listeners; every render produces the same tree:
/// ```text
/// header#navbar.navbar
///   div.navbar__brand > h1 "TITLE."
///   ul.navbar__links > li "Home", li "Register"
/// ```
#[component]
pub fn Navbar() -> Element {
    i18n::init();

    #[cfg(debug_assertions)]
    dioxus::logger::tracing::debug!("Navbar render");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        // Release native builds can't rely on the asset server.
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__brand",
                h1 { {t!("navbar-title")} }
            }
            ul { class: "navbar__links",
                li { {t!("nav-home")} }
                li { {t!("nav-register")} }
            }
        }
    }
}
