use dioxus::prelude::*;

use ui::Navbar;

// Same shared theme the desktop shell embeds; there is no web-only copy.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Navbar {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_shared_theme() {
        let shared = include_str!("../../ui/assets/theme/main.css");
        assert_eq!(MAIN_CSS_INLINE, shared);
        assert!(MAIN_CSS_INLINE.contains("--color-bg"));
    }
}
