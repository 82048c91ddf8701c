//! Shared UI crate: the navbar component and the label bundle it renders.

pub mod i18n;

pub mod components {
    mod navbar;
    pub use navbar::Navbar;
}

pub use components::Navbar;
