//! Descriptor section definitions.
//!
//! Each module corresponds to a part of `docsite.toml`:
//!
//! | Module   | Descriptor part          | Purpose                            |
//! |----------|--------------------------|------------------------------------|
//! | `head`   | `[[head]]`               | Injected document head tags        |
//! | `locale` | `[locales.*]`            | Per-locale nav, edit links, labels |
//! | `nav`    | `themeConfig.sidebar`    | Sidebar navigation tree            |
//! | `theme`  | `[themeConfig]`          | Logo, social links, search         |

pub mod head;
pub mod locale;
pub mod nav;
pub mod theme;

// Re-export section configs
pub use head::HeadTag;
pub use locale::{
    DocFooterLabels, EditLinkConfig, FooterConfig, LastUpdatedLabel, LocaleConfig,
    LocaleThemeConfig, OutlineLabels, UiStrings, EDIT_PATH_TOKEN,
};
pub use nav::{NavItem, NavSection};
pub use theme::{SearchConfig, SearchProvider, SocialLink, ThemeConfig};
