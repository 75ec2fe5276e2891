// Web frontend tuning constants.
//
// Element ids and class names here must match `index.html`.

// Canvas backing store: devicePixelRatio is clamped to this range
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 1.5;

// Navigation
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;
pub const NAV_SCROLLED_CLASS: &str = "scrolled";

// Contact
pub const CONTACT_EMAIL: &str = "afriplansolar@yahoo.fr";

// Element ids
pub const CANVAS_ID: &str = "scene-canvas";
pub const NAV_ID: &str = "site-nav";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const CONTACT_NAME_ID: &str = "contact-name";
pub const CONTACT_EMAIL_ID: &str = "contact-email";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const LOADER_ID: &str = "loader";

// Selectors and classes
pub const LANG_SWITCH_SELECTOR: &str = ".lang-switch";
pub const I18N_TEXT_ATTR: &str = "data-i18n";
pub const I18N_PLACEHOLDER_ATTR: &str = "data-i18n-placeholder";
pub const LANG_MARKER_ATTR: &str = "data-lang";
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";
