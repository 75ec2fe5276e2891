pub mod page;
pub mod pointer;

pub use page::{wire_contact_submit, wire_language_switch, wire_mobile_menu, wire_nav_scroll};
pub use pointer::wire_orbit_drag;
