pub(crate) mod header_nav_item;
pub(crate) mod loading;
pub(crate) mod pagination;
pub(crate) mod toast;
pub(crate) mod user_dropdown;
