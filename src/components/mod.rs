pub mod header;
pub mod profile_card;
pub mod profile_modal;
pub mod sidebar;
pub mod stat_card;
pub mod status_badge;
