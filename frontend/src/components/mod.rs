pub mod nav;
pub mod search_box;
pub mod stat_card;
pub mod status_pill;
