pub mod admin;
pub mod auth;
pub mod menu_item_review;
pub mod organization;
pub mod recommendation_request;
