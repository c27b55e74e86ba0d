pub mod error_message;
pub mod footer;
pub mod header;
pub mod loading_button;
pub mod research_page;
pub mod verify_page;
