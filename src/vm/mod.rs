pub mod binding;
pub mod bridge;
pub mod list_manager;
pub mod render;
pub mod view;
