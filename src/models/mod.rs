pub mod blog;
pub mod contact_info;
pub mod landing;
pub mod nav_item;
pub mod theme;
