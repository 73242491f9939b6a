pub mod nav_item;
pub mod navbar;

pub use nav_item::NavItem;
pub use navbar::Navbar;
