pub mod css_transition;
pub mod dropdown_item;
pub mod dropdown_menu;

pub use css_transition::CssTransition;
pub use dropdown_item::DropdownItem;
pub use dropdown_menu::DropdownMenu;
