pub mod dropdown;
pub mod icons;
pub mod navigation;
