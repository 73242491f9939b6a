pub mod use_css_transition;

pub use use_css_transition::use_css_transition;
