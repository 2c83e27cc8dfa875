//! UI Components
//!
//! Presentation only; state changes go through the store helpers.

mod section_nav;
mod info_section;
mod menu_section;
mod product_card;
mod floating_cart_button;
mod cart_modal;

pub use section_nav::SectionNav;
pub use info_section::InfoSection;
pub use menu_section::MenuSection;
pub use product_card::ProductCard;
pub use floating_cart_button::FloatingCartButton;
pub use cart_modal::CartModal;
