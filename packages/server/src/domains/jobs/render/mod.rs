//! HTML rendering for the dashboard: card grid, sidebar and page shell.

pub mod card;
pub mod page;
pub mod styles;

pub use card::{render_cards, CardView, PALETTE};
pub use page::{render_error_page, render_page, PageModel};
