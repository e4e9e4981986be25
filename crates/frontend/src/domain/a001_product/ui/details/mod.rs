//! Product Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: form fields, validation and submit/delete decisions
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

pub mod model;
mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
