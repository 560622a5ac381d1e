pub mod action;
pub mod module;

pub use action::Action;
pub use module::Module;
