pub mod products;
pub mod prompter;
