pub mod components;
pub mod navigation;
pub mod pages;
pub mod shell;
pub mod theme;
