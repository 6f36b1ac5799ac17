pub mod export;
pub mod history;
pub mod import;
pub mod mark;
pub mod stats;
pub mod visas;
pub mod visit;
