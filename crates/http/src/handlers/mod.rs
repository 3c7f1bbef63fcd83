pub mod boxes;
