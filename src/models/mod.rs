//! Data models for the library catalogue

pub mod book;

pub use book::Book;
