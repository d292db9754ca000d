//! different utility modules used throughout the project
/// parse task document with titles and "key: value, value" lines into HashMap
pub mod task_parser;
///
mod task_parser_tests;
