//! Reusable view components shared by the pages.

pub mod nav_bar;
pub mod pagination_bar;
pub mod rubric_table;
