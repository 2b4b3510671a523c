pub mod bar;
pub mod width;
