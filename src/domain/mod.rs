pub mod canvas;
pub mod color;
pub mod image_request;
pub mod label_font;
pub mod output_format;
pub mod placeholder;
