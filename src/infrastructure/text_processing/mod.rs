mod json_element_source;

pub use json_element_source::JsonElementSource;
