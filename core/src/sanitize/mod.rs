pub mod form;

pub use form::{
    clean_form_map, clean_form_values, clean_form_values_with, is_empty_string, SanitizeOptions,
};
