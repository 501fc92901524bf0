pub mod normalization;
pub mod source_error;
pub mod types;

#[cfg(test)]
pub mod test_helpers;
