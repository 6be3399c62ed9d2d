pub(crate) mod label;
pub(crate) mod progress_bar;
