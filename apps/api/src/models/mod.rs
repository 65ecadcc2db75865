pub mod campaign;
pub mod form;
pub mod predictions;
