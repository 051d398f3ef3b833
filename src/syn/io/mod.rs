pub mod uper;
