pub mod calendar_backend;
