pub mod route_file;
pub mod text;
