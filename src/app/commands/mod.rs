pub mod audio;
pub mod config;
pub mod image;
pub mod init;
pub mod links;
pub mod pdf;
pub mod projects;
pub mod repos;
pub mod sort;
pub mod video;
