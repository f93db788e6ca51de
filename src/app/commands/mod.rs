pub mod configs;
pub mod discover;
pub mod init;
pub mod jobs;
pub mod pipeline;
pub mod prepare;
pub mod verify;
