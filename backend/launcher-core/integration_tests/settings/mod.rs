mod env_file;
mod file;
