mod command;
mod plan;
