mod launch;
mod settings;
