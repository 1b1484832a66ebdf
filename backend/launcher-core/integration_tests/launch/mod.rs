mod classpath;
mod directory;
mod spawn;
