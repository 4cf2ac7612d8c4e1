mod audio;
mod config;
mod library;
mod mpris;
mod playlist;
mod presentation;
mod registry;
mod runtime;
mod session;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
