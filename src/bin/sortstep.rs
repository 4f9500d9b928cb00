#[path = "sortstep/app/mod.rs"]
mod app;
#[path = "sortstep/args.rs"]
mod args;
#[path = "sortstep/config/mod.rs"]
mod config;
#[path = "sortstep/input/mod.rs"]
mod input;
#[path = "sortstep/logging.rs"]
mod logging;
#[path = "sortstep/runtime/mod.rs"]
mod runtime;
#[path = "sortstep/terminal/mod.rs"]
mod terminal;
#[path = "sortstep/ui/mod.rs"]
mod ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
