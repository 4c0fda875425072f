#[tokio::main]
async fn main() {
  // Minimal CLI: support --version/-V
  let mut args = std::env::args().skip(1);
  if let Some(arg) = args.next() {
    if arg == "--version" || arg == "-V" {
      println!("mockmail {}", env!("CARGO_PKG_VERSION"));
      return;
    }
    if arg == "--help" || arg == "-h" {
      eprintln!("Usage: mockmail [--version]");
      eprintln!();
      eprintln!("Environment:");
      eprintln!("  MOCKMAIL_ADDR         listen address (default 127.0.0.1:8026)");
      eprintln!("  MOCKMAIL_DATABASE     sqlx SQLite URL (default sqlite://mockmail.db)");
      eprintln!("  MOCKMAIL_STORAGE_KEY  key the scenario is stored under");
      eprintln!("  RUST_LOG              log filter (default info)");
      return;
    }
  }

  if let Err(e) = mockmail::app::run().await {
    eprintln!("error: {e}");
    std::process::exit(1);
  }
}
