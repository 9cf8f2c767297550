//! Minimal runnable server: one anonymous user rooted at a temp directory.
//! Grounded on `unftp-sbe-fs`'s `examples/basic.rs`.

use pftpd_core::{Server, ServerBuilder, User};
use slog::Drain;

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    let logger = slog::Logger::root(slog_stdlog::StdLog.fuse(), slog::o!());

    let addr = "127.0.0.1:2121";
    let root = std::env::temp_dir();

    let server: Server = ServerBuilder::new(vec![User::anonymous(root)])
        .greeting("Welcome")
        .logger(logger)
        .build()
        .expect("valid server configuration");

    println!("Starting ftp server on {addr}");
    server.listen(addr).await.expect("server failed");
}
