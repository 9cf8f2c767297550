#![allow(dead_code)]

use lazy_static::lazy_static;
use pftpd_core::{Server, ServerBuilder, User};
use std::io::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::Mutex;

pub const ADDR: &str = "127.0.0.1:2198";

lazy_static! {
    static ref CONSUMERS: Arc<Mutex<i32>> = Arc::new(Mutex::new(0));
}

async fn run_server() {
    let root = std::env::temp_dir().join("pftpd-core-tests");
    std::fs::create_dir_all(&root).unwrap();

    let users = vec![
        User::anonymous(root.clone()).with_home("/"),
        User::named("alice", "secret", root.clone()).with_home("/"),
    ];

    let server: Server = ServerBuilder::new(users).greeting("Welcome test").build().unwrap();
    server.listen(ADDR).await.unwrap();
}

pub async fn initialize() {
    let count = Arc::clone(&CONSUMERS);
    let mut lock = count.lock().await;
    *lock += 1;
    if *lock == 1 {
        tokio::spawn(run_server());
        // Give the listener a moment to bind before the first connect.
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
    drop(lock);
}

pub async fn finalize() {
    let count = Arc::clone(&CONSUMERS);
    let mut lock = count.lock().await;
    *lock -= 1;
    drop(lock);
}

pub async fn read_from_server<'a>(buffer: &'a mut [u8], stream: &TcpStream) -> &'a str {
    loop {
        stream.readable().await.unwrap();
        match stream.try_read(buffer) {
            Ok(n) => return std::str::from_utf8(&buffer[0..n]).unwrap(),
            Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => continue,
            Err(e) => panic!("{e}"),
        }
    }
}

pub async fn send_to_server(buffer: &str, stream: &TcpStream) {
    loop {
        stream.writable().await.unwrap();
        match stream.try_write(buffer.as_bytes()) {
            Ok(_) => return,
            Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => continue,
            Err(e) => panic!("{e}"),
        }
    }
}

pub async fn tcp_connect() -> Result<TcpStream, Error> {
    tcp_connect_to(ADDR).await
}

pub async fn tcp_connect_to(addr: &str) -> Result<TcpStream, Error> {
    let mut errcount = 0;
    loop {
        match TcpStream::connect(addr).await {
            Ok(s) => return Ok(s),
            Err(e) => {
                if errcount > 20 {
                    return Err(e);
                }
                errcount += 1;
                tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            }
        }
    }
}

/// Spawns a standalone server (not part of the shared `ADDR` fixture) with a
/// configured per-line read timeout, for exercising timeout teardown.
pub async fn spawn_timeout_server(addr: &'static str, timeout: std::time::Duration) {
    let root = std::env::temp_dir().join("pftpd-core-tests-timeout");
    std::fs::create_dir_all(&root).unwrap();
    let users = vec![User::anonymous(root)];
    let server: Server = ServerBuilder::new(users).greeting("Welcome test").timeout(timeout).build().unwrap();
    tokio::spawn(async move {
        let _ = server.listen(addr).await;
    });
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
}

pub async fn tcp_pasv_connect(addr: SocketAddr) -> Result<TcpStream, Error> {
    let mut errcount = 0;
    loop {
        match TcpStream::connect(addr).await {
            Ok(s) => return Ok(s),
            Err(e) => {
                if errcount > 5 {
                    return Err(e);
                }
                errcount += 1;
                tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            }
        }
    }
}

/// Parses the `(h1,h2,h3,h4,p1,p2)` body of a `227` reply.
pub fn parse_pasv(line: &str) -> Result<SocketAddr, &'static str> {
    let body = line.split_once('(').and_then(|(_, rest)| rest.split_once(')')).ok_or("bad format")?.0;
    let nums: Vec<u8> = body.split(',').filter_map(|s| s.trim().parse().ok()).collect();
    if nums.len() != 6 {
        return Err("need 6 numbers");
    }
    let port = u16::from(nums[4]) * 256 + u16::from(nums[5]);
    Ok(SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::new(nums[0], nums[1], nums[2], nums[3])), port))
}
