mod common;

use common::{parse_pasv, read_from_server, send_to_server, tcp_connect};

#[tokio::test(flavor = "current_thread")]
async fn anonymous_login_then_pwd() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buf = [0u8; 1024];

    assert_eq!(read_from_server(&mut buf, &stream).await, "220 Welcome test\r\n");

    send_to_server("USER anonymous\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buf, &stream).await, "230 anonymous login\r\n");

    send_to_server("PWD\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buf, &stream).await, "257 \"/\"\r\n");

    common::finalize().await;
}

#[tokio::test(flavor = "current_thread")]
async fn named_user_wrong_password() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buf = [0u8; 1024];

    read_from_server(&mut buf, &stream).await;

    send_to_server("USER alice\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buf, &stream).await, "331 require password\r\n");

    send_to_server("PASS wrong\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buf, &stream).await, "530 wrong password\r\n");

    common::finalize().await;
}

#[tokio::test(flavor = "current_thread")]
async fn pwd_before_login_is_bad_sequence() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buf = [0u8; 1024];

    read_from_server(&mut buf, &stream).await;

    send_to_server("PWD\r\n", &stream).await;
    assert_eq!(
        read_from_server(&mut buf, &stream).await,
        "503 bad sequence of commands (not logged in)\r\n"
    );

    common::finalize().await;
}

#[tokio::test(flavor = "current_thread")]
async fn mkd_cwd_cdup_round_trip() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buf = [0u8; 1024];

    read_from_server(&mut buf, &stream).await;

    send_to_server("USER alice\r\n", &stream).await;
    read_from_server(&mut buf, &stream).await;
    send_to_server("PASS secret\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buf, &stream).await, "230 normal login\r\n");

    send_to_server("MKD /roundtrip\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buf, &stream).await, "257 \r\n");

    send_to_server("CWD /roundtrip\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buf, &stream).await, "250 \r\n");

    send_to_server("PWD\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buf, &stream).await, "257 \"/roundtrip\"\r\n");

    send_to_server("CDUP\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buf, &stream).await, "250 \r\n");

    send_to_server("PWD\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buf, &stream).await, "257 \"/\"\r\n");

    common::finalize().await;
}

#[tokio::test(flavor = "current_thread")]
async fn mkd_on_existing_path_is_already_exists() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buf = [0u8; 1024];
    read_from_server(&mut buf, &stream).await;

    send_to_server("USER alice\r\n", &stream).await;
    read_from_server(&mut buf, &stream).await;
    send_to_server("PASS secret\r\n", &stream).await;
    read_from_server(&mut buf, &stream).await;

    send_to_server("MKD /dup\r\n", &stream).await;
    read_from_server(&mut buf, &stream).await;

    send_to_server("MKD /dup\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buf, &stream).await, "550 path already exists\r\n");

    common::finalize().await;
}

#[tokio::test(flavor = "current_thread")]
async fn type_switches_binary_mode_and_rejects_others() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buf = [0u8; 1024];
    read_from_server(&mut buf, &stream).await;

    send_to_server("USER anonymous\r\n", &stream).await;
    read_from_server(&mut buf, &stream).await;

    send_to_server("TYPE A\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buf, &stream).await, "502 type 'A' not implemented\r\n");

    send_to_server("TYPE I\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buf, &stream).await, "200 Always in binary mode\r\n");

    common::finalize().await;
}

#[tokio::test(flavor = "current_thread")]
async fn pasv_twice_is_idempotent_and_decodes_to_a_real_listener() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buf = [0u8; 1024];
    read_from_server(&mut buf, &stream).await;

    send_to_server("USER anonymous\r\n", &stream).await;
    read_from_server(&mut buf, &stream).await;

    send_to_server("PASV\r\n", &stream).await;
    let first = read_from_server(&mut buf, &stream).await;
    assert!(first.starts_with("227-listen socket created\r\n227 ("));
    let addr1 = parse_pasv(first).unwrap();
    assert_eq!(addr1.ip(), "127.0.0.1".parse::<std::net::IpAddr>().unwrap());

    send_to_server("PASV\r\n", &stream).await;
    let second = read_from_server(&mut buf, &stream).await;
    assert!(second.starts_with("227-listen socket already exists\r\n227 ("));
    let addr2 = parse_pasv(second).unwrap();
    assert_eq!(addr1, addr2);

    common::finalize().await;
}

#[tokio::test(flavor = "current_thread")]
async fn mlsd_lists_directory_over_the_passive_channel() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buf = [0u8; 1024];
    read_from_server(&mut buf, &stream).await;

    send_to_server("USER alice\r\n", &stream).await;
    read_from_server(&mut buf, &stream).await;
    send_to_server("PASS secret\r\n", &stream).await;
    read_from_server(&mut buf, &stream).await;

    send_to_server("MKD /listing\r\n", &stream).await;
    read_from_server(&mut buf, &stream).await;
    send_to_server("CWD /listing\r\n", &stream).await;
    read_from_server(&mut buf, &stream).await;
    send_to_server("MKD /listing/child\r\n", &stream).await;
    read_from_server(&mut buf, &stream).await;

    send_to_server("PASV\r\n", &stream).await;
    let pasv_reply = read_from_server(&mut buf, &stream).await;
    let data_addr = parse_pasv(pasv_reply).unwrap();
    let data_stream = common::tcp_pasv_connect(data_addr).await.unwrap();

    send_to_server("MLSD /listing\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buf, &stream).await, "150 mlsd transer started\r\n");

    let mut data_buf = [0u8; 4096];
    let listing = read_from_server(&mut data_buf, &data_stream).await;
    assert!(listing.starts_with("Type=dir;"));
    assert!(listing.ends_with("\r\n"));
    assert!(listing.contains("; child\r\n") || listing.ends_with("; child\r\n"));

    assert_eq!(read_from_server(&mut buf, &stream).await, "200 mlsd data transer done\r\n");

    common::finalize().await;
}

#[tokio::test(flavor = "current_thread")]
async fn idle_connection_is_closed_after_read_timeout() {
    let addr = "127.0.0.1:2199";
    common::spawn_timeout_server(addr, std::time::Duration::from_millis(150)).await;

    let stream = common::tcp_connect_to(addr).await.unwrap();
    let mut buf = [0u8; 1024];
    read_from_server(&mut buf, &stream).await;

    // Send nothing and wait past the deadline: the dispatcher must treat
    // the elapsed read as a fatal session error and close the socket.
    tokio::time::timeout(std::time::Duration::from_secs(2), stream.readable()).await.unwrap().unwrap();
    match stream.try_read(&mut buf) {
        Ok(0) => {}
        other => panic!("expected the server to close the idle connection after its read timeout, got {other:?}"),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn reserved_verbs_answer_like_unimplemented() {
    common::initialize().await;

    let stream = tcp_connect().await.unwrap();
    let mut buf = [0u8; 1024];
    read_from_server(&mut buf, &stream).await;

    send_to_server("USER anonymous\r\n", &stream).await;
    read_from_server(&mut buf, &stream).await;

    send_to_server("DELE something\r\n", &stream).await;
    assert_eq!(read_from_server(&mut buf, &stream).await, "502 'dele' not implemented\r\n");

    common::finalize().await;
}
