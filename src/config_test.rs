use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("DATA_FILE");
    }
}

#[test]
fn from_values_defaults() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.data_file, PathBuf::from(DEFAULT_DATA_FILE));
}

#[test]
fn from_values_parses_overrides() {
    let cfg = ServerConfig::from_values(Some(" 8080 "), Some("/srv/data/db.json")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.data_file, PathBuf::from("/srv/data/db.json"));
}

#[test]
fn from_values_blank_values_use_defaults() {
    let cfg = ServerConfig::from_values(Some(""), Some("  ")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.data_file, PathBuf::from(DEFAULT_DATA_FILE));
}

#[test]
fn from_values_rejects_bad_port() {
    assert_eq!(
        ServerConfig::from_values(Some("http"), None),
        Err(ConfigError::InvalidPort("http".to_owned()))
    );
    assert_eq!(
        ServerConfig::from_values(Some("70000"), None),
        Err(ConfigError::InvalidPort("70000".to_owned()))
    );
}

#[test]
fn from_env_reads_process_environment() {
    unsafe { clear_server_env() };
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.data_file, PathBuf::from(DEFAULT_DATA_FILE));

    unsafe {
        std::env::set_var("PORT", "4100");
        std::env::set_var("DATA_FILE", "fixtures/users.json");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4100);
    assert_eq!(cfg.data_file, PathBuf::from("fixtures/users.json"));

    unsafe { std::env::set_var("PORT", "not-a-port") };
    assert_eq!(ServerConfig::from_env(), Err(ConfigError::InvalidPort("not-a-port".to_owned())));

    unsafe { clear_server_env() };
}
