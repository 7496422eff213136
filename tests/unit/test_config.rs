use ringq::config::Config;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_explicit_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ringq.toml");
    fs::write(&path, "[queue]\ncapacity = 5\n[ui]\nshow_menu = false\n").unwrap();

    let config = Config::load(Some(path.to_str().unwrap())).unwrap();
    assert_eq!(config.queue.capacity, 5);
    assert!(!config.ui.show_menu);
}

#[test]
fn test_zero_capacity_loads_but_fails_validation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("zero.toml");
    fs::write(&path, "[queue]\ncapacity = 0\n").unwrap();

    // a later --capacity flag may still fix it, so load must not reject it
    let mut config = Config::load(Some(path.to_str().unwrap())).unwrap();
    assert_eq!(config.queue.capacity, 0);

    let err = config.validate().unwrap_err();
    assert_eq!(ringq::errors::get_exit_code(&err), ringq::errors::EXIT_CONFIG_ERROR);

    config.queue.capacity = 4;
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_rejects_malformed_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[queue\ncapacity = ").unwrap();

    let err = Config::load(Some(path.to_str().unwrap())).unwrap_err();
    assert_eq!(ringq::errors::get_exit_code(&err), ringq::errors::EXIT_CONFIG_ERROR);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = Config::load(Some("/nonexistent/ringq.toml")).unwrap_err();
    assert_eq!(ringq::errors::get_exit_code(&err), ringq::errors::EXIT_IO_ERROR);
}
