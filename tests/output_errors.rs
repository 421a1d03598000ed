use recase::output::{map_cmd_result_to_json, CliResponse};
use recase::{Convention, Error};

#[test]
fn empty_needle_serializes_code_and_hint() {
    let err = Error::empty_needle();

    let json = CliResponse::<()>::from_error(&err).to_json().unwrap();

    assert!(json.contains("\"success\": false"));
    assert!(json.contains("\"code\": \"case.empty_needle\""));
    assert!(json.contains("--needle/-n"));
}

#[test]
fn empty_needle_maps_to_exit_code_2() {
    let (_value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(Error::empty_needle()));
    assert_eq!(exit_code, 2);
}

#[test]
fn unsupported_convention_serializes_tag_and_supported_list() {
    let err = Convention::from_str("unsupportedCase").unwrap_err();

    let json = CliResponse::<()>::from_error(&err).to_json().unwrap();

    assert!(json.contains("\"code\": \"case.unsupported_convention\""));
    assert!(json.contains("\"tag\": \"unsupportedCase\""));
    assert!(json.contains("PascalCase"));
}

#[test]
fn unsupported_convention_maps_to_exit_code_2() {
    let err = Convention::from_str("SCREAMING_SNAKE").unwrap_err();
    let (_value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
    assert_eq!(exit_code, 2);
}

#[test]
fn io_error_maps_to_exit_code_1() {
    let err = Error::internal_io("permission denied", Some("rename file".to_string()));
    let (_value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
    assert_eq!(exit_code, 1);
}

#[test]
fn success_keeps_command_exit_code() {
    let (value, exit_code) =
        map_cmd_result_to_json(Ok((serde_json::json!({"ok": true}), 0)));
    assert_eq!(exit_code, 0);
    assert_eq!(value.unwrap()["ok"], true);
}
