use robot_credentials::{Credential, CredentialData};

#[test]
fn test_credentials() {
    let credentials =
        serde_json::from_str::<Vec<Credential>>(include_str!("samples/credentials.json")).unwrap();
    assert_eq!(credentials.len(), 2);
    assert_eq!(credentials[0].file_name, "gmail.json");
    assert_eq!(credentials[0].data.client_id, "1234.apps.googleusercontent.com");
    assert_eq!(
        credentials[0].data.scopes,
        Some(vec![
            "https://www.googleapis.com/auth/gmail.readonly".to_string(),
            "https://www.googleapis.com/auth/gmail.send".to_string()
        ])
    );
    assert_eq!(credentials[1].file_name, "drive.json");
    assert_eq!(credentials[1].data.token_uri, "https://oauth2.googleapis.com/token");
}

#[test]
fn test_partial_credential() {
    let credential =
        serde_json::from_str::<Credential>(include_str!("samples/partial_credential.json"))
            .unwrap();
    assert_eq!(credential.file_name, "sheets.json");
    assert_eq!(credential.data.access_token, "ya29.c2");
    assert_eq!(credential.data.refresh_token, "");
    assert_eq!(credential.data.client_secret, "");
}

#[test]
fn test_missing_file_name() {
    let credential = serde_json::from_str::<Credential>(r#"{"data": {}}"#).unwrap();
    assert_eq!(credential.file_name, "");
    let credential = serde_json::from_str::<Credential>(r#"{"fileName": null}"#).unwrap();
    assert_eq!(credential.file_name, "");
}

#[test]
fn test_null_fields() {
    let credentials =
        serde_json::from_str::<Vec<Credential>>(include_str!("samples/null_fields.json")).unwrap();
    assert_eq!(credentials.len(), 2);

    let calendar = &credentials[0].data;
    assert_eq!(calendar.access_token, "");
    assert_eq!(calendar.refresh_token, "1//0jNzAb");
    assert_eq!(calendar.client_id, "");
    assert_eq!(calendar.token_uri, "");
    assert_eq!(calendar.scopes, None);

    assert_eq!(credentials[1].file_name, "contacts.json");
    assert_eq!(credentials[1].data, CredentialData::default());
}

#[test]
fn test_missing_data() {
    let credentials =
        serde_json::from_str::<Vec<Credential>>(include_str!("samples/missing_data.json")).unwrap();
    assert_eq!(credentials[0].file_name, "tasks.json");
    assert_eq!(credentials[0].data, CredentialData::default());
}

#[test]
fn test_empty_and_missing_scopes_differ() {
    let empty = serde_json::from_str::<CredentialData>(r#"{"scopes": []}"#).unwrap();
    let missing = serde_json::from_str::<CredentialData>("{}").unwrap();
    assert_eq!(empty.scopes, Some(vec![]));
    assert_eq!(missing.scopes, None);
    assert_eq!(serde_json::to_value(&missing).unwrap()["scopes"], serde_json::Value::Null);
}

#[test]
fn test_data_is_written_without_wrapper() {
    let credentials =
        serde_json::from_str::<Vec<Credential>>(include_str!("samples/credentials.json")).unwrap();
    let value = serde_json::to_value(&credentials[1].data).unwrap();
    assert!(value.get("fileName").is_none());
    assert_eq!(
        value.as_object().unwrap().keys().collect::<Vec<_>>().len(),
        6
    );
    assert_eq!(
        serde_json::from_value::<CredentialData>(value).unwrap(),
        credentials[1].data
    );
}

#[test]
fn test_debug_redacts_secrets() {
    let credentials =
        serde_json::from_str::<Vec<Credential>>(include_str!("samples/credentials.json")).unwrap();
    let printed = format!("{:?}", credentials);
    assert!(!printed.contains("ya29.a0AfH6SMB"));
    assert!(!printed.contains("1//0gLxYz"));
    assert!(!printed.contains("GOCSPX-abc"));
    assert!(printed.contains("gmail.json"));
}
