use std::io::Write;

use waymap_client::ClientConfig;

#[test]
fn loads_full_config_from_yaml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "base_url: http://maps.internal:9000\ngraph_path: /api/graph.json\ntimeout_secs: 3"
    )
    .unwrap();

    let config = ClientConfig::from_file(file.path()).unwrap();
    assert_eq!(config.base_url, "http://maps.internal:9000");
    assert_eq!(config.graph_url(), "http://maps.internal:9000/api/graph.json");
    assert_eq!(config.timeout_secs, 3);
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "base_url: http://maps.internal:9000").unwrap();

    let config = ClientConfig::from_file(file.path()).unwrap();
    assert_eq!(config.graph_path, "/data/graph.json");
    assert_eq!(config.timeout_secs, 10);
}

#[test]
fn unreadable_file_is_an_error() {
    assert!(ClientConfig::from_file(std::path::Path::new("/no/such/config.yml")).is_err());
}
