use super::*;

fn configured() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

#[test]
fn resolve_addr_keeps_configured_when_unset() {
    assert_eq!(resolve_addr(configured(), None, None).unwrap(), configured());
}

#[test]
fn resolve_addr_treats_blank_as_unset() {
    assert_eq!(resolve_addr(configured(), Some(""), Some("  ")).unwrap(), configured());
}

#[test]
fn resolve_addr_overrides_port_only() {
    let addr = resolve_addr(configured(), None, Some("8080")).unwrap();
    assert_eq!(addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn resolve_addr_overrides_host_only() {
    let addr = resolve_addr(configured(), Some("0.0.0.0"), None).unwrap();
    assert_eq!(addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
}

#[test]
fn resolve_addr_accepts_ipv6_host() {
    let addr = resolve_addr(configured(), Some("::1"), Some("9000")).unwrap();
    assert_eq!(addr, "[::1]:9000".parse::<SocketAddr>().unwrap());
}

#[test]
fn resolve_addr_rejects_bad_port() {
    let err = resolve_addr(configured(), None, Some("http")).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { var: "PORT", ref value } if value == "http"));
}

#[test]
fn resolve_addr_rejects_out_of_range_port() {
    let err = resolve_addr(configured(), None, Some("70000")).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { var: "PORT", .. }));
}

#[test]
fn resolve_addr_rejects_hostname() {
    let err = resolve_addr(configured(), Some("localhost"), None).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { var: "HOST", .. }));
    assert_eq!(err.to_string(), "invalid HOST value: \"localhost\"");
}
