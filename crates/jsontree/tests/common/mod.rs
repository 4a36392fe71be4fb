#![allow(dead_code)]

/// Shared fixture: one document exercising every value shape the parser
/// distinguishes, with both comment styles mixed in.
pub const CONFIG: &str = r#"
{
    // service identity
    "name": "relay",
    "replicas": 3,
    "ratio": 0.25,
    "active": true,
    "parent": null,
    "listen": {
        "host": "0.0.0.0", /* all interfaces */
        "ports": [8080, 8081, 8082]
    },
    "tags": ["edge", "beta"],
    "thresholds": [0.5, 0.9, 0.99],
    "flags": [true, false],
    "routes": [
        {"path": "/", "target": "web"},
        {"path": "/api", "target": "api"}
    ],
    "mixed": [1, "two", null, [3, 4], {"five": 5}]
}
"#;
