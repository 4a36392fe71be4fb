//! Parses an annotated configuration document and looks values up by path.
//!
//! Run with `cargo run --example config_lookup`.

use jsontree::{ValueRef, parse};

const CONFIG: &str = r#"
{
    // upstream service
    "service": {
        "name": "relay",
        "listen": { "host": "0.0.0.0", "ports": [8080, 8081] }
    },
    /* rollout knobs */
    "replicas": 3,
    "regions": ["eu-west", "us-east"]
}
"#;

fn main() {
    let doc = match parse(CONFIG) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("parse failed: {err}");
            return;
        }
    };

    // Strings come back by reference, straight out of the tree.
    match doc.query_str("service:listen:host") {
        Ok(host) => println!("host     = {host}"),
        Err(err) => println!("host     ! {err}"),
    }

    // Typed lookups return a tagged view of the matched value.
    match doc.query("service:listen:ports:1") {
        Ok(ValueRef::Int(port)) => println!("port     = {port}"),
        Ok(other) => println!("port     ? unexpected {other:?}"),
        Err(err) => println!("port     ! {err}"),
    }

    match doc.query("regions:0") {
        Ok(region) => println!("region   = {region:?}"),
        Err(err) => println!("region   ! {err}"),
    }

    // A failed lookup is an error, never a silent null.
    if let Err(err) = doc.query("service:missing") {
        println!("missing  ! {err}");
    }
}
