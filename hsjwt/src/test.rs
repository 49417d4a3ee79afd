#![allow(dead_code)]

use once_cell::sync::Lazy;
use serde_json::json;

use crate::ClaimSet;

pub const KEY: &str = "a key";

pub const SOME_VALUE_TOKEN: &str = concat!(
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.",
    "eyJTb21lIjoiVmFsdWUifQ.",
    "bwVEPazosJyIcl9ALjNna1umsZXkj7Y26J57JKwapD4"
);

pub const JWT_IO_SECRET: &str = "your-256-bit-secret";

pub const JWT_IO_TOKEN: &str = concat!(
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.",
    "eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.",
    "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c"
);

pub const REJECTED_ALGORITHMS: &[&str] = &[
    "none", "None", "NONE", "", "hs256", "HS256 ", "HS384", "HS512", "RS256", "PS256", "ES256",
    "EdDSA",
];

pub static SOME_VALUE: Lazy<ClaimSet> = Lazy::new(|| ClaimSet::new().with_claim("Some", "Value"));

pub static SECRETS: Lazy<Vec<Vec<u8>>> = Lazy::new(|| {
    vec![
        KEY.as_bytes().to_vec(),
        b"a keybad key".to_vec(),
        Vec::new(),
        vec![0; 32],
        (0..=255).collect(),
        vec![0x5c; 200],
    ]
});

pub static CLAIM_SETS: Lazy<Vec<ClaimSet>> = Lazy::new(|| {
    vec![
        ClaimSet::new(),
        SOME_VALUE.clone(),
        ClaimSet::new()
            .with_claim("sub", "Aliri")
            .with_claim("iss", "authority")
            .with_claim("exp", 1_700_000_000_u64)
            .with_claim("admin", false),
        ClaimSet::new()
            .with_claim("nested", json!({ "a": [1, 2.5, null, { "b": "c" }] }))
            .with_claim("unicode", "\u{1f44b} h\u{e9}llo \"quoted\" \\ / \n")
            .with_claim("negative", -42)
            .with_claim("empty", json!({})),
    ]
});
