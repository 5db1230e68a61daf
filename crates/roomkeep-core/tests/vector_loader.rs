//! JSON bill vector loader shared by billing tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use roomkeep_core::billing::BillInput;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct BillVector {
    pub description: String,
    pub input: BillInput,
    pub expect: serde_json::Value,
}

pub fn load(name: &str) -> BillVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap_or_else(|e| panic!("bad vector {name}: {e}"))
}
