//! Template helper functions.

use std::collections::HashMap;

// fn Add: adds *a* and *b* together.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

// fn Echo: returns *msg* unchanged.
// Useful for testing.
pub fn echo(msg: &str) -> &str {
    msg
}

// fn Multiply: multiplies *a* and *b*.
pub fn multiply(a: i64, b: i64) -> i64 {
    a * b
}

// Helpers below are documented in the same group,
// fn Divide: but this group never starts with an annotation.
pub fn divide(a: i64, b: i64) -> Result<i64, String> {
    if b == 0 {
        return Err("division by zero".to_string());
    }
    Ok(a / b)
}

// fn Join: joins *sep* and *values* into one string.
pub fn join(sep: &str, values: &[&str]) -> String {
    values.join(sep)
}

// fn Debug: toggles debug output.
pub static DEBUG: bool = false;

const NOT_A_COMMENT: &str = "// fn Add: inside a string literal";

// fn Split: splits *s* on *sep*, returning the
// pieces and their count.
pub fn split<'a>(s: &'a str, sep: &str) -> (Vec<&'a str>, usize) {
    let parts: Vec<&str> = s.split(sep).collect();
    let n = parts.len();
    (parts, n)
}

pub fn lookup(m: &HashMap<String, String>, k: &str) -> Option<String> {
    m.get(k).cloned() // fn Add: trailing comments are groups too.
}
