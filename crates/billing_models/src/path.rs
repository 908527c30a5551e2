//! Field paths used in decode and validation errors.
//!
//! Paths use dotted keys with bracketed indexes, e.g.
//! `replace_prices[0].price.unit_config`. Keys that would be ambiguous in
//! that syntax are written in quoted bracket form (`metadata["a.b"]`).

pub fn field(base: &str, key: &str) -> String {
    let plain = !key.is_empty() && !key.contains(['.', '[', ']', '"']);
    match (base.is_empty(), plain) {
        (true, true) => key.to_string(),
        (false, true) => format!("{}.{}", base, key),
        (_, false) => format!("{}[\"{}\"]", base, escape_key(key)),
    }
}

pub fn index(base: &str, index: usize) -> String {
    format!("{}[{}]", base, index)
}

fn escape_key(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    for ch in key.chars() {
        if ch == '\\' || ch == '"' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
