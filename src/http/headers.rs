//! Header table shared by [`HttpRequest`](crate::http::request::HttpRequest) and
//! [`HttpResponse`](crate::http::response::HttpResponse)
//!
//! Names and values are stored as raw strings. Names are compared exactly as
//! received, so `Host` and `host` are two distinct entries. Setting a name that
//! is already present replaces its value.
//!
//! Headers are kept in an ordered map so responses serialize in the order they
//! were set.

use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpHeaders {
    headers: IndexMap<String, String>,
}

impl HttpHeaders {
    pub fn new() -> Self {
        Self {
            headers: IndexMap::new(),
        }
    }

    pub fn set_raw(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn stringify(&self) -> String {
        let mut result = String::new();
        for (name, value) in &self.headers {
            result.push_str(&format!("{}: {}\r\n", name, value));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_value_wins() {
        let mut headers = HttpHeaders::new();
        headers.set_raw("Accept", "text/html");
        headers.set_raw("Accept", "*/*");

        assert_eq!(headers.get("Accept"), Some("*/*"));
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut headers = HttpHeaders::new();
        headers.set_raw("Host", "a");
        headers.set_raw("host", "b");

        assert_eq!(headers.get("Host"), Some("a"));
        assert_eq!(headers.get("host"), Some("b"));
        assert_eq!(headers.get("HOST"), None);
    }

    #[test]
    fn stringify_keeps_insertion_order() {
        let mut headers = HttpHeaders::new();
        headers.set_raw("Server", "redirnet");
        headers.set_raw("Content-Length", "0");

        assert_eq!(headers.stringify(), "Server: redirnet\r\nContent-Length: 0\r\n");
    }
}
