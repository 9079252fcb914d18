use url::form_urlencoded;

/// Serializes parameters into `key=value&key=value`, keeping the given order.
/// Values are form-urlencoded, keys are written as is.
pub fn encode_query<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    entries
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, encode_value(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Alphanumerics and `*-._` pass through, space becomes `+`, every other
/// UTF-8 byte becomes `%XX`.
pub fn encode_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_query_empty() {
        assert_eq!(encode_query(Vec::new()), "");
    }

    #[test]
    fn test_encode_query_keeps_order_and_escapes_values() {
        let query = encode_query(vec![("cht", "p"), ("chd", "t:1,2,3")]);
        assert_eq!(query, "cht=p&chd=t%3A1%2C2%2C3");
    }

    #[test]
    fn test_encode_query_does_not_dedupe() {
        let query = encode_query(vec![("chl", "a"), ("chl", "b")]);
        assert_eq!(query, "chl=a&chl=b");
    }

    #[test]
    fn test_encode_value_form_rules() {
        assert_eq!(encode_value("My beautiful chart"), "My+beautiful+chart");
        assert_eq!(encode_value("a-b_c.d*e"), "a-b_c.d*e");
        assert_eq!(encode_value("0:|Jan|July"), "0%3A%7CJan%7CJuly");
        assert_eq!(encode_value("95K€"), "95K%E2%82%AC");
        assert_eq!(encode_value("~"), "%7E");
        assert_eq!(encode_value(""), "");
    }
}
