extern crate regex;
use self::regex::Regex;

/// Splits a TRK value of the shape "N" or "N/M". Anything else yields a
/// pair of empty strings; the caller's integer parse then fails and the
/// value stays text-only.
pub fn get_track_number(input: &str) -> (String, String) {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^(\d+)(/\d+)?$").unwrap();
    }

    match RE.captures(input) {
        None => ("".to_string(), "".to_string()),
        Some(c) => (
            match c.get(1) {
                None => "".to_string(),
                Some(s) => s.as_str().to_string(),
            },
            match c.get(2) {
                None => "".to_string(),
                Some(s) => (&s.as_str()[1..]).to_string(),
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::get_track_number;

    #[test]
    fn track_number_test() {
        assert_eq!(
            get_track_number("3/12"),
            ("3".to_string(), "12".to_string())
        );
        assert_eq!(get_track_number("7"), ("7".to_string(), "".to_string()));
        assert_eq!(get_track_number("A/B"), ("".to_string(), "".to_string()));
        assert_eq!(get_track_number(""), ("".to_string(), "".to_string()));
        assert_eq!(get_track_number("3/"), ("".to_string(), "".to_string()));
    }
}
