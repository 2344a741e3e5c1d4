use once_cell::sync::Lazy;
use regex::Regex;

static CITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s-\s(.+),\s[A-Z]{2}$").expect("BUG: hardcoded city regex is invalid"));
static STATE: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s([A-Z]{2})$").expect("BUG: hardcoded state regex is invalid"));
static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:January|February|March|April|May|June|July|August|September|October|November|December)\s\d{1,2},\s\d{4}$",
    )
    .expect("BUG: hardcoded date regex is invalid")
});

pub struct TextHelper {}

impl TextHelper {
    /// # get city
    /// the city out of a `"Venue - City, ST"` heading
    ///
    /// ## Returns
    /// * `String` - the city, or an empty string when the heading does not match
    pub fn get_city(val: &str) -> String {
        CITY.captures(val.trim())
            .and_then(|caps| caps.get(1))
            .map(|city| city.as_str().to_string())
            .unwrap_or_default()
    }

    /// # get state
    /// the trailing two letter state code out of a `"Venue - City, ST"` heading
    pub fn get_state(val: &str) -> String {
        STATE.captures(val.trim())
            .and_then(|caps| caps.get(1))
            .map(|state| state.as_str().to_string())
            .unwrap_or_default()
    }

    /// # get date
    /// the `"Month D, YYYY"` date a heading ends with
    pub fn get_date(val: &str) -> String {
        DATE.find(val.trim())
            .map(|date| date.as_str().to_string())
            .unwrap_or_default()
    }

    /// true when the text is a non-empty run of ascii digits
    pub fn is_numeric(val: &str) -> bool {
        !val.is_empty() && val.chars().all(|c| c.is_ascii_digit())
    }
}
