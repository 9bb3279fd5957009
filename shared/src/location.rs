//! Location formatting for compact card display.

/// Keep the first two space separated tokens of a location, e.g. city and
/// district. Input with fewer tokens comes back unchanged.
pub fn shortened_location(full_location: &str) -> String {
    full_location.split(' ').take(2).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::shortened_location;

    #[test]
    fn keeps_city_and_district() {
        assert_eq!(shortened_location("서울 강남구 역삼동"), "서울 강남구");
        assert_eq!(shortened_location("부산 해운대구 우동 123"), "부산 해운대구");
    }

    #[test]
    fn short_inputs_pass_through() {
        assert_eq!(shortened_location("서울"), "서울");
        assert_eq!(shortened_location("서울 강남구"), "서울 강남구");
        assert_eq!(shortened_location(""), "");
    }

    #[test]
    fn does_not_collapse_repeated_spaces() {
        assert_eq!(shortened_location("서울  강남구"), "서울 ");
    }
}
