use crate::models::Member;

/// Check that each member is seeking the other's gender
///
/// A member with an empty seeking set never passes.
#[inline]
pub fn matches_gender(u: &Member, v: &Member) -> bool {
    u.seeks(&v.gender) && v.seeks(&u.gender)
}

/// Check that each member's age falls within the other's accepted range
#[inline]
pub fn matches_age_range(u: &Member, v: &Member) -> bool {
    u.accepts_age(v.age) && v.accepts_age(u.age)
}

/// Check a computed distance against the hard radius (inclusive)
#[inline]
pub fn within_radius(distance_km: f64, max_distance_km: f64) -> bool {
    distance_km <= max_distance_km
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn create_member(id: &str, age: u8, gender: &str, seeking: &[&str], min_age: u8, max_age: u8) -> Member {
        Member {
            user_id: id.to_string(),
            name: format!("User {}", id),
            age,
            gender: gender.to_string(),
            seeking: seeking.iter().map(|s| s.to_string()).collect(),
            min_age,
            max_age,
            latitude: 40.7128,
            longitude: -74.0060,
            interests: HashSet::new(),
        }
    }

    #[test]
    fn test_gender_mutual() {
        let u = create_member("u", 30, "F", &["M"], 25, 35);
        let v = create_member("v", 30, "M", &["F"], 25, 35);
        assert!(matches_gender(&u, &v));
        assert!(matches_gender(&v, &u));
    }

    #[test]
    fn test_gender_one_sided() {
        let u = create_member("u", 30, "F", &["M"], 25, 35);
        let v = create_member("v", 30, "M", &["M"], 25, 35);
        assert!(!matches_gender(&u, &v));
        assert!(!matches_gender(&v, &u));
    }

    #[test]
    fn test_gender_open_labels() {
        let u = create_member("u", 30, "nonbinary", &["nonbinary", "F"], 25, 35);
        let v = create_member("v", 30, "F", &["nonbinary"], 25, 35);
        assert!(matches_gender(&u, &v));
    }

    #[test]
    fn test_empty_seeking_never_matches() {
        let u = create_member("u", 30, "F", &[], 25, 35);
        let v = create_member("v", 30, "M", &["F"], 25, 35);
        assert!(!matches_gender(&u, &v));
        assert!(!matches_gender(&v, &u));
    }

    #[test]
    fn test_age_range_inclusive_bounds() {
        let u = create_member("u", 25, "F", &["M"], 25, 35);
        let v = create_member("v", 35, "M", &["F"], 25, 35);
        assert!(matches_age_range(&u, &v));
    }

    #[test]
    fn test_age_range_one_sided() {
        // v accepts u, but v's age is outside u's range
        let u = create_member("u", 30, "F", &["M"], 25, 32);
        let v = create_member("v", 33, "M", &["F"], 20, 40);
        assert!(!matches_age_range(&u, &v));
        assert!(!matches_age_range(&v, &u));
    }

    #[test]
    fn test_within_radius() {
        assert!(within_radius(49.9, 50.0));
        assert!(within_radius(50.0, 50.0));
        assert!(!within_radius(50.01, 50.0));
    }
}
