use validator::Validate;

pub fn validate<T: Validate>(val: &T) -> Result<(), validator::ValidationErrors> {
    val.validate()
}

/// Accepts `local@domain.tld`: three runs free of whitespace and `@`, joined
/// by an `@` and a later `.`.
pub fn is_plausible_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if !is_address_run(local) || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .any(|(idx, _)| is_address_run(&domain[..idx]) && is_address_run(&domain[idx + 1..]))
}

fn is_address_run(part: &str) -> bool {
    !part.is_empty() && !part.chars().any(|c| c.is_whitespace() || c == '@')
}

pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn is_ten_digit_phone(raw: &str) -> bool {
    digits_only(raw).len() == 10
}

pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_requires_a_domain_suffix() {
        assert!(!is_plausible_email("a@b"));
        assert!(is_plausible_email("a@b.co"));
        assert!(is_plausible_email("ana.ruiz@mail.example.com"));
        assert!(!is_plausible_email("a b@c.co"));
        assert!(!is_plausible_email("a@@b.co"));
        assert!(!is_plausible_email("a@.co"));
        assert!(!is_plausible_email("a@b."));
        assert!(!is_plausible_email(""));
    }

    #[test]
    fn phone_counts_digits_after_stripping_separators() {
        assert!(is_ten_digit_phone("442 123 4567"));
        assert!(is_ten_digit_phone("(442) 123-4567"));
        assert!(!is_ten_digit_phone("12345"));
        assert!(!is_ten_digit_phone("+52 442 123 4567"));
    }
}
