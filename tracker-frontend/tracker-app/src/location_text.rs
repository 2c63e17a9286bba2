/// Turns a location slug as stored by the backend (`new_york-usa`) into
/// something readable (`New York , Usa`).
///
/// Underscores become spaces and hyphens become a comma followed by a space.
/// The comma stands as its own token, so `new_york-city` reads
/// `New York , City` once every whitespace separated token is title-cased
/// and joined back with single spaces.
pub fn format_location(slug: &str) -> String {
    slug.replace('_', " ")
        .replace('-', " , ")
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_to_title() {
        assert_eq!(format_location("new_york-city"), "New York , City");
        assert_eq!(format_location("london-uk"), "London , Uk");
        assert_eq!(format_location("saitama-japan"), "Saitama , Japan");
    }

    #[test]
    fn odd_input() {
        assert_eq!(format_location(""), "");
        assert_eq!(format_location("__"), "");
        assert_eq!(format_location("LOS_ANGELES"), "Los Angeles");
        assert_eq!(format_location("são_paulo-brazil"), "São Paulo , Brazil");
    }
}
