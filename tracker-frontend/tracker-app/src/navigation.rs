use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracker_api_types::{SuggestionId, SuggestionKind, SuggestionResult};

use crate::config::TargetPolicy;

/// Everything `encodeURIComponent` escapes.
pub(crate) const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub(crate) fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

fn detail_page(id: &SuggestionId, page: &str) -> String {
    let id = match id {
        SuggestionId::Number(number) => number.to_string(),
        SuggestionId::Text(text) => encode_component(text),
    };
    format!("/{page}?id={id}")
}

/// The page a suggestion row opens, or `None` for kinds with no page.
pub fn target_url(result: &SuggestionResult, policy: TargetPolicy) -> Option<String> {
    let page = match (policy, &result.kind) {
        (TargetPolicy::ArtistOnly, _) => "artist",
        (TargetPolicy::ByKind, SuggestionKind::Artist) => "artist",
        (TargetPolicy::ByKind, SuggestionKind::Location) => "locations",
        (TargetPolicy::ByKind, SuggestionKind::Date) => "dates",
        (TargetPolicy::ByKind, SuggestionKind::Other(_)) => return None,
    };
    Some(detail_page(&result.id, page))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(kind: &str, id: SuggestionId) -> SuggestionResult {
        SuggestionResult {
            kind: SuggestionKind::from(kind.to_string()),
            id,
            text: "Queen".to_string(),
            context: None,
        }
    }

    #[test]
    fn targets_by_kind() {
        let date = result("date", SuggestionId::Number(42));
        assert_eq!(
            target_url(&date, TargetPolicy::ByKind).as_deref(),
            Some("/dates?id=42")
        );
        let artist = result("artist", SuggestionId::Number(1));
        assert_eq!(
            target_url(&artist, TargetPolicy::ByKind).as_deref(),
            Some("/artist?id=1")
        );
        let location = result("location", SuggestionId::Number(7));
        assert_eq!(
            target_url(&location, TargetPolicy::ByKind).as_deref(),
            Some("/locations?id=7")
        );
        let member = result("member", SuggestionId::Number(7));
        assert_eq!(target_url(&member, TargetPolicy::ByKind), None);
    }

    #[test]
    fn artist_only_collapses_targets() {
        let date = result("date", SuggestionId::Number(42));
        assert_eq!(
            target_url(&date, TargetPolicy::ArtistOnly).as_deref(),
            Some("/artist?id=42")
        );
        let member = result("member", SuggestionId::Number(3));
        assert_eq!(
            target_url(&member, TargetPolicy::ArtistOnly).as_deref(),
            Some("/artist?id=3")
        );
    }

    #[test]
    fn text_ids_are_encoded() {
        let artist = result("artist", SuggestionId::Text("a&b c".to_string()));
        assert_eq!(
            target_url(&artist, TargetPolicy::ByKind).as_deref(),
            Some("/artist?id=a%26b%20c")
        );
        assert_eq!(encode_component("AC/DC (live)!"), "AC%2FDC%20(live)!");
    }
}
