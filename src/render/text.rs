// src/render/text.rs
// DOCUMENTATION: Deterministic plain-text reports
// PURPOSE: Turn domain responses into human-readable blocks, one algorithm per result kind
//
// Rendering is a pure function of the model and the color flag. Empty values never
// produce a "label: " line with nothing after it.

use std::collections::BTreeSet;

use crate::models::{
    Amenities, AutocompleteResponse, AutocompleteSuggestion, LatLng, LocationResolveResponse,
    Money, NearbySearchResponse, PlaceDetails, PlaceSummary, PriceRange, ResolvedLocation,
    Review, RouteResponse, SearchResponse,
};
use crate::render::Color;

pub const EMPTY_RESULTS: &str = "No results.";
const NO_NAME: &str = "(no name)";
const MAX_REVIEWS: usize = 3;
const REVIEW_PREVIEW_BYTES: usize = 200;

const CURRENCY_SYMBOLS: [(&str, &str); 3] = [("USD", "$"), ("EUR", "€"), ("GBP", "£")];

pub fn render_search(color: Color, response: &SearchResponse) -> String {
    render_summary_list(color, "Results", &response.results, &response.next_page_token)
}

pub fn render_nearby(color: Color, response: &NearbySearchResponse) -> String {
    render_summary_list(color, "Nearby", &response.results, &response.next_page_token)
}

pub fn render_autocomplete(color: Color, response: &AutocompleteResponse) -> String {
    render_list(
        color,
        "Suggestions",
        &response.suggestions,
        |out, index, suggestion| {
            let title = format_title(
                color,
                autocomplete_title(suggestion),
                autocomplete_subtitle(suggestion),
            );
            push_item_title(out, index, &title);
            write_autocomplete_suggestion(out, color, suggestion);
        },
    )
}

pub fn render_resolve(color: Color, response: &LocationResolveResponse) -> String {
    render_list(color, "Resolved", &response.results, |out, index, place| {
        push_item_title(out, index, &format_title(color, &place.name, &place.address));
        write_resolved_location(out, color, place);
    })
}

/// Single-place report: bold title line followed by every available attribute
pub fn render_details(color: Color, place: &PlaceDetails) -> String {
    let mut out = String::new();
    out.push_str(&color.bold(&format_title(color, &place.name, &place.address)));
    out.push('\n');
    write_place_details(&mut out, color, place);
    out
}

/// Route report: one numbered block per waypoint
/// DOCUMENTATION: A waypoint without results prints the "No results." sentinel inside
/// the outer list; only an empty waypoint list collapses the whole report to it
pub fn render_route(color: Color, response: &RouteResponse) -> String {
    let count = response.waypoints.len();
    if count == 0 {
        return EMPTY_RESULTS.to_string();
    }

    let mut out = String::new();
    out.push_str(&color.bold(&format!("Route waypoints ({})", count)));
    out.push('\n');

    for (i, waypoint) in response.waypoints.iter().enumerate() {
        out.push_str(&color.bold(&format!("Waypoint {}", i + 1)));
        out.push(' ');
        out.push_str(&color.dim(&format!(
            "({:.6}, {:.6})",
            waypoint.location.lat, waypoint.location.lng
        )));
        out.push('\n');

        if waypoint.results.is_empty() {
            out.push_str(EMPTY_RESULTS);
            out.push('\n');
        } else {
            write_summary_items(&mut out, color, &waypoint.results);
        }

        if i + 1 < count {
            out.push('\n');
        }
    }

    out
}

fn render_summary_list(
    color: Color,
    header: &str,
    places: &[PlaceSummary],
    next_page_token: &str,
) -> String {
    if places.is_empty() {
        return EMPTY_RESULTS.to_string();
    }

    let mut out = String::new();
    push_header(&mut out, color, header, places.len());
    write_summary_items(&mut out, color, places);

    if !next_page_token.trim().is_empty() {
        out.push('\n');
        out.push_str(&color.dim("Next page token:"));
        out.push(' ');
        out.push_str(next_page_token);
    }
    out
}

/// Header + numbered items, each block written by the caller
fn render_list<T, F>(color: Color, header: &str, items: &[T], mut write_item: F) -> String
where
    F: FnMut(&mut String, usize, &T),
{
    if items.is_empty() {
        return EMPTY_RESULTS.to_string();
    }

    let mut out = String::new();
    push_header(&mut out, color, header, items.len());
    for (i, item) in items.iter().enumerate() {
        write_item(&mut out, i + 1, item);
        if i + 1 < items.len() {
            out.push('\n');
        }
    }
    out
}

fn push_header(out: &mut String, color: Color, header: &str, count: usize) {
    out.push_str(&color.bold(&format!("{} ({})", header, count)));
    out.push('\n');
}

fn push_item_title(out: &mut String, index: usize, title: &str) {
    out.push_str(&format!("{}. {}\n", index, title));
}

fn write_summary_items(out: &mut String, color: Color, places: &[PlaceSummary]) {
    for (i, place) in places.iter().enumerate() {
        push_item_title(out, i + 1, &format_title(color, &place.name, &place.address));
        write_place_summary(out, color, place);
        if i + 1 < places.len() {
            out.push('\n');
        }
    }
}

/// "name — address", falling back to "(no name)" when the name is blank
pub fn format_title(color: Color, name: &str, address: &str) -> String {
    let display = match name.trim() {
        "" => NO_NAME,
        trimmed => trimmed,
    };
    if address.is_empty() {
        return color.cyan(display);
    }
    format!("{} — {}", color.cyan(display), address)
}

fn autocomplete_title(suggestion: &AutocompleteSuggestion) -> &str {
    if !suggestion.main_text.trim().is_empty() {
        return &suggestion.main_text;
    }
    &suggestion.text
}

fn autocomplete_subtitle(suggestion: &AutocompleteSuggestion) -> &str {
    if !suggestion.secondary_text.trim().is_empty() {
        return &suggestion.secondary_text;
    }
    if suggestion.text.trim().is_empty() || suggestion.main_text.trim().is_empty() {
        return "";
    }
    &suggestion.text
}

fn write_place_summary(out: &mut String, color: Color, place: &PlaceSummary) {
    write_line(out, color, "ID", &place.place_id);
    write_location(out, color, place.location.as_ref());
    write_rating(
        out,
        color,
        place.rating,
        place.user_rating_count,
        place.price_level,
        None,
    );
    write_types(out, color, &place.types);
    write_open_now(out, color, place.open_now);
}

fn write_autocomplete_suggestion(out: &mut String, color: Color, suggestion: &AutocompleteSuggestion) {
    write_line(out, color, "Kind", &suggestion.kind);
    write_line(out, color, "ID", &suggestion.place_id);
    write_line(out, color, "Place", &suggestion.place);
    write_types(out, color, &suggestion.types);
    if let Some(distance) = suggestion.distance_meters {
        write_line(out, color, "Distance", &format!("{}m", distance));
    }
}

fn write_resolved_location(out: &mut String, color: Color, place: &ResolvedLocation) {
    write_line(out, color, "ID", &place.place_id);
    write_location(out, color, place.location.as_ref());
    write_types(out, color, &place.types);
}

fn write_place_details(out: &mut String, color: Color, place: &PlaceDetails) {
    write_line(out, color, "ID", &place.place_id);
    write_location(out, color, place.location.as_ref());
    write_rating(
        out,
        color,
        place.rating,
        place.user_rating_count,
        place.price_level,
        place.price_range.as_ref(),
    );
    write_line(out, color, "Status", &place.business_status);
    write_types(out, color, &place.types);
    write_line(out, color, "Primary Type", &place.primary_type_display_name);
    write_line(out, color, "Phone", &place.phone);
    write_line(out, color, "Website", &place.website);
    write_line(out, color, "Maps", &place.google_maps_uri);
    write_line(out, color, "Summary", &place.editorial_summary);
    write_line(out, color, "AI Overview", &place.generative_summary);
    write_line(out, color, "Review Summary", &place.review_summary);
    write_amenities(out, color, &place.amenities);
    write_open_now(out, color, place.open_now);
    write_reviews(out, color, place.reviews.as_deref().unwrap_or_default());

    if let Some(hours) = place.hours.as_deref().filter(|h| !h.is_empty()) {
        out.push_str(&color.dim("Hours:"));
        out.push('\n');
        for entry in hours {
            out.push_str("  - ");
            out.push_str(entry);
            out.push('\n');
        }
    }
}

fn write_amenities(out: &mut String, color: Color, amenities: &Amenities) {
    let served = amenities.served();
    if !served.is_empty() {
        write_line(out, color, "Serves", &served.join(", "));
    }
}

fn write_reviews(out: &mut String, color: Color, reviews: &[Review]) {
    if reviews.is_empty() {
        return;
    }
    out.push_str(&color.dim("Reviews:"));
    out.push('\n');

    for review in reviews.iter().take(MAX_REVIEWS) {
        let line = review_line(review);
        if line.is_empty() {
            continue;
        }
        out.push_str("  - ");
        out.push_str(&line);
        out.push('\n');
    }

    if reviews.len() > MAX_REVIEWS {
        out.push_str(&color.dim(&format!("  ... {} more", reviews.len() - MAX_REVIEWS)));
        out.push('\n');
    }
}

fn write_location(out: &mut String, color: Color, location: Option<&LatLng>) {
    if let Some(loc) = location {
        write_line(out, color, "Location", &format!("{:.6}, {:.6}", loc.lat, loc.lng));
    }
}

/// Build the rating segment and the price segment, joined by " · "
pub fn rating_text(
    rating: Option<f64>,
    count: Option<i32>,
    price_level: Option<i32>,
    price_range: Option<&PriceRange>,
) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(2);

    match (rating, count) {
        (Some(rating), Some(count)) => parts.push(format!("{:.1} ({})", rating, count)),
        (Some(rating), None) => parts.push(format!("{:.1}", rating)),
        (None, Some(count)) => parts.push(format!("{} ratings", count)),
        (None, None) => {}
    }

    let price = match (price_range, price_level) {
        (Some(range), _) => format_price_range(range),
        (None, Some(level)) => "$".repeat(level.clamp(0, 4) as usize),
        (None, None) => String::new(),
    };
    if !price.is_empty() {
        parts.push(price);
    }

    parts.join(" · ")
}

fn write_rating(
    out: &mut String,
    color: Color,
    rating: Option<f64>,
    count: Option<i32>,
    price_level: Option<i32>,
    price_range: Option<&PriceRange>,
) {
    write_line(out, color, "Rating", &rating_text(rating, count, price_level, price_range));
}

/// Format a price range
/// DOCUMENTATION: Equal bounds collapse to one value; a missing end renders "start+"
pub fn format_price_range(range: &PriceRange) -> String {
    let start = range.start_price.as_ref().map(format_money).unwrap_or_default();
    let end = range.end_price.as_ref().map(format_money).unwrap_or_default();

    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => format!("{}+", start),
        (true, false) => end,
        (false, false) if start == end => start,
        (false, false) => format!("{}–{}", start, end),
    }
}

/// Format money with a currency symbol
/// DOCUMENTATION: Zero decimals when nanos is 0, otherwise exactly two
pub fn format_money(money: &Money) -> String {
    let symbol = CURRENCY_SYMBOLS
        .iter()
        .find(|(code, _)| *code == money.currency_code)
        .map(|(_, symbol)| *symbol)
        .unwrap_or(money.currency_code.as_str());

    if money.nanos == 0 {
        return format!("{}{}", symbol, money.units);
    }

    // Nanos round half up to cents; 100 cents carry into units
    let negative = money.units < 0 || money.nanos < 0;
    let mut whole = money.units.unsigned_abs();
    let mut cents = (money.nanos.unsigned_abs() + 5_000_000) / 10_000_000;
    if cents >= 100 {
        whole += 1;
        cents -= 100;
    }
    let sign = if negative { "-" } else { "" };
    format!("{}{}{}.{:02}", symbol, sign, whole, cents)
}

fn write_types(out: &mut String, color: Color, types: &[String]) {
    let unique = unique_strings(types);
    if !unique.is_empty() {
        write_line(out, color, "Types", &unique.join(", "));
    }
}

/// Trim, drop blanks, dedupe (case-sensitive) and sort lexicographically
pub fn unique_strings<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.as_ref().trim())
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn write_open_now(out: &mut String, color: Color, open_now: Option<bool>) {
    match open_now {
        Some(true) => write_line(out, color, "Open now", &color.green("yes")),
        Some(false) => write_line(out, color, "Open now", &color.yellow("no")),
        None => {}
    }
}

/// "Label: value" line, suppressed entirely for blank values
fn write_line(out: &mut String, color: Color, label: &str, value: &str) {
    if value.trim().is_empty() {
        return;
    }
    out.push_str(&color.dim(&format!("{}:", label)));
    out.push(' ');
    out.push_str(value);
    out.push('\n');
}

/// "4.5 stars by Ann (2 weeks ago) text", each part only when available
pub fn review_line(review: &Review) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(4);
    if let Some(rating) = review.rating {
        parts.push(format!("{:.1} stars", rating));
    }
    if let Some(author) = review
        .author
        .as_ref()
        .filter(|a| !a.display_name.trim().is_empty())
    {
        parts.push(format!("by {}", author.display_name));
    }
    if !review.relative_publish_time_description.trim().is_empty() {
        parts.push(format!("({})", review.relative_publish_time_description));
    }
    let text = review_text(review);
    if !text.is_empty() {
        parts.push(text);
    }
    parts.join(" ")
}

/// Primary text, falling back to the original text when the primary is blank
fn review_text(review: &Review) -> String {
    let primary = review.text.as_ref().map(|t| t.text.as_str()).unwrap_or("");
    let chosen = if primary.trim().is_empty() {
        review
            .original_text
            .as_ref()
            .map(|t| t.text.as_str())
            .unwrap_or("")
    } else {
        primary
    };
    truncate_text(chosen.trim(), REVIEW_PREVIEW_BYTES)
}

/// Cut to at most max_bytes and append "..." when cut
/// DOCUMENTATION: The cut backs off to the nearest char boundary, so multi-byte
/// characters are never split
pub fn truncate_text(value: &str, max_bytes: usize) -> String {
    if max_bytes == 0 || value.len() <= max_bytes {
        return value.to_string();
    }
    let mut cut = max_bytes;
    while !value.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", value[..cut].trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthorAttribution, LocalizedText, RouteWaypoint};

    fn plain() -> Color {
        Color::new(false)
    }

    fn usd(units: i64, nanos: i32) -> Money {
        Money {
            currency_code: "USD".to_string(),
            units,
            nanos,
        }
    }

    fn review(text: &str) -> Review {
        Review {
            text: Some(LocalizedText {
                text: text.to_string(),
                language_code: "en".to_string(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_search() {
        let response = SearchResponse {
            results: vec![PlaceSummary {
                place_id: "abc".to_string(),
                name: "Cafe".to_string(),
                address: "123 Street".to_string(),
                location: Some(LatLng::new(1.0, 2.0)),
                rating: Some(4.5),
                price_level: Some(2),
                types: vec!["cafe".to_string(), "coffee_shop".to_string()],
                open_now: Some(true),
                ..Default::default()
            }],
            next_page_token: "next".to_string(),
        };

        let output = render_search(plain(), &response);
        let expected = "Results (1)\n\
            1. Cafe — 123 Street\n\
            ID: abc\n\
            Location: 1.000000, 2.000000\n\
            Rating: 4.5 · $$\n\
            Types: cafe, coffee_shop\n\
            Open now: yes\n\
            \n\
            Next page token: next";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_search_empty() {
        assert_eq!(render_search(plain(), &SearchResponse::default()), "No results.");
        assert_eq!(render_nearby(plain(), &NearbySearchResponse::default()), "No results.");
        assert_eq!(render_resolve(plain(), &LocationResolveResponse::default()), "No results.");
        assert_eq!(render_autocomplete(plain(), &AutocompleteResponse::default()), "No results.");
    }

    #[test]
    fn test_items_separated_by_blank_line() {
        let response = NearbySearchResponse {
            results: vec![
                PlaceSummary {
                    place_id: "a".to_string(),
                    name: "One".to_string(),
                    ..Default::default()
                },
                PlaceSummary {
                    place_id: "b".to_string(),
                    ..Default::default()
                },
            ],
            next_page_token: String::new(),
        };
        let output = render_nearby(plain(), &response);
        assert_eq!(
            output,
            "Nearby (2)\n1. One\nID: a\n\n2. (no name)\nID: b\n"
        );
    }

    #[test]
    fn test_render_autocomplete() {
        let response = AutocompleteResponse {
            suggestions: vec![
                AutocompleteSuggestion {
                    kind: "place".to_string(),
                    place_id: "abc".to_string(),
                    main_text: "Cafe".to_string(),
                    secondary_text: "Seattle".to_string(),
                    types: vec!["cafe".to_string()],
                    distance_meters: Some(120),
                    ..Default::default()
                },
                AutocompleteSuggestion {
                    kind: "query".to_string(),
                    text: "cafe near me".to_string(),
                    ..Default::default()
                },
            ],
        };
        let output = render_autocomplete(plain(), &response);
        assert_eq!(
            output,
            "Suggestions (2)\n\
             1. Cafe — Seattle\n\
             Kind: place\n\
             ID: abc\n\
             Types: cafe\n\
             Distance: 120m\n\
             \n\
             2. cafe near me\n\
             Kind: query\n"
        );
    }

    #[test]
    fn test_render_resolve() {
        let response = LocationResolveResponse {
            results: vec![ResolvedLocation {
                place_id: "loc-1".to_string(),
                name: "Downtown".to_string(),
                types: vec!["neighborhood".to_string()],
                ..Default::default()
            }],
        };
        let output = render_resolve(plain(), &response);
        assert_eq!(
            output,
            "Resolved (1)\n1. Downtown\nID: loc-1\nTypes: neighborhood\n"
        );
    }

    #[test]
    fn test_render_route() {
        let response = RouteResponse {
            waypoints: vec![
                RouteWaypoint {
                    location: LatLng::new(1.0, 2.0),
                    results: vec![PlaceSummary {
                        place_id: "place-1".to_string(),
                        name: "Cafe".to_string(),
                        ..Default::default()
                    }],
                },
                RouteWaypoint {
                    location: LatLng::new(3.0, 4.0),
                    results: Vec::new(),
                },
            ],
        };
        let output = render_route(plain(), &response);
        assert_eq!(
            output,
            "Route waypoints (2)\n\
             Waypoint 1 (1.000000, 2.000000)\n\
             1. Cafe\n\
             ID: place-1\n\
             \n\
             Waypoint 2 (3.000000, 4.000000)\n\
             No results.\n"
        );
        assert_eq!(render_route(plain(), &RouteResponse::default()), "No results.");
    }

    #[test]
    fn test_render_details() {
        let details = PlaceDetails {
            place_id: "place-1".to_string(),
            name: "Park".to_string(),
            address: "Central".to_string(),
            rating: Some(4.2),
            user_rating_count: Some(150),
            price_level: Some(2),
            types: vec!["park".to_string()],
            phone: "+1 555".to_string(),
            website: "https://example.com".to_string(),
            generative_summary: "Green and quiet".to_string(),
            hours: Some(vec!["Mon: 9-5".to_string()]),
            open_now: Some(false),
            reviews: Some(vec![Review {
                rating: Some(4.5),
                relative_publish_time_description: "2 weeks ago".to_string(),
                author: Some(AuthorAttribution {
                    display_name: "Alice".to_string(),
                    ..Default::default()
                }),
                ..review("Great park")
            }]),
            amenities: Amenities {
                serves_coffee: Some(true),
                serves_beer: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let output = render_details(plain(), &details);
        assert_eq!(
            output,
            "Park — Central\n\
             ID: place-1\n\
             Rating: 4.2 (150) · $$\n\
             Types: park\n\
             Phone: +1 555\n\
             Website: https://example.com\n\
             AI Overview: Green and quiet\n\
             Serves: Beer, Coffee\n\
             Open now: no\n\
             Reviews:\n  \
             - 4.5 stars by Alice (2 weeks ago) Great park\n\
             Hours:\n  \
             - Mon: 9-5\n"
        );
    }

    #[test]
    fn test_details_title_is_bold_when_colored() {
        let details = PlaceDetails {
            place_id: "p".to_string(),
            name: "Park".to_string(),
            ..Default::default()
        };
        let output = render_details(Color::new(true), &details);
        assert!(output.starts_with("\x1b[1m\x1b[36mPark\x1b[0m\x1b[0m\n"));
        assert!(output.contains("\x1b[2mID:\x1b[0m p\n"));
    }

    #[test]
    fn test_rating_line_end_to_end() {
        let details = PlaceDetails {
            rating: Some(4.5),
            user_rating_count: Some(150),
            price_level: Some(2),
            ..Default::default()
        };
        assert!(render_details(plain(), &details).contains("Rating: 4.5 (150) · $$\n"));
    }

    #[test]
    fn test_rating_text_variants() {
        assert_eq!(rating_text(None, Some(12), None, None), "12 ratings");
        assert_eq!(rating_text(Some(4.0), None, None, None), "4.0");
        assert_eq!(rating_text(None, None, Some(0), None), "");
        let range = PriceRange {
            start_price: Some(usd(10, 0)),
            end_price: Some(usd(20, 0)),
        };
        assert_eq!(rating_text(Some(4.5), None, Some(1), Some(&range)), "4.5 · $10–$20");
    }

    #[test]
    fn test_format_money_decimals() {
        assert_eq!(format_money(&usd(12, 0)), "$12");
        assert_eq!(format_money(&usd(12, 500_000_000)), "$12.50");
        assert_eq!(format_money(&usd(0, 1)), "$0.00");
        assert_eq!(
            format_money(&usd(9_007_199_254_740_993, 10_000_000)),
            "$9007199254740993.01"
        );
        assert_eq!(format_money(&usd(1, 999_999_999)), "$2.00");
        assert_eq!(format_money(&usd(-3, -500_000_000)), "$-3.50");
        let eur = Money {
            currency_code: "EUR".to_string(),
            units: 5,
            nanos: 0,
        };
        assert_eq!(format_money(&eur), "€5");
        let jpy = Money {
            currency_code: "JPY".to_string(),
            units: 1500,
            nanos: 0,
        };
        assert_eq!(format_money(&jpy), "JPY1500");
    }

    #[test]
    fn test_price_range_collapses_equal_bounds() {
        let range = PriceRange {
            start_price: Some(usd(15, 0)),
            end_price: Some(usd(15, 0)),
        };
        assert_eq!(format_price_range(&range), "$15");

        let open = PriceRange {
            start_price: Some(usd(100, 0)),
            end_price: None,
        };
        assert_eq!(format_price_range(&open), "$100+");

        let empty = PriceRange {
            start_price: None,
            end_price: None,
        };
        assert_eq!(format_price_range(&empty), "");
    }

    #[test]
    fn test_unique_strings() {
        let values = unique_strings(&["cafe", "Cafe", " cafe ", "", "bar"]);
        assert_eq!(values, vec!["Cafe", "bar", "cafe"]);
        assert_eq!(unique_strings(&values), values);
    }

    #[test]
    fn test_reviews_overflow() {
        let reviews: Vec<Review> = (1..=5).map(|i| review(&format!("review {}", i))).collect();
        let details = PlaceDetails {
            reviews: Some(reviews),
            ..Default::default()
        };
        let output = render_details(plain(), &details);
        assert!(output.contains("  - review 3\n"));
        assert!(!output.contains("review 4"));
        assert!(output.ends_with("  ... 2 more\n"));
    }

    #[test]
    fn test_review_without_author_has_no_by_segment() {
        let line = review_line(&Review {
            rating: Some(5.0),
            author: None,
            ..review("Lovely")
        });
        assert_eq!(line, "5.0 stars Lovely");
    }

    #[test]
    fn test_review_text_falls_back_to_original() {
        let line = review_line(&Review {
            text: Some(LocalizedText {
                text: "   ".to_string(),
                language_code: "en".to_string(),
            }),
            original_text: Some(LocalizedText {
                text: "Sehr gut".to_string(),
                language_code: "de".to_string(),
            }),
            ..Default::default()
        });
        assert_eq!(line, "Sehr gut");
    }

    #[test]
    fn test_truncate_text() {
        let short = "a".repeat(200);
        assert_eq!(truncate_text(&short, 200), short);

        let long = "a".repeat(250);
        let cut = truncate_text(&long, 200);
        assert!(cut.len() <= 203);
        assert!(cut.ends_with("..."));

        let multibyte = "é".repeat(150);
        let cut = truncate_text(&multibyte, 200);
        assert!(cut.len() <= 203);
        assert!(cut.ends_with("..."));
        assert!(cut.trim_end_matches("...").chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_blank_lines_suppressed() {
        let mut out = String::new();
        write_line(&mut out, plain(), "Label", "  ");
        write_open_now(&mut out, plain(), None);
        write_types(&mut out, plain(), &[" ".to_string()]);
        write_amenities(&mut out, plain(), &Amenities::default());
        assert!(out.is_empty());
    }
}
