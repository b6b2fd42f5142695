// src/services/mapper.rs
// DOCUMENTATION: Wire schema -> domain model mapping
// PURPOSE: Resolve enums, parse money, collapse empty nested objects, unwrap text
//
// Every function here is total: upstream malformation was already rejected by the
// decoder, so mapping only applies business rules and never fails.

use crate::models::{
    Amenities, AuthorAttribution, AutocompleteResponse, AutocompleteSuggestion, LatLng,
    LocalizedText, LocationResolveResponse, Money, NearbySearchResponse, Photo,
    PhotoMediaResponse, PlaceDetails, PlaceSummary, PriceRange, ResolvedLocation, Review,
    ReviewVisitDate, SearchResponse,
};
use crate::wire::{
    AuthorAttributionPayload, AutocompletePayload, LocalizedTextPayload, LocationPayload,
    MoneyPayload, OpeningHoursPayload, PhotoMediaPayload, PhotoPayload, PlaceItem,
    PriceRangePayload, ReviewPayload, SearchPayload, SuggestionPayload, SummaryPayload,
    VisitDatePayload,
};

/// Closed table of upstream price-level codes
pub const PRICE_LEVELS: [(&str, i32); 5] = [
    ("PRICE_LEVEL_FREE", 0),
    ("PRICE_LEVEL_INEXPENSIVE", 1),
    ("PRICE_LEVEL_MODERATE", 2),
    ("PRICE_LEVEL_EXPENSIVE", 3),
    ("PRICE_LEVEL_VERY_EXPENSIVE", 4),
];

/// Map an upstream price-level code to a 0-4 tier
/// DOCUMENTATION: Any code outside the table (including "" and
/// PRICE_LEVEL_UNSPECIFIED) yields None
pub fn price_level_from_code(code: &str) -> Option<i32> {
    PRICE_LEVELS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, level)| *level)
}

/// Inverse of price_level_from_code, used when sending price filters
pub fn price_level_code(level: i32) -> Option<&'static str> {
    PRICE_LEVELS
        .iter()
        .find(|(_, known)| *known == level)
        .map(|(code, _)| *code)
}

// Collapse predicates: an object is "empty" when none of its meaningful leaves carry data.

pub fn localized_text_is_empty(text: &LocalizedTextPayload) -> bool {
    text.text.trim().is_empty() && text.language_code.trim().is_empty()
}

pub fn author_is_empty(author: &AuthorAttributionPayload) -> bool {
    author.display_name.trim().is_empty()
        && author.uri.trim().is_empty()
        && author.photo_uri.trim().is_empty()
}

pub fn visit_date_is_empty(date: &VisitDatePayload) -> bool {
    date.year == 0 && date.month == 0 && date.day == 0
}

/// Unwrap a text wrapper into its plain text ("" when absent)
pub fn map_text(payload: Option<&LocalizedTextPayload>) -> String {
    payload.map(|p| p.text.clone()).unwrap_or_default()
}

fn map_summary(payload: Option<&SummaryPayload>) -> String {
    map_text(payload.and_then(|s| s.overview.as_ref()))
}

pub fn map_localized_text(payload: Option<&LocalizedTextPayload>) -> Option<LocalizedText> {
    let text = payload?;
    if localized_text_is_empty(text) {
        return None;
    }
    Some(LocalizedText {
        text: text.text.clone(),
        language_code: text.language_code.clone(),
    })
}

pub fn map_author(payload: Option<&AuthorAttributionPayload>) -> Option<AuthorAttribution> {
    let author = payload?;
    if author_is_empty(author) {
        return None;
    }
    Some(AuthorAttribution {
        display_name: author.display_name.clone(),
        uri: author.uri.clone(),
        photo_uri: author.photo_uri.clone(),
    })
}

pub fn map_visit_date(payload: Option<&VisitDatePayload>) -> Option<ReviewVisitDate> {
    let date = payload?;
    if visit_date_is_empty(date) {
        return None;
    }
    Some(ReviewVisitDate {
        year: date.year,
        month: date.month,
        day: date.day,
    })
}

/// Map google.type.Money
/// DOCUMENTATION: Present iff the wire value is present. Unparseable units become 0
/// (logged) so one bad price never fails the whole response
pub fn map_money(payload: Option<&MoneyPayload>) -> Option<Money> {
    let money = payload?;
    let raw = money.units.trim();
    let units = if raw.is_empty() {
        0
    } else {
        raw.parse::<i64>().unwrap_or_else(|e| {
            log::warn!(
                "Unparseable money units {:?} ({}): substituting 0",
                money.units,
                e
            );
            0
        })
    };
    Some(Money {
        currency_code: money.currency_code.clone(),
        units,
        nanos: money.nanos,
    })
}

pub fn map_price_range(payload: Option<&PriceRangePayload>) -> Option<PriceRange> {
    let range = payload?;
    Some(PriceRange {
        start_price: map_money(range.start_price.as_ref()),
        end_price: map_money(range.end_price.as_ref()),
    })
}

pub fn map_lat_lng(payload: Option<&LocationPayload>) -> Option<LatLng> {
    payload.map(|loc| LatLng::new(loc.latitude, loc.longitude))
}

fn open_now(hours: Option<&OpeningHoursPayload>) -> Option<bool> {
    hours.and_then(|h| h.open_now)
}

fn weekday_descriptions(hours: Option<&OpeningHoursPayload>) -> Option<Vec<String>> {
    hours.map(|h| h.weekday_descriptions.clone())
}

/// Map reviews field-for-field
/// DOCUMENTATION: An empty wire list is absent, not an empty list
pub fn map_reviews(reviews: &[ReviewPayload]) -> Option<Vec<Review>> {
    if reviews.is_empty() {
        return None;
    }
    Some(
        reviews
            .iter()
            .map(|review| Review {
                name: review.name.clone(),
                relative_publish_time_description: review.relative_publish_time_description.clone(),
                text: map_localized_text(review.text.as_ref()),
                original_text: map_localized_text(review.original_text.as_ref()),
                rating: review.rating,
                author: map_author(review.author_attribution.as_ref()),
                publish_time: review.publish_time.clone(),
                flag_content_uri: review.flag_content_uri.clone(),
                google_maps_uri: review.google_maps_uri.clone(),
                visit_date: map_visit_date(review.visit_date.as_ref()),
            })
            .collect(),
    )
}

pub fn map_photos(photos: &[PhotoPayload]) -> Option<Vec<Photo>> {
    if photos.is_empty() {
        return None;
    }
    Some(
        photos
            .iter()
            .map(|photo| Photo {
                name: photo.name.clone(),
                width_px: photo.width_px,
                height_px: photo.height_px,
                author_attributions: photo
                    .author_attributions
                    .iter()
                    .filter_map(|author| map_author(Some(author)))
                    .collect(),
            })
            .collect(),
    )
}

fn map_amenities(place: &PlaceItem) -> Amenities {
    Amenities {
        serves_beer: place.serves_beer,
        serves_breakfast: place.serves_breakfast,
        serves_brunch: place.serves_brunch,
        serves_cocktails: place.serves_cocktails,
        serves_coffee: place.serves_coffee,
        serves_dessert: place.serves_dessert,
        serves_dinner: place.serves_dinner,
        serves_lunch: place.serves_lunch,
        serves_vegetarian_food: place.serves_vegetarian_food,
        serves_wine: place.serves_wine,
    }
}

pub fn map_place_summary(place: &PlaceItem) -> PlaceSummary {
    PlaceSummary {
        place_id: place.id.clone(),
        name: map_text(place.display_name.as_ref()),
        address: place.formatted_address.clone(),
        location: map_lat_lng(place.location.as_ref()),
        rating: place.rating,
        user_rating_count: place.user_rating_count,
        price_level: price_level_from_code(&place.price_level),
        types: place.types.clone(),
        open_now: open_now(place.current_opening_hours.as_ref()),
    }
}

/// Map a full place resource
/// DOCUMENTATION: Hours come from the regular opening hours, open_now from the
/// current opening hours
pub fn map_place_details(place: &PlaceItem) -> PlaceDetails {
    PlaceDetails {
        place_id: place.id.clone(),
        name: map_text(place.display_name.as_ref()),
        address: place.formatted_address.clone(),
        location: map_lat_lng(place.location.as_ref()),
        rating: place.rating,
        user_rating_count: place.user_rating_count,
        price_level: price_level_from_code(&place.price_level),
        price_range: map_price_range(place.price_range.as_ref()),
        business_status: place.business_status.clone(),
        google_maps_uri: place.google_maps_uri.clone(),
        primary_type: place.primary_type.clone(),
        primary_type_display_name: map_text(place.primary_type_display_name.as_ref()),
        editorial_summary: map_text(place.editorial_summary.as_ref()),
        generative_summary: map_summary(place.generative_summary.as_ref()),
        review_summary: map_summary(place.review_summary.as_ref()),
        types: place.types.clone(),
        phone: place.national_phone_number.clone(),
        website: place.website_uri.clone(),
        hours: weekday_descriptions(place.regular_opening_hours.as_ref()),
        open_now: open_now(place.current_opening_hours.as_ref()),
        reviews: map_reviews(&place.reviews),
        photos: map_photos(&place.photos),
        amenities: map_amenities(place),
    }
}

pub fn map_resolved_location(place: &PlaceItem) -> ResolvedLocation {
    ResolvedLocation {
        place_id: place.id.clone(),
        name: map_text(place.display_name.as_ref()),
        address: place.formatted_address.clone(),
        location: map_lat_lng(place.location.as_ref()),
        types: place.types.clone(),
    }
}

pub fn map_search_response(payload: &SearchPayload) -> SearchResponse {
    SearchResponse {
        results: payload.places.iter().map(map_place_summary).collect(),
        next_page_token: payload.next_page_token.clone(),
    }
}

pub fn map_nearby_response(payload: &SearchPayload) -> NearbySearchResponse {
    NearbySearchResponse {
        results: payload.places.iter().map(map_place_summary).collect(),
        next_page_token: payload.next_page_token.clone(),
    }
}

pub fn map_resolve_response(payload: &SearchPayload) -> LocationResolveResponse {
    LocationResolveResponse {
        results: payload.places.iter().map(map_resolved_location).collect(),
    }
}

fn map_suggestion(suggestion: &SuggestionPayload) -> Option<AutocompleteSuggestion> {
    if let Some(place) = &suggestion.place_prediction {
        let format = place.structured_format.as_ref();
        return Some(AutocompleteSuggestion {
            kind: "place".to_string(),
            place_id: place.place_id.clone(),
            place: place.place.clone(),
            text: map_text(place.text.as_ref()),
            main_text: map_text(format.and_then(|f| f.main_text.as_ref())),
            secondary_text: map_text(format.and_then(|f| f.secondary_text.as_ref())),
            types: place.types.clone(),
            distance_meters: place.distance_meters,
        });
    }

    let query = suggestion.query_prediction.as_ref()?;
    let format = query.structured_format.as_ref();
    Some(AutocompleteSuggestion {
        kind: "query".to_string(),
        text: map_text(query.text.as_ref()),
        main_text: map_text(format.and_then(|f| f.main_text.as_ref())),
        secondary_text: map_text(format.and_then(|f| f.secondary_text.as_ref())),
        ..Default::default()
    })
}

/// Map autocomplete predictions
/// DOCUMENTATION: Suggestions carrying neither a place nor a query prediction are dropped
pub fn map_autocomplete(payload: &AutocompletePayload) -> AutocompleteResponse {
    AutocompleteResponse {
        suggestions: payload.suggestions.iter().filter_map(map_suggestion).collect(),
    }
}

pub fn map_photo_media(payload: PhotoMediaPayload) -> PhotoMediaResponse {
    PhotoMediaResponse {
        name: payload.name,
        photo_uri: payload.photo_uri,
    }
}
