// src/services/places_client.rs
// DOCUMENTATION: Places API client facade
// PURPOSE: shape -> transport -> decode -> map, one method per query kind

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Url;

use crate::config::ClientConfig;
use crate::errors::PlacesError;
use crate::models::{
    AutocompleteRequest, AutocompleteResponse, DetailsRequest, LocationResolveRequest,
    LocationResolveResponse, NearbySearchRequest, NearbySearchResponse, PhotoMediaRequest,
    PhotoMediaResponse, PlaceDetails, RouteRequest, RouteResponse, RouteWaypoint, SearchRequest,
    SearchResponse,
};
use crate::services::mapper;
use crate::services::request_shaper::{shape_route, Shape, ShapedRequest};
use crate::services::transport::{CallContext, HttpRequest, ReqwestTransport, Transport};
use crate::wire::{self, AutocompletePayload, PhotoMediaPayload, PlaceItem, SearchPayload};

const API_KEY_HEADER: &str = "x-goog-api-key";
const FIELD_MASK_HEADER: &str = "x-goog-fieldmask";

/// Places API client
/// DOCUMENTATION: Holds configuration and a transport; keeps no per-call state,
/// so one instance can serve concurrent callers
pub struct PlacesClient<T: Transport = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl PlacesClient<ReqwestTransport> {
    /// Create a client backed by reqwest
    /// DOCUMENTATION: Validates configuration (API key) before building the transport
    pub fn new(config: ClientConfig) -> Result<Self, PlacesError> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> PlacesClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, PlacesError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Text search
    pub async fn search(
        &self,
        ctx: &CallContext,
        req: SearchRequest,
    ) -> Result<SearchResponse, PlacesError> {
        let mut req = req;
        self.apply_locale(&mut req.language, &mut req.region);

        let payload: SearchPayload = self.call(ctx, req.shape()?, "search response").await?;
        let response = mapper::map_search_response(&payload);
        log::info!("Places search returned {} results", response.results.len());
        Ok(response)
    }

    /// Nearby search inside a circle
    pub async fn nearby_search(
        &self,
        ctx: &CallContext,
        req: NearbySearchRequest,
    ) -> Result<NearbySearchResponse, PlacesError> {
        let mut req = req;
        self.apply_locale(&mut req.language, &mut req.region);

        let payload: SearchPayload = self.call(ctx, req.shape()?, "nearby response").await?;
        let response = mapper::map_nearby_response(&payload);
        log::info!("Places nearby search returned {} results", response.results.len());
        Ok(response)
    }

    /// Autocomplete predictions
    /// DOCUMENTATION: The suggestion list is truncated to the request limit when one is set
    pub async fn autocomplete(
        &self,
        ctx: &CallContext,
        req: AutocompleteRequest,
    ) -> Result<AutocompleteResponse, PlacesError> {
        let mut req = req;
        self.apply_locale(&mut req.language, &mut req.region);

        let payload: AutocompletePayload =
            self.call(ctx, req.shape()?, "autocomplete response").await?;
        let mut response = mapper::map_autocomplete(&payload);
        if let Some(limit) = req.limit {
            response.suggestions.truncate(limit as usize);
        }
        Ok(response)
    }

    /// Details for a place ID with the default field mask
    pub async fn details(
        &self,
        ctx: &CallContext,
        place_id: &str,
    ) -> Result<PlaceDetails, PlacesError> {
        self.details_with_options(ctx, DetailsRequest::new(place_id))
            .await
    }

    /// Details with locale hints and optional field groups
    pub async fn details_with_options(
        &self,
        ctx: &CallContext,
        req: DetailsRequest,
    ) -> Result<PlaceDetails, PlacesError> {
        let mut req = req;
        self.apply_locale(&mut req.language, &mut req.region);

        let place: PlaceItem = self.call(ctx, req.shape()?, "place details").await?;
        Ok(mapper::map_place_details(&place))
    }

    /// Resolve free text into candidate places
    pub async fn resolve(
        &self,
        ctx: &CallContext,
        req: LocationResolveRequest,
    ) -> Result<LocationResolveResponse, PlacesError> {
        let mut req = req;
        self.apply_locale(&mut req.language, &mut req.region);

        let payload: SearchPayload = self.call(ctx, req.shape()?, "resolve response").await?;
        Ok(mapper::map_resolve_response(&payload))
    }

    /// One location-biased text search per waypoint, in route order
    /// DOCUMENTATION: All waypoints are shaped (and validated) before the first call;
    /// the first failing call aborts the whole route
    pub async fn route(
        &self,
        ctx: &CallContext,
        req: RouteRequest,
    ) -> Result<RouteResponse, PlacesError> {
        let mut req = req;
        self.apply_locale(&mut req.language, &mut req.region);

        let shaped = shape_route(&req)?;
        let mut waypoints = Vec::with_capacity(shaped.len());
        for (location, request) in shaped {
            let payload: SearchPayload = self.call(ctx, request, "route search response").await?;
            waypoints.push(RouteWaypoint {
                location,
                results: mapper::map_search_response(&payload).results,
            });
        }

        log::info!("Places route search covered {} waypoints", waypoints.len());
        Ok(RouteResponse { waypoints })
    }

    /// Resolve a photo resource name to a media URI
    pub async fn photo_media(
        &self,
        ctx: &CallContext,
        req: PhotoMediaRequest,
    ) -> Result<PhotoMediaResponse, PlacesError> {
        let payload: PhotoMediaPayload =
            self.call(ctx, req.shape()?, "photo media response").await?;
        Ok(mapper::map_photo_media(payload))
    }

    fn apply_locale(&self, language: &mut String, region: &mut String) {
        if language.trim().is_empty() {
            *language = self.config.language.clone();
        }
        if region.trim().is_empty() {
            *region = self.config.region.clone();
        }
    }

    async fn call<W: serde::de::DeserializeOwned>(
        &self,
        ctx: &CallContext,
        shaped: ShapedRequest,
        entity: &'static str,
    ) -> Result<W, PlacesError> {
        let request = self.build_request(shaped)?;
        log::debug!("Places API {} {}", request.method, request.url.path());

        let bytes = self.transport.execute(ctx, request).await?;
        wire::decode(&bytes, entity)
    }

    /// Join base URL, path and query; attach credentials, field mask and body
    pub fn build_request(&self, shaped: ShapedRequest) -> Result<HttpRequest, PlacesError> {
        let base = self.config.base_url.trim_end_matches('/');
        let raw = format!("{}{}", base, shaped.path);
        let url = if shaped.query.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, &shaped.query)
        }
        .map_err(|e| PlacesError::InvalidUrl(format!("{}: {}", raw, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            header_value(self.config.api_key.trim())?,
        );
        if let Some(mask) = shaped.field_mask.as_deref().filter(|m| !m.is_empty()) {
            log::debug!("Places API field mask: {}", mask);
            headers.insert(HeaderName::from_static(FIELD_MASK_HEADER), header_value(mask)?);
        }

        let body = match shaped.body {
            Some(value) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(value.to_string().into_bytes())
            }
            None => None,
        };

        Ok(HttpRequest {
            method: shaped.method,
            url,
            headers,
            body,
        })
    }
}

fn header_value(value: &str) -> Result<HeaderValue, PlacesError> {
    HeaderValue::from_str(value)
        .map_err(|e| PlacesError::invalid("header", format!("invalid header value: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FieldGroup, LatLng, LocationBias};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tokio_test::{assert_err, assert_ok};

    /// Returns canned responses in order and records every request
    struct FakeTransport {
        responses: Mutex<VecDeque<Result<Vec<u8>, PlacesError>>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl FakeTransport {
        fn new(responses: Vec<Result<Vec<u8>, PlacesError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for FakeTransport {
        async fn execute(
            &self,
            _ctx: &CallContext,
            request: HttpRequest,
        ) -> Result<Vec<u8>, PlacesError> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(b"{}".to_vec()))
        }
    }

    fn client(responses: Vec<Result<Vec<u8>, PlacesError>>) -> PlacesClient<FakeTransport> {
        let mut config = ClientConfig::new("test-key");
        config.base_url = "https://places.example.com/v1/".to_string();
        PlacesClient::with_transport(config, FakeTransport::new(responses)).unwrap()
    }

    #[test]
    fn test_client_requires_api_key() {
        let result = PlacesClient::with_transport(ClientConfig::default(), FakeTransport::new(vec![]));
        assert!(matches!(result, Err(PlacesError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_details_request_and_mapping() {
        let body = br#"{"id": "abc", "displayName": {"text": "Cafe"}, "priceLevel": "PRICE_LEVEL_EXPENSIVE",
            "reviews": [{"rating": 4, "authorAttribution": {"displayName": "Ann"}}]}"#;
        let client = client(vec![Ok(body.to_vec())]);

        let req = DetailsRequest {
            place_id: "abc".to_string(),
            language: "en".to_string(),
            field_groups: vec![FieldGroup::Reviews],
            ..Default::default()
        };
        let details = assert_ok!(client.details_with_options(&CallContext::new(), req).await);
        assert_eq!(details.name, "Cafe");
        assert_eq!(details.price_level, Some(3));
        assert_eq!(details.reviews.as_ref().map(|r| r.len()), Some(1));

        let requests = client.transport.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, reqwest::Method::GET);
        assert_eq!(
            request.url.as_str(),
            "https://places.example.com/v1/places/abc?languageCode=en"
        );
        assert_eq!(request.headers[API_KEY_HEADER], "test-key");
        let mask = request.headers[FIELD_MASK_HEADER].to_str().unwrap();
        assert!(mask.ends_with(",servesWine,reviews"));
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_validation_never_reaches_transport() {
        let client = client(vec![]);
        let err = assert_err!(client.details(&CallContext::new(), "  ").await);
        assert!(matches!(err, PlacesError::Validation { ref field, .. } if field == "place_id"));
        assert!(client.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_passes_through() {
        let client = client(vec![Err(PlacesError::Upstream {
            status: 403,
            body: "denied".to_string(),
        })]);
        let err = assert_err!(
            client
                .search(&CallContext::new(), SearchRequest::new("coffee"))
                .await
        );
        assert!(matches!(err, PlacesError::Upstream { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_decode_failure_is_fatal() {
        let client = client(vec![Ok(br#"{"places": "nope"}"#.to_vec())]);
        let err = assert_err!(
            client
                .search(&CallContext::new(), SearchRequest::new("coffee"))
                .await
        );
        assert!(matches!(err, PlacesError::Decode { entity: "search response", .. }));
    }

    #[tokio::test]
    async fn test_search_applies_config_locale_and_body() {
        let mut config = ClientConfig::new("test-key");
        config.language = "de".to_string();
        let body = br#"{"places": [{"id": "a", "displayName": {"text": "Cafe"}}], "nextPageToken": "next"}"#;
        let client =
            PlacesClient::with_transport(config, FakeTransport::new(vec![Ok(body.to_vec())]))
                .unwrap();

        let response = assert_ok!(
            client
                .search(&CallContext::new(), SearchRequest::new("coffee"))
                .await
        );
        assert_eq!(response.results[0].name, "Cafe");
        assert_eq!(response.next_page_token, "next");

        let request = &client.transport.requests()[0];
        assert_eq!(request.method, reqwest::Method::POST);
        assert_eq!(request.url.path(), "/v1/places:searchText");
        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
        let sent: serde_json::Value =
            serde_json::from_slice(request.body.as_ref().unwrap()).unwrap();
        assert_eq!(sent["textQuery"], "coffee");
        assert_eq!(sent["languageCode"], "de");
    }

    #[tokio::test]
    async fn test_autocomplete_truncates_to_limit() {
        let body = br#"{"suggestions": [
            {"queryPrediction": {"text": {"text": "a"}}},
            {"queryPrediction": {"text": {"text": "b"}}},
            {"queryPrediction": {"text": {"text": "c"}}}
        ]}"#;
        let client = client(vec![Ok(body.to_vec())]);
        let mut req = AutocompleteRequest::new("caf");
        req.limit = Some(2);
        let response = assert_ok!(client.autocomplete(&CallContext::new(), req).await);
        assert_eq!(response.suggestions.len(), 2);

        let request = &client.transport.requests()[0];
        assert!(request.headers.get(FIELD_MASK_HEADER).is_none());
    }

    #[tokio::test]
    async fn test_route_runs_one_search_per_waypoint() {
        let first = br#"{"places": [{"id": "a"}]}"#.to_vec();
        let client = client(vec![Ok(first), Ok(b"{}".to_vec())]);

        let req = RouteRequest {
            query: "coffee".to_string(),
            waypoints: vec![LatLng::new(1.0, 2.0), LatLng::new(3.0, 4.0)],
            radius_m: 1000.0,
            ..Default::default()
        };
        let response = assert_ok!(client.route(&CallContext::new(), req).await);
        assert_eq!(response.waypoints.len(), 2);
        assert_eq!(response.waypoints[0].results.len(), 1);
        assert!(response.waypoints[1].results.is_empty());
        assert_eq!(response.waypoints[1].location, LatLng::new(3.0, 4.0));
        assert_eq!(client.transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_nearby_and_resolve() {
        let client = client(vec![
            Ok(br#"{"places": [{"id": "n"}]}"#.to_vec()),
            Ok(br#"{"places": [{"id": "r", "types": ["locality"]}]}"#.to_vec()),
        ]);

        let nearby = NearbySearchRequest {
            location_restriction: Some(LocationBias {
                lat: 1.0,
                lng: 2.0,
                radius_m: 500.0,
            }),
            ..Default::default()
        };
        let response = assert_ok!(client.nearby_search(&CallContext::new(), nearby).await);
        assert_eq!(response.results[0].place_id, "n");

        let resolve = LocationResolveRequest {
            location_text: "Seattle".to_string(),
            ..Default::default()
        };
        let resolved = assert_ok!(client.resolve(&CallContext::new(), resolve).await);
        assert_eq!(resolved.results[0].types, vec!["locality"]);
    }

    #[tokio::test]
    async fn test_photo_media() {
        let client = client(vec![Ok(
            br#"{"name": "places/a/photos/p/media", "photoUri": "https://img"}"#.to_vec(),
        )]);
        let mut req = PhotoMediaRequest::new("places/a/photos/p");
        req.max_height_px = 300;
        let response = assert_ok!(client.photo_media(&CallContext::new(), req).await);
        assert_eq!(response.photo_uri, "https://img");

        let request = &client.transport.requests()[0];
        assert_eq!(
            request.url.as_str(),
            "https://places.example.com/v1/places/a/photos/p/media?skipHttpRedirect=true&maxHeightPx=300"
        );
        assert!(request.headers.get(FIELD_MASK_HEADER).is_none());
    }
}
