// src/main.rs
// DOCUMENTATION: Command line entry point
// PURPOSE: Load config, initialize logging, run one Places call and print the result

use std::io::IsTerminal;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;

use places_client::models::{
    to_feature_collection, AutocompleteRequest, DetailsRequest, Filters, LatLng, LocationBias,
    LocationResolveRequest, NearbySearchRequest, PhotoMediaRequest, RouteRequest, SearchRequest,
};
use places_client::render::{self, Color};
use places_client::{CallContext, ClientConfig, PlacesClient};

/// Google Places search from the command line
#[derive(Parser, Debug)]
#[command(name = "places")]
#[command(version)]
#[command(about = "Search, inspect and resolve places with the Places API", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Google Places API key
    #[arg(long, global = true, env = "GOOGLE_PLACES_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Places API base URL
    #[arg(long, global = true, env = "GOOGLE_PLACES_BASE_URL")]
    base_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, global = true, env = "PLACES_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Default language code for requests
    #[arg(long, global = true, env = "PLACES_LANGUAGE")]
    language: Option<String>,

    /// Default region code for requests
    #[arg(long, global = true, env = "PLACES_REGION")]
    region: Option<String>,

    /// Output JSON
    #[arg(long, global = true, conflicts_with = "geojson")]
    json: bool,

    /// Output search results as a GeoJSON FeatureCollection
    #[arg(long, global = true)]
    geojson: bool,

    /// Disable color output
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search places by text query
    Search(SearchArgs),

    /// Search places inside a circle
    #[command(allow_negative_numbers = true)]
    Nearby {
        /// Latitude of the circle center
        lat: f64,
        /// Longitude of the circle center
        lng: f64,
        /// Radius in meters (1-50000)
        radius_m: f64,
        /// Included place type. Repeatable
        #[arg(long = "type")]
        types: Vec<String>,
        /// Excluded place type. Repeatable
        #[arg(long = "exclude-type")]
        exclude_types: Vec<String>,
        /// Max results (1-20)
        #[arg(long)]
        limit: Option<u32>,
        /// POPULARITY or DISTANCE
        #[arg(long)]
        rank: Option<String>,
    },

    /// Autocomplete partial input
    Autocomplete {
        /// Partial text
        input: String,
        /// Max suggestions (1-20)
        #[arg(long)]
        limit: Option<u32>,
        /// Primary type filter. Repeatable
        #[arg(long = "type")]
        types: Vec<String>,
        /// Session token; a new UUID is minted when omitted
        #[arg(long)]
        session_token: Option<String>,
        #[command(flatten)]
        bias: BiasArgs,
    },

    /// Fetch place details by place ID
    Details {
        /// Place ID
        place_id: String,
        /// Include reviews
        #[arg(long)]
        reviews: bool,
        /// Include photos
        #[arg(long)]
        photos: bool,
    },

    /// Resolve a location string to candidate places
    Resolve {
        /// Location text to resolve
        location: String,
        /// Max results (1-10)
        #[arg(long, default_value_t = 5)]
        limit: u32,
    },

    /// Search around each waypoint of a route
    #[command(allow_negative_numbers = true)]
    Route {
        /// Search text
        query: String,
        /// Waypoints as lat,lng
        #[arg(required = true, allow_hyphen_values = true)]
        waypoints: Vec<String>,
        /// Search radius around each waypoint in meters
        #[arg(long, default_value_t = 1000.0)]
        radius_m: f64,
        /// Max results per waypoint (1-20)
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Resolve a photo resource name to a media URI
    Photo {
        /// Photo resource name (places/.../photos/...)
        name: String,
        /// Max width in pixels
        #[arg(long, default_value_t = 0)]
        max_width: i32,
        /// Max height in pixels
        #[arg(long, default_value_t = 0)]
        max_height: i32,
    },
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Search text
    query: String,
    /// Max results (1-20)
    #[arg(long, default_value_t = 10)]
    limit: u32,
    /// Page token for pagination
    #[arg(long)]
    page_token: Option<String>,
    /// Keyword to append to the query
    #[arg(long)]
    keyword: Option<String>,
    /// Place type filter (includedType). Repeatable
    #[arg(long = "type")]
    types: Vec<String>,
    /// Return only currently open places
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    open_now: Option<bool>,
    /// Minimum rating (0-5)
    #[arg(long)]
    min_rating: Option<f64>,
    /// Price levels 0-4. Repeatable
    #[arg(long = "price-level")]
    price_levels: Vec<i32>,
    #[command(flatten)]
    bias: BiasArgs,
}

#[derive(Args, Debug, Default)]
struct BiasArgs {
    /// Latitude for location bias
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude for location bias
    #[arg(long, allow_hyphen_values = true)]
    lng: Option<f64>,
    /// Radius in meters for location bias
    #[arg(long)]
    radius_m: Option<f64>,
}

impl BiasArgs {
    /// All three values or none
    fn location_bias(&self) -> Result<Option<LocationBias>> {
        match (self.lat, self.lng, self.radius_m) {
            (None, None, None) => Ok(None),
            (Some(lat), Some(lng), Some(radius_m)) => {
                Ok(Some(LocationBias::new(LatLng::new(lat, lng), radius_m)))
            }
            _ => bail!("--lat, --lng and --radius-m must be set together"),
        }
    }
}

impl SearchArgs {
    fn into_request(self) -> Result<SearchRequest> {
        let location_bias = self.bias.location_bias()?;
        let keyword = self.keyword.unwrap_or_default();
        let has_filters = !keyword.trim().is_empty()
            || !self.types.is_empty()
            || self.open_now.is_some()
            || self.min_rating.is_some()
            || !self.price_levels.is_empty();

        let filters = has_filters.then(|| Filters {
            keyword,
            types: self.types,
            open_now: self.open_now,
            min_rating: self.min_rating,
            price_levels: self.price_levels,
        });

        Ok(SearchRequest {
            query: self.query,
            filters,
            location_bias,
            limit: Some(self.limit),
            page_token: self.page_token.unwrap_or_default(),
            ..Default::default()
        })
    }
}

impl GlobalArgs {
    /// Flags override whatever ClientConfig::from_env found
    fn apply(&self, config: &mut ClientConfig) {
        if let Some(key) = &self.api_key {
            config.api_key = key.clone();
        }
        if let Some(url) = self.base_url.as_ref().filter(|u| !u.trim().is_empty()) {
            config.base_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(language) = &self.language {
            config.language = language.clone();
        }
        if let Some(region) = &self.region {
            config.region = region.clone();
        }
        if self.verbose {
            config.log_level = "debug".to_string();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load environment variables (before parsing so env fallbacks see .env)
    dotenv().ok();

    // 2. Parse arguments and load configuration
    let cli = Cli::parse();
    let mut config = ClientConfig::from_env();
    cli.global.apply(&mut config);

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() || cli.global.verbose {
        std::env::set_var("RUST_LOG", &config.log_level);
    }
    env_logger::init();

    let color = Color::detect(cli.global.no_color || !std::io::stdout().is_terminal());
    let client = PlacesClient::new(config.clone()).context("Configuration error")?;
    let ctx = CallContext::with_timeout(config.timeout());
    let json = cli.global.json;
    let geojson = cli.global.geojson;

    // 4. Run the command
    let output = match cli.command {
        Commands::Search(args) => {
            let response = client.search(&ctx, args.into_request()?).await?;
            if geojson {
                to_feature_collection(&response.results).to_string()
            } else if json {
                serde_json::to_string_pretty(&response)?
            } else {
                render::render_search(color, &response)
            }
        }
        Commands::Nearby {
            lat,
            lng,
            radius_m,
            types,
            exclude_types,
            limit,
            rank,
        } => {
            let req = NearbySearchRequest {
                location_restriction: Some(LocationBias::new(LatLng::new(lat, lng), radius_m)),
                included_types: types,
                excluded_types: exclude_types,
                limit,
                rank_preference: rank.unwrap_or_default(),
                ..Default::default()
            };
            let response = client.nearby_search(&ctx, req).await?;
            if geojson {
                to_feature_collection(&response.results).to_string()
            } else if json {
                serde_json::to_string_pretty(&response)?
            } else {
                render::render_nearby(color, &response)
            }
        }
        Commands::Autocomplete {
            input,
            limit,
            types,
            session_token,
            bias,
        } => {
            let mut req = AutocompleteRequest::new(input);
            req = match session_token {
                Some(token) => AutocompleteRequest {
                    session_token: token,
                    ..req
                },
                None => req.with_new_session(),
            };
            req.limit = limit;
            req.types = types;
            req.location_bias = bias.location_bias()?;
            let response = client.autocomplete(&ctx, req).await?;
            if json {
                serde_json::to_string_pretty(&response)?
            } else {
                render::render_autocomplete(color, &response)
            }
        }
        Commands::Details {
            place_id,
            reviews,
            photos,
        } => {
            let mut req = DetailsRequest::new(place_id);
            if reviews {
                req = req.with_reviews();
            }
            if photos {
                req = req.with_photos();
            }
            let place = client.details_with_options(&ctx, req).await?;
            if json {
                serde_json::to_string_pretty(&place)?
            } else {
                render::render_details(color, &place)
            }
        }
        Commands::Resolve { location, limit } => {
            let req = LocationResolveRequest {
                location_text: location,
                limit: Some(limit),
                ..Default::default()
            };
            let response = client.resolve(&ctx, req).await?;
            if json {
                serde_json::to_string_pretty(&response)?
            } else {
                render::render_resolve(color, &response)
            }
        }
        Commands::Route {
            query,
            waypoints,
            radius_m,
            limit,
        } => {
            let waypoints = waypoints
                .iter()
                .map(|p| parse_lat_lng(p))
                .collect::<Result<Vec<_>>>()?;
            let req = RouteRequest {
                query,
                waypoints,
                radius_m,
                limit,
                ..Default::default()
            };
            let response = client.route(&ctx, req).await?;
            if json {
                serde_json::to_string_pretty(&response)?
            } else {
                render::render_route(color, &response)
            }
        }
        Commands::Photo {
            name,
            max_width,
            max_height,
        } => {
            let req = PhotoMediaRequest {
                name,
                max_width_px: max_width,
                max_height_px: max_height,
            };
            let response = client.photo_media(&ctx, req).await?;
            serde_json::to_string_pretty(&response)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn parse_f64(value: &str) -> Result<f64> {
    value
        .trim()
        .parse()
        .with_context(|| format!("invalid number '{}'", value))
}

fn parse_lat_lng(value: &str) -> Result<LatLng> {
    let Some((lat, lng)) = value.split_once(',') else {
        bail!("invalid waypoint '{}', expected lat,lng", value);
    };
    Ok(LatLng::new(parse_f64(lat)?, parse_f64(lng)?))
}
