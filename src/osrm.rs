//! OSRM HTTP adapter for drawable route geometries.

use serde::Deserialize;
use tracing::warn;

use crate::coordinate::Coordinate;
use crate::error::RouteError;
use crate::polyline::Polyline;
use crate::traits::RouteGeometryProvider;

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, RouteError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn route_url(&self, waypoints: &[Coordinate]) -> String {
        let coords = waypoints
            .iter()
            .map(|point| format!("{:.6},{:.6}", point.lng, point.lat))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            coords
        )
    }
}

impl RouteGeometryProvider for OsrmClient {
    fn route_for(&self, waypoints: &[Coordinate]) -> Result<Polyline, RouteError> {
        if waypoints.len() < 2 {
            return Ok(Polyline::default());
        }

        let url = self.route_url(waypoints);
        let body = self
            .client
            .get(&url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<OsrmRouteResponse>())
            .map_err(|err| {
                warn!(error = %err, "OSRM route request failed");
                RouteError::Http(err)
            })?;

        body.into_polyline()
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

impl OsrmRouteResponse {
    fn into_polyline(self) -> Result<Polyline, RouteError> {
        if self.code != "Ok" {
            let detail = self.message.unwrap_or(self.code);
            warn!(detail = %detail, "OSRM returned no route");
            return Err(RouteError::NoRoute(detail));
        }

        self.routes
            .into_iter()
            .next()
            .map(|route| Polyline::from_lng_lat(&route.geometry.coordinates))
            .ok_or_else(|| RouteError::NoRoute("response contained no routes".to_string()))
    }
}
