//! The heat renderer: fetch, paint, reframe.

use safe_commute_incident_models::{CrimeDataEnvelope, Incident};

use crate::geometry::{BoundingBox, CircleMarker, HeatPoint};
use crate::surface::{HeatOverlayConfig, MapConfig, MapSurface};

/// Errors that can occur while loading the crime endpoint.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Transport failure or response body that decoded as neither
    /// envelope shape.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The crime endpoint answered with a non-2xx status.
    #[error("crime endpoint returned status {status}")]
    Status {
        /// The HTTP status code.
        status: reqwest::StatusCode,
    },
}

/// Render lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// Nothing loaded yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last load painted successfully.
    Rendered,
    /// The last load failed; layers hold their prior state.
    Failed,
}

/// Owns the map surface and paints incident sets onto it.
pub struct HeatRenderer<S: MapSurface> {
    surface: S,
    endpoint: String,
    http: reqwest::Client,
    state: RenderState,
}

impl<S: MapSurface> HeatRenderer<S> {
    /// Takes ownership of the surface and applies the fixed map and heat
    /// overlay parameters to it.
    pub fn new(mut surface: S, endpoint: impl Into<String>, http: reqwest::Client) -> Self {
        surface.configure(&MapConfig::default(), &HeatOverlayConfig::default());
        Self {
            surface,
            endpoint: endpoint.into(),
            http,
            state: RenderState::Idle,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> RenderState {
        self.state
    }

    /// Read access to the owned surface.
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Releases the surface on teardown.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Fetches the crime endpoint and repaints.
    ///
    /// The single suspension point is the fetch. Failures are logged and
    /// leave the layers untouched. `&mut self` serializes overlapping
    /// calls, so the later invocation's paint always lands last.
    pub async fn load(&mut self) {
        self.state = RenderState::Loading;
        match self.fetch().await {
            Ok(incidents) => self.render(&incidents),
            Err(e) => {
                log::error!("Failed to load crime data: {e}");
                self.state = RenderState::Failed;
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<Incident>, LoadError> {
        let response = self.http.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status { status });
        }
        let envelope: CrimeDataEnvelope = response.json().await?;
        Ok(envelope.into_incidents())
    }

    /// Paints an incident set: heat points in one assignment, one circle
    /// marker per incident, then a viewport fit when non-empty.
    /// Idempotent for a given input.
    pub fn render(&mut self, incidents: &[Incident]) {
        let points: Vec<HeatPoint> = incidents.iter().map(HeatPoint::from).collect();
        self.surface.set_heat_points(points);

        self.surface.clear_markers();
        for incident in incidents {
            self.surface.add_marker(CircleMarker::for_incident(incident));
        }

        if let Some(bounds) =
            BoundingBox::from_points(incidents.iter().map(|i| (i.latitude, i.longitude)))
        {
            self.surface.fit_bounds(bounds);
        }

        self.state = RenderState::Rendered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safe_commute_incident_models::Severity;

    /// Records every surface command for assertions.
    #[derive(Debug, Default)]
    struct RecordingSurface {
        configured: bool,
        heat_points: Vec<HeatPoint>,
        heat_assignments: usize,
        markers: Vec<CircleMarker>,
        fitted_bounds: Vec<BoundingBox>,
    }

    impl MapSurface for RecordingSurface {
        fn configure(&mut self, map: &MapConfig, heat: &HeatOverlayConfig) {
            assert_eq!(map.zoom, 12);
            assert!((heat.radius - 20.0).abs() < f64::EPSILON);
            self.configured = true;
        }

        fn set_heat_points(&mut self, points: Vec<HeatPoint>) {
            self.heat_points = points;
            self.heat_assignments += 1;
        }

        fn clear_markers(&mut self) {
            self.markers.clear();
        }

        fn add_marker(&mut self, marker: CircleMarker) {
            self.markers.push(marker);
        }

        fn fit_bounds(&mut self, bounds: BoundingBox) {
            self.fitted_bounds.push(bounds);
        }
    }

    fn renderer() -> HeatRenderer<RecordingSurface> {
        HeatRenderer::new(
            RecordingSurface::default(),
            "http://localhost:3000/api/crime-data",
            reqwest::Client::new(),
        )
    }

    fn incident(latitude: f64, longitude: f64, severity: Severity) -> Incident {
        Incident {
            latitude,
            longitude,
            severity,
        }
    }

    #[test]
    fn construction_configures_the_surface() {
        let renderer = renderer();
        assert!(renderer.surface().configured);
        assert_eq!(renderer.state(), RenderState::Idle);
    }

    #[test]
    fn empty_set_leaves_layers_empty_and_viewport_unchanged() {
        let mut renderer = renderer();
        renderer.render(&[]);
        let surface = renderer.surface();
        assert!(surface.heat_points.is_empty());
        assert!(surface.markers.is_empty());
        assert!(surface.fitted_bounds.is_empty());
    }

    #[test]
    fn single_felony_renders_one_red_marker_at_full_intensity() {
        let mut renderer = renderer();
        renderer.render(&[incident(40.7831, -73.9712, Severity::Felony)]);

        let surface = renderer.surface();
        assert_eq!(surface.heat_points.len(), 1);
        assert!((surface.heat_points[0].intensity - 1.0).abs() < f64::EPSILON);

        assert_eq!(surface.markers.len(), 1);
        assert_eq!(surface.markers[0].color, "#ff0000");

        // Degenerate box around the single point.
        assert_eq!(
            surface.fitted_bounds.last().copied().unwrap(),
            BoundingBox::new(-73.9712, 40.7831, -73.9712, 40.7831)
        );
        assert_eq!(renderer.state(), RenderState::Rendered);
    }

    #[test]
    fn render_is_idempotent() {
        let incidents = vec![
            incident(40.70, -74.01, Severity::Felony),
            incident(40.80, -73.95, Severity::Violation),
        ];
        let mut renderer = renderer();
        renderer.render(&incidents);
        let first_points = renderer.surface().heat_points.clone();
        let first_markers = renderer.surface().markers.clone();
        let first_bounds = renderer.surface().fitted_bounds.last().copied();

        renderer.render(&incidents);
        let surface = renderer.surface();
        assert_eq!(surface.heat_points, first_points);
        assert_eq!(surface.markers, first_markers);
        assert_eq!(surface.fitted_bounds.last().copied(), first_bounds);
    }

    #[test]
    fn heat_layer_is_replaced_in_one_assignment_per_render() {
        let mut renderer = renderer();
        renderer.render(&[incident(40.78, -73.97, Severity::Misdemeanor)]);
        assert_eq!(renderer.surface().heat_assignments, 1);
        renderer.render(&[]);
        assert_eq!(renderer.surface().heat_assignments, 2);
    }

    #[tokio::test]
    async fn failed_load_keeps_prior_layer_state() {
        let mut renderer = HeatRenderer::new(
            RecordingSurface::default(),
            // Port 1 is never listening; the fetch fails at connect.
            "http://127.0.0.1:1/api/crime-data",
            reqwest::Client::new(),
        );
        renderer.render(&[incident(40.7831, -73.9712, Severity::Felony)]);
        let heat_points = renderer.surface().heat_points.clone();
        let markers = renderer.surface().markers.clone();
        let fitted_bounds = renderer.surface().fitted_bounds.clone();

        renderer.load().await;

        assert_eq!(renderer.state(), RenderState::Failed);
        let surface = renderer.surface();
        assert_eq!(surface.heat_points, heat_points);
        assert_eq!(surface.markers, markers);
        assert_eq!(surface.fitted_bounds, fitted_bounds);
    }

    #[test]
    fn markers_follow_incident_order() {
        let mut renderer = renderer();
        renderer.render(&[
            incident(40.70, -74.01, Severity::Felony),
            incident(40.80, -73.95, Severity::Other("SUMMONS".to_string())),
        ]);
        let surface = renderer.surface();
        assert_eq!(surface.markers[0].color, "#ff0000");
        assert_eq!(surface.markers[1].color, "#808080");
        assert!(surface.markers[1].popup_html.starts_with("Type: SUMMONS<br>"));
    }
}
