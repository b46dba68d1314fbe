//! Zoom factor bounds and the control mappings used by the transport bar.

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 65_536.0;

/// The zoom slider moves over `log2(zoom)`.
pub const ZOOM_SLIDER_MIN: f64 = 0.0;
pub const ZOOM_SLIDER_MAX: f64 = 16.0;
pub const ZOOM_SLIDER_STEP: f64 = 0.1;

pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return MIN_ZOOM;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

pub fn zoom_in(zoom: f64) -> f64 {
    clamp_zoom(zoom * 2.0)
}

pub fn zoom_out(zoom: f64) -> f64 {
    clamp_zoom(zoom / 2.0)
}

pub fn zoom_to_slider(zoom: f64) -> f64 {
    clamp_zoom(zoom).log2()
}

pub fn slider_to_zoom(value: f64) -> f64 {
    clamp_zoom(value.clamp(ZOOM_SLIDER_MIN, ZOOM_SLIDER_MAX).exp2())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_steps_double_and_halve() {
        assert_eq!(zoom_in(1.0), 2.0);
        assert_eq!(zoom_out(8.0), 4.0);
        assert_eq!(zoom_in(MAX_ZOOM), MAX_ZOOM);
        assert_eq!(zoom_out(MIN_ZOOM), MIN_ZOOM);
    }

    #[test]
    fn test_clamp_zoom() {
        assert_eq!(clamp_zoom(0.0), MIN_ZOOM);
        assert_eq!(clamp_zoom(1e9), MAX_ZOOM);
        assert_eq!(clamp_zoom(f64::NAN), MIN_ZOOM);
        assert_eq!(clamp_zoom(300.0), 300.0);
    }

    #[test]
    fn test_slider_mapping() {
        assert_eq!(slider_to_zoom(0.0), 1.0);
        assert_eq!(slider_to_zoom(16.0), 65_536.0);
        assert_eq!(slider_to_zoom(40.0), 65_536.0);
        assert_eq!(zoom_to_slider(1024.0), 10.0);
        let round_trip = slider_to_zoom(zoom_to_slider(300.0));
        assert!((round_trip - 300.0).abs() < 1e-9);
    }
}
