// Small helpers shared by the components and the engine tests

/// Label shown in the zoom controls, e.g. `1.5 -> "150%"`.
pub fn format_zoom(zoom: f64) -> String {
    format!("{}%", (zoom * 100.0).round() as i64)
}

#[cfg(test)]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_labels() {
        assert_eq!(format_zoom(1.0), "100%");
        assert_eq!(format_zoom(0.1), "10%");
        assert_eq!(format_zoom(1.234), "123%");
        assert_eq!(format_zoom(5.0), "500%");
    }

    #[test]
    fn tolerance_scales_with_magnitude() {
        assert!(approx_eq(0.1 + 0.2, 0.3));
        assert!(approx_eq(1e6 + 1e-4, 1e6));
        assert!(!approx_eq(1.0, 1.001));
    }
}
