use crate::prelude::{ProjectedPoint, ProjectedSeries};
use crate::processing::projection::ScaleConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";
const GX_NAMESPACE: &str = "http://www.google.com/kml/ext/2.2";

/// Line width used for every track style.
pub const TRACK_LINE_WIDTH: f64 = 1.5;

/// Labels and line style of the planar trail document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailStyle {
    pub document_name: String,
    pub placemark_name: String,
    pub style_id: String,
    /// KML `aabbggrr` color.
    pub color: String,
    pub width: f64,
}

impl Default for TrailStyle {
    fn default() -> Self {
        Self {
            document_name: "Voyager 1 Trajectory".into(),
            placemark_name: "Voyager 1 Path".into(),
            style_id: "yellowLine".into(),
            color: "ff00ffff".into(),
            width: 2.0,
        }
    }
}

/// Single tessellated `LineString` holding every point as `lon,lat`.
pub struct LineDocument<'a> {
    style: &'a TrailStyle,
    points: &'a [ProjectedPoint],
}

impl<'a> LineDocument<'a> {
    pub fn new(style: &'a TrailStyle, points: &'a [ProjectedPoint]) -> Self {
        Self { style, points }
    }
}

impl fmt::Display for LineDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.style;
        writeln!(f, "{}", XML_DECLARATION)?;
        writeln!(f, r#"<kml xmlns="{}">"#, KML_NAMESPACE)?;
        writeln!(f, "<Document>")?;
        writeln!(f, "  <name>{}</name>", style.document_name)?;
        writeln!(f, r#"  <Style id="{}">"#, style.style_id)?;
        writeln!(f, "    <LineStyle>")?;
        writeln!(f, "      <color>{}</color>", style.color)?;
        writeln!(f, "      <width>{}</width>", style.width)?;
        writeln!(f, "    </LineStyle>")?;
        writeln!(f, "  </Style>")?;
        writeln!(f, "  <Placemark>")?;
        writeln!(f, "    <name>{}</name>", style.placemark_name)?;
        writeln!(f, "    <styleUrl>#{}</styleUrl>", style.style_id)?;
        writeln!(f, "    <LineString>")?;
        writeln!(f, "      <tessellate>1</tessellate>")?;
        writeln!(f, "      <coordinates>")?;
        for point in self.points {
            writeln!(f, "        {:?},{:?}", point.lon, point.lat)?;
        }
        writeln!(f, "      </coordinates>")?;
        writeln!(f, "    </LineString>")?;
        writeln!(f, "  </Placemark>")?;
        writeln!(f, "</Document>")?;
        write!(f, "</kml>")
    }
}

/// One styled `gx:Track` per series. Styles are numbered `s1`, `s2`, ... in
/// series order.
pub struct TrackDocument<'a> {
    scale: &'a ScaleConfig,
    series: &'a [ProjectedSeries],
}

impl<'a> TrackDocument<'a> {
    pub fn new(scale: &'a ScaleConfig, series: &'a [ProjectedSeries]) -> Self {
        Self { scale, series }
    }

    fn style_id(index: usize) -> String {
        format!("s{}", index + 1)
    }

    fn write_track(f: &mut fmt::Formatter<'_>, series: &ProjectedSeries) -> fmt::Result {
        for (i, (time, point)) in series.times.iter().zip(&series.points).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "        <when>{}</when>", time)?;
            write!(
                f,
                "        <gx:coord>{:.9} {:.9} {:.3}</gx:coord>",
                point.lon, point.lat, point.altitude
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for TrackDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", XML_DECLARATION)?;
        writeln!(f, r#"<kml xmlns="{}""#, KML_NAMESPACE)?;
        writeln!(f, r#"     xmlns:gx="{}">"#, GX_NAMESPACE)?;
        writeln!(f, "  <Document>")?;
        writeln!(
            f,
            "    <name>Solar System Trajectories (Scale 1:{})</name>",
            self.scale.scale_denominator()
        )?;
        writeln!(
            f,
            "    <Snippet>Heliocentric positions mapped to non-geographic KML. AltitudeMode=absolute.</Snippet>"
        )?;
        writeln!(f, "    <open>1</open>")?;

        for index in 0..self.series.len() {
            writeln!(f)?;
            writeln!(f, r#"    <Style id="{}">"#, Self::style_id(index))?;
            writeln!(f, "      <LineStyle>")?;
            writeln!(f, "        <width>{}</width>", TRACK_LINE_WIDTH)?;
            writeln!(f, "      </LineStyle>")?;
            writeln!(f, "      <PolyStyle>")?;
            writeln!(f, "        <fill>0</fill>")?;
            writeln!(f, "        <outline>1</outline>")?;
            writeln!(f, "      </PolyStyle>")?;
            writeln!(f, "    </Style>")?;
        }

        for (index, series) in self.series.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "    <Placemark>")?;
            writeln!(f, "      <name>{}</name>", series.name)?;
            writeln!(f, "      <styleUrl>#{}</styleUrl>", Self::style_id(index))?;
            writeln!(f, "      <gx:Track>")?;
            Self::write_track(f, series)?;
            writeln!(f)?;
            writeln!(f, "      </gx:Track>")?;
            writeln!(f, "    </Placemark>")?;
        }

        writeln!(f, "  </Document>")?;
        writeln!(f, "</kml>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::{Projection, Sample, SampleTime, Series};
    use crate::processing::projection::SphericalProjection;

    fn series(name: &str, len: usize) -> Series {
        let samples = (0..len)
            .map(|i| {
                Sample::new(
                    SampleTime::Stamp(format!("A.D. 2000-Jan-{:02}", i + 1)),
                    1.0 + i as f64,
                    0.5,
                    -0.1,
                )
            })
            .collect();
        Series::new(name, samples)
    }

    #[test]
    fn track_document_has_one_style_and_track_per_series() {
        let scale = ScaleConfig::default();
        let projection = SphericalProjection::new(scale);
        let projected: Vec<ProjectedSeries> = [series("Voyager 1", 3), series("Voyager 2", 5)]
            .iter()
            .map(|s| ProjectedSeries::from_series(s, &projection))
            .collect();

        let kml = TrackDocument::new(&scale, &projected).to_string();

        assert_eq!(kml.matches("<Style id=").count(), 2);
        assert_eq!(kml.matches("<gx:Track>").count(), 2);
        assert!(kml.contains(r#"<Style id="s1">"#));
        assert!(kml.contains("<styleUrl>#s2</styleUrl>"));
        assert!(kml.contains("Scale 1:174000000"));

        let tracks: Vec<&str> = kml
            .split("<gx:Track>")
            .skip(1)
            .map(|rest| rest.split("</gx:Track>").next().unwrap())
            .collect();
        assert_eq!(tracks[0].matches("<gx:coord>").count(), 3);
        assert_eq!(tracks[1].matches("<gx:coord>").count(), 5);
        assert_eq!(tracks[1].matches("<when>").count(), 5);
        assert!(kml.ends_with("  </Document>\n</kml>\n"));
    }

    #[test]
    fn track_coordinates_use_fixed_precision() {
        let scale = ScaleConfig::default();
        let projected = vec![ProjectedSeries {
            name: "Earth".into(),
            times: vec![SampleTime::Index(0)],
            points: SphericalProjection::new(scale)
                .project_all(&[Sample::new(SampleTime::Index(0), 1.0, 0.0, 0.0)]),
        }];

        let kml = TrackDocument::new(&scale, &projected).to_string();
        assert!(kml.contains("        <when>0</when>\n"));
        assert!(kml.contains("<gx:coord>0.000000000 0.000000000 859.758</gx:coord>"));
    }

    #[test]
    fn track_entries_alternate_time_and_coordinate() {
        let scale = ScaleConfig::default();
        let projection = SphericalProjection::new(scale);
        let projected = vec![ProjectedSeries::from_series(&series("Ceres", 2), &projection)];
        let kml = TrackDocument::new(&scale, &projected).to_string();

        let body: Vec<&str> = kml
            .lines()
            .filter(|l| l.contains("<when>") || l.contains("<gx:coord>"))
            .collect();
        assert_eq!(body.len(), 4);
        assert!(body[0].contains("A.D. 2000-Jan-01"));
        assert!(body[1].contains("<gx:coord>"));
        assert!(body[2].contains("A.D. 2000-Jan-02"));
        assert!(body[3].contains("<gx:coord>"));
    }

    #[test]
    fn line_document_lists_lon_lat_pairs() {
        let style = TrailStyle::default();
        let points = [
            ProjectedPoint {
                lon: -57.5,
                lat: -25.25,
                altitude: 0.0,
            },
            ProjectedPoint {
                lon: -57.0,
                lat: -25.0,
                altitude: 0.0,
            },
        ];
        let kml = LineDocument::new(&style, &points).to_string();

        assert!(kml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(kml.contains("<color>ff00ffff</color>"));
        assert!(kml.contains("<width>2</width>"));
        assert!(kml.contains("<styleUrl>#yellowLine</styleUrl>"));
        assert!(kml.contains("        -57.5,-25.25\n        -57.0,-25.0\n"));
        assert!(!kml.contains("xmlns:gx"));
        assert!(kml.ends_with("</Document>\n</kml>"));
    }
}
