use crate::color::Rgb;
use crate::error::Result;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded latitude band table for the reference map.
///
/// Columns: name, southern latitude, northern latitude, display color.
pub static REGIONS_CSV: &str = "\
NAME,LAT_MIN,LAT_MAX,COLOR
Polar (N),66.5,90,blue
High-Latitudes (N),55,66.5,purple
Mid-Latitudes (N),23.5,55,green
Tropics,-23.5,23.5,orange
Mid-Latitudes (S),-55,-23.5,green
High-Latitudes (S),-66.5,-55,purple
Polar (S),-90,-66.5,blue
";

/// A latitude band drawn on the reference map.
///
/// Region definitions only decorate the map; data columns are selected by
/// name from the observation table.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct RegionDefinition {
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "LAT_MIN")]
    pub lat_min: f64,
    #[serde(rename = "LAT_MAX")]
    pub lat_max: f64,
    #[serde(rename = "COLOR")]
    pub color: Rgb,
}

impl RegionDefinition {
    /// The seven default latitude bands, north to south.
    pub fn default_regions() -> Result<Vec<RegionDefinition>> {
        RegionDefinition::parse_region_csv(REGIONS_CSV)
    }

    /// Parse a CSV string of region definitions.
    ///
    /// Expected CSV columns: NAME, LAT_MIN, LAT_MAX, COLOR
    pub fn parse_region_csv(csv_object: &str) -> Result<Vec<RegionDefinition>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_object.as_bytes());
        let regions = rdr
            .deserialize()
            .collect::<std::result::Result<Vec<RegionDefinition>, _>>()?;
        Ok(regions)
    }

    /// Latitude interval as text, e.g. "66.5˚N - 90˚N".
    pub fn lat_label(&self) -> String {
        format!(
            "{} - {}",
            format_latitude(self.lat_min),
            format_latitude(self.lat_max)
        )
    }

    /// Map annotation: the first word of the name with the latitude interval,
    /// e.g. "Polar (66.5˚N - 90˚N)".
    pub fn map_label(&self) -> String {
        let short_name = self.name.split(' ').next().unwrap_or(&self.name);
        format!("{} ({})", short_name, self.lat_label())
    }

    /// Latitude at the middle of the band, where the label is placed.
    pub fn mid_latitude(&self) -> f64 {
        (self.lat_min + self.lat_max) / 2.0
    }
}

fn format_latitude(lat: f64) -> String {
    let hemisphere = if lat >= 0.0 { 'N' } else { 'S' };
    format!("{}˚{}", lat.abs(), hemisphere)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_regions_cover_the_globe() {
        let regions = RegionDefinition::default_regions().unwrap();
        assert_eq!(regions.len(), 7);
        assert_eq!(regions[0].name, "Polar (N)");
        assert_eq!(regions[0].color, Rgb::BLUE);
        assert_eq!(regions[6].lat_min, -90.0);
        // bands are contiguous from north to south
        for pair in regions.windows(2) {
            assert_eq!(pair[0].lat_min, pair[1].lat_max, "{} / {}", pair[0].name, pair[1].name);
        }
    }

    #[test]
    fn labels_use_both_bounds() {
        let regions = RegionDefinition::default_regions().unwrap();
        assert_eq!(regions[0].lat_label(), "66.5˚N - 90˚N");
        assert_eq!(regions[3].lat_label(), "23.5˚S - 23.5˚N");
        assert_eq!(regions[5].lat_label(), "66.5˚S - 55˚S");
        assert_eq!(regions[1].map_label(), "High-Latitudes (55˚N - 66.5˚N)");
        assert_eq!(regions[3].map_label(), "Tropics (23.5˚S - 23.5˚N)");
    }

    #[test]
    fn custom_region_csv() {
        let csv = "NAME,LAT_MIN,LAT_MAX,COLOR\nArctic,70,90,#00FFFF\n";
        let regions = RegionDefinition::parse_region_csv(csv).unwrap();
        assert_eq!(regions[0].color, Rgb(0, 255, 255));
        assert_eq!(regions[0].mid_latitude(), 80.0);
    }
}
