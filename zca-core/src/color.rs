use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color, written as "#RRGGBB".
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const GREY: Rgb = Rgb(128, 128, 128);
    pub const LIGHT_GREY: Rgb = Rgb(211, 211, 211);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const PURPLE: Rgb = Rgb(128, 0, 128);
    pub const GREEN: Rgb = Rgb(0, 128, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Rgb {
    type Err = String;

    /// Accepts "#RRGGBB" or one of the named colors used by the region table.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "orange" => return Ok(Rgb::ORANGE),
            "black" => return Ok(Rgb::BLACK),
            "grey" | "gray" => return Ok(Rgb::GREY),
            "lightgrey" | "lightgray" => return Ok(Rgb::LIGHT_GREY),
            "blue" => return Ok(Rgb::BLUE),
            "purple" => return Ok(Rgb::PURPLE),
            "green" => return Ok(Rgb::GREEN),
            "white" => return Ok(Rgb::WHITE),
            _ => {}
        }
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| format!("invalid color: {s:?}"))?;
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| format!("invalid color: {s:?}"))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
