use serde::{Deserialize, Serialize};

use crate::features::farms::errors::FarmError;

/// Ordered, duplicate-free list of normalized crop names.
///
/// Every entry is trimmed and lower-cased, so "Wheat", " wheat " and "WHEAT"
/// all refer to the same crop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CropTypes(Vec<String>);

impl CropTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw values, normalizing each one and dropping repeats.
    pub fn from_values<I, S>(values: I) -> Result<Self, FarmError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut crops = Self::new();
        for value in values {
            crops.add(value.as_ref())?;
        }
        Ok(crops)
    }

    /// Trim and lower-case a crop name. `None` when nothing is left.
    pub fn normalize(value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// Append a crop, keeping insertion order. Returns `false` if it was already present.
    pub fn add(&mut self, value: &str) -> Result<bool, FarmError> {
        let crop = Self::normalize(value)
            .ok_or_else(|| FarmError::invalid_argument("Crop type must not be blank"))?;

        if self.0.contains(&crop) {
            return Ok(false);
        }

        self.0.push(crop);
        Ok(true)
    }

    pub fn remove(&mut self, value: &str) -> bool {
        let Some(crop) = Self::normalize(value) else {
            return false;
        };

        match self.0.iter().position(|c| *c == crop) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        Self::normalize(value).is_some_and(|crop| self.0.contains(&crop))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'de> Deserialize<'de> for CropTypes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        CropTypes::from_values(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_normalizes_and_deduplicates() {
        let mut crops = CropTypes::new();

        assert_eq!(crops.add("Wheat"), Ok(true));
        assert_eq!(crops.add("  wheat "), Ok(false));
        assert_eq!(crops.len(), 1);
        assert!(crops.contains("WHEAT"));
        assert_eq!(crops.as_slice(), &["wheat".to_string()]);
    }

    #[test]
    fn test_add_rejects_blank_values() {
        let mut crops = CropTypes::new();

        assert!(matches!(crops.add(""), Err(FarmError::InvalidArgument(_))));
        assert!(matches!(crops.add("   "), Err(FarmError::InvalidArgument(_))));
        assert!(crops.is_empty());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let crops = CropTypes::from_values(["Rice", "corn", "TOMATO", "rice"]).unwrap();

        assert_eq!(crops.iter().collect::<Vec<_>>(), vec!["rice", "corn", "tomato"]);
    }

    #[test]
    fn test_remove_missing_or_blank_returns_false() {
        let mut crops = CropTypes::from_values(["wheat"]).unwrap();

        assert!(!crops.remove("corn"));
        assert!(!crops.remove("  "));
        assert_eq!(crops.len(), 1);

        assert!(crops.remove(" Wheat"));
        assert!(crops.is_empty());
    }

    #[test]
    fn test_deserialize_normalizes_input() {
        let crops: CropTypes = serde_json::from_str(r#"["Maize", "maize ", "Soy"]"#).unwrap();

        assert_eq!(crops.iter().collect::<Vec<_>>(), vec!["maize", "soy"]);
    }

    #[test]
    fn test_deserialize_rejects_blank_entry() {
        let result = serde_json::from_str::<CropTypes>(r#"["maize", " "]"#);

        assert!(result.is_err());
    }
}
