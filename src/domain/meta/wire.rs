//! Wire types for the metadata endpoints.

use serde::{Deserialize, Serialize};

/// `GET /generate` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointsResponse {
    pub endpoints: EndpointLists,
}

/// Generator names available to each account tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointLists {
    #[serde(default)]
    pub free: Vec<String>,
    #[serde(default)]
    pub premium: Vec<String>,
}

/// `GET /image/wallpaper` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallpaperResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_response_deserialize() {
        let json = r#"{"endpoints": {"free": ["a"], "premium": ["b", "c"]}, "status": 200}"#;
        let resp: EndpointsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.endpoints.free, vec!["a"]);
        assert_eq!(resp.endpoints.premium, vec!["b", "c"]);
    }

    #[test]
    fn test_endpoints_response_missing_tier() {
        let json = r#"{"endpoints": {"free": ["a"]}}"#;
        let resp: EndpointsResponse = serde_json::from_str(json).unwrap();
        assert!(resp.endpoints.premium.is_empty());
    }

    #[test]
    fn test_wallpaper_response_deserialize() {
        let json = r#"{"url": "https://cdn.example/w.png"}"#;
        let resp: WallpaperResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.url, "https://cdn.example/w.png");
    }
}
