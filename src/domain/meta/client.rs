//! Meta sub-client: endpoint listings and random wallpapers.

use crate::client::AmethysteClient;
use crate::domain::meta::wire::{EndpointsResponse, WallpaperResponse};
use crate::domain::meta::EndpointLists;
use crate::endpoints;
use crate::error::SdkResult;
use crate::shared::Params;

/// Sub-client for metadata lookups.
pub struct Meta<'a> {
    pub(crate) client: &'a AmethysteClient,
}

impl<'a> Meta<'a> {
    /// Both tiers of generator names in one request.
    pub async fn endpoints(&self) -> SdkResult<EndpointLists> {
        let value = self
            .client
            .http
            .call(&endpoints::LIST_ENDPOINTS, &Params::new())
            .await?
            .into_json()?;
        let resp: EndpointsResponse = serde_json::from_value(value)?;
        Ok(resp.endpoints)
    }

    /// Generators usable with a free API key.
    pub async fn free_endpoints(&self) -> SdkResult<Vec<String>> {
        Ok(self.endpoints().await?.free)
    }

    /// Generators that need a premium API key.
    pub async fn premium_endpoints(&self) -> SdkResult<Vec<String>> {
        Ok(self.endpoints().await?.premium)
    }

    /// URL of a random wallpaper.
    pub async fn random_wallpaper(&self) -> SdkResult<String> {
        let value = self
            .client
            .http
            .call(&endpoints::RANDOM_WALLPAPER, &Params::new())
            .await?
            .into_json()?;
        let resp: WallpaperResponse = serde_json::from_value(value)?;
        Ok(resp.url)
    }
}
