// SPDX-License-Identifier: MPL-2.0
//! The painting catalog and the remote hero-background asset.
//!
//! The four showcased paintings are embedded into the binary so packaging
//! never has to locate loose asset files. Each entry is decoded once at
//! startup to learn its pixel dimensions; the decoded handle is then shared
//! by the grid cards and the lightbox. Catalog order is display order.

use crate::error::Error;
use iced::widget::image;
use image_rs::GenericImageView;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/paintings/"]
struct PaintingAssets;

/// Background image for the hero banner. Loaded over the network at startup;
/// when unreachable the hero simply renders without a backdrop.
pub const HERO_BACKGROUND_URL: &str =
    "https://images.unsplash.com/photo-1601331979629-d39e1c8883c4?ixlib=rb-4.0.3&auto=format&fit=crop&w=1600&q=80";

/// One showcased painting.
#[derive(Debug, Clone)]
pub struct Painting {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

struct CatalogEntry {
    id: u32,
    title: &'static str,
    description: &'static str,
    asset: &'static str,
}

const CATALOG: [CatalogEntry; 4] = [
    CatalogEntry {
        id: 1,
        title: "Mirror Selfie #1",
        description: "Testing local images (first mirror photo).",
        asset: "painting-01.png",
    },
    CatalogEntry {
        id: 2,
        title: "Mirror Selfie #2",
        description: "Another local image (the gold mirror).",
        asset: "painting-02.png",
    },
    CatalogEntry {
        id: 3,
        title: "Kitchen Prep",
        description: "Local image showing a cooking session in the kitchen.",
        asset: "painting-03.png",
    },
    CatalogEntry {
        id: 4,
        title: "Fried Rice",
        description: "Local image of the finished dish, fried rice.",
        asset: "painting-04.png",
    },
];

/// Builds the painting list from the embedded assets, in catalog order.
///
/// An entry whose asset is missing or undecodable is skipped with a warning
/// rather than aborting startup; the remaining paintings keep their order.
pub fn paintings() -> Vec<Painting> {
    CATALOG
        .iter()
        .filter_map(|entry| {
            let Some(file) = PaintingAssets::get(entry.asset) else {
                log::warn!("painting asset {} is missing from the build", entry.asset);
                return None;
            };
            let data = file.data.into_owned();
            let (width, height) = match image_rs::load_from_memory(&data) {
                Ok(decoded) => decoded.dimensions(),
                Err(err) => {
                    log::warn!("painting asset {} failed to decode: {}", entry.asset, err);
                    return None;
                }
            };
            Some(Painting {
                id: entry.id,
                title: entry.title.to_string(),
                description: entry.description.to_string(),
                handle: image::Handle::from_bytes(data),
                width,
                height,
            })
        })
        .collect()
}

/// Fetches the hero background image over HTTPS.
///
/// There is deliberately no retry and no local fallback; the caller treats
/// any error as "render the hero without a backdrop".
pub async fn fetch_hero_background(url: String) -> crate::error::Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .user_agent(crate::HTTP_USER_AGENT)
        .build()
        .map_err(|e| Error::Http(e.to_string()))?;

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| Error::Http(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Http(format!("HTTP status: {}", response.status())));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Http(e.to_string()))?;

    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_four_paintings_in_order() {
        let paintings = paintings();
        assert_eq!(paintings.len(), 4);
        let ids: Vec<u32> = paintings.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn catalog_ids_are_unique() {
        let paintings = paintings();
        let mut ids: Vec<u32> = paintings.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), paintings.len());
    }

    #[test]
    fn catalog_titles_and_descriptions_are_verbatim() {
        let paintings = paintings();
        assert_eq!(paintings[0].title, "Mirror Selfie #1");
        assert_eq!(
            paintings[0].description,
            "Testing local images (first mirror photo)."
        );
        assert_eq!(paintings[3].title, "Fried Rice");
    }

    #[test]
    fn embedded_assets_decode_with_real_dimensions() {
        for painting in paintings() {
            assert!(painting.width > 0, "{} has zero width", painting.title);
            assert!(painting.height > 0, "{} has zero height", painting.title);
        }
    }

    #[tokio::test]
    async fn fetch_rejects_a_malformed_url_without_touching_the_network() {
        let result = fetch_hero_background("definitely not a url".to_string()).await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
