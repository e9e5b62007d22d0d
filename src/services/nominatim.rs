//! Reverse-Geocoding über eine Nominatim-kompatible HTTP-API.

use super::{GeoNameResolver, IntentSender, NameRequestId, ServiceError};
use crate::app::AppIntent;
use crate::core::LatLng;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Option<Address>,
}

#[derive(Debug, Default, Deserialize)]
struct Address {
    town: Option<String>,
    city: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

/// Baut die Ortsbezeichnung aus einer Reverse-Antwort.
///
/// Format: `"{Ort}, {Gemeinde}, {Region} {Land}"`, getrimmt. Der Ort ist der
/// erste nicht-leere Wert aus town/city/village/municipality, sonst `fallback`.
/// Fehlt das `address`-Objekt ganz, ist das Ergebnis `fallback`.
pub fn place_label_from_response(body: &str, fallback: &str) -> Result<String, ServiceError> {
    let response: ReverseResponse = serde_json::from_str(body)?;
    let Some(address) = response.address else {
        return Ok(fallback.to_string());
    };

    fn non_empty(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| !v.is_empty())
    }

    let primary = non_empty(&address.town)
        .or_else(|| non_empty(&address.city))
        .or_else(|| non_empty(&address.village))
        .or_else(|| non_empty(&address.municipality))
        .unwrap_or(fallback);

    let label = format!(
        "{}, {}, {} {}",
        primary,
        non_empty(&address.municipality).unwrap_or(""),
        non_empty(&address.state).unwrap_or(""),
        non_empty(&address.country).unwrap_or(""),
    );
    Ok(label.trim().to_string())
}

/// [`GeoNameResolver`] auf einem Worker-Thread pro Anfrage.
pub struct NominatimResolver {
    client: reqwest::blocking::Client,
    base_url: String,
    fallback: String,
    sender: IntentSender,
}

impl NominatimResolver {
    /// Erstellt den Resolver mit eigenem HTTP-Client.
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout: Duration,
        fallback: &str,
        sender: IntentSender,
    ) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            fallback: fallback.to_string(),
            sender,
        })
    }

    fn fetch(
        client: &reqwest::blocking::Client,
        base_url: &str,
        fallback: &str,
        position: LatLng,
    ) -> Result<String, ServiceError> {
        let body = client
            .get(format!("{base_url}/reverse"))
            .query(&[
                ("format", "json".to_string()),
                ("lat", position.lat.to_string()),
                ("lon", position.lng.to_string()),
            ])
            .send()?
            .error_for_status()?
            .text()?;
        place_label_from_response(&body, fallback)
    }
}

impl GeoNameResolver for NominatimResolver {
    fn request_place_name(&mut self, request: NameRequestId, position: LatLng) {
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let fallback = self.fallback.clone();
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            let outcome = Self::fetch(&client, &base_url, &fallback, position).map_err(|e| {
                log::warn!("Ortsname für {} nicht ermittelbar: {}", position, e);
                e.to_string()
            });
            if sender
                .send(AppIntent::PlaceNameResolved { request, outcome })
                .is_err()
            {
                log::debug!("Ortsname verworfen: Host-Kanal geschlossen");
            }
        });
    }
}
